/*
 * // Copyright (c) Radzivon Bartoshyk 4/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::math::atan::{PI_OVER_2, atan_poly};
use crate::math::common::{lane_fallback2, zeroinfnan_lanes};
use crate::simd::{SimdBits, SimdF64};

/// Computes `atan(y / x)` in the quadrant given by the signs of both
/// arguments, for every lane.
///
/// The reduced ratio is always at most 1 in magnitude, the octant supplies a
/// multiple of pi/2. Zero, infinite or NaN operands are resolved per lane by
/// the scalar routine.
///
/// Max found ULP 2.8
#[inline]
pub fn atan2_simd<V: SimdF64>(y: V, x: V) -> V {
    let special = zeroinfnan_lanes(x) | zeroinfnan_lanes(y);

    let ax = x.abs();
    let ay = y.abs();
    let sign_xy = (x.as_bits() ^ y.as_bits()) & V::Bits::splat(0x8000000000000000);

    let x_neg = x.cmp_lt(V::splat(0.0));
    let ay_gt_ax = ay.cmp_gt(ax);

    let n = V::select(ay_gt_ax, -ax, ay);
    let d = V::select(ay_gt_ax, ay, ax);
    let z = n / d;

    // quadrant offset in units of pi/2
    let shift = V::from_raw(x_neg & V::splat(-2.0).as_bits());
    let shift = V::select(ay_gt_ax, shift + V::splat(1.0), shift) * V::splat(PI_OVER_2);

    let r = atan_poly(z) + shift;
    let r = V::from_raw(r.as_bits() ^ sign_xy);
    if special.any() {
        return lane_fallback2(y, x, r, special, libm::atan2);
    }
    r
}

/// Computes `atan(y / x)` using the signs of both arguments to pick the
/// quadrant.
///
/// Max found ULP 2.8
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    atan2_simd(y, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::assert_lanes_f64;
    use crate::simd::{F64x2, SimdFloat};
    use crate::ulp_distance_f64;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_atan2() {
        let mut rng = StdRng::seed_from_u64(0xa7a2);
        for _ in 0..100000 {
            let y: f64 = rng.random_range(-100.0..100.0);
            let x: f64 = rng.random_range(-100.0..100.0);
            let v = atan2(y, x);
            let want = y.atan2(x);
            assert!(
                ulp_distance_f64(v, want) <= 4,
                "Invalid result {} for ({}, {}), expected {}",
                v,
                y,
                x,
                want
            );
        }
        for (y, x) in [(1e-300, 1.0), (1.0, 1e-300), (-1e-300, -1.0), (3.0, -3.0), (1e300, -1e-10)] {
            let v = atan2(y, x);
            let want = y.atan2(x);
            assert!(ulp_distance_f64(v, want) <= 4, "Invalid result {} for ({}, {})", v, y, x);
        }
    }

    #[test]
    fn test_atan2_special() {
        let pi = std::f64::consts::PI;
        assert_eq!(atan2(0.0, 0.0).to_bits(), 0);
        assert_eq!(atan2(-0.0, 0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(atan2(0.0, -0.0), pi);
        assert_eq!(atan2(-0.0, -0.0), -pi);
        assert_eq!(atan2(0.0, -1.0), pi);
        assert_eq!(atan2(1.0, 0.0), PI_OVER_2);
        assert_eq!(atan2(f64::INFINITY, f64::INFINITY), pi / 4.0);
        assert_eq!(atan2(1.0, f64::NEG_INFINITY), pi);
        assert!(atan2(f64::NAN, 1.0).is_nan());
        assert!(atan2(1.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_atan2_lanes() {
        let ys = F64x2::from_array([1.0, -0.0]);
        let xs = F64x2::from_array([-2.0, 5.0]);
        let r = atan2_simd(ys, xs).to_array();
        assert_eq!(r[0], atan2(1.0, -2.0));
        assert_eq!(r[1].to_bits(), (-0.0f64).to_bits());
        let inputs = [0.5, -3.0, 0.0, f64::NAN, 1e10, -2.0, f64::INFINITY, 1e-310, 1.0];
        assert_lanes_f64(
            |v| atan2(v, 0.75),
            |v| atan2_simd(v, <F64x2 as SimdFloat>::splat(0.75)),
            |v| atan2_simd(v, SimdFloat::splat(0.75)),
            &inputs,
        );
        assert_lanes_f64(
            |v| atan2(-1.5, v),
            |v| atan2_simd(<F64x2 as SimdFloat>::splat(-1.5), v),
            |v| atan2_simd(SimdFloat::splat(-1.5), v),
            &inputs,
        );
    }
}

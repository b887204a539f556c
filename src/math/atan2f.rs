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
use crate::math::atanf::{PI_OVER_2F, atanf_poly};
use crate::math::common::{lane_fallback2, zeroinfnanf_lanes};
use crate::simd::{SimdBits, SimdF32};

/// Computes `atan(y / x)` in the quadrant given by the signs of both
/// arguments, for every lane.
///
/// Max found ULP 2.95
#[inline]
pub fn atan2f_simd<V: SimdF32>(y: V, x: V) -> V {
    let special = zeroinfnanf_lanes(x) | zeroinfnanf_lanes(y);

    let ax = x.abs();
    let ay = y.abs();
    let sign_xy = (x.as_bits() ^ y.as_bits()) & V::Bits::splat(0x80000000);

    let x_neg = x.cmp_lt(V::splat(0.0));
    let ay_gt_ax = ay.cmp_gt(ax);

    let n = V::select(ay_gt_ax, -ax, ay);
    let d = V::select(ay_gt_ax, ay, ax);
    let z = n / d;

    let shift = V::from_raw(x_neg & V::splat(-2.0).as_bits());
    let shift = V::select(ay_gt_ax, shift + V::splat(1.0), shift) * V::splat(PI_OVER_2F);

    let r = atanf_poly(z) + shift;
    let r = V::from_raw(r.as_bits() ^ sign_xy);
    if special.any() {
        return lane_fallback2(y, x, r, special, libm::atan2f);
    }
    r
}

/// Computes `atan(y / x)` using the signs of both arguments to pick the
/// quadrant.
///
/// Max found ULP 2.95
#[inline]
pub fn atan2f(y: f32, x: f32) -> f32 {
    atan2f_simd(y, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::assert_lanes_f32;
    use crate::simd::{F32x4, SimdFloat};
    use crate::ulp_distance_f32;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_atan2f() {
        let mut rng = StdRng::seed_from_u64(0xa7a2);
        for _ in 0..100000 {
            let y: f32 = rng.random_range(-100.0..100.0);
            let x: f32 = rng.random_range(-100.0..100.0);
            let v = atan2f(y, x);
            let want = (y as f64).atan2(x as f64) as f32;
            assert!(
                ulp_distance_f32(v, want) <= 4,
                "Invalid result {} for ({}, {}), expected {}",
                v,
                y,
                x,
                want
            );
        }
    }

    #[test]
    fn test_atan2f_special() {
        let pi = std::f32::consts::PI;
        assert_eq!(atan2f(-0.0, 0.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(atan2f(0.0, -0.0), pi);
        assert_eq!(atan2f(-1.0, f32::NEG_INFINITY), -pi);
        assert_eq!(atan2f(1.0, 0.0), PI_OVER_2F);
        assert!(atan2f(f32::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_atan2f_lanes() {
        let ys = F32x4::from_array([1.0, -0.0, 3.0, -7.0]);
        let xs = F32x4::from_array([-2.0, 5.0, 0.0, -1e-3]);
        let r = atan2f_simd(ys, xs).to_array();
        assert_eq!(r[0], atan2f(1.0, -2.0));
        assert_eq!(r[1].to_bits(), (-0.0f32).to_bits());
        assert_eq!(r[2], atan2f(3.0, 0.0));
        assert_eq!(r[3], atan2f(-7.0, -1e-3));
        let inputs = [0.5f32, -3.0, 0.0, f32::NAN, 1e10, -2.0, f32::INFINITY, 1e-40, 1.0];
        assert_lanes_f32(
            |v| atan2f(v, 0.75),
            |v| atan2f_simd(v, <F32x4 as SimdFloat>::splat(0.75)),
            |v| atan2f_simd(v, SimdFloat::splat(0.75)),
            &inputs,
        );
    }
}

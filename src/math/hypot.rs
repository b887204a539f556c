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
use crate::math::common::{lane_fallback2, ubits};
use crate::math::math_err::oflow;
use crate::simd::{SimdBits, SimdF64};

/// `asuint64(0x1p-969)`, smaller sums lose bits to underflow
const TINY_BOUND: u64 = 0x0360000000000000;
/// `asuint64(inf) - TINY_BOUND`
const THRESH: u64 = 0x7c90000000000000;

#[cold]
fn hypot_special(x: f64, y: f64) -> f64 {
    let r = libm::hypot(x, y);
    if r.is_infinite() && x.is_finite() && y.is_finite() {
        return oflow(false, "hypot");
    }
    r
}

/// Computes `sqrt(x^2 + y^2)` for every lane.
///
/// Sums of squares that underflow or overflow are recomputed per lane with
/// scaling.
///
/// Max found ULP 1.21
#[inline]
pub fn hypot_simd<V: SimdF64>(x: V, y: V) -> V {
    let sqsum = (x * x).fma(y, y);
    let special = (sqsum.as_bits() - ubits::<V>(TINY_BOUND)).cmp_ge(ubits::<V>(THRESH));
    let r = sqsum.sqrt();
    if special.any() {
        return lane_fallback2(x, y, r, special, hypot_special);
    }
    r
}

/// Computes `sqrt(x^2 + y^2)` without undue overflow or underflow
///
/// Max found ULP 1.21
#[inline]
pub fn hypot(x: f64, y: f64) -> f64 {
    hypot_simd(x, y)
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
    fn test_hypot() {
        let mut rng = StdRng::seed_from_u64(0x4790);
        for _ in 0..100000 {
            let x: f64 = rng.random_range(-100.0..100.0);
            let y: f64 = rng.random_range(-100.0..100.0);
            let v = hypot(x, y);
            let want = libm::hypot(x, y);
            assert!(ulp_distance_f64(v, want) <= 3, "Invalid result {} for ({}, {})", v, x, y);
        }
        let pairs = [
            (1e200, 1e200),
            (1e-200, 3e-200),
            (f64::from_bits(0x3336a1b193ff85b5), f64::from_bits(0x321bc50676c2a447)),
            (5e-324, 1e-320),
            (f64::MAX, 1.0),
        ];
        for (x, y) in pairs {
            let v = hypot(x, y);
            let want = libm::hypot(x, y);
            assert!(ulp_distance_f64(v, want) <= 3, "Invalid result {} for ({}, {})", v, x, y);
        }
    }

    #[test]
    fn test_hypot_special() {
        assert_eq!(hypot(0.0, -0.0).to_bits(), 0);
        assert_eq!(hypot(-3.0, 4.0), 5.0);
        assert_eq!(hypot(f64::NAN, f64::INFINITY), f64::INFINITY);
        assert_eq!(hypot(f64::NEG_INFINITY, 1.0), f64::INFINITY);
        assert!(hypot(f64::NAN, 1.0).is_nan());
        assert_eq!(hypot(f64::MAX, f64::MAX), f64::INFINITY);
    }

    #[test]
    fn test_hypot_lanes() {
        let xs = F64x2::from_array([3.0, 1e300]);
        let ys = F64x2::from_array([-4.0, 1e300]);
        let r = hypot_simd(xs, ys).to_array();
        assert_eq!(r[0], 5.0);
        assert_eq!(r[1], libm::hypot(1e300, 1e300));
        let inputs = [0.5, -3.0, 0.0, f64::NAN, 1e300, -2.0, f64::INFINITY, 1e-310, 1.0];
        assert_lanes_f64(
            |v| hypot(v, 0.75),
            |v| hypot_simd(v, <F64x2 as SimdFloat>::splat(0.75)),
            |v| hypot_simd(v, SimdFloat::splat(0.75)),
            &inputs,
        );
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_hypot_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        assert_eq!(hypot(1e300, 1e300), libm::hypot(1e300, 1e300));
        assert_eq!(last_error(), None);
        assert_eq!(hypot(f64::MAX, f64::MAX), f64::INFINITY);
        assert_eq!(take_last_error(), Some(MathError::Overflow));
        assert_eq!(hypot(f64::INFINITY, 1.0), f64::INFINITY);
        assert_eq!(last_error(), None);
    }
}

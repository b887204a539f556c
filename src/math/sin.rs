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
use crate::math::common::lane_fallback;
use crate::math::exp::SHIFT;
use crate::math::math_err::invalid;
use crate::math::poly::pairwise_horner;
use crate::simd::{SimdBits, SimdF64};

/// Past this the three part pi loses the reduction
pub(crate) const RANGE_VAL: f64 = 8388608.0;
pub(crate) const INV_PI: f64 = f64::from_bits(0x3fd45f306dc9c883);
/// pi as three parts
pub(crate) const PI_1: f64 = f64::from_bits(0x400921fb54442d18);
pub(crate) const PI_2: f64 = f64::from_bits(0x3ca1a62633145c06);
pub(crate) const PI_3: f64 = f64::from_bits(0x395c1cd129024e09);

/// `(sin(r) - r) / r^3` in `r^2` on `[-pi/2, pi/2]`
const C: [u64; 8] = [
    0xbfc5555555555555, // -0x1.5555555555555p-3
    0x3f811111111110c1, // 0x1.11111111110c1p-7
    0xbf2a01a01a01443b, // -0x1.a01a01a01443bp-13
    0x3ec71de3a52583da, // 0x1.71de3a52583dap-19
    0xbe5ae6454b14b527, // -0x1.ae6454b14b527p-26
    0x3de6123c3ff0435c, // 0x1.6123c3ff0435cp-33
    0xbd6ae4128fa984dd, // -0x1.ae4128fa984ddp-41
    0x3ce87f39c7fd3424, // 0x1.87f39c7fd3424p-49
];

/// Large and non-finite arguments
#[cold]
fn sin_special(x: f64) -> f64 {
    if x.is_finite() {
        return libm::sin(x);
    }
    invalid(x, "sin")
}

/// Computes sine for every lane.
///
/// Max found ULP 3.23
#[inline]
pub fn sin_simd<V: SimdF64>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let special = !ax.cmp_lt(V::splat(RANGE_VAL));

    // n = rint(|x| / pi)
    let z = V::splat(SHIFT).fma(V::splat(INV_PI), ax);
    let odd = z.as_bits().shl(63);
    let n = z - V::splat(SHIFT);

    // r = |x| - n pi in [-pi/2, pi/2]
    let r = ax
        .fms(V::splat(PI_1), n)
        .fms(V::splat(PI_2), n)
        .fms(V::splat(PI_3), n);

    let r2 = r * r;
    let r4 = r2 * r2;
    let y = r.fma(pairwise_horner(r2, r4, &C), r2 * r);
    let y = V::from_raw(y.as_bits() ^ odd ^ sign);
    if special.any() {
        return lane_fallback(x, y, special, sin_special);
    }
    y
}

/// Computes sine
///
/// Max found ULP 3.23
#[inline]
pub fn sin(x: f64) -> f64 {
    sin_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64, around_f64};
    use crate::ulp_distance_f64;

    #[test]
    fn test_sin() {
        assert_ulp_f64(sin, f64::sin, -10.0, 10.0, 50000, 5);
        assert_ulp_f64(sin, f64::sin, -1e-3, 1e-3, 10000, 5);
        assert_ulp_f64(sin, f64::sin, 1e3, 1e6, 20000, 5);
        assert_ulp_f64(sin, f64::sin, 8e6, 8.4e6, 20000, 5);
    }

    #[test]
    fn test_sin_large() {
        for x in [1e7, 8388608.0, 1e10, 1e22, 1e300, f64::MAX] {
            let v = sin(x);
            let want = x.sin();
            assert!(ulp_distance_f64(v, want) <= 2, "Invalid result {} for {}", v, x);
        }
        for x in around_f64(RANGE_VAL) {
            let v = sin(x);
            assert!(ulp_distance_f64(v, x.sin()) <= 5, "Invalid result {} for {}", v, x);
        }
    }

    #[test]
    fn test_sin_special() {
        assert_eq!(sin(0.0).to_bits(), 0);
        assert_eq!(sin(-0.0).to_bits(), (-0.0f64).to_bits());
        assert!(sin(f64::INFINITY).is_nan());
        assert!(sin(f64::NEG_INFINITY).is_nan());
        assert!(sin(f64::NAN).is_nan());
        let tiny = f64::from_bits(1);
        assert_eq!(sin(tiny), tiny);
        for x in [0.3, 1.7, 42.0, 1e5] {
            assert_eq!(sin(-x).to_bits(), (-sin(x)).to_bits(), "Invalid result for {}", x);
        }
    }

    #[test]
    fn test_sin_lanes() {
        let inputs = [0.5, -3.0, 0.0, f64::NAN, 1e10, -2.0, f64::INFINITY, 1e-310, 7.5];
        assert_lanes_f64(sin, sin_simd, sin_simd, &inputs);
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_sin_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        assert!(sin(1e10).abs() <= 1.0);
        assert_eq!(last_error(), None);
        assert!(sin(f64::INFINITY).is_nan());
        assert_eq!(take_last_error(), Some(MathError::Domain));
    }
}

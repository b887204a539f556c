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
use crate::math::atan::PI_OVER_2;
use crate::math::common::lane_fallback;
use crate::math::math_err::invalid;
use crate::math::poly::estrin;
use crate::simd::{SimdBits, SimdF64};

/// `(asin(sqrt(z)) - sqrt(z)) / z^(3/2)` on `[0x1p-106, 0x1p-2]`
const POLY: [u64; 12] = [
    0x3fc555555555554e, // 0x1.555555555554ep-3
    0x3fb3333333337233, // 0x1.3333333337233p-4
    0x3fa6db6db67f6d9f, // 0x1.6db6db67f6d9fp-5
    0x3f9f1c71fbd29fbb, // 0x1.f1c71fbd29fbbp-6
    0x3f96e8b264d467d6, // 0x1.6e8b264d467d6p-6
    0x3f91c5997c357e9d, // 0x1.1c5997c357e9dp-6
    0x3f8c86a22cd9389d, // 0x1.c86a22cd9389dp-7
    0x3f8856073c22ebbe, // 0x1.856073c22ebbep-7
    0x3f7fd1151acb6bed, // 0x1.fd1151acb6bedp-8
    0x3f9087182f799c1d, // 0x1.087182f799c1dp-6
    0xbf86602748120927, // -0x1.6602748120927p-7
    0x3f9cfa0dd1f94780, // 0x1.cfa0dd1f9478p-6
];

/// `z + z z2 P(z2)`, asin of `z` for `z2 = z^2 <= 1/4`
#[inline(always)]
pub(crate) fn asin_poly<V: SimdF64>(z: V, z2: V) -> V {
    let z4 = z2 * z2;
    z.fma(z * z2, estrin(z2, z4, &POLY))
}

#[cold]
pub(crate) fn asin_special(x: f64, func: &'static str) -> f64 {
    if x.is_nan() {
        return x + x;
    }
    invalid(x, func)
}

/// Computes arcsine for every lane.
///
/// From 1/2 on `asin(x) = pi/2 - 2 asin(sqrt((1 - x) / 2))`.
///
/// Max found ULP 2.69
#[inline]
pub fn asin_simd<V: SimdF64>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let special = !ax.cmp_le(V::splat(1.0));

    let a_lt_half = ax.cmp_lt(V::splat(0.5));
    let half = V::splat(0.5);
    let z2 = V::select(a_lt_half, x * x, half.fms(ax, half));
    let z = V::select(a_lt_half, ax, z2.sqrt());
    let p = asin_poly(z, z2);

    let y = V::select(a_lt_half, p, V::splat(PI_OVER_2).fms(p, V::splat(2.0)));
    let y = V::from_raw(y.as_bits() | sign);
    if special.any() {
        return lane_fallback(x, y, special, |v| asin_special(v, "asin"));
    }
    y
}

/// Computes arcsine
///
/// Max found ULP 2.69
#[inline]
pub fn asin(x: f64) -> f64 {
    asin_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_asin() {
        assert_ulp_f64(asin, libm::asin, -1.0, 1.0, 100000, 4);
        assert_ulp_f64(asin, libm::asin, -1e-6, 1e-6, 2000, 4);
        assert_ulp_f64(asin, libm::asin, 0.999, 1.0, 5000, 4);
        let x = f64::from_bits(0x3fe044e8cefee301);
        let v = asin(x);
        assert!(crate::ulp_distance_f64(v, libm::asin(x)) <= 4, "Invalid result {}", v);
    }

    #[test]
    fn test_asin_special() {
        assert_eq!(asin(0.0).to_bits(), 0);
        assert_eq!(asin(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(asin(1.0), PI_OVER_2);
        assert_eq!(asin(-1.0), -PI_OVER_2);
        assert_eq!(asin(5e-324), 5e-324);
        assert!(asin(1.0000000000000002).is_nan());
        assert!(asin(f64::NEG_INFINITY).is_nan());
        assert!(asin(f64::NAN).is_nan());
    }

    #[test]
    fn test_asin_lanes() {
        let inputs = [0.5, -0.75, 1.0, f64::NAN, 2.0, -0.0, f64::INFINITY, 1e-310, 0.25];
        assert_lanes_f64(asin, asin_simd, asin_simd, &inputs);
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_asin_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        assert_eq!(asin(1.0), PI_OVER_2);
        assert_eq!(last_error(), None);
        assert!(asin(-2.0).is_nan());
        assert_eq!(take_last_error(), Some(MathError::Domain));
        assert!(asin(f64::NAN).is_nan());
        assert_eq!(last_error(), None);
    }
}

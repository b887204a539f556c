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
use crate::math::poly::estrin;
use crate::simd::{SimdBits, SimdF64};

/// Past this the two part reduction loses bits
const RANGE_VAL: f64 = f64::from_bits(0x4160000000000000);
const INV_HALF_PI: f64 = f64::from_bits(0x3fe45f306dc9c883);
const HALF_PI_HI: f64 = f64::from_bits(0x3ff921fb54442d18);
const HALF_PI_LO: f64 = f64::from_bits(0x3c91a62633145c07);
/// Below `2^-27` tan(x) rounds to x
const TINY: f64 = f64::from_bits(0x3e40000000000000);

/// `(tan(r) - r) / r^3` in `r^2` on `[-pi/8, pi/8]`
const POLY: [u64; 9] = [
    0x3fd5555555555556, // 0x1.5555555555556p-2
    0x3fc1111111110a63, // 0x1.1111111110a63p-3
    0x3faba1ba1bb46414, // 0x1.ba1ba1bb46414p-5
    0x3f9664f47e5b5445, // 0x1.664f47e5b5445p-6
    0x3f8226e5e5ecdfa3, // 0x1.226e5e5ecdfa3p-7
    0x3f6d6c7ddbf87047, // 0x1.d6c7ddbf87047p-9
    0x3f57ea75d05b583e, // 0x1.7ea75d05b583ep-10
    0x3f4289f22964a03c, // 0x1.289f22964a03cp-11
    0x3f34e4fd14147622, // 0x1.4e4fd14147622p-12
];

#[cold]
fn tan_special(x: f64) -> f64 {
    if x.is_nan() {
        return x + x;
    }
    if x.is_infinite() {
        return invalid(x, "tan");
    }
    libm::tan(x)
}

/// Computes tangent for every lane.
///
/// `x = q pi/2 + 2r` with `|r| <= pi/8`, then `tan(2r)` from the double
/// angle formula, or `-cot(2r)` for odd `q`.
///
/// Max found ULP 3.48
#[inline]
pub fn tan_simd<V: SimdF64>(x: V) -> V {
    let special = !x.abs().cmp_lt(V::splat(RANGE_VAL));

    let shift = V::splat(SHIFT);
    let q = shift.fma(x, V::splat(INV_HALF_PI)) - shift;
    let qi = q.cvt_to_int();

    let r = x.fms(q, V::splat(HALF_PI_HI)).fms(q, V::splat(HALF_PI_LO));
    let r = r * V::splat(0.5);

    let r2 = r * r;
    let r4 = r2 * r2;
    let p = estrin(r2, r4, &POLY[1..]);
    let p = V::splat(f64::from_bits(POLY[0])).fma(p, r2);
    let p = r.fma(r2, p * r);

    // tan(2r) = 2 tan(r) / (1 - tan(r)^2)
    let one = V::Bits::splat(1);
    let even = (qi & one).cmp_eq(V::Bits::splat(0));
    let n = V::splat(-1.0).fma(p, p);
    let d = p * V::splat(2.0);
    let y = V::select(even, -d, n) / V::select(even, n, d);
    let y = V::select(x.abs().cmp_lt(V::splat(TINY)), x, y);

    if special.any() {
        return lane_fallback(x, y, special, tan_special);
    }
    y
}

/// Computes tangent
///
/// Max found ULP 3.48
#[inline]
pub fn tan(x: f64) -> f64 {
    tan_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{around_f64, assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_tan() {
        assert_ulp_f64(tan, libm::tan, -3.1, 3.1, 100000, 5);
        assert_ulp_f64(tan, libm::tan, -1e-8, 1e-8, 2000, 5);
        assert_ulp_f64(tan, libm::tan, 100.0, 8e6, 50000, 5);
        let x = f64::from_bits(0x4134457047ef78d8);
        let v = tan(x);
        assert!(crate::ulp_distance_f64(v, libm::tan(x)) <= 5, "Invalid result {}", v);
    }

    #[test]
    fn test_tan_special() {
        assert_eq!(tan(0.0).to_bits(), 0);
        assert_eq!(tan(-0.0).to_bits(), (-0.0f64).to_bits());
        assert!(tan(f64::INFINITY).is_nan());
        assert!(tan(f64::NEG_INFINITY).is_nan());
        assert!(tan(f64::NAN).is_nan());
        assert_eq!(tan(1e-300), 1e-300);
        assert_eq!(tan(-5e-324), -5e-324);
        for x in around_f64(RANGE_VAL).into_iter().chain([1e22, 1e300]) {
            let v = tan(x);
            let want = libm::tan(x);
            assert!(crate::ulp_distance_f64(v, want) <= 5, "Invalid result {} for {}", v, x);
        }
    }

    #[test]
    fn test_tan_lanes() {
        let inputs = [0.5, -3.0, 1.5707963267948966, f64::NAN, 1e10, -0.0, f64::INFINITY];
        assert_lanes_f64(tan, tan_simd, tan_simd, &inputs);
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_tan_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        let _ = tan(1e10);
        assert_eq!(last_error(), None);
        assert!(tan(f64::INFINITY).is_nan());
        assert_eq!(take_last_error(), Some(MathError::Domain));
    }
}

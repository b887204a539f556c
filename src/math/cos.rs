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
use crate::math::poly::horner;
use crate::math::sin::{INV_PI, PI_1, PI_2, PI_3, RANGE_VAL};
use crate::simd::{SimdBits, SimdF64};

const HALF_PI: f64 = f64::from_bits(0x3ff921fb54442d18);

/// `(sin(r) - r) / r^3` in `r^2` on `[-pi/2, pi/2]`
const C: [u64; 7] = [
    0xbfc55555555554c3, // -0x1.55555555554c3p-3
    0x3f8111111110b25e, // 0x1.111111110b25ep-7
    0xbf2a01a019aeb4ff, // -0x1.a01a019aeb4ffp-13
    0x3ec71de382e8d62b, // 0x1.71de382e8d62bp-19
    0xbe5ae6361b7254e7, // -0x1.ae6361b7254e7p-26
    0x3de60e88a10163f2, // 0x1.60e88a10163f2p-33
    0xbd69f4a9c8b21dc9, // -0x1.9f4a9c8b21dc9p-41
];

#[cold]
fn cos_special(x: f64) -> f64 {
    if x.is_finite() {
        return libm::cos(x);
    }
    invalid(x, "cos")
}

/// Computes cosine for every lane.
///
/// Max found ULP 3.28
#[inline]
pub fn cos_simd<V: SimdF64>(x: V) -> V {
    let ax = x.abs();
    let special = !ax.cmp_lt(V::splat(RANGE_VAL));

    // n = rint((|x| + pi/2) / pi) - 0.5
    let z = V::splat(SHIFT).fma(V::splat(INV_PI), ax + V::splat(HALF_PI));
    let odd = z.as_bits().shl(63);
    let n = z - V::splat(SHIFT) - V::splat(0.5);

    // cos(x) = sin(|x| - n pi) up to the sign
    let r = ax
        .fms(V::splat(PI_1), n)
        .fms(V::splat(PI_2), n)
        .fms(V::splat(PI_3), n);

    let r2 = r * r;
    let y = r.fma(horner(r2, &C) * r2, r);
    let y = V::from_raw(y.as_bits() ^ odd);
    if special.any() {
        return lane_fallback(x, y, special, cos_special);
    }
    y
}

/// Computes cosine
///
/// Max found ULP 3.28
#[inline]
pub fn cos(x: f64) -> f64 {
    cos_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64, around_f64};
    use crate::ulp_distance_f64;

    #[test]
    fn test_cos() {
        assert_ulp_f64(cos, f64::cos, -10.0, 10.0, 50000, 5);
        assert_ulp_f64(cos, f64::cos, -1e-3, 1e-3, 10000, 5);
        assert_ulp_f64(cos, f64::cos, 1e3, 1e6, 20000, 5);
        assert_ulp_f64(cos, f64::cos, 8e6, 8.4e6, 20000, 5);
    }

    #[test]
    fn test_cos_special() {
        for x in [0.0, -0.0] {
            let v = cos(x);
            assert!(ulp_distance_f64(v, 1.0) <= 1, "Invalid result {} for {}", v, x);
        }
        assert!(cos(f64::INFINITY).is_nan());
        assert!(cos(f64::NAN).is_nan());
        for x in [0.3, 1.7, 42.0, 1e5, 1e10] {
            assert_eq!(cos(-x).to_bits(), cos(x).to_bits(), "Invalid result for {}", x);
        }
        for x in [1e7, 1e22, 1e300] {
            let v = cos(x);
            assert!(ulp_distance_f64(v, x.cos()) <= 2, "Invalid result {} for {}", v, x);
        }
        for x in around_f64(RANGE_VAL) {
            let v = cos(x);
            assert!(ulp_distance_f64(v, x.cos()) <= 5, "Invalid result {} for {}", v, x);
        }
    }

    #[test]
    fn test_cos_lanes() {
        let inputs = [0.5, -3.0, 0.0, f64::NAN, 1e10, -2.0, f64::INFINITY, 1e-310, 7.5];
        assert_lanes_f64(cos, cos_simd, cos_simd, &inputs);
    }
}

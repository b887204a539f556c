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
use crate::err::{MathError, report};
use crate::math::common::ubits;
use crate::math::scale::special_scalef;
use crate::simd::{SimdBits, SimdF32};

/// `1 / ln(2)`
pub(crate) const INV_LN2: f32 = f32::from_bits(0x3fb8aa3b);
/// `ln(2)` split in two parts
pub(crate) const LN2_HI: f32 = f32::from_bits(0x3f317200);
pub(crate) const LN2_LO: f32 = f32::from_bits(0x35bfbe8e);

/// `e^r - 1`, lowest degree first
const C: [u32; 5] = [
    0x3f7ffff6, // 0x1.ffffecp-1
    0x3efffedb, // 0x1.fffdb6p-2
    0x3e2aaf33, // 0x1.555e66p-3
    0x3d2b9f17, // 0x1.573e2ep-5
    0x3c072010, // 0x1.0e4020p-7
];

/// `c0 r + r^2 (c1 + c2 r + r^2 (c3 + c4 r))`
#[inline(always)]
pub(crate) fn exp_poly5<V: SimdF32>(r: V, c: &[u32; 5]) -> V {
    let k = |i: usize| V::splat(f32::from_bits(c[i]));
    let r2 = r * r;
    let p12 = k(1).fma(r, k(2));
    let p34 = k(3).fma(r, k(4));
    let p14 = p12.fma(r2, p34);
    (r * k(0)).fma(p14, r2)
}

#[cold]
pub(crate) fn report_xflowf<V: SimdF32>(x: V, y: V, special: V::Bits, func: &'static str) {
    for i in 0..V::LANES {
        if special.lane_set(i) {
            let (xi, yi) = (x.extract(i), y.extract(i));
            if xi.is_finite() && yi.is_infinite() {
                report(MathError::Overflow, func);
            } else if xi.is_finite() && yi == 0.0 {
                report(MathError::Underflow, func);
            }
        }
    }
}

/// `2^n * (1 + poly)` for an integral `n`, lanes with `|n| > 126` go
/// through the split scale.
#[inline(always)]
pub(crate) fn scale_poly_f32<V: SimdF32>(x: V, n: V, poly: V, func: &'static str) -> V {
    let e = n.cvt_to_int().shl(23);
    let scale = V::from_raw(e + ubits::<V>(0x3f800000));
    let special = n.abs_gt(V::splat(126.0));
    if special.any() {
        let y = special_scalef(poly, n, e, special, scale);
        report_xflowf(x, y, special, func);
        return y;
    }
    scale.fma(poly, scale)
}

/// Returns `(n, poly)` with `x = ln2 * n + r` and `poly ~ e^r - 1`
#[inline(always)]
fn reduce<V: SimdF32>(x: V) -> (V, V) {
    // r in [-ln2/2, ln2/2]
    let n = (x * V::splat(INV_LN2)).round_away();
    let r = x.fms(n, V::splat(LN2_HI)).fms(n, V::splat(LN2_LO));
    (n, exp_poly5(r, &C))
}

/// e^x without special lanes, valid for `|x| <= 87.3`
#[inline(always)]
pub(crate) fn expf_inline<V: SimdF32>(x: V) -> V {
    let (n, poly) = reduce(x);
    let scale = V::from_raw(n.cvt_to_int().shl(23) + ubits::<V>(0x3f800000));
    scale.fma(poly, scale)
}

/// Computes e^x for every lane.
///
/// Max found ULP 2.0
#[inline]
pub fn expf_simd<V: SimdF32>(x: V) -> V {
    let (n, poly) = reduce(x);
    scale_poly_f32(x, n, poly, "expf")
}

/// Computes e^x
///
/// Max found ULP 2.0
#[inline]
pub fn expf(x: f32) -> f32 {
    expf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_expf() {
        assert_ulp_f32(expf, f64::exp, -10.0, 10.0, 50000, 3);
        assert_ulp_f32(expf, f64::exp, -87.0, 88.7, 50000, 3);
        assert_ulp_f32(expf, f64::exp, -103.0, -87.0, 5000, 3);
    }

    #[test]
    fn test_expf_special() {
        assert_eq!(expf(0.0), 1.0);
        assert_eq!(expf(f32::INFINITY), f32::INFINITY);
        assert_eq!(expf(f32::NEG_INFINITY), 0.0);
        assert!(expf(f32::NAN).is_nan());
        assert_eq!(expf(89.0), f32::INFINITY);
        assert_eq!(expf(-104.0), 0.0);
        assert_eq!(expf(1e30), f32::INFINITY);
        assert_eq!(expf(-1e30), 0.0);
    }

    #[test]
    fn test_expf_lanes() {
        let inputs = [
            0.25,
            -7.5,
            f32::NAN,
            88.5,
            -95.0,
            f32::INFINITY,
            -0.0,
            f32::NEG_INFINITY,
            3.0,
        ];
        assert_lanes_f32(expf, expf_simd, expf_simd, &inputs);
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_expf_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        assert!(expf(1.0) > 2.0);
        assert_eq!(last_error(), None);
        assert_eq!(expf(100.0), f32::INFINITY);
        assert_eq!(take_last_error(), Some(MathError::Overflow));
        assert_eq!(expf(-200.0), 0.0);
        assert_eq!(take_last_error(), Some(MathError::Underflow));
    }
}

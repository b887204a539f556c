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
use crate::math::common::ubits;
use crate::math::expf::{INV_LN2, LN2_HI, LN2_LO, report_xflowf};
use crate::math::poly::estrin;
use crate::math::scale::special_scalef;
use crate::simd::{SimdBits, SimdF32};

/// Past this the scale `2^n` needs the split treatment
const SPECIAL_BOUND: f32 = f32::from_bits(0x42a6c0a6);

/// `(expm1(f) - f) / f^2` on `[-ln2/2, ln2/2]`
const C: [u32; 5] = [
    0x3effffff, // 0x1.fffffep-2
    0x3e2aaa57, // 0x1.5554aep-3
    0x3d2aab9b, // 0x1.555736p-5
    0x3c09143e, // 0x1.12287cp-7
    0x3ab5aad1, // 0x1.6b55a2p-10
];

/// Returns `(n, e, scale, poly)` with `scale = 2^n` and `e` its exponent bits
#[inline(always)]
fn reduce<V: SimdF32>(x: V) -> (V, V::Bits, V, V) {
    // x = n * ln2 + f, f in [-ln2/2, ln2/2]
    let n = (x * V::splat(INV_LN2)).round_away();
    let f = x.fms(n, V::splat(LN2_HI)).fms(n, V::splat(LN2_LO));
    let e = n.cvt_to_int().shl(23);
    let scale = V::from_raw(e + ubits::<V>(0x3f800000));

    let f2 = f * f;
    let poly = f.fma(f2, estrin(f, f2, &C));
    (n, e, scale, poly)
}

/// e^x - 1 without special lanes, valid for `|x| < 83.3`
#[inline(always)]
pub(crate) fn expm1f_inline<V: SimdF32>(x: V) -> V {
    let (_, _, scale, poly) = reduce(x);
    (scale - V::splat(1.0)).fma(poly, scale)
}

/// Computes e^x - 1 for every lane.
///
/// Max found ULP 1.63
#[inline]
pub fn expm1f_simd<V: SimdF32>(x: V) -> V {
    let (n, e, scale, poly) = reduce(x);
    let y = (scale - V::splat(1.0)).fma(poly, scale);
    let special = x.abs_ge(V::splat(SPECIAL_BOUND));
    if special.any() {
        return expm1f_special(x, y, n, e, scale, poly, special);
    }
    y
}

#[cold]
#[inline(never)]
fn expm1f_special<V: SimdF32>(
    x: V,
    y: V,
    n: V,
    e: V::Bits,
    scale: V,
    poly: V,
    special: V::Bits,
) -> V {
    let s = special_scalef(poly, n, e, special, scale) - V::splat(1.0);
    let y = V::select(special, s, y);
    report_xflowf(x, y, special, "expm1f");
    y
}

/// Computes e^x - 1
///
/// Max found ULP 1.63
#[inline]
pub fn expm1f(x: f32) -> f32 {
    expm1f_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{around_f32, assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_expm1f() {
        assert_ulp_f32(expm1f, f64::exp_m1, -1.0, 1.0, 50000, 3);
        assert_ulp_f32(expm1f, f64::exp_m1, -1e-6, 1e-6, 5000, 3);
        assert_ulp_f32(expm1f, f64::exp_m1, -104.0, 88.7, 50000, 3);
        for x in around_f32(SPECIAL_BOUND) {
            let v = expm1f(x);
            let want = (x as f64).exp_m1() as f32;
            assert!(
                crate::ulp_distance_f32(v, want) <= 3,
                "Invalid result {}, expected {}",
                v,
                want
            );
        }
    }

    #[test]
    fn test_expm1f_special() {
        assert_eq!(expm1f(0.0), 0.0);
        assert_eq!(expm1f(f32::INFINITY), f32::INFINITY);
        assert_eq!(expm1f(f32::NEG_INFINITY), -1.0);
        assert!(expm1f(f32::NAN).is_nan());
        assert_eq!(expm1f(89.0), f32::INFINITY);
        assert_eq!(expm1f(-120.0), -1.0);
    }

    #[test]
    fn test_expm1f_lanes() {
        let inputs = [0.5, -3.0, 88.5, f32::NAN, 1e-10, -100.0, f32::INFINITY, 20.0, -0.25];
        assert_lanes_f32(expm1f, expm1f_simd, expm1f_simd, &inputs);
    }
}

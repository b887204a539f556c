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
//! Exponential built on the `FEXPA` table instruction of SVE.
//!
//! The reduced exponent is rounded to a multiple of 1/64 and its bit pattern
//! feeds [fexpa] directly, without a separate table lookup.
use crate::math::common::ubits;
use crate::math::exp::{EXP_SPECIAL_BOUND, report_xflow};
use crate::math::expf::{INV_LN2 as INV_LN2F, LN2_HI as LN2_HIF, LN2_LO as LN2_LOF, report_xflowf};
use crate::math::scale::{fexpa, fexpaf, special_scale};
use crate::simd::{SimdBits, SimdF32, SimdF64};

/// `ln(2^1022)` rounded down, `FEXPA` needs a biased exponent of at least 1
const SPECIAL_BOUND: f64 = EXP_SPECIAL_BOUND;
/// `1.5 * 2^46 + 1023`, rounds to 1/64 and biases the exponent bits
const SHIFT: f64 = f64::from_bits(0x42d800000000ffc0);
const INV_LN2: f64 = f64::from_bits(0x3ff71547652b82fe);
const LN2_HI: f64 = f64::from_bits(0x3fe62e42fefa3800);
const LN2_LO: f64 = f64::from_bits(0x3d2ef35793c76730);

const C: [u64; 4] = [
    0x3fdfffffffffdbcd, // 0x1.fffffffffdbcdp-2
    0x3fc555555555444c, // 0x1.555555555444cp-3
    0x3fa555573c6a9f7d, // 0x1.555573c6a9f7dp-5
    0x3f81111266d28935, // 0x1.1111266d28935p-7
];

/// Computes e^x for every lane using the `FEXPA` scale.
///
/// Max found ULP 1.96
#[inline]
pub fn exp_fexpa_simd<V: SimdF64>(x: V) -> V {
    let z = V::splat(SHIFT).fma(x, V::splat(INV_LN2));
    let u = z.as_bits();
    let n = z - V::splat(SHIFT);

    // r in [-ln2/128, ln2/128]
    let r = x.fms(n, V::splat(LN2_HI)).fms(n, V::splat(LN2_LO));

    // exp(r) - 1 ~ r + c0 r^2 + c1 r^3 + c2 r^4 + c3 r^5
    let c = |i: usize| V::splat(f64::from_bits(C[i]));
    let r2 = r * r;
    let p01 = c(0).fma(r, c(1));
    let p23 = c(2).fma(r, c(3));
    let p04 = p01.fma(p23, r2);
    let poly = r.fma(p04, r2);

    let scale = fexpa::<V>(u);
    let y = scale.fma(scale, poly);

    let special = x.abs_ge(V::splat(SPECIAL_BOUND));
    if special.any() {
        return exp_fexpa_special(x, y, poly, scale, n, u, special);
    }
    y
}

#[cold]
#[inline(never)]
fn exp_fexpa_special<V: SimdF64>(
    x: V,
    y: V,
    poly: V,
    scale: V,
    n: V,
    u: V::Bits,
    special: V::Bits,
) -> V {
    // FEXPA drops the carry out of the exponent, it is put back as the sign
    let e = u.shl(46) & ubits::<V>(0x8000000000000000);
    let scale = V::from_raw(e + scale.as_bits());
    let s = special_scale(poly, n, scale, 1280.0);
    let y = V::select(special, s, y);
    report_xflow(x, y, special, "exp_fexpa");
    y
}

/// Computes e^x using the `FEXPA` scale.
///
/// Max found ULP 1.96
#[inline]
pub fn exp_fexpa(x: f64) -> f64 {
    exp_fexpa_simd(x)
}

/// Roughly 87.3, below `-SPECIAL_BOUNDF` the result is subnormal and the
/// `FEXPA` scale is wrong
const SPECIAL_BOUNDF: f32 = f32::from_bits(0x42aeaf15);
/// `ln(f32::MAX)` rounded up
const INF_BOUNDF: f32 = f32::from_bits(0x42b17218);
/// `ln` of half the smallest subnormal
const ZERO_BOUNDF: f32 = f32::from_bits(0xc2cff1b4);
/// `1.5 * 2^17 + 127`
const SHIFTF: f32 = f32::from_bits(0x48401fc0);
const C2F: f32 = f32::from_bits(0x3e2aaac8);
const C3F: f32 = f32::from_bits(0x3d2aaaae);

/// Returns `(scale, r)` with `x = ln2 * n + r`
#[inline(always)]
fn reducef<V: SimdF32>(x: V) -> (V, V) {
    let z = V::splat(SHIFTF).fma(x, V::splat(INV_LN2F));
    let n = z - V::splat(SHIFTF);
    let r = x.fms(n, V::splat(LN2_HIF)).fms(n, V::splat(LN2_LOF));
    (fexpaf::<V>(z.as_bits()), r)
}

/// Computes e^x for every lane using the `FEXPA` scale.
///
/// Max found ULP 3.21
#[inline]
pub fn expf_fexpa_simd<V: SimdF32>(x: V) -> V {
    let special = x.abs_gt(V::splat(SPECIAL_BOUNDF));
    if special.any() {
        return expf_fexpa_special(x, special);
    }
    let (scale, r) = reducef(x);
    // e^r - 1 ~ r + r^2 / 2
    let poly = r.fma(r * r, V::splat(0.5));
    scale.fma(scale, poly)
}

/// Lanes past the bound compute `e^(x/2)` with one more term and square it.
#[cold]
#[inline(never)]
fn expf_fexpa_special<V: SimdF32>(x: V, special: V::Bits) -> V {
    let is_inf = x.cmp_gt(V::splat(INF_BOUNDF));
    let is_zero = x.cmp_lt(V::splat(ZERO_BOUNDF));
    let limit = V::select(is_inf, V::splat(f32::INFINITY), V::splat(0.0));

    let xh = V::select(special, x * V::splat(0.5), x);
    let (scale, r) = reducef(xh);
    let r2 = r * r;
    let r3 = r * r2;
    let poly_fast = r.fma(r2, V::splat(0.5));
    let poly_slow = V::splat(C2F).fma(r, V::splat(C3F));
    let poly = V::select(special, poly_fast.fma(poly_slow, r3), poly_fast);
    let half = scale.fma(scale, poly);
    let half = V::select(is_inf | is_zero, limit, half);
    let y = V::select(special, half * half, half);
    report_xflowf(x, y, special, "expf_fexpa");
    y
}

/// Computes e^x using the `FEXPA` scale.
///
/// Max found ULP 3.21
#[inline]
pub fn expf_fexpa(x: f32) -> f32 {
    expf_fexpa_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::exp::exp;
    use crate::math::test_utils::{
        around_f32, around_f64, assert_lanes_f32, assert_lanes_f64, assert_ulp_f32,
        assert_ulp_f64,
    };

    #[test]
    fn test_exp_fexpa() {
        assert_ulp_f64(exp_fexpa, f64::exp, -5.0, 5.0, 20000, 3);
        assert_ulp_f64(exp_fexpa, f64::exp, -708.0, 709.7, 20000, 3);
        assert_ulp_f64(exp_fexpa, f64::exp, -744.0, -708.3, 2000, 3);
        for x in around_f64(SPECIAL_BOUND) {
            let v = exp_fexpa(x);
            assert!(
                crate::ulp_distance_f64(v, x.exp()) <= 3,
                "Invalid result {}, expected {}",
                v,
                x.exp()
            );
        }
    }

    #[test]
    fn test_exp_fexpa_lower_boundary() {
        // doubles just inside ln(2^(1022 + 1/128)), then a grid down to the bound
        let start = -f64::from_bits(0x40862336f49c49a2);
        let walk = (0..20000u64).map(|k| f64::from_bits(start.to_bits() - k));
        let step = (start + SPECIAL_BOUND) / 1000.0;
        let grid = (0..=1000).map(|i| start - step * i as f64);
        for x in walk.chain(grid) {
            let v = exp_fexpa(x);
            let want = exp(x);
            assert!(
                crate::ulp_distance_f64(v, want) <= 4,
                "Invalid result {} for {}, expected {}",
                v,
                x,
                want
            );
        }
        let x = -708.4018337449999;
        let v = exp_fexpa(x);
        assert!(crate::ulp_distance_f64(v, exp(x)) <= 4, "Invalid result {}", v);
    }

    #[test]
    fn test_exp_fexpa_agrees_with_table() {
        let mut x = -700.0;
        while x < 700.0 {
            let a = exp_fexpa(x);
            let b = exp(x);
            assert!(crate::ulp_distance_f64(a, b) <= 4, "Invalid result {}, expected {}", a, b);
            x += 0.37;
        }
    }

    #[test]
    fn test_exp_fexpa_special() {
        assert_eq!(exp_fexpa(0.0), 1.0);
        assert_eq!(exp_fexpa(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp_fexpa(f64::NEG_INFINITY), 0.0);
        assert!(exp_fexpa(f64::NAN).is_nan());
        assert_eq!(exp_fexpa(710.0), f64::INFINITY);
        assert_eq!(exp_fexpa(-746.0), 0.0);
    }

    #[test]
    fn test_expf_fexpa() {
        assert_ulp_f32(expf_fexpa, f64::exp, -10.0, 10.0, 50000, 5);
        assert_ulp_f32(expf_fexpa, f64::exp, -103.0, 88.7, 50000, 5);
        for x in around_f32(SPECIAL_BOUNDF) {
            let v = expf_fexpa(x);
            let want = (x as f64).exp() as f32;
            assert!(
                crate::ulp_distance_f32(v, want) <= 5,
                "Invalid result {}, expected {}",
                v,
                want
            );
        }
    }

    #[test]
    fn test_expf_fexpa_special() {
        assert_eq!(expf_fexpa(0.0), 1.0);
        assert_eq!(expf_fexpa(f32::INFINITY), f32::INFINITY);
        assert_eq!(expf_fexpa(f32::NEG_INFINITY), 0.0);
        assert!(expf_fexpa(f32::NAN).is_nan());
        assert_eq!(expf_fexpa(89.0), f32::INFINITY);
        assert_eq!(expf_fexpa(-104.0), 0.0);
    }

    #[test]
    fn test_fexpa_lanes() {
        let inputs = [0.5, -708.9, 709.5, f64::NAN, -0.0, 3.5, f64::INFINITY, -20.0];
        assert_lanes_f64(exp_fexpa, exp_fexpa_simd, exp_fexpa_simd, &inputs);
        let inputs = [0.5, -90.0, 88.0, f32::NAN, -0.0, 3.5, f32::INFINITY, -20.0, 1.0];
        assert_lanes_f32(expf_fexpa, expf_fexpa_simd, expf_fexpa_simd, &inputs);
    }
}

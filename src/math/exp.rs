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
use crate::math::scale::{special_scale, table_scale};
use crate::simd::{SimdBits, SimdF64};

/// `ln(2^1022)`, past this the table scale leaves the normal range
pub(crate) const EXP_SPECIAL_BOUND: f64 = f64::from_bits(0x4086232bdd76683c);
/// `1280 * 128`, past this even the split scale saturates
pub(crate) const EXP_SCALE_BOUND: f64 = 163840.0;
/// `128 / ln(2)`
pub(crate) const INV_LN2_N: f64 = f64::from_bits(0x40671547652b82fe);
/// `ln(2) / 128`
pub(crate) const LN2_HI_N: f64 = f64::from_bits(0x3f762e42fefa39ef);
pub(crate) const LN2_LO_N: f64 = f64::from_bits(0x3c0abc9e3b39803f);
/// `1.5 * 2^52`
pub(crate) const SHIFT: f64 = f64::from_bits(0x4338000000000000);

const C: [u64; 3] = [
    0x3fdffffffffffd43, // 0x1.ffffffffffd43p-2
    0x3fc55555c75adbb2, // 0x1.55555c75adbb2p-3
    0x3fa55555da646206, // 0x1.55555da646206p-5
];

/// Records overflow and underflow of finite inputs in the special lanes
#[cold]
pub(crate) fn report_xflow<V: SimdF64>(x: V, y: V, special: V::Bits, func: &'static str) {
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

/// `2^(u/128) * (1 + poly)`, special lanes go through the split scale.
#[inline(always)]
pub(crate) fn scale_poly<V: SimdF64>(
    x: V,
    u: V::Bits,
    n: V,
    poly: V,
    special: V::Bits,
    scale_bound: f64,
    func: &'static str,
) -> V {
    let scale = table_scale::<V>(u);
    let y = scale.fma(poly, scale);
    if special.any() {
        return special_lanes(x, y, poly, n, scale, special, scale_bound, func);
    }
    y
}

#[cold]
#[inline(never)]
fn special_lanes<V: SimdF64>(
    x: V,
    y: V,
    poly: V,
    n: V,
    scale: V,
    special: V::Bits,
    scale_bound: f64,
    func: &'static str,
) -> V {
    let s = special_scale(poly, n, scale, scale_bound);
    let y = V::select(special, s, y);
    report_xflow(x, y, special, func);
    y
}

/// Returns `(u, n, poly)` with `x = n ln2/N + r` and `poly ~ e^r - 1`
#[inline(always)]
fn reduce<V: SimdF64>(x: V) -> (V::Bits, V, V) {
    // n = round(x / (ln2 / N))
    let z = V::splat(SHIFT).fma(x, V::splat(INV_LN2_N));
    let u = z.as_bits();
    let n = z - V::splat(SHIFT);

    let r = x.fms(n, V::splat(LN2_HI_N)).fms(n, V::splat(LN2_LO_N));

    // exp(r) - 1 ~ r + c0 r^2 + c1 r^3 + c2 r^4
    let r2 = r * r;
    let poly = V::splat(f64::from_bits(C[0])).fma(r, V::splat(f64::from_bits(C[1])));
    let poly = poly.fma(r2, V::splat(f64::from_bits(C[2])));
    (u, n, r.fma(poly, r2))
}

/// e^x without special lanes, valid for `|x| <= EXP_SPECIAL_BOUND`
#[inline(always)]
pub(crate) fn exp_inline<V: SimdF64>(x: V) -> V {
    let (u, _, poly) = reduce(x);
    let scale = table_scale::<V>(u);
    scale.fma(poly, scale)
}

/// Computes e^x for every lane.
///
/// Max found ULP 2.4
#[inline]
pub fn exp_simd<V: SimdF64>(x: V) -> V {
    let (u, n, poly) = reduce(x);
    let special = x.abs_gt(V::splat(EXP_SPECIAL_BOUND));
    scale_poly(x, u, n, poly, special, EXP_SCALE_BOUND, "exp")
}

/// Computes e^x
///
/// Max found ULP 2.4
#[inline]
pub fn exp(x: f64) -> f64 {
    exp_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{around_f64, assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_exp() {
        assert_ulp_f64(exp, f64::exp, -5.0, 5.0, 20000, 4);
        assert_ulp_f64(exp, f64::exp, -708.0, 708.0, 20000, 4);
        assert_ulp_f64(exp, f64::exp, -1e-6, 1e-6, 2000, 4);
    }

    #[test]
    fn test_exp_special() {
        assert_eq!(exp(0.0), 1.0);
        assert_eq!(exp(-0.0), 1.0);
        assert_eq!(exp(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp(f64::NEG_INFINITY), 0.0);
        assert!(exp(f64::NAN).is_nan());
        assert_eq!(exp(710.0), f64::INFINITY);
        assert_eq!(exp(-746.0), 0.0);
        assert_eq!(exp(1e300), f64::INFINITY);
        assert_eq!(exp(-1e300), 0.0);
    }

    #[test]
    fn test_exp_near_limits() {
        // overflow threshold and the subnormal range
        assert_ulp_f64(exp, f64::exp, 708.4, 709.78, 2000, 4);
        assert_ulp_f64(exp, f64::exp, -708.5, -700.0, 2000, 4);
        for x in around_f64(EXP_SPECIAL_BOUND) {
            let v = exp(x);
            let want = x.exp();
            assert!(
                crate::ulp_distance_f64(v, want) <= 4,
                "Invalid result {}, expected {}",
                v,
                want
            );
        }
        let v = exp(-740.0);
        let want = (-740.0f64).exp();
        assert!((v - want).abs() <= f64::from_bits(1), "Invalid result {}", v);
    }

    #[test]
    fn test_exp_lanes() {
        let inputs = [
            0.5,
            -3.25,
            f64::NAN,
            709.5,
            -745.0,
            f64::INFINITY,
            f64::NEG_INFINITY,
            1e-300,
            -0.0,
            100.0,
        ];
        assert_lanes_f64(exp, exp_simd, exp_simd, &inputs);
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_exp_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        assert!(exp(1.0) > 2.0);
        assert_eq!(last_error(), None);
        assert_eq!(exp(1000.0), f64::INFINITY);
        assert_eq!(take_last_error(), Some(MathError::Overflow));
        assert_eq!(exp(-1000.0), 0.0);
        assert_eq!(take_last_error(), Some(MathError::Underflow));
        let v = exp_simd(crate::simd::F64x2::from_array([1.0, 1000.0])).to_array();
        assert_eq!(v[1], f64::INFINITY);
        assert_eq!(take_last_error(), Some(MathError::Overflow));
    }
}

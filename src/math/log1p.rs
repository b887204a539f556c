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
use crate::math::common::{lane_fallback, ubits};
use crate::math::math_err::{divzero, invalid};
use crate::math::poly::pairwise_horner;
use crate::simd::{SimdBits, SimdF64};

const LN2_HI: f64 = f64::from_bits(0x3fe62e42fefa3800);
const LN2_LO: f64 = f64::from_bits(0x3d2ef35793c76730);
/// `top32(asuint64(sqrt(2)/2)) << 32`
const HF_RT2_TOP: u64 = 0x3fe6a09e00000000;
/// `(top32(asuint64(1)) - top32(asuint64(sqrt(2)/2))) << 32`
const ONE_M_HF_RT2_TOP: u64 = 0x00095f6200000000;

/// `(log1p(f) - f) / f^2` on `[sqrt(2)/2 - 1, sqrt(2) - 1]`
const C: [u64; 19] = [
    0xbfdffffffffffffb, // -0x1.ffffffffffffbp-2
    0x3fd55555555551a9, // 0x1.55555555551a9p-2
    0xbfd00000000008e3, // -0x1.00000000008e3p-2
    0x3fc9999999a32797, // 0x1.9999999a32797p-3
    0xbfc555555552fecf, // -0x1.555555552fecfp-3
    0x3fc249248e071e5a, // 0x1.249248e071e5ap-3
    0xbfbffffff8bf8482, // -0x1.ffffff8bf8482p-4
    0x3fbc71c8f07da57a, // 0x1.c71c8f07da57ap-4
    0xbfb9999ca4ccb617, // -0x1.9999ca4ccb617p-4
    0x3fb7459ad2e1dfa3, // 0x1.7459ad2e1dfa3p-4
    0xbfb554d2680a3ff2, // -0x1.554d2680a3ff2p-4
    0x3fb3b4c54d487455, // 0x1.3b4c54d487455p-4
    0xbfb2548a9ffe80e6, // -0x1.2548a9ffe80e6p-4
    0x3fb0f389a24b2e07, // 0x1.0f389a24b2e07p-4
    0xbfaeee4db15db335, // -0x1.eee4db15db335p-5
    0x3fae95b494d4a5dd, // 0x1.e95b494d4a5ddp-5
    0xbfb15fdf07cb7c73, // -0x1.15fdf07cb7c73p-4
    0x3fb0310b70800fcf, // 0x1.0310b70800fcfp-4
    0xbf9cfa7385bdb37e, // -0x1.cfa7385bdb37ep-6
];

#[cold]
fn log1p_special(x: f64) -> f64 {
    if x.is_nan() {
        return x + x;
    }
    if x == f64::INFINITY {
        return x;
    }
    if x == -1.0 {
        return divzero(true, "log1p");
    }
    invalid(x, "log1p")
}

/// ln(1 + x) without special lane handling, valid for finite `x > -1`.
#[inline(always)]
pub(crate) fn log1p_inline<V: SimdF64>(x: V) -> V {
    // 1 + x = 2^k (1 + f) with 1 + f in [sqrt(2)/2, sqrt(2)]
    let m = x + V::splat(1.0);
    let mi = m.as_bits();
    let u = mi + ubits::<V>(ONE_M_HF_RT2_TOP);
    let k = V::cvt_from_int(u.shr(52) - ubits::<V>(0x3ff));
    let utop = (u & ubits::<V>(0x000fffff00000000)) + ubits::<V>(HF_RT2_TOP);
    let u_red = utop | (mi & ubits::<V>(0xffffffff));
    let f = V::from_raw(u_red) - V::splat(1.0);

    // 1 + x is rounded to m, log1p(x) - log(m) ~ c / m
    let cm = (x - (m - V::splat(1.0))) / m;

    let f2 = f * f;
    let p = pairwise_horner(f, f2, &C);
    let ylo = cm.fma(k, V::splat(LN2_LO));
    let yhi = f.fma(k, V::splat(LN2_HI));
    (ylo + yhi).fma(f2, p)
}

/// Computes ln(1 + x) for every lane.
///
/// Max found ULP 2.45
#[inline]
pub fn log1p_simd<V: SimdF64>(x: V) -> V {
    let ia = x.abs().as_bits();
    let special = ia.cmp_ge(ubits::<V>(0x7ff0000000000000)) | x.cmp_le(V::splat(-1.0));

    let y = log1p_inline(x);
    // keeps the sign of zero
    let y = V::select(x.cmp_eq(V::splat(0.0)), x, y);

    if special.any() {
        return lane_fallback(x, y, special, log1p_special);
    }
    y
}

/// Computes ln(1 + x)
///
/// Max found ULP 2.45
#[inline]
pub fn log1p(x: f64) -> f64 {
    log1p_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_log1p() {
        assert_ulp_f64(log1p, f64::ln_1p, -0.9, 10.0, 20000, 3);
        assert_ulp_f64(log1p, f64::ln_1p, -1e-8, 1e-8, 2000, 3);
        assert_ulp_f64(log1p, f64::ln_1p, -0.999999, -0.5, 2000, 3);
        assert_ulp_f64(log1p, f64::ln_1p, 10.0, 1e300, 20000, 3);
    }

    #[test]
    fn test_log1p_special() {
        assert_eq!(log1p(0.0).to_bits(), 0);
        assert_eq!(log1p(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(log1p(-1.0), f64::NEG_INFINITY);
        assert_eq!(log1p(f64::INFINITY), f64::INFINITY);
        assert!(log1p(f64::NEG_INFINITY).is_nan());
        assert!(log1p(-2.0).is_nan());
        assert!(log1p(f64::NAN).is_nan());
        assert_eq!(log1p(1e-300), 1e-300);
        let v = log1p(f64::MAX);
        assert!(crate::ulp_distance_f64(v, f64::MAX.ln_1p()) <= 3, "Invalid result {}", v);
    }

    #[test]
    fn test_log1p_lanes() {
        let inputs = [0.5, -0.75, -1.0, f64::NAN, 1e-310, -2.0, f64::INFINITY, 1e300, -0.0];
        assert_lanes_f64(log1p, log1p_simd, log1p_simd, &inputs);
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_log1p_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        assert!(log1p(1.0) > 0.0);
        assert_eq!(last_error(), None);
        assert_eq!(log1p(-1.0), f64::NEG_INFINITY);
        assert_eq!(take_last_error(), Some(MathError::Pole));
        assert!(log1p(-2.0).is_nan());
        assert_eq!(take_last_error(), Some(MathError::Domain));
    }
}

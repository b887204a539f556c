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
use crate::math::math_err::{divzerof, invalidf};
use crate::math::poly::pairwise_horner;
use crate::simd::{SimdBits, SimdF32};
use std::num::Wrapping;

/// `x = 2^n (1 + r)` with `1 + r` in `[Off, 2 Off)`, `Off ~ 2/3`
const OFF: u32 = 0x3f2aaaab;
const MIN_NORM: u32 = 0x00800000;
/// `asuint32(inf) - MIN_NORM`
const SPECIAL_BOUND: u32 = 0x7f000000;
pub(crate) const LN2: f32 = f32::from_bits(0x3f317218);

/// `(log1p(r) - r) / r^2` on `[-1/3, 1/3]`
const C: [u32; 7] = [
    0xbeffffe4, // -0x1.ffffc8p-2
    0x3eaaaebe, // 0x1.555d7cp-2
    0xbe800c3e, // -0x1.00187cp-2
    0x3e4b09a4, // 0x1.961348p-3
    0xbe27cc9a, // -0x1.4f9934p-3
    0x3e2d4d51, // 0x1.5a9aa2p-3
    0xbe1f39be, // -0x1.3e737cp-3
];

/// Lanes that are not positive finite normal numbers
#[inline(always)]
pub(crate) fn logf_special_lanes<V: SimdF32>(x: V) -> V::Bits {
    (x.as_bits() - ubits::<V>(MIN_NORM)).cmp_ge(ubits::<V>(SPECIAL_BOUND))
}

/// Returns `(n, r)` with `x = 2^n (1 + r)` for the bit pattern `ix`
#[inline(always)]
pub(crate) fn logf_reduce<V: SimdF32>(ix: V::Bits) -> (V, V) {
    let u_off = ix - ubits::<V>(OFF);
    let n = V::cvt_from_int(u_off.sra(23));
    let u = (u_off & ubits::<V>(0x007fffff)) + ubits::<V>(OFF);
    (n, V::from_raw(u) - V::splat(1.0))
}

/// Handles the lanes rejected by [logf_special_lanes], `core` evaluates
/// normalised bit patterns.
#[cold]
pub(crate) fn logf_special(x: f32, core: fn(Wrapping<u32>) -> f32, func: &'static str) -> f32 {
    if x.is_nan() {
        return x + x;
    }
    if x == f32::INFINITY {
        return x;
    }
    if x == 0.0 {
        return divzerof(true, func);
    }
    if x < 0.0 {
        return invalidf(x, func);
    }
    // subnormal: x * 2^23 is normal, the exponent is fixed up in the bits
    let ix = (x * f32::from_bits(0x4b000000)).to_bits();
    core(Wrapping(ix.wrapping_sub(23 << 23)))
}

#[inline(always)]
fn logf_core<V: SimdF32>(ix: V::Bits) -> V {
    let (n, r) = logf_reduce::<V>(ix);
    // log(x) = n ln2 + r + r^2 P(r)
    let r2 = r * r;
    let p = r.fma(n, V::splat(LN2));
    p.fma(r2, pairwise_horner(r, r2, &C))
}

/// Computes natural logarithm for every lane.
///
/// Max found ULP 3.34
#[inline]
pub fn logf_simd<V: SimdF32>(x: V) -> V {
    let special = logf_special_lanes(x);
    let y = logf_core::<V>(x.as_bits());
    if special.any() {
        return lane_fallback(x, y, special, |v| logf_special(v, logf_core::<f32>, "logf"));
    }
    y
}

/// Computes natural logarithm
///
/// Max found ULP 3.34
#[inline]
pub fn logf(x: f32) -> f32 {
    logf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_logf() {
        assert_ulp_f32(logf, f64::ln, 0.5, 2.0, 50000, 4);
        assert_ulp_f32(logf, f64::ln, 1e-30, 1e30, 50000, 4);
        assert_ulp_f32(logf, f64::ln, 1e-44, 1.1e-38, 5000, 4);
        assert_ulp_f32(logf, f64::ln, 1e30, f32::MAX, 5000, 4);
    }

    #[test]
    fn test_logf_special() {
        assert_eq!(logf(1.0).to_bits(), 0);
        assert_eq!(logf(0.0), f32::NEG_INFINITY);
        assert_eq!(logf(-0.0), f32::NEG_INFINITY);
        assert_eq!(logf(f32::INFINITY), f32::INFINITY);
        assert!(logf(f32::NEG_INFINITY).is_nan());
        assert!(logf(-1.0).is_nan());
        assert!(logf(f32::NAN).is_nan());
        let v = logf(f32::from_bits(1));
        let want = (f32::from_bits(1) as f64).ln() as f32;
        assert!(crate::ulp_distance_f32(v, want) <= 2, "Invalid result {}", v);
    }

    #[test]
    fn test_logf_lanes() {
        let inputs = [0.5, 3.0, 0.0, f32::NAN, 1e-40, -2.0, f32::INFINITY, 1.0, 1e30];
        assert_lanes_f32(logf, logf_simd, logf_simd, &inputs);
    }
}

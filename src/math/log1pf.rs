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
use crate::math::logf::{LN2, logf};
use crate::math::math_err::{divzerof, invalidf};
use crate::math::poly::estrin;
use crate::simd::{SimdBits, SimdF32};

/// Past this `1 + x` is computed as `x`
const LARGE_BOUND: f32 = f32::from_bits(0x7f000000);

/// `(log1p(m) - m) / m^2` on `[-0.25, 0.5]`
const C: [u32; 9] = [
    0xbf000000, // -0x1p-1
    0x3eaaaad5, // 0x1.5555aap-2
    0xbe80001c, // -0x1.000038p-2
    0x3e4cb3ae, // 0x1.99675cp-3
    0xbe2a77bc, // -0x1.54ef78p-3
    0x3e1450fa, // 0x1.28a1f4p-3
    0xbe06d488, // -0x1.0da91p-3
    0x3dd5e5b0, // 0x1.abcb6p-4
    0xbd3786af, // -0x1.6f0d5ep-5
];

#[inline(always)]
pub(crate) fn log1pf_inline<V: SimdF32>(x: V) -> V {
    // 1 + x = 2^k (1 + m) with m in [-0.25, 0.5]
    let m = x + V::splat(1.0);
    let k = (m.as_bits() - ubits::<V>(0x3f400000)) & ubits::<V>(0xff800000);
    let s = V::from_raw(ubits::<V>(0x40800000) - k);
    let m_scale = V::from_raw(x.as_bits() - k) + V::splat(-1.0).fma(V::splat(0.25), s);

    let m2 = m_scale * m_scale;
    let p = m_scale.fma(m2, estrin(m_scale, m2, &C));
    let scale_back = V::cvt_from_int(k) * V::splat(f32::from_bits(0x34000000));
    p.fma(scale_back, V::splat(LN2))
}

#[cold]
fn log1pf_special(x: f32) -> f32 {
    if x.is_nan() {
        return x + x;
    }
    if x == f32::INFINITY {
        return x;
    }
    if x == -1.0 {
        return divzerof(true, "log1pf");
    }
    if x < -1.0 {
        return invalidf(x, "log1pf");
    }
    logf(x)
}

/// Computes ln(1 + x) for every lane.
///
/// Max found ULP 1.63
#[inline]
pub fn log1pf_simd<V: SimdF32>(x: V) -> V {
    let special = x.cmp_le(V::splat(-1.0)) | !x.abs().cmp_le(V::splat(LARGE_BOUND));
    let y = log1pf_inline(x);
    // keeps the sign of zero
    let y = V::select(x.cmp_eq(V::splat(0.0)), x, y);
    if special.any() {
        return lane_fallback(x, y, special, log1pf_special);
    }
    y
}

/// Computes ln(1 + x)
///
/// Max found ULP 1.63
#[inline]
pub fn log1pf(x: f32) -> f32 {
    log1pf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_log1pf() {
        assert_ulp_f32(log1pf, f64::ln_1p, -0.9, 10.0, 50000, 3);
        assert_ulp_f32(log1pf, f64::ln_1p, -1e-5, 1e-5, 5000, 3);
        assert_ulp_f32(log1pf, f64::ln_1p, -0.9999, -0.5, 5000, 3);
        assert_ulp_f32(log1pf, f64::ln_1p, 10.0, 1e38, 50000, 3);
    }

    #[test]
    fn test_log1pf_special() {
        assert_eq!(log1pf(0.0).to_bits(), 0);
        assert_eq!(log1pf(-0.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(log1pf(-1.0), f32::NEG_INFINITY);
        assert_eq!(log1pf(f32::INFINITY), f32::INFINITY);
        assert!(log1pf(f32::NEG_INFINITY).is_nan());
        assert!(log1pf(-2.0).is_nan());
        assert!(log1pf(f32::NAN).is_nan());
        let v = log1pf(f32::MAX);
        let want = (f32::MAX as f64).ln() as f32;
        assert!(crate::ulp_distance_f32(v, want) <= 4, "Invalid result {}", v);
    }

    #[test]
    fn test_log1pf_lanes() {
        let inputs = [0.5, -0.75, -1.0, f32::NAN, 1e-40, -2.0, f32::INFINITY, 3e38, 7.0, -0.0];
        assert_lanes_f32(log1pf, log1pf_simd, log1pf_simd, &inputs);
    }
}

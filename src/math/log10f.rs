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
use crate::math::logf::{LN2, logf_reduce, logf_special, logf_special_lanes};
use crate::math::poly::pairwise_horner;
use crate::simd::{SimdBits, SimdF32};

const INV_LN10: f32 = f32::from_bits(0x3ede5bd9);

/// `(log10(1 + r) - r / ln10) / r^2` on `[-1/3, 1/3]`
const C: [u32; 8] = [
    0xbe5e5bce, // -0x1.bcb79cp-3
    0x3e143ce4, // 0x1.2879c8p-3
    0xbdde6a39, // -0x1.bcd472p-4
    0x3db2047c, // 0x1.6408f8p-4
    0xbd9237c0, // -0x1.246f8p-4
    0x3d78728a, // 0x1.f0e514p-5
    0xbd87e496, // -0x1.0fc92cp-4
    0x3d7afbb5, // 0x1.f5f76ap-5
];

#[inline(always)]
fn log10f_core<V: SimdF32>(ix: V::Bits) -> V {
    let (n, r) = logf_reduce::<V>(ix);
    // log10(x) = (n ln2 + r) / ln10 + r^2 P(r)
    let r2 = r * r;
    let y = r.fma(V::splat(LN2), n) * V::splat(INV_LN10);
    y.fma(pairwise_horner(r, r2, &C), r2)
}

/// Computes common logarithm for every lane.
///
/// Max found ULP 3.31
#[inline]
pub fn log10f_simd<V: SimdF32>(x: V) -> V {
    let special = logf_special_lanes(x);
    let y = log10f_core::<V>(x.as_bits());
    if special.any() {
        return lane_fallback(x, y, special, |v| logf_special(v, log10f_core::<f32>, "log10f"));
    }
    y
}

/// Computes common logarithm
///
/// Max found ULP 3.31
#[inline]
pub fn log10f(x: f32) -> f32 {
    log10f_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_log10f() {
        assert_ulp_f32(log10f, f64::log10, 0.5, 2.0, 50000, 4);
        assert_ulp_f32(log10f, f64::log10, 1e-30, 1e30, 50000, 4);
        assert_ulp_f32(log10f, f64::log10, 1e-44, 1.1e-38, 5000, 4);
    }

    #[test]
    fn test_log10f_special() {
        assert_eq!(log10f(1.0).to_bits(), 0);
        assert_eq!(log10f(0.0), f32::NEG_INFINITY);
        assert_eq!(log10f(f32::INFINITY), f32::INFINITY);
        assert!(log10f(-1.0).is_nan());
        assert!(log10f(f32::NAN).is_nan());
    }

    #[test]
    fn test_log10f_lanes() {
        let inputs = [0.5, 3.0, 0.0, f32::NAN, 1e-40, -2.0, f32::INFINITY, 1.0, 1e30];
        assert_lanes_f32(log10f, log10f_simd, log10f_simd, &inputs);
    }
}

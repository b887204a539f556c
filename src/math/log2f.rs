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
use crate::math::logf::{logf_reduce, logf_special, logf_special_lanes};
use crate::math::poly::pairwise_horner;
use crate::simd::{SimdBits, SimdF32};

/// `log2(1 + r) / r` on `[-1/3, 1/3]`
const C: [u32; 9] = [
    0x3fb8aa3b, // 0x1.715476p0
    0xbf38aa2c, // -0x1.715458p-1
    0x3ef6380e, // 0x1.ec701cp-2
    0xbeb8b8d2, // -0x1.7171a4p-2
    0x3e93d05c, // 0x1.27a0b8p-2
    0xbe728a1f, // -0x1.e5143ep-3
    0x3e4ec765, // 0x1.9d8ecap-3
    0xbe633ad8, // -0x1.c675bp-3
    0x3e4f24a8, // 0x1.9e495p-3
];

#[inline(always)]
fn log2f_core<V: SimdF32>(ix: V::Bits) -> V {
    let (n, r) = logf_reduce::<V>(ix);
    // log2(x) = n + r P(r)
    let r2 = r * r;
    n.fma(pairwise_horner(r, r2, &C), r)
}

/// Computes binary logarithm for every lane.
///
/// Max found ULP 2.48
#[inline]
pub fn log2f_simd<V: SimdF32>(x: V) -> V {
    let special = logf_special_lanes(x);
    let y = log2f_core::<V>(x.as_bits());
    if special.any() {
        return lane_fallback(x, y, special, |v| logf_special(v, log2f_core::<f32>, "log2f"));
    }
    y
}

/// Computes binary logarithm
///
/// Max found ULP 2.48
#[inline]
pub fn log2f(x: f32) -> f32 {
    log2f_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_log2f() {
        assert_ulp_f32(log2f, f64::log2, 0.5, 2.0, 50000, 3);
        assert_ulp_f32(log2f, f64::log2, 1e-30, 1e30, 50000, 3);
        assert_ulp_f32(log2f, f64::log2, 1e-44, 1.1e-38, 5000, 3);
    }

    #[test]
    fn test_log2f_exact_powers() {
        for k in -126..128 {
            let x = f32::from_bits(((k + 127) as u32) << 23);
            assert_eq!(log2f(x), k as f32, "Invalid result for 2^{}", k);
        }
    }

    #[test]
    fn test_log2f_special() {
        assert_eq!(log2f(0.0), f32::NEG_INFINITY);
        assert_eq!(log2f(f32::INFINITY), f32::INFINITY);
        assert!(log2f(-1.0).is_nan());
        assert!(log2f(f32::NAN).is_nan());
    }

    #[test]
    fn test_log2f_lanes() {
        let inputs = [0.5, 3.0, 0.0, f32::NAN, 1e-40, -2.0, f32::INFINITY, 1.0, 1e30];
        assert_lanes_f32(log2f, log2f_simd, log2f_simd, &inputs);
    }
}

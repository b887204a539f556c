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
use crate::math::expf::{exp_poly5, scale_poly_f32};
use crate::simd::SimdF32;

/// `2^r - 1`, lowest degree first
const C: [u32; 5] = [
    0x3f317211, // 0x1.62e422p-1
    0x3e75fcde, // 0x1.ebf9bcp-3
    0x3d635e99, // 0x1.c6bd32p-5
    0x3c1e74f2, // 0x1.3ce9e4p-7
    0x3aaccbbd, // 0x1.59977ap-10
];

/// Computes 2^x for every lane.
///
/// Max found ULP 2.0
#[inline]
pub fn exp2f_simd<V: SimdF32>(x: V) -> V {
    // x = n + r, r in [-1/2, 1/2]
    let n = x.round_away();
    let r = x - n;
    let poly = exp_poly5(r, &C);
    scale_poly_f32(x, n, poly, "exp2f")
}

/// Computes 2^x
///
/// Max found ULP 2.0
#[inline]
pub fn exp2f(x: f32) -> f32 {
    exp2f_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_exp2f() {
        assert_ulp_f32(exp2f, f64::exp2, -10.0, 10.0, 50000, 3);
        assert_ulp_f32(exp2f, f64::exp2, -149.0, 127.9, 50000, 3);
    }

    #[test]
    fn test_exp2f_special() {
        assert_eq!(exp2f(0.0), 1.0);
        assert_eq!(exp2f(3.0), 8.0);
        assert_eq!(exp2f(-149.0), f32::from_bits(1));
        assert_eq!(exp2f(128.0), f32::INFINITY);
        assert_eq!(exp2f(-151.0), 0.0);
        assert_eq!(exp2f(f32::INFINITY), f32::INFINITY);
        assert_eq!(exp2f(f32::NEG_INFINITY), 0.0);
        assert!(exp2f(f32::NAN).is_nan());
    }

    #[test]
    fn test_exp2f_lanes() {
        let inputs = [0.5, -126.5, 127.5, f32::NAN, 300.0, -0.0, 7.25, -140.0, 1.0];
        assert_lanes_f32(exp2f, exp2f_simd, exp2f_simd, &inputs);
    }
}

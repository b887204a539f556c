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

/// `1 / log10(2)`
const INV_LOG10_2: f32 = f32::from_bits(0x40549a78);
/// `log10(2)` split in two parts
const LOG10_2_HI: f32 = f32::from_bits(0x3e9a209b);
const LOG10_2_LO: f32 = f32::from_bits(0x32760860);

/// `10^r - 1`, lowest degree first
const C: [u32; 5] = [
    0x40135d8b, // 0x1.26bb16p+1
    0x4029a869, // 0x1.5350d2p+1
    0x40023a25, // 0x1.04744ap+1
    0x3f96c0bb, // 0x1.2d8176p+0
    0x3f095a0d, // 0x1.12b41ap-1
];

/// Computes 10^x for every lane.
///
/// Max found ULP 2.36
#[inline]
pub fn exp10f_simd<V: SimdF32>(x: V) -> V {
    // x = n * log10(2) + r, r in [-log10(2)/2, log10(2)/2]
    let n = (x * V::splat(INV_LOG10_2)).round_away();
    let r = x.fms(n, V::splat(LOG10_2_HI)).fma(n, V::splat(LOG10_2_LO));
    let poly = exp_poly5(r, &C);
    scale_poly_f32(x, n, poly, "exp10f")
}

/// Computes 10^x
///
/// Max found ULP 2.36
#[inline]
pub fn exp10f(x: f32) -> f32 {
    exp10f_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_exp10f() {
        assert_ulp_f32(exp10f, libm::exp10, -3.0, 3.0, 50000, 4);
        assert_ulp_f32(exp10f, libm::exp10, -44.8, 38.5, 50000, 4);
    }

    #[test]
    fn test_exp10f_special() {
        assert_eq!(exp10f(0.0), 1.0);
        assert_eq!(exp10f(39.0), f32::INFINITY);
        assert_eq!(exp10f(-46.0), 0.0);
        assert_eq!(exp10f(f32::INFINITY), f32::INFINITY);
        assert_eq!(exp10f(f32::NEG_INFINITY), 0.0);
        assert!(exp10f(f32::NAN).is_nan());
    }

    #[test]
    fn test_exp10f_lanes() {
        let inputs = [0.5, -38.5, 38.4, f32::NAN, -0.0, 2.0, -45.0, 1e20, 0.01];
        assert_lanes_f32(exp10f, exp10f_simd, exp10f_simd, &inputs);
    }
}

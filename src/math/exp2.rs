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
use crate::math::exp::scale_poly;
use crate::math::poly::pairwise_horner;
use crate::simd::SimdF64;

/// `log2(2^1022)`
pub(crate) const EXP2_SPECIAL_BOUND: f64 = f64::from_bits(0x408ff00000000000);
/// `1.5 * 2^52 / 128`
const SHIFT_N: f64 = f64::from_bits(0x42c8000000000000);

/// `(2^r - 1) / r`
const C: [u64; 4] = [
    0x3fe62e42fefa3686, // 0x1.62e42fefa3686p-1
    0x3fcebfbdff82c241, // 0x1.ebfbdff82c241p-3
    0x3fac6b09b16de99a, // 0x1.c6b09b16de99ap-5
    0x3f83b2abf5571ad8, // 0x1.3b2abf5571ad8p-7
];

/// Computes 2^x for every lane.
///
/// Max found ULP 1.65
#[inline]
pub fn exp2_simd<V: SimdF64>(x: V) -> V {
    let special = x.abs_gt(V::splat(EXP2_SPECIAL_BOUND));
    // n = round(x * N) / N
    let z = V::splat(SHIFT_N) + x;
    let u = z.as_bits();
    let n = z - V::splat(SHIFT_N);
    let r = x - n;

    let r2 = r * r;
    let poly = r * pairwise_horner(r, r2, &C);
    scale_poly(x, u, n, poly, special, 1280.0, "exp2")
}

/// Computes 2^x
///
/// Max found ULP 1.65
#[inline]
pub fn exp2(x: f64) -> f64 {
    exp2_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{around_f64, assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_exp2() {
        assert_ulp_f64(exp2, f64::exp2, -10.0, 10.0, 20000, 3);
        assert_ulp_f64(exp2, f64::exp2, -1021.0, 1023.9, 20000, 3);
        for x in around_f64(EXP2_SPECIAL_BOUND) {
            let v = exp2(x);
            assert!(
                crate::ulp_distance_f64(v, x.exp2()) <= 3,
                "Invalid result {}, expected {}",
                v,
                x.exp2()
            );
        }
    }

    #[test]
    fn test_exp2_special() {
        assert_eq!(exp2(0.0), 1.0);
        assert_eq!(exp2(10.0), 1024.0);
        assert_eq!(exp2(-1074.0), f64::from_bits(1));
        assert_eq!(exp2(1024.0), f64::INFINITY);
        assert_eq!(exp2(-1080.0), 0.0);
        assert_eq!(exp2(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp2(f64::NEG_INFINITY), 0.0);
        assert!(exp2(f64::NAN).is_nan());
    }

    #[test]
    fn test_exp2_lanes() {
        let inputs = [1.5, -1023.5, 1023.75, f64::NAN, 0.0, -2.0, 5000.0, -0.125];
        assert_lanes_f64(exp2, exp2_simd, exp2_simd, &inputs);
    }
}

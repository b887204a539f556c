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
use crate::math::exp::{SHIFT, scale_poly};
use crate::simd::SimdF64;

/// `log10(2^1022)`
pub(crate) const EXP10_SPECIAL_BOUND: f64 = f64::from_bits(0x40733a6fa2f05a71);
/// `128 / log10(2)`
const INV_LOG10_2_N: f64 = f64::from_bits(0x407a934f0979a371);
/// `log10(2) / 128`
const LOG10_2_HI_N: f64 = f64::from_bits(0x3f634413509f79ff);
const LOG10_2_LO_N: f64 = f64::from_bits(0xbbd9dc1da994fd21);

const C: [u64; 4] = [
    0x40026bb1bbb55240, // 0x1.26bb1bbb5524p1
    0x40053524c73cecda, // 0x1.53524c73cecdap1
    0x400047060efb781c, // 0x1.047060efb781cp1
    0x3ff2bd76040f0d16, // 0x1.2bd76040f0d16p0
];

/// Computes 10^x for every lane.
///
/// Max found ULP 1.65
#[inline]
pub fn exp10_simd<V: SimdF64>(x: V) -> V {
    let special = x.abs_gt(V::splat(EXP10_SPECIAL_BOUND));
    // n = round(x / (log10(2) / N))
    let z = V::splat(SHIFT).fma(x, V::splat(INV_LOG10_2_N));
    let u = z.as_bits();
    let n = z - V::splat(SHIFT);
    let r = x
        .fms(n, V::splat(LOG10_2_HI_N))
        .fms(n, V::splat(LOG10_2_LO_N));

    // 10^r - 1 ~ c0 r + c1 r^2 + c2 r^3 + c3 r^4
    let c = |i: usize| V::splat(f64::from_bits(C[i]));
    let p = c(0).fma(r, c(1));
    let q = c(2).fma(r, c(3));
    let r2 = r * r;
    let p = p.fma(q, r2);
    let poly = r * p;
    scale_poly(x, u, n, poly, special, 163840.0, "exp10")
}

/// Computes 10^x
///
/// Max found ULP 1.65
#[inline]
pub fn exp10(x: f64) -> f64 {
    exp10_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{around_f64, assert_lanes_f64, assert_ulp_f64};

    /// `pow` is correctly rounded in practice, `exp10` of libm is not
    fn reference(x: f64) -> f64 {
        10f64.powf(x)
    }

    #[test]
    fn test_exp10() {
        assert_ulp_f64(exp10, reference, -4.0, 4.0, 20000, 3);
        assert_ulp_f64(exp10, reference, -307.0, 308.2, 20000, 3);
        for x in around_f64(EXP10_SPECIAL_BOUND) {
            let v = exp10(x);
            assert!(
                crate::ulp_distance_f64(v, reference(x)) <= 3,
                "Invalid result {}, expected {}",
                v,
                reference(x)
            );
        }
    }

    #[test]
    fn test_exp10_special() {
        assert_eq!(exp10(0.0), 1.0);
        assert_eq!(exp10(309.0), f64::INFINITY);
        assert_eq!(exp10(-324.0), 0.0);
        assert_eq!(exp10(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp10(f64::NEG_INFINITY), 0.0);
        assert!(exp10(f64::NAN).is_nan());
        let x = 1.7659916284063524;
        let v = exp10(x);
        assert!(crate::ulp_distance_f64(v, reference(x)) <= 2, "Invalid result {}", v);
        let v = exp10(2.0);
        assert!(crate::ulp_distance_f64(v, 100.0) <= 2, "Invalid result {}", v);
    }

    #[test]
    fn test_exp10_lanes() {
        let inputs = [0.3, -307.9, 308.0, f64::NAN, 1e10, -1e10, -0.0, 12.5];
        assert_lanes_f64(exp10, exp10_simd, exp10_simd, &inputs);
    }
}

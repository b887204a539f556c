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
use crate::math::exp::exp;
use crate::math::expf::expf_inline;
use crate::math::math_err::check_oflowf;
use crate::simd::{SimdBits, SimdF32};

/// Past this `expf(|x|)` may overflow
const SPECIAL_BOUND: f32 = f32::from_bits(0x42ad496c);

/// Computes cosh for every lane.
///
/// Max found ULP 1.89
#[inline]
pub fn coshf_simd<V: SimdF32>(x: V) -> V {
    let ax = x.abs();
    let t = expf_inline(ax);
    let y = t * V::splat(0.5) + V::splat(0.5) / t;

    let special = ax.cmp_ge(V::splat(SPECIAL_BOUND));
    if special.any() {
        return lane_fallback(x, y, special, coshf_special);
    }
    y
}

#[cold]
fn coshf_special(x: f32) -> f32 {
    let ax = x.abs();
    if ax.is_infinite() {
        return ax;
    }
    // e^-|x| is far below half an ULP here
    check_oflowf((exp(ax as f64) * 0.5) as f32, "coshf")
}

/// Computes cosh
///
/// Max found ULP 1.89
#[inline]
pub fn coshf(x: f32) -> f32 {
    coshf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{around_f32, assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_coshf() {
        assert_ulp_f32(coshf, f64::cosh, -3.0, 3.0, 50000, 3);
        assert_ulp_f32(coshf, f64::cosh, -89.4, 89.4, 50000, 3);
        for x in around_f32(SPECIAL_BOUND) {
            let v = coshf(x);
            let want = (x as f64).cosh() as f32;
            assert!(
                crate::ulp_distance_f32(v, want) <= 3,
                "Invalid result {}, expected {}",
                v,
                want
            );
        }
    }

    #[test]
    fn test_coshf_regression() {
        let x = f32::from_bits(0x4074000f);
        let v = coshf(x);
        let want = (x as f64).cosh() as f32;
        assert!(crate::ulp_distance_f32(v, want) <= 3, "Invalid result {}", v);
    }

    #[test]
    fn test_coshf_special() {
        assert_eq!(coshf(0.0), 1.0);
        assert_eq!(coshf(f32::INFINITY), f32::INFINITY);
        assert_eq!(coshf(f32::NEG_INFINITY), f32::INFINITY);
        assert!(coshf(f32::NAN).is_nan());
        assert_eq!(coshf(90.0), f32::INFINITY);
        assert_eq!(coshf(-90.0), f32::INFINITY);
    }

    #[test]
    fn test_coshf_lanes() {
        let inputs = [0.5, -3.0, 89.0, f32::NAN, 1e-10, -100.0, f32::INFINITY, -0.0, 88.0];
        assert_lanes_f32(coshf, coshf_simd, coshf_simd, &inputs);
    }
}

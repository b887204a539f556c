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
use crate::math::common::ubits;
use crate::math::expm1f::expm1f_inline;
use crate::simd::SimdF32;

/// Past this tanhf rounds to 1
const SPECIAL_BOUND: f32 = f32::from_bits(0x41102cb3);

/// Computes tanh for every lane.
///
/// Max found ULP 2.09
#[inline]
pub fn tanhf_simd<V: SimdF32>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() & ubits::<V>(0x80000000);

    let q = expm1f_inline(ax + ax);
    let y = q / (q + V::splat(2.0));

    let special = ax.cmp_gt(V::splat(SPECIAL_BOUND));
    let y = V::select(special, V::splat(1.0), y);
    V::from_raw(y.as_bits() ^ sign)
}

/// Computes tanh
///
/// Max found ULP 2.09
#[inline]
pub fn tanhf(x: f32) -> f32 {
    tanhf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{around_f32, assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_tanhf() {
        assert_ulp_f32(tanhf, f64::tanh, -1.0, 1.0, 50000, 3);
        assert_ulp_f32(tanhf, f64::tanh, -1e-5, 1e-5, 5000, 3);
        assert_ulp_f32(tanhf, f64::tanh, -12.0, 12.0, 50000, 3);
        for x in around_f32(SPECIAL_BOUND) {
            let v = tanhf(x);
            let want = (x as f64).tanh() as f32;
            assert!(
                crate::ulp_distance_f32(v, want) <= 3,
                "Invalid result {}, expected {}",
                v,
                want
            );
        }
    }

    #[test]
    fn test_tanhf_special() {
        assert_eq!(tanhf(-0.0).to_bits(), 0x80000000);
        assert_eq!(tanhf(f32::INFINITY), 1.0);
        assert_eq!(tanhf(f32::NEG_INFINITY), -1.0);
        assert!(tanhf(f32::NAN).is_nan());
        assert_eq!(tanhf(-20.0), -1.0);
    }

    #[test]
    fn test_tanhf_lanes() {
        let inputs = [0.5, -3.0, 9.5, f32::NAN, 1e-10, -100.0, f32::INFINITY, -0.0, 2.0];
        assert_lanes_f32(tanhf, tanhf_simd, tanhf_simd, &inputs);
    }
}

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
use crate::math::expm1::expm1_inline;
use crate::simd::SimdF64;

/// Past this tanh rounds to 1
const SPECIAL_BOUND: f64 = f64::from_bits(0x4032cccccccccccd);

/// Computes tanh for every lane.
///
/// Max found ULP 2.59
#[inline]
pub fn tanh_simd<V: SimdF64>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() & ubits::<V>(0x8000000000000000);

    // tanh(x) = (e^2x - 1) / (e^2x + 1)
    let q = expm1_inline(ax + ax);
    let y = q / (q + V::splat(2.0));

    let special = ax.cmp_gt(V::splat(SPECIAL_BOUND));
    let y = V::select(special, V::splat(1.0), y);
    V::from_raw(y.as_bits() ^ sign)
}

/// Computes tanh
///
/// Max found ULP 2.59
#[inline]
pub fn tanh(x: f64) -> f64 {
    tanh_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{around_f64, assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_tanh() {
        assert_ulp_f64(tanh, f64::tanh, -1.0, 1.0, 20000, 4);
        assert_ulp_f64(tanh, f64::tanh, -1e-7, 1e-7, 2000, 4);
        assert_ulp_f64(tanh, f64::tanh, -25.0, 25.0, 20000, 4);
        for x in around_f64(SPECIAL_BOUND) {
            let v = tanh(x);
            assert!(
                crate::ulp_distance_f64(v, x.tanh()) <= 4,
                "Invalid result {}, expected {}",
                v,
                x.tanh()
            );
        }
    }

    #[test]
    fn test_tanh_special() {
        assert_eq!(tanh(0.0).to_bits(), 0);
        assert_eq!(tanh(-0.0).to_bits(), 0x8000000000000000);
        assert_eq!(tanh(f64::INFINITY), 1.0);
        assert_eq!(tanh(f64::NEG_INFINITY), -1.0);
        assert!(tanh(f64::NAN).is_nan());
        assert_eq!(tanh(1e300), 1.0);
        assert_eq!(tanh(-30.0), -1.0);
    }

    #[test]
    fn test_tanh_odd() {
        for x in [1e-10, 0.3, 2.0, 15.0] {
            assert_eq!(tanh(-x), -tanh(x), "Invalid result for {}", x);
        }
    }

    #[test]
    fn test_tanh_lanes() {
        let inputs = [0.5, -3.0, 19.0, f64::NAN, 1e-20, -1000.0, f64::INFINITY, -0.0];
        assert_lanes_f64(tanh, tanh_simd, tanh_simd, &inputs);
    }
}

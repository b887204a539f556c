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
use crate::math::log::{log_reduce, log_special, log_special_lanes};
use crate::math::log_data::LOG_TABLE;
use crate::math::poly::pairwise_horner;
use crate::simd::{SimdBits, SimdF64};

const INV_LN2: f64 = f64::from_bits(0x3ff71547652b82fe);

/// Log coefficients scaled by `log2(e)`
const C: [u64; 5] = [
    0xbfe71547652b8300, // -0x1.71547652b83p-1
    0x3fdec709dc340953, // 0x1.ec709dc340953p-2
    0xbfd71547651c8f35, // -0x1.71547651c8f35p-2
    0x3fd2777ebe12dda5, // 0x1.2777ebe12dda5p-2
    0xbfcec738d616fe26, // -0x1.ec738d616fe26p-3
];

#[inline(always)]
fn log2_core<V: SimdF64>(ix: V::Bits) -> V {
    let (r, k, i) = log_reduce::<V>(ix);
    let log2c = V::from_raw(i.lookup(|j| LOG_TABLE[j].2));

    // log2(x) = log1p(r) / ln2 + log2(c) + k
    let w = log2c.fma(r, V::splat(INV_LN2)) + k;
    let r2 = r * r;
    w.fma(r2, pairwise_horner(r, r2, &C))
}

/// Computes binary logarithm for every lane.
///
/// Max found ULP 2.59
#[inline]
pub fn log2_simd<V: SimdF64>(x: V) -> V {
    let special = log_special_lanes(x);
    let y = log2_core::<V>(x.as_bits());
    if special.any() {
        return lane_fallback(x, y, special, |v| log_special(v, log2_core::<f64>, "log2"));
    }
    y
}

/// Computes binary logarithm
///
/// Max found ULP 2.59
#[inline]
pub fn log2(x: f64) -> f64 {
    log2_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_log2() {
        assert_ulp_f64(log2, f64::log2, 0.5, 2.0, 20000, 4);
        assert_ulp_f64(log2, f64::log2, 1e-300, 1e300, 20000, 4);
        assert_ulp_f64(log2, f64::log2, 1e-320, 2.2e-308, 2000, 4);
    }

    #[test]
    fn test_log2_exact_powers() {
        for k in -1074..1024 {
            let x = if k >= -1022 {
                f64::from_bits(((k + 1023) as u64) << 52)
            } else {
                f64::from_bits(1 << (k + 1074))
            };
            assert_eq!(log2(x), k as f64, "Invalid result for 2^{}", k);
        }
    }

    #[test]
    fn test_log2_special() {
        assert_eq!(log2(1.0).to_bits(), 0);
        assert_eq!(log2(0.0), f64::NEG_INFINITY);
        assert_eq!(log2(f64::INFINITY), f64::INFINITY);
        assert!(log2(-1.0).is_nan());
        assert!(log2(f64::NAN).is_nan());
    }

    #[test]
    fn test_log2_lanes() {
        let inputs = [0.5, 3.0, 0.0, f64::NAN, 1e-310, -2.0, f64::INFINITY, 1.0, 1e300];
        assert_lanes_f64(log2, log2_simd, log2_simd, &inputs);
    }
}

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

const INV_LN10: f64 = f64::from_bits(0x3fdbcb7b1526e50e);
const LOG10_2: f64 = f64::from_bits(0x3fd34413509f79ff);

/// Log coefficients divided by `ln(10)`
const C: [u64; 5] = [
    0xbfcbcb7b1526e506, // -0x1.bcb7b1526e506p-3
    0x3fc287a7636be1d1, // 0x1.287a7636be1d1p-3
    0xbfbbcb7b158af938, // -0x1.bcb7b158af938p-4
    0x3fb63c78734e6d07, // 0x1.63c78734e6d07p-4
    0xbfb287461742fee4, // -0x1.287461742fee4p-4
];

#[inline(always)]
fn log10_core<V: SimdF64>(ix: V::Bits) -> V {
    let (r, k, i) = log_reduce::<V>(ix);
    let log10c = V::from_raw(i.lookup(|j| LOG_TABLE[j].3));

    // log10(x) = log1p(r) / ln10 + log10(c) + k log10(2)
    let hi = log10c.fma(r, V::splat(INV_LN10)).fma(k, V::splat(LOG10_2));
    let r2 = r * r;
    hi.fma(r2, pairwise_horner(r, r2, &C))
}

/// Computes common logarithm for every lane.
///
/// Max found ULP 2.47
#[inline]
pub fn log10_simd<V: SimdF64>(x: V) -> V {
    let special = log_special_lanes(x);
    let y = log10_core::<V>(x.as_bits());
    if special.any() {
        return lane_fallback(x, y, special, |v| log_special(v, log10_core::<f64>, "log10"));
    }
    y
}

/// Computes common logarithm
///
/// Max found ULP 2.47
#[inline]
pub fn log10(x: f64) -> f64 {
    log10_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_log10() {
        assert_ulp_f64(log10, f64::log10, 0.5, 2.0, 20000, 4);
        assert_ulp_f64(log10, f64::log10, 1e-300, 1e300, 20000, 4);
        assert_ulp_f64(log10, f64::log10, 1e-320, 2.2e-308, 2000, 4);
    }

    #[test]
    fn test_log10_special() {
        assert_eq!(log10(1.0).to_bits(), 0);
        assert_eq!(log10(0.0), f64::NEG_INFINITY);
        assert_eq!(log10(f64::INFINITY), f64::INFINITY);
        assert!(log10(-1.0).is_nan());
        assert!(log10(f64::NAN).is_nan());
        let v = log10(1000.0);
        assert!(crate::ulp_distance_f64(v, 3.0) <= 3, "Invalid result {}", v);
    }

    #[test]
    fn test_log10_lanes() {
        let inputs = [0.5, 3.0, 0.0, f64::NAN, 1e-310, -2.0, f64::INFINITY, 1.0, 1e300];
        assert_lanes_f64(log10, log10_simd, log10_simd, &inputs);
    }
}

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
use crate::math::erf_data::ERF_TABLE;
use crate::simd::{SimdBits, SimdF64};

/// Past this erf rounds to 1, `6 - 1/128`
const MAX: f64 = 5.9921875;
const MAX_INDEX: u64 = 768;
/// Rounds to a multiple of 1/128
const SHIFT: f64 = f64::from_bits(0x42c0000000000000);

const THIRD: f64 = f64::from_bits(0x3fd5555555555556);
const TENTH: f64 = f64::from_bits(0xbfb999999999999a);
const TWO_OVER_FIVE: f64 = f64::from_bits(0xbfd999999999999a);
const TWO_OVER_NINE: f64 = f64::from_bits(0xbfcc71c71c71c71c);
const TWO_OVER_FIFTEEN: f64 = f64::from_bits(0x3fc1111111111111);
const TWO_OVER_FORTY_FIVE: f64 = f64::from_bits(0x3fa6c16c16c16c17);

/// Computes error function for every lane.
///
/// With `r` the multiple of 1/128 nearest to `|x|` and `d = |x| - r`,
/// `erf(x) ~ erf(r) + scale(r) d (1 - r d + p2 d^2 + ... + p5 d^5)` where the
/// `p` are the Taylor terms of `e^(-x^2)` around `r`. There are no special
/// lanes, NaN goes through a clamped table index.
///
/// Max found ULP 1.72
#[inline]
pub fn erf_simd<V: SimdF64>(x: V) -> V {
    let a = x.abs();
    let sign = x.as_bits() ^ a.as_bits();
    // NaN fails both
    let a_le_max = a.cmp_le(V::splat(MAX));
    let a_gt_max = a.cmp_gt(V::splat(MAX));

    let shift = V::splat(SHIFT);
    let z = a + shift;
    let i = V::Bits::select(a_le_max, z.as_bits() - shift.as_bits(), V::Bits::splat(MAX_INDEX));
    let erf_r = V::from_raw(i.lookup(|j| ERF_TABLE[j].0));
    let scale = V::from_raw(i.lookup(|j| ERF_TABLE[j].1));

    let r = z - shift;
    let d = a - r;
    let d2 = d * d;
    let r2 = r * r;

    let third = V::splat(THIRD);
    let p1 = r;
    let p2 = third.fms(r2, third + third);
    let p3 = r * V::splat(-0.5).fma(r2, third);
    let p4 = V::splat(TENTH).fms(r2, V::splat(TWO_OVER_FIVE).fma(r2, V::splat(TWO_OVER_FIFTEEN)));
    let p5 = r * (V::splat(0.5) * third).fma(
        r2,
        V::splat(TWO_OVER_NINE).fma(r2, V::splat(TWO_OVER_FORTY_FIVE)),
    );

    let p34 = p3.fma(d, p4);
    let p12 = p1.fma(d, p2);
    let y = p34.fma(d2, p5);
    let y = p12.fma(d2, y);
    let y = erf_r.fma(scale, d.fms(d2, y));

    let y = V::select(a_gt_max, V::splat(1.0), y);
    V::from_raw(y.as_bits() | sign)
}

/// Computes error function
///
/// Max found ULP 1.72
#[inline]
pub fn erf(x: f64) -> f64 {
    erf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_erf() {
        assert_ulp_f64(erf, libm::erf, -6.0, 6.0, 50000, 3);
        assert_ulp_f64(erf, libm::erf, -0.1, 0.1, 20000, 3);
        assert_ulp_f64(erf, libm::erf, 1e-300, 1e-10, 5000, 3);
        // worst case of the sampled scan
        let x = 0.004010503570837124;
        let v = erf(x);
        assert!(crate::ulp_distance_f64(v, libm::erf(x)) <= 3, "Invalid result {}", v);
    }

    #[test]
    fn test_erf_special() {
        assert_eq!(erf(0.0).to_bits(), 0);
        assert_eq!(erf(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(erf(f64::INFINITY), 1.0);
        assert_eq!(erf(f64::NEG_INFINITY), -1.0);
        assert!(erf(f64::NAN).is_nan());
        assert_eq!(erf(MAX + 0.5), 1.0);
        assert_eq!(erf(-1e300), -1.0);
        let tiny = f64::from_bits(1);
        let v = erf(tiny);
        assert!(v > 0.0 && v <= f64::from_bits(2), "Invalid result {}", v);
    }

    #[test]
    fn test_erf_odd() {
        for x in [1e-8, 0.3, 1.5, 3.25, 5.99] {
            assert_eq!(erf(-x).to_bits(), (-erf(x)).to_bits(), "Invalid result for {}", x);
        }
    }

    #[test]
    fn test_erf_lanes() {
        let inputs = [0.5, -3.0, 5.995, f64::NAN, 1e-20, -0.0, f64::INFINITY, 2.0];
        assert_lanes_f64(erf, erf_simd, erf_simd, &inputs);
    }
}

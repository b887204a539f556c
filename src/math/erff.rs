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
use crate::math::erf_data::ERFF_TABLE;
use crate::simd::{SimdBits, SimdF32};

/// Past this erff rounds to 1
const MAX: f32 = 3.9375;
const MAX_INDEX: u32 = 504;
/// Rounds to a multiple of 1/128
const SHIFT: f32 = f32::from_bits(0x47800000);
const THIRD: f32 = f32::from_bits(0x3eaaaaab);
const TWO_THIRDS: f32 = f32::from_bits(0x3f2aaaab);

/// Computes error function for every lane.
///
/// Same expansion as [erf](crate::erf) around multiples of 1/128, cut after
/// the `d^3` term.
///
/// Max found ULP 1.85
#[inline]
pub fn erff_simd<V: SimdF32>(x: V) -> V {
    let a = x.abs();
    let sign = x.as_bits() ^ a.as_bits();
    let a_le_max = a.cmp_le(V::splat(MAX));
    let a_gt_max = a.cmp_gt(V::splat(MAX));

    let shift = V::splat(SHIFT);
    let z = a + shift;
    let i = V::Bits::select(a_le_max, z.as_bits() - shift.as_bits(), V::Bits::splat(MAX_INDEX));
    let erf_r = V::from_raw(i.lookup(|j| ERFF_TABLE[j].0));
    let scale = V::from_raw(i.lookup(|j| ERFF_TABLE[j].1));

    let r = z - shift;
    let d = a - r;
    let d2 = d * d;
    let r2 = r * r;

    // erf(x) ~ erf(r) + scale (d - d^2 (r - d (2r^2 - 1) / 3))
    let p2 = V::splat(-THIRD).fma(r2, V::splat(TWO_THIRDS));
    let t = r.fms(d, p2);
    let y = erf_r.fma(scale, d.fms(d2, t));

    let y = V::select(a_gt_max, V::splat(1.0), y);
    V::from_raw(y.as_bits() | sign)
}

/// Computes error function
///
/// Max found ULP 1.85
#[inline]
pub fn erff(x: f32) -> f32 {
    erff_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_erff() {
        assert_ulp_f32(erff, libm::erf, -4.5, 4.5, 100000, 3);
        assert_ulp_f32(erff, libm::erf, -0.01, 0.01, 20000, 3);
        assert_ulp_f32(erff, libm::erf, 1e-38, 1e-4, 20000, 3);
    }

    #[test]
    fn test_erff_special() {
        assert_eq!(erff(0.0).to_bits(), 0);
        assert_eq!(erff(-0.0).to_bits(), 0x80000000);
        assert_eq!(erff(f32::INFINITY), 1.0);
        assert_eq!(erff(f32::NEG_INFINITY), -1.0);
        assert!(erff(f32::NAN).is_nan());
        assert_eq!(erff(4.0), 1.0);
        assert_eq!(erff(-1e30), -1.0);
    }

    #[test]
    fn test_erff_odd() {
        for x in [1e-6f32, 0.25, 0.9, 2.5, 3.9] {
            assert_eq!(erff(-x).to_bits(), (-erff(x)).to_bits(), "Invalid result for {}", x);
        }
    }

    #[test]
    fn test_erff_lanes() {
        let inputs = [0.5, -3.0, 3.95, f32::NAN, 1e-20, -0.0, f32::INFINITY, 2.0, -1e-40];
        assert_lanes_f32(erff, erff_simd, erff_simd, &inputs);
    }
}

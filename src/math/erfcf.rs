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
use crate::math::erf_data::ERFCF_TABLE;
use crate::math::math_err::uflowf;
use crate::simd::{SimdBits, SimdF32};

/// From here on erfcf rounds to 0
const MAX: f32 = 10.0625;
/// Rounds to a multiple of 1/64
const SHIFT: f32 = f32::from_bits(0x48000000);
/// Removes the `2^47` table scale
const TABLE_SCALE: f32 = f32::from_bits(0x28000000);
const THIRD: f32 = f32::from_bits(0x3eaaaaab);
const TWO_THIRDS: f32 = f32::from_bits(0x3f2aaaab);
const TWO_OVER_FIFTEEN: f32 = f32::from_bits(0x3e088889);
const TWO_OVER_FIVE: f32 = f32::from_bits(0xbecccccd);
const TENTH: f32 = f32::from_bits(0xbdcccccd);

#[cold]
fn erfcf_special(x: f32) -> f32 {
    if x.is_nan() {
        return x + x;
    }
    if x < 0.0 {
        return 2.0;
    }
    if x == f32::INFINITY {
        return 0.0;
    }
    uflowf(false, "erfcf")
}

/// Computes complementary error function for every lane.
///
/// Expansion around multiples of 1/64 as in [erfc](crate::erfc), cut after
/// the `d^5` term.
///
/// Max found ULP 1.46
#[inline]
pub fn erfcf_simd<V: SimdF32>(x: V) -> V {
    let special = !x.abs().cmp_lt(V::splat(MAX));
    let a = V::select(special, V::splat(0.0), x.abs());

    let shift = V::splat(SHIFT);
    let z = a + shift;
    let i = z.as_bits() - shift.as_bits();
    let erfc_r = V::from_raw(i.lookup(|j| ERFCF_TABLE[j].0));
    let scale = V::from_raw(i.lookup(|j| ERFCF_TABLE[j].1));

    let r = z - shift;
    let d = a - r;
    let d2 = d * d;
    let r2 = r * r;

    let p1 = r;
    let p2 = V::splat(THIRD).fms(r2, V::splat(TWO_THIRDS));
    let p3 = r * V::splat(-0.5).fma(r2, V::splat(THIRD));
    let p4 = V::splat(TENTH).fms(r2, V::splat(TWO_OVER_FIVE).fma(r2, V::splat(TWO_OVER_FIFTEEN)));
    let y = p3.fma(d, p4);
    let y = p2.fma(d, y);
    let y = p1.fma(d, y);
    let y = erfc_r.fms(scale, d.fms(d2, y)) * V::splat(TABLE_SCALE);
    let y = V::select(x.cmp_lt(V::splat(0.0)), V::splat(2.0) - y, y);

    if special.any() {
        return lane_fallback(x, y, special, erfcf_special);
    }
    y
}

/// Computes complementary error function
///
/// Max found ULP 1.46
#[inline]
pub fn erfcf(x: f32) -> f32 {
    erfcf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_erfcf() {
        assert_ulp_f32(erfcf, libm::erfc, -4.0, 4.0, 100000, 3);
        assert_ulp_f32(erfcf, libm::erfc, 4.0, 9.0, 50000, 3);
        assert_ulp_f32(erfcf, libm::erfc, -1e-6, 1e-6, 5000, 3);
    }

    #[test]
    fn test_erfcf_special() {
        assert_eq!(erfcf(0.0), 1.0);
        assert_eq!(erfcf(-0.0), 1.0);
        assert_eq!(erfcf(f32::INFINITY), 0.0);
        assert_eq!(erfcf(f32::NEG_INFINITY), 2.0);
        assert!(erfcf(f32::NAN).is_nan());
        assert_eq!(erfcf(MAX), 0.0);
        assert_eq!(erfcf(-12.0), 2.0);
        assert_eq!(erfcf(-5.0), 2.0);
        let v = erfcf(10.0);
        assert!(v > 0.0 && v < f32::MIN_POSITIVE, "Invalid result {}", v);
    }

    #[test]
    fn test_erfcf_lanes() {
        let inputs = [0.5, -3.0, 10.0, f32::NAN, 1e-20, -0.0, f32::INFINITY, 11.0, -20.0];
        assert_lanes_f32(erfcf, erfcf_simd, erfcf_simd, &inputs);
    }
}

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
use crate::math::poly::pairwise_horner;
use crate::simd::SimdF32;

pub(crate) const PI_OVER_2F: f32 = f32::from_bits(0x3fc90fdb);

/// `(atan(z) - z) / z^3` in `z^2` on `[-1, 1]`
pub(crate) const ATANF_POLY: [u32; 8] = [
    0xbeaaaaa8, 0x3e4cc9af, 0xbe12028f, 0x3ddeb9b4, 0xbda48f87, 0x3d49d160, 0xbca61e30,
    0x3b80fec4,
];

/// `z + z^3 P(z^2)` for `|z| <= 1`
#[inline(always)]
pub(crate) fn atanf_poly<V: SimdF32>(z: V) -> V {
    let z2 = z * z;
    let z4 = z2 * z2;
    let z8 = z4 * z4;
    let q0 = pairwise_horner(z2, z4, &ATANF_POLY[..4]);
    let q1 = pairwise_horner(z2, z4, &ATANF_POLY[4..]);
    let p = q0.fma(z8, q1);
    z.fma(p, z2 * z)
}

/// Computes arctangent for every lane.
///
/// Max found ULP 2.12
#[inline]
pub fn atanf_simd<V: SimdF32>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();

    let red = ax.cmp_gt(V::splat(1.0));
    let z = V::select(red, -(V::splat(1.0) / ax), ax);
    let shift = V::from_raw(red & V::splat(PI_OVER_2F).as_bits());

    let y = atanf_poly(z) + shift;
    V::from_raw(y.as_bits() ^ sign)
}

/// Computes arctangent
///
/// Max found ULP 2.12
#[inline]
pub fn atanf(x: f32) -> f32 {
    atanf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_atanf() {
        assert_ulp_f32(atanf, f64::atan, -1.0, 1.0, 50000, 4);
        assert_ulp_f32(atanf, f64::atan, 1.0, 100.0, 50000, 4);
        assert_ulp_f32(atanf, f64::atan, -1e10, 1e10, 20000, 4);
    }

    #[test]
    fn test_atanf_special() {
        assert_eq!(atanf(-0.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(atanf(f32::INFINITY), PI_OVER_2F);
        assert_eq!(atanf(f32::NEG_INFINITY), -PI_OVER_2F);
        assert!(atanf(f32::NAN).is_nan());
        for x in [0.3f32, 1.0, 1.7, 42.0, 1e5] {
            assert_eq!(atanf(-x).to_bits(), (-atanf(x)).to_bits(), "Invalid result for {}", x);
        }
    }

    #[test]
    fn test_atanf_lanes() {
        let inputs = [0.5f32, -3.0, 0.0, f32::NAN, 1e10, -2.0, f32::INFINITY, 1e-40, 1.0];
        assert_lanes_f32(atanf, atanf_simd, atanf_simd, &inputs);
    }
}

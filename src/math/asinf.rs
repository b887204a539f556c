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
use crate::math::atanf::PI_OVER_2F;
use crate::math::common::lane_fallback;
use crate::math::math_err::invalidf;
use crate::math::poly::horner;
use crate::simd::{SimdBits, SimdF32};

/// `(asin(sqrt(z)) - sqrt(z)) / z^(3/2)` on `[0x1p-24, 0x1p-2]`
const POLY: [u32; 5] = [
    0x3e2aaaaf, // 0x1.55555ep-3
    0x3d99930d, // 0x1.33261ap-4
    0x3d386bee, // 0x1.70d7dcp-5
    0x3cd82ce8, // 0x1.b059dp-6
    0x3d1d7bec, // 0x1.3af7d8p-5
];

#[inline(always)]
pub(crate) fn asinf_poly<V: SimdF32>(z: V, z2: V) -> V {
    z.fma(z * z2, horner(z2, &POLY))
}

#[cold]
pub(crate) fn asinf_special(x: f32, func: &'static str) -> f32 {
    if x.is_nan() {
        return x + x;
    }
    invalidf(x, func)
}

/// Computes arcsine for every lane.
///
/// Max found ULP 2.41
#[inline]
pub fn asinf_simd<V: SimdF32>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let special = !ax.cmp_le(V::splat(1.0));

    let a_lt_half = ax.cmp_lt(V::splat(0.5));
    let half = V::splat(0.5);
    let z2 = V::select(a_lt_half, x * x, half.fms(ax, half));
    let z = V::select(a_lt_half, ax, z2.sqrt());
    let p = asinf_poly(z, z2);

    let y = V::select(a_lt_half, p, V::splat(PI_OVER_2F).fms(p, V::splat(2.0)));
    let y = V::from_raw(y.as_bits() | sign);
    if special.any() {
        return lane_fallback(x, y, special, |v| asinf_special(v, "asinf"));
    }
    y
}

/// Computes arcsine
///
/// Max found ULP 2.41
#[inline]
pub fn asinf(x: f32) -> f32 {
    asinf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_asinf() {
        assert_ulp_f32(asinf, libm::asin, -1.0, 1.0, 200000, 4);
        assert_ulp_f32(asinf, libm::asin, -1e-4, 1e-4, 5000, 4);
        let x = f32::from_bits(0x3f00101f);
        let v = asinf(x);
        let want = libm::asin(x as f64) as f32;
        assert!(crate::ulp_distance_f32(v, want) <= 4, "Invalid result {}", v);
    }

    #[test]
    fn test_asinf_special() {
        assert_eq!(asinf(0.0).to_bits(), 0);
        assert_eq!(asinf(-0.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(asinf(-1.0), -PI_OVER_2F);
        assert_eq!(asinf(1e-40), 1e-40);
        assert!(asinf(1.0000001).is_nan());
        assert!(asinf(f32::INFINITY).is_nan());
        assert!(asinf(f32::NAN).is_nan());
    }

    #[test]
    fn test_asinf_lanes() {
        let inputs = [0.5, -0.75, 1.0, f32::NAN, 2.0, -0.0, f32::INFINITY, 1e-40, 0.25];
        assert_lanes_f32(asinf, asinf_simd, asinf_simd, &inputs);
    }
}

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
use crate::math::asinf::{asinf_poly, asinf_special};
use crate::math::atanf::PI_OVER_2F;
use crate::math::common::lane_fallback;
use crate::simd::{SimdBits, SimdF32};

const PI: f32 = f32::from_bits(0x40490fdb);

/// Computes arccosine for every lane.
///
/// Max found ULP 1.32
#[inline]
pub fn acosf_simd<V: SimdF32>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let special = !ax.cmp_le(V::splat(1.0));

    let a_le_half = ax.cmp_le(V::splat(0.5));
    let half = V::splat(0.5);
    let z2 = V::select(a_le_half, x * x, half.fms(ax, half));
    let z = V::select(a_le_half, ax, z2.sqrt());
    let p = asinf_poly(z, z2);

    let y = V::from_raw(p.as_bits() | sign);
    let off = V::select(x.cmp_lt(V::splat(0.0)), V::splat(PI), V::splat(0.0));
    let mul = V::select(a_le_half, V::splat(-1.0), V::splat(2.0));
    let add = V::select(a_le_half, V::splat(PI_OVER_2F), off);
    let y = add.fma(mul, y);
    if special.any() {
        return lane_fallback(x, y, special, |v| asinf_special(v, "acosf"));
    }
    y
}

/// Computes arccosine
///
/// Max found ULP 1.32
#[inline]
pub fn acosf(x: f32) -> f32 {
    acosf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_acosf() {
        assert_ulp_f32(acosf, libm::acos, -1.0, 1.0, 200000, 3);
        assert_ulp_f32(acosf, libm::acos, 0.999, 1.0, 5000, 3);
        let x = f32::from_bits(0x3f0add2b);
        let v = acosf(x);
        let want = libm::acos(x as f64) as f32;
        assert!(crate::ulp_distance_f32(v, want) <= 3, "Invalid result {}", v);
    }

    #[test]
    fn test_acosf_special() {
        assert_eq!(acosf(0.0), PI_OVER_2F);
        assert_eq!(acosf(1.0).to_bits(), 0);
        assert_eq!(acosf(-1.0), PI);
        assert!(acosf(-1.0000001).is_nan());
        assert!(acosf(f32::NEG_INFINITY).is_nan());
        assert!(acosf(f32::NAN).is_nan());
    }

    #[test]
    fn test_acosf_lanes() {
        let inputs = [0.5, -0.75, 1.0, f32::NAN, 2.0, -0.0, f32::INFINITY, -1.0, 0.25];
        assert_lanes_f32(acosf, acosf_simd, acosf_simd, &inputs);
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_acosf_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        assert_eq!(acosf(-1.0), PI);
        assert_eq!(last_error(), None);
        assert!(acosf(3.0).is_nan());
        assert_eq!(take_last_error(), Some(MathError::Domain));
    }
}

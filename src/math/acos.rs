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
use crate::math::asin::{asin_poly, asin_special};
use crate::math::atan::PI_OVER_2;
use crate::math::common::lane_fallback;
use crate::simd::{SimdBits, SimdF64};

const PI: f64 = f64::from_bits(0x400921fb54442d18);

/// Computes arccosine for every lane.
///
/// `pi/2 - asin(x)` up to 1/2, above `2 asin(sqrt((1 - |x|) / 2))`
/// reflected around `pi/2` for negative `x`.
///
/// Max found ULP 1.52
#[inline]
pub fn acos_simd<V: SimdF64>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let special = !ax.cmp_le(V::splat(1.0));

    let a_le_half = ax.cmp_le(V::splat(0.5));
    let half = V::splat(0.5);
    let z2 = V::select(a_le_half, x * x, half.fms(ax, half));
    let z = V::select(a_le_half, ax, z2.sqrt());
    let p = asin_poly(z, z2);

    // acos(x) = add + mul * asin(±z)
    let y = V::from_raw(p.as_bits() | sign);
    let off = V::select(x.cmp_lt(V::splat(0.0)), V::splat(PI), V::splat(0.0));
    let mul = V::select(a_le_half, V::splat(-1.0), V::splat(2.0));
    let add = V::select(a_le_half, V::splat(PI_OVER_2), off);
    let y = add.fma(mul, y);
    if special.any() {
        return lane_fallback(x, y, special, |v| asin_special(v, "acos"));
    }
    y
}

/// Computes arccosine
///
/// Max found ULP 1.52
#[inline]
pub fn acos(x: f64) -> f64 {
    acos_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_acos() {
        assert_ulp_f64(acos, libm::acos, -1.0, 1.0, 100000, 3);
        assert_ulp_f64(acos, libm::acos, -1e-6, 1e-6, 2000, 3);
        assert_ulp_f64(acos, libm::acos, 0.999, 1.0, 5000, 3);
        assert_ulp_f64(acos, libm::acos, -1.0, -0.999, 5000, 3);
        let x = f64::from_bits(0x3fe23d362722f591);
        let v = acos(x);
        assert!(crate::ulp_distance_f64(v, libm::acos(x)) <= 3, "Invalid result {}", v);
    }

    #[test]
    fn test_acos_special() {
        assert_eq!(acos(0.0), PI_OVER_2);
        assert_eq!(acos(-0.0), PI_OVER_2);
        assert_eq!(acos(1.0).to_bits(), 0);
        assert_eq!(acos(-1.0), PI);
        assert_eq!(acos(1e-300), PI_OVER_2);
        assert!(acos(-1.0000000000000002).is_nan());
        assert!(acos(f64::INFINITY).is_nan());
        assert!(acos(f64::NAN).is_nan());
    }

    #[test]
    fn test_acos_lanes() {
        let inputs = [0.5, -0.75, 1.0, f64::NAN, 2.0, -0.0, f64::INFINITY, -1.0, 0.25];
        assert_lanes_f64(acos, acos_simd, acos_simd, &inputs);
    }
}

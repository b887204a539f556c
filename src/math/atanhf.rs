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
use crate::math::log1pf::log1pf_inline;
use crate::math::math_err::{divzerof, invalidf};
use crate::simd::{SimdBits, SimdF32};

#[cold]
fn atanhf_special(x: f32) -> f32 {
    if x.is_nan() {
        return x + x;
    }
    if x.abs() == 1.0 {
        return divzerof(x < 0.0, "atanhf");
    }
    invalidf(x, "atanhf")
}

/// Computes inverse hyperbolic tangent for every lane.
///
/// Max found ULP 2.93
#[inline]
pub fn atanhf_simd<V: SimdF32>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let halfsign = V::from_raw(V::splat(0.5).as_bits() | sign);
    let special = !ax.cmp_lt(V::splat(1.0));
    let ax = V::select(special, V::splat(0.0), ax);

    let r = (ax + ax) / (V::splat(1.0) - ax);
    let y = halfsign * log1pf_inline(r);
    if special.any() {
        return lane_fallback(x, y, special, atanhf_special);
    }
    y
}

/// Computes inverse hyperbolic tangent
///
/// Max found ULP 2.93
#[inline]
pub fn atanhf(x: f32) -> f32 {
    atanhf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_atanhf() {
        assert_ulp_f32(atanhf, libm::atanh, -1.0, 1.0, 200000, 4);
        assert_ulp_f32(atanhf, libm::atanh, -1e-4, 1e-4, 5000, 4);
        let x = f32::from_bits(0x3d7a1eb8);
        let v = atanhf(x);
        let want = libm::atanh(x as f64) as f32;
        assert!(crate::ulp_distance_f32(v, want) <= 4, "Invalid result {}", v);
    }

    #[test]
    fn test_atanhf_special() {
        assert_eq!(atanhf(-0.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(atanhf(1.0), f32::INFINITY);
        assert_eq!(atanhf(-1.0), f32::NEG_INFINITY);
        assert_eq!(atanhf(1e-40), 1e-40);
        assert!(atanhf(-1.5).is_nan());
        assert!(atanhf(f32::NAN).is_nan());
    }

    #[test]
    fn test_atanhf_lanes() {
        let inputs = [0.5, -0.75, 1.0, f32::NAN, 2.0, -0.0, -1.0, 1e-40, 0.999];
        assert_lanes_f32(atanhf, atanhf_simd, atanhf_simd, &inputs);
    }
}

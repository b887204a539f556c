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
use crate::math::common::{lane_fallback, ubits};
use crate::math::log1pf::log1pf_inline;
use crate::simd::{SimdBits, SimdF32};

/// `2^64`, past this `x^2` overflows
const BIG_BOUND: u32 = 0x5f800000;

/// Computes inverse hyperbolic sine for every lane.
///
/// `asinh(x) = log1p(x + x^2 / (1 + sqrt(x^2 + 1)))` for positive `x`.
///
/// Max found ULP 2.66
#[inline]
pub fn asinhf_simd<V: SimdF32>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let special = ax.as_bits().cmp_ge(ubits::<V>(BIG_BOUND));
    let ax = V::select(special, V::splat(1.0), ax);

    let d = V::splat(1.0) + V::splat(1.0).fma(ax, ax).sqrt();
    let y = log1pf_inline(ax + ax * ax / d);
    let y = V::from_raw(y.as_bits() | sign);
    if special.any() {
        return lane_fallback(x, y, special, libm::asinhf);
    }
    y
}

/// Computes inverse hyperbolic sine
///
/// Max found ULP 2.66
#[inline]
pub fn asinhf(x: f32) -> f32 {
    asinhf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_asinhf() {
        assert_ulp_f32(asinhf, libm::asinh, -1.0, 1.0, 100000, 4);
        assert_ulp_f32(asinhf, libm::asinh, 1.0, 2048.0, 50000, 4);
        assert_ulp_f32(asinhf, libm::asinh, -1e-4, 1e-4, 5000, 4);
        assert_ulp_f32(asinhf, libm::asinh, 2048.0, 1e19, 20000, 4);
        let x = f32::from_bits(0x3e80d820);
        let v = asinhf(x);
        let want = libm::asinh(x as f64) as f32;
        assert!(crate::ulp_distance_f32(v, want) <= 4, "Invalid result {}", v);
    }

    #[test]
    fn test_asinhf_special() {
        assert_eq!(asinhf(0.0).to_bits(), 0);
        assert_eq!(asinhf(-0.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(asinhf(f32::INFINITY), f32::INFINITY);
        assert_eq!(asinhf(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert!(asinhf(f32::NAN).is_nan());
        assert_eq!(asinhf(1e-30), 1e-30);
        let v = asinhf(f32::MAX);
        assert!(crate::ulp_distance_f32(v, libm::asinhf(f32::MAX)) <= 1, "Invalid result {}", v);
    }

    #[test]
    fn test_asinhf_lanes() {
        let inputs = [0.5, -3.0, 1.0, f32::NAN, 1e30, -0.0, f32::INFINITY, 1e-40, -0.25];
        assert_lanes_f32(asinhf, asinhf_simd, asinhf_simd, &inputs);
    }
}

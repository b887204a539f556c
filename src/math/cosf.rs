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
use crate::math::math_err::invalidf;
use crate::math::poly::horner;
use crate::math::sinf::{INV_PIF, PIF_1, PIF_2, PIF_3, RANGE_VALF, SINF_POLY};
use crate::simd::{SimdBits, SimdF32};

#[cold]
fn cosf_special(x: f32) -> f32 {
    if x.is_finite() {
        return libm::cosf(x);
    }
    invalidf(x, "cosf")
}

/// Computes cosine for every lane.
///
/// Max found ULP 1.89
#[inline]
pub fn cosf_simd<V: SimdF32>(x: V) -> V {
    let ax = x.abs();
    let special = !ax.cmp_lt(V::splat(RANGE_VALF));

    // n = rint((|x| + pi/2) / pi) - 0.5
    let n = V::splat(0.5).fma(ax, V::splat(INV_PIF)).round_away();
    let odd = n.cvt_to_int().shl(31);
    let n = n - V::splat(0.5);

    let r = ax
        .fms(V::splat(PIF_1), n)
        .fms(V::splat(PIF_2), n)
        .fms(V::splat(PIF_3), n);

    let r2 = r * r;
    let y = r.fma(horner(r2, &SINF_POLY), r2 * r);
    let y = V::from_raw(y.as_bits() ^ odd);
    if special.any() {
        return lane_fallback(x, y, special, cosf_special);
    }
    y
}

/// Computes cosine
///
/// Max found ULP 1.89
#[inline]
pub fn cosf(x: f32) -> f32 {
    cosf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32, around_f32};
    use crate::ulp_distance_f32;

    #[test]
    fn test_cosf() {
        assert_ulp_f32(cosf, f64::cos, -10.0, 10.0, 50000, 3);
        assert_ulp_f32(cosf, f64::cos, -1e-3, 1e-3, 10000, 3);
        assert_ulp_f32(cosf, f64::cos, 1e3, 1e6, 20000, 3);
    }

    #[test]
    fn test_cosf_special() {
        for x in [0.0f32, -0.0] {
            let v = cosf(x);
            assert!(ulp_distance_f32(v, 1.0) <= 1, "Invalid result {} for {}", v, x);
        }
        assert!(cosf(f32::INFINITY).is_nan());
        assert!(cosf(f32::NAN).is_nan());
        for x in [0.3f32, 1.7, 42.0, 1e5] {
            assert_eq!(cosf(-x).to_bits(), cosf(x).to_bits(), "Invalid result for {}", x);
        }
        for x in around_f32(RANGE_VALF).into_iter().chain([1e7f32, 1e30]) {
            let v = cosf(x);
            let want = (x as f64).cos() as f32;
            assert!(ulp_distance_f32(v, want) <= 3, "Invalid result {} for {}", v, x);
        }
    }

    #[test]
    fn test_cosf_lanes() {
        let inputs = [0.5f32, -3.0, 0.0, f32::NAN, 1e10, -2.0, f32::INFINITY, 1e-40, 7.5];
        assert_lanes_f32(cosf, cosf_simd, cosf_simd, &inputs);
    }
}

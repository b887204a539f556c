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
use crate::math::common::{cst, ubits};
use crate::math::expf::report_xflowf;
use crate::math::expm1f::expm1f_inline;
use crate::simd::{SimdBits, SimdF32};

/// Past this `expm1f(|x|)` would leave the normal range
const SPECIAL_BOUND: f32 = f32::from_bits(0x42b0c0a5);
/// Past this the result is infinite
const INF_BOUND: f32 = f32::from_bits(0x42b2d4fd);
/// `cosh(9)`
const COSH_9: f32 = f32::from_bits(0x457d38ac);

/// Computes sinh for every lane.
///
/// Max found ULP 1.76
#[inline]
pub fn sinhf_simd<V: SimdF32>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() & ubits::<V>(0x80000000);
    let half_sign = V::from_raw(sign | ubits::<V>(0x3f000000));

    let t = expm1f_inline(ax);
    let y = (t + t / (t + V::splat(1.0))) * half_sign;

    let special = ax.cmp_ge(V::splat(SPECIAL_BOUND));
    if special.any() {
        return sinhf_special(x, ax, y, sign, special);
    }
    y
}

#[cold]
#[inline(never)]
fn sinhf_special<V: SimdF32>(x: V, ax: V, y: V, sign: V::Bits, special: V::Bits) -> V {
    let s = expm1f_inline(ax - V::splat(9.0)) * V::splat(COSH_9);
    let s = V::select(ax.cmp_gt(V::splat(INF_BOUND)), cst::<V>(0x7f800000), s);
    let s = V::from_raw(s.as_bits() | sign);
    let y = V::select(special, s, y);
    report_xflowf(x, y, special, "sinhf");
    y
}

/// Computes sinh
///
/// Max found ULP 1.76
#[inline]
pub fn sinhf(x: f32) -> f32 {
    sinhf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{around_f32, assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_sinhf() {
        assert_ulp_f32(sinhf, f64::sinh, -1.0, 1.0, 50000, 3);
        assert_ulp_f32(sinhf, f64::sinh, -89.4, 89.4, 50000, 3);
        for x in around_f32(SPECIAL_BOUND) {
            let v = sinhf(x);
            let want = (x as f64).sinh() as f32;
            assert!(
                crate::ulp_distance_f32(v, want) <= 3,
                "Invalid result {}, expected {}",
                v,
                want
            );
        }
    }

    #[test]
    fn test_sinhf_special() {
        assert_eq!(sinhf(-0.0).to_bits(), 0x80000000);
        assert_eq!(sinhf(f32::INFINITY), f32::INFINITY);
        assert_eq!(sinhf(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert!(sinhf(f32::NAN).is_nan());
        assert_eq!(sinhf(90.0), f32::INFINITY);
        assert_eq!(sinhf(-90.0), f32::NEG_INFINITY);
    }

    #[test]
    fn test_sinhf_lanes() {
        let inputs = [0.5, -3.0, 89.0, f32::NAN, 1e-10, -100.0, f32::INFINITY, -0.0, 88.5];
        assert_lanes_f32(sinhf, sinhf_simd, sinhf_simd, &inputs);
    }
}

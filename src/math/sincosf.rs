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
use crate::math::common::lane_fallback_pair;
use crate::math::math_err::invalidf;
use crate::math::poly::horner;
use crate::math::sinf::RANGE_VALF;
use crate::simd::{SimdBits, SimdF32};

const INV_PIO2: f32 = f32::from_bits(0x3f22f983);
const PIO2_1: f32 = f32::from_bits(0x3fc90fdb);
const PIO2_2: f32 = f32::from_bits(0xb33bbd2e);
const PIO2_3: f32 = f32::from_bits(0xa6f72ced);

const SIN_POLY: [u32; 3] = [0xbe2aaaa3, 0x3c0883b0, 0xb94ca75a];
const COS_POLY: [u32; 3] = [0x3d2aaaa5, 0xbab6060d, 0x37ccf077];

#[cold]
fn sincosf_special(x: f32) -> (f32, f32) {
    if x.is_finite() {
        return (libm::sinf(x), libm::cosf(x));
    }
    let nan = invalidf(x, "sincosf");
    (nan, nan)
}

/// Computes sine and cosine of every lane at once, returns `(sin, cos)`.
///
/// Max found ULP 1.89
#[inline]
pub fn sincosf_simd<V: SimdF32>(x: V) -> (V, V) {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let special = !ax.cmp_lt(V::splat(RANGE_VALF));

    let q = (ax * V::splat(INV_PIO2)).round_away();
    let n = q.cvt_to_int();
    let r = ax
        .fms(V::splat(PIO2_1), q)
        .fms(V::splat(PIO2_2), q)
        .fms(V::splat(PIO2_3), q);

    let r2 = r * r;
    let s = r.fma(r2 * r, horner(r2, &SIN_POLY));
    let c = V::splat(-0.5).fma(r2, horner(r2, &COS_POLY));
    let c = V::splat(1.0).fma(r2, c);

    let one = V::Bits::splat(1);
    let two = V::Bits::splat(2);
    let swap = (n & one).cmp_eq(one);
    let sin_sign = (n & two).shl(30) ^ sign;
    let cos_sign = ((n + one) & two).shl(30);

    let sin = V::from_raw(V::Bits::select(swap, c.as_bits(), s.as_bits()) ^ sin_sign);
    let cos = V::from_raw(V::Bits::select(swap, s.as_bits(), c.as_bits()) ^ cos_sign);
    if special.any() {
        return lane_fallback_pair(x, (sin, cos), special, sincosf_special);
    }
    (sin, cos)
}

/// Computes sine and cosine, returns `(sin, cos)`.
///
/// Max found ULP 1.89
#[inline]
pub fn sincosf(x: f32) -> (f32, f32) {
    sincosf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_sincosf() {
        assert_ulp_f32(|x| sincosf(x).0, f64::sin, -10.0, 10.0, 50000, 3);
        assert_ulp_f32(|x| sincosf(x).1, f64::cos, -10.0, 10.0, 50000, 3);
        assert_ulp_f32(|x| sincosf(x).0, f64::sin, 1e3, 1e6, 20000, 3);
        assert_ulp_f32(|x| sincosf(x).1, f64::cos, 1e3, 1e6, 20000, 3);
    }

    #[test]
    fn test_sincosf_special() {
        let (s, c) = sincosf(-0.0);
        assert_eq!(s.to_bits(), (-0.0f32).to_bits());
        assert_eq!(c, 1.0);
        let (s, c) = sincosf(f32::NEG_INFINITY);
        assert!(s.is_nan() && c.is_nan());
        let (s, c) = sincosf(1e20);
        assert_eq!(s, libm::sinf(1e20));
        assert_eq!(c, libm::cosf(1e20));
    }

    #[test]
    fn test_sincosf_lanes() {
        let inputs = [0.5f32, -3.0, 0.0, f32::NAN, 1e10, -2.0, f32::INFINITY, 1e-40, 7.5];
        assert_lanes_f32(|x| sincosf(x).0, |v| sincosf_simd(v).0, |v| sincosf_simd(v).0, &inputs);
        assert_lanes_f32(|x| sincosf(x).1, |v| sincosf_simd(v).1, |v| sincosf_simd(v).1, &inputs);
    }
}

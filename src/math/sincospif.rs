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
use crate::math::poly::pairwise_horner;
use crate::simd::{SimdBits, SimdF32};

/// From here on every value is an even integer
const EVEN_BOUND: f32 = f32::from_bits(0x4b800000);

/// Taylor coefficients of `sin(pi r) / r` in `r^2`
const POLY: [u32; 6] = [
    0x40490fdb, // 0x1.921fb6p1
    0xc0a55de7, // -0x1.4abbcep2
    0x402335e3, // 0x1.466bc6p1
    0xbf196966, // -0x1.32d2ccp-1
    0x3da83c18, // 0x1.50783p-4
    0xbbf183a8, // -0x1.e30750p-8
];

#[cold]
fn sincospif_special(x: f32) -> (f32, f32) {
    if x.is_nan() {
        return (x + x, x + x);
    }
    let nan = invalidf(x, "sincospif");
    (nan, nan)
}

/// Computes `sin(pi x)` and `cos(pi x)` of every lane, returns `(sin, cos)`.
///
/// Same reduction as [sincospi](crate::sincospi).
///
/// Max found ULP 3.18
#[inline]
pub fn sincospif_simd<V: SimdF32>(x: V) -> (V, V) {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let special = !ax.cmp_lt(V::splat(f32::INFINITY));
    let ax = V::select(special, V::splat(0.0), ax);

    let even = ax.cmp_ge(V::splat(EVEN_BOUND));
    let odd = (!even & ax.cvt_round_to_int()).shl(31);

    let sr = ax - ax.round_away();
    let cr = V::splat(0.5) - sr.abs();
    let sr2 = sr * sr;
    let cr2 = cr * cr;
    let s = pairwise_horner(sr2, sr2 * sr2, &POLY) * sr;
    let c = pairwise_horner(cr2, cr2 * cr2, &POLY) * cr;

    let zero = V::splat(0.0);
    let sin = V::from_raw(s.as_bits() ^ odd ^ sign);
    let sin = V::select(sr.cmp_eq(zero), V::from_raw(sign), sin);
    let cos = V::from_raw(c.as_bits() ^ odd);
    let cos = V::select(cr.cmp_eq(zero), zero, cos);
    if special.any() {
        return lane_fallback_pair(x, (sin, cos), special, sincospif_special);
    }
    (sin, cos)
}

/// Computes `sin(pi x)` and `cos(pi x)`, returns `(sin, cos)`.
///
/// Max found ULP 3.18
#[inline]
pub fn sincospif(x: f32) -> (f32, f32) {
    sincospif_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};
    use std::f64::consts::PI;

    fn odd(x: f64) -> bool {
        x.round() % 2.0 != 0.0
    }

    // f32 inputs reduce exactly in double precision
    fn sinpi_ref(x: f64) -> f64 {
        let y = ((x - x.round()) * PI).sin();
        if odd(x) { -y } else { y }
    }

    fn cospi_ref(x: f64) -> f64 {
        let r = (x - x.round()).abs();
        let y = ((0.5 - r) * PI).sin();
        if odd(x) { -y } else { y }
    }

    #[test]
    fn test_sincospif() {
        for (lo, hi) in [(-4.0, 4.0), (-1e-4, 1e-4), (1e3, 1e6), (4e6, 1.6e7)] {
            assert_ulp_f32(|x| sincospif(x).0, sinpi_ref, lo, hi, 100000, 5);
            assert_ulp_f32(|x| sincospif(x).1, cospi_ref, lo, hi, 100000, 5);
        }
        for x in [f32::from_bits(0x3f0e9a0d), f32::from_bits(0x3d69a0d4)] {
            let (s, c) = sincospif(x);
            let (ws, wc) = (sinpi_ref(x as f64) as f32, cospi_ref(x as f64) as f32);
            assert!(crate::ulp_distance_f32(s, ws) <= 5, "Invalid result {}", s);
            assert!(crate::ulp_distance_f32(c, wc) <= 5, "Invalid result {}", c);
        }
    }

    #[test]
    fn test_sincospif_special() {
        assert_eq!(sincospif(0.0), (0.0, 1.0));
        let (s, c) = sincospif(-0.0);
        assert_eq!(s.to_bits(), (-0.0f32).to_bits());
        assert_eq!(c, 1.0);
        let (s, c) = sincospif(-1.0);
        assert_eq!(s.to_bits(), (-0.0f32).to_bits());
        assert_eq!(c, -1.0);
        let (s, c) = sincospif(2.5);
        assert_eq!((s, c.to_bits()), (1.0, 0));
        assert_eq!(sincospif(8388609.0).1, -1.0);
        assert_eq!(sincospif(3e9), (0.0, 1.0));
        assert_eq!(sincospif(-3e38), (-0.0, 1.0));
        let (s, c) = sincospif(f32::INFINITY);
        assert!(s.is_nan() && c.is_nan());
    }

    #[test]
    fn test_sincospif_lanes() {
        let inputs = [0.5, -3.0, 0.25, f32::NAN, 3e9, -0.0, f32::INFINITY, 1e-40, 7.75];
        assert_lanes_f32(
            |x| sincospif(x).0,
            |v| sincospif_simd(v).0,
            |v| sincospif_simd(v).0,
            &inputs,
        );
        assert_lanes_f32(
            |x| sincospif(x).1,
            |v| sincospif_simd(v).1,
            |v| sincospif_simd(v).1,
            &inputs,
        );
    }
}

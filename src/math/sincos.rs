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
use crate::math::exp::SHIFT;
use crate::math::math_err::invalid;
use crate::math::poly::pairwise_horner;
use crate::math::sin::RANGE_VAL;
use crate::simd::{SimdBits, SimdF64};

const TWO_OVER_PI: f64 = f64::from_bits(0x3fe45f306dc9c883);
/// pi/2 as three parts
const PIO2_1: f64 = f64::from_bits(0x3ff921fb50000000);
const PIO2_2: f64 = f64::from_bits(0x3e5110b460000000);
const PIO2_3: f64 = f64::from_bits(0x3c91a62633145c07);

/// `(sin(r) - r) / r^3` in `r^2` on `[-pi/4, pi/4]`
const SIN_POLY: [u64; 7] = [
    0xbfc555555555547b,
    0x3f81111111108a4d,
    0xbf2a01a019936f27,
    0x3ec71de37a97d93e,
    0xbe5ae633919987c6,
    0x3de60e277ae07cec,
    0xbd69e9540300a100,
];

/// `(cos(r) - 1 + r^2 / 2) / r^4` in `r^2` on `[-pi/4, pi/4]`
const COS_POLY: [u64; 6] = [
    0x3fa555555555554c,
    0xbf56c16c16c1521f,
    0x3efa01a019cbf62a,
    0xbe927e4f812b681e,
    0x3e21ee9f152a57cd,
    0xbda8fb131098404b,
];

#[cold]
fn sincos_special(x: f64) -> (f64, f64) {
    if x.is_finite() {
        return (libm::sin(x), libm::cos(x));
    }
    let nan = invalid(x, "sincos");
    (nan, nan)
}

/// Computes sine and cosine of every lane at once, returns `(sin, cos)`.
///
/// Quadrant of `|x|` picks which polynomial feeds which output.
///
/// Max found ULP 3.3
#[inline]
pub fn sincos_simd<V: SimdF64>(x: V) -> (V, V) {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let special = !ax.cmp_lt(V::splat(RANGE_VAL));

    // n = rint(|x| / (pi/2)), quadrant in the low bits of z
    let z = V::splat(SHIFT).fma(V::splat(TWO_OVER_PI), ax);
    let n = z.as_bits();
    let q = z - V::splat(SHIFT);

    let r = ax
        .fms(V::splat(PIO2_1), q)
        .fms(V::splat(PIO2_2), q)
        .fms(V::splat(PIO2_3), q);

    let r2 = r * r;
    let r4 = r2 * r2;
    let s = r.fma(r2 * r, pairwise_horner(r2, r4, &SIN_POLY));
    let c = V::splat(-0.5).fma(r2, pairwise_horner(r2, r4, &COS_POLY));
    let c = V::splat(1.0).fma(r2, c);

    let one = V::Bits::splat(1);
    let two = V::Bits::splat(2);
    let swap = (n & one).cmp_eq(one);
    let sin_sign = (n & two).shl(62) ^ sign;
    let cos_sign = ((n + one) & two).shl(62);

    let sin = V::from_raw(V::Bits::select(swap, c.as_bits(), s.as_bits()) ^ sin_sign);
    let cos = V::from_raw(V::Bits::select(swap, s.as_bits(), c.as_bits()) ^ cos_sign);
    if special.any() {
        return lane_fallback_pair(x, (sin, cos), special, sincos_special);
    }
    (sin, cos)
}

/// Computes sine and cosine, returns `(sin, cos)`.
///
/// Max found ULP 3.3
#[inline]
pub fn sincos(x: f64) -> (f64, f64) {
    sincos_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64, around_f64};
    use crate::ulp_distance_f64;

    #[test]
    fn test_sincos() {
        assert_ulp_f64(|x| sincos(x).0, f64::sin, -10.0, 10.0, 50000, 5);
        assert_ulp_f64(|x| sincos(x).1, f64::cos, -10.0, 10.0, 50000, 5);
        assert_ulp_f64(|x| sincos(x).0, f64::sin, 1e3, 1e6, 20000, 5);
        assert_ulp_f64(|x| sincos(x).1, f64::cos, 1e3, 1e6, 20000, 5);
    }

    #[test]
    fn test_sincos_special() {
        let (s, c) = sincos(-0.0);
        assert_eq!(s.to_bits(), (-0.0f64).to_bits());
        assert_eq!(c, 1.0);
        let (s, c) = sincos(f64::INFINITY);
        assert!(s.is_nan() && c.is_nan());
        let (s, c) = sincos(f64::NAN);
        assert!(s.is_nan() && c.is_nan());
        for x in around_f64(RANGE_VAL).into_iter().chain([1e10, 1e300]) {
            let (s, c) = sincos(x);
            assert!(ulp_distance_f64(s, x.sin()) <= 5, "Invalid result {} for {}", s, x);
            assert!(ulp_distance_f64(c, x.cos()) <= 5, "Invalid result {} for {}", c, x);
        }
    }

    #[test]
    fn test_sincos_lanes() {
        let inputs = [0.5, -3.0, 0.0, f64::NAN, 1e10, -2.0, f64::INFINITY, 1e-310, 7.5];
        assert_lanes_f64(|x| sincos(x).0, |v| sincos_simd(v).0, |v| sincos_simd(v).0, &inputs);
        assert_lanes_f64(|x| sincos(x).1, |v| sincos_simd(v).1, |v| sincos_simd(v).1, &inputs);
    }
}

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
use crate::math::math_err::invalid;
use crate::math::poly::pairwise_horner;
use crate::simd::{SimdBits, SimdF64};

/// From here on every value is an even integer
const EVEN_BOUND: f64 = f64::from_bits(0x4340000000000000);

/// `sin(pi r) / r` in `r^2` on `[-1/2, 1/2]`
const POLY: [u64; 10] = [
    0x400921fb54442d18, // 0x1.921fb54442d18p1
    0xc014abbce625be53, // -0x1.4abbce625be53p2
    0x400466bc6775ab16, // 0x1.466bc6775ab16p1
    0xbfe32d2cce62dc33, // -0x1.32d2cce62dc33p-1
    0x3fb507834891188e, // 0x1.507834891188ep-4
    0xbf7e30750a28c88e, // -0x1.e30750a28c88ep-8
    0x3f3e8f48308acda4, // 0x1.e8f48308acda4p-12
    0xbef6fc0032b3c29f, // -0x1.6fc0032b3c29fp-16
    0x3eaaf86ae521260b, // 0x1.af86ae521260bp-21
    0xbe6012a9870eeb7d, // -0x1.012a9870eeb7dp-25
];

#[cold]
fn sincospi_special(x: f64) -> (f64, f64) {
    if x.is_nan() {
        return (x + x, x + x);
    }
    let nan = invalid(x, "sincospi");
    (nan, nan)
}

/// Computes `sin(pi x)` and `cos(pi x)` of every lane, returns `(sin, cos)`.
///
/// `r = |x| - round(|x|)` is exact, then `cospi(r) = sinpi(1/2 - |r|)` so
/// both share one polynomial. Exact zeros are `sinpi(n) = ±0` with the sign
/// of `n` and `cospi(n + 1/2) = +0`.
///
/// Max found ULP 3.16
#[inline]
pub fn sincospi_simd<V: SimdF64>(x: V) -> (V, V) {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let special = !ax.cmp_lt(V::splat(f64::INFINITY));
    let ax = V::select(special, V::splat(0.0), ax);

    let even = ax.cmp_ge(V::splat(EVEN_BOUND));
    let odd = (!even & ax.cvt_round_to_int()).shl(63);

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
        return lane_fallback_pair(x, (sin, cos), special, sincospi_special);
    }
    (sin, cos)
}

/// Computes `sin(pi x)` and `cos(pi x)`, returns `(sin, cos)`.
///
/// Max found ULP 3.16
#[inline]
pub fn sincospi(x: f64) -> (f64, f64) {
    sincospi_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};
    use std::f64::consts::PI;

    const PI_LO: f64 = 1.2246467991473532e-16;

    /// `sin(pi r)` with `pi r` carried as a double-double
    fn sin_pi_small(r: f64) -> f64 {
        let hi = r * PI;
        let lo = r.mul_add(PI, -hi) + r * PI_LO;
        hi.sin() + lo * hi.cos()
    }

    fn cos_pi_small(r: f64) -> f64 {
        if r.abs() > 0.25 {
            return sin_pi_small(0.5 - r.abs());
        }
        let hi = r * PI;
        let lo = r.mul_add(PI, -hi) + r * PI_LO;
        hi.cos() - lo * hi.sin()
    }

    fn odd(x: f64) -> bool {
        x.round() % 2.0 != 0.0
    }

    fn sinpi_ref(x: f64) -> f64 {
        let y = sin_pi_small(x - x.round());
        if odd(x) { -y } else { y }
    }

    fn cospi_ref(x: f64) -> f64 {
        let y = cos_pi_small(x - x.round());
        if odd(x) { -y } else { y }
    }

    #[test]
    fn test_sincospi() {
        for (lo, hi) in [(-4.0, 4.0), (-1e-6, 1e-6), (1e3, 1e6), (4e15, 9e15)] {
            assert_ulp_f64(|x| sincospi(x).0, sinpi_ref, lo, hi, 50000, 5);
            assert_ulp_f64(|x| sincospi(x).1, cospi_ref, lo, hi, 50000, 5);
        }
        let x = f64::from_bits(0xbfa11e3c7e284ade);
        let v = sincospi(x).1;
        assert!(crate::ulp_distance_f64(v, cospi_ref(x)) <= 5, "Invalid result {}", v);
    }

    #[test]
    fn test_sincospi_special() {
        assert_eq!(sincospi(0.0), (0.0, 1.0));
        let (s, c) = sincospi(-0.0);
        assert_eq!(s.to_bits(), (-0.0f64).to_bits());
        assert_eq!(c, 1.0);
        let (s, c) = sincospi(1.0);
        assert_eq!(s.to_bits(), 0);
        assert_eq!(c, -1.0);
        let (s, c) = sincospi(-3.0);
        assert_eq!(s.to_bits(), (-0.0f64).to_bits());
        assert_eq!(c, -1.0);
        let (s, c) = sincospi(0.5);
        assert_eq!((s, c.to_bits()), (1.0, 0));
        let (s, c) = sincospi(-1.5);
        assert_eq!((s, c.to_bits()), (1.0, 0));
        assert_eq!(sincospi(4503599627370497.0).1, -1.0);
        assert_eq!(sincospi(1e300), (0.0, 1.0));
        let (s, c) = sincospi(f64::NEG_INFINITY);
        assert!(s.is_nan() && c.is_nan());
        let (s, c) = sincospi(f64::NAN);
        assert!(s.is_nan() && c.is_nan());
    }

    #[test]
    fn test_sincospi_lanes() {
        let inputs = [0.5, -3.0, 0.25, f64::NAN, 1e300, -0.0, f64::INFINITY, 1e-310, 7.75];
        assert_lanes_f64(
            |x| sincospi(x).0,
            |v| sincospi_simd(v).0,
            |v| sincospi_simd(v).0,
            &inputs,
        );
        assert_lanes_f64(
            |x| sincospi(x).1,
            |v| sincospi_simd(v).1,
            |v| sincospi_simd(v).1,
            &inputs,
        );
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_sincospi_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        let _ = sincospi(1e10);
        assert_eq!(last_error(), None);
        let (s, _) = sincospi(f64::INFINITY);
        assert!(s.is_nan());
        assert_eq!(take_last_error(), Some(MathError::Domain));
    }
}

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
use crate::math::common::{cst, lane_fallback, ubits};
use crate::simd::{SimdBits, SimdF64};

const MANTISSA_MASK: u64 = 0x000fffffffffffff;
const HALF_EXP: u64 = 0x3fe0000000000000;
const TWO_THIRDS: u64 = 0x3fe5555555555555;

/// Rough `cbrt(m)` on `[0.5, 1]`
const POLY: [u64; 4] = [
    0x3fdc3b7ff0a6e189,
    0x3fed810f6c24d3de,
    0xbfe01e7d6a492d5c,
    0x3fc20057dc14d725,
];

/// `2^(i/3)` for `i` in `[-2, 2]`
static ROOTS: [u64; 5] = [
    0x3fe428a2f98d728b,
    0x3fe965fea53d6e3d,
    0x3ff0000000000000,
    0x3ff428a2f98d728b,
    0x3ff965fea53d6e3d,
];

/// Computes cube root for every lane.
///
/// `|x| = m 2^e` with `m` in `[0.5, 1]`, a cubic guess for `cbrt(m)` and two
/// Newton steps, then `2^(e/3)` split into a power of two and a table root.
///
/// Max found ULP 1.79
#[inline]
pub fn cbrt_simd<V: SimdF64>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let iax = ax.as_bits();
    let top = iax.shr(52);
    // zero, subnormal, inf or nan
    let special = top.cmp_lt(ubits::<V>(1)) | top.cmp_ge(ubits::<V>(0x7ff));

    let m = V::from_raw((iax & ubits::<V>(MANTISSA_MASK)) | ubits::<V>(HALF_EXP));
    let e = V::cvt_from_int(top - ubits::<V>(1022));

    let p01 = cst::<V>(POLY[0]).fma(cst::<V>(POLY[1]), m);
    let p23 = cst::<V>(POLY[2]).fma(cst::<V>(POLY[3]), m);
    let p = p01.fma(m * m, p23);

    let two_thirds = cst::<V>(TWO_THIRDS);
    let m_by_3 = m / V::splat(3.0);
    let a = (m_by_3 / (p * p)).fma(two_thirds, p);
    let a = (m_by_3 / (a * a)).fma(two_thirds, a);

    // e = 3 ey + rem with rem in [-2, 2]
    let ey = (e / V::splat(3.0)).trunc();
    let rem = e.fms(V::splat(3.0), ey);
    let t = V::from_raw((rem + V::splat(2.0)).cvt_to_int().lookup(|j| ROOTS[j]));
    let scale = V::from_raw((ey.cvt_to_int() + ubits::<V>(1023)).shl(52));
    let y = scale * (a * t);
    let y = V::from_raw(y.as_bits() | sign);

    if special.any() {
        return lane_fallback(x, y, special, libm::cbrt);
    }
    y
}

/// Computes cube root
///
/// Max found ULP 1.79
#[inline]
pub fn cbrt(x: f64) -> f64 {
    cbrt_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_cbrt() {
        assert_ulp_f64(cbrt, libm::cbrt, -10.0, 10.0, 100000, 3);
        assert_ulp_f64(cbrt, libm::cbrt, 1e-300, 1e-290, 20000, 3);
        assert_ulp_f64(cbrt, libm::cbrt, 1e100, 1e308, 20000, 3);
        let x = f64::from_bits(0x400fffff403f0bc6);
        let v = cbrt(x);
        assert!(crate::ulp_distance_f64(v, libm::cbrt(x)) <= 3, "Invalid result {}", v);
    }

    #[test]
    fn test_cbrt_special() {
        assert_eq!(cbrt(0.0).to_bits(), 0);
        assert_eq!(cbrt(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(cbrt(f64::INFINITY), f64::INFINITY);
        assert_eq!(cbrt(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(cbrt(f64::NAN).is_nan());
        assert_eq!(cbrt(-5e-324), libm::cbrt(-5e-324));
        let cubes = [(-27.0, -3.0), (8.0, 2.0), (0.125, 0.5), (f64::MAX, libm::cbrt(f64::MAX))];
        for (x, want) in cubes {
            let v = cbrt(x);
            assert!(crate::ulp_distance_f64(v, want) <= 3, "Invalid result {} for {}", v, x);
        }
    }

    #[test]
    fn test_cbrt_lanes() {
        let inputs = [0.5, -3.0, 1.0, f64::NAN, 1e300, -0.0, f64::INFINITY, 1e-310, -7.5];
        assert_lanes_f64(cbrt, cbrt_simd, cbrt_simd, &inputs);
    }
}

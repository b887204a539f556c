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
use crate::math::poly::estrin;
use crate::simd::SimdF64;

pub(crate) const PI_OVER_2: f64 = f64::from_bits(0x3ff921fb54442d18);

/// `(atan(z) - z) / z^3` in `z^2` on `[-1, 1]`
pub(crate) const ATAN_POLY: [u64; 20] = [
    0xbfd5555555555555,
    0x3fc99999999996c1,
    0xbfc2492492478f88,
    0x3fbc71c71bc3951c,
    0xbfb745d160a7e368,
    0x3fb3b139b6a88ba1,
    0xbfb11100ee084227,
    0x3fae1d0f9696f63b,
    0xbfaaebfe7b418581,
    0x3fa842dbe9b0d916,
    0xbfa5d30140ae5e99,
    0x3fa338e31eb2fbbc,
    0xbfa00e6eece7de80,
    0x3f9860897b29e5ef,
    0xbf90051381722a59,
    0x3f814e9dc19a4a4e,
    0xbf6d0062b42fe3bf,
    0x3f517739e210171a,
    0xbf2ab24da7be7402,
    0x3ef358851160a528,
];

/// `z + z^3 P(z^2)` for `|z| <= 1`
#[inline(always)]
pub(crate) fn atan_poly<V: SimdF64>(z: V) -> V {
    let z2 = z * z;
    let z4 = z2 * z2;
    z.fma(estrin(z2, z4, &ATAN_POLY), z2 * z)
}

/// Computes arctangent for every lane.
///
/// Arguments above 1 in magnitude use `atan(x) = pi/2 + atan(-1/x)`.
/// There are no special lanes, NaN passes through the arithmetic.
///
/// Max found ULP 2.45
#[inline]
pub fn atan_simd<V: SimdF64>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();

    let red = ax.cmp_gt(V::splat(1.0));
    let z = V::select(red, -(V::splat(1.0) / ax), ax);
    let shift = V::from_raw(red & V::splat(PI_OVER_2).as_bits());

    let y = atan_poly(z) + shift;
    V::from_raw(y.as_bits() ^ sign)
}

/// Computes arctangent
///
/// Max found ULP 2.45
#[inline]
pub fn atan(x: f64) -> f64 {
    atan_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_atan() {
        assert_ulp_f64(atan, f64::atan, -1.0, 1.0, 50000, 4);
        assert_ulp_f64(atan, f64::atan, 1.0, 100.0, 50000, 4);
        assert_ulp_f64(atan, f64::atan, -1e10, 1e10, 20000, 4);
        assert_ulp_f64(atan, f64::atan, -1e-6, 1e-6, 5000, 4);
    }

    #[test]
    fn test_atan_special() {
        assert_eq!(atan(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(atan(0.0).to_bits(), 0);
        assert_eq!(atan(f64::INFINITY), PI_OVER_2);
        assert_eq!(atan(f64::NEG_INFINITY), -PI_OVER_2);
        assert!(atan(f64::NAN).is_nan());
        assert_eq!(atan(1e300), PI_OVER_2);
        let tiny = f64::from_bits(1);
        assert_eq!(atan(tiny), tiny);
        for x in [0.3, 1.0, 1.7, 42.0, 1e5] {
            assert_eq!(atan(-x).to_bits(), (-atan(x)).to_bits(), "Invalid result for {}", x);
        }
    }

    #[test]
    fn test_atan_lanes() {
        let inputs = [0.5, -3.0, 0.0, f64::NAN, 1e10, -2.0, f64::INFINITY, 1e-310, 1.0];
        assert_lanes_f64(atan, atan_simd, atan_simd, &inputs);
    }
}

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
use crate::simd::{SimdBits, SimdF32};

const MANTISSA_MASK: u32 = 0x007fffff;
const HALF_EXP: u32 = 0x3f000000;
const TWO_THIRDS: u32 = 0x3f2aaaab;

/// Rough `cbrt(m)` on `[0.5, 1]`, good enough for one Newton step
const POLY: [u32; 4] = [0x3ee1dc00, 0x3f6c087b, 0xbf00f3eb, 0x3e1002bf];

/// `2^(i/3)` for `i` in `[-2, 2]`
static ROOTS: [u32; 5] = [0x3f214518, 0x3f4b2ff5, 0x3f800000, 0x3fa14518, 0x3fcb2ff5];

/// Computes cube root for every lane.
///
/// Same decomposition as [cbrt](crate::cbrt) with a single Newton step.
///
/// Max found ULP 1.5
#[inline]
pub fn cbrtf_simd<V: SimdF32>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let iax = ax.as_bits();
    let top = iax.shr(23);
    let special = top.cmp_lt(ubits::<V>(1)) | top.cmp_ge(ubits::<V>(0xff));

    let m = V::from_raw((iax & ubits::<V>(MANTISSA_MASK)) | ubits::<V>(HALF_EXP));
    let e = V::cvt_from_int(top - ubits::<V>(126));

    let p01 = cst::<V>(POLY[0]).fma(cst::<V>(POLY[1]), m);
    let p23 = cst::<V>(POLY[2]).fma(cst::<V>(POLY[3]), m);
    let p = p01.fma(m * m, p23);

    let m_by_3 = m / V::splat(3.0);
    let a = (m_by_3 / (p * p)).fma(cst::<V>(TWO_THIRDS), p);

    let ey = (e / V::splat(3.0)).trunc();
    let rem = e.fms(V::splat(3.0), ey);
    let t = V::from_raw((rem + V::splat(2.0)).cvt_to_int().lookup(|j| ROOTS[j]));
    let scale = V::from_raw((ey.cvt_to_int() + ubits::<V>(127)).shl(23));
    let y = scale * (a * t);
    let y = V::from_raw(y.as_bits() | sign);

    if special.any() {
        return lane_fallback(x, y, special, libm::cbrtf);
    }
    y
}

/// Computes cube root
///
/// Max found ULP 1.5
#[inline]
pub fn cbrtf(x: f32) -> f32 {
    cbrtf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_cbrtf() {
        assert_ulp_f32(cbrtf, libm::cbrt, -10.0, 10.0, 200000, 3);
        assert_ulp_f32(cbrtf, libm::cbrt, 1e-37, 1e-30, 20000, 3);
        assert_ulp_f32(cbrtf, libm::cbrt, 1e30, 3e38, 20000, 3);
    }

    #[test]
    fn test_cbrtf_special() {
        assert_eq!(cbrtf(0.0).to_bits(), 0);
        assert_eq!(cbrtf(-0.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(cbrtf(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert!(cbrtf(f32::NAN).is_nan());
        assert_eq!(cbrtf(1e-40), libm::cbrtf(1e-40));
        for (x, want) in [(-27.0f32, -3.0f32), (8.0, 2.0), (0.125, 0.5)] {
            let v = cbrtf(x);
            assert!(crate::ulp_distance_f32(v, want) <= 3, "Invalid result {} for {}", v, x);
        }
    }

    #[test]
    fn test_cbrtf_lanes() {
        let inputs = [0.5, -3.0, 1.0, f32::NAN, 1e30, -0.0, f32::INFINITY, 1e-40, -7.5];
        assert_lanes_f32(cbrtf, cbrtf_simd, cbrtf_simd, &inputs);
    }
}

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
use crate::math::poly::estrin;
use crate::simd::{SimdBits, SimdF32};

/// Past this the three part reduction loses bits
const RANGE_VAL: f32 = f32::from_bits(0x47000000);
const TWO_OVER_PI: f32 = f32::from_bits(0x3f22f983);
const SHIFT: f32 = f32::from_bits(0x4b400000);
/// -pi/2 as three parts
const NEG_HALF_PI_1: f32 = f32::from_bits(0xbfc90fdb);
const NEG_HALF_PI_2: f32 = f32::from_bits(0x333bbd2e);
const NEG_HALF_PI_3: f32 = f32::from_bits(0x26f72ced);

/// `(tan(r) - r) / r^3` in `r^2` on `[-pi/4, pi/4]`
const POLY: [u32; 6] = [
    0x3eaaaaa8, // 0x1.55555p-2
    0x3e088b30, // 0x1.11166p-3
    0x3d5c453c, // 0x1.b88a78p-5
    0x3cbdabab, // 0x1.7b5756p-6
    0x3ba77a67, // 0x1.4ef4cep-8
    0x3c070f3a, // 0x1.0e1e74p-7
];

#[cold]
fn tanf_special(x: f32) -> f32 {
    if x.is_nan() {
        return x + x;
    }
    if x.is_infinite() {
        return invalidf(x, "tanf");
    }
    libm::tanf(x)
}

/// Computes tangent for every lane.
///
/// Odd quadrants use `tan(x) = 1 / tan(-r)`.
///
/// Max found ULP 3.45
#[inline]
pub fn tanf_simd<V: SimdF32>(x: V) -> V {
    let special = !x.abs().cmp_lt(V::splat(RANGE_VAL));

    let shift = V::splat(SHIFT);
    let n = shift.fma(V::splat(TWO_OVER_PI), x) - shift;
    let one = V::Bits::splat(1);
    let alt = (n.cvt_round_to_int() & one).cmp_eq(one);

    let r = x.fma(V::splat(NEG_HALF_PI_1), n);
    let r = r.fma(V::splat(NEG_HALF_PI_2), n);
    let r = r.fma(V::splat(NEG_HALF_PI_3), n);

    let z = r * V::select(alt, V::splat(-1.0), V::splat(1.0));
    let z2 = r * r;
    let p = estrin(z2, z2 * z2, &POLY);
    let y = z.fma(z * z2, p);
    let y = V::select(alt, V::splat(1.0) / y, y);
    let y = V::select(x.cmp_eq(V::splat(0.0)), x, y);

    if special.any() {
        return lane_fallback(x, y, special, tanf_special);
    }
    y
}

/// Computes tangent
///
/// Max found ULP 3.45
#[inline]
pub fn tanf(x: f32) -> f32 {
    tanf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{around_f32, assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_tanf() {
        assert_ulp_f32(tanf, libm::tan, -3.1, 3.1, 100000, 5);
        assert_ulp_f32(tanf, libm::tan, -1e-5, 1e-5, 5000, 5);
        assert_ulp_f32(tanf, libm::tan, 100.0, 32000.0, 100000, 5);
        let x = f32::from_bits(0xc672f865);
        let v = tanf(x);
        let want = libm::tan(x as f64) as f32;
        assert!(crate::ulp_distance_f32(v, want) <= 5, "Invalid result {}", v);
    }

    #[test]
    fn test_tanf_special() {
        assert_eq!(tanf(0.0).to_bits(), 0);
        assert_eq!(tanf(-0.0).to_bits(), (-0.0f32).to_bits());
        assert!(tanf(f32::INFINITY).is_nan());
        assert!(tanf(f32::NAN).is_nan());
        assert_eq!(tanf(1e-40), 1e-40);
        for x in around_f32(RANGE_VAL).into_iter().chain([1e10, 3e38]) {
            let v = tanf(x);
            let want = libm::tan(x as f64) as f32;
            assert!(crate::ulp_distance_f32(v, want) <= 5, "Invalid result {} for {}", v, x);
        }
    }

    #[test]
    fn test_tanf_lanes() {
        let inputs = [0.5, -3.0, 1.5707964, f32::NAN, 1e10, -0.0, f32::INFINITY, 1e-40, 40000.0];
        assert_lanes_f32(tanf, tanf_simd, tanf_simd, &inputs);
    }
}

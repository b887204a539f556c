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
use crate::simd::SimdF32;

/// Splits every lane into `(fractional, integral)` parts, see [crate::modf_simd].
#[inline]
pub fn modff_simd<V: SimdF32>(x: V) -> (V, V) {
    let integral = x.trunc();
    let is_integer = x.cmp_eq(integral);
    let frac = V::from_raw((x - integral).as_bits() & !is_integer);
    (frac, integral)
}

/// Splits `x` into `(fractional, integral)` parts, exact.
#[inline]
pub fn modff(x: f32) -> (f32, f32) {
    modff_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::assert_lanes_f32;

    #[test]
    fn test_modff() {
        assert_eq!(modff(2.75), (0.75, 2.0));
        assert_eq!(modff(-2.75), (-0.75, -2.0));
        let (f, i) = modff(-7.0);
        assert_eq!(f.to_bits(), 0);
        assert_eq!(i, -7.0);
        let (f, i) = modff(f32::INFINITY);
        assert_eq!((f, i), (0.0, f32::INFINITY));
        let (f, i) = modff(f32::NAN);
        assert!(f.is_nan() && i.is_nan());
        for bits in (0x3f800001u32..0x4b000000).step_by(997) {
            let x = f32::from_bits(bits);
            let (f, i) = modff(x);
            assert_eq!(f + i, x, "Invalid result ({}, {}) for {}", f, i, x);
            assert_eq!(i, x.trunc(), "Invalid result ({}, {}) for {}", f, i, x);
        }
    }

    #[test]
    fn test_modff_lanes() {
        let inputs = [0.5f32, -3.25, 0.0, f32::NAN, 1e10, -2.0, f32::INFINITY, 1e-40, 7.5];
        assert_lanes_f32(|x| modff(x).0, |v| modff_simd(v).0, |v| modff_simd(v).0, &inputs);
        assert_lanes_f32(|x| modff(x).1, |v| modff_simd(v).1, |v| modff_simd(v).1, &inputs);
    }
}

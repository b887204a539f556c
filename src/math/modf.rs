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
use crate::simd::SimdF64;

/// Splits every lane into `(fractional, integral)` parts.
///
/// Both parts carry the sign of `x`, except that integral and infinite lanes
/// get a `+0` fractional part. NaN lanes give NaN for both.
#[inline]
pub fn modf_simd<V: SimdF64>(x: V) -> (V, V) {
    let integral = x.trunc();
    let is_integer = x.cmp_eq(integral);
    let frac = V::from_raw((x - integral).as_bits() & !is_integer);
    (frac, integral)
}

/// Splits `x` into `(fractional, integral)` parts, exact.
#[inline]
pub fn modf(x: f64) -> (f64, f64) {
    modf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::assert_lanes_f64;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_modf() {
        assert_eq!(modf(2.75), (0.75, 2.0));
        assert_eq!(modf(-2.75), (-0.75, -2.0));
        assert_eq!(modf(0.125), (0.125, 0.0));
        let (f, i) = modf(-0.3);
        assert_eq!(f, -0.3);
        assert_eq!(i.to_bits(), (-0.0f64).to_bits());
        let mut rng = StdRng::seed_from_u64(0x3d0f);
        for _ in 0..100000 {
            let x: f64 = rng.random_range(-1e6..1e6);
            let (f, i) = modf(x);
            assert_eq!(f + i, x, "Invalid result ({}, {}) for {}", f, i, x);
            assert!(f.abs() < 1.0 && i == x.trunc(), "Invalid result ({}, {}) for {}", f, i, x);
        }
    }

    #[test]
    fn test_modf_special() {
        let (f, i) = modf(-4.0);
        assert_eq!(f.to_bits(), 0);
        assert_eq!(i, -4.0);
        let (f, i) = modf(f64::NEG_INFINITY);
        assert_eq!(f.to_bits(), 0);
        assert_eq!(i, f64::NEG_INFINITY);
        let (f, i) = modf(f64::NAN);
        assert!(f.is_nan() && i.is_nan());
        let (f, i) = modf(1e300);
        assert_eq!((f, i), (0.0, 1e300));
        let tiny = f64::from_bits(1);
        assert_eq!(modf(tiny), (tiny, 0.0));
    }

    #[test]
    fn test_modf_lanes() {
        let inputs = [0.5, -3.25, 0.0, f64::NAN, 1e10, -2.0, f64::INFINITY, 1e-310, 7.5];
        assert_lanes_f64(|x| modf(x).0, |v| modf_simd(v).0, |v| modf_simd(v).0, &inputs);
        assert_lanes_f64(|x| modf(x).1, |v| modf_simd(v).1, |v| modf_simd(v).1, &inputs);
    }
}

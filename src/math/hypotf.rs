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
use crate::math::common::{lane_fallback2, ubits};
use crate::math::math_err::oflowf;
use crate::simd::{SimdBits, SimdF32};

/// `asuint(0x1p-102)`
const TINY_BOUND: u32 = 0x0c800000;
/// `asuint(inf) - TINY_BOUND`
const THRESH: u32 = 0x73000000;

#[cold]
fn hypotf_special(x: f32, y: f32) -> f32 {
    let r = libm::hypotf(x, y);
    if r.is_infinite() && x.is_finite() && y.is_finite() {
        return oflowf(false, "hypotf");
    }
    r
}

/// Computes `sqrt(x^2 + y^2)` for every lane.
///
/// Max found ULP 1.21
#[inline]
pub fn hypotf_simd<V: SimdF32>(x: V, y: V) -> V {
    let sqsum = (x * x).fma(y, y);
    let special = (sqsum.as_bits() - ubits::<V>(TINY_BOUND)).cmp_ge(ubits::<V>(THRESH));
    let r = sqsum.sqrt();
    if special.any() {
        return lane_fallback2(x, y, r, special, hypotf_special);
    }
    r
}

/// Computes `sqrt(x^2 + y^2)` without undue overflow or underflow
///
/// Max found ULP 1.21
#[inline]
pub fn hypotf(x: f32, y: f32) -> f32 {
    hypotf_simd(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::assert_lanes_f32;
    use crate::simd::{F32x4, SimdFloat};
    use crate::ulp_distance_f32;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_hypotf() {
        let mut rng = StdRng::seed_from_u64(0x4791);
        for _ in 0..100000 {
            let x: f32 = rng.random_range(-100.0..100.0);
            let y: f32 = rng.random_range(-100.0..100.0);
            let v = hypotf(x, y);
            let want = libm::hypot(x as f64, y as f64) as f32;
            assert!(ulp_distance_f32(v, want) <= 3, "Invalid result {} for ({}, {})", v, x, y);
        }
        for (x, y) in [(1e30f32, 1e30f32), (1e-30, 3e-30), (1e-45, 1e-44), (f32::MAX, 1.0)] {
            let v = hypotf(x, y);
            let want = libm::hypot(x as f64, y as f64) as f32;
            assert!(ulp_distance_f32(v, want) <= 3, "Invalid result {} for ({}, {})", v, x, y);
        }
    }

    #[test]
    fn test_hypotf_special() {
        assert_eq!(hypotf(-0.0, 0.0).to_bits(), 0);
        assert_eq!(hypotf(3.0, -4.0), 5.0);
        assert_eq!(hypotf(f32::INFINITY, f32::NAN), f32::INFINITY);
        assert!(hypotf(1.0, f32::NAN).is_nan());
        assert_eq!(hypotf(f32::MAX, f32::MAX), f32::INFINITY);
    }

    #[test]
    fn test_hypotf_lanes() {
        let xs = F32x4::from_array([3.0, 1e30, 0.0, 1.0]);
        let r = hypotf_simd(xs, <F32x4 as SimdFloat>::splat(4.0)).to_array();
        assert_eq!(r[0], 5.0);
        assert_eq!(r[1], 1e30);
        let inputs = [0.5, -3.0, 0.0, f32::NAN, 1e30, -2.0, f32::INFINITY, 1e-40, 1.0];
        assert_lanes_f32(
            |v| hypotf(v, 0.75),
            |v| hypotf_simd(v, <F32x4 as SimdFloat>::splat(0.75)),
            |v| hypotf_simd(v, SimdFloat::splat(0.75)),
            &inputs,
        );
    }
}

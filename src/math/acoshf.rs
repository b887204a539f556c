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
use crate::math::common::{lane_fallback, ubits};
use crate::math::log1pf::log1pf_inline;
use crate::math::math_err::invalidf;
use crate::simd::{SimdBits, SimdF32};

/// `asuint(0x1p64) - asuint(1)`
const THRESH: u32 = 0x20000000;

#[cold]
fn acoshf_special(x: f32) -> f32 {
    if x.is_nan() {
        return x + x;
    }
    if x < 1.0 {
        return invalidf(x, "acoshf");
    }
    libm::acoshf(x)
}

/// Computes inverse hyperbolic cosine for every lane.
///
/// Max found ULP 3.22
#[inline]
pub fn acoshf_simd<V: SimdF32>(x: V) -> V {
    let special = (x.as_bits() - ubits::<V>(1f32.to_bits())).cmp_ge(ubits::<V>(THRESH));
    let xs = V::select(special, V::splat(1.0), x);
    let xm1 = xs - V::splat(1.0);
    let u = xm1 * (xs + V::splat(1.0));
    let y = log1pf_inline(xm1 + u.sqrt());
    if special.any() {
        return lane_fallback(x, y, special, acoshf_special);
    }
    y
}

/// Computes inverse hyperbolic cosine
///
/// Max found ULP 3.22
#[inline]
pub fn acoshf(x: f32) -> f32 {
    acoshf_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f32, assert_ulp_f32};

    #[test]
    fn test_acoshf() {
        assert_ulp_f32(acoshf, libm::acosh, 1.0, 1.1, 50000, 5);
        assert_ulp_f32(acoshf, libm::acosh, 1.1, 100.0, 100000, 5);
        assert_ulp_f32(acoshf, libm::acosh, 100.0, 1.8e19, 20000, 5);
        let x = f32::from_bits(0x3f803f79);
        let v = acoshf(x);
        let want = libm::acosh(x as f64) as f32;
        assert!(crate::ulp_distance_f32(v, want) <= 5, "Invalid result {}", v);
    }

    #[test]
    fn test_acoshf_special() {
        assert_eq!(acoshf(1.0).to_bits(), 0);
        assert_eq!(acoshf(f32::INFINITY), f32::INFINITY);
        assert!(acoshf(0.999).is_nan());
        assert!(acoshf(-1.0).is_nan());
        assert!(acoshf(f32::NAN).is_nan());
        let v = acoshf(1e30);
        assert!(crate::ulp_distance_f32(v, libm::acoshf(1e30)) <= 1, "Invalid result {}", v);
    }

    #[test]
    fn test_acoshf_lanes() {
        let inputs = [1.5, 0.5, 1.0, f32::NAN, 1e30, -2.0, f32::INFINITY, 3.0, 1.0000001];
        assert_lanes_f32(acoshf, acoshf_simd, acoshf_simd, &inputs);
    }
}

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
use crate::math::log1p::log1p_inline;
use crate::math::math_err::invalid;
use crate::simd::{SimdBits, SimdF64};

/// `asuint64(0x1p511) - asuint64(1)`
const THRESH: u64 = 0x1ff0000000000000;

#[cold]
fn acosh_special(x: f64) -> f64 {
    if x.is_nan() {
        return x + x;
    }
    if x < 1.0 {
        return invalid(x, "acosh");
    }
    libm::acosh(x)
}

/// Computes inverse hyperbolic cosine for every lane.
///
/// `acosh(x) = log1p(x - 1 + sqrt((x - 1)(x + 1)))`
///
/// Max found ULP 3.02
#[inline]
pub fn acosh_simd<V: SimdF64>(x: V) -> V {
    let special = (x.as_bits() - ubits::<V>(1f64.to_bits())).cmp_ge(ubits::<V>(THRESH));
    let xs = V::select(special, V::splat(1.0), x);
    let xm1 = xs - V::splat(1.0);
    let u = (xs + V::splat(1.0)) * xm1;
    let y = log1p_inline(xm1 + u.sqrt());
    if special.any() {
        return lane_fallback(x, y, special, acosh_special);
    }
    y
}

/// Computes inverse hyperbolic cosine
///
/// Max found ULP 3.02
#[inline]
pub fn acosh(x: f64) -> f64 {
    acosh_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_acosh() {
        assert_ulp_f64(acosh, libm::acosh, 1.0, 1.1, 20000, 5);
        assert_ulp_f64(acosh, libm::acosh, 1.1, 10.0, 50000, 5);
        assert_ulp_f64(acosh, libm::acosh, 10.0, 1e300, 20000, 5);
        let x = f64::from_bits(0x3ff00798aaf80739);
        let v = acosh(x);
        assert!(crate::ulp_distance_f64(v, libm::acosh(x)) <= 5, "Invalid result {}", v);
    }

    #[test]
    fn test_acosh_special() {
        assert_eq!(acosh(1.0).to_bits(), 0);
        assert_eq!(acosh(f64::INFINITY), f64::INFINITY);
        assert!(acosh(0.5).is_nan());
        assert!(acosh(-0.0).is_nan());
        assert!(acosh(f64::NEG_INFINITY).is_nan());
        assert!(acosh(f64::NAN).is_nan());
        let v = acosh(f64::MAX);
        assert!(crate::ulp_distance_f64(v, libm::acosh(f64::MAX)) <= 1, "Invalid result {}", v);
    }

    #[test]
    fn test_acosh_lanes() {
        let inputs = [1.5, 0.5, 1.0, f64::NAN, 1e300, -2.0, f64::INFINITY, 3.0, 1.0000001];
        assert_lanes_f64(acosh, acosh_simd, acosh_simd, &inputs);
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_acosh_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        assert!(acosh(2.0) > 0.0);
        assert_eq!(last_error(), None);
        assert!(acosh(0.0).is_nan());
        assert_eq!(take_last_error(), Some(MathError::Domain));
    }
}

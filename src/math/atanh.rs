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
use crate::math::log1p::log1p_inline;
use crate::math::math_err::{divzero, invalid};
use crate::simd::{SimdBits, SimdF64};

#[cold]
fn atanh_special(x: f64) -> f64 {
    if x.is_nan() {
        return x + x;
    }
    if x.abs() == 1.0 {
        return divzero(x < 0.0, "atanh");
    }
    invalid(x, "atanh")
}

/// Computes inverse hyperbolic tangent for every lane.
///
/// `atanh(x) = 1/2 log1p(2|x| / (1 - |x|))` with the sign of `x`.
///
/// Max found ULP 3.31
#[inline]
pub fn atanh_simd<V: SimdF64>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let halfsign = V::from_raw(V::splat(0.5).as_bits() | sign);
    let special = !ax.cmp_lt(V::splat(1.0));
    let ax = V::select(special, V::splat(0.0), ax);

    let y = (ax + ax) / (V::splat(1.0) - ax);
    let y = log1p_inline(y) * halfsign;
    if special.any() {
        return lane_fallback(x, y, special, atanh_special);
    }
    y
}

/// Computes inverse hyperbolic tangent
///
/// Max found ULP 3.31
#[inline]
pub fn atanh(x: f64) -> f64 {
    atanh_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_atanh() {
        assert_ulp_f64(atanh, libm::atanh, -1.0, 1.0, 100000, 5);
        assert_ulp_f64(atanh, libm::atanh, -1e-8, 1e-8, 2000, 5);
        assert_ulp_f64(atanh, libm::atanh, 0.999999, 1.0, 5000, 5);
        let x = f64::from_bits(0x3f9ffae6288b6010);
        let v = atanh(x);
        assert!(crate::ulp_distance_f64(v, libm::atanh(x)) <= 5, "Invalid result {}", v);
    }

    #[test]
    fn test_atanh_special() {
        assert_eq!(atanh(0.0).to_bits(), 0);
        assert_eq!(atanh(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(atanh(1.0), f64::INFINITY);
        assert_eq!(atanh(-1.0), f64::NEG_INFINITY);
        assert_eq!(atanh(1e-300), 1e-300);
        assert_eq!(atanh(-5e-324), -5e-324);
        assert!(atanh(1.5).is_nan());
        assert!(atanh(f64::INFINITY).is_nan());
        assert!(atanh(f64::NAN).is_nan());
    }

    #[test]
    fn test_atanh_lanes() {
        let inputs = [0.5, -0.75, 1.0, f64::NAN, 2.0, -0.0, -1.0, 1e-310, 0.999];
        assert_lanes_f64(atanh, atanh_simd, atanh_simd, &inputs);
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_atanh_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        assert!(atanh(0.5) > 0.0);
        assert_eq!(last_error(), None);
        assert_eq!(atanh(-1.0), f64::NEG_INFINITY);
        assert_eq!(take_last_error(), Some(MathError::Pole));
        assert!(atanh(2.0).is_nan());
        assert_eq!(take_last_error(), Some(MathError::Domain));
    }
}

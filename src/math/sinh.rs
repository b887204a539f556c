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
use crate::math::common::{cst, ubits};
use crate::math::exp::report_xflow;
use crate::math::expm1::expm1_inline;
use crate::simd::{SimdBits, SimdF64};

/// Past this `expm1(|x|)` would leave the normal range
const SPECIAL_BOUND: f64 = f64::from_bits(0x408628b76e3a7b61);
/// Past this the result is infinite
const INF_BOUND: f64 = f64::from_bits(0x4086340000000000);
/// `cosh(9)`, slightly shifted
const COSH_9: f64 = f64::from_bits(0x40afa7157c470f82);

/// Computes sinh for every lane.
///
/// Max found ULP 2.08
#[inline]
pub fn sinh_simd<V: SimdF64>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() & ubits::<V>(0x8000000000000000);
    let half_sign = V::from_raw(sign | ubits::<V>(0x3fe0000000000000));

    // sinh(x) = (expm1(x) + expm1(x) / (expm1(x) + 1)) / 2
    let t = expm1_inline(ax);
    let y = (t + t / (t + V::splat(1.0))) * half_sign;

    let special = ax.cmp_ge(V::splat(SPECIAL_BOUND));
    if special.any() {
        return sinh_special(x, ax, y, sign, special);
    }
    y
}

/// sinh(a + 9) = cosh(9) e^a once e^-x is negligible
#[cold]
#[inline(never)]
fn sinh_special<V: SimdF64>(x: V, ax: V, y: V, sign: V::Bits, special: V::Bits) -> V {
    let s = expm1_inline(ax - V::splat(9.0)) * V::splat(COSH_9);
    let s = V::select(ax.cmp_gt(V::splat(INF_BOUND)), cst::<V>(0x7ff0000000000000), s);
    let s = V::from_raw(s.as_bits() | sign);
    let y = V::select(special, s, y);
    report_xflow(x, y, special, "sinh");
    y
}

/// Computes sinh
///
/// Max found ULP 2.08
#[inline]
pub fn sinh(x: f64) -> f64 {
    sinh_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{around_f64, assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_sinh() {
        assert_ulp_f64(sinh, f64::sinh, -1.0, 1.0, 20000, 3);
        assert_ulp_f64(sinh, f64::sinh, -1e-7, 1e-7, 2000, 3);
        assert_ulp_f64(sinh, f64::sinh, -710.0, 710.0, 20000, 3);
        for x in around_f64(SPECIAL_BOUND) {
            let v = sinh(x);
            assert!(
                crate::ulp_distance_f64(v, x.sinh()) <= 3,
                "Invalid result {}, expected {}",
                v,
                x.sinh()
            );
        }
    }

    #[test]
    fn test_sinh_special() {
        assert_eq!(sinh(0.0).to_bits(), 0);
        assert_eq!(sinh(-0.0).to_bits(), 0x8000000000000000);
        assert_eq!(sinh(f64::INFINITY), f64::INFINITY);
        assert_eq!(sinh(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(sinh(f64::NAN).is_nan());
        assert_eq!(sinh(711.0), f64::INFINITY);
        assert_eq!(sinh(-711.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_sinh_odd() {
        for x in [0.1, 1.5, 20.0, 709.5] {
            assert_eq!(sinh(-x), -sinh(x), "Invalid result for {}", x);
        }
    }

    #[test]
    fn test_sinh_lanes() {
        let inputs = [0.5, -3.0, 709.9, f64::NAN, 1e-20, -1000.0, f64::INFINITY, -0.0];
        assert_lanes_f64(sinh, sinh_simd, sinh_simd, &inputs);
    }
}

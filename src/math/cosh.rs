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
use crate::math::common::cst;
use crate::math::exp::{exp_inline, report_xflow};
use crate::simd::{SimdBits, SimdF64};

/// Past this `exp(|x|)` leaves the range of the table scale
const SPECIAL_BOUND: f64 = f64::from_bits(0x4086232e147ae148);
/// Past this the result is infinite
const INF_BOUND: f64 = f64::from_bits(0x4086340000000000);
/// `cosh(9)`, slightly shifted
const COSH_9: f64 = f64::from_bits(0x40afa7157c470f82);

/// Computes cosh for every lane.
///
/// Max found ULP 2.62
#[inline]
pub fn cosh_simd<V: SimdF64>(x: V) -> V {
    let ax = x.abs();
    // cosh(x) = e^|x| / 2 + 1 / (2 e^|x|)
    let t = exp_inline(ax);
    let y = t * V::splat(0.5) + V::splat(0.5) / t;

    let special = ax.cmp_gt(V::splat(SPECIAL_BOUND));
    if special.any() {
        return cosh_special(x, ax, y, special);
    }
    y
}

/// cosh(a + 9) = cosh(9) e^a once e^-x is negligible
#[cold]
#[inline(never)]
fn cosh_special<V: SimdF64>(x: V, ax: V, y: V, special: V::Bits) -> V {
    let s = exp_inline(ax - V::splat(9.0)) * V::splat(COSH_9);
    let s = V::select(ax.cmp_gt(V::splat(INF_BOUND)), cst::<V>(0x7ff0000000000000), s);
    let y = V::select(special, s, y);
    report_xflow(x, y, special, "cosh");
    y
}

/// Computes cosh
///
/// Max found ULP 2.62
#[inline]
pub fn cosh(x: f64) -> f64 {
    cosh_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{around_f64, assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_cosh() {
        assert_ulp_f64(cosh, f64::cosh, -3.0, 3.0, 20000, 4);
        assert_ulp_f64(cosh, f64::cosh, -710.0, 710.0, 20000, 4);
        for x in around_f64(SPECIAL_BOUND) {
            let v = cosh(x);
            assert!(
                crate::ulp_distance_f64(v, x.cosh()) <= 4,
                "Invalid result {}, expected {}",
                v,
                x.cosh()
            );
        }
    }

    #[test]
    fn test_cosh_special() {
        assert_eq!(cosh(0.0), 1.0);
        assert_eq!(cosh(-0.0), 1.0);
        assert_eq!(cosh(f64::INFINITY), f64::INFINITY);
        assert_eq!(cosh(f64::NEG_INFINITY), f64::INFINITY);
        assert!(cosh(f64::NAN).is_nan());
        assert_eq!(cosh(711.0), f64::INFINITY);
        assert_eq!(cosh(-1e10), f64::INFINITY);
    }

    #[test]
    fn test_cosh_even() {
        for x in [0.1, 1.5, 20.0, 709.5] {
            assert_eq!(cosh(-x), cosh(x), "Invalid result for {}", x);
        }
    }

    #[test]
    fn test_cosh_lanes() {
        let inputs = [0.5, -3.0, 709.9, f64::NAN, 1e-20, -1000.0, f64::INFINITY, 708.5];
        assert_lanes_f64(cosh, cosh_simd, cosh_simd, &inputs);
    }
}

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
use crate::math::erf_data::ERFC_TABLE;
use crate::math::math_err::uflow;
use crate::simd::{SimdBits, SimdF64};

/// From here on erfc rounds to 0
const MAX: f64 = 27.25;
/// Rounds to a multiple of 1/64
const SHIFT: f64 = f64::from_bits(0x42d0000000000000);
/// Removes the `2^128` table scale
const TABLE_SCALE: f64 = f64::from_bits(0x37f0000000000000);
/// Taylor terms kept, enough for `r d` up to `27.25 / 128`
const TERMS: usize = 14;

#[cold]
fn erfc_special(x: f64) -> f64 {
    if x.is_nan() {
        return x + x;
    }
    if x < 0.0 {
        return 2.0;
    }
    if x == f64::INFINITY {
        return 0.0;
    }
    uflow(false, "erfc")
}

/// Computes complementary error function for every lane.
///
/// With `r` the multiple of 1/64 nearest to `|x|` and `d = |x| - r`,
/// `erfc(|x|) ~ erfc(r) - scale(r) d sum(q_k d^k)`. The `q_k` are Taylor
/// terms of `e^(-x^2)` around `r` given by the Hermite recurrence
/// `q_(k+1) = -(2 r q_k + 2k q_(k-1) / (k + 1)) / (k + 2)`.
/// Negative arguments use `erfc(x) = 2 - erfc(-x)`.
///
/// Max found ULP 1.99
#[inline]
pub fn erfc_simd<V: SimdF64>(x: V) -> V {
    // NaN lands here too
    let special = !x.abs().cmp_lt(V::splat(MAX));
    let a = V::select(special, V::splat(0.0), x.abs());

    let shift = V::splat(SHIFT);
    let z = a + shift;
    let i = z.as_bits() - shift.as_bits();
    let erfc_r = V::from_raw(i.lookup(|j| ERFC_TABLE[j].0));
    let scale = V::from_raw(i.lookup(|j| ERFC_TABLE[j].1));

    let r = z - shift;
    let d = a - r;

    let mut q = [V::splat(1.0); TERMS];
    q[1] = -r;
    for k in 1..TERMS - 1 {
        let ak = -2.0 / (k + 2) as f64;
        let bk = -2.0 * k as f64 / ((k + 1) * (k + 2)) as f64;
        q[k + 1] = (q[k - 1] * V::splat(bk)).fma(r * V::splat(ak), q[k]);
    }
    let mut p = q[TERMS - 1];
    for &c in q[..TERMS - 1].iter().rev() {
        p = c.fma(p, d);
    }

    let y = erfc_r.fms(scale, d * p) * V::splat(TABLE_SCALE);
    let y = V::select(x.cmp_lt(V::splat(0.0)), V::splat(2.0) - y, y);

    if special.any() {
        return lane_fallback(x, y, special, erfc_special);
    }
    y
}

/// Computes complementary error function
///
/// Max found ULP 1.99
#[inline]
pub fn erfc(x: f64) -> f64 {
    erfc_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_erfc() {
        assert_ulp_f64(erfc, libm::erfc, -6.0, 6.0, 50000, 3);
        assert_ulp_f64(erfc, libm::erfc, 6.0, 26.5, 50000, 3);
        assert_ulp_f64(erfc, libm::erfc, -1e-10, 1e-10, 2000, 3);
        // worst case of the sampled scan
        let x = 25.1794776327601;
        let v = erfc(x);
        assert!(crate::ulp_distance_f64(v, libm::erfc(x)) <= 3, "Invalid result {}", v);
    }

    #[test]
    fn test_erfc_special() {
        assert_eq!(erfc(0.0), 1.0);
        assert_eq!(erfc(-0.0), 1.0);
        assert_eq!(erfc(f64::INFINITY), 0.0);
        assert_eq!(erfc(f64::NEG_INFINITY), 2.0);
        assert!(erfc(f64::NAN).is_nan());
        assert_eq!(erfc(MAX), 0.0);
        assert_eq!(erfc(1e300), 0.0);
        assert_eq!(erfc(-30.0), 2.0);
        assert_eq!(erfc(-7.0), 2.0);
        let v = erfc(27.0);
        assert!(v > 0.0 && v < f64::MIN_POSITIVE, "Invalid result {}", v);
    }

    #[test]
    fn test_erfc_reflection() {
        for x in [0.1, 0.75, 1.5, 3.0] {
            let v = erfc(-x) + erfc(x);
            assert!((v - 2.0).abs() <= 4.0 * f64::EPSILON, "Invalid result {} for {}", v, x);
        }
    }

    #[test]
    fn test_erfc_lanes() {
        let inputs = [0.5, -3.0, 27.0, f64::NAN, 1e-20, -0.0, f64::INFINITY, 30.0, -40.0];
        assert_lanes_f64(erfc, erfc_simd, erfc_simd, &inputs);
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_erfc_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        assert!(erfc(27.0) > 0.0);
        assert_eq!(erfc(f64::INFINITY), 0.0);
        assert_eq!(last_error(), None);
        assert_eq!(erfc(28.0), 0.0);
        assert_eq!(take_last_error(), Some(MathError::Underflow));
    }
}

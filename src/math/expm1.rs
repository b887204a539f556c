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
use crate::math::exp::SHIFT;
use crate::math::math_err::check_oflow;
use crate::math::poly::estrin;
use crate::simd::{SimdBits, SimdF64};

/// Past this `2^round(x/ln2)` leaves the normal range
const OFLOW_BOUND: f64 = f64::from_bits(0x40862b7d369a5aa9);
const INV_LN2: f64 = f64::from_bits(0x3ff71547652b82fe);
const LN2_HI: f64 = f64::from_bits(0x3fe62e42fefa39ef);
const LN2_LO: f64 = f64::from_bits(0x3c7abc9e3b39803f);

/// `(expm1(f) - f) / f^2` on `[-ln2/2, ln2/2]`
const C: [u64; 11] = [
    0x3fe0000000000000, // 0x1p-1
    0x3fc5555555555559, // 0x1.5555555555559p-3
    0x3fa555555555554b, // 0x1.555555555554bp-5
    0x3f8111111110f663, // 0x1.111111110f663p-7
    0x3f56c16c16c1b5f3, // 0x1.6c16c16c1b5f3p-10
    0x3f2a01a01affa35d, // 0x1.a01a01affa35dp-13
    0x3efa01a018b4ecbb, // 0x1.a01a018b4ecbbp-16
    0x3ec71ddf82db5bb4, // 0x1.71ddf82db5bb4p-19
    0x3e927e517fc0d54b, // 0x1.27e517fc0d54bp-22
    0x3e5af5eedae67435, // 0x1.af5eedae67435p-26
    0x3e21f143d060a28a, // 0x1.1f143d060a28ap-29
];

/// e^x - 1 without special lanes, valid while `2^round(x/ln2)` is normal
#[inline(always)]
pub(crate) fn expm1_inline<V: SimdF64>(x: V) -> V {
    // expm1(x) = 2^i * (expm1(f) + 1) - 1, i = round(x / ln2)
    let n = V::splat(SHIFT).fma(V::splat(INV_LN2), x) - V::splat(SHIFT);
    let i = n.cvt_to_int();
    let f = x.fms(n, V::splat(LN2_HI)).fms(n, V::splat(LN2_LO));

    let f2 = f * f;
    let p = f.fma(f2, estrin(f, f2, &C));

    let t = V::from_raw(i.shl(52) + ubits::<V>(0x3ff0000000000000));
    (t - V::splat(1.0)).fma(p, t)
}

#[cold]
fn expm1_special(x: f64) -> f64 {
    if !x.is_finite() {
        return libm::expm1(x);
    }
    check_oflow(libm::expm1(x), "expm1")
}

/// Computes e^x - 1 for every lane.
///
/// Max found ULP 2.06
#[inline]
pub fn expm1_simd<V: SimdF64>(x: V) -> V {
    let special = x.abs_ge(V::splat(OFLOW_BOUND));
    let y = expm1_inline(x);
    if special.any() {
        return lane_fallback(x, y, special, expm1_special);
    }
    y
}

/// Computes e^x - 1
///
/// Max found ULP 2.06
#[inline]
pub fn expm1(x: f64) -> f64 {
    expm1_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{around_f64, assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_expm1() {
        assert_ulp_f64(expm1, f64::exp_m1, -1.0, 1.0, 20000, 3);
        assert_ulp_f64(expm1, f64::exp_m1, -1e-8, 1e-8, 2000, 3);
        assert_ulp_f64(expm1, f64::exp_m1, -745.0, 709.7, 20000, 3);
        for x in around_f64(OFLOW_BOUND) {
            let v = expm1(x);
            assert!(
                crate::ulp_distance_f64(v, x.exp_m1()) <= 3,
                "Invalid result {}, expected {}",
                v,
                x.exp_m1()
            );
        }
    }

    #[test]
    fn test_expm1_special() {
        assert_eq!(expm1(0.0), 0.0);
        assert_eq!(expm1(f64::INFINITY), f64::INFINITY);
        assert_eq!(expm1(f64::NEG_INFINITY), -1.0);
        assert!(expm1(f64::NAN).is_nan());
        assert_eq!(expm1(710.0), f64::INFINITY);
        assert_eq!(expm1(-800.0), -1.0);
        assert_eq!(expm1(1e-300), 1e-300);
    }

    #[test]
    fn test_expm1_lanes() {
        let inputs = [0.5, -3.0, 709.9, f64::NAN, 1e-20, -1000.0, f64::INFINITY, 20.0];
        assert_lanes_f64(expm1, expm1_simd, expm1_simd, &inputs);
    }
}

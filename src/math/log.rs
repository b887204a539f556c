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
use crate::math::log_data::LOG_TABLE;
use crate::math::math_err::{divzero, invalid};
use crate::math::poly::pairwise_horner;
use crate::simd::{SimdBits, SimdF64};
use std::num::Wrapping;

/// `x = 2^k z` with `z` in `[Off, 2 Off)`
const OFF: u64 = 0x3fe6900900000000;
const TABLE_BITS: u32 = 7;
const MIN_NORM: u64 = 0x0010000000000000;
/// `asuint64(inf) - MIN_NORM`
const SPECIAL_BOUND: u64 = 0x7fe0000000000000;
const LN2: f64 = f64::from_bits(0x3fe62e42fefa39ef);

/// `(log1p(r) - r) / r^2` for `|r| < 0x1.fp-9`
const C: [u64; 5] = [
    0xbfdffffffffffff7, // -0x1.ffffffffffff7p-2
    0x3fd55555555170d4, // 0x1.55555555170d4p-2
    0xbfd0000000399c27, // -0x1.0000000399c27p-2
    0x3fc999b2e90e94ca, // 0x1.999b2e90e94cap-3
    0xbfc554e550bd501e, // -0x1.554e550bd501ep-3
];

/// Lanes that are not positive finite normal numbers
#[inline(always)]
pub(crate) fn log_special_lanes<V: SimdF64>(x: V) -> V::Bits {
    (x.as_bits() - ubits::<V>(MIN_NORM)).cmp_ge(ubits::<V>(SPECIAL_BOUND))
}

/// Splits the bit pattern `ix` of a positive normal number.
///
/// Returns `(r, k, i)` where `x = 2^k z`, `r = z invc - 1` and `i` is the
/// table index of `invc`.
#[inline(always)]
pub(crate) fn log_reduce<V: SimdF64>(ix: V::Bits) -> (V, V, V::Bits) {
    let tmp = ix - ubits::<V>(OFF);
    let k = V::cvt_from_int(tmp.sra(52));
    let iz = ix - (tmp & ubits::<V>(0xfff0000000000000));
    let z = V::from_raw(iz);
    let i = tmp.shr(52 - TABLE_BITS) & ubits::<V>((1 << TABLE_BITS) - 1);
    let invc = V::from_raw(i.lookup(|j| LOG_TABLE[j].0));
    let r = V::splat(-1.0).fma(z, invc);
    (r, k, i)
}

/// Handles the lanes rejected by [log_special_lanes], `core` evaluates
/// normalised bit patterns.
#[cold]
pub(crate) fn log_special(x: f64, core: fn(Wrapping<u64>) -> f64, func: &'static str) -> f64 {
    if x.is_nan() {
        return x + x;
    }
    if x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return divzero(true, func);
    }
    if x < 0.0 {
        return invalid(x, func);
    }
    // subnormal: x * 2^52 is normal, the exponent is fixed up in the bits
    let ix = (x * f64::from_bits(0x4330000000000000)).to_bits();
    core(Wrapping(ix.wrapping_sub(52 << 52)))
}

#[inline(always)]
pub(crate) fn log_core<V: SimdF64>(ix: V::Bits) -> V {
    let (r, k, i) = log_reduce::<V>(ix);
    let logc = V::from_raw(i.lookup(|j| LOG_TABLE[j].1));

    // log(x) = log1p(r) + log(c) + k ln2
    let hi = (logc + r).fma(k, V::splat(LN2));
    let r2 = r * r;
    hi.fma(r2, pairwise_horner(r, r2, &C))
}

/// Computes natural logarithm for every lane.
///
/// Max found ULP 1.67
#[inline]
pub fn log_simd<V: SimdF64>(x: V) -> V {
    let special = log_special_lanes(x);
    let y = log_core::<V>(x.as_bits());
    if special.any() {
        return lane_fallback(x, y, special, |v| log_special(v, log_core::<f64>, "log"));
    }
    y
}

/// Computes natural logarithm
///
/// Max found ULP 1.67
#[inline]
pub fn log(x: f64) -> f64 {
    log_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_log() {
        assert_ulp_f64(log, f64::ln, 0.5, 2.0, 20000, 3);
        assert_ulp_f64(log, f64::ln, 0.99, 1.01, 20000, 3);
        assert_ulp_f64(log, f64::ln, 1e-300, 1e300, 20000, 3);
        assert_ulp_f64(log, f64::ln, 1e-320, 2.2e-308, 2000, 3);
        assert_ulp_f64(log, f64::ln, 1e300, f64::MAX, 2000, 3);
    }

    #[test]
    fn test_log_special() {
        assert_eq!(log(1.0).to_bits(), 0);
        assert_eq!(log(0.0), f64::NEG_INFINITY);
        assert_eq!(log(-0.0), f64::NEG_INFINITY);
        assert_eq!(log(f64::INFINITY), f64::INFINITY);
        assert!(log(f64::NEG_INFINITY).is_nan());
        assert!(log(-1.0).is_nan());
        assert!(log(f64::NAN).is_nan());
        let tiny = log(f64::from_bits(1));
        let want = f64::from_bits(1).ln();
        assert!(crate::ulp_distance_f64(tiny, want) <= 2, "Invalid result {}", tiny);
    }

    #[test]
    fn test_log_exp_identity() {
        for x in [0.001, 0.75, 3.5, 1e10, 1e-100] {
            let v = crate::math::exp::exp(log(x));
            assert!(crate::ulp_distance_f64(v, x) <= 1024, "Invalid result {} for {}", v, x);
        }
    }

    #[test]
    fn test_log_lanes() {
        let inputs = [0.5, 3.0, 0.0, f64::NAN, 1e-310, -2.0, f64::INFINITY, 1.0, 1e300];
        assert_lanes_f64(log, log_simd, log_simd, &inputs);
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_log_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        assert!(log(2.0) > 0.0);
        assert_eq!(last_error(), None);
        assert_eq!(log(0.0), f64::NEG_INFINITY);
        assert_eq!(take_last_error(), Some(MathError::Pole));
        assert!(log(-1.0).is_nan());
        assert_eq!(take_last_error(), Some(MathError::Domain));
        assert_eq!(log(f64::INFINITY), f64::INFINITY);
        assert_eq!(last_error(), None);
    }
}

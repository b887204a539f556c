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
use crate::math::log::log_core;
use crate::math::poly::estrin;
use crate::simd::{SimdBits, SimdF64};

/// Past this `x^2` overflows
const HUGE_BOUND: u64 = 0x5fe0000000000000;

/// `(asinh(x) - x) / x^3` in `x^2` on `[0, 1]`
const POLY: [u64; 18] = [
    0xbfc55555555554a7, // -0x1.55555555554a7p-3
    0x3fb3333333326c70, // 0x1.3333333326c7p-4
    0xbfa6db6db68332e6, // -0x1.6db6db68332e6p-5
    0x3f9f1c71b26fb40d, // 0x1.f1c71b26fb40dp-6
    0xbf96e8b8b654a621, // -0x1.6e8b8b654a621p-6
    0x3f91c4daa9e67871, // 0x1.1c4daa9e67871p-6
    0xbf8c9871d10885af, // -0x1.c9871d10885afp-7
    0x3f87a16e8d9d2ecf, // 0x1.7a16e8d9d2ecfp-7
    0xbf83ddca533e9f54, // -0x1.3ddca533e9f54p-7
    0x3f80becef748dafc, // 0x1.0becef748dafcp-7
    0xbf7b90c7099dd397, // -0x1.b90c7099dd397p-8
    0x3f7541f2bb1ffe51, // 0x1.541f2bb1ffe51p-8
    0xbf6d217026a669ec, // -0x1.d217026a669ecp-9
    0x3f60b5c7977aaf70, // 0x1.0b5c7977aaf7p-9
    0xbf4e0f37daef9127, // -0x1.e0f37daef9127p-11
    0x3f3388b5fe542a60, // 0x1.388b5fe542a6p-12
    0xbf1021a48685e287, // -0x1.021a48685e287p-14
    0x3ed93d4ba83d34da, // 0x1.93d4ba83d34dap-18
];

/// Computes inverse hyperbolic sine for every lane.
///
/// `log(|x| + sqrt(x^2 + 1))` from 1 on, an odd polynomial below.
///
/// Max found ULP 2.80
#[inline]
pub fn asinh_simd<V: SimdF64>(x: V) -> V {
    let ax = x.abs();
    let sign = x.as_bits() ^ ax.as_bits();
    let iax = ax.as_bits();
    let gt1 = ax.cmp_ge(V::splat(1.0));
    let special = iax.cmp_ge(ubits::<V>(HUGE_BOUND));

    let xm = V::select(special, V::splat(1.0), ax);
    let large = log_core::<V>((xm + V::splat(1.0).fma(xm, xm).sqrt()).as_bits());

    let x2 = ax * ax;
    let x3 = ax * x2;
    let z2 = x2 * x2;
    let small = ax.fma(estrin(x2, z2, &POLY), x3);

    let y = V::select(gt1, large, small);
    let y = V::from_raw(y.as_bits() | sign);
    if special.any() {
        return lane_fallback(x, y, special, libm::asinh);
    }
    y
}

/// Computes inverse hyperbolic sine
///
/// Max found ULP 2.80
#[inline]
pub fn asinh(x: f64) -> f64 {
    asinh_simd(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_utils::{assert_lanes_f64, assert_ulp_f64};

    #[test]
    fn test_asinh() {
        assert_ulp_f64(asinh, libm::asinh, -1.0, 1.0, 50000, 4);
        assert_ulp_f64(asinh, libm::asinh, 1.0, 10.0, 20000, 4);
        assert_ulp_f64(asinh, libm::asinh, -1e-8, 1e-8, 2000, 4);
        assert_ulp_f64(asinh, libm::asinh, 10.0, 1e300, 20000, 4);
        let x = f64::from_bits(0x3ff2cd9d717e2c9b);
        let v = asinh(x);
        assert!(crate::ulp_distance_f64(v, libm::asinh(x)) <= 4, "Invalid result {}", v);
    }

    #[test]
    fn test_asinh_special() {
        assert_eq!(asinh(0.0).to_bits(), 0);
        assert_eq!(asinh(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(asinh(f64::INFINITY), f64::INFINITY);
        assert_eq!(asinh(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(asinh(f64::NAN).is_nan());
        assert_eq!(asinh(1e-300), 1e-300);
        assert_eq!(asinh(-5e-324), -5e-324);
        let v = asinh(-f64::MAX);
        assert!(crate::ulp_distance_f64(v, libm::asinh(-f64::MAX)) <= 1, "Invalid result {}", v);
    }

    #[test]
    fn test_asinh_lanes() {
        let inputs = [0.5, -3.0, 1.0, f64::NAN, 1e300, -0.0, f64::INFINITY, 1e-310, -0.999];
        assert_lanes_f64(asinh, asinh_simd, asinh_simd, &inputs);
    }
}

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
//! Distance between floats in units of the last place.

#[inline]
fn ordered_f64(x: f64) -> i128 {
    let b = x.to_bits();
    if b >> 63 != 0 {
        -((b & 0x7fff_ffff_ffff_ffff) as i128)
    } else {
        b as i128
    }
}

#[inline]
fn ordered_f32(x: f32) -> i64 {
    let b = x.to_bits();
    if b >> 31 != 0 {
        -((b & 0x7fff_ffff) as i64)
    } else {
        b as i64
    }
}

/// Number of representable doubles between `a` and `b`.
///
/// `+0` and `-0` are at distance 0. Two NaNs are at distance 0, a NaN and a
/// number at `u64::MAX`.
pub fn ulp_distance_f64(a: f64, b: f64) -> u64 {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => 0,
        (false, false) => {
            let d = (ordered_f64(a) - ordered_f64(b)).unsigned_abs();
            d.min(u64::MAX as u128) as u64
        }
        _ => u64::MAX,
    }
}

/// Number of representable floats between `a` and `b`.
///
/// Same conventions as [ulp_distance_f64].
pub fn ulp_distance_f32(a: f32, b: f32) -> u32 {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => 0,
        (false, false) => {
            let d = (ordered_f32(a) - ordered_f32(b)).unsigned_abs();
            d.min(u32::MAX as u64) as u32
        }
        _ => u32::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ulp_distance() {
        assert_eq!(ulp_distance_f64(1.0, 1.0), 0);
        assert_eq!(ulp_distance_f64(0.0, -0.0), 0);
        assert_eq!(ulp_distance_f64(1.0, f64::from_bits(1f64.to_bits() + 3)), 3);
        assert_eq!(
            ulp_distance_f64(f64::from_bits(1), -f64::from_bits(1)),
            2
        );
        assert_eq!(ulp_distance_f64(f64::NAN, 1.0), u64::MAX);
        assert_eq!(ulp_distance_f64(f64::NAN, -f64::NAN), 0);
        assert_eq!(ulp_distance_f32(f32::MAX, f32::INFINITY), 1);
        assert_eq!(ulp_distance_f32(-1.0, f32::from_bits((-1f32).to_bits() + 2)), 2);
    }
}

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
//! Scalar helpers raising floating point exceptions and recording errors.
use crate::err::{MathError, report};
use std::hint::black_box;

#[cold]
pub(crate) fn oflow(sign: bool, func: &'static str) -> f64 {
    report(MathError::Overflow, func);
    // 0x1p769
    let x = black_box(f64::from_bits(0x7000000000000000));
    (if sign { -x } else { x }) * x
}

#[cold]
pub(crate) fn uflow(sign: bool, func: &'static str) -> f64 {
    report(MathError::Underflow, func);
    // 0x1p-767
    let x = black_box(f64::from_bits(0x1000000000000000));
    (if sign { -x } else { x }) * x
}

#[cold]
pub(crate) fn divzero(sign: bool, func: &'static str) -> f64 {
    report(MathError::Pole, func);
    (if sign { -1.0 } else { 1.0 }) / black_box(0.0)
}

#[cold]
pub(crate) fn invalid(x: f64, func: &'static str) -> f64 {
    let x = black_box(x);
    let y = (x - x) / (x - x);
    if !x.is_nan() {
        report(MathError::Domain, func);
    }
    y
}

#[inline]
pub(crate) fn check_oflow(y: f64, func: &'static str) -> f64 {
    if y.is_infinite() {
        report(MathError::Overflow, func);
    }
    y
}

#[inline]
pub(crate) fn check_uflow(y: f64, func: &'static str) -> f64 {
    if y == 0.0 {
        report(MathError::Underflow, func);
    }
    y
}

#[cold]
pub(crate) fn oflowf(sign: bool, func: &'static str) -> f32 {
    report(MathError::Overflow, func);
    // 0x1p97
    let x = black_box(f32::from_bits(0x70000000));
    (if sign { -x } else { x }) * x
}

#[cold]
pub(crate) fn uflowf(sign: bool, func: &'static str) -> f32 {
    report(MathError::Underflow, func);
    // 0x1p-95
    let x = black_box(f32::from_bits(0x10000000));
    (if sign { -x } else { x }) * x
}

#[cold]
pub(crate) fn divzerof(sign: bool, func: &'static str) -> f32 {
    report(MathError::Pole, func);
    (if sign { -1.0f32 } else { 1.0 }) / black_box(0.0f32)
}

#[cold]
pub(crate) fn invalidf(x: f32, func: &'static str) -> f32 {
    let x = black_box(x);
    let y = (x - x) / (x - x);
    if !x.is_nan() {
        report(MathError::Domain, func);
    }
    y
}

#[inline]
pub(crate) fn check_oflowf(y: f32, func: &'static str) -> f32 {
    if y.is_infinite() {
        report(MathError::Overflow, func);
    }
    y
}

#[inline]
pub(crate) fn check_uflowf(y: f32, func: &'static str) -> f32 {
    if y == 0.0 {
        report(MathError::Underflow, func);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_values() {
        assert_eq!(oflow(false, "test"), f64::INFINITY);
        assert_eq!(oflow(true, "test"), f64::NEG_INFINITY);
        assert_eq!(uflow(false, "test"), 0.0);
        assert!(uflow(true, "test").is_sign_negative());
        assert_eq!(divzero(true, "test"), f64::NEG_INFINITY);
        assert!(invalid(-1.0, "test").is_nan());
        assert_eq!(oflowf(false, "test"), f32::INFINITY);
        assert_eq!(uflowf(false, "test"), 0.0);
        assert_eq!(divzerof(false, "test"), f32::INFINITY);
        assert!(invalidf(f32::INFINITY, "test").is_nan());
    }
}

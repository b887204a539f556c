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
use std::error::Error;
use std::fmt::Display;

/// Error classes signalled by the special-case handlers.
///
/// Kernels never return errors, they always produce a float. With the `errno`
/// feature the last error of the calling thread can be inspected afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MathError {
    /// Argument outside of the domain, the result is NaN
    Domain,
    /// Exact infinite result from a finite argument
    Pole,
    /// Finite result too large to be represented
    Overflow,
    /// Non zero result too small to be represented normally
    Underflow,
}

impl MathError {
    /// C `errno` value, `EDOM` or `ERANGE`
    pub const fn errno(self) -> i32 {
        match self {
            MathError::Domain => 33,
            MathError::Pole | MathError::Overflow | MathError::Underflow => 34,
        }
    }
}

impl Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::Domain => f.write_str("Argument is outside of the function domain"),
            MathError::Pole => f.write_str("Function has a pole at the argument"),
            MathError::Overflow => f.write_str("Result overflows"),
            MathError::Underflow => f.write_str("Result underflows"),
        }
    }
}

impl Error for MathError {}

#[cfg(feature = "errno")]
thread_local! {
    static LAST_ERROR: std::cell::Cell<Option<MathError>> = const { std::cell::Cell::new(None) };
}

/// Last error signalled on this thread
#[cfg(feature = "errno")]
pub fn last_error() -> Option<MathError> {
    LAST_ERROR.with(|e| e.get())
}

/// Returns and clears the last error signalled on this thread
#[cfg(feature = "errno")]
pub fn take_last_error() -> Option<MathError> {
    LAST_ERROR.with(|e| e.take())
}

#[cfg(feature = "errno")]
pub fn clear_last_error() {
    LAST_ERROR.with(|e| e.set(None));
}

#[inline]
pub(crate) fn report(kind: MathError, func: &'static str) {
    log::trace!("{func}: {kind}");
    #[cfg(feature = "errno")]
    LAST_ERROR.with(|e| e.set(Some(kind)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errno_values() {
        assert_eq!(MathError::Domain.errno(), 33);
        assert_eq!(MathError::Overflow.errno(), 34);
        assert!(!MathError::Pole.to_string().is_empty());
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_last_error_slot() {
        clear_last_error();
        report(MathError::Underflow, "test");
        assert_eq!(last_error(), Some(MathError::Underflow));
        assert_eq!(take_last_error(), Some(MathError::Underflow));
        assert_eq!(last_error(), None);
    }
}

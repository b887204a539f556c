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
//! Lane abstraction shared by every kernel.
//!
//! Kernels are written once against [SimdFloat] and [SimdBits] and are
//! instantiated for plain scalars (one lane), for the 128-bit register types
//! and for [Pair] of any of those.
#[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
mod neon;
mod pair;
#[cfg(not(all(target_arch = "aarch64", target_feature = "neon", feature = "neon")))]
mod portable;
mod scalar;

use std::fmt::Debug;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

#[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
pub use neon::{F32x4, F64x2, U32x4, U64x2};
pub use pair::Pair;
#[cfg(not(all(target_arch = "aarch64", target_feature = "neon", feature = "neon")))]
pub use portable::{F32x4, F64x2, U32x4, U64x2};

/// Two 128-bit double registers processed together
pub type F64x4 = Pair<F64x2>;
/// Two 128-bit single registers processed together
pub type F32x8 = Pair<F32x4>;

/// Unsigned integer lanes, also used as lane masks.
///
/// Arithmetic wraps. Comparisons return all ones in a lane where the
/// predicate holds and zero elsewhere.
pub trait SimdBits:
    Copy
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    type Scalar: Copy + Debug + PartialEq;
    const LANES: usize;

    fn splat(v: Self::Scalar) -> Self;
    /// Logical shift left
    fn shl(self, n: u32) -> Self;
    /// Logical shift right
    fn shr(self, n: u32) -> Self;
    /// Arithmetic shift right
    fn sra(self, n: u32) -> Self;
    fn cmp_eq(self, other: Self) -> Self;
    /// Unsigned `>`
    fn cmp_gt(self, other: Self) -> Self;
    /// Unsigned `>=`
    fn cmp_ge(self, other: Self) -> Self;
    /// Unsigned `<`
    fn cmp_lt(self, other: Self) -> Self;
    /// Signed `>=`
    fn cmp_ge_signed(self, other: Self) -> Self;
    /// Bitwise select: bits of `a` where `mask` is set, `b` elsewhere
    fn select(mask: Self, a: Self, b: Self) -> Self;
    /// True if any lane is non zero
    fn any(self) -> bool;
    fn lane(self, i: usize) -> Self::Scalar;
    fn lane_set(self, i: usize) -> bool;
    /// Replaces every lane `i` with `f(i)`, used for table lookups
    fn lookup<F: Fn(usize) -> Self::Scalar>(self, f: F) -> Self;
}

/// Floating point lanes.
pub trait SimdFloat:
    Copy
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    type Scalar: Copy + Debug + PartialOrd + Default;
    type UInt: Copy + Debug + PartialEq;
    type Bits: SimdBits<Scalar = Self::UInt>;
    const LANES: usize;

    fn splat(v: Self::Scalar) -> Self;
    /// Bit-exact reinterpretation, NaN payloads are kept
    fn as_bits(self) -> Self::Bits;
    /// Bit-exact reinterpretation, NaN payloads are kept
    fn from_raw(bits: Self::Bits) -> Self;
    /// `self + a * b` with a single rounding
    fn fma(self, a: Self, b: Self) -> Self;
    /// `self - a * b` with a single rounding
    fn fms(self, a: Self, b: Self) -> Self;
    fn abs(self) -> Self;
    /// Round to nearest, ties away from zero
    fn round_away(self) -> Self;
    /// Round to nearest, ties to even
    fn round_even(self) -> Self;
    fn trunc(self) -> Self;
    /// Correctly rounded square root
    fn sqrt(self) -> Self;
    fn cmp_lt(self, other: Self) -> Self::Bits;
    fn cmp_le(self, other: Self) -> Self::Bits;
    fn cmp_gt(self, other: Self) -> Self::Bits;
    fn cmp_ge(self, other: Self) -> Self::Bits;
    fn cmp_eq(self, other: Self) -> Self::Bits;
    /// `|self| > |other|`
    fn abs_gt(self, other: Self) -> Self::Bits;
    /// `|self| >= |other|`
    fn abs_ge(self, other: Self) -> Self::Bits;
    fn select(mask: Self::Bits, a: Self, b: Self) -> Self;
    /// Converts to signed integers rounding toward zero, saturating, NaN gives 0
    fn cvt_to_int(self) -> Self::Bits;
    /// Converts to signed integers rounding to nearest, ties away from zero
    fn cvt_round_to_int(self) -> Self::Bits;
    /// Converts lanes holding signed integers
    fn cvt_from_int(bits: Self::Bits) -> Self;
    fn extract(self, i: usize) -> Self::Scalar;
    fn replace(self, i: usize, v: Self::Scalar) -> Self;
    /// Loads the first `LANES` values.
    ///
    /// # Panics
    ///
    /// Panics if `src` is shorter than `LANES`.
    fn load(src: &[Self::Scalar]) -> Self;
    /// Stores into the first `LANES` slots.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than `LANES`.
    fn store(self, dst: &mut [Self::Scalar]);
}

/// Double precision lanes
pub trait SimdF64: SimdFloat<Scalar = f64, UInt = u64> {}

impl<V: SimdFloat<Scalar = f64, UInt = u64>> SimdF64 for V {}

/// Single precision lanes with a double precision view of the same lanes
pub trait SimdF32: SimdFloat<Scalar = f32, UInt = u32> {
    type Wide: SimdF64;

    fn widen(self) -> Self::Wide;
    fn narrow(wide: Self::Wide) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_round_trip() {
        let patterns = [
            0u64,
            0x8000000000000000,
            0x7ff0000000000001,
            0xfff8000000000abc,
            0x7ff4000000000000,
            0x0000000000000001,
            0x3ff0000000000000,
        ];
        for p in patterns {
            let v = F64x2::from_raw(<F64x2 as SimdFloat>::Bits::splat(p));
            let back = v.as_bits();
            assert!(back.lane(0) == p && back.lane(1) == p, "Invalid result {:?}", back);
        }
        let patterns32 = [0u32, 0x80000000, 0x7f800001, 0xffc00123, 0x00000001];
        for p in patterns32 {
            let v = F32x4::from_raw(<F32x4 as SimdFloat>::Bits::splat(p));
            let back = v.as_bits();
            for i in 0..4 {
                assert!(back.lane(i) == p, "Invalid result {:?}", back);
            }
        }
    }

    #[test]
    fn test_lane_ops() {
        let a = F64x2::from_array([1.5, -2.5]);
        let b = F64x2::from_array([0.5, 4.0]);
        let c = a.fma(a, b).to_array();
        assert!(c == [2.25, -12.5], "Invalid result {:?}", c);
        let r = a.round_away().to_array();
        assert!(r == [2.0, -3.0], "Invalid result {:?}", r);
        let e = a.round_even().to_array();
        assert!(e == [2.0, -2.0], "Invalid result {:?}", e);
        let m = a.cmp_gt(b);
        assert!(m.lane_set(0) && !m.lane_set(1), "Invalid result {:?}", m);
        assert!(m.any(), "Invalid result {:?}", m);
        let s = F64x2::select(m, a, b).to_array();
        assert!(s == [1.5, 4.0], "Invalid result {:?}", s);
        let k = a.cvt_round_to_int();
        assert!(k.lane(0) == 2 && k.lane(1) == (-3i64) as u64, "Invalid result {:?}", k);
        let back = F64x2::cvt_from_int(k).to_array();
        assert!(back == [2.0, -3.0], "Invalid result {:?}", back);
        let q = F64x2::from_array([2.25, -1.0]).sqrt().to_array();
        assert!(q[0] == 1.5 && q[1].is_nan(), "Invalid result {:?}", q);
        let q = F32x4::from_array([4.0, 0.0, -0.0, f32::INFINITY]).sqrt().to_array();
        assert!(
            q[0] == 2.0 && q[1].to_bits() == 0 && q[2].to_bits() == 0x80000000 && q[3].is_infinite(),
            "Invalid result {:?}",
            q
        );
    }

    #[test]
    fn test_shifts_and_compares() {
        type B = <F32x4 as SimdFloat>::Bits;
        let v = B::splat(0x80000010);
        assert!(v.shr(4).lane(0) == 0x08000001, "Invalid result {:?}", v.shr(4));
        assert!(v.sra(4).lane(0) == 0xf8000001, "Invalid result {:?}", v.sra(4));
        assert!(v.shl(4).lane(0) == 0x00000100, "Invalid result {:?}", v.shl(4));
        let small = B::splat(5);
        assert!(v.cmp_gt(small).lane_set(2), "Invalid result {:?}", v.cmp_gt(small));
        assert!(!v.cmp_ge_signed(small).lane_set(2), "Invalid result {:?}", v);
        let w = F32x4::from_array([1.0, 2.0, 3.0, 4.0]);
        let idx = B::splat(0);
        let g = idx.lookup(|i| [7u32, 8u32][i + 1]);
        assert!(g.lane(3) == 8, "Invalid result {:?}", g);
        let widened = w.widen();
        let mut out = [0f64; 4];
        widened.store(&mut out);
        assert!(out == [1.0, 2.0, 3.0, 4.0], "Invalid result {:?}", out);
        assert!(F32x4::narrow(widened).to_array() == w.to_array(), "Invalid result {:?}", w);
    }

    #[test]
    fn test_pair_lanes() {
        let src = [1.0f64, 2.0, 3.0, 4.0];
        let v = F64x4::load(&src);
        let v = v.replace(2, -7.0);
        assert!(v.extract(2) == -7.0, "Invalid result {:?}", v);
        let mut dst = [0f64; 4];
        (v * v).store(&mut dst);
        assert!(dst == [1.0, 4.0, 49.0, 16.0], "Invalid result {:?}", dst);
        assert!(F64x4::LANES == 4 && F32x8::LANES == 8, "Invalid lanes");
    }
}

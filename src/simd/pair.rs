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
use crate::simd::{SimdBits, SimdF32, SimdFloat};
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

/// Two vectors processed as one with twice the lanes.
///
/// Lanes of `.0` come first.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Pair<V>(pub V, pub V);

macro_rules! pair_binary {
    ($trait:ident, $method:ident) => {
        impl<V: $trait<Output = V>> $trait for Pair<V> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Pair(self.0.$method(rhs.0), self.1.$method(rhs.1))
            }
        }
    };
}

pair_binary!(Add, add);
pair_binary!(Sub, sub);
pair_binary!(Mul, mul);
pair_binary!(Div, div);
pair_binary!(BitAnd, bitand);
pair_binary!(BitOr, bitor);
pair_binary!(BitXor, bitxor);

impl<V: Neg<Output = V>> Neg for Pair<V> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Pair(-self.0, -self.1)
    }
}

impl<V: Not<Output = V>> Not for Pair<V> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Pair(!self.0, !self.1)
    }
}

impl<B: SimdBits> SimdBits for Pair<B> {
    type Scalar = B::Scalar;
    const LANES: usize = B::LANES * 2;

    #[inline(always)]
    fn splat(v: B::Scalar) -> Self {
        Pair(B::splat(v), B::splat(v))
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        Pair(self.0.shl(n), self.1.shl(n))
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        Pair(self.0.shr(n), self.1.shr(n))
    }

    #[inline(always)]
    fn sra(self, n: u32) -> Self {
        Pair(self.0.sra(n), self.1.sra(n))
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> Self {
        Pair(self.0.cmp_eq(other.0), self.1.cmp_eq(other.1))
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> Self {
        Pair(self.0.cmp_gt(other.0), self.1.cmp_gt(other.1))
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> Self {
        Pair(self.0.cmp_ge(other.0), self.1.cmp_ge(other.1))
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> Self {
        Pair(self.0.cmp_lt(other.0), self.1.cmp_lt(other.1))
    }

    #[inline(always)]
    fn cmp_ge_signed(self, other: Self) -> Self {
        Pair(
            self.0.cmp_ge_signed(other.0),
            self.1.cmp_ge_signed(other.1),
        )
    }

    #[inline(always)]
    fn select(mask: Self, a: Self, b: Self) -> Self {
        Pair(B::select(mask.0, a.0, b.0), B::select(mask.1, a.1, b.1))
    }

    #[inline(always)]
    fn any(self) -> bool {
        (self.0 | self.1).any()
    }

    #[inline(always)]
    fn lane(self, i: usize) -> B::Scalar {
        if i < B::LANES {
            self.0.lane(i)
        } else {
            self.1.lane(i - B::LANES)
        }
    }

    #[inline(always)]
    fn lane_set(self, i: usize) -> bool {
        if i < B::LANES {
            self.0.lane_set(i)
        } else {
            self.1.lane_set(i - B::LANES)
        }
    }

    #[inline(always)]
    fn lookup<F: Fn(usize) -> B::Scalar>(self, f: F) -> Self {
        Pair(self.0.lookup(&f), self.1.lookup(&f))
    }
}

impl<V: SimdFloat> SimdFloat for Pair<V> {
    type Scalar = V::Scalar;
    type UInt = V::UInt;
    type Bits = Pair<V::Bits>;
    const LANES: usize = V::LANES * 2;

    #[inline(always)]
    fn splat(v: V::Scalar) -> Self {
        Pair(V::splat(v), V::splat(v))
    }

    #[inline(always)]
    fn as_bits(self) -> Pair<V::Bits> {
        Pair(self.0.as_bits(), self.1.as_bits())
    }

    #[inline(always)]
    fn from_raw(bits: Pair<V::Bits>) -> Self {
        Pair(V::from_raw(bits.0), V::from_raw(bits.1))
    }

    #[inline(always)]
    fn fma(self, a: Self, b: Self) -> Self {
        Pair(self.0.fma(a.0, b.0), self.1.fma(a.1, b.1))
    }

    #[inline(always)]
    fn fms(self, a: Self, b: Self) -> Self {
        Pair(self.0.fms(a.0, b.0), self.1.fms(a.1, b.1))
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Pair(self.0.abs(), self.1.abs())
    }

    #[inline(always)]
    fn round_away(self) -> Self {
        Pair(self.0.round_away(), self.1.round_away())
    }

    #[inline(always)]
    fn round_even(self) -> Self {
        Pair(self.0.round_even(), self.1.round_even())
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        Pair(self.0.trunc(), self.1.trunc())
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Pair(self.0.sqrt(), self.1.sqrt())
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> Pair<V::Bits> {
        Pair(self.0.cmp_lt(other.0), self.1.cmp_lt(other.1))
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> Pair<V::Bits> {
        Pair(self.0.cmp_le(other.0), self.1.cmp_le(other.1))
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> Pair<V::Bits> {
        Pair(self.0.cmp_gt(other.0), self.1.cmp_gt(other.1))
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> Pair<V::Bits> {
        Pair(self.0.cmp_ge(other.0), self.1.cmp_ge(other.1))
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> Pair<V::Bits> {
        Pair(self.0.cmp_eq(other.0), self.1.cmp_eq(other.1))
    }

    #[inline(always)]
    fn abs_gt(self, other: Self) -> Pair<V::Bits> {
        Pair(self.0.abs_gt(other.0), self.1.abs_gt(other.1))
    }

    #[inline(always)]
    fn abs_ge(self, other: Self) -> Pair<V::Bits> {
        Pair(self.0.abs_ge(other.0), self.1.abs_ge(other.1))
    }

    #[inline(always)]
    fn select(mask: Pair<V::Bits>, a: Self, b: Self) -> Self {
        Pair(V::select(mask.0, a.0, b.0), V::select(mask.1, a.1, b.1))
    }

    #[inline(always)]
    fn cvt_to_int(self) -> Pair<V::Bits> {
        Pair(self.0.cvt_to_int(), self.1.cvt_to_int())
    }

    #[inline(always)]
    fn cvt_round_to_int(self) -> Pair<V::Bits> {
        Pair(self.0.cvt_round_to_int(), self.1.cvt_round_to_int())
    }

    #[inline(always)]
    fn cvt_from_int(bits: Pair<V::Bits>) -> Self {
        Pair(V::cvt_from_int(bits.0), V::cvt_from_int(bits.1))
    }

    #[inline(always)]
    fn extract(self, i: usize) -> V::Scalar {
        if i < V::LANES {
            self.0.extract(i)
        } else {
            self.1.extract(i - V::LANES)
        }
    }

    #[inline(always)]
    fn replace(self, i: usize, v: V::Scalar) -> Self {
        if i < V::LANES {
            Pair(self.0.replace(i, v), self.1)
        } else {
            Pair(self.0, self.1.replace(i - V::LANES, v))
        }
    }

    #[inline(always)]
    fn load(src: &[V::Scalar]) -> Self {
        Pair(V::load(src), V::load(&src[V::LANES..]))
    }

    #[inline(always)]
    fn store(self, dst: &mut [V::Scalar]) {
        self.0.store(dst);
        self.1.store(&mut dst[V::LANES..]);
    }
}

impl<V: SimdF32> SimdF32 for Pair<V> {
    type Wide = Pair<V::Wide>;

    #[inline(always)]
    fn widen(self) -> Pair<V::Wide> {
        Pair(self.0.widen(), self.1.widen())
    }

    #[inline(always)]
    fn narrow(wide: Pair<V::Wide>) -> Self {
        Pair(V::narrow(wide.0), V::narrow(wide.1))
    }
}

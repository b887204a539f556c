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
use crate::mlaf::mlaf;
use crate::simd::{SimdBits, SimdF32, SimdFloat};
use std::num::Wrapping;

macro_rules! impl_scalar_bits {
    ($u:ty, $i:ty) => {
        impl SimdBits for Wrapping<$u> {
            type Scalar = $u;
            const LANES: usize = 1;

            #[inline(always)]
            fn splat(v: $u) -> Self {
                Wrapping(v)
            }

            #[inline(always)]
            fn shl(self, n: u32) -> Self {
                Wrapping(self.0 << n)
            }

            #[inline(always)]
            fn shr(self, n: u32) -> Self {
                Wrapping(self.0 >> n)
            }

            #[inline(always)]
            fn sra(self, n: u32) -> Self {
                Wrapping(((self.0 as $i) >> n) as $u)
            }

            #[inline(always)]
            fn cmp_eq(self, other: Self) -> Self {
                mask(self.0 == other.0)
            }

            #[inline(always)]
            fn cmp_gt(self, other: Self) -> Self {
                mask(self.0 > other.0)
            }

            #[inline(always)]
            fn cmp_ge(self, other: Self) -> Self {
                mask(self.0 >= other.0)
            }

            #[inline(always)]
            fn cmp_lt(self, other: Self) -> Self {
                mask(self.0 < other.0)
            }

            #[inline(always)]
            fn cmp_ge_signed(self, other: Self) -> Self {
                mask(self.0 as $i >= other.0 as $i)
            }

            #[inline(always)]
            fn select(mask: Self, a: Self, b: Self) -> Self {
                (mask & a) | (!mask & b)
            }

            #[inline(always)]
            fn any(self) -> bool {
                self.0 != 0
            }

            #[inline(always)]
            fn lane(self, _: usize) -> $u {
                self.0
            }

            #[inline(always)]
            fn lane_set(self, _: usize) -> bool {
                self.0 != 0
            }

            #[inline(always)]
            fn lookup<F: Fn(usize) -> $u>(self, f: F) -> Self {
                Wrapping(f(self.0 as usize))
            }
        }
    };
}

#[inline(always)]
fn mask<T: num_traits::PrimInt>(p: bool) -> Wrapping<T> {
    if p { Wrapping(!T::zero()) } else { Wrapping(T::zero()) }
}

impl_scalar_bits!(u64, i64);
impl_scalar_bits!(u32, i32);

macro_rules! impl_scalar_float {
    ($f:ty, $u:ty, $i:ty) => {
        impl SimdFloat for $f {
            type Scalar = $f;
            type UInt = $u;
            type Bits = Wrapping<$u>;
            const LANES: usize = 1;

            #[inline(always)]
            fn splat(v: $f) -> Self {
                v
            }

            #[inline(always)]
            fn as_bits(self) -> Wrapping<$u> {
                Wrapping(self.to_bits())
            }

            #[inline(always)]
            fn from_raw(bits: Wrapping<$u>) -> Self {
                <$f>::from_bits(bits.0)
            }

            #[inline(always)]
            fn fma(self, a: Self, b: Self) -> Self {
                mlaf(self, a, b)
            }

            #[inline(always)]
            fn fms(self, a: Self, b: Self) -> Self {
                mlaf(self, -a, b)
            }

            #[inline(always)]
            fn abs(self) -> Self {
                <$f>::abs(self)
            }

            #[inline(always)]
            fn round_away(self) -> Self {
                <$f>::round(self)
            }

            #[inline(always)]
            fn round_even(self) -> Self {
                <$f>::round_ties_even(self)
            }

            #[inline(always)]
            fn trunc(self) -> Self {
                <$f>::trunc(self)
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                <$f>::sqrt(self)
            }

            #[inline(always)]
            fn cmp_lt(self, other: Self) -> Wrapping<$u> {
                mask(self < other)
            }

            #[inline(always)]
            fn cmp_le(self, other: Self) -> Wrapping<$u> {
                mask(self <= other)
            }

            #[inline(always)]
            fn cmp_gt(self, other: Self) -> Wrapping<$u> {
                mask(self > other)
            }

            #[inline(always)]
            fn cmp_ge(self, other: Self) -> Wrapping<$u> {
                mask(self >= other)
            }

            #[inline(always)]
            fn cmp_eq(self, other: Self) -> Wrapping<$u> {
                mask(self == other)
            }

            #[inline(always)]
            fn abs_gt(self, other: Self) -> Wrapping<$u> {
                mask(<$f>::abs(self) > <$f>::abs(other))
            }

            #[inline(always)]
            fn abs_ge(self, other: Self) -> Wrapping<$u> {
                mask(<$f>::abs(self) >= <$f>::abs(other))
            }

            #[inline(always)]
            fn select(mask: Wrapping<$u>, a: Self, b: Self) -> Self {
                if mask.0 != 0 { a } else { b }
            }

            #[inline(always)]
            fn cvt_to_int(self) -> Wrapping<$u> {
                Wrapping(self as $i as $u)
            }

            #[inline(always)]
            fn cvt_round_to_int(self) -> Wrapping<$u> {
                Wrapping(<$f>::round(self) as $i as $u)
            }

            #[inline(always)]
            fn cvt_from_int(bits: Wrapping<$u>) -> Self {
                bits.0 as $i as $f
            }

            #[inline(always)]
            fn extract(self, _: usize) -> $f {
                self
            }

            #[inline(always)]
            fn replace(self, _: usize, v: $f) -> Self {
                v
            }

            #[inline(always)]
            fn load(src: &[$f]) -> Self {
                src[0]
            }

            #[inline(always)]
            fn store(self, dst: &mut [$f]) {
                dst[0] = self;
            }
        }
    };
}

impl_scalar_float!(f64, u64, i64);
impl_scalar_float!(f32, u32, i32);

impl SimdF32 for f32 {
    type Wide = f64;

    #[inline(always)]
    fn widen(self) -> f64 {
        self as f64
    }

    #[inline(always)]
    fn narrow(wide: f64) -> Self {
        wide as f32
    }
}

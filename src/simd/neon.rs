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
#![allow(unused_unsafe)]
//! AArch64 NEON lane types.
use crate::simd::{Pair, SimdBits, SimdF32, SimdFloat};
use std::arch::aarch64::*;
use std::fmt::{Debug, Formatter};
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

/// Two double lanes in one NEON register
#[derive(Copy, Clone)]
pub struct F64x2(pub(crate) float64x2_t);

/// Four single lanes in one NEON register
#[derive(Copy, Clone)]
pub struct F32x4(pub(crate) float32x4_t);

/// Two 64-bit integer lanes in one NEON register
#[derive(Copy, Clone)]
pub struct U64x2(pub(crate) uint64x2_t);

/// Four 32-bit integer lanes in one NEON register
#[derive(Copy, Clone)]
pub struct U32x4(pub(crate) uint32x4_t);

macro_rules! neon_binary {
    ($ty:ident, $trait:ident, $method:ident, $intrinsic:ident) => {
        impl $trait for $ty {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                unsafe { $ty($intrinsic(self.0, rhs.0)) }
            }
        }
    };
}

neon_binary!(F64x2, Add, add, vaddq_f64);
neon_binary!(F64x2, Sub, sub, vsubq_f64);
neon_binary!(F64x2, Mul, mul, vmulq_f64);
neon_binary!(F64x2, Div, div, vdivq_f64);
neon_binary!(F32x4, Add, add, vaddq_f32);
neon_binary!(F32x4, Sub, sub, vsubq_f32);
neon_binary!(F32x4, Mul, mul, vmulq_f32);
neon_binary!(F32x4, Div, div, vdivq_f32);
neon_binary!(U64x2, Add, add, vaddq_u64);
neon_binary!(U64x2, Sub, sub, vsubq_u64);
neon_binary!(U64x2, BitAnd, bitand, vandq_u64);
neon_binary!(U64x2, BitOr, bitor, vorrq_u64);
neon_binary!(U64x2, BitXor, bitxor, veorq_u64);
neon_binary!(U32x4, Add, add, vaddq_u32);
neon_binary!(U32x4, Sub, sub, vsubq_u32);
neon_binary!(U32x4, BitAnd, bitand, vandq_u32);
neon_binary!(U32x4, BitOr, bitor, vorrq_u32);
neon_binary!(U32x4, BitXor, bitxor, veorq_u32);

impl Neg for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { F64x2(vnegq_f64(self.0)) }
    }
}

impl Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { F32x4(vnegq_f32(self.0)) }
    }
}

impl Not for U64x2 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        unsafe {
            U64x2(vreinterpretq_u64_u32(vmvnq_u32(vreinterpretq_u32_u64(
                self.0,
            ))))
        }
    }
}

impl Not for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        unsafe { U32x4(vmvnq_u32(self.0)) }
    }
}

impl F64x2 {
    #[inline(always)]
    pub fn from_array(v: [f64; 2]) -> Self {
        unsafe { F64x2(vld1q_f64(v.as_ptr())) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [f64; 2] {
        let mut v = [0f64; 2];
        unsafe { vst1q_f64(v.as_mut_ptr(), self.0) };
        v
    }
}

impl F32x4 {
    #[inline(always)]
    pub fn from_array(v: [f32; 4]) -> Self {
        unsafe { F32x4(vld1q_f32(v.as_ptr())) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        let mut v = [0f32; 4];
        unsafe { vst1q_f32(v.as_mut_ptr(), self.0) };
        v
    }
}

impl U64x2 {
    #[inline(always)]
    pub fn from_array(v: [u64; 2]) -> Self {
        unsafe { U64x2(vld1q_u64(v.as_ptr())) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [u64; 2] {
        let mut v = [0u64; 2];
        unsafe { vst1q_u64(v.as_mut_ptr(), self.0) };
        v
    }
}

impl U32x4 {
    #[inline(always)]
    pub fn from_array(v: [u32; 4]) -> Self {
        unsafe { U32x4(vld1q_u32(v.as_ptr())) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [u32; 4] {
        let mut v = [0u32; 4];
        unsafe { vst1q_u32(v.as_mut_ptr(), self.0) };
        v
    }
}

impl Debug for F64x2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("F64x2").field(&self.to_array()).finish()
    }
}

impl Debug for F32x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("F32x4").field(&self.to_array()).finish()
    }
}

impl Debug for U64x2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("U64x2").field(&self.to_array()).finish()
    }
}

impl Debug for U32x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("U32x4").field(&self.to_array()).finish()
    }
}

impl SimdBits for U64x2 {
    type Scalar = u64;
    const LANES: usize = 2;

    #[inline(always)]
    fn splat(v: u64) -> Self {
        unsafe { U64x2(vdupq_n_u64(v)) }
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        unsafe { U64x2(vshlq_u64(self.0, vdupq_n_s64(n as i64))) }
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        unsafe { U64x2(vshlq_u64(self.0, vdupq_n_s64(-(n as i64)))) }
    }

    #[inline(always)]
    fn sra(self, n: u32) -> Self {
        unsafe {
            U64x2(vreinterpretq_u64_s64(vshlq_s64(
                vreinterpretq_s64_u64(self.0),
                vdupq_n_s64(-(n as i64)),
            )))
        }
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> Self {
        unsafe { U64x2(vceqq_u64(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> Self {
        unsafe { U64x2(vcgtq_u64(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> Self {
        unsafe { U64x2(vcgeq_u64(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> Self {
        unsafe { U64x2(vcltq_u64(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_ge_signed(self, other: Self) -> Self {
        unsafe {
            U64x2(vcgeq_s64(
                vreinterpretq_s64_u64(self.0),
                vreinterpretq_s64_u64(other.0),
            ))
        }
    }

    #[inline(always)]
    fn select(mask: Self, a: Self, b: Self) -> Self {
        unsafe { U64x2(vbslq_u64(mask.0, a.0, b.0)) }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { vmaxvq_u32(vreinterpretq_u32_u64(self.0)) != 0 }
    }

    #[inline(always)]
    fn lane(self, i: usize) -> u64 {
        self.to_array()[i]
    }

    #[inline(always)]
    fn lane_set(self, i: usize) -> bool {
        self.to_array()[i] != 0
    }

    #[inline(always)]
    fn lookup<F: Fn(usize) -> u64>(self, f: F) -> Self {
        let [a, b] = self.to_array();
        U64x2::from_array([f(a as usize), f(b as usize)])
    }
}

impl SimdBits for U32x4 {
    type Scalar = u32;
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(v: u32) -> Self {
        unsafe { U32x4(vdupq_n_u32(v)) }
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        unsafe { U32x4(vshlq_u32(self.0, vdupq_n_s32(n as i32))) }
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        unsafe { U32x4(vshlq_u32(self.0, vdupq_n_s32(-(n as i32)))) }
    }

    #[inline(always)]
    fn sra(self, n: u32) -> Self {
        unsafe {
            U32x4(vreinterpretq_u32_s32(vshlq_s32(
                vreinterpretq_s32_u32(self.0),
                vdupq_n_s32(-(n as i32)),
            )))
        }
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> Self {
        unsafe { U32x4(vceqq_u32(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> Self {
        unsafe { U32x4(vcgtq_u32(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> Self {
        unsafe { U32x4(vcgeq_u32(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> Self {
        unsafe { U32x4(vcltq_u32(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_ge_signed(self, other: Self) -> Self {
        unsafe {
            U32x4(vcgeq_s32(
                vreinterpretq_s32_u32(self.0),
                vreinterpretq_s32_u32(other.0),
            ))
        }
    }

    #[inline(always)]
    fn select(mask: Self, a: Self, b: Self) -> Self {
        unsafe { U32x4(vbslq_u32(mask.0, a.0, b.0)) }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { vmaxvq_u32(self.0) != 0 }
    }

    #[inline(always)]
    fn lane(self, i: usize) -> u32 {
        self.to_array()[i]
    }

    #[inline(always)]
    fn lane_set(self, i: usize) -> bool {
        self.to_array()[i] != 0
    }

    #[inline(always)]
    fn lookup<F: Fn(usize) -> u32>(self, f: F) -> Self {
        let v = self.to_array();
        U32x4::from_array([
            f(v[0] as usize),
            f(v[1] as usize),
            f(v[2] as usize),
            f(v[3] as usize),
        ])
    }
}

impl SimdFloat for F64x2 {
    type Scalar = f64;
    type UInt = u64;
    type Bits = U64x2;
    const LANES: usize = 2;

    #[inline(always)]
    fn splat(v: f64) -> Self {
        unsafe { F64x2(vdupq_n_f64(v)) }
    }

    #[inline(always)]
    fn as_bits(self) -> U64x2 {
        unsafe { U64x2(vreinterpretq_u64_f64(self.0)) }
    }

    #[inline(always)]
    fn from_raw(bits: U64x2) -> Self {
        unsafe { F64x2(vreinterpretq_f64_u64(bits.0)) }
    }

    #[inline(always)]
    fn fma(self, a: Self, b: Self) -> Self {
        unsafe { F64x2(vfmaq_f64(self.0, a.0, b.0)) }
    }

    #[inline(always)]
    fn fms(self, a: Self, b: Self) -> Self {
        unsafe { F64x2(vfmsq_f64(self.0, a.0, b.0)) }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe { F64x2(vabsq_f64(self.0)) }
    }

    #[inline(always)]
    fn round_away(self) -> Self {
        unsafe { F64x2(vrndaq_f64(self.0)) }
    }

    #[inline(always)]
    fn round_even(self) -> Self {
        unsafe { F64x2(vrndnq_f64(self.0)) }
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        unsafe { F64x2(vrndq_f64(self.0)) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { F64x2(vsqrtq_f64(self.0)) }
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> U64x2 {
        unsafe { U64x2(vcltq_f64(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> U64x2 {
        unsafe { U64x2(vcleq_f64(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> U64x2 {
        unsafe { U64x2(vcgtq_f64(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> U64x2 {
        unsafe { U64x2(vcgeq_f64(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> U64x2 {
        unsafe { U64x2(vceqq_f64(self.0, other.0)) }
    }

    #[inline(always)]
    fn abs_gt(self, other: Self) -> U64x2 {
        unsafe { U64x2(vcagtq_f64(self.0, other.0)) }
    }

    #[inline(always)]
    fn abs_ge(self, other: Self) -> U64x2 {
        unsafe { U64x2(vcageq_f64(self.0, other.0)) }
    }

    #[inline(always)]
    fn select(mask: U64x2, a: Self, b: Self) -> Self {
        unsafe { F64x2(vbslq_f64(mask.0, a.0, b.0)) }
    }

    #[inline(always)]
    fn cvt_to_int(self) -> U64x2 {
        unsafe { U64x2(vreinterpretq_u64_s64(vcvtq_s64_f64(self.0))) }
    }

    #[inline(always)]
    fn cvt_round_to_int(self) -> U64x2 {
        unsafe { U64x2(vreinterpretq_u64_s64(vcvtaq_s64_f64(self.0))) }
    }

    #[inline(always)]
    fn cvt_from_int(bits: U64x2) -> Self {
        unsafe { F64x2(vcvtq_f64_s64(vreinterpretq_s64_u64(bits.0))) }
    }

    #[inline(always)]
    fn extract(self, i: usize) -> f64 {
        self.to_array()[i]
    }

    #[inline(always)]
    fn replace(self, i: usize, v: f64) -> Self {
        let mut a = self.to_array();
        a[i] = v;
        F64x2::from_array(a)
    }

    #[inline(always)]
    fn load(src: &[f64]) -> Self {
        let src = &src[..2];
        unsafe { F64x2(vld1q_f64(src.as_ptr())) }
    }

    #[inline(always)]
    fn store(self, dst: &mut [f64]) {
        let dst = &mut dst[..2];
        unsafe { vst1q_f64(dst.as_mut_ptr(), self.0) }
    }
}

impl SimdFloat for F32x4 {
    type Scalar = f32;
    type UInt = u32;
    type Bits = U32x4;
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(v: f32) -> Self {
        unsafe { F32x4(vdupq_n_f32(v)) }
    }

    #[inline(always)]
    fn as_bits(self) -> U32x4 {
        unsafe { U32x4(vreinterpretq_u32_f32(self.0)) }
    }

    #[inline(always)]
    fn from_raw(bits: U32x4) -> Self {
        unsafe { F32x4(vreinterpretq_f32_u32(bits.0)) }
    }

    #[inline(always)]
    fn fma(self, a: Self, b: Self) -> Self {
        unsafe { F32x4(vfmaq_f32(self.0, a.0, b.0)) }
    }

    #[inline(always)]
    fn fms(self, a: Self, b: Self) -> Self {
        unsafe { F32x4(vfmsq_f32(self.0, a.0, b.0)) }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe { F32x4(vabsq_f32(self.0)) }
    }

    #[inline(always)]
    fn round_away(self) -> Self {
        unsafe { F32x4(vrndaq_f32(self.0)) }
    }

    #[inline(always)]
    fn round_even(self) -> Self {
        unsafe { F32x4(vrndnq_f32(self.0)) }
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        unsafe { F32x4(vrndq_f32(self.0)) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { F32x4(vsqrtq_f32(self.0)) }
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> U32x4 {
        unsafe { U32x4(vcltq_f32(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> U32x4 {
        unsafe { U32x4(vcleq_f32(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> U32x4 {
        unsafe { U32x4(vcgtq_f32(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> U32x4 {
        unsafe { U32x4(vcgeq_f32(self.0, other.0)) }
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> U32x4 {
        unsafe { U32x4(vceqq_f32(self.0, other.0)) }
    }

    #[inline(always)]
    fn abs_gt(self, other: Self) -> U32x4 {
        unsafe { U32x4(vcagtq_f32(self.0, other.0)) }
    }

    #[inline(always)]
    fn abs_ge(self, other: Self) -> U32x4 {
        unsafe { U32x4(vcageq_f32(self.0, other.0)) }
    }

    #[inline(always)]
    fn select(mask: U32x4, a: Self, b: Self) -> Self {
        unsafe { F32x4(vbslq_f32(mask.0, a.0, b.0)) }
    }

    #[inline(always)]
    fn cvt_to_int(self) -> U32x4 {
        unsafe { U32x4(vreinterpretq_u32_s32(vcvtq_s32_f32(self.0))) }
    }

    #[inline(always)]
    fn cvt_round_to_int(self) -> U32x4 {
        unsafe { U32x4(vreinterpretq_u32_s32(vcvtaq_s32_f32(self.0))) }
    }

    #[inline(always)]
    fn cvt_from_int(bits: U32x4) -> Self {
        unsafe { F32x4(vcvtq_f32_s32(vreinterpretq_s32_u32(bits.0))) }
    }

    #[inline(always)]
    fn extract(self, i: usize) -> f32 {
        self.to_array()[i]
    }

    #[inline(always)]
    fn replace(self, i: usize, v: f32) -> Self {
        let mut a = self.to_array();
        a[i] = v;
        F32x4::from_array(a)
    }

    #[inline(always)]
    fn load(src: &[f32]) -> Self {
        let src = &src[..4];
        unsafe { F32x4(vld1q_f32(src.as_ptr())) }
    }

    #[inline(always)]
    fn store(self, dst: &mut [f32]) {
        let dst = &mut dst[..4];
        unsafe { vst1q_f32(dst.as_mut_ptr(), self.0) }
    }
}

impl SimdF32 for F32x4 {
    type Wide = Pair<F64x2>;

    #[inline(always)]
    fn widen(self) -> Pair<F64x2> {
        unsafe {
            Pair(
                F64x2(vcvt_f64_f32(vget_low_f32(self.0))),
                F64x2(vcvt_high_f64_f32(self.0)),
            )
        }
    }

    #[inline(always)]
    fn narrow(wide: Pair<F64x2>) -> Self {
        unsafe { F32x4(vcvt_high_f32_f64(vcvt_f32_f64(wide.0.0), wide.1.0)) }
    }
}

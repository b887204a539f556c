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
//! Lane types built from plain scalars, used where NEON is not available.
use crate::simd::Pair;
use std::num::Wrapping;

/// Two double lanes
pub type F64x2 = Pair<f64>;
/// Four single lanes
pub type F32x4 = Pair<Pair<f32>>;
/// Two 64-bit integer lanes
pub type U64x2 = Pair<Wrapping<u64>>;
/// Four 32-bit integer lanes
pub type U32x4 = Pair<Pair<Wrapping<u32>>>;

impl Pair<f64> {
    #[inline(always)]
    pub const fn from_array(v: [f64; 2]) -> Self {
        Pair(v[0], v[1])
    }

    #[inline(always)]
    pub const fn to_array(self) -> [f64; 2] {
        [self.0, self.1]
    }
}

impl Pair<Pair<f32>> {
    #[inline(always)]
    pub const fn from_array(v: [f32; 4]) -> Self {
        Pair(Pair(v[0], v[1]), Pair(v[2], v[3]))
    }

    #[inline(always)]
    pub const fn to_array(self) -> [f32; 4] {
        [self.0.0, self.0.1, self.1.0, self.1.1]
    }
}

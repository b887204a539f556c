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
//! Shared checks for the kernel tests.
use crate::simd::{F32x4, F32x8, F64x2, F64x4, SimdFloat};
use crate::{ulp_distance_f32, ulp_distance_f64};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Grid plus random points of `[lo, hi]`, tolerance in ULP.
pub(crate) fn assert_ulp_f64(
    f: impl Fn(f64) -> f64,
    reference: impl Fn(f64) -> f64,
    lo: f64,
    hi: f64,
    samples: usize,
    tolerance: u64,
) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let step = (hi - lo) / samples as f64;
    for i in 0..=samples {
        let grid = lo + step * i as f64;
        let random = rng.random_range(lo..=hi);
        for x in [grid, random] {
            let v = f(x);
            let want = reference(x);
            assert!(
                ulp_distance_f64(v, want) <= tolerance,
                "Invalid result {} for {} ({:e}), expected {}",
                v,
                x,
                x,
                want
            );
        }
    }
}

/// Single precision version of [assert_ulp_f64], the reference is evaluated
/// in double precision and rounded.
pub(crate) fn assert_ulp_f32(
    f: impl Fn(f32) -> f32,
    reference: impl Fn(f64) -> f64,
    lo: f32,
    hi: f32,
    samples: usize,
    tolerance: u32,
) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let step = (hi - lo) / samples as f32;
    for i in 0..=samples {
        let grid = (lo + step * i as f32).min(hi);
        let random = rng.random_range(lo..=hi);
        for x in [grid, random] {
            let v = f(x);
            let want = reference(x as f64) as f32;
            assert!(
                ulp_distance_f32(v, want) <= tolerance,
                "Invalid result {} for {} ({:e}), expected {}",
                v,
                x,
                x,
                want
            );
        }
    }
}

fn same_f64(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

fn same_f32(a: f32, b: f32) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

/// Every lane of every vector shape matches the scalar shape, inputs are
/// packed in rotating order so each value visits each lane.
pub(crate) fn assert_lanes_f64(
    scalar: impl Fn(f64) -> f64,
    x2: impl Fn(F64x2) -> F64x2,
    x4: impl Fn(F64x4) -> F64x4,
    inputs: &[f64],
) {
    let n = inputs.len();
    for start in 0..n {
        let v: [f64; 4] = std::array::from_fn(|i| inputs[(start + i) % n]);
        let r2 = x2(F64x2::load(&v));
        let r4 = x4(F64x4::load(&v));
        for i in 0..4 {
            let want = scalar(v[i]);
            if i < 2 {
                assert!(same_f64(r2.extract(i), want), "Invalid result {:?} for {:?}", r2, v);
            }
            assert!(same_f64(r4.extract(i), want), "Invalid result {:?} for {:?}", r4, v);
        }
    }
}

pub(crate) fn assert_lanes_f32(
    scalar: impl Fn(f32) -> f32,
    x4: impl Fn(F32x4) -> F32x4,
    x8: impl Fn(F32x8) -> F32x8,
    inputs: &[f32],
) {
    let n = inputs.len();
    for start in 0..n {
        let v: [f32; 8] = std::array::from_fn(|i| inputs[(start + i) % n]);
        let r4 = x4(F32x4::load(&v));
        let r8 = x8(F32x8::load(&v));
        for i in 0..8 {
            let want = scalar(v[i]);
            if i < 4 {
                assert!(same_f32(r4.extract(i), want), "Invalid result {:?} for {:?}", r4, v);
            }
            assert!(same_f32(r8.extract(i), want), "Invalid result {:?} for {:?}", r8, v);
        }
    }
}

/// Values just below and above `bound` on both signs
pub(crate) fn around_f64(bound: f64) -> [f64; 6] {
    let below = f64::from_bits(bound.to_bits() - 1);
    let above = f64::from_bits(bound.to_bits() + 1);
    [below, bound, above, -below, -bound, -above]
}

pub(crate) fn around_f32(bound: f32) -> [f32; 6] {
    let below = f32::from_bits(bound.to_bits() - 1);
    let above = f32::from_bits(bound.to_bits() + 1);
    [below, bound, above, -below, -bound, -above]
}

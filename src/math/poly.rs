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
//! Polynomial evaluation over any lane type.
//!
//! Coefficients are given as bit patterns, lowest degree first.
use crate::math::common::cst;
use crate::simd::SimdFloat;

/// `c[0] + x * (c[1] + x * (c[2] + ...))`
#[inline(always)]
pub(crate) fn horner<V: SimdFloat>(x: V, c: &[V::UInt]) -> V {
    let n = c.len();
    let mut p = cst::<V>(c[n - 1]);
    for &k in c[..n - 1].iter().rev() {
        p = cst::<V>(k).fma(x, p);
    }
    p
}

#[inline(always)]
fn pair<V: SimdFloat>(x: V, c: &[V::UInt], j: usize) -> V {
    let lo = cst::<V>(c[2 * j]);
    if 2 * j + 1 < c.len() {
        lo.fma(x, cst::<V>(c[2 * j + 1]))
    } else {
        lo
    }
}

/// Horner in `x2` over the pairs `c[2j] + x * c[2j + 1]`
#[inline(always)]
pub(crate) fn pairwise_horner<V: SimdFloat>(x: V, x2: V, c: &[V::UInt]) -> V {
    let last = (c.len() - 1) / 2;
    let mut p = pair(x, c, last);
    for j in (0..last).rev() {
        p = pair(x, c, j).fma(x2, p);
    }
    p
}

/// Estrin scheme, pairs are folded with `x2`, `x4`, `x8`, ...
#[inline(always)]
pub(crate) fn estrin<V: SimdFloat>(x: V, x2: V, c: &[V::UInt]) -> V {
    debug_assert!(c.len() <= 32);
    let mut t = [x; 16];
    let mut m = c.len().div_ceil(2);
    for (j, dst) in t.iter_mut().enumerate().take(m) {
        *dst = pair(x, c, j);
    }
    let mut xp = x2;
    while m > 1 {
        let mut k = 0;
        let mut j = 0;
        while j < m {
            t[k] = if j + 1 < m { t[j].fma(xp, t[j + 1]) } else { t[j] };
            k += 1;
            j += 2;
        }
        m = k;
        xp = xp * xp;
    }
    t[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: [u64; 7] = [
        0x3ff0000000000000, // 1
        0x4000000000000000, // 2
        0x4008000000000000, // 3
        0x4010000000000000, // 4
        0x4014000000000000, // 5
        0x4018000000000000, // 6
        0x401c000000000000, // 7
    ];

    fn reference(x: f64, n: usize) -> f64 {
        (0..n).rev().fold(0.0, |acc, i| acc * x + (i + 1) as f64)
    }

    #[test]
    fn test_schemes_agree() {
        for n in 1..=7 {
            for &x in &[0.0, 0.5, -0.25, 2.0] {
                let h = horner(x, &C[..n]);
                let p = pairwise_horner(x, x * x, &C[..n]);
                let e = estrin(x, x * x, &C[..n]);
                let r = reference(x, n);
                assert!(h == r, "Invalid result {}", h);
                assert!(p == r, "Invalid result {}", p);
                assert!(e == r, "Invalid result {}", e);
            }
        }
    }
}

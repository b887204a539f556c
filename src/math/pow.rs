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
use crate::math::common::{checkint, lane_fallback2, ubits, zeroinfnan};
use crate::math::exp::{
    EXP_SCALE_BOUND, EXP_SPECIAL_BOUND, INV_LN2_N, LN2_HI_N, LN2_LO_N, SHIFT, report_xflow,
};
use crate::math::log_data::POW_LOG_TABLE;
use crate::math::math_err::{divzero, invalid, oflow, uflow};
use crate::math::scale::{EXP_TAIL, special_scale, table_scale};
use crate::simd::{SimdBits, SimdF64};
use std::num::Wrapping;

/// `x = 2^k z` with `z` in `[Off, 2 Off)`
const OFF: u64 = 0x3fe6955500000000;
const TABLE_BITS: u32 = 7;
/// `ln(2)` with 11 trailing zero bits, so `k * LN2_HI` is exact
const LN2_HI: f64 = f64::from_bits(0x3fe62e42fefa3800);
const LN2_LO: f64 = f64::from_bits(0x3d2ef35793c76730);

/// Taylor terms of `log1p(r)` from `r^3`, rescaled by powers of `-r^2/2`
const A: [u64; 8] = [
    0xbfe5555555555555, // -2/3
    0x3fe0000000000000, // 1/2
    0x3fe999999999999a, // 4/5
    0xbfe5555555555555, // -2/3
    0xbff2492492492492, // -8/7
    0x3ff0000000000000, // 1
    0x3ffc71c71c71c71c, // 16/9
    0xbff999999999999a, // -8/5
];

/// `e^r - 1 - r` for `|r| <= ln2/256`
const C: [u64; 4] = [
    0x3fe0000000000000, // 1/2
    0x3fc5555555555555, // 1/6
    0x3fa5555555555555, // 1/24
    0x3f81111111111111, // 1/120
];

#[inline(always)]
fn a<V: SimdF64>(i: usize) -> V {
    V::splat(f64::from_bits(A[i]))
}

/// `log(x)` as `hi + lo` with about 68 correct bits, `ix` is a positive
/// normal bit pattern.
#[inline(always)]
fn pow_log<V: SimdF64>(ix: V::Bits) -> (V, V) {
    let tmp = ix - ubits::<V>(OFF);
    let i = tmp.shr(52 - TABLE_BITS) & ubits::<V>((1 << TABLE_BITS) - 1);
    let k = V::cvt_from_int(tmp.sra(52));
    let z = V::from_raw(ix - (tmp & ubits::<V>(0xfff0000000000000)));
    let invc = V::from_raw(i.lookup(|j| POW_LOG_TABLE[j].0));
    let logc = V::from_raw(i.lookup(|j| POW_LOG_TABLE[j].1));
    let logc_tail = V::from_raw(i.lookup(|j| POW_LOG_TABLE[j].2));

    // r = z invc - 1 = rhi + rlo, h - 1 is exact
    let h = z * invc;
    let l = (-h).fma(z, invc);
    let hm1 = h - V::splat(1.0);
    let rhi = hm1 + l;
    let rlo = (hm1 - rhi) + l;

    // k ln2 + log(c) + r
    let kl = k * V::splat(LN2_HI);
    let t1 = kl + logc;
    let e1 = (kl - t1) + logc;
    let t2 = t1 + rhi;
    let bb = t2 - t1;
    let lo2 = (t1 - (t2 - bb)) + (rhi - bb);
    let lo1 = logc_tail.fma(k, V::splat(LN2_LO));

    // -r^2/2 split exactly
    let ar = rhi * V::splat(-0.5);
    let ar2 = rhi * ar;
    let ar3 = rhi * ar2;
    let hi = t2 + ar2;
    let lo3 = (-ar2).fma(ar, rhi);
    let lo4 = (t2 - hi) + ar2;

    let q = a::<V>(6).fma(rhi, a::<V>(7));
    let q = a::<V>(4).fma(rhi, a::<V>(5)).fma(ar2, q);
    let q = a::<V>(2).fma(rhi, a::<V>(3)).fma(ar2, q);
    let q = a::<V>(0).fma(rhi, a::<V>(1)).fma(ar2, q);
    let p = ar3 * q;

    // log1p(rhi + rlo) ~ log1p(rhi) + rlo (1 - rhi)
    let lo = lo1 + lo2 + lo3 + lo4 + e1 + rlo.fms(rlo, rhi) + p;
    let y = hi + lo;
    (y, (hi - y) + lo)
}

/// `e^(x + xtail)`, lanes in `skip` are neither fixed up nor reported.
#[inline(always)]
fn pow_exp<V: SimdF64>(x: V, xtail: V, skip: V::Bits) -> V {
    let z = V::splat(SHIFT).fma(x, V::splat(INV_LN2_N));
    let u = z.as_bits();
    let n = z - V::splat(SHIFT);
    let r = x.fms(n, V::splat(LN2_HI_N)).fms(n, V::splat(LN2_LO_N)) + xtail;

    // 2^(n/128) ~ scale (1 + tail)
    let tail = V::from_raw((u & ubits::<V>(127)).lookup(|j| EXP_TAIL[j]));
    let r2 = r * r;
    let c = |i: usize| V::splat(f64::from_bits(C[i]));
    let p01 = c(0).fma(r, c(1));
    let p23 = c(2).fma(r, c(3));
    let tmp = (tail + r).fma(r2, p01).fma(r2 * r2, p23);

    let scale = table_scale::<V>(u);
    let y = scale.fma(scale, tmp);
    let special = x.abs_gt(V::splat(EXP_SPECIAL_BOUND)) & !skip;
    if special.any() {
        return exp_special_lanes(x, y, tmp, n, scale, special);
    }
    y
}

#[cold]
#[inline(never)]
fn exp_special_lanes<V: SimdF64>(x: V, y: V, tmp: V, n: V, scale: V, special: V::Bits) -> V {
    let s = special_scale(tmp, n, scale, EXP_SCALE_BOUND);
    let y = V::select(special, s, y);
    report_xflow(x, y, special, "pow");
    y
}

/// `x^y` for positive normal `x` (given by its bits) and moderate `y`.
#[inline(always)]
fn pow_core<V: SimdF64>(ix: V::Bits, y: V, skip: V::Bits) -> V {
    let (hi, lo) = pow_log::<V>(ix);
    // y log(x) as ehi + elo
    let ehi = y * hi;
    let elo = (-ehi).fma(y, hi).fma(y, lo);
    pow_exp(ehi, elo, skip)
}

/// Lanes with zero, subnormal, negative or non-finite `x`, or with `|y|`
/// outside `[2^-65, 2^63)` and non-finite `y`.
#[inline(always)]
fn pow_special_lanes<V: SimdF64>(x: V, y: V) -> V::Bits {
    let top_x = x.as_bits().shr(52);
    let top_y = y.as_bits().shr(52) & ubits::<V>(0x7ff);
    (top_x - ubits::<V>(1)).cmp_ge(ubits::<V>(0x7fe))
        | (top_y - ubits::<V>(0x3be)).cmp_ge(ubits::<V>(0x43e - 0x3be))
}

#[cold]
fn pow_special(x: f64, y: f64) -> f64 {
    let mut ix = x.to_bits();
    let iy = y.to_bits();
    let one = 1.0f64.to_bits();
    let inf = f64::INFINITY.to_bits();
    let top_y = (iy >> 52) & 0x7ff;
    if zeroinfnan(iy) {
        if iy << 1 == 0 {
            return 1.0;
        }
        if ix == one {
            return 1.0;
        }
        if (ix << 1) > (inf << 1) || (iy << 1) > (inf << 1) {
            // the sign of the NaN is not specified
            return x + y;
        }
        if (ix << 1) == (one << 1) {
            return 1.0;
        }
        if ((ix << 1) < (one << 1)) == (iy >> 63 == 0) {
            return 0.0;
        }
        return y * y;
    }
    let mut negate = false;
    if zeroinfnan(ix) {
        let mut x2 = x * x;
        if ix >> 63 != 0 && checkint(iy) == 1 {
            x2 = -x2;
            negate = true;
        }
        if iy >> 63 != 0 {
            if x2 == 0.0 {
                return divzero(negate, "pow");
            }
            return 1.0 / x2;
        }
        return x2;
    }
    if ix >> 63 != 0 {
        match checkint(iy) {
            0 => return invalid(x, "pow"),
            1 => negate = true,
            _ => {}
        }
        ix &= 0x7fffffffffffffff;
    }
    if top_y.wrapping_sub(0x3be) >= 0x43e - 0x3be {
        // y is even here
        if ix == one {
            return 1.0;
        }
        if top_y < 0x3be {
            // x^y ~ 1 + y log(x)
            return if ix > one { 1.0 + y } else { 1.0 - y };
        }
        return if (ix > one) == (iy >> 63 == 0) {
            oflow(false, "pow")
        } else {
            uflow(false, "pow")
        };
    }
    if ix >> 52 == 0 {
        // subnormal: x 2^52 is normal, the exponent is fixed up in the bits
        ix = (f64::from_bits(ix) * f64::from_bits(0x4330000000000000)).to_bits();
        ix = ix.wrapping_sub(52 << 52);
    }
    let r = pow_core::<f64>(Wrapping(ix), y, Wrapping(0));
    if negate { -r } else { r }
}

/// Computes `x^y` for every lane.
///
/// Max found ULP 1.05
#[inline]
pub fn pow_simd<V: SimdF64>(x: V, y: V) -> V {
    let special = pow_special_lanes(x, y);
    let r = pow_core::<V>(x.as_bits(), y, special);
    if special.any() {
        return lane_fallback2(x, y, r, special, pow_special);
    }
    r
}

/// Computes `x^y`
///
/// Max found ULP 1.05
#[inline]
pub fn pow(x: f64, y: f64) -> f64 {
    pow_simd(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{F64x2, F64x4, SimdFloat};
    use crate::ulp_distance_f64;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn same(a: f64, b: f64) -> bool {
        a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
    }

    #[test]
    fn test_pow_grid() {
        let xs = [
            1e-200, 1e-5, 0.1, 0.5, 0.9, 0.999, 1.0001, 1.5, 2.0, 3.7, 10.0, 123456.0, 1e100,
        ];
        let ys = [
            -300.0, -10.5, -3.0, -1.0, -0.5, 0.25, 0.5, 1.0, 2.0, 3.3, 7.0, 100.25,
        ];
        for &x in xs.iter() {
            for &y in ys.iter() {
                let v = pow(x, y);
                let want = x.powf(y);
                assert!(
                    ulp_distance_f64(v, want) <= 2,
                    "Invalid result {} for {}^{}, expected {}",
                    v,
                    x,
                    y,
                    want
                );
            }
        }
    }

    #[test]
    fn test_pow_random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..20000 {
            let x = rng.random_range(0.01..100.0);
            let y = rng.random_range(-50.0..50.0);
            let v = pow(x, y);
            let want = x.powf(y);
            assert!(
                ulp_distance_f64(v, want) <= 2,
                "Invalid result {} for {}^{}, expected {}",
                v,
                x,
                y,
                want
            );
        }
    }

    #[test]
    fn test_pow_identity() {
        for x in [0.001, 0.75, 1.0, 3.5, 1e10, 1e-100, 1e300] {
            let v = pow(x, 1.0);
            assert!(ulp_distance_f64(v, x) <= 1, "Invalid result {} for {}", v, x);
        }
    }

    #[test]
    fn test_pow_special() {
        assert_eq!(pow(f64::NAN, 0.0), 1.0);
        assert_eq!(pow(1.0, f64::NAN), 1.0);
        assert!(pow(f64::NAN, 1.0).is_nan());
        assert!(pow(2.0, f64::NAN).is_nan());
        assert!(ulp_distance_f64(pow(-2.0, 3.0), -8.0) <= 1);
        assert!(ulp_distance_f64(pow(-2.0, 2.0), 4.0) <= 1);
        assert!(pow(-2.0, 0.5).is_nan());
        assert_eq!(pow(0.0, -1.0), f64::INFINITY);
        assert_eq!(pow(-0.0, -1.0), f64::NEG_INFINITY);
        assert_eq!(pow(-0.0, -2.0), f64::INFINITY);
        assert_eq!(pow(-0.0, 3.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(pow(0.0, 2.0).to_bits(), 0);
        assert_eq!(pow(f64::INFINITY, -1.0).to_bits(), 0);
        assert_eq!(pow(f64::NEG_INFINITY, 3.0), f64::NEG_INFINITY);
        assert_eq!(pow(f64::NEG_INFINITY, 2.0), f64::INFINITY);
        assert_eq!(pow(0.5, f64::INFINITY), 0.0);
        assert_eq!(pow(2.0, f64::INFINITY), f64::INFINITY);
        assert_eq!(pow(2.0, f64::NEG_INFINITY), 0.0);
        assert_eq!(pow(-1.0, f64::INFINITY), 1.0);
        assert_eq!(pow(2.0, 1e300), f64::INFINITY);
        assert_eq!(pow(0.5, 1e300), 0.0);
        assert_eq!(pow(2.0, 1e-300), 1.0);
        assert_eq!(pow(2.0, 2000.0), f64::INFINITY);
        assert_eq!(pow(2.0, -2000.0), 0.0);
    }

    #[test]
    fn test_pow_extremes() {
        let tiny = f64::from_bits(1);
        for (x, y) in [
            (tiny, 0.5),
            (1e-310, -0.25),
            (2.0, 1023.5),
            (2.0, -1060.25),
            (10.0, 308.0),
            (0.1, 320.0),
        ] {
            let v = pow(x, y);
            let want = x.powf(y);
            assert!(
                ulp_distance_f64(v, want) <= 2,
                "Invalid result {} for {}^{}, expected {}",
                v,
                x,
                y,
                want
            );
        }
    }

    #[test]
    fn test_pow_lanes() {
        let pairs = [
            (2.0, 3.0),
            (-2.0, 3.0),
            (0.0, -1.0),
            (f64::NAN, 0.0),
            (1e-310, 0.5),
            (-2.0, 0.5),
            (3.0, 1e300),
            (0.7, -12.5),
        ];
        let n = pairs.len();
        for start in 0..n {
            let x: [f64; 4] = std::array::from_fn(|i| pairs[(start + i) % n].0);
            let y: [f64; 4] = std::array::from_fn(|i| pairs[(start + i) % n].1);
            let r2 = pow_simd(F64x2::load(&x), F64x2::load(&y));
            let r4 = pow_simd(F64x4::load(&x), F64x4::load(&y));
            for i in 0..4 {
                let want = pow(x[i], y[i]);
                if i < 2 {
                    assert!(same(r2.extract(i), want), "Invalid result {:?} for {:?}", r2, x);
                }
                assert!(same(r4.extract(i), want), "Invalid result {:?} for {:?}", r4, x);
            }
        }
    }

    #[cfg(feature = "errno")]
    #[test]
    fn test_pow_errno() {
        use crate::{MathError, clear_last_error, last_error, take_last_error};
        clear_last_error();
        assert_eq!(pow(2.0, 3.0), 8.0);
        assert_eq!(last_error(), None);
        assert_eq!(pow(0.0, -1.0), f64::INFINITY);
        assert_eq!(take_last_error(), Some(MathError::Pole));
        assert!(pow(-2.0, 0.5).is_nan());
        assert_eq!(take_last_error(), Some(MathError::Domain));
        assert_eq!(pow(10.0, 400.0), f64::INFINITY);
        assert_eq!(take_last_error(), Some(MathError::Overflow));
        assert_eq!(pow(10.0, -400.0), 0.0);
        assert_eq!(take_last_error(), Some(MathError::Underflow));
    }
}

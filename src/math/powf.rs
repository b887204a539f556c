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
use crate::math::common::{checkintf, lane_fallback2, ubits, zeroinfnanf, zeroinfnanf_lanes};
use crate::math::expf::report_xflowf;
use crate::math::math_err::{divzerof, invalidf};
use crate::simd::{SimdBits, SimdF32, SimdF64, SimdFloat};

/// `x = 2^k z` with `z` in `[Off, 2 Off)`
const OFF: u32 = 0x3f35d000;
const TABLE_BITS: u32 = 5;
/// Products `y log2(x)` are carried in units of `1/32`
const UFLOW_BOUND: f32 = -4800.0;
const OFLOW_BOUND: f32 = 4096.0;
/// `2^23`
const NORM: f32 = f32::from_bits(0x4b000000);
const SUBNORMAL_BIAS: u32 = 23 << 23;

/// `32 log2(1 + r)` for `|r| < 0x1.6p-6`
const LOG2_POLY: [u64; 4] = [
    0xc026ff5daa3b3d7c, // -0x1.6ff5daa3b3d7cp+3
    0x402ec81d03c01aeb, // 0x1.ec81d03c01aebp+3
    0xc0371547bb43f101, // -0x1.71547bb43f101p+4
    0x4047154764a815cb, // 0x1.7154764a815cbp+5
];

/// `2^(r/32) - 1` for `|r| <= 1/2`
const EXP2_POLY: [u64; 3] = [
    0x3ebc6af84b912394, // 0x1.c6af84b912394p-20
    0x3f2ebfce50fac4f3, // 0x1.ebfce50fac4f3p-13
    0x3f962e42ff0c52d6, // 0x1.62e42ff0c52d6p-6
];

/// `(1/c, 32 log2(c))` for 32 subintervals of `[Off, 2 Off)`
static LOG2_TABLE: [(u64, u64); 32] = [
    (0x3ff6489890582816, 0xc02e960f97b22702),
    (0x3ff5cf19b35e3472, 0xc02c993406cd4db6),
    (0x3ff55aac0e956d65, 0xc02aa711d9a7d0f3),
    (0x3ff4eb0022977e01, 0xc028bf37bacdce9b),
    (0x3ff47fcccda1dd1f, 0xc026e13b3519946e),
    (0x3ff418ceabab68c1, 0xc0250cb8281e4089),
    (0x3ff3b5c788f1edb3, 0xc02341504a237e2b),
    (0x3ff3567de48e9c9a, 0xc0217eaab624ffbb),
    (0x3ff2fabc80fd19ba, 0xc01f88e708f8c853),
    (0x3ff2a25200ce536b, 0xc01c24b6da113914),
    (0x3ff24d108e0152e3, 0xc018d02ee397cb1d),
    (0x3ff1facd8ab2fbe1, 0xc0158ac1223408b3),
    (0x3ff1ab614a03efdf, 0xc01253e6fd190e89),
    (0x3ff15ea6d03af9ff, 0xc00e5641882c12ff),
    (0x3ff1147b994bb776, 0xc0081fea712926f7),
    (0x3ff0ccbf650593aa, 0xc00203e240de64a3),
    (0x3ff0875408477302, 0xbff8029b86a78281),
    (0x3ff0441d42a93328, 0xbfe85d713190fb90),
    (0x3ff0000000000000, 0x0000000000000000),
    (0x3fef1d006c855e86, 0x3ff4c1cc07312997),
    (0x3fee28c3341aa301, 0x4005e1848ccec948),
    (0x3fed4bdf9aa64747, 0x40104cfcb7f1196f),
    (0x3fec7b45a24e5803, 0x401582813d463c21),
    (0x3febb5f5eb2ed60a, 0x401a936fa68760cc),
    (0x3feafb0bff8fe6b4, 0x401f81bc31d6cc4e),
    (0x3fea49badf7ab1f5, 0x4022279a09fae6b1),
    (0x3fe9a14a111fc4c9, 0x40247ec0b6df5526),
    (0x3fe901131f5b2fdc, 0x4026c71762280f10),
    (0x3fe8687f73f6d865, 0x40290155070798da),
    (0x3fe7d7067eb77986, 0x402b2e23b1d3068c),
    (0x3fe74c2c1cf97b65, 0x402d4e21b0daa86a),
    (0x3fe6c77f37cff2a1, 0x402f61e2a2f67f3f),
];

/// `asuint64(2^(i/32)) - (i << 47)`
static EXP2_TABLE: [u64; 32] = [
    0x3ff0000000000000, 0x3fefd9b0d3158574, 0x3fefb5586cf9890f, 0x3fef9301d0125b51,
    0x3fef72b83c7d517b, 0x3fef54873168b9aa, 0x3fef387a6e756238, 0x3fef1e9df51fdee1,
    0x3fef06fe0a31b715, 0x3feef1a7373aa9cb, 0x3feedea64c123422, 0x3feece086061892d,
    0x3feebfdad5362a27, 0x3feeb42b569d4f82, 0x3feeab07dd485429, 0x3feea47eb03a5585,
    0x3feea09e667f3bcd, 0x3fee9f75e8ec5f74, 0x3feea11473eb0187, 0x3feea589994cce13,
    0x3feeace5422aa0db, 0x3feeb737b0cdc5e5, 0x3feec49182a3f090, 0x3feed503b23e255d,
    0x3feee89f995ad3ad, 0x3feeff76f2fb5e47, 0x3fef199bdd85529c, 0x3fef3720dcef9069,
    0x3fef5818dcfba487, 0x3fef7c97337b9b5f, 0x3fefa4afa2a490da, 0x3fefd0765b6e4540,
];

#[inline(always)]
fn wide<W: SimdF64>(bits: u64) -> W {
    W::splat(f64::from_bits(bits))
}

/// `32 log2(z invc) + logc + k` times `y`, all in double precision
#[inline(always)]
fn ylogx_wide<W: SimdF64>(z: W, k: W, i: W::Bits, y: W) -> W {
    let invc = W::from_raw(i.lookup(|j| LOG2_TABLE[j].0));
    let logc = W::from_raw(i.lookup(|j| LOG2_TABLE[j].1));
    let r = W::splat(-1.0).fma(z, invc);
    let y0 = logc + k;
    let p = wide::<W>(LOG2_POLY[1]).fma(r, wide(LOG2_POLY[0]));
    let p = wide::<W>(LOG2_POLY[2]).fma(p, r);
    let p = wide::<W>(LOG2_POLY[3]).fma(p, r);
    y0.fma(p, r) * y
}

/// `32 y log2(x)`, `ix` is a positive normal bit pattern.
#[inline(always)]
fn ylogx<V: SimdF32>(ix: V::Bits, y: V) -> V::Wide {
    let tmp = ix - ubits::<V>(OFF);
    let i = tmp.shr(23 - TABLE_BITS) & ubits::<V>((1 << TABLE_BITS) - 1);
    let top = tmp & ubits::<V>(0xff800000);
    let z = V::from_raw(ix - top).widen();
    // 32 k, exact in single precision
    let k = V::cvt_from_int(top.sra(23 - TABLE_BITS)).widen();
    let i = V::cvt_from_int(i).widen().cvt_to_int();
    ylogx_wide(z, k, i, y.widen())
}

/// `2^(v/32)` in double precision
#[inline(always)]
fn exp2_wide<W: SimdF64>(v: W) -> W {
    let kd = v.round_even();
    let ki = kd.cvt_to_int();
    let r = v - kd;
    let t = (ki & ubits::<W>(31)).lookup(|j| EXP2_TABLE[j]) + ki.shl(52 - TABLE_BITS);
    let s = W::from_raw(t);
    let p = wide::<W>(EXP2_POLY[1]).fma(r, wide(EXP2_POLY[0]));
    let p = wide::<W>(EXP2_POLY[2]).fma(r, p);
    s.fma(p, s * r)
}

/// `|x|^y` with saturation, `ix` is the bit pattern of a positive normal
#[inline(always)]
fn powf_core<V: SimdF32>(ix: V::Bits, y: V) -> V {
    let l = ylogx::<V>(ix, y);
    let ret = V::narrow(exp2_wide(l));
    let l = V::narrow(l);
    let ret = V::select(l.cmp_le(V::splat(UFLOW_BOUND)), V::splat(0.0), ret);
    V::select(l.cmp_gt(V::splat(OFLOW_BOUND)), V::splat(f32::INFINITY), ret)
}

/// Zero, infinite or NaN operands, and negative `x` with non-integer `y`.
#[cold]
fn powf_special(x: f32, y: f32) -> f32 {
    let ix = x.to_bits();
    let iy = y.to_bits();
    let one = 1.0f32.to_bits();
    let inf = f32::INFINITY.to_bits();
    if zeroinfnanf(iy) {
        if iy << 1 == 0 {
            return 1.0;
        }
        if ix == one {
            return 1.0;
        }
        if (ix << 1) > (inf << 1) || (iy << 1) > (inf << 1) {
            return x + y;
        }
        if (ix << 1) == (one << 1) {
            return 1.0;
        }
        if ((ix << 1) < (one << 1)) == (iy >> 31 == 0) {
            return 0.0;
        }
        return y * y;
    }
    if zeroinfnanf(ix) {
        let mut x2 = x * x;
        if ix >> 31 != 0 && checkintf(iy) == 1 {
            x2 = -x2;
        }
        if iy >> 31 != 0 {
            if x2 == 0.0 {
                return divzerof(x2.is_sign_negative(), "powf");
            }
            return 1.0 / x2;
        }
        return x2;
    }
    invalidf(x, "powf")
}

/// Computes `x^y` for every lane.
///
/// Max found ULP 2.57
#[inline]
pub fn powf_simd<V: SimdF32>(x: V, y: V) -> V {
    let y_int = y.trunc().cmp_eq(y);
    let x_neg = x.cmp_lt(V::splat(0.0));
    let special = zeroinfnanf_lanes(x) | zeroinfnanf_lanes(y) | (x_neg & !y_int);

    // y odd: y/2 is not an integer
    let half = y * V::splat(0.5);
    let y_odd = y_int & !half.trunc().cmp_eq(half);
    let sign = x_neg & y_odd & ubits::<V>(0x80000000);

    let a = x.abs();
    let small = a.cmp_lt(V::splat(f32::MIN_POSITIVE));
    let ia = V::Bits::select(
        small,
        (a * V::splat(NORM)).as_bits() - ubits::<V>(SUBNORMAL_BIAS),
        a.as_bits(),
    );
    let ret = powf_core::<V>(ia, y);

    let xflow =
        (ret.abs().cmp_eq(V::splat(f32::INFINITY)) | ret.cmp_eq(V::splat(0.0))) & !special;
    if xflow.any() {
        report_xflowf(x, ret, xflow, "powf");
    }
    let ret = V::from_raw(ret.as_bits() ^ sign);
    if special.any() {
        return lane_fallback2(x, y, ret, special, powf_special);
    }
    ret
}

/// Computes `x^y`
///
/// Max found ULP 2.57
#[inline]
pub fn powf(x: f32, y: f32) -> f32 {
    powf_simd(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{F32x4, F32x8, SimdFloat};
    use crate::ulp_distance_f32;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn reference(x: f32, y: f32) -> f32 {
        (x as f64).powf(y as f64) as f32
    }

    fn check(x: f32, y: f32) {
        let v = powf(x, y);
        let want = reference(x, y);
        assert!(
            ulp_distance_f32(v, want) <= 3,
            "Invalid result {} for {}^{}, expected {}",
            v,
            x,
            y,
            want
        );
    }

    #[test]
    fn test_powf_grid() {
        let xs = [1e-30f32, 1e-5, 0.1, 0.5, 0.9, 0.999, 1.0001, 1.5, 2.0, 3.7, 10.0, 123456.0, 1e30];
        let ys = [-100.0f32, -10.5, -3.0, -1.0, -0.5, 0.25, 0.5, 1.0, 2.0, 3.3, 7.0, 40.25];
        for &x in xs.iter() {
            for &y in ys.iter() {
                check(x, y);
            }
        }
    }

    #[test]
    fn test_powf_random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..20000 {
            let x = rng.random_range(0.01f32..100.0);
            let y = rng.random_range(-19.0f32..19.0);
            check(x, y);
        }
    }

    #[test]
    fn test_powf_worst_case() {
        check(f32::from_bits(0x3f818b83), f32::from_bits(0x45e71761));
    }

    #[test]
    fn test_powf_negative_and_subnormal() {
        check(-2.0, 3.0);
        check(-2.0, 4.0);
        check(-0.5, -7.0);
        check(-3.0, 1e10);
        check(1e-40, 0.5);
        check(-1e-40, 2.0);
        check(f32::from_bits(1), 0.25);
        assert!(powf(-2.0, 0.5).is_nan());
        assert!(powf(-2.0, 3.0) < 0.0);
        assert!(powf(-2.0, 4.0) > 0.0);
    }

    #[test]
    fn test_powf_special() {
        assert_eq!(powf(f32::NAN, 0.0), 1.0);
        assert_eq!(powf(1.0, f32::NAN), 1.0);
        assert!(powf(f32::NAN, 1.0).is_nan());
        assert!(powf(2.0, f32::NAN).is_nan());
        assert_eq!(powf(0.0, -1.0), f32::INFINITY);
        assert_eq!(powf(-0.0, -1.0), f32::NEG_INFINITY);
        assert_eq!(powf(-0.0, -2.0), f32::INFINITY);
        assert_eq!(powf(-0.0, 3.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(powf(f32::INFINITY, -1.0).to_bits(), 0);
        assert_eq!(powf(f32::NEG_INFINITY, 3.0), f32::NEG_INFINITY);
        assert_eq!(powf(f32::NEG_INFINITY, 2.0), f32::INFINITY);
        assert_eq!(powf(0.5, f32::INFINITY), 0.0);
        assert_eq!(powf(2.0, f32::INFINITY), f32::INFINITY);
        assert_eq!(powf(-1.0, f32::NEG_INFINITY), 1.0);
        assert_eq!(powf(2.0, 200.0), f32::INFINITY);
        assert_eq!(powf(2.0, -200.0), 0.0);
        assert_eq!(powf(-2.0, 201.0), f32::NEG_INFINITY);
        assert_eq!(powf(-2.0, -201.0).to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn test_powf_lanes() {
        let pairs = [
            (2.0f32, 3.0f32),
            (-2.0, 3.0),
            (0.0, -1.0),
            (f32::NAN, 0.0),
            (1e-40, 0.5),
            (-2.0, 0.5),
            (3.0, 1e30),
            (0.7, -12.5),
            (-4.0, 0.5),
        ];
        let n = pairs.len();
        for start in 0..n {
            let x: [f32; 8] = std::array::from_fn(|i| pairs[(start + i) % n].0);
            let y: [f32; 8] = std::array::from_fn(|i| pairs[(start + i) % n].1);
            let r4 = powf_simd(F32x4::load(&x), F32x4::load(&y));
            let r8 = powf_simd(F32x8::load(&x), F32x8::load(&y));
            for i in 0..8 {
                let want = powf(x[i], y[i]);
                let same = |v: f32| v.to_bits() == want.to_bits() || (v.is_nan() && want.is_nan());
                if i < 4 {
                    assert!(same(r4.extract(i)), "Invalid result {:?} for {:?}", r4, x);
                }
                assert!(same(r8.extract(i)), "Invalid result {:?} for {:?}", r8, x);
            }
        }
    }
}

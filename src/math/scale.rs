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
//! Reconstruction of `2^(k/N)` from the reduced exponent.
use crate::math::common::{cst, ubits};
use crate::simd::{SimdBits, SimdF32, SimdF64};

/// `asuint(2^(i/128)) - (i << 45)` for `i` in `0..128`.
///
/// Adding `u << 45` to entry `u % 128` gives `2^(u/128)` as long as the
/// exponent stays in range.
pub(crate) static EXP_TABLE: [u64; 128] = [
    0x3ff0000000000000, 0x3feff63da9fb3335, 0x3fefec9a3e778061, 0x3fefe315e86e7f85,
    0x3fefd9b0d3158574, 0x3fefd06b29ddf6de, 0x3fefc74518759bc8, 0x3fefbe3ecac6f383,
    0x3fefb5586cf9890f, 0x3fefac922b7247f7, 0x3fefa3ec32d3d1a2, 0x3fef9b66affed31b,
    0x3fef9301d0125b51, 0x3fef8abdc06c31cc, 0x3fef829aaea92de0, 0x3fef7a98c8a58e51,
    0x3fef72b83c7d517b, 0x3fef6af9388c8dea, 0x3fef635beb6fcb75, 0x3fef5be084045cd4,
    0x3fef54873168b9aa, 0x3fef4d5022fcd91d, 0x3fef463b88628cd6, 0x3fef3f49917ddc96,
    0x3fef387a6e756238, 0x3fef31ce4fb2a63f, 0x3fef2b4565e27cdd, 0x3fef24dfe1f56381,
    0x3fef1e9df51fdee1, 0x3fef187fd0dad990, 0x3fef1285a6e4030b, 0x3fef0cafa93e2f56,
    0x3fef06fe0a31b715, 0x3fef0170fc4cd831, 0x3feefc08b26416ff, 0x3feef6c55f929ff1,
    0x3feef1a7373aa9cb, 0x3feeecae6d05d866, 0x3feee7db34e59ff7, 0x3feee32dc313a8e5,
    0x3feedea64c123422, 0x3feeda4504ac801c, 0x3feed60a21f72e2a, 0x3feed1f5d950a897,
    0x3feece086061892d, 0x3feeca41ed1d0057, 0x3feec6a2b5c13cd0, 0x3feec32af0d7d3de,
    0x3feebfdad5362a27, 0x3feebcb299fddd0d, 0x3feeb9b2769d2ca7, 0x3feeb6daa2cf6642,
    0x3feeb42b569d4f82, 0x3feeb1a4ca5d920f, 0x3feeaf4736b527da, 0x3feead12d497c7fd,
    0x3feeab07dd485429, 0x3feea9268a5946b7, 0x3feea76f15ad2148, 0x3feea5e1b976dc09,
    0x3feea47eb03a5585, 0x3feea34634ccc320, 0x3feea23882552225, 0x3feea155d44ca973,
    0x3feea09e667f3bcd, 0x3feea012750bdabf, 0x3fee9fb23c651a2f, 0x3fee9f7df9519484,
    0x3fee9f75e8ec5f74, 0x3fee9f9a48a58174, 0x3fee9feb564267c9, 0x3feea0694fde5d3f,
    0x3feea11473eb0187, 0x3feea1ed0130c132, 0x3feea2f336cf4e62, 0x3feea427543e1a12,
    0x3feea589994cce13, 0x3feea71a4623c7ad, 0x3feea8d99b4492ed, 0x3feeaac7d98a6699,
    0x3feeace5422aa0db, 0x3feeaf3216b5448c, 0x3feeb1ae99157736, 0x3feeb45b0b91ffc6,
    0x3feeb737b0cdc5e5, 0x3feeba44cbc8520f, 0x3feebd829fde4e50, 0x3feec0f170ca07ba,
    0x3feec49182a3f090, 0x3feec86319e32323, 0x3feecc667b5de565, 0x3feed09bec4a2d33,
    0x3feed503b23e255d, 0x3feed99e1330b358, 0x3feede6b5579fdbf, 0x3feee36bbfd3f37a,
    0x3feee89f995ad3ad, 0x3feeee07298db666, 0x3feef3a2b84f15fb, 0x3feef9728de5593a,
    0x3feeff76f2fb5e47, 0x3fef05b030a1064a, 0x3fef0c1e904bc1d2, 0x3fef12c25bd71e09,
    0x3fef199bdd85529c, 0x3fef20ab5fffd07a, 0x3fef27f12e57d14b, 0x3fef2f6d9406e7b5,
    0x3fef3720dcef9069, 0x3fef3f0b555dc3fa, 0x3fef472d4a07897c, 0x3fef4f87080d89f2,
    0x3fef5818dcfba487, 0x3fef60e316c98398, 0x3fef69e603db3285, 0x3fef7321f301b460,
    0x3fef7c97337b9b5f, 0x3fef864614f5a129, 0x3fef902ee78b3ff6, 0x3fef9a51fbc74c83,
    0x3fefa4afa2a490da, 0x3fefaf482d8e67f1, 0x3fefba1bee615a27, 0x3fefc52b376bba97,
    0x3fefd0765b6e4540, 0x3fefdbfdad9cbe14, 0x3fefe7c1819e90d8, 0x3feff3c22b8f71f1,
];

/// `2^(i/128) / asdouble(EXP_TABLE[i] + (i << 45)) - 1`, the rounding error
/// of each table entry relative to the entry.
pub(crate) static EXP_TAIL: [u64; 128] = [
    0x0000000000000000, 0x3c9b3b4f1a88bf6e, 0xbc7160139cd8dc5d, 0xbc905e7a108766d1,
    0x3c8cd2523567f613, 0xbc8bce8023f98efa, 0x3c60f74e61e6c861, 0x3c90a3e45b33d399,
    0x3c979aa65d837b6d, 0x3c8eb51a92fdeffc, 0x3c3ebe3d702f9cd1, 0xbc6a033489906e0b,
    0xbc9556522a2fbd0e, 0xbc5080ef8c4eea55, 0xbc91c923b9d5f416, 0x3c80d3e3e95c55af,
    0xbc801b15eaa59348, 0xbc8f1ff055de323d, 0x3c8b898c3f1353bf, 0xbc96d99c7611eb26,
    0x3c9aecf73e3a2f60, 0xbc8fe782cb86389d, 0x3c8a6f4144a6c38d, 0x3c807a05b0e4047d,
    0x3c968efde3a8a894, 0x3c875e18f274487d, 0x3c80472b981fe7f2, 0xbc96b87b3f71085e,
    0x3c82f7e16d09ab31, 0xbc3d219b1a6fbffa, 0x3c8b3782720c0ab4, 0x3c6e149289cecb8f,
    0x3c834d754db0abb6, 0x3c864201e2ac744c, 0x3c8fdd395dd3f84a, 0xbc86a3803b8e5b04,
    0xbc924aedcc4b5068, 0xbc9907f81b512d8e, 0xbc71d1e83e9436d2, 0xbc991919b3ce1b15,
    0x3c859f48a72a4c6d, 0xbc9312607a28698a, 0xbc58a78f4817895b, 0xbc7c2c9b67499a1b,
    0x3c4363ed60c2ac11, 0x3c9666093b0664ef, 0x3c6ecce1daa10379, 0x3c93ff8e3f0f1230,
    0x3c7690cebb7aafb0, 0x3c931dbdeb54e077, 0xbc8f94340071a38e, 0xbc87deccdc93a349,
    0xbc78dec6bd0f385f, 0xbc861246ec7b5cf6, 0x3c93350518fdd78e, 0x3c7b98b72f8a9b05,
    0x3c9063e1e21c5409, 0x3c34c7855019c6ea, 0x3c9432e62b64c035, 0xbc8ce44a6199769f,
    0xbc8c33c53bef4da8, 0xbc845378892be9ae, 0xbc93cedd78565858, 0x3c5710aa807e1964,
    0xbc93b3efbf5e2228, 0xbc6a12ad8734b982, 0xbc6367efb86da9ee, 0xbc80dc3d54e08851,
    0xbc781f647e5a3ecf, 0xbc86ee4ac08b7db0, 0xbc8619321e55e68a, 0x3c909ccb5e09d4d3,
    0xbc7b32dcb94da51d, 0x3c94ecfd5467c06b, 0x3c65ebe1abd66c55, 0xbc88a1c52fb3cf42,
    0xbc9369b6f13b3734, 0xbc805e843a19ff1e, 0xbc94d450d872576e, 0x3c90ad675b0e8a00,
    0x3c8db72fc1f0eab4, 0xbc65b6609cc5e7ff, 0x3c7bf68359f35f44, 0xbc93091fa71e3d83,
    0xbc5da9b88b6c1e29, 0xbc6c23f97c90b959, 0xbc92434322f4f9aa, 0xbc85ca6cd7668e4b,
    0x3c71affc2b91ce27, 0x3c6dd235e10a73bb, 0xbc87c50422622263, 0x3c8b1c86e3e231d5,
    0xbc91bbd1d3bcbb15, 0x3c90cc319cee31d2, 0x3c8469846e735ab3, 0xbc82dfcd978e9db4,
    0x3c8c1a7792cb3387, 0xbc907b8f4ad1d9fa, 0xbc55c3d956dcaeba, 0xbc90a40e3da6f640,
    0xbc68d6f438ad9334, 0xbc91eee26b588a35, 0x3c74ffd70a5fddcd, 0xbc91bdfbfa9298ac,
    0x3c736eae30af0cb3, 0x3c8ee3325c9ffd94, 0x3c84e08fd10959ac, 0x3c63cdaf384e1a67,
    0x3c676b2c6c921968, 0xbc808a1883ccb5d2, 0xbc8fad5d3ffffa6f, 0xbc900dae3875a949,
    0x3c74a385a63d07a7, 0xbc82919e2040220f, 0x3c8e5a50d5c192ac, 0x3c843a59ac016b4b,
    0xbc82d52107b43e1f, 0xbc892ab93b470dc9, 0x3c74b604603a88d3, 0x3c83c5ec519d7271,
    0xbc8ff7128fd391f0, 0xbc8dae98e223747d, 0x3c8ec3bc41aa2008, 0x3c842b94c3a9eb32,
    0x3c8a64a931d185ee, 0xbc8e37bae43be3ed, 0x3c77893b4d91cd9d, 0x3c5305c14160cc89,
];

/// Mantissa of `2^(i/64)`, double precision
pub(crate) static FEXPA_F64: [u64; 64] = [
    0x0000000000000000, 0x00002c9a3e778061, 0x000059b0d3158574, 0x0000874518759bc8,
    0x0000b5586cf9890f, 0x0000e3ec32d3d1a2, 0x00011301d0125b51, 0x0001429aaea92de0,
    0x000172b83c7d517b, 0x0001a35beb6fcb75, 0x0001d4873168b9aa, 0x0002063b88628cd6,
    0x0002387a6e756238, 0x00026b4565e27cdd, 0x00029e9df51fdee1, 0x0002d285a6e4030b,
    0x000306fe0a31b715, 0x00033c08b26416ff, 0x000371a7373aa9cb, 0x0003a7db34e59ff7,
    0x0003dea64c123422, 0x0004160a21f72e2a, 0x00044e086061892d, 0x000486a2b5c13cd0,
    0x0004bfdad5362a27, 0x0004f9b2769d2ca7, 0x0005342b569d4f82, 0x00056f4736b527da,
    0x0005ab07dd485429, 0x0005e76f15ad2148, 0x0006247eb03a5585, 0x0006623882552225,
    0x0006a09e667f3bcd, 0x0006dfb23c651a2f, 0x00071f75e8ec5f74, 0x00075feb564267c9,
    0x0007a11473eb0187, 0x0007e2f336cf4e62, 0x00082589994cce13, 0x000868d99b4492ed,
    0x0008ace5422aa0db, 0x0008f1ae99157736, 0x00093737b0cdc5e5, 0x00097d829fde4e50,
    0x0009c49182a3f090, 0x000a0c667b5de565, 0x000a5503b23e255d, 0x000a9e6b5579fdbf,
    0x000ae89f995ad3ad, 0x000b33a2b84f15fb, 0x000b7f76f2fb5e47, 0x000bcc1e904bc1d2,
    0x000c199bdd85529c, 0x000c67f12e57d14b, 0x000cb720dcef9069, 0x000d072d4a07897c,
    0x000d5818dcfba487, 0x000da9e603db3285, 0x000dfc97337b9b5f, 0x000e502ee78b3ff6,
    0x000ea4afa2a490da, 0x000efa1bee615a27, 0x000f50765b6e4540, 0x000fa7c1819e90d8,
];

/// Mantissa of `2^(i/64)`, single precision
pub(crate) static FEXPA_F32: [u32; 64] = [
    0x000000, 0x0164d2, 0x02cd87, 0x043a29, 0x05aac3, 0x071f62, 0x08980f, 0x0a14d5,
    0x0b95c2, 0x0d1adf, 0x0ea43a, 0x1031dc, 0x11c3d3, 0x135a2b, 0x14f4f0, 0x16942d,
    0x1837f0, 0x19e046, 0x1b8d3a, 0x1d3eda, 0x1ef532, 0x20b051, 0x227043, 0x243516,
    0x25fed7, 0x27cd94, 0x29a15b, 0x2b7a3a, 0x2d583f, 0x2f3b79, 0x3123f6, 0x3311c4,
    0x3504f3, 0x36fd92, 0x38fbaf, 0x3aff5b, 0x3d08a4, 0x3f179a, 0x412c4d, 0x4346cd,
    0x45672a, 0x478d75, 0x49b9be, 0x4bec15, 0x4e248c, 0x506334, 0x52a81e, 0x54f35b,
    0x5744fd, 0x599d16, 0x5bfbb8, 0x5e60f5, 0x60ccdf, 0x633f89, 0x65b907, 0x68396a,
    0x6ac0c7, 0x6d4f30, 0x6fe4ba, 0x728177, 0x75257d, 0x77d0df, 0x7a83b3, 0x7d3e0c,
];

/// `2^(u/128)` from the low bits of `u` and the table.
#[inline(always)]
pub(crate) fn table_scale<V: SimdF64>(u: V::Bits) -> V {
    let i = u & ubits::<V>(127);
    let t = i.lookup(|j| EXP_TABLE[j]);
    V::from_raw(t + u.shl(45))
}

/// Software equivalent of the SVE `FEXPA` instruction, double precision.
///
/// Bits `0..6` of `u` select `2^(i/64)`, bits `6..17` become the biased
/// exponent. Sign and NaN of the source are lost.
#[inline(always)]
pub(crate) fn fexpa<V: SimdF64>(u: V::Bits) -> V {
    let i = u & ubits::<V>(63);
    let m = i.lookup(|j| FEXPA_F64[j]);
    let e = (u.shr(6) & ubits::<V>(0x7ff)).shl(52);
    V::from_raw(e | m)
}

/// Software equivalent of the SVE `FEXPA` instruction, single precision.
///
/// Bits `0..6` of `u` select `2^(i/64)`, bits `6..14` become the biased
/// exponent.
#[inline(always)]
pub(crate) fn fexpaf<V: SimdF32>(u: V::Bits) -> V {
    let i = u & ubits::<V>(63);
    let m = i.lookup(|j| FEXPA_F32[j]);
    let e = (u.shr(6) & ubits::<V>(0xff)).shl(23);
    V::from_raw(e | m)
}

/// `scale * (1 + poly)` for lanes where `scale = 2^n` alone would leave
/// the normal range.
///
/// The scale is split into `s1 * s2` so that no intermediate overflows, lanes
/// with `|n| > scale_bound` saturate to `s1 * s1`.
#[cold]
#[inline(never)]
pub(crate) fn special_scale<V: SimdF64>(poly: V, n: V, scale: V, scale_bound: f64) -> V {
    // 0x1p513 as an offset
    let b = n.cmp_le(V::splat(0.0)) & ubits::<V>(0x6000000000000000);
    // 0x1p769
    let s1 = V::from_raw(ubits::<V>(0x7000000000000000) - b);
    // 0x1p-254
    let s2 = V::from_raw(scale.as_bits() - ubits::<V>(0x3010000000000000) + b);
    let cmp = n.abs_gt(V::splat(scale_bound));
    let r1 = s1 * s1;
    let r2 = s2.fma(s2, poly) * s1;
    V::select(cmp, r1, r2)
}

/// Single precision counterpart of [special_scale].
///
/// `e` is the exponent bits already shifted into place, `cmp1` marks lanes
/// where `|n|` exceeds the range of the direct scale.
#[cold]
#[inline(never)]
pub(crate) fn special_scalef<V: SimdF32>(poly: V, n: V, e: V::Bits, cmp1: V::Bits, scale: V) -> V {
    let b = n.cmp_le(V::splat(0.0)) & ubits::<V>(0x82000000);
    let s1 = V::from_raw(b + ubits::<V>(0x7f000000));
    let s2 = V::from_raw(e - b);
    // 192
    let cmp2 = n.abs_gt(cst::<V>(0x43400000));
    let r2 = s1 * s1;
    let r1 = s2.fma(poly, s2) * s1;
    // no double rounding in the subnormal range
    let r0 = scale.fma(poly, scale);
    let r = V::select(cmp1, r1, r0);
    V::select(cmp2, r2, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::Wrapping;

    #[test]
    fn test_table_scale() {
        for k in -1020i64..1020 {
            let u = Wrapping((k * 128 + 37) as u64);
            let s: f64 = table_scale(u);
            let want = (k as f64 + 37.0 / 128.0).exp2();
            assert!(
                crate::ulp_distance_f64(s, want) <= 1,
                "Invalid result {}, expected {}",
                s,
                want
            );
        }
    }

    #[test]
    fn test_fexpa_matches_table() {
        for k in -1000i64..1000 {
            for i in 0..64i64 {
                let idx = (k + 1023) * 64 + i;
                let f: f64 = fexpa(Wrapping(idx as u64));
                let t: f64 = table_scale(Wrapping((k * 128 + 2 * i) as u64));
                assert!(f == t, "Invalid result {}, expected {}", f, t);
            }
        }
        for k in -120i32..120 {
            for i in 0..64i32 {
                let idx = (k + 127) * 64 + i;
                let f: f32 = fexpaf(Wrapping(idx as u32));
                let want = (k as f64 + i as f64 / 64.0).exp2() as f32;
                assert!(f == want, "Invalid result {}, expected {}", f, want);
            }
        }
    }

    #[test]
    fn test_special_scale() {
        // 2^1000 * 2^20 * 1.5 overflows the direct construction
        let n = 1020.0f64;
        let scale = f64::from_bits(((1020u64 + 1023) << 52) & 0x7fff_ffff_ffff_ffff);
        let r = special_scale(0.5, n, scale, 1280.0);
        let want = 1.5 * 2f64.powi(1020);
        assert!(r == want, "Invalid result {}, expected {}", r, want);
        let r = special_scale(0.5, 2000.0, scale, 1280.0);
        assert!(r.is_infinite(), "Invalid result {}", r);
    }
}

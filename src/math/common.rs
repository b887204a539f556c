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
use crate::simd::{SimdBits, SimdF32, SimdF64, SimdFloat};

/// Broadcasts a constant given by its bit pattern
#[inline(always)]
pub(crate) fn cst<V: SimdFloat>(bits: V::UInt) -> V {
    V::from_raw(V::Bits::splat(bits))
}

#[inline(always)]
pub(crate) fn ubits<V: SimdFloat>(v: V::UInt) -> V::Bits {
    V::Bits::splat(v)
}

/// Recomputes every lane set in `special` with the scalar routine `f`,
/// other lanes keep their value from `y`.
#[cold]
#[inline(never)]
pub(crate) fn lane_fallback<V: SimdFloat>(
    x: V,
    y: V,
    special: V::Bits,
    f: impl Fn(V::Scalar) -> V::Scalar,
) -> V {
    let mut r = y;
    for i in 0..V::LANES {
        if special.lane_set(i) {
            r = r.replace(i, f(x.extract(i)));
        }
    }
    r
}

/// Two argument version of [lane_fallback]
#[cold]
#[inline(never)]
pub(crate) fn lane_fallback2<V: SimdFloat>(
    x: V,
    y: V,
    r: V,
    special: V::Bits,
    f: impl Fn(V::Scalar, V::Scalar) -> V::Scalar,
) -> V {
    let mut z = r;
    for i in 0..V::LANES {
        if special.lane_set(i) {
            z = z.replace(i, f(x.extract(i), y.extract(i)));
        }
    }
    z
}

/// [lane_fallback] for routines returning a pair of results
#[cold]
#[inline(never)]
pub(crate) fn lane_fallback_pair<V: SimdFloat>(
    x: V,
    r: (V, V),
    special: V::Bits,
    f: impl Fn(V::Scalar) -> (V::Scalar, V::Scalar),
) -> (V, V) {
    let (mut a, mut b) = r;
    for i in 0..V::LANES {
        if special.lane_set(i) {
            let (p, q) = f(x.extract(i));
            a = a.replace(i, p);
            b = b.replace(i, q);
        }
    }
    (a, b)
}

/// Returns 0 if not int, 1 if odd int, 2 if even int.
/// The argument is the bit representation of a non-zero finite double.
#[inline]
pub(crate) const fn checkint(iy: u64) -> i32 {
    let e = ((iy >> 52) & 0x7ff) as i32;
    if e < 0x3ff {
        return 0;
    }
    if e > 0x3ff + 52 {
        return 2;
    }
    if iy & ((1u64 << (0x3ff + 52 - e)) - 1) != 0 {
        return 0;
    }
    if iy & (1u64 << (0x3ff + 52 - e)) != 0 {
        return 1;
    }
    2
}

/// Same as [checkint] for single precision
#[inline]
pub(crate) const fn checkintf(iy: u32) -> i32 {
    let e = ((iy >> 23) & 0xff) as i32;
    if e < 0x7f {
        return 0;
    }
    if e > 0x7f + 23 {
        return 2;
    }
    if iy & ((1u32 << (0x7f + 23 - e)) - 1) != 0 {
        return 0;
    }
    if iy & (1u32 << (0x7f + 23 - e)) != 0 {
        return 1;
    }
    2
}

/// True for zero, infinity and NaN
#[inline(always)]
pub(crate) const fn zeroinfnan(i: u64) -> bool {
    (i << 1).wrapping_sub(1) >= (0x7ff0000000000000u64 << 1).wrapping_sub(1)
}

#[inline(always)]
pub(crate) const fn zeroinfnanf(i: u32) -> bool {
    (i << 1).wrapping_sub(1) >= (0x7f800000u32 << 1).wrapping_sub(1)
}

/// Lanes holding zero, infinity or NaN
#[inline(always)]
pub(crate) fn zeroinfnan_lanes<V: SimdF64>(x: V) -> V::Bits {
    let i = x.as_bits();
    (i + i - ubits::<V>(1)).cmp_ge(ubits::<V>((0x7ff0000000000000u64 << 1) - 1))
}

#[inline(always)]
pub(crate) fn zeroinfnanf_lanes<V: SimdF32>(x: V) -> V::Bits {
    let i = x.as_bits();
    (i + i - ubits::<V>(1)).cmp_ge(ubits::<V>((0x7f800000u32 << 1) - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{F32x4, F64x2};

    #[test]
    fn test_checkint() {
        assert_eq!(checkint(3.0f64.to_bits()), 1);
        assert_eq!(checkint(4.0f64.to_bits()), 2);
        assert_eq!(checkint(0.5f64.to_bits()), 0);
        assert_eq!(checkint(2.5f64.to_bits()), 0);
        assert_eq!(checkint(1e300f64.to_bits()), 2);
        assert_eq!(checkintf(3.0f32.to_bits()), 1);
        assert_eq!(checkintf(1073741824.0f32.to_bits()), 2);
        assert_eq!(checkintf(1.25f32.to_bits()), 0);
    }

    #[test]
    fn test_zeroinfnan() {
        assert!(zeroinfnan(0));
        assert!(zeroinfnan((-0.0f64).to_bits()));
        assert!(zeroinfnan(f64::INFINITY.to_bits()));
        assert!(zeroinfnan(f64::NAN.to_bits()));
        assert!(!zeroinfnan(1.0f64.to_bits()));
        assert!(!zeroinfnan(f64::MIN_POSITIVE.to_bits()));
        assert!(zeroinfnanf(f32::NEG_INFINITY.to_bits()));
        assert!(!zeroinfnanf(2.0f32.to_bits()));
        let m = zeroinfnan_lanes(F64x2::from_array([-0.0, 3.0]));
        assert!(m.lane_set(0) && !m.lane_set(1), "Invalid result {:?}", m);
        let m = zeroinfnanf_lanes(F32x4::from_array([1.0, f32::NAN, f32::INFINITY, 1e-40]));
        assert!(
            !m.lane_set(0) && m.lane_set(1) && m.lane_set(2) && !m.lane_set(3),
            "Invalid result {:?}",
            m
        );
    }

    #[test]
    fn test_lane_fallback() {
        let x = F64x2::from_array([1.0, 2.0]);
        let y = F64x2::from_array([10.0, 20.0]);
        let special = x.cmp_gt(F64x2::splat(1.5));
        let r = lane_fallback(x, y, special, |v| -v).to_array();
        assert!(r == [10.0, -2.0], "Invalid result {:?}", r);
    }
}

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
#![no_main]

use lanemath::*;
use libfuzzer_sys::fuzz_target;

fn same_f64(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

fn same_f32(a: f32, b: f32) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

/// Scalar result must match every lane of both vector shapes
fn check_f64(
    name: &str,
    x: [f64; 4],
    f: fn(f64) -> f64,
    x2: fn(F64x2) -> F64x2,
    x4: fn(F64x4) -> F64x4,
) {
    let r2 = x2(F64x2::load(&x));
    let r4 = x4(F64x4::load(&x));
    for (i, &v) in x.iter().enumerate() {
        let want = f(v);
        if i < 2 {
            assert!(same_f64(r2.extract(i), want), "{name}: lane {i} of {:?} for {:?}", r2, x);
        }
        assert!(same_f64(r4.extract(i), want), "{name}: lane {i} of {:?} for {:?}", r4, x);
    }
}

fn check_f32(
    name: &str,
    x: [f32; 8],
    f: fn(f32) -> f32,
    x4: fn(F32x4) -> F32x4,
    x8: fn(F32x8) -> F32x8,
) {
    let r4 = x4(F32x4::load(&x));
    let r8 = x8(F32x8::load(&x));
    for (i, &v) in x.iter().enumerate() {
        let want = f(v);
        if i < 4 {
            assert!(same_f32(r4.extract(i), want), "{name}: lane {i} of {:?} for {:?}", r4, x);
        }
        assert!(same_f32(r8.extract(i), want), "{name}: lane {i} of {:?} for {:?}", r8, x);
    }
}

macro_rules! lanes_f64 {
    ($x:expr, $($name:ident => $simd:ident),+ $(,)?) => {
        $(check_f64(stringify!($name), $x, $name, $simd, $simd);)+
    };
}

macro_rules! lanes_f32 {
    ($x:expr, $($name:ident => $simd:ident),+ $(,)?) => {
        $(check_f32(stringify!($name), $x, $name, $simd, $simd);)+
    };
}

fuzz_target!(|data: (u64, u64)| {
    let (a, b) = data;
    let x = f64::from_bits(a);
    let y = f64::from_bits(b);
    let xf = f32::from_bits(a as u32);
    let yf = f32::from_bits((a >> 32) as u32);
    let zf = f32::from_bits(b as u32);

    let v64 = [x, y, -x, 0.5 * y];
    let v32 = [xf, yf, zf, -xf, 2.0 * yf, f32::from_bits((b >> 32) as u32), -zf, 0.25];

    lanes_f64!(v64,
        exp => exp_simd,
        exp_fexpa => exp_fexpa_simd,
        exp2 => exp2_simd,
        exp10 => exp10_simd,
        expm1 => expm1_simd,
        sinh => sinh_simd,
        cosh => cosh_simd,
        tanh => tanh_simd,
        log => log_simd,
        log2 => log2_simd,
        log10 => log10_simd,
        log1p => log1p_simd,
        sin => sin_simd,
        cos => cos_simd,
        atan => atan_simd,
        tan => tan_simd,
        asin => asin_simd,
        acos => acos_simd,
        asinh => asinh_simd,
        acosh => acosh_simd,
        atanh => atanh_simd,
        cbrt => cbrt_simd,
        erf => erf_simd,
        erfc => erfc_simd,
    );
    lanes_f32!(v32,
        expf => expf_simd,
        expf_fexpa => expf_fexpa_simd,
        exp2f => exp2f_simd,
        exp10f => exp10f_simd,
        expm1f => expm1f_simd,
        sinhf => sinhf_simd,
        coshf => coshf_simd,
        tanhf => tanhf_simd,
        logf => logf_simd,
        log2f => log2f_simd,
        log10f => log10f_simd,
        log1pf => log1pf_simd,
        sinf => sinf_simd,
        cosf => cosf_simd,
        atanf => atanf_simd,
        tanf => tanf_simd,
        asinf => asinf_simd,
        acosf => acosf_simd,
        asinhf => asinhf_simd,
        acoshf => acoshf_simd,
        atanhf => atanhf_simd,
        cbrtf => cbrtf_simd,
        erff => erff_simd,
        erfcf => erfcf_simd,
    );

    let p = pow_simd(F64x2::from_array([x, -x]), F64x2::from_array([y, y]));
    assert!(same_f64(p.extract(0), pow(x, y)), "pow({x:e}, {y:e})");
    assert!(same_f64(p.extract(1), pow(-x, y)), "pow({:e}, {y:e})", -x);
    let pf = powf_simd(
        F32x4::from_array([xf, yf, zf, -xf]),
        F32x4::from_array([zf, xf, yf, zf]),
    );
    for (i, (p, q)) in [(xf, zf), (yf, xf), (zf, yf), (-xf, zf)].into_iter().enumerate() {
        assert!(same_f32(pf.extract(i), powf(p, q)), "powf({p:e}, {q:e})");
    }
    let t = atan2_simd(F64x2::from_array([y, x]), F64x2::from_array([x, y]));
    assert!(same_f64(t.extract(0), atan2(y, x)), "atan2({y:e}, {x:e})");
    assert!(same_f64(t.extract(1), atan2(x, y)), "atan2({x:e}, {y:e})");
    let tf = atan2f_simd(
        F32x4::from_array([xf, yf, zf, -xf]),
        F32x4::from_array([zf, xf, yf, zf]),
    );
    assert!(same_f32(tf.extract(0), atan2f(xf, zf)), "atan2f({xf:e}, {zf:e})");
    let h = hypot_simd(F64x2::from_array([x, -y]), F64x2::from_array([y, x]));
    assert!(same_f64(h.extract(0), hypot(x, y)), "hypot({x:e}, {y:e})");
    assert!(same_f64(h.extract(1), hypot(-y, x)), "hypot({:e}, {x:e})", -y);
    let hf = hypotf_simd(
        F32x4::from_array([xf, yf, zf, -xf]),
        F32x4::from_array([zf, xf, yf, zf]),
    );
    for (i, (p, q)) in [(xf, zf), (yf, xf), (zf, yf), (-xf, zf)].into_iter().enumerate() {
        assert!(same_f32(hf.extract(i), hypotf(p, q)), "hypotf({p:e}, {q:e})");
    }
    let (s, c) = sincospi_simd(F64x2::from_array([x, y]));
    for (i, v) in [x, y].into_iter().enumerate() {
        let (ws, wc) = sincospi(v);
        assert!(same_f64(s.extract(i), ws) && same_f64(c.extract(i), wc), "sincospi({v:e})");
    }
    let (s, c) = sincospif_simd(F32x4::from_array([xf, yf, zf, -xf]));
    for (i, v) in [xf, yf, zf, -xf].into_iter().enumerate() {
        let (ws, wc) = sincospif(v);
        assert!(same_f32(s.extract(i), ws) && same_f32(c.extract(i), wc), "sincospif({v:e})");
    }

    // range properties
    if !x.is_nan() {
        assert!(exp(x) >= 0.0, "exp({x:e})");
        assert!(tanh(x).abs() <= 1.0, "tanh({x:e})");
        assert!(atan(x).abs() <= 1.5707963267948968, "atan({x:e})");
        assert!(cosh(x) >= 1.0 - f64::EPSILON, "cosh({x:e})");
        assert!(erf(x).abs() <= 1.0, "erf({x:e})");
        assert!(erfc(x) >= 0.0 && erfc(x) <= 2.0, "erfc({x:e})");
        if x.is_finite() {
            let one = 1.0 + f64::EPSILON;
            assert!(sin(x).abs() <= one && cos(x).abs() <= one, "sin/cos({x:e})");
            let (s, c) = sincos(x);
            assert!(s.abs() <= one && c.abs() <= one, "sincos({x:e})");
            let (frac, int) = modf(x);
            assert!(frac + int == x && frac.abs() < 1.0, "modf({x:e})");
        }
        if x > 0.0 && x.is_finite() {
            assert!(log(x).is_finite(), "log({x:e})");
            assert!(log2(x).is_finite(), "log2({x:e})");
        }
    }
    if !xf.is_nan() {
        assert!(expf(xf) >= 0.0, "expf({xf:e})");
        assert!(tanhf(xf).abs() <= 1.0, "tanhf({xf:e})");
        if xf.is_finite() {
            let (s, c) = sincosf(xf);
            let one = 1.0 + f32::EPSILON;
            assert!(s.abs() <= one && c.abs() <= one, "sincosf({xf:e})");
            let (frac, int) = modff(xf);
            assert!(frac + int == xf, "modff({xf:e})");
        }
        if xf > 0.0 && xf.is_finite() {
            assert!(logf(xf).is_finite(), "logf({xf:e})");
        }
    }
});

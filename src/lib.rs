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
#![allow(clippy::excessive_precision, clippy::too_many_arguments)]
#![deny(unreachable_pub)]
mod err;
/// Vectorized elementary functions, each in scalar and lane shapes
mod math;
mod mlaf;
mod simd;
mod ulp;

pub use err::MathError;
#[cfg(feature = "errno")]
pub use err::{clear_last_error, last_error, take_last_error};
pub use math::{
    acos, acos_simd, acosf, acosf_simd, acosh, acosh_simd, acoshf, acoshf_simd, asin, asin_simd,
    asinf, asinf_simd, asinh, asinh_simd, asinhf, asinhf_simd, atan, atan_simd, atan2, atan2_simd,
    atan2f, atan2f_simd, atanf, atanf_simd, atanh, atanh_simd, atanhf, atanhf_simd, cbrt, cbrt_simd,
    cbrtf, cbrtf_simd, cos, cos_simd, cosf, cosf_simd, cosh, cosh_simd, coshf, coshf_simd, erf,
    erf_simd, erfc, erfc_simd, erfcf, erfcf_simd, erff, erff_simd, exp, exp_fexpa, exp_fexpa_simd,
    exp_simd, exp2, exp2_simd, exp2f, exp2f_simd, exp10, exp10_simd, exp10f, exp10f_simd, expf,
    expf_fexpa, expf_fexpa_simd, expf_simd, expm1, expm1_simd, expm1f, expm1f_simd, hypot,
    hypot_simd, hypotf, hypotf_simd, log, log_simd, log1p, log1p_simd, log1pf, log1pf_simd, log2,
    log2_simd, log2f, log2f_simd, log10, log10_simd, log10f, log10f_simd, logf, logf_simd, modf,
    modf_simd, modff, modff_simd, pow, pow_simd, powf, powf_simd, sin, sin_simd, sincos,
    sincos_simd, sincosf, sincosf_simd, sincospi, sincospi_simd, sincospif, sincospif_simd, sinf,
    sinf_simd, sinh, sinh_simd, sinhf, sinhf_simd, tan, tan_simd, tanf, tanf_simd, tanh, tanh_simd,
    tanhf, tanhf_simd,
};
pub use simd::{F32x4, F32x8, F64x2, F64x4, Pair, SimdBits, SimdF32, SimdF64, SimdFloat, U32x4, U64x2};
pub use ulp::{ulp_distance_f32, ulp_distance_f64};

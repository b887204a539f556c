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
#![allow(clippy::approx_constant)]
mod acos;
mod acosf;
mod acosh;
mod acoshf;
mod asin;
mod asinf;
mod asinh;
mod asinhf;
mod atan;
mod atan2;
mod atan2f;
mod atanf;
mod atanh;
mod atanhf;
mod cbrt;
mod cbrtf;
mod common;
mod cos;
mod cosf;
mod cosh;
mod coshf;
mod erf;
mod erf_data;
mod erfc;
mod erfcf;
mod erff;
mod exp;
mod exp10;
mod exp10f;
mod exp2;
mod exp2f;
mod exp_fexpa;
mod expf;
mod expm1;
mod expm1f;
mod hypot;
mod hypotf;
mod log;
mod log10;
mod log10f;
mod log1p;
mod log1pf;
mod log2;
mod log2f;
mod log_data;
mod logf;
mod math_err;
mod modf;
mod modff;
mod poly;
mod pow;
mod powf;
mod scale;
mod sin;
mod sincos;
mod sincosf;
mod sincospi;
mod sincospif;
mod sinf;
mod sinh;
mod sinhf;
mod tan;
mod tanf;
mod tanh;
mod tanhf;
#[cfg(test)]
mod test_utils;

pub use acos::{acos, acos_simd};
pub use acosf::{acosf, acosf_simd};
pub use acosh::{acosh, acosh_simd};
pub use acoshf::{acoshf, acoshf_simd};
pub use asin::{asin, asin_simd};
pub use asinf::{asinf, asinf_simd};
pub use asinh::{asinh, asinh_simd};
pub use asinhf::{asinhf, asinhf_simd};
pub use atan::{atan, atan_simd};
pub use atan2::{atan2, atan2_simd};
pub use atan2f::{atan2f, atan2f_simd};
pub use atanf::{atanf, atanf_simd};
pub use atanh::{atanh, atanh_simd};
pub use atanhf::{atanhf, atanhf_simd};
pub use cbrt::{cbrt, cbrt_simd};
pub use cbrtf::{cbrtf, cbrtf_simd};
pub use cos::{cos, cos_simd};
pub use cosf::{cosf, cosf_simd};
pub use cosh::{cosh, cosh_simd};
pub use coshf::{coshf, coshf_simd};
pub use erf::{erf, erf_simd};
pub use erfc::{erfc, erfc_simd};
pub use erfcf::{erfcf, erfcf_simd};
pub use erff::{erff, erff_simd};
pub use exp::{exp, exp_simd};
pub use exp_fexpa::{exp_fexpa, exp_fexpa_simd, expf_fexpa, expf_fexpa_simd};
pub use exp2::{exp2, exp2_simd};
pub use exp2f::{exp2f, exp2f_simd};
pub use exp10::{exp10, exp10_simd};
pub use exp10f::{exp10f, exp10f_simd};
pub use expf::{expf, expf_simd};
pub use expm1::{expm1, expm1_simd};
pub use expm1f::{expm1f, expm1f_simd};
pub use hypot::{hypot, hypot_simd};
pub use hypotf::{hypotf, hypotf_simd};
pub use log::{log, log_simd};
pub use log1p::{log1p, log1p_simd};
pub use log1pf::{log1pf, log1pf_simd};
pub use log2::{log2, log2_simd};
pub use log2f::{log2f, log2f_simd};
pub use log10::{log10, log10_simd};
pub use log10f::{log10f, log10f_simd};
pub use logf::{logf, logf_simd};
pub use modf::{modf, modf_simd};
pub use modff::{modff, modff_simd};
pub use pow::{pow, pow_simd};
pub use powf::{powf, powf_simd};
pub use sin::{sin, sin_simd};
pub use sincos::{sincos, sincos_simd};
pub use sincosf::{sincosf, sincosf_simd};
pub use sincospi::{sincospi, sincospi_simd};
pub use sincospif::{sincospif, sincospif_simd};
pub use sinf::{sinf, sinf_simd};
pub use sinh::{sinh, sinh_simd};
pub use sinhf::{sinhf, sinhf_simd};
pub use tan::{tan, tan_simd};
pub use tanf::{tanf, tanf_simd};
pub use tanh::{tanh, tanh_simd};
pub use tanhf::{tanhf, tanhf_simd};

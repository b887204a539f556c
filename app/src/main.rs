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
use anyhow::{Context, bail};
use flexi_logger::Logger;
use lanemath::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Unary64 = fn(f64) -> f64;
type Unary32 = fn(f32) -> f32;
type Binary64 = fn(f64, f64) -> f64;
type Binary32 = fn(f32, f32) -> f32;

/// Function under test, its reference and the sampled interval
#[derive(Copy, Clone)]
enum Kernel {
    F64(Unary64, Unary64, fn(F64x2) -> F64x2),
    F32(Unary32, Unary32, fn(F32x4) -> F32x4),
    Binary64(Binary64, Binary64),
    Binary32(Binary32, Binary32),
}

struct Case {
    name: &'static str,
    kernel: Kernel,
    lo: f64,
    hi: f64,
}

macro_rules! unary64 {
    ($name:ident, $simd:ident, $reference:path, $lo:expr, $hi:expr) => {
        Case {
            name: stringify!($name),
            kernel: Kernel::F64($name, $reference, $simd),
            lo: $lo,
            hi: $hi,
        }
    };
}

macro_rules! unary32 {
    ($name:ident, $simd:ident, $reference:path, $lo:expr, $hi:expr) => {
        Case {
            name: stringify!($name),
            kernel: Kernel::F32($name, $reference, $simd),
            lo: $lo,
            hi: $hi,
        }
    };
}

fn sincos_sin(x: f64) -> f64 {
    sincos(x).0
}

fn sincos_cos(x: f64) -> f64 {
    sincos(x).1
}

fn sincosf_sin(x: f32) -> f32 {
    sincosf(x).0
}

fn sincosf_cos(x: f32) -> f32 {
    sincosf(x).1
}

fn sincos_sin_simd(x: F64x2) -> F64x2 {
    sincos_simd(x).0
}

fn sincos_cos_simd(x: F64x2) -> F64x2 {
    sincos_simd(x).1
}

fn sincosf_sin_simd(x: F32x4) -> F32x4 {
    sincosf_simd(x).0
}

fn sincosf_cos_simd(x: F32x4) -> F32x4 {
    sincosf_simd(x).1
}

fn sincospi_sin(x: f64) -> f64 {
    sincospi(x).0
}

fn sincospi_cos(x: f64) -> f64 {
    sincospi(x).1
}

fn sincospi_sin_simd(x: F64x2) -> F64x2 {
    sincospi_simd(x).0
}

fn sincospi_cos_simd(x: F64x2) -> F64x2 {
    sincospi_simd(x).1
}

fn sincospif_sin(x: f32) -> f32 {
    sincospif(x).0
}

fn sincospif_cos(x: f32) -> f32 {
    sincospif(x).1
}

fn sincospif_sin_simd(x: F32x4) -> F32x4 {
    sincospif_simd(x).0
}

fn sincospif_cos_simd(x: F32x4) -> F32x4 {
    sincospif_simd(x).1
}

/// `sin(pi x)` from the exact remainder `x - round(x)`
fn sinpi_reference(x: f64) -> f64 {
    let n = x.round();
    let y = libm::sin(std::f64::consts::PI * (x - n));
    if n % 2.0 != 0.0 { -y } else { y }
}

fn cospi_reference(x: f64) -> f64 {
    let n = x.round();
    let y = libm::sin(std::f64::consts::PI * (0.5 - (x - n).abs()));
    if n % 2.0 != 0.0 { -y } else { y }
}

fn sinpif_reference(x: f32) -> f32 {
    sinpi_reference(x as f64) as f32
}

fn cospif_reference(x: f32) -> f32 {
    cospi_reference(x as f64) as f32
}

fn cases() -> Vec<Case> {
    vec![
        unary64!(exp, exp_simd, libm::exp, -745.2, 709.8),
        unary64!(exp_fexpa, exp_fexpa_simd, libm::exp, -708.0, 709.0),
        unary64!(exp2, exp2_simd, libm::exp2, -1075.0, 1024.0),
        unary64!(exp10, exp10_simd, libm::exp10, -323.0, 308.0),
        unary64!(expm1, expm1_simd, libm::expm1, -40.0, 709.0),
        unary64!(sinh, sinh_simd, libm::sinh, -710.0, 710.0),
        unary64!(cosh, cosh_simd, libm::cosh, -710.0, 710.0),
        unary64!(tanh, tanh_simd, libm::tanh, -20.0, 20.0),
        unary64!(log, log_simd, libm::log, 1e-300, 1e300),
        unary64!(log2, log2_simd, libm::log2, 1e-300, 1e300),
        unary64!(log10, log10_simd, libm::log10, 1e-300, 1e300),
        unary64!(log1p, log1p_simd, libm::log1p, -0.999, 1e10),
        unary64!(sin, sin_simd, libm::sin, -1e6, 1e6),
        unary64!(cos, cos_simd, libm::cos, -1e6, 1e6),
        Case {
            name: "sincos_sin",
            kernel: Kernel::F64(sincos_sin, libm::sin, sincos_sin_simd),
            lo: -1e6,
            hi: 1e6,
        },
        Case {
            name: "sincos_cos",
            kernel: Kernel::F64(sincos_cos, libm::cos, sincos_cos_simd),
            lo: -1e6,
            hi: 1e6,
        },
        unary64!(atan, atan_simd, libm::atan, -1e6, 1e6),
        unary64!(tan, tan_simd, libm::tan, -1e6, 1e6),
        unary64!(asin, asin_simd, libm::asin, -1.0, 1.0),
        unary64!(acos, acos_simd, libm::acos, -1.0, 1.0),
        unary64!(asinh, asinh_simd, libm::asinh, -1e6, 1e6),
        unary64!(acosh, acosh_simd, libm::acosh, 1.0, 1e6),
        unary64!(atanh, atanh_simd, libm::atanh, -1.0, 1.0),
        unary64!(cbrt, cbrt_simd, libm::cbrt, -1e6, 1e6),
        unary64!(erf, erf_simd, libm::erf, -6.0, 6.0),
        unary64!(erfc, erfc_simd, libm::erfc, -6.0, 28.0),
        Case {
            name: "sincospi_sin",
            kernel: Kernel::F64(sincospi_sin, sinpi_reference, sincospi_sin_simd),
            lo: -1e6,
            hi: 1e6,
        },
        Case {
            name: "sincospi_cos",
            kernel: Kernel::F64(sincospi_cos, cospi_reference, sincospi_cos_simd),
            lo: -1e6,
            hi: 1e6,
        },
        unary32!(expf, expf_simd, libm::expf, -103.0, 88.7),
        unary32!(expf_fexpa, expf_fexpa_simd, libm::expf, -87.0, 88.0),
        unary32!(exp2f, exp2f_simd, libm::exp2f, -150.0, 128.0),
        unary32!(exp10f, exp10f_simd, libm::exp10f, -45.0, 38.5),
        unary32!(expm1f, expm1f_simd, libm::expm1f, -20.0, 88.7),
        unary32!(sinhf, sinhf_simd, libm::sinhf, -89.0, 89.0),
        unary32!(coshf, coshf_simd, libm::coshf, -89.0, 89.0),
        unary32!(tanhf, tanhf_simd, libm::tanhf, -10.0, 10.0),
        unary32!(logf, logf_simd, libm::logf, 1e-38, 1e38),
        unary32!(log2f, log2f_simd, libm::log2f, 1e-38, 1e38),
        unary32!(log10f, log10f_simd, libm::log10f, 1e-38, 1e38),
        unary32!(log1pf, log1pf_simd, libm::log1pf, -0.99, 1e10),
        unary32!(sinf, sinf_simd, libm::sinf, -1e5, 1e5),
        unary32!(cosf, cosf_simd, libm::cosf, -1e5, 1e5),
        Case {
            name: "sincosf_sin",
            kernel: Kernel::F32(sincosf_sin, libm::sinf, sincosf_sin_simd),
            lo: -1e5,
            hi: 1e5,
        },
        Case {
            name: "sincosf_cos",
            kernel: Kernel::F32(sincosf_cos, libm::cosf, sincosf_cos_simd),
            lo: -1e5,
            hi: 1e5,
        },
        unary32!(atanf, atanf_simd, libm::atanf, -1e6, 1e6),
        unary32!(tanf, tanf_simd, libm::tanf, -1e5, 1e5),
        unary32!(asinf, asinf_simd, libm::asinf, -1.0, 1.0),
        unary32!(acosf, acosf_simd, libm::acosf, -1.0, 1.0),
        unary32!(asinhf, asinhf_simd, libm::asinhf, -1e5, 1e5),
        unary32!(acoshf, acoshf_simd, libm::acoshf, 1.0, 1e5),
        unary32!(atanhf, atanhf_simd, libm::atanhf, -1.0, 1.0),
        unary32!(cbrtf, cbrtf_simd, libm::cbrtf, -1e5, 1e5),
        unary32!(erff, erff_simd, libm::erff, -4.0, 4.0),
        unary32!(erfcf, erfcf_simd, libm::erfcf, -4.0, 10.1),
        Case {
            name: "sincospif_sin",
            kernel: Kernel::F32(sincospif_sin, sinpif_reference, sincospif_sin_simd),
            lo: -1e5,
            hi: 1e5,
        },
        Case {
            name: "sincospif_cos",
            kernel: Kernel::F32(sincospif_cos, cospif_reference, sincospif_cos_simd),
            lo: -1e5,
            hi: 1e5,
        },
        Case {
            name: "pow",
            kernel: Kernel::Binary64(pow, libm::pow),
            lo: 1e-3,
            hi: 1e3,
        },
        Case {
            name: "powf",
            kernel: Kernel::Binary32(powf, libm::powf),
            lo: 1e-2,
            hi: 1e2,
        },
        Case {
            name: "atan2",
            kernel: Kernel::Binary64(atan2, libm::atan2),
            lo: -1e3,
            hi: 1e3,
        },
        Case {
            name: "atan2f",
            kernel: Kernel::Binary32(atan2f, libm::atan2f),
            lo: -1e3,
            hi: 1e3,
        },
        Case {
            name: "hypot",
            kernel: Kernel::Binary64(hypot, libm::hypot),
            lo: -1e3,
            hi: 1e3,
        },
        Case {
            name: "hypotf",
            kernel: Kernel::Binary32(hypotf, libm::hypotf),
            lo: -1e3,
            hi: 1e3,
        },
    ]
}

/// Worst input found for one function
struct Worst {
    ulp: u64,
    input: String,
    got: String,
    expected: String,
    lane_mismatches: usize,
}

impl Worst {
    fn new() -> Self {
        Worst {
            ulp: 0,
            input: String::new(),
            got: String::new(),
            expected: String::new(),
            lane_mismatches: 0,
        }
    }

    fn update(&mut self, ulp: u64, input: String, got: String, expected: String) {
        if ulp > self.ulp {
            self.ulp = ulp;
            self.input = input;
            self.got = got;
            self.expected = expected;
        }
    }
}

/// Exponents for `pow` are drawn from a narrower range so results stay finite
fn sample_exponent(rng: &mut StdRng, case: &Case) -> f64 {
    if case.name.starts_with("pow") {
        rng.random_range(-30.0..30.0)
    } else {
        rng.random_range(case.lo..case.hi)
    }
}

fn scan(case: &Case, samples: usize, rng: &mut StdRng) -> Worst {
    let mut worst = Worst::new();
    match case.kernel {
        Kernel::F64(f, reference, simd) => {
            for _ in 0..samples / 2 {
                let v = [rng.random_range(case.lo..case.hi), rng.random_range(case.lo..case.hi)];
                let lanes = simd(F64x2::from_array(v)).to_array();
                for (&x, lane) in v.iter().zip(lanes) {
                    let got = f(x);
                    let expected = reference(x);
                    if got.to_bits() != lane.to_bits() && !(got.is_nan() && lane.is_nan()) {
                        worst.lane_mismatches += 1;
                    }
                    worst.update(
                        ulp_distance_f64(got, expected),
                        format!("{x:e} ({:#018x})", x.to_bits()),
                        format!("{got:e}"),
                        format!("{expected:e}"),
                    );
                }
            }
        }
        Kernel::F32(f, reference, simd) => {
            for _ in 0..samples / 4 {
                let v: [f32; 4] =
                    std::array::from_fn(|_| rng.random_range(case.lo..case.hi) as f32);
                let lanes = simd(F32x4::from_array(v)).to_array();
                for (&x, lane) in v.iter().zip(lanes) {
                    let got = f(x);
                    let expected = reference(x);
                    if got.to_bits() != lane.to_bits() && !(got.is_nan() && lane.is_nan()) {
                        worst.lane_mismatches += 1;
                    }
                    worst.update(
                        ulp_distance_f32(got, expected) as u64,
                        format!("{x:e} ({:#010x})", x.to_bits()),
                        format!("{got:e}"),
                        format!("{expected:e}"),
                    );
                }
            }
        }
        Kernel::Binary64(f, reference) => {
            for _ in 0..samples {
                let x = rng.random_range(case.lo..case.hi);
                let y = sample_exponent(rng, case);
                let got = f(x, y);
                let expected = reference(x, y);
                worst.update(
                    ulp_distance_f64(got, expected),
                    format!("({x:e}, {y:e})"),
                    format!("{got:e}"),
                    format!("{expected:e}"),
                );
            }
        }
        Kernel::Binary32(f, reference) => {
            for _ in 0..samples {
                let x = rng.random_range(case.lo..case.hi) as f32;
                let y = sample_exponent(rng, case) as f32;
                let got = f(x, y);
                let expected = reference(x, y);
                worst.update(
                    ulp_distance_f32(got, expected) as u64,
                    format!("({x:e}, {y:e})"),
                    format!("{got:e}"),
                    format!("{expected:e}"),
                );
            }
        }
    }
    worst
}

fn main() -> anyhow::Result<()> {
    Logger::try_with_str("info")?.start()?;

    let args: Vec<String> = std::env::args().collect();
    let function = args.get(1).map(String::as_str).unwrap_or("all");
    let samples = match args.get(2) {
        Some(v) => v.parse::<usize>().context("samples must be a count")?,
        None => 100_000,
    };
    let seed = match args.get(3) {
        Some(v) => v.parse::<u64>().context("seed must be an integer")?,
        None => 0x5eed,
    };

    let cases = cases();
    let selected: Vec<&Case> = cases
        .iter()
        .filter(|c| function == "all" || c.name == function)
        .collect();
    if selected.is_empty() {
        let names: Vec<&str> = cases.iter().map(|c| c.name).collect();
        bail!("Unknown function {function}, expected one of: all, {}", names.join(", "));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for case in selected {
        log::info!("Scanning {} with {} samples", case.name, samples);
        clear_last_error();
        let worst = scan(case, samples, &mut rng);
        log::info!(
            "{}: max {} ULP at {}, got {}, expected {}",
            case.name,
            worst.ulp,
            worst.input,
            worst.got,
            worst.expected
        );
        if worst.lane_mismatches > 0 {
            log::warn!(
                "{}: {} lanes disagree with the scalar result",
                case.name,
                worst.lane_mismatches
            );
        }
        if let Some(e) = last_error() {
            log::info!("{}: last signalled error {} (errno {})", case.name, e, e.errno());
        }
    }
    Ok(())
}

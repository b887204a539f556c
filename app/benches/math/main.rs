use criterion::{Criterion, criterion_group, criterion_main};
use lanemath::{F32x4, F32x8, F64x2, F64x4, SimdFloat};
use std::hint::black_box;

fn inputs_f64(lo: f64, hi: f64) -> Vec<f64> {
    (0..1024)
        .map(|i| lo + (hi - lo) * i as f64 / 1024.0)
        .collect()
}

fn inputs_f32(lo: f32, hi: f32) -> Vec<f32> {
    (0..1024)
        .map(|i| lo + (hi - lo) * i as f32 / 1024.0)
        .collect()
}

macro_rules! bench_f64 {
    ($c:expr, $name:ident, $simd:ident, $reference:path, $lo:expr, $hi:expr) => {{
        let data = inputs_f64($lo, $hi);
        $c.bench_function(concat!("libm::", stringify!($name)), |b| {
            b.iter(|| {
                for &x in data.iter() {
                    black_box($reference(black_box(x)));
                }
            })
        });
        $c.bench_function(concat!("lanemath: ", stringify!($name)), |b| {
            b.iter(|| {
                for &x in data.iter() {
                    black_box(lanemath::$name(black_box(x)));
                }
            })
        });
        $c.bench_function(concat!("lanemath: ", stringify!($name), " x2"), |b| {
            b.iter(|| {
                for chunk in data.chunks_exact(2) {
                    black_box(lanemath::$simd(F64x2::load(black_box(chunk))));
                }
            })
        });
        $c.bench_function(concat!("lanemath: ", stringify!($name), " x4"), |b| {
            b.iter(|| {
                for chunk in data.chunks_exact(4) {
                    black_box(lanemath::$simd(F64x4::load(black_box(chunk))));
                }
            })
        });
    }};
}

macro_rules! bench_f32 {
    ($c:expr, $name:ident, $simd:ident, $reference:path, $lo:expr, $hi:expr) => {{
        let data = inputs_f32($lo, $hi);
        $c.bench_function(concat!("libm::", stringify!($name)), |b| {
            b.iter(|| {
                for &x in data.iter() {
                    black_box($reference(black_box(x)));
                }
            })
        });
        $c.bench_function(concat!("lanemath: ", stringify!($name)), |b| {
            b.iter(|| {
                for &x in data.iter() {
                    black_box(lanemath::$name(black_box(x)));
                }
            })
        });
        $c.bench_function(concat!("lanemath: ", stringify!($name), " x4"), |b| {
            b.iter(|| {
                for chunk in data.chunks_exact(4) {
                    black_box(lanemath::$simd(F32x4::load(black_box(chunk))));
                }
            })
        });
        $c.bench_function(concat!("lanemath: ", stringify!($name), " x8"), |b| {
            b.iter(|| {
                for chunk in data.chunks_exact(8) {
                    black_box(lanemath::$simd(F32x8::load(black_box(chunk))));
                }
            })
        });
    }};
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_f64!(c, exp, exp_simd, libm::exp, -700.0, 700.0);
    bench_f64!(c, exp_fexpa, exp_fexpa_simd, libm::exp, -700.0, 700.0);
    bench_f64!(c, exp2, exp2_simd, libm::exp2, -1000.0, 1000.0);
    bench_f64!(c, expm1, expm1_simd, libm::expm1, -10.0, 10.0);
    bench_f64!(c, tanh, tanh_simd, libm::tanh, -10.0, 10.0);
    bench_f64!(c, log, log_simd, libm::log, 1e-5, 1e5);
    bench_f64!(c, log1p, log1p_simd, libm::log1p, -0.5, 1e5);
    bench_f64!(c, sin, sin_simd, libm::sin, -100.0, 100.0);
    bench_f64!(c, atan, atan_simd, libm::atan, -100.0, 100.0);

    bench_f32!(c, expf, expf_simd, libm::expf, -80.0, 80.0);
    bench_f32!(c, expf_fexpa, expf_fexpa_simd, libm::expf, -80.0, 80.0);
    bench_f32!(c, logf, logf_simd, libm::logf, 1e-5, 1e5);
    bench_f32!(c, sinf, sinf_simd, libm::sinf, -100.0, 100.0);
    bench_f32!(c, tanhf, tanhf_simd, libm::tanhf, -10.0, 10.0);

    let xs = inputs_f64(0.01, 100.0);
    c.bench_function("libm::pow", |b| {
        b.iter(|| {
            for &x in xs.iter() {
                black_box(libm::pow(black_box(x), 1.7));
            }
        })
    });
    c.bench_function("lanemath: pow", |b| {
        b.iter(|| {
            for &x in xs.iter() {
                black_box(lanemath::pow(black_box(x), 1.7));
            }
        })
    });
    c.bench_function("lanemath: pow x2", |b| {
        let y = <F64x2 as SimdFloat>::splat(1.7);
        b.iter(|| {
            for chunk in xs.chunks_exact(2) {
                black_box(lanemath::pow_simd(F64x2::load(black_box(chunk)), y));
            }
        })
    });

    let xs = inputs_f32(0.01, 100.0);
    c.bench_function("libm::powf", |b| {
        b.iter(|| {
            for &x in xs.iter() {
                black_box(libm::powf(black_box(x), 1.7));
            }
        })
    });
    c.bench_function("lanemath: powf x4", |b| {
        let y = <F32x4 as SimdFloat>::splat(1.7);
        b.iter(|| {
            for chunk in xs.chunks_exact(4) {
                black_box(lanemath::powf_simd(F32x4::load(black_box(chunk)), y));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

//! Timing loop over the sizes × patterns × containers matrix.
//!
//! [`run`] is a pure configuration-to-report function: it allocates,
//! measures, and returns a [`Report`] without touching stdout or stdin.
//! [`run_with`] additionally hands each [`Measurement`] to a callback as
//! soon as it is taken, which the binary uses for progress output.
//!
//! Each measurement goes through three stages:
//!
//! 1. **Calibrate**: double the iteration count until one sample takes at
//!    least `target_sample_time`.
//! 2. **Warm up**: run `warmup_samples` samples and discard them.
//! 3. **Measure**: run `samples` samples, each reduced to nanoseconds per
//!    full traversal.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::config::{BenchConfig, ConfigError};
use crate::error::BenchError;
use crate::fixture::Fixture;
use crate::pattern::ContainerKind;
use crate::report::{Measurement, Report};
use crate::stats::Summary;

/// Upper bound on calibrated iterations per sample.
pub const MAX_ITERATIONS: u64 = 1 << 32;

/// Run the full matrix described by `config`.
///
/// # Errors
///
/// Returns [`BenchError::Config`] if validation fails and
/// [`BenchError::Buffer`] if a container cannot be allocated.
pub fn run(config: &BenchConfig) -> Result<Report, BenchError> {
    run_with(config, |_| {})
}

/// Like [`run`], calling `on_measurement` after every measurement.
///
/// Sizes are the outer loop and patterns the inner one; within a pattern
/// the checked baseline is measured before the unchecked buffer, both on
/// the same fixture.
pub fn run_with<F>(config: &BenchConfig, mut on_measurement: F) -> Result<Report, BenchError>
where
    F: FnMut(&Measurement),
{
    config.validate()?;

    let mut report = Report::new();
    for &size in &config.sizes {
        for &pattern in &config.patterns {
            let mut fixture = Fixture::build(pattern, size, config)?;
            for kind in ContainerKind::ALL {
                let measurement = measure(&mut fixture, kind, config)?;
                on_measurement(&measurement);
                report.push(measurement);
            }
        }
    }
    Ok(report)
}

/// Calibrate, warm up, and sample one container of `fixture`.
///
/// # Errors
///
/// Returns [`ConfigError::ZeroSamples`] if `config.samples` is zero.
pub fn measure(
    fixture: &mut Fixture,
    kind: ContainerKind,
    config: &BenchConfig,
) -> Result<Measurement, BenchError> {
    let iterations = calibrate(fixture, kind, config.target_sample_time);

    for _ in 0..config.warmup_samples {
        sample(fixture, kind, iterations);
    }
    let samples: Vec<f64> = (0..config.samples)
        .map(|_| sample(fixture, kind, iterations))
        .collect();
    let summary = Summary::from_samples(&samples).ok_or(ConfigError::ZeroSamples)?;

    Ok(Measurement {
        pattern: fixture.pattern(),
        size: fixture.size(),
        kind,
        iterations,
        summary,
    })
}

/// Smallest power-of-two iteration count whose run reaches `target`,
/// capped at [`MAX_ITERATIONS`].
fn calibrate(fixture: &mut Fixture, kind: ContainerKind, target: Duration) -> u64 {
    let mut iterations = 1u64;
    loop {
        let elapsed = time_iterations(fixture, kind, iterations);
        if elapsed >= target || iterations >= MAX_ITERATIONS {
            return iterations;
        }
        iterations *= 2;
    }
}

/// One sample: nanoseconds per traversal.
fn sample(fixture: &mut Fixture, kind: ContainerKind, iterations: u64) -> f64 {
    let elapsed = time_iterations(fixture, kind, iterations);
    elapsed.as_nanos() as f64 / iterations as f64
}

fn time_iterations(fixture: &mut Fixture, kind: ContainerKind, iterations: u64) -> Duration {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(fixture.run_once(black_box(kind)));
    }
    start.elapsed()
}

//! Checked vs unchecked access benchmarks for `pinbuf`.
//!
//! Measures [`pinbuf::CheckedBuffer`] against [`pinbuf::UncheckedBuffer`]
//! over a matrix of sizes × [`AccessPattern`]s:
//!
//! - [`config`]: the matrix and sampling parameters, with validation
//! - [`sequence`]: verified index permutations
//! - [`fixture`]: identically populated container pairs
//! - [`kernel`]: the measured access loops
//! - [`runner`]: calibration, warm-up, and sampling
//! - [`stats`] and [`report`]: summaries and the comparative table
//!
//! The `pinbuf-bench` binary wraps [`run_with`] with a CLI; the
//! `access_patterns` Criterion suite reuses the same fixtures and kernels.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod fixture;
pub mod kernel;
pub mod pattern;
pub mod report;
pub mod runner;
pub mod sequence;
pub mod stats;

pub use config::{BenchConfig, ConfigError};
pub use error::BenchError;
pub use fixture::Fixture;
pub use pattern::{AccessPattern, ContainerKind};
pub use report::{Measurement, Report};
pub use runner::{run, run_with};
pub use sequence::{IndexSequence, SequenceError};
pub use stats::Summary;

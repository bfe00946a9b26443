//! Comparative benchmark report.
//!
//! A [`Report`] collects one [`Measurement`] per (pattern, size, container)
//! and renders them as Markdown tables, one per pattern, with each
//! unchecked row's ratio taken against the checked baseline of the same
//! size.

use std::fmt;

use crate::pattern::{AccessPattern, ContainerKind};
use crate::stats::Summary;

/// Timing result for one cell of the benchmark matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    /// Access pattern measured.
    pub pattern: AccessPattern,
    /// Container size in elements.
    pub size: usize,
    /// Container measured.
    pub kind: ContainerKind,
    /// Kernel runs per sample, chosen by calibration.
    pub iterations: u64,
    /// Per-traversal timing statistics.
    pub summary: Summary,
}

impl Measurement {
    /// Elements per second at the mean timing.
    pub fn throughput(&self) -> f64 {
        self.summary.throughput(self.size)
    }
}

/// All measurements of a run, in measurement order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    measurements: Vec<Measurement>,
}

impl Report {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a measurement.
    pub fn push(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// All measurements in insertion order.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Look up one measurement.
    pub fn get(
        &self,
        pattern: AccessPattern,
        size: usize,
        kind: ContainerKind,
    ) -> Option<&Measurement> {
        self.measurements
            .iter()
            .find(|m| m.pattern == pattern && m.size == size && m.kind == kind)
    }

    /// Mean time of `kind` relative to the checked baseline at the same
    /// pattern and size. Below 1.0 means faster than the baseline.
    pub fn ratio(&self, pattern: AccessPattern, size: usize, kind: ContainerKind) -> Option<f64> {
        let baseline = self.get(pattern, size, ContainerKind::Checked)?;
        let m = self.get(pattern, size, kind)?;
        if baseline.summary.mean_ns > 0.0 {
            Some(m.summary.mean_ns / baseline.summary.mean_ns)
        } else {
            None
        }
    }

    fn patterns(&self) -> Vec<AccessPattern> {
        let mut seen = Vec::new();
        for m in &self.measurements {
            if !seen.contains(&m.pattern) {
                seen.push(m.pattern);
            }
        }
        seen
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, pattern) in self.patterns().into_iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            writeln!(f, "## {pattern}")?;
            writeln!(f)?;
            writeln!(
                f,
                "| {:>10} | {:<9} | {:>12} | {:>12} | {:>14} | {:>5} |",
                "Size", "Container", "Mean", "StdDev", "M elem/s", "Ratio"
            )?;
            writeln!(
                f,
                "|{:-<11}:|{:-<11}|{:-<13}:|{:-<13}:|{:-<15}:|{:-<6}:|",
                "", "", "", "", "", ""
            )?;
            for m in self.measurements.iter().filter(|m| m.pattern == pattern) {
                let ratio = self
                    .ratio(m.pattern, m.size, m.kind)
                    .map_or_else(|| "?".to_string(), |r| format!("{r:.2}"));
                writeln!(
                    f,
                    "| {:>10} | {:<9} | {:>12} | {:>12} | {:>14.1} | {:>5} |",
                    m.size,
                    m.kind.name(),
                    format_ns(m.summary.mean_ns),
                    format_ns(m.summary.std_dev_ns),
                    m.throughput() / 1e6,
                    ratio
                )?;
            }
        }
        Ok(())
    }
}

/// Render nanoseconds with a unit suited to the magnitude.
pub fn format_ns(ns: f64) -> String {
    if ns < 1e3 {
        format!("{ns:.2} ns")
    } else if ns < 1e6 {
        format!("{:.2} µs", ns / 1e3)
    } else if ns < 1e9 {
        format!("{:.2} ms", ns / 1e6)
    } else {
        format!("{:.2} s", ns / 1e9)
    }
}

//! Summary statistics over timing samples.

/// Descriptive statistics of a set of per-traversal timings, in nanoseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    /// Number of samples.
    pub count: usize,
    /// Arithmetic mean.
    pub mean_ns: f64,
    /// Unbiased sample variance (zero for a single sample).
    pub variance_ns2: f64,
    /// Square root of the variance.
    pub std_dev_ns: f64,
    /// Standard error of the mean.
    pub std_error_ns: f64,
    /// Fastest sample.
    pub min_ns: f64,
    /// Slowest sample.
    pub max_ns: f64,
}

impl Summary {
    /// Summarise `samples`. Returns `None` when there are none.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let count = samples.len();
        let n = count as f64;
        let mean_ns = samples.iter().sum::<f64>() / n;
        let variance_ns2 = if count > 1 {
            samples.iter().map(|s| (s - mean_ns).powi(2)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };
        let std_dev_ns = variance_ns2.sqrt();
        let min_ns = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max_ns = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count,
            mean_ns,
            variance_ns2,
            std_dev_ns,
            std_error_ns: std_dev_ns / n.sqrt(),
            min_ns,
            max_ns,
        })
    }

    /// Elements processed per second when one traversal touches `elements`.
    ///
    /// Zero if the mean is not positive.
    pub fn throughput(&self, elements: usize) -> f64 {
        if self.mean_ns > 0.0 {
            elements as f64 * 1e9 / self.mean_ns
        } else {
            0.0
        }
    }
}

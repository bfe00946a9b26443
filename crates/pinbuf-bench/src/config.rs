//! Benchmark matrix configuration and validation.
//!
//! [`BenchConfig`] describes the sizes × patterns sweep and the sampling
//! parameters. [`validate()`](BenchConfig::validate) checks it before any
//! buffer is allocated.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::pattern::AccessPattern;

// ── BenchConfig ────────────────────────────────────────────────────

/// Configuration for one run of the benchmark matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
    /// Container sizes in `u32` elements, measured in the given order.
    pub sizes: Vec<usize>,
    /// Access patterns, measured in the given order for each size.
    pub patterns: Vec<AccessPattern>,
    /// Unrecorded samples run before measuring. Default: 3.
    pub warmup_samples: u32,
    /// Recorded samples per (size, pattern, container). Default: 20.
    pub samples: u32,
    /// Minimum wall time of a single sample; the iteration count is
    /// doubled until one sample reaches it. Default: 10ms.
    pub target_sample_time: Duration,
    /// Seed for the random-read fill and shuffle. Default: 111.
    pub read_seed: u64,
    /// Seed for the random-write shuffle. Default: 111.
    pub write_seed: u64,
}

impl BenchConfig {
    /// Sizes spanning a cache line up to main-memory-resident buffers.
    pub const DEFAULT_SIZES: [usize; 8] = [
        64,
        256,
        512,
        1024,
        4096,
        1024 * 16,
        1024 * 1024,
        1024 * 1024 * 16,
    ];

    /// Default seed shared by the randomized patterns.
    pub const DEFAULT_SEED: u64 = 111;

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        for (i, &size) in self.sizes.iter().enumerate() {
            if size == 0 {
                return Err(ConfigError::ZeroSize);
            }
            let fits = size
                .checked_mul(std::mem::size_of::<u32>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize);
            if !fits {
                return Err(ConfigError::SizeOverflow { size });
            }
            if self.sizes[..i].contains(&size) {
                return Err(ConfigError::DuplicateSize { size });
            }
        }

        if self.patterns.is_empty() {
            return Err(ConfigError::NoPatterns);
        }
        for (i, &pattern) in self.patterns.iter().enumerate() {
            if self.patterns[..i].contains(&pattern) {
                return Err(ConfigError::DuplicatePattern { pattern });
            }
        }

        if self.samples == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.target_sample_time.is_zero() {
            return Err(ConfigError::ZeroSampleTime);
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: Self::DEFAULT_SIZES.to_vec(),
            patterns: AccessPattern::ALL.to_vec(),
            warmup_samples: 3,
            samples: 20,
            target_sample_time: Duration::from_millis(10),
            read_seed: Self::DEFAULT_SEED,
            write_seed: Self::DEFAULT_SEED,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`BenchConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No sizes configured.
    NoSizes,
    /// A size of zero elements was configured.
    ZeroSize,
    /// A size whose byte footprint cannot be allocated.
    SizeOverflow {
        /// The size in elements.
        size: usize,
    },
    /// The same size appears twice.
    DuplicateSize {
        /// The repeated size.
        size: usize,
    },
    /// No access patterns configured.
    NoPatterns,
    /// The same pattern appears twice.
    DuplicatePattern {
        /// The repeated pattern.
        pattern: AccessPattern,
    },
    /// `samples` is zero.
    ZeroSamples,
    /// `target_sample_time` is zero.
    ZeroSampleTime,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSizes => write!(f, "no sizes configured"),
            Self::ZeroSize => write!(f, "sizes must be at least 1 element"),
            Self::SizeOverflow { size } => {
                write!(f, "size {size} exceeds the maximum allocation size")
            }
            Self::DuplicateSize { size } => write!(f, "size {size} is listed more than once"),
            Self::NoPatterns => write!(f, "no access patterns configured"),
            Self::DuplicatePattern { pattern } => {
                write!(f, "pattern {pattern} is listed more than once")
            }
            Self::ZeroSamples => write!(f, "samples must be at least 1"),
            Self::ZeroSampleTime => write!(f, "target sample time must be non-zero"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        BenchConfig::default().validate().unwrap();
    }

    #[test]
    fn default_sweep_spans_cache_to_main_memory() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes.first(), Some(&64));
        assert_eq!(config.sizes.last(), Some(&16_777_216));
        assert_eq!(config.patterns.len(), 3);
        assert_eq!(config.read_seed, 111);
    }

    #[test]
    fn empty_sizes_rejected() {
        let config = BenchConfig {
            sizes: vec![],
            ..BenchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoSizes));
    }

    #[test]
    fn zero_size_rejected() {
        let config = BenchConfig {
            sizes: vec![64, 0],
            ..BenchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSize));
    }

    #[test]
    fn overflowing_size_rejected() {
        let size = usize::MAX / 2;
        let config = BenchConfig {
            sizes: vec![size],
            ..BenchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::SizeOverflow { size }));
    }

    #[test]
    fn duplicate_size_rejected() {
        let config = BenchConfig {
            sizes: vec![64, 128, 64],
            ..BenchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateSize { size: 64 })
        );
    }

    #[test]
    fn duplicate_pattern_rejected() {
        let config = BenchConfig {
            patterns: vec![AccessPattern::RandomRead, AccessPattern::RandomRead],
            ..BenchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicatePattern {
                pattern: AccessPattern::RandomRead
            })
        );
    }

    #[test]
    fn zero_samples_rejected() {
        let config = BenchConfig {
            samples: 0,
            ..BenchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSamples));
    }

    #[test]
    fn zero_sample_time_rejected() {
        let config = BenchConfig {
            target_sample_time: Duration::ZERO,
            ..BenchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSampleTime));
    }

    #[test]
    fn zero_warmup_is_allowed() {
        let config = BenchConfig {
            warmup_samples: 0,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}

//! Driver-level error type.

use std::error::Error;
use std::fmt;

use pinbuf::BufferError;

use crate::config::ConfigError;

/// Errors that abort a benchmark run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BenchError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// A container could not be allocated.
    Buffer(BufferError),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Buffer(e) => write!(f, "buffer: {e}"),
        }
    }
}

impl Error for BenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Buffer(e) => Some(e),
        }
    }
}

impl From<ConfigError> for BenchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<BufferError> for BenchError {
    fn from(e: BufferError) -> Self {
        Self::Buffer(e)
    }
}

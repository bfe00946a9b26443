//! Buffer error types.

use std::error::Error;
use std::fmt;

/// Errors reported by buffer construction and checked access.
///
/// Index misuse on an [`UncheckedBuffer`](crate::UncheckedBuffer) is never
/// reported here; only construction can fail for that type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// `capacity * 4` does not fit in a valid allocation layout.
    CapacityOverflow {
        /// The requested capacity in `u32` elements.
        capacity: usize,
    },
    /// The global allocator could not satisfy the request.
    AllocationFailed {
        /// Number of bytes requested.
        bytes: usize,
    },
    /// Index outside `[0, len)` on a bounds-checked container.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the container.
        len: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { capacity } => {
                write!(f, "capacity {capacity} overflows the maximum allocation size")
            }
            Self::AllocationFailed { bytes } => {
                write!(f, "allocation of {bytes} bytes failed")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for BufferError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_index() {
        let err = BufferError::IndexOutOfRange { index: 9, len: 4 };
        assert_eq!(err.to_string(), "index 9 out of range for length 4");
    }

    #[test]
    fn display_allocation_failure_reports_bytes() {
        let err = BufferError::AllocationFailed { bytes: 4096 };
        assert!(err.to_string().contains("4096 bytes"));
    }
}

//! Verified index permutations driving the access kernels.
//!
//! An [`IndexSequence`] over `bound` always visits every index in
//! `[0, bound)` exactly once. The unchecked kernels rely on this: once the
//! bound is known to equal the buffer length, every element of the
//! sequence is a valid index.

use std::error::Error;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

/// A permutation of `[0, bound)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexSequence {
    indices: Vec<usize>,
}

impl IndexSequence {
    /// The identity order `0, 1, .., bound - 1`.
    pub fn identity(bound: usize) -> Self {
        Self {
            indices: (0..bound).collect(),
        }
    }

    /// A uniformly shuffled permutation of `[0, bound)`.
    ///
    /// Deterministic for a seeded `rng`.
    pub fn shuffled<R: Rng + ?Sized>(bound: usize, rng: &mut R) -> Self {
        let mut indices: Vec<usize> = (0..bound).collect();
        indices.shuffle(rng);
        Self { indices }
    }

    /// Validate caller-supplied indices as a permutation of `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: an index `>= bound`, an index
    /// visited twice, or (after a full scan) the lowest index never visited.
    pub fn from_indices(bound: usize, indices: Vec<usize>) -> Result<Self, SequenceError> {
        let mut seen = vec![false; bound];
        for &index in &indices {
            match seen.get_mut(index) {
                None => return Err(SequenceError::IndexOutOfRange { index, bound }),
                Some(true) => return Err(SequenceError::Duplicate { index }),
                Some(slot) => *slot = true,
            }
        }
        if let Some(index) = seen.iter().position(|&s| !s) {
            return Err(SequenceError::Missing { index });
        }
        Ok(Self { indices })
    }

    /// Exclusive upper bound of every index; equals [`len`](Self::len).
    pub fn bound(&self) -> usize {
        self.indices.len()
    }

    /// Number of indices in the sequence.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The indices in traversal order.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}

/// Reasons a sequence is not a permutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// An index is not below the bound.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The sequence bound.
        bound: usize,
    },
    /// An index appears more than once.
    Duplicate {
        /// The repeated index.
        index: usize,
    },
    /// An index in range is never visited.
    Missing {
        /// The lowest unvisited index.
        index: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, bound } => {
                write!(f, "index {index} is outside [0, {bound})")
            }
            Self::Duplicate { index } => write!(f, "index {index} is visited more than once"),
            Self::Missing { index } => write!(f, "index {index} is never visited"),
        }
    }
}

impl Error for SequenceError {}

//! Bounds-checked reference container.
//!
//! [`CheckedBuffer`] is the baseline [`UncheckedBuffer`](crate::UncheckedBuffer)
//! is measured against: a fixed-length boxed slice with the standard
//! bounds checks on every access.

use std::ops::{Index, IndexMut};

use crate::error::BufferError;

/// A fixed-length, zero-initialised `u32` sequence with validated indexing.
///
/// [`get`](Self::get) and [`set`](Self::set) report out-of-range indices as
/// [`BufferError::IndexOutOfRange`]. The `Index`/`IndexMut` impls panic
/// instead, which is the bounds-checked path the benchmarks measure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckedBuffer {
    data: Box<[u32]>,
}

impl CheckedBuffer {
    /// Create a zeroed buffer of `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
        }
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<u32, BufferError> {
        self.data
            .get(index)
            .copied()
            .ok_or(BufferError::IndexOutOfRange {
                index,
                len: self.data.len(),
            })
    }

    /// Write `value` at `index`.
    pub fn set(&mut self, index: usize, value: u32) -> Result<(), BufferError> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(BufferError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Capacity in elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer has no valid indices.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<u32>()
    }
}

impl Index<usize> for CheckedBuffer {
    type Output = u32;

    #[inline]
    fn index(&self, index: usize) -> &u32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for CheckedBuffer {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut u32 {
        &mut self.data[index]
    }
}

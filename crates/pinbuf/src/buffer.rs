//! Fixed-capacity `u32` buffer with unchecked indexed access.
//!
//! [`UncheckedBuffer`] trades bounds validation for direct address
//! arithmetic: slot `i` is read from `base + i * 4` with no comparison
//! against the capacity. The backing block is pinned, so the base address
//! computed at construction stays valid for every later access, even if
//! the buffer value itself is moved.

#![allow(unsafe_code)]

use std::fmt;

use crate::error::BufferError;
use crate::raw::RawBlock;

/// A fixed-length, pinned block of `u32` with no runtime bounds checks.
///
/// `get` and `set` are `unsafe fn`: the caller must guarantee
/// `index < len()`. Out-of-range access is undefined behavior, not an
/// error. Debug builds carry a `debug_assert!` on the index; release
/// builds carry nothing.
///
/// # Example
///
/// ```
/// use pinbuf::UncheckedBuffer;
///
/// let mut buf = UncheckedBuffer::new(4).unwrap();
/// // SAFETY: 2 < 4.
/// unsafe { buf.set(2, 7) };
/// assert_eq!(unsafe { buf.get(2) }, 7);
/// ```
pub struct UncheckedBuffer {
    block: RawBlock,
}

impl UncheckedBuffer {
    /// Allocate a zeroed buffer of `capacity` elements (`capacity * 4` bytes).
    ///
    /// Capacity zero is permitted and yields a buffer with no valid indices.
    ///
    /// # Errors
    ///
    /// - [`BufferError::CapacityOverflow`] if the byte size overflows.
    /// - [`BufferError::AllocationFailed`] if the allocator returns null.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        Ok(Self {
            block: RawBlock::zeroed(capacity)?,
        })
    }

    /// Read the element at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len()`](Self::len).
    #[inline(always)]
    pub unsafe fn get(&self, index: usize) -> u32 {
        debug_assert!(
            index < self.block.len(),
            "index {index} out of range for capacity {}",
            self.block.len()
        );
        // SAFETY: forwarded caller contract.
        unsafe { self.block.read(index) }
    }

    /// Write `value` at `index`. Exactly one slot is modified.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len()`](Self::len).
    #[inline(always)]
    pub unsafe fn set(&mut self, index: usize, value: u32) {
        debug_assert!(
            index < self.block.len(),
            "index {index} out of range for capacity {}",
            self.block.len()
        );
        // SAFETY: forwarded caller contract.
        unsafe { self.block.write(index, value) }
    }

    /// Capacity in elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.block.len()
    }

    /// Whether the buffer has no valid indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.block.len() == 0
    }

    /// Size of the backing block in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.block.len() * std::mem::size_of::<u32>()
    }

    /// Base address of the backing block.
    ///
    /// Constant for the lifetime of the buffer. Dangling when empty.
    pub fn as_ptr(&self) -> *const u32 {
        self.block.as_ptr()
    }
}

impl fmt::Debug for UncheckedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UncheckedBuffer")
            .field("len", &self.len())
            .field("base", &self.as_ptr())
            .finish()
    }
}

//! Low-level primitives for the pinned `u32` block.
//!
//! [`RawBlock`] owns one zeroed, `u32`-aligned heap allocation whose base
//! address is fixed from construction until drop. All pointer arithmetic
//! in the crate happens here; every `unsafe` block carries a `// SAFETY:`
//! comment.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::error::BufferError;

/// A fixed, zero-initialised block of `len` contiguous `u32` slots.
pub(crate) struct RawBlock {
    /// Base address. Dangling (but aligned) when `len == 0`.
    ptr: NonNull<u32>,
    len: usize,
    /// Layout used for allocation, kept for deallocation.
    layout: Layout,
}

// SAFETY: RawBlock exclusively owns its allocation, like `Box<[u32]>`.
// Reads go through `&self` and writes through `&mut self`, so the usual
// borrow rules keep cross-thread access race-free.
unsafe impl Send for RawBlock {}
// SAFETY: see `Send`; `&RawBlock` only permits reads.
unsafe impl Sync for RawBlock {}

impl RawBlock {
    /// Allocate `len` zeroed slots.
    ///
    /// A zero-length block performs no allocation.
    pub(crate) fn zeroed(len: usize) -> Result<Self, BufferError> {
        let layout =
            Layout::array::<u32>(len).map_err(|_| BufferError::CapacityOverflow { capacity: len })?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len,
                layout,
            });
        }

        // SAFETY: layout has non-zero size, checked above.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw.cast::<u32>()).ok_or(BufferError::AllocationFailed {
            bytes: layout.size(),
        })?;

        Ok(Self { ptr, len, layout })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const u32 {
        self.ptr.as_ptr()
    }

    /// Read slot `index`.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline(always)]
    pub(crate) unsafe fn read(&self, index: usize) -> u32 {
        // SAFETY: caller guarantees index < len, so `base + index` lies
        // inside the live allocation and is aligned for u32.
        unsafe { self.ptr.as_ptr().add(index).read() }
    }

    /// Write `value` into slot `index`.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline(always)]
    pub(crate) unsafe fn write(&mut self, index: usize, value: u32) {
        // SAFETY: as for `read`; `&mut self` rules out concurrent access.
        unsafe { self.ptr.as_ptr().add(index).write(value) }
    }
}

impl Drop for RawBlock {
    fn drop(&mut self) {
        if self.layout.size() == 0 {
            return;
        }
        // SAFETY: ptr came from alloc_zeroed with exactly this layout and
        // is released only here.
        unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), self.layout) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_block_reads_zero() {
        let block = RawBlock::zeroed(16).unwrap();
        for i in 0..16 {
            assert_eq!(unsafe { block.read(i) }, 0);
        }
    }

    #[test]
    fn empty_block_does_not_allocate() {
        let block = RawBlock::zeroed(0).unwrap();
        assert_eq!(block.len(), 0);
        assert_eq!(block.layout.size(), 0);
    }

    #[test]
    fn base_is_u32_aligned() {
        let block = RawBlock::zeroed(3).unwrap();
        assert_eq!(block.as_ptr() as usize % std::mem::align_of::<u32>(), 0);
    }

    #[test]
    fn layout_overflow_is_reported() {
        let result = RawBlock::zeroed(usize::MAX);
        assert!(matches!(
            result,
            Err(BufferError::CapacityOverflow { capacity: usize::MAX })
        ));
    }
}

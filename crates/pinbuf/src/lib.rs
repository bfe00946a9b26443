//! Fixed-capacity pinned `u32` buffers.
//!
//! Provides [`UncheckedBuffer`], a contiguous block of `u32` addressed by
//! raw pointer arithmetic with no bounds validation, and
//! [`CheckedBuffer`], the bounds-checked baseline it is compared against.
//!
//! # Safety boundary
//!
//! `unsafe` is confined to two modules:
//!
//! ```text
//! raw.rs     RawBlock: alloc_zeroed / dealloc, base + index * 4
//! buffer.rs  UncheckedBuffer::{get, set} as `unsafe fn`
//! ```
//!
//! Everything else denies `unsafe_code`. The only checked failure of the
//! unchecked buffer is allocation at construction; index misuse is the
//! caller's obligation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod checked;
pub mod error;
mod raw;

pub use buffer::UncheckedBuffer;
pub use checked::CheckedBuffer;
pub use error::BufferError;

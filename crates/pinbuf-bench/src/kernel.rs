//! Access loops measured by the benchmarks.
//!
//! Each pattern has one kernel per container kind with identical loop
//! structure, so the only difference between a checked and an unchecked
//! run is the per-access bounds check. Reads fold into a wrapping `u32`
//! checksum so the loads cannot be eliminated.
//!
//! The sequential kernels take their loop bound as an argument rather
//! than reading it from the container. A bound the optimiser can prove
//! equal to the slice length lets it drop the checks from the checked
//! loop, leaving nothing to compare. Callers pass the size through
//! [`std::hint::black_box`].
//!
//! Each unchecked kernel asserts once, before its loop, that its bound
//! fits the buffer. For the random kernels the [`IndexSequence`]
//! permutation invariant then puts every index in range.

#![allow(unsafe_code)]

use pinbuf::{CheckedBuffer, UncheckedBuffer};

use crate::sequence::IndexSequence;

/// Value stored by the random-write kernels.
pub const WRITE_VALUE: u32 = 111;

/// Sum the first `limit` elements in index order.
///
/// # Panics
///
/// Panics at index `buf.len()` if `limit` exceeds the buffer.
pub fn sequential_read_checked(buf: &CheckedBuffer, limit: usize) -> u32 {
    let mut sum = 0u32;
    for i in 0..limit {
        sum = sum.wrapping_add(buf[i]);
    }
    sum
}

/// Sum the first `limit` elements in index order without bounds checks.
///
/// # Panics
///
/// Panics before reading if `limit > buf.len()`.
pub fn sequential_read_unchecked(buf: &UncheckedBuffer, limit: usize) -> u32 {
    assert!(limit <= buf.len(), "limit must not exceed buffer length");
    let mut sum = 0u32;
    for i in 0..limit {
        // SAFETY: i < limit <= buf.len().
        sum = sum.wrapping_add(unsafe { buf.get(i) });
    }
    sum
}

/// Sum every element in `seq` order.
///
/// # Panics
///
/// Panics on the first index outside the buffer.
pub fn random_read_checked(buf: &CheckedBuffer, seq: &IndexSequence) -> u32 {
    let mut sum = 0u32;
    for &i in seq.as_slice() {
        sum = sum.wrapping_add(buf[i]);
    }
    sum
}

/// Sum every element in `seq` order without bounds checks.
///
/// # Panics
///
/// Panics before reading if `seq.bound() != buf.len()`.
pub fn random_read_unchecked(buf: &UncheckedBuffer, seq: &IndexSequence) -> u32 {
    assert_eq!(seq.bound(), buf.len(), "sequence bound must equal buffer length");
    let mut sum = 0u32;
    for &i in seq.as_slice() {
        // SAFETY: seq is a permutation of [0, bound) and bound == buf.len().
        sum = sum.wrapping_add(unsafe { buf.get(i) });
    }
    sum
}

/// Store [`WRITE_VALUE`] at every index in `seq` order.
///
/// # Panics
///
/// Panics on the first index outside the buffer.
pub fn random_write_checked(buf: &mut CheckedBuffer, seq: &IndexSequence) {
    for &i in seq.as_slice() {
        buf[i] = WRITE_VALUE;
    }
}

/// Store [`WRITE_VALUE`] at every index in `seq` order without bounds checks.
///
/// # Panics
///
/// Panics before writing if `seq.bound() != buf.len()`.
pub fn random_write_unchecked(buf: &mut UncheckedBuffer, seq: &IndexSequence) {
    assert_eq!(seq.bound(), buf.len(), "sequence bound must equal buffer length");
    for &i in seq.as_slice() {
        // SAFETY: seq is a permutation of [0, bound) and bound == buf.len().
        unsafe { buf.set(i, WRITE_VALUE) };
    }
}

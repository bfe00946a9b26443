//! Per-(size, pattern) container pairs populated identically.
//!
//! A [`Fixture`] is built once per matrix cell and shared by both
//! container kinds, so the checked and unchecked runs read the same values
//! through the same index order.

#![allow(unsafe_code)]

use std::hint::black_box;

use pinbuf::{BufferError, CheckedBuffer, UncheckedBuffer};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::BenchConfig;
use crate::kernel;
use crate::pattern::{AccessPattern, ContainerKind};
use crate::sequence::IndexSequence;

/// Fill both containers with the same random values, slot by slot.
///
/// # Panics
///
/// Panics if the containers differ in length.
pub fn fill_random<R: Rng + ?Sized>(
    checked: &mut CheckedBuffer,
    unchecked: &mut UncheckedBuffer,
    rng: &mut R,
) {
    assert_eq!(checked.len(), unchecked.len(), "container length mismatch");
    for i in 0..checked.len() {
        let v: u32 = rng.random();
        checked[i] = v;
        // SAFETY: i < checked.len() == unchecked.len().
        unsafe { unchecked.set(i, v) };
    }
}

/// A checked and an unchecked buffer of equal size plus the index sequence
/// both are traversed with.
#[derive(Debug)]
pub struct Fixture {
    pattern: AccessPattern,
    checked: CheckedBuffer,
    unchecked: UncheckedBuffer,
    sequence: IndexSequence,
}

impl Fixture {
    /// Allocate and populate a fixture for `pattern` at `size` elements.
    ///
    /// - `SequentialRead`: unseeded random contents, identity order.
    /// - `RandomRead`: contents and shuffle both drawn from one ChaCha8
    ///   stream seeded with `config.read_seed`, fill first.
    /// - `RandomWrite`: zeroed contents, shuffle seeded with
    ///   `config.write_seed`.
    ///
    /// # Errors
    ///
    /// Returns the allocation error of the unchecked buffer.
    pub fn build(
        pattern: AccessPattern,
        size: usize,
        config: &BenchConfig,
    ) -> Result<Self, BufferError> {
        let mut checked = CheckedBuffer::new(size);
        let mut unchecked = UncheckedBuffer::new(size)?;

        let sequence = match pattern {
            AccessPattern::SequentialRead => {
                fill_random(&mut checked, &mut unchecked, &mut rand::rng());
                IndexSequence::identity(size)
            }
            AccessPattern::RandomRead => {
                let mut rng = ChaCha8Rng::seed_from_u64(config.read_seed);
                fill_random(&mut checked, &mut unchecked, &mut rng);
                IndexSequence::shuffled(size, &mut rng)
            }
            AccessPattern::RandomWrite => {
                let mut rng = ChaCha8Rng::seed_from_u64(config.write_seed);
                IndexSequence::shuffled(size, &mut rng)
            }
        };

        Ok(Self {
            pattern,
            checked,
            unchecked,
            sequence,
        })
    }

    /// Run the pattern's kernel once against `kind`.
    ///
    /// Returns the read checksum, or zero for the write pattern.
    #[inline]
    pub fn run_once(&mut self, kind: ContainerKind) -> u32 {
        match (self.pattern, kind) {
            (AccessPattern::SequentialRead, ContainerKind::Checked) => {
                kernel::sequential_read_checked(&self.checked, black_box(self.size()))
            }
            (AccessPattern::SequentialRead, ContainerKind::Unchecked) => {
                kernel::sequential_read_unchecked(&self.unchecked, black_box(self.size()))
            }
            (AccessPattern::RandomRead, ContainerKind::Checked) => {
                kernel::random_read_checked(&self.checked, &self.sequence)
            }
            (AccessPattern::RandomRead, ContainerKind::Unchecked) => {
                kernel::random_read_unchecked(&self.unchecked, &self.sequence)
            }
            (AccessPattern::RandomWrite, ContainerKind::Checked) => {
                kernel::random_write_checked(&mut self.checked, &self.sequence);
                0
            }
            (AccessPattern::RandomWrite, ContainerKind::Unchecked) => {
                kernel::random_write_unchecked(&mut self.unchecked, &self.sequence);
                0
            }
        }
    }

    /// The pattern this fixture was populated for.
    pub fn pattern(&self) -> AccessPattern {
        self.pattern
    }

    /// Number of elements in each container.
    pub fn size(&self) -> usize {
        self.checked.len()
    }

    /// The bounds-checked container.
    pub fn checked(&self) -> &CheckedBuffer {
        &self.checked
    }

    /// The unchecked container.
    pub fn unchecked(&self) -> &UncheckedBuffer {
        &self.unchecked
    }

    /// The traversal order shared by both containers.
    pub fn sequence(&self) -> &IndexSequence {
        &self.sequence
    }

    /// Combined byte footprint of both containers.
    pub fn memory_bytes(&self) -> usize {
        self.checked.memory_bytes() + self.unchecked.memory_bytes()
    }
}

//! Access patterns and container kinds that form the benchmark matrix.

use std::fmt;
use std::str::FromStr;

/// How a benchmark traverses a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccessPattern {
    /// Read every index in ascending order, accumulating a checksum.
    SequentialRead,
    /// Read every index in a seeded permutation order.
    RandomRead,
    /// Write a constant at every index in a seeded permutation order.
    RandomWrite,
}

impl AccessPattern {
    /// All patterns in report order.
    pub const ALL: [AccessPattern; 3] = [
        AccessPattern::SequentialRead,
        AccessPattern::RandomRead,
        AccessPattern::RandomWrite,
    ];

    /// Stable kebab-case name, used on the command line and in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::SequentialRead => "sequential-read",
            Self::RandomRead => "random-read",
            Self::RandomWrite => "random-write",
        }
    }

    /// Whether the pattern traverses a shuffled index sequence.
    pub fn is_randomized(self) -> bool {
        !matches!(self, Self::SequentialRead)
    }
}

impl fmt::Display for AccessPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccessPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| {
                format!("unknown access pattern '{s}' (expected sequential-read, random-read or random-write)")
            })
    }
}

/// Which container a measurement was taken against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerKind {
    /// [`pinbuf::CheckedBuffer`], the baseline.
    Checked,
    /// [`pinbuf::UncheckedBuffer`].
    Unchecked,
}

impl ContainerKind {
    /// Both kinds, baseline first.
    pub const ALL: [ContainerKind; 2] = [ContainerKind::Checked, ContainerKind::Unchecked];

    /// Short name for reports and benchmark ids.
    pub fn name(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Unchecked => "unchecked",
        }
    }

    /// Whether ratios are computed relative to this kind.
    pub fn is_baseline(self) -> bool {
        matches!(self, Self::Checked)
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Core traits and error types
//!
//! Accumulators implement the base [`Sketch`] trait, which covers ingestion,
//! merging and resetting. Failures are reported through [`StatsError`] and
//! [`MergeError`].

use core::fmt::Debug;

use crate::width::BitWidth;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Error during accumulator merge operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// Accumulators have incompatible configurations
    IncompatibleConfig {
        expected: String,
        found: String,
    },
    /// The merged counters would overflow
    Overflow,
}

impl core::fmt::Display for MergeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MergeError::IncompatibleConfig { expected, found } => {
                write!(f, "incompatible config: expected {}, found {}", expected, found)
            }
            MergeError::Overflow => write!(f, "merged counters would overflow"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MergeError {}

/// Contract violation detected by an accumulator
///
/// None of these are recoverable: once one is raised the statistics can no
/// longer be trusted. The panicking APIs abort with this error's message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// A field does not fit in the accumulator's width
    FieldOutOfRange { width: BitWidth, field: u32 },
    /// The entry counter would wrap
    EntryCountOverflow { width: BitWidth },
    /// The running sum would overflow
    SumOverflow { width: BitWidth },
    /// The running sum is too large to produce a meaningful average
    PrecisionLoss { width: BitWidth },
    /// No fields were ingested, so there is nothing to summarize
    Empty { width: BitWidth },
}

impl StatsError {
    /// Width of the accumulator that raised the error
    pub fn width(&self) -> BitWidth {
        match *self {
            StatsError::FieldOutOfRange { width, .. }
            | StatsError::EntryCountOverflow { width }
            | StatsError::SumOverflow { width }
            | StatsError::PrecisionLoss { width }
            | StatsError::Empty { width } => width,
        }
    }
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::FieldOutOfRange { width, field } => write!(
                f,
                "field {:#x} exceeds {} mask {:#x}",
                field,
                width,
                width.mask()
            ),
            StatsError::EntryCountOverflow { width } => {
                write!(f, "{} entry count would overflow", width)
            }
            StatsError::SumOverflow { width } => write!(f, "{} running sum would overflow", width),
            StatsError::PrecisionLoss { width } => {
                write!(f, "{} running sum exceeds floating-point precision", width)
            }
            StatsError::Empty { width } => write!(f, "no {} fields to summarize", width),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Core trait for all streaming accumulators
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add an item to the sketch
    fn update(&mut self, item: &Self::Item);

    /// Merge another sketch into this one
    ///
    /// Returns an error if sketches are incompatible
    fn merge(&mut self, other: &Self) -> Result<(), MergeError>;

    /// Reset sketch to empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    use std::string::ToString;

    #[test]
    fn test_stats_error_width() {
        let err = StatsError::FieldOutOfRange {
            width: BitWidth::Byte,
            field: 0x100,
        };
        assert_eq!(err.width(), BitWidth::Byte);
        assert_eq!(StatsError::Empty { width: BitWidth::DWord }.width(), BitWidth::DWord);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_error_messages() {
        let err = StatsError::FieldOutOfRange {
            width: BitWidth::Byte,
            field: 0x100,
        };
        assert_eq!(err.to_string(), "field 0x100 exceeds 8-bit mask 0xff");

        let err = StatsError::Empty { width: BitWidth::DWord };
        assert_eq!(err.to_string(), "no 32-bit fields to summarize");

        let err = MergeError::IncompatibleConfig {
            expected: "8-bit".to_string(),
            found: "16-bit".to_string(),
        };
        assert_eq!(err.to_string(), "incompatible config: expected 8-bit, found 16-bit");
    }
}

//! Incremental field statistics (mean, uniqueness, entropy)
//!
//! Consumes one fixed-width field at a time, keeping an exact integer sum and
//! a sparse frequency table instead of the input itself. Derived statistics
//! are computed on demand from those aggregates.

use crate::frequency::FrequencyTable;
use crate::statistics::entropy::shannon_entropy;
use crate::statistics::summary::Summary;
use crate::traits::{MergeError, Sketch, StatsError};
use crate::width::BitWidth;

#[cfg(feature = "std")]
use std::string::ToString;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

/// Check whether adding `field` to a floating-point running `sum` would be lost
///
/// True when `field` is non-zero but `sum + field` does not exceed `sum`,
/// meaning `sum` has outgrown the precision needed to accumulate further
/// values of that size.
#[inline]
pub fn is_absorbed(sum: f64, field: u64) -> bool {
    field > 0 && sum + field as f64 <= sum
}

/// Streaming statistics over fields of one bit width
///
/// Tracks the entry count, the number of distinct values, an exact sum and
/// per-value occurrence counts. [`finish`](Self::finish) derives the average
/// and Shannon entropy without consuming the accumulator, so it can be called
/// any number of times.
///
/// # Example
///
/// ```
/// use bytestats::statistics::FieldStats;
/// use bytestats::BitWidth;
///
/// let mut stats = FieldStats::new(BitWidth::Byte);
///
/// for _ in 0..25 {
///     for byte in [0x00, 0x01, 0x02, 0x03] {
///         stats.add_field(byte);
///     }
/// }
///
/// let summary = stats.finish();
/// assert_eq!(summary.count, 100);
/// assert_eq!(summary.unique, 4);
/// assert!((summary.average - 1.5).abs() < 1e-12);
/// assert!((summary.entropy - 2.0).abs() < 1e-12);
/// ```
///
/// # Precondition violations
///
/// Fields wider than the accumulator, counter overflow and finishing with no
/// entries are contract violations. [`add_field`](Self::add_field) and
/// [`finish`](Self::finish) panic on them; the `try_` variants return a
/// [`StatsError`] instead.
///
/// ```should_panic
/// use bytestats::statistics::FieldStats;
/// use bytestats::BitWidth;
///
/// let mut stats = FieldStats::new(BitWidth::Byte);
/// stats.add_field(0x100);
/// ```
#[derive(Clone, Debug)]
pub struct FieldStats {
    /// Width of the accepted fields
    width: BitWidth,
    /// Number of fields ingested
    num_entries: u64,
    /// Number of distinct values ingested
    unique_entries: u64,
    /// Exact sum of all fields
    sum: u128,
    /// Occurrences per field value
    frequencies: FrequencyTable,
}

impl FieldStats {
    /// Create an empty accumulator for the given width
    pub fn new(width: BitWidth) -> Self {
        Self {
            width,
            num_entries: 0,
            unique_entries: 0,
            sum: 0,
            frequencies: FrequencyTable::new(),
        }
    }

    /// Create an empty accumulator from a size in bits
    ///
    /// # Panics
    ///
    /// Panics if `bits` is not 8, 16 or 32
    pub fn with_bits(bits: u32) -> Self {
        match BitWidth::from_bits(bits) {
            Some(width) => Self::new(width),
            None => panic!("bit size must be 8, 16 or 32, got {}", bits),
        }
    }

    /// Width of the accepted fields
    pub fn width(&self) -> BitWidth {
        self.width
    }

    /// Number of fields ingested
    pub fn len(&self) -> u64 {
        self.num_entries
    }

    /// Check if no fields have been ingested
    pub fn is_empty(&self) -> bool {
        self.num_entries == 0
    }

    /// Number of distinct field values ingested
    pub fn unique(&self) -> u64 {
        self.unique_entries
    }

    /// Exact sum of all ingested fields
    pub fn sum(&self) -> u128 {
        self.sum
    }

    /// Occurrences of `value` so far
    pub fn frequency(&self, value: u32) -> u64 {
        self.frequencies.get(value)
    }

    /// Per-value occurrence counts
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Ingest one field
    ///
    /// # Panics
    ///
    /// Panics if the field does not fit the width or a counter would overflow
    pub fn add_field(&mut self, field: u32) {
        if let Err(err) = self.try_add_field(field) {
            panic!("{}", err);
        }
    }

    /// Ingest one field, reporting contract violations instead of panicking
    ///
    /// The accumulator is left unchanged when an error is returned.
    pub fn try_add_field(&mut self, field: u32) -> Result<(), StatsError> {
        let width = self.width;
        if !width.contains(field) {
            return Err(StatsError::FieldOutOfRange { width, field });
        }

        let num_entries = self
            .num_entries
            .checked_add(1)
            .ok_or(StatsError::EntryCountOverflow { width })?;
        let sum = self
            .sum
            .checked_add(u128::from(field))
            .ok_or(StatsError::SumOverflow { width })?;

        self.num_entries = num_entries;
        self.sum = sum;
        if self.frequencies.increment(field) == 1 {
            self.unique_entries += 1;
        }

        Ok(())
    }

    /// Derive the summary statistics
    ///
    /// Pure: repeated calls return the same summary, and fields may still be
    /// added afterwards.
    ///
    /// # Panics
    ///
    /// Panics if no fields were ingested or the sum is too large to average
    pub fn finish(&self) -> Summary {
        match self.try_finish() {
            Ok(summary) => summary,
            Err(err) => panic!("{}", err),
        }
    }

    /// Derive the summary statistics, reporting contract violations
    pub fn try_finish(&self) -> Result<Summary, StatsError> {
        let width = self.width;
        if self.num_entries == 0 {
            return Err(StatsError::Empty { width });
        }

        let sum = self.sum as f64;
        if is_absorbed(sum, u64::from(width.max_value())) {
            return Err(StatsError::PrecisionLoss { width });
        }

        Ok(Summary {
            width,
            count: self.num_entries,
            unique: self.unique_entries,
            average: sum / self.num_entries as f64,
            entropy: shannon_entropy(self.frequencies.counts(), self.num_entries),
        })
    }

    /// Combine another accumulator of the same width into this one
    ///
    /// The result is identical to having ingested both field sequences into
    /// a single accumulator.
    pub fn merge_stats(&mut self, other: &Self) -> Result<(), MergeError> {
        if self.width != other.width {
            return Err(MergeError::IncompatibleConfig {
                expected: self.width.to_string(),
                found: other.width.to_string(),
            });
        }

        let num_entries = self
            .num_entries
            .checked_add(other.num_entries)
            .ok_or(MergeError::Overflow)?;
        let sum = self.sum.checked_add(other.sum).ok_or(MergeError::Overflow)?;

        self.num_entries = num_entries;
        self.sum = sum;
        for (value, count) in other.frequencies.iter() {
            if self.frequencies.add_count(value, count) == count {
                self.unique_entries += 1;
            }
        }

        Ok(())
    }
}

impl Sketch for FieldStats {
    type Item = u32;

    fn update(&mut self, item: &Self::Item) {
        self.add_field(*item);
    }

    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        self.merge_stats(other)
    }

    fn clear(&mut self) {
        *self = Self::new(self.width);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() - core::mem::size_of::<FrequencyTable>()
            + self.frequencies.size_bytes()
    }

    fn count(&self) -> u64 {
        self.num_entries
    }
}

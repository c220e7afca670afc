//! Exact sparse frequency table
//!
//! Counts occurrences of field values. Storage grows with the number of
//! distinct values observed, never with the size of the value space, so a
//! 32-bit table over a short stream stays small.

#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use xxhash_rust::xxh3::Xxh3Builder;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;

#[cfg(feature = "std")]
type CountMap = HashMap<u32, u64, Xxh3Builder>;

#[cfg(not(feature = "std"))]
type CountMap = BTreeMap<u32, u64>;

/// Exact occurrence counts keyed by field value
///
/// # Example
///
/// ```
/// use bytestats::frequency::FrequencyTable;
///
/// let mut table = FrequencyTable::new();
///
/// assert_eq!(table.increment(7), 1);
/// assert_eq!(table.increment(7), 2);
/// assert_eq!(table.increment(9), 1);
///
/// assert_eq!(table.get(7), 2);
/// assert_eq!(table.get(8), 0);
/// assert_eq!(table.distinct(), 2);
/// assert_eq!(table.total(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct FrequencyTable {
    /// Count per observed value
    counts: CountMap,
    /// Sum of all counts
    total: u64,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "std")]
            counts: HashMap::with_hasher(Xxh3Builder::new()),
            #[cfg(not(feature = "std"))]
            counts: BTreeMap::new(),
            total: 0,
        }
    }

    /// Record one occurrence of `value`, returning its updated count
    ///
    /// A return value of 1 means `value` had not been seen before.
    #[inline]
    pub fn increment(&mut self, value: u32) -> u64 {
        self.add_count(value, 1)
    }

    /// Record `count` occurrences of `value`, returning its updated count
    ///
    /// Adding zero occurrences leaves the table unchanged. Callers are
    /// responsible for keeping the total below `u64::MAX`.
    pub fn add_count(&mut self, value: u32, count: u64) -> u64 {
        if count == 0 {
            return self.get(value);
        }

        self.total += count;
        let slot = self.counts.entry(value).or_insert(0);
        *slot += count;
        *slot
    }

    /// Occurrences of `value` so far
    pub fn get(&self, value: u32) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Check whether `value` has been seen
    pub fn contains(&self, value: u32) -> bool {
        self.counts.contains_key(&value)
    }

    /// Number of distinct values seen
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total occurrences across all values
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Check if no values have been recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(value, count)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }

    /// Iterate over the counts alone
    pub fn counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts.values().copied()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }

    /// Approximate memory usage in bytes
    pub fn size_bytes(&self) -> usize {
        #[cfg(feature = "std")]
        let entries = self.counts.capacity();
        #[cfg(not(feature = "std"))]
        let entries = self.counts.len();

        // One control byte per hashbrown bucket on top of the entry itself
        core::mem::size_of::<Self>() + entries * (core::mem::size_of::<(u32, u64)>() + 1)
    }
}

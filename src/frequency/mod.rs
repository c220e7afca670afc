//! Frequency counting
//!
//! This module provides the exact, sparse occurrence table the accumulators
//! use to derive uniqueness and entropy.
//!
//! # Example
//!
//! ```
//! use bytestats::frequency::FrequencyTable;
//!
//! let mut table = FrequencyTable::new();
//!
//! for value in [3, 1, 3, 3] {
//!     table.increment(value);
//! }
//!
//! assert_eq!(table.get(3), 3);
//! assert_eq!(table.distinct(), 2);
//! ```

mod table;

pub use table::FrequencyTable;

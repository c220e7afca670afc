//! # Bytestats
//!
//! Randomness and bias diagnostics for binary data.
//!
//! Bytestats reads a byte stream once and reports, for three overlapping
//! interpretations of it (8-bit bytes, 16-bit big-endian words and 32-bit
//! big-endian double-words), how many values were seen, how many were
//! distinct, their average and their Shannon entropy. Each figure comes with
//! the value expected from uniformly random data of the same length.
//!
//! ## Features
//!
//! - **Exact streaming accumulation**: integer sums and exact frequency counts,
//!   never the input itself
//! - **Sparse storage**: memory follows the number of distinct values, even for
//!   the 2^32-value space of 32-bit fields
//! - **Loud failure**: out-of-range fields, counter overflow and empty
//!   summaries are contract violations, never silently wrong numbers
//! - **Mergeability**: accumulators of the same width can be combined
//!
//! ## Quick Start
//!
//! ```rust
//! use bytestats::prelude::*;
//!
//! let mut stream = StreamStats::new();
//! for _ in 0..25 {
//!     stream.update(&[0x00, 0x01, 0x02, 0x03]);
//! }
//!
//! let report = stream.finish().unwrap();
//! assert_eq!(report.bytes.count, 100);
//! assert_eq!(report.bytes.unique, 4);
//! assert!((report.bytes.entropy - 2.0).abs() < 1e-12);
//! println!("{}", report);
//! ```
//!
//! ## Single Width
//!
//! ```rust
//! use bytestats::statistics::FieldStats;
//! use bytestats::BitWidth;
//!
//! let mut stats = FieldStats::new(BitWidth::Word);
//! stats.add_field(0x0001);
//! stats.add_field(0x0002);
//!
//! let summary = stats.finish();
//! assert!((summary.average - 1.5).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it the frequency
//!   table falls back to a `BTreeMap` and math to libm
//! - `serde`: Enable serialization of summaries and reports
//! - `cli` (default): Build the `bytestats` command-line tool

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod math;

pub mod extract;
pub mod frequency;
pub mod statistics;
pub mod stream;
pub mod traits;
pub mod width;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::extract::{FieldExtractor, Fields};
    pub use crate::frequency::FrequencyTable;
    pub use crate::statistics::{FieldStats, Summary};
    pub use crate::stream::{Report, StreamStats};
    pub use crate::width::BitWidth;
}

pub use statistics::{FieldStats, Summary};
pub use stream::{Report, StreamStats};
pub use traits::{MergeError, StatsError};
pub use width::BitWidth;

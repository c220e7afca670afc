//! Statistical summaries for streams of fixed-width fields
//!
//! This module provides the per-width accumulator and the entropy computation
//! it builds on. Accumulators run in a single pass with memory proportional to
//! the number of distinct values.
//!
//! # Example
//!
//! ```
//! use bytestats::statistics::FieldStats;
//! use bytestats::BitWidth;
//!
//! let mut stats = FieldStats::new(BitWidth::Word);
//!
//! for field in [0x0001, 0x0002] {
//!     stats.add_field(field);
//! }
//!
//! let summary = stats.finish();
//! println!("Mean: {}", summary.average);
//! println!("Unique: {}", summary.unique);
//! println!("Entropy: {} bits", summary.entropy);
//! ```

mod accumulator;
mod entropy;
mod summary;

pub use accumulator::{is_absorbed, FieldStats};
pub use entropy::shannon_entropy;
pub use summary::Summary;

//! Query-side use of prefix-coded terms.
//!
//! Range queries over numeric and date-time fields are decomposed into
//! per-shift term ranges that a plain term dictionary can answer.

pub mod numeric_range;

pub use numeric_range::{Bound, NumericRangeQuery, TermRange, split_range};

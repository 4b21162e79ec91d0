//! # numtrie
//!
//! Trie-encoded numeric terms for range queries over an inverted index.
//!
//! ## Features
//!
//! - Order-preserving prefix-coded terms for signed 64-bit values
//! - Precision ladders for numeric and date-time fields
//! - Per-shift range decomposition
//! - A small text analysis pipeline sharing the same field interface

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod numeric;
pub mod query;

pub mod prelude {
    pub use crate::analysis::frequency::TokenFrequencies;
    pub use crate::analysis::token::{Token, TokenType};
    pub use crate::document::{
        DateTimeField, Document, DocumentBuilder, Field, IndexingOptions, NumericField, TextField,
    };
    pub use crate::error::{NumtrieError, Result};
    pub use crate::numeric::{NumericConfig, PrefixCoded, decode, encode, ladder};
    pub use crate::query::{Bound, NumericRangeQuery, TermRange};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

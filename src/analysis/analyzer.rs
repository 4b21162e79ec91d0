//! Analyzers turn raw field text into the tokens an indexer consumes.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → TokenFrequencies → Index
//!              ↓
//!          Tokenizer
//!              ↓
//!          (filters)
//! ```
//!
//! Numeric and date-time fields bypass this pipeline entirely; their tokens
//! come from the precision ladder. Analyzers only serve text fields.
//!
//! # Available Implementations
//!
//! - [`StandardAnalyzer`] - Unicode word splitting plus lowercasing
//! - [`SimpleAnalyzer`] - Any tokenizer, no filtering
//! - [`KeywordAnalyzer`] - Treats the entire input as one token

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod keyword;
pub mod simple;
pub mod standard;

pub use keyword::KeywordAnalyzer;
pub use simple::SimpleAnalyzer;
pub use standard::StandardAnalyzer;

/// Trait for analyzers that convert text into processed tokens.
///
/// Requires `Send + Sync` so a shared analyzer can back fields that are read
/// from several threads.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

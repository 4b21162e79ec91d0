//! The capability set shared by every field kind.
//!
//! An indexer sees fields only through the [`Field`] trait: a name, indexing
//! options, the analyzed terms, and the raw value to store. Text, numeric and
//! date-time fields are independent types that each implement it, so a
//! document can hold any mix of them as `Box<dyn Field>`.
//!
//! ```
//! use numtrie::document::field::{Field, IndexingOptions};
//! use numtrie::document::{NumericField, TextField};
//!
//! let fields: Vec<Box<dyn Field>> = vec![
//!     Box::new(TextField::new("title", "Trie encoding").unwrap()),
//!     Box::new(NumericField::new("year", 2014).unwrap()),
//! ];
//!
//! for field in &fields {
//!     assert!(field.options().contains(IndexingOptions::INDEX));
//!     let (length, frequencies) = field.analyze().unwrap();
//!     assert_eq!(length, frequencies.iter().map(|f| f.frequency()).sum::<usize>());
//! }
//! ```

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::analysis::frequency::TokenFrequencies;
use crate::analysis::token::{Token, TokenType};
use crate::error::{NumtrieError, Result};
use crate::numeric::config::NumericConfig;
use crate::numeric::ladder::LadderIter;
use crate::numeric::prefix_coded::PrefixCoded;

bitflags! {
    /// How a field participates in the index.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct IndexingOptions: u8 {
        /// Terms are added to the inverted index.
        const INDEX = 1;
        /// The raw value is kept for retrieval.
        const STORE = 1 << 1;
        /// Per-document term vectors are kept.
        const TERM_VECTORS = 1 << 2;
    }
}

/// Default options for numeric and date-time fields.
pub const DEFAULT_NUMERIC_INDEXING_OPTIONS: IndexingOptions = IndexingOptions::INDEX;

/// Default options for text fields.
pub const DEFAULT_TEXT_INDEXING_OPTIONS: IndexingOptions = IndexingOptions::INDEX;

impl IndexingOptions {
    /// Whether terms are added to the index.
    pub fn is_indexed(&self) -> bool {
        self.contains(IndexingOptions::INDEX)
    }

    /// Whether the raw value is stored.
    pub fn is_stored(&self) -> bool {
        self.contains(IndexingOptions::STORE)
    }

    /// Whether term vectors are kept.
    pub fn includes_term_vectors(&self) -> bool {
        self.contains(IndexingOptions::TERM_VECTORS)
    }
}

impl fmt::Display for IndexingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.is_indexed() {
            names.push("INDEX");
        }
        if self.is_stored() {
            names.push("STORE");
        }
        if self.includes_term_vectors() {
            names.push("TV");
        }
        write!(f, "{}", names.join(", "))
    }
}

/// Operations every field kind exposes to the indexer.
pub trait Field: Send + Sync + fmt::Debug {
    /// The field name.
    fn name(&self) -> &str;

    /// How the field is indexed and stored.
    fn options(&self) -> IndexingOptions;

    /// Produce the field length (token count) and its term frequencies.
    fn analyze(&self) -> Result<(usize, TokenFrequencies)>;

    /// The raw value handed to document storage.
    fn value(&self) -> &[u8];
}

/// Reject names the indexer cannot key terms under.
pub fn validate_field_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(NumtrieError::invalid_field_name(
            "field name must not be empty",
        ));
    }
    if name.chars().any(char::is_control) {
        return Err(NumtrieError::invalid_field_name(format!(
            "field name {name:?} contains control characters"
        )));
    }
    Ok(())
}

/// One token per ladder entry of `value`, all at position 1.
pub(crate) fn prefix_coded_tokens(
    value: &PrefixCoded,
    config: &NumericConfig,
    token_type: TokenType,
) -> Result<Vec<Token>> {
    LadderIter::with_config(value.to_i64(), config)?
        .map(|term| term.map(|term| Token::prefix_coded(&term, token_type)))
        .collect()
}

/// Aggregate tokens into the `(length, frequencies)` pair of [`Field::analyze`].
pub(crate) fn summarize(tokens: Vec<Token>) -> (usize, TokenFrequencies) {
    let length = tokens.len();
    (length, TokenFrequencies::from_tokens(tokens))
}

//! Token types for the analysis pipeline.
//!
//! A [`Token`] is one term handed to the indexer. Text analyzers produce tokens
//! whose offsets point into the source text; numeric and date-time fields
//! produce synthetic tokens whose term is a prefix-coded value, whose offsets
//! span the term itself, and whose position is always 1.
//!
//! ```text
//! Text "quick fox":
//!   pos 1  "quick"  [0, 5)   Alphanum
//!   pos 2  "fox"    [6, 9)   Alphanum
//!
//! Numeric 42, step 4:
//!   pos 1  <shift 0 term>    Numeric
//!   pos 1  <shift 4 term>    Numeric
//!   ...
//!   pos 1  <shift 60 term>   Numeric
//! ```
//!
//! # Examples
//!
//! ```
//! use numtrie::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("world", 2, 6, 11);
//! assert_eq!(token.text(), Some("world"));
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! assert_eq!(token.token_type, TokenType::Alphanum);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::numeric::prefix_coded::PrefixCoded;

/// Position shared by every token of one numeric or date-time value.
pub const PREFIX_CODED_POSITION: usize = 1;

/// A single term produced by analysis.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The term bytes. UTF-8 for text tokens, prefix-coded for numeric ones.
    pub term: Vec<u8>,

    /// The byte offset where this token starts
    pub start_offset: usize,

    /// The byte offset where this token ends
    pub end_offset: usize,

    /// 1-based position in the token stream
    pub position: usize,

    /// Classification of the term
    pub token_type: TokenType,
}

/// Token type classification.
///
/// [`TokenType::Numeric`] and [`TokenType::DateTime`] mark prefix-coded terms
/// so downstream consumers can tell them apart from words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphanumeric text
    Alphanum,
    /// CJK ideographs, kana and hangul
    Ideographic,
    /// Punctuation marks
    Punctuation,
    /// Prefix-coded integer
    Numeric,
    /// Prefix-coded timestamp
    DateTime,
    /// Other/unknown token types
    Other,
}

impl TokenType {
    /// Whether tokens of this type carry prefix-coded terms.
    pub fn is_prefix_coded(&self) -> bool {
        matches!(self, TokenType::Numeric | TokenType::DateTime)
    }
}

impl Token {
    /// Create a text token at `position` with zero offsets.
    pub fn new<T: Into<Vec<u8>>>(term: T, position: usize) -> Self {
        Token {
            term: term.into(),
            start_offset: 0,
            end_offset: 0,
            position,
            token_type: TokenType::Alphanum,
        }
    }

    /// Create a text token with offsets into its source.
    pub fn with_offsets<T: Into<Vec<u8>>>(
        term: T,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            term: term.into(),
            start_offset,
            end_offset,
            position,
            token_type: TokenType::Alphanum,
        }
    }

    /// Create the synthetic token for one ladder entry.
    pub fn prefix_coded(term: &PrefixCoded, token_type: TokenType) -> Self {
        Token {
            term: term.as_bytes().to_vec(),
            start_offset: 0,
            end_offset: term.len(),
            position: PREFIX_CODED_POSITION,
            token_type,
        }
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// The term as text, if it is valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.term).ok()
    }

    /// Length of the term in bytes.
    pub fn len(&self) -> usize {
        self.term.len()
    }

    /// Check if the term is empty.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.token_type.is_prefix_coded() {
            for byte in &self.term {
                write!(f, "{byte:02x}")?;
            }
            Ok(())
        } else {
            write!(f, "{}", String::from_utf8_lossy(&self.term))
        }
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 1);
        assert_eq!(token.term, b"hello");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.token_type, TokenType::Alphanum);
    }

    #[test]
    fn test_prefix_coded_token() {
        let term = PrefixCoded::new(1234, 8).unwrap();
        let token = Token::prefix_coded(&term, TokenType::Numeric);
        assert_eq!(token.term, term.as_bytes());
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, term.len());
        assert_eq!(token.position, PREFIX_CODED_POSITION);
        assert!(token.token_type.is_prefix_coded());
        assert_eq!(token.to_string(), term.to_string());
    }

    #[test]
    fn test_token_type_classification() {
        assert!(TokenType::DateTime.is_prefix_coded());
        assert!(!TokenType::Alphanum.is_prefix_coded());
        assert!(!TokenType::Other.is_prefix_coded());
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("a", 1), Token::new("b", 2)];
        let collected: Vec<Token> = tokens.into_token_stream().collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[1].text(), Some("b"));
    }
}

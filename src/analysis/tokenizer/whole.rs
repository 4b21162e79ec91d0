//! Tokenizer that emits its whole input as a single token.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::{Tokenizer, detect_token_type};
use crate::error::Result;

/// A tokenizer that treats the entire input as one token.
///
/// Empty input produces no token.
#[derive(Clone, Debug, Default)]
pub struct WholeTokenizer;

impl WholeTokenizer {
    /// Create a new whole tokenizer.
    pub fn new() -> Self {
        WholeTokenizer
    }
}

impl Tokenizer for WholeTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        if text.is_empty() {
            return Ok(Box::new(std::iter::empty()));
        }
        let token =
            Token::with_offsets(text, 1, 0, text.len()).with_token_type(detect_token_type(text));
        Ok(Box::new(std::iter::once(token)))
    }

    fn name(&self) -> &'static str {
        "whole"
    }
}

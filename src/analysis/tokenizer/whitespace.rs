//! Whitespace tokenizer implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::{Tokenizer, detect_token_type};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Positions start at 1 and offsets are byte offsets into the input.
///
/// ```
/// use numtrie::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
///
/// let tokens: Vec<_> = WhitespaceTokenizer::new().tokenize("red  green").unwrap().collect();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[1].text(), Some("green"));
/// assert_eq!(tokens[1].start_offset, 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            match (c.is_whitespace(), start) {
                (true, Some(word_start)) => {
                    tokens.push(make_token(text, word_start, offset, tokens.len() + 1));
                    start = None;
                }
                (false, None) => start = Some(offset),
                _ => {}
            }
        }
        if let Some(word_start) = start {
            tokens.push(make_token(text, word_start, text.len(), tokens.len() + 1));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

fn make_token(text: &str, start: usize, end: usize, position: usize) -> Token {
    let word = &text[start..end];
    Token::with_offsets(word, position, start, end).with_token_type(detect_token_type(word))
}

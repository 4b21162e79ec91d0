//! Unicode word tokenizer implementation.
//!
//! Splits text on Unicode word boundaries (UAX #29) and drops segments that
//! contain no alphanumeric character, such as punctuation and whitespace.
//!
//! ```
//! use numtrie::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
//!
//! let tokens: Vec<_> = UnicodeWordTokenizer::new()
//!     .tokenize("Hello, world!")
//!     .unwrap()
//!     .collect();
//! assert_eq!(tokens[0].text(), Some("Hello"));
//! assert_eq!(tokens[1].text(), Some("world"));
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::{Tokenizer, detect_token_type};
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(char::is_alphanumeric))
            .enumerate()
            .map(|(index, (start, word))| {
                Token::with_offsets(word, index + 1, start, start + word.len())
                    .with_token_type(detect_token_type(word))
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenType;

    #[test]
    fn test_unicode_word_tokenizer() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("café, résumé!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text(), Some("café"));
        assert_eq!(tokens[0].position, 1);
        assert_eq!(tokens[1].text(), Some("résumé"));
        assert_eq!(tokens[1].position, 2);
        assert_eq!(tokens[1].start_offset, "café, ".len());
    }

    #[test]
    fn test_repeated_words_get_their_own_offsets() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("to be or not to be").unwrap().collect();

        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[4].text(), Some("to"));
        assert_eq!(tokens[4].start_offset, 13);
    }

    #[test]
    fn test_cjk_classification() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("東京 tower").unwrap().collect();
        assert_eq!(tokens[0].token_type, TokenType::Ideographic);
        assert_eq!(tokens.last().unwrap().text(), Some("tower"));
    }
}

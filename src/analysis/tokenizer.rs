//! Tokenizer implementations for text analysis.

use crate::analysis::token::{TokenStream, TokenType};
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod unicode_word;
pub mod whitespace;
pub mod whole;

pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
pub use whole::WholeTokenizer;

/// Classify a word by the characters it contains.
pub(crate) fn detect_token_type(word: &str) -> TokenType {
    if word.is_empty() {
        return TokenType::Other;
    }

    if word.chars().any(|c| {
        matches!(c,
            '\u{3040}'..='\u{30FF}' |   // Hiragana, Katakana
            '\u{3400}'..='\u{4DBF}' |   // CJK Extension A
            '\u{4E00}'..='\u{9FFF}' |   // CJK Unified Ideographs
            '\u{1100}'..='\u{11FF}' |   // Hangul Jamo
            '\u{AC00}'..='\u{D7AF}' |   // Hangul Syllables
            '\u{20000}'..='\u{2CEAF}'   // CJK Extensions B-E
        )
    }) {
        return TokenType::Ideographic;
    }

    if word.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
        return TokenType::Alphanum;
    }

    if word.chars().all(|c| c.is_ascii_punctuation()) {
        return TokenType::Punctuation;
    }

    TokenType::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_token_type() {
        assert_eq!(detect_token_type("hello"), TokenType::Alphanum);
        assert_eq!(detect_token_type("2024"), TokenType::Alphanum);
        assert_eq!(detect_token_type("東京"), TokenType::Ideographic);
        assert_eq!(detect_token_type("!?"), TokenType::Punctuation);
        assert_eq!(detect_token_type("a.b"), TokenType::Other);
        assert_eq!(detect_token_type(""), TokenType::Other);
    }
}

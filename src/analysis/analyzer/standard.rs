//! Default analyzer for text fields.

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::error::Result;

/// Unicode word tokenization followed by lowercasing.
///
/// Offsets keep pointing at the original text even when lowercasing changes
/// the byte length of a term.
///
/// ```
/// use numtrie::analysis::analyzer::{Analyzer, StandardAnalyzer};
///
/// let tokens: Vec<_> = StandardAnalyzer::new().analyze("Hello World").unwrap().collect();
/// assert_eq!(tokens[0].text(), Some("hello"));
/// assert_eq!(tokens[1].text(), Some("world"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StandardAnalyzer {
    tokenizer: UnicodeWordTokenizer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let tokens = self.tokenizer.tokenize(text)?.map(lowercase);
        Ok(Box::new(tokens))
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

fn lowercase(mut token: Token) -> Token {
    if let Some(text) = token.text() {
        token.term = text.to_lowercase().into_bytes();
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_keeps_offsets() {
        let tokens: Vec<Token> = StandardAnalyzer::new()
            .analyze("The QUICK fox")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text(), Some("quick"));
        assert_eq!(tokens[1].start_offset, 4);
        assert_eq!(tokens[1].end_offset, 9);
        assert_eq!(tokens[2].position, 3);
    }
}

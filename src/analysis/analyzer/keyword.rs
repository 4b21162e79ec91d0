//! Keyword analyzer that treats the entire input as a single token.
//!
//! Suited to identifiers, tags and codes that must match exactly.
//!
//! ```
//! use numtrie::analysis::analyzer::{Analyzer, KeywordAnalyzer};
//!
//! let analyzer = KeywordAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("user-123-abc").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text(), Some("user-123-abc"));
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::simple::SimpleAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::WholeTokenizer;
use crate::error::Result;

/// A keyword analyzer that treats the entire input as a single token.
#[derive(Debug, Clone)]
pub struct KeywordAnalyzer {
    inner: SimpleAnalyzer,
}

impl KeywordAnalyzer {
    /// Create a new keyword analyzer.
    pub fn new() -> Self {
        KeywordAnalyzer {
            inner: SimpleAnalyzer::new(Arc::new(WholeTokenizer::new())),
        }
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for KeywordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_analyzer() {
        let analyzer = KeywordAnalyzer::new();
        let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text(), Some("Hello World"));
        assert_eq!(analyzer.name(), "keyword");
    }
}

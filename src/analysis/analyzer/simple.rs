//! Simple analyzer that performs tokenization without filtering.
//!
//! ```
//! use std::sync::Arc;
//!
//! use numtrie::analysis::analyzer::{Analyzer, SimpleAnalyzer};
//! use numtrie::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let analyzer = SimpleAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! // No filtering applied - original case preserved
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text(), Some("Hello"));
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A simple analyzer that just tokenizes without any filtering.
#[derive(Clone)]
pub struct SimpleAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
}

impl SimpleAnalyzer {
    /// Create a new simple analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        SimpleAnalyzer { tokenizer }
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }
}

impl Analyzer for SimpleAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.tokenizer.tokenize(text)
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

impl std::fmt::Debug for SimpleAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::tokenizer::UnicodeWordTokenizer;

    #[test]
    fn test_simple_analyzer_keeps_case() {
        let analyzer = SimpleAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()));
        let tokens: Vec<Token> = analyzer.analyze("Rust, Lucene").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text(), Some("Rust"));
        assert_eq!(tokens[1].text(), Some("Lucene"));
        assert_eq!(analyzer.name(), "simple");
        assert_eq!(analyzer.tokenizer().name(), "unicode_word");
    }
}

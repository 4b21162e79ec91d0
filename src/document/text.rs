//! Text fields analyzed into words.

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::analysis::frequency::TokenFrequencies;
use crate::analysis::token::Token;
use crate::document::field::{
    DEFAULT_TEXT_INDEXING_OPTIONS, Field, IndexingOptions, summarize, validate_field_name,
};
use crate::error::Result;

/// A UTF-8 text field.
///
/// ```
/// use numtrie::document::TextField;
/// use numtrie::document::field::Field;
///
/// let field = TextField::new("body", "to be or not to be").unwrap();
/// let (length, frequencies) = field.analyze().unwrap();
/// assert_eq!(length, 6);
/// assert_eq!(frequencies.frequency(b"be"), 2);
/// assert_eq!(field.value(), b"to be or not to be");
/// ```
#[derive(Clone)]
pub struct TextField {
    name: String,
    options: IndexingOptions,
    text: String,
    analyzer: Arc<dyn Analyzer>,
}

impl TextField {
    /// Create a field analyzed by [`StandardAnalyzer`].
    pub fn new<S: Into<String>, T: Into<String>>(name: S, text: T) -> Result<Self> {
        Self::with_analyzer(
            name,
            text,
            DEFAULT_TEXT_INDEXING_OPTIONS,
            Arc::new(StandardAnalyzer::new()),
        )
    }

    /// Create a field with explicit options and analyzer.
    pub fn with_analyzer<S: Into<String>, T: Into<String>>(
        name: S,
        text: T,
        options: IndexingOptions,
        analyzer: Arc<dyn Analyzer>,
    ) -> Result<Self> {
        let name = name.into();
        validate_field_name(&name)?;
        Ok(TextField {
            name,
            options,
            text: text.into(),
            analyzer,
        })
    }

    /// The field text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The analyzed tokens before aggregation.
    pub fn tokens(&self) -> Result<Vec<Token>> {
        Ok(self.analyzer.analyze(&self.text)?.collect())
    }
}

impl Field for TextField {
    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> IndexingOptions {
        self.options
    }

    fn analyze(&self) -> Result<(usize, TokenFrequencies)> {
        Ok(summarize(self.tokens()?))
    }

    fn value(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("text", &self.text)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

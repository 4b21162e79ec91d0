//! Integer fields indexed as a precision ladder.

use log::trace;

use crate::analysis::frequency::TokenFrequencies;
use crate::analysis::token::{Token, TokenType};
use crate::document::field::{
    DEFAULT_NUMERIC_INDEXING_OPTIONS, Field, IndexingOptions, prefix_coded_tokens, summarize,
    validate_field_name,
};
use crate::error::Result;
use crate::numeric::config::NumericConfig;
use crate::numeric::prefix_coded::PrefixCoded;

/// A signed 64-bit integer field.
///
/// The stored value is the full-precision prefix-coded term. Analysis expands
/// it into one term per precision level so range queries can match coarse
/// buckets instead of every distinct value.
///
/// ```
/// use numtrie::document::NumericField;
/// use numtrie::document::field::Field;
///
/// let field = NumericField::new("price_cents", 1999).unwrap();
/// assert_eq!(field.number(), 1999);
///
/// let (length, frequencies) = field.analyze().unwrap();
/// assert_eq!(length, 16);
/// assert_eq!(frequencies.frequency(field.value()), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericField {
    name: String,
    options: IndexingOptions,
    config: NumericConfig,
    value: PrefixCoded,
}

impl NumericField {
    /// Create a field with default options and precision.
    pub fn new<S: Into<String>>(name: S, value: i64) -> Result<Self> {
        Self::with_options(name, value, DEFAULT_NUMERIC_INDEXING_OPTIONS)
    }

    /// Create a field with explicit options.
    pub fn with_options<S: Into<String>>(
        name: S,
        value: i64,
        options: IndexingOptions,
    ) -> Result<Self> {
        Self::with_config(name, value, options, NumericConfig::default())
    }

    /// Create a field with explicit options and precision settings.
    pub fn with_config<S: Into<String>>(
        name: S,
        value: i64,
        options: IndexingOptions,
        config: NumericConfig,
    ) -> Result<Self> {
        let name = name.into();
        validate_field_name(&name)?;
        config.validate()?;

        trace!("numeric field {name}: {value} (options: {options})");
        Ok(NumericField {
            name,
            options,
            config,
            value: PrefixCoded::full_precision(value),
        })
    }

    /// The original integer, decoded from the stored term.
    pub fn number(&self) -> i64 {
        self.value.to_i64()
    }

    /// The stored full-precision term.
    pub fn prefix_coded(&self) -> &PrefixCoded {
        &self.value
    }

    /// Precision settings used by [`Field::analyze`].
    pub fn config(&self) -> &NumericConfig {
        &self.config
    }

    /// The ladder tokens before aggregation.
    pub fn tokens(&self) -> Result<Vec<Token>> {
        prefix_coded_tokens(&self.value, &self.config, TokenType::Numeric)
    }
}

impl Field for NumericField {
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
        self.value.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NumtrieError;
    use crate::numeric::prefix_coded::decode;

    #[test]
    fn test_numeric_field_value_is_canonical() {
        let field = NumericField::new("count", -5).unwrap();
        assert_eq!(field.name(), "count");
        assert_eq!(field.options(), IndexingOptions::INDEX);
        assert_eq!(field.value(), PrefixCoded::full_precision(-5).as_bytes());
        assert_eq!(decode(field.value()).unwrap(), (-5, 0));
        assert_eq!(field.number(), -5);
    }

    #[test]
    fn test_numeric_field_tokens() {
        let field = NumericField::new("count", 123_456_789).unwrap();
        let tokens = field.tokens().unwrap();

        assert_eq!(tokens.len(), 16);
        assert_eq!(tokens[0].term, field.value());
        assert!(tokens.iter().all(|t| t.position == 1));
        assert!(tokens.iter().all(|t| t.token_type == TokenType::Numeric));
    }

    #[test]
    fn test_numeric_field_custom_step() {
        let config = NumericConfig::with_precision_step(8).unwrap();
        let field =
            NumericField::with_config("count", 7, IndexingOptions::INDEX, config).unwrap();
        let (length, frequencies) = field.analyze().unwrap();
        assert_eq!(length, 8);
        assert_eq!(frequencies.len(), 8);
    }

    #[test]
    fn test_numeric_field_rejects_bad_input() {
        assert!(matches!(
            NumericField::new("", 1),
            Err(NumtrieError::InvalidFieldName(_))
        ));

        let config = NumericConfig {
            precision_step: 0,
            max_shift: 64,
        };
        assert!(matches!(
            NumericField::with_config("n", 1, IndexingOptions::INDEX, config),
            Err(NumtrieError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_store_only_field_still_reports_value() {
        let field = NumericField::with_options("n", 9, IndexingOptions::STORE).unwrap();
        assert!(field.options().is_stored());
        assert!(!field.options().is_indexed());
        assert_eq!(field.number(), 9);
    }
}

//! Date-time fields, indexed as nanoseconds since the Unix epoch.

use chrono::{DateTime, Utc};
use log::trace;

use crate::analysis::frequency::TokenFrequencies;
use crate::analysis::token::{Token, TokenType};
use crate::document::field::{
    DEFAULT_NUMERIC_INDEXING_OPTIONS, Field, IndexingOptions, prefix_coded_tokens, summarize,
    validate_field_name,
};
use crate::error::{NumtrieError, Result};
use crate::numeric::config::NumericConfig;
use crate::numeric::prefix_coded::PrefixCoded;

/// A UTC timestamp field.
///
/// Only instants between roughly 1677-09-21 and 2262-04-11 fit in signed
/// 64-bit nanoseconds; others are rejected at construction.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use numtrie::document::DateTimeField;
/// use numtrie::document::field::Field;
///
/// let created = Utc.with_ymd_and_hms(2014, 8, 21, 10, 30, 0).unwrap();
/// let field = DateTimeField::new("created", created).unwrap();
/// assert_eq!(field.datetime(), created);
///
/// let (length, _) = field.analyze().unwrap();
/// assert_eq!(length, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeField {
    name: String,
    options: IndexingOptions,
    config: NumericConfig,
    value: PrefixCoded,
}

impl DateTimeField {
    /// Create a field with default options and precision.
    pub fn new<S: Into<String>>(name: S, datetime: DateTime<Utc>) -> Result<Self> {
        Self::with_options(name, datetime, DEFAULT_NUMERIC_INDEXING_OPTIONS)
    }

    /// Create a field with explicit options.
    pub fn with_options<S: Into<String>>(
        name: S,
        datetime: DateTime<Utc>,
        options: IndexingOptions,
    ) -> Result<Self> {
        Self::with_config(name, datetime, options, NumericConfig::default())
    }

    /// Create a field with explicit options and precision settings.
    pub fn with_config<S: Into<String>>(
        name: S,
        datetime: DateTime<Utc>,
        options: IndexingOptions,
        config: NumericConfig,
    ) -> Result<Self> {
        let nanos = datetime.timestamp_nanos_opt().ok_or_else(|| {
            NumtrieError::field(format!(
                "{} is outside the nanosecond timestamp range",
                datetime.to_rfc3339()
            ))
        })?;
        Self::build(name.into(), nanos, options, config)
    }

    /// Create a field directly from nanoseconds since the Unix epoch.
    pub fn from_timestamp_nanos<S: Into<String>>(name: S, nanos: i64) -> Result<Self> {
        Self::build(
            name.into(),
            nanos,
            DEFAULT_NUMERIC_INDEXING_OPTIONS,
            NumericConfig::default(),
        )
    }

    fn build(
        name: String,
        nanos: i64,
        options: IndexingOptions,
        config: NumericConfig,
    ) -> Result<Self> {
        validate_field_name(&name)?;
        config.validate()?;

        trace!("datetime field {name}: {nanos}ns (options: {options})");
        Ok(DateTimeField {
            name,
            options,
            config,
            value: PrefixCoded::full_precision(nanos),
        })
    }

    /// Nanoseconds since the Unix epoch, decoded from the stored term.
    pub fn timestamp_nanos(&self) -> i64 {
        self.value.to_i64()
    }

    /// The original instant, decoded from the stored term.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.timestamp_nanos())
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
        prefix_coded_tokens(&self.value, &self.config, TokenType::DateTime)
    }
}

impl Field for DateTimeField {
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

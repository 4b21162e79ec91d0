//! Error types for the numtrie library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`NumtrieError`] enum.
//!
//! # Examples
//!
//! ```
//! use numtrie::error::{NumtrieError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NumtrieError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for numtrie operations.
///
/// Two variants carry meaning beyond a message:
///
/// - [`NumtrieError::UnsupportedShift`] is the codec's terminal condition. The
///   ladder generator treats it as "no coarser precision left" and stops.
/// - [`NumtrieError::MalformedTerm`] means bytes handed to the decoder were not
///   produced by the encoder (corruption or a format mismatch). It is always
///   surfaced to the caller.
#[derive(Error, Debug)]
pub enum NumtrieError {
    /// A prefix-coded term was requested at a shift with no bits left to encode.
    #[error("Unsupported shift: {shift} (must be less than 64)")]
    UnsupportedShift { shift: u32 },

    /// Bytes that do not follow the prefix-coded layout.
    #[error("Malformed term: {0}")]
    MalformedTerm(String),

    /// Field name rejected at construction time.
    #[error("Invalid field name: {0}")]
    InvalidFieldName(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Field-related errors
    #[error("Field error: {0}")]
    Field(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors (parsing, invalid bounds, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with NumtrieError.
pub type Result<T> = std::result::Result<T, NumtrieError>;

impl NumtrieError {
    /// Create a new unsupported shift error.
    pub fn unsupported_shift(shift: u32) -> Self {
        NumtrieError::UnsupportedShift { shift }
    }

    /// Create a new malformed term error.
    pub fn malformed_term<S: Into<String>>(msg: S) -> Self {
        NumtrieError::MalformedTerm(msg.into())
    }

    /// Create a new invalid field name error.
    pub fn invalid_field_name<S: Into<String>>(msg: S) -> Self {
        NumtrieError::InvalidFieldName(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        NumtrieError::InvalidConfig(msg.into())
    }

    /// Create a new field error.
    pub fn field<S: Into<String>>(msg: S) -> Self {
        NumtrieError::Field(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        NumtrieError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        NumtrieError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        NumtrieError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        NumtrieError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Whether this error is the codec's "no bits left" terminal condition.
    pub fn is_unsupported_shift(&self) -> bool {
        matches!(self, NumtrieError::UnsupportedShift { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NumtrieError::malformed_term("empty term");
        assert_eq!(error.to_string(), "Malformed term: empty term");

        let error = NumtrieError::unsupported_shift(64);
        assert_eq!(
            error.to_string(),
            "Unsupported shift: 64 (must be less than 64)"
        );

        let error = NumtrieError::invalid_field_name("field name must not be empty");
        assert_eq!(
            error.to_string(),
            "Invalid field name: field name must not be empty"
        );
    }

    #[test]
    fn test_unsupported_shift_detection() {
        assert!(NumtrieError::unsupported_shift(68).is_unsupported_shift());
        assert!(!NumtrieError::malformed_term("x").is_unsupported_shift());
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let error = NumtrieError::from(anyhow::anyhow!("wrapped"));
        assert!(matches!(error, NumtrieError::Anyhow(_)));
        assert_eq!(error.to_string(), "Anyhow error: wrapped");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = NumtrieError::from(io_error);

        match error {
            NumtrieError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}

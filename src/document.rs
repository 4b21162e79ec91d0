//! Documents and the field kinds they hold.
//!
//! Every field kind implements [`field::Field`], the capability set the
//! indexer relies on. Numeric and date-time fields store a full-precision
//! prefix-coded term and index its precision ladder; text fields store their
//! UTF-8 text and index its analyzed words.

#[allow(clippy::module_inception)]
pub mod document;
pub mod datetime;
pub mod field;
pub mod numeric;
pub mod text;

// Re-export commonly used types
pub use datetime::DateTimeField;
pub use document::{AnalyzedField, Document, DocumentBuilder};
pub use field::{Field, IndexingOptions};
pub use numeric::NumericField;
pub use text::TextField;

//! Documents: an identifier plus an ordered list of fields.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::debug;

use crate::analysis::frequency::TokenFrequencies;
use crate::document::datetime::DateTimeField;
use crate::document::field::Field;
use crate::document::numeric::NumericField;
use crate::document::text::TextField;
use crate::error::Result;

/// A document owns its fields; dropping the document drops them.
///
/// A name may appear more than once, which makes the field multi-valued.
#[derive(Debug, Default)]
pub struct Document {
    id: String,
    fields: Vec<Box<dyn Field>>,
}

/// Analysis result for all values of one field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedField {
    pub name: String,
    pub length: usize,
    pub frequencies: TokenFrequencies,
}

impl Document {
    /// Create an empty document.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Document {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Create a builder for constructing documents.
    pub fn builder<S: Into<String>>(id: S) -> DocumentBuilder {
        DocumentBuilder::new(id)
    }

    /// The document identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Append a field.
    pub fn add_field(&mut self, field: Box<dyn Field>) {
        self.fields.push(field);
    }

    /// All fields in insertion order.
    pub fn fields(&self) -> &[Box<dyn Field>] {
        &self.fields
    }

    /// The first field with `name`.
    pub fn get_field(&self, name: &str) -> Option<&dyn Field> {
        self.fields
            .iter()
            .find(|f| f.name() == name)
            .map(|f| f.as_ref())
    }

    /// Every field with `name`.
    pub fn get_fields<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a dyn Field> + 'a {
        self.fields
            .iter()
            .filter(move |f| f.name() == name)
            .map(|f| f.as_ref())
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Analyze every indexed field, merging values that share a name.
    ///
    /// The first analysis error aborts and is returned; no partial result is
    /// produced.
    pub fn analyze(&self) -> Result<Vec<AnalyzedField>> {
        let mut merged: BTreeMap<&str, AnalyzedField> = BTreeMap::new();

        for field in self.fields.iter().filter(|f| f.options().is_indexed()) {
            let (length, frequencies) = field.analyze()?;
            match merged.get_mut(field.name()) {
                Some(entry) => {
                    entry.length += length;
                    entry.frequencies.merge(frequencies);
                }
                None => {
                    merged.insert(
                        field.name(),
                        AnalyzedField {
                            name: field.name().to_string(),
                            length,
                            frequencies,
                        },
                    );
                }
            }
        }

        debug!(
            "analyzed document {}: {} indexed field names",
            self.id,
            merged.len()
        );
        Ok(merged.into_values().collect())
    }

    /// Raw values of stored fields, in insertion order.
    pub fn stored_values(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.fields
            .iter()
            .filter(|f| f.options().is_stored())
            .map(|f| (f.name(), f.value()))
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new<S: Into<String>>(id: S) -> Self {
        DocumentBuilder {
            document: Document::new(id),
        }
    }

    /// Add a text field analyzed by the standard analyzer.
    pub fn add_text<S: Into<String>, T: Into<String>>(self, name: S, value: T) -> Result<Self> {
        Ok(self.add_field(TextField::new(name, value)?))
    }

    /// Add an integer field with default options.
    pub fn add_numeric<S: Into<String>>(self, name: S, value: i64) -> Result<Self> {
        Ok(self.add_field(NumericField::new(name, value)?))
    }

    /// Add a date-time field with default options.
    pub fn add_datetime<S: Into<String>>(self, name: S, value: DateTime<Utc>) -> Result<Self> {
        Ok(self.add_field(DateTimeField::new(name, value)?))
    }

    /// Add an already constructed field.
    pub fn add_field<F: Field + 'static>(mut self, field: F) -> Self {
        self.document.add_field(Box::new(field));
        self
    }

    /// Build the final document.
    pub fn build(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::document::field::IndexingOptions;

    #[test]
    fn test_document_builder() {
        let doc = Document::builder("doc1")
            .add_text("title", "Numeric ranges")
            .unwrap()
            .add_numeric("year", 2014)
            .unwrap()
            .add_datetime("created", Utc.with_ymd_and_hms(2014, 8, 1, 0, 0, 0).unwrap())
            .unwrap()
            .build();

        assert_eq!(doc.id(), "doc1");
        assert_eq!(doc.len(), 3);
        assert!(doc.get_field("year").is_some());
        assert!(doc.get_field("missing").is_none());
    }

    #[test]
    fn test_multi_valued_analysis() {
        let doc = Document::builder("doc1")
            .add_numeric("tag_id", 1)
            .unwrap()
            .add_numeric("tag_id", 2)
            .unwrap()
            .add_text("title", "hello")
            .unwrap()
            .build();

        assert_eq!(doc.get_fields("tag_id").count(), 2);

        let analyzed = doc.analyze().unwrap();
        assert_eq!(analyzed.len(), 2);

        let tags = analyzed.iter().find(|a| a.name == "tag_id").unwrap();
        assert_eq!(tags.length, 32);
        // 1 and 2 share every bucket from shift 4 upward.
        assert_eq!(tags.frequencies.len(), 17);
    }

    #[test]
    fn test_stored_values_and_unindexed_fields() {
        let doc = Document::builder("doc1")
            .add_field(
                NumericField::with_options("price", 1999, IndexingOptions::STORE).unwrap(),
            )
            .add_numeric("qty", 3)
            .unwrap()
            .build();

        let stored: Vec<(&str, &[u8])> = doc.stored_values().collect();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].0, "price");

        let analyzed = doc.analyze().unwrap();
        assert_eq!(analyzed.len(), 1);
        assert_eq!(analyzed[0].name, "qty");
    }
}

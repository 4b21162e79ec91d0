//! Analysis: tokens, token frequencies, and the text analysis pipeline.
//!
//! Text fields run their value through an [`analyzer::Analyzer`]; numeric and
//! date-time fields emit prefix-coded tokens directly. Either way the result is
//! a list of [`token::Token`]s aggregated into
//! [`frequency::TokenFrequencies`] for the indexer.

pub mod analyzer;
pub mod frequency;
pub mod token;
pub mod tokenizer;

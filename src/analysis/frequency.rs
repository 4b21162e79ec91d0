//! Per-field term frequency aggregation.
//!
//! The indexer does not look at tokens one by one; it looks at the distinct
//! terms of a field together with every location each term occurred at.
//! [`TokenFrequencies`] groups a token stream by identical term bytes.
//!
//! ```
//! use numtrie::analysis::frequency::TokenFrequencies;
//! use numtrie::analysis::token::Token;
//!
//! let tokens = vec![
//!     Token::with_offsets("to", 1, 0, 2),
//!     Token::with_offsets("be", 2, 3, 5),
//!     Token::with_offsets("to", 5, 13, 15),
//! ];
//! let frequencies = TokenFrequencies::from_tokens(tokens);
//! assert_eq!(frequencies.len(), 2);
//! assert_eq!(frequencies.frequency(b"to"), 2);
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenType};

/// Where one occurrence of a term was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLocation {
    pub start_offset: usize,
    pub end_offset: usize,
    pub position: usize,
}

/// All occurrences of one term within a field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFreq {
    pub term: Vec<u8>,
    pub token_type: TokenType,
    pub locations: Vec<TokenLocation>,
}

impl TokenFreq {
    /// Number of times the term occurred.
    pub fn frequency(&self) -> usize {
        self.locations.len()
    }
}

/// Term frequencies for one analyzed field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenFrequencies {
    terms: AHashMap<Vec<u8>, TokenFreq>,
}

impl TokenFrequencies {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate a token stream.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut frequencies = Self::new();
        for token in tokens {
            frequencies.add(token);
        }
        frequencies
    }

    /// Record one token.
    pub fn add(&mut self, token: Token) {
        let location = TokenLocation {
            start_offset: token.start_offset,
            end_offset: token.end_offset,
            position: token.position,
        };
        self.terms
            .entry(token.term)
            .or_insert_with_key(|term| TokenFreq {
                term: term.clone(),
                token_type: token.token_type,
                locations: Vec::new(),
            })
            .locations
            .push(location);
    }

    /// Fold another table into this one, as for a multi-valued field.
    pub fn merge(&mut self, other: TokenFrequencies) {
        for (term, freq) in other.terms {
            match self.terms.get_mut(&term) {
                Some(existing) => existing.locations.extend(freq.locations),
                None => {
                    self.terms.insert(term, freq);
                }
            }
        }
    }

    /// Occurrence count of `term`, 0 if absent.
    pub fn frequency(&self, term: &[u8]) -> usize {
        self.terms.get(term).map_or(0, TokenFreq::frequency)
    }

    /// Look up the entry for `term`.
    pub fn get(&self, term: &[u8]) -> Option<&TokenFreq> {
        self.terms.get(term)
    }

    /// Whether `term` occurred at all.
    pub fn contains(&self, term: &[u8]) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if no term was recorded.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the distinct terms in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenFreq> {
        self.terms.values()
    }

    /// Distinct terms in byte order.
    pub fn sorted_terms(&self) -> Vec<&[u8]> {
        let mut terms: Vec<&[u8]> = self.terms.keys().map(Vec::as_slice).collect();
        terms.sort_unstable();
        terms
    }

    /// Consume the table, returning its entries in byte order of their terms.
    pub fn into_sorted(self) -> Vec<TokenFreq> {
        let mut freqs: Vec<TokenFreq> = self.terms.into_iter().map(|(_, freq)| freq).collect();
        freqs.sort_unstable_by(|a, b| a.term.cmp(&b.term));
        freqs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_terms_collect_locations() {
        let tokens = vec![
            Token::with_offsets("a", 1, 0, 1),
            Token::with_offsets("b", 2, 2, 3),
            Token::with_offsets("a", 3, 4, 5),
        ];
        let frequencies = TokenFrequencies::from_tokens(tokens);

        assert_eq!(frequencies.len(), 2);
        let a = frequencies.get(b"a").unwrap();
        assert_eq!(a.frequency(), 2);
        assert_eq!(a.locations[1].position, 3);
        assert_eq!(a.locations[1].start_offset, 4);
        assert_eq!(frequencies.frequency(b"b"), 1);
        assert_eq!(frequencies.frequency(b"c"), 0);
    }

    #[test]
    fn test_merge() {
        let mut first = TokenFrequencies::from_tokens(vec![Token::new("x", 1)]);
        let second = TokenFrequencies::from_tokens(vec![Token::new("x", 1), Token::new("y", 2)]);
        first.merge(second);

        assert_eq!(first.frequency(b"x"), 2);
        assert_eq!(first.frequency(b"y"), 1);
        assert_eq!(first.sorted_terms(), vec![b"x".as_slice(), b"y".as_slice()]);
    }

    #[test]
    fn test_empty() {
        let frequencies = TokenFrequencies::from_tokens(Vec::new());
        assert!(frequencies.is_empty());
        assert!(frequencies.into_sorted().is_empty());
    }
}

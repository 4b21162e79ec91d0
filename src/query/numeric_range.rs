//! Numeric range decomposition over prefix-coded terms.
//!
//! A range over domain values is split into a handful of inclusive term
//! ranges, each confined to one shift. Matching a document means finding one
//! of its ladder terms inside one of those term ranges; the term ranges are
//! disjoint, so at most one ladder term of a value can match.
//!
//! ```text
//! value range [lo, hi], step 4:
//!
//!   shift 8   |         [=========]          |   coarse middle
//!   shift 4   |     [==]           [==]      |
//!   shift 0   | [==]                   [=]   |   fine edges
//! ```
//!
//! # Examples
//!
//! ```
//! use numtrie::numeric::ladder::ladder;
//! use numtrie::query::NumericRangeQuery;
//!
//! let query = NumericRangeQuery::new("price", Some(100), Some(10_000));
//! let ranges = query.term_ranges().unwrap();
//!
//! let matches = |value: i64| {
//!     let terms = ladder(value, 4).unwrap();
//!     ranges
//!         .iter()
//!         .any(|range| terms.iter().any(|term| range.contains_term(term.as_bytes())))
//! };
//! assert!(matches(100));
//! assert!(matches(5_000));
//! assert!(!matches(99));
//! assert!(!matches(10_001));
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{NumtrieError, Result};
use crate::numeric::config::NumericConfig;
use crate::numeric::prefix_coded::{MAX_SHIFT, PrefixCoded, decode, encode};
use crate::numeric::sortable::{from_sortable, to_sortable};

/// Bound type for range queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound<T> {
    /// Inclusive bound.
    Included(T),
    /// Exclusive bound.
    Excluded(T),
    /// Unbounded (no limit).
    Unbounded,
}

impl<T: PartialOrd> Bound<T> {
    /// Check if a value satisfies this bound as a lower bound.
    pub fn contains_lower(&self, value: &T) -> bool {
        match self {
            Bound::Included(bound) => value >= bound,
            Bound::Excluded(bound) => value > bound,
            Bound::Unbounded => true,
        }
    }

    /// Check if a value satisfies this bound as an upper bound.
    pub fn contains_upper(&self, value: &T) -> bool {
        match self {
            Bound::Included(bound) => value <= bound,
            Bound::Excluded(bound) => value < bound,
            Bound::Unbounded => true,
        }
    }
}

/// An inclusive range of same-shift terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRange {
    pub shift: u32,
    pub lower: PrefixCoded,
    pub upper: PrefixCoded,
}

impl TermRange {
    /// Whether `term` lies inside this range.
    ///
    /// Both ends share a marker byte, so only terms of the same shift can
    /// compare between them.
    pub fn contains_term(&self, term: &[u8]) -> bool {
        self.lower.as_bytes() <= term && term <= self.upper.as_bytes()
    }

    /// The smallest and largest domain values covered by this range.
    pub fn value_bounds(&self) -> (i64, i64) {
        let low_bits = if self.shift == 0 {
            0
        } else {
            u64::MAX >> (64 - self.shift)
        };
        (
            from_sortable(self.lower.to_sortable()),
            from_sortable(self.upper.to_sortable() | low_bits),
        )
    }
}

/// A query matching numeric or date-time field values within a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericRangeQuery {
    field: String,
    lower_bound: Bound<i64>,
    upper_bound: Bound<i64>,
    config: NumericConfig,
}

impl NumericRangeQuery {
    /// Create a new range query with both bounds inclusive.
    pub fn new<S: Into<String>>(field: S, lower: Option<i64>, upper: Option<i64>) -> Self {
        let lower_bound = lower.map_or(Bound::Unbounded, Bound::Included);
        let upper_bound = upper.map_or(Bound::Unbounded, Bound::Included);
        Self::with_bounds(field, lower_bound, upper_bound)
    }

    /// Create a range query with custom bound types.
    pub fn with_bounds<S: Into<String>>(
        field: S,
        lower_bound: Bound<i64>,
        upper_bound: Bound<i64>,
    ) -> Self {
        NumericRangeQuery {
            field: field.into(),
            lower_bound,
            upper_bound,
            config: NumericConfig::default(),
        }
    }

    /// Create a range query for values greater than or equal to the given value.
    pub fn greater_than_or_equal<S: Into<String>>(field: S, value: i64) -> Self {
        Self::with_bounds(field, Bound::Included(value), Bound::Unbounded)
    }

    /// Create a range query for values greater than the given value.
    pub fn greater_than<S: Into<String>>(field: S, value: i64) -> Self {
        Self::with_bounds(field, Bound::Excluded(value), Bound::Unbounded)
    }

    /// Create a range query for values less than or equal to the given value.
    pub fn less_than_or_equal<S: Into<String>>(field: S, value: i64) -> Self {
        Self::with_bounds(field, Bound::Unbounded, Bound::Included(value))
    }

    /// Create a range query for values less than the given value.
    pub fn less_than<S: Into<String>>(field: S, value: i64) -> Self {
        Self::with_bounds(field, Bound::Unbounded, Bound::Excluded(value))
    }

    /// Use the precision settings the field was indexed with.
    pub fn with_config(mut self, config: NumericConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Shorthand for [`with_config`](Self::with_config) with only a step.
    pub fn with_precision_step(self, precision_step: u32) -> Result<Self> {
        let config = NumericConfig {
            precision_step,
            ..self.config
        };
        self.with_config(config)
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the lower bound.
    pub fn lower_bound(&self) -> &Bound<i64> {
        &self.lower_bound
    }

    /// Get the upper bound.
    pub fn upper_bound(&self) -> &Bound<i64> {
        &self.upper_bound
    }

    /// Get the precision settings.
    pub fn config(&self) -> &NumericConfig {
        &self.config
    }

    /// The inclusive domain interval, or `None` if the range is empty.
    pub fn inclusive_bounds(&self) -> Option<(i64, i64)> {
        let lower = match self.lower_bound {
            Bound::Included(v) => v,
            Bound::Excluded(v) => v.checked_add(1)?,
            Bound::Unbounded => i64::MIN,
        };
        let upper = match self.upper_bound {
            Bound::Included(v) => v,
            Bound::Excluded(v) => v.checked_sub(1)?,
            Bound::Unbounded => i64::MAX,
        };
        (lower <= upper).then_some((lower, upper))
    }

    /// Check if a domain value falls inside the range.
    pub fn contains(&self, value: i64) -> bool {
        self.lower_bound.contains_lower(&value) && self.upper_bound.contains_upper(&value)
    }

    /// Split the range into per-shift term ranges.
    ///
    /// An empty range yields no term ranges.
    pub fn term_ranges(&self) -> Result<Vec<TermRange>> {
        let Some((lower, upper)) = self.inclusive_bounds() else {
            debug!("range on {} is empty", self.field);
            return Ok(Vec::new());
        };

        let ranges = split_range(
            to_sortable(lower),
            to_sortable(upper),
            self.config.precision_step,
            self.config.max_shift,
        )?;
        debug!(
            "split range [{lower}, {upper}] on {} into {} term ranges",
            self.field,
            ranges.len()
        );
        Ok(ranges)
    }

    /// Check a stored full-precision value against the range.
    ///
    /// Fails with [`NumtrieError::MalformedTerm`] if the value cannot be
    /// decoded or is not a shift-0 term, so corruption never reads as a miss.
    pub fn matches_value(&self, stored: &[u8]) -> Result<bool> {
        let (value, shift) = decode(stored)?;
        if shift != 0 {
            return Err(NumtrieError::malformed_term(format!(
                "stored value for {} has shift {shift}, expected full precision",
                self.field
            )));
        }
        Ok(self.contains(value))
    }

    /// Keep the ids whose stored values fall inside the range.
    ///
    /// Aborts on the first undecodable value.
    pub fn filter_values<'a, D, I>(&self, values: I) -> Result<Vec<D>>
    where
        I: IntoIterator<Item = (D, &'a [u8])>,
    {
        let mut hits = Vec::new();
        for (id, stored) in values {
            if self.matches_value(stored)? {
                hits.push(id);
            }
        }
        Ok(hits)
    }
}

/// Split the inclusive sortable interval `[min, max]` into term ranges.
///
/// Only shifts `0, step, 2 * step, ...` below `max_shift` are used, matching
/// what the ladder generator indexes under the same settings. A `max_shift`
/// above 64 is treated as 64, as the ladder does.
pub fn split_range(
    mut min: u64,
    mut max: u64,
    step: u32,
    max_shift: u32,
) -> Result<Vec<TermRange>> {
    if step == 0 {
        return Err(NumtrieError::invalid_config(
            "precision step must be at least 1",
        ));
    }

    let max_shift = max_shift.min(MAX_SHIFT);
    let mut ranges = Vec::new();
    if min > max {
        return Ok(ranges);
    }

    let mut shift = 0u32;
    loop {
        if shift.saturating_add(step) >= max_shift {
            ranges.push(term_range(min, max, shift)?);
            break;
        }

        let mask = ((1u64 << step) - 1) << shift;
        let diff = 1u64 << (shift + step);
        let has_lower = min & mask != 0;
        let has_upper = max & mask != mask;
        let next_min = (if has_lower { min.wrapping_add(diff) } else { min }) & !mask;
        let next_max = (if has_upper { max.wrapping_sub(diff) } else { max }) & !mask;
        let lower_wrapped = next_min < min;
        let upper_wrapped = next_max > max;

        if next_min > next_max || lower_wrapped || upper_wrapped {
            ranges.push(term_range(min, max, shift)?);
            break;
        }

        if has_lower {
            ranges.push(term_range(min, min | mask, shift)?);
        }
        if has_upper {
            ranges.push(term_range(max & !mask, max, shift)?);
        }

        min = next_min;
        max = next_max;
        shift += step;
    }

    Ok(ranges)
}

fn term_range(min: u64, max: u64, shift: u32) -> Result<TermRange> {
    Ok(TermRange {
        shift,
        lower: encode(min, shift)?,
        upper: encode(max, shift)?,
    })
}

//! Precision ladder generation.
//!
//! A ladder is the list of prefix-coded terms for one value at shifts
//! `0, step, 2 * step, ...`. The shift-0 term always comes first. Generation
//! ends when the codec reports [`NumtrieError::UnsupportedShift`] or the
//! configured `max_shift` is reached; both are normal termination.
//!
//! ```
//! use numtrie::numeric::ladder::ladder;
//!
//! let terms = ladder(1_700_000_000, 4).unwrap();
//! assert_eq!(terms.len(), 16);
//! assert_eq!(terms[0].shift(), 0);
//! assert_eq!(terms[15].shift(), 60);
//! ```

use log::trace;

use crate::error::{NumtrieError, Result};
use crate::numeric::config::NumericConfig;
use crate::numeric::prefix_coded::{MAX_SHIFT, PrefixCoded, encode};
use crate::numeric::sortable::to_sortable;

/// Iterator over the ladder of one value.
#[derive(Debug, Clone)]
pub struct LadderIter {
    sortable: u64,
    step: u32,
    max_shift: u32,
    next_shift: Option<u32>,
}

impl LadderIter {
    /// Start a ladder for `value`. `step` must be at least 1; a `max_shift`
    /// above 64 is treated as 64.
    pub fn new(value: i64, step: u32, max_shift: u32) -> Result<Self> {
        if step == 0 {
            return Err(NumtrieError::invalid_config(
                "precision step must be at least 1",
            ));
        }
        Ok(LadderIter {
            sortable: to_sortable(value),
            step,
            max_shift: max_shift.min(MAX_SHIFT),
            next_shift: Some(0),
        })
    }

    /// Start a ladder using a field's numeric config.
    pub fn with_config(value: i64, config: &NumericConfig) -> Result<Self> {
        config.validate()?;
        Self::new(value, config.precision_step, config.max_shift)
    }

    fn finish(&mut self) -> Option<Result<PrefixCoded>> {
        self.next_shift = None;
        None
    }
}

impl Iterator for LadderIter {
    type Item = Result<PrefixCoded>;

    fn next(&mut self) -> Option<Self::Item> {
        let shift = self.next_shift?;

        let term = match encode(self.sortable, shift) {
            Ok(term) => term,
            Err(NumtrieError::UnsupportedShift { shift }) => {
                trace!("ladder exhausted at shift {shift}");
                return self.finish();
            }
            Err(e) => {
                self.next_shift = None;
                return Some(Err(e));
            }
        };

        if shift >= self.max_shift && shift > 0 {
            trace!("ladder capped at shift {shift}");
            return self.finish();
        }

        self.next_shift = shift.checked_add(self.step);
        Some(Ok(term))
    }
}

/// Generate the full ladder for `value` at the given step.
pub fn ladder(value: i64, step: u32) -> Result<Vec<PrefixCoded>> {
    ladder_with_max_shift(value, step, MAX_SHIFT)
}

/// Generate the ladder for `value`, stopping before `max_shift`.
///
/// The shift-0 term is always included, even when `max_shift` is 0.
pub fn ladder_with_max_shift(value: i64, step: u32, max_shift: u32) -> Result<Vec<PrefixCoded>> {
    LadderIter::new(value, step, max_shift)?.collect()
}

/// Generate the ladder for `value` under a field's numeric config.
pub fn ladder_with_config(value: i64, config: &NumericConfig) -> Result<Vec<PrefixCoded>> {
    LadderIter::with_config(value, config)?.collect()
}

/// Number of terms a ladder with `step` produces for any value.
pub fn ladder_len(step: u32) -> usize {
    if step == 0 {
        return 0;
    }
    MAX_SHIFT.div_ceil(step) as usize
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::numeric::prefix_coded::decode;

    #[test]
    fn test_default_step_produces_sixteen_terms() {
        for value in [i64::MIN, -1, 0, 1, 1_409_000_000_000_000_000, i64::MAX] {
            let terms = ladder(value, 4).unwrap();
            assert_eq!(terms.len(), 16);
            assert_eq!(terms.len(), ladder_len(4));

            let shifts: Vec<u32> = terms.iter().map(|t| t.shift()).collect();
            let expected: Vec<u32> = (0..16).map(|i| i * 4).collect();
            assert_eq!(shifts, expected);
        }
    }

    #[test]
    fn test_first_term_is_canonical() {
        let value = -987_654_321;
        let terms = ladder(value, 4).unwrap();
        assert_eq!(terms[0], PrefixCoded::full_precision(value));
        assert_eq!(decode(terms[0].as_bytes()).unwrap(), (value, 0));
    }

    #[test]
    fn test_terms_are_distinct() {
        for step in [1, 3, 4, 7, 8, 16] {
            let terms = ladder(42, step).unwrap();
            let unique: HashSet<&[u8]> = terms.iter().map(|t| t.as_bytes()).collect();
            assert_eq!(unique.len(), terms.len(), "step {step}");
        }
    }

    #[test]
    fn test_uneven_steps() {
        assert_eq!(ladder(5, 1).unwrap().len(), 64);
        assert_eq!(ladder(5, 6).unwrap().len(), 11);
        assert_eq!(ladder(5, 63).unwrap().len(), 2);
        assert_eq!(ladder(5, 64).unwrap().len(), 1);
        assert_eq!(ladder(5, 100).unwrap().len(), 1);
        assert_eq!(ladder_len(6), 11);
    }

    #[test]
    fn test_max_shift_cap() {
        let terms = ladder_with_max_shift(5, 4, 32).unwrap();
        assert_eq!(terms.len(), 8);
        assert_eq!(terms.last().unwrap().shift(), 28);

        let terms = ladder_with_max_shift(5, 4, 0).unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].shift(), 0);
    }

    #[test]
    fn test_oversized_max_shift_is_clamped() {
        let iter = LadderIter::new(5, 4, 100).unwrap();
        assert_eq!(iter.max_shift, MAX_SHIFT);

        let terms = ladder_with_max_shift(5, 4, 100).unwrap();
        assert_eq!(terms, ladder(5, 4).unwrap());
        assert_eq!(terms.last().unwrap().shift(), 60);
    }

    #[test]
    fn test_zero_step_rejected() {
        assert!(matches!(ladder(1, 0), Err(NumtrieError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_ladder_matches_len() {
        let config = NumericConfig::with_precision_step(8).unwrap();
        let terms = ladder_with_config(-3, &config).unwrap();
        assert_eq!(terms.len(), config.ladder_len());
    }

    #[test]
    fn test_iterator_is_restartable() {
        let iter = LadderIter::new(77, 4, 64).unwrap();
        let first: Vec<_> = iter.clone().collect::<Result<_>>().unwrap();
        let second: Vec<_> = iter.collect::<Result<_>>().unwrap();
        assert_eq!(first, second);
    }
}

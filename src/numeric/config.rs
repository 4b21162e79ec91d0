//! Configuration for trie-encoded numeric fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NumtrieError, Result};
use crate::numeric::prefix_coded::MAX_SHIFT;

/// Default distance between consecutive shifts of a ladder.
pub const DEFAULT_PRECISION_STEP: u32 = 4;

/// Precision settings shared by field construction and range decomposition.
///
/// A smaller `precision_step` indexes more terms per value but lets a range be
/// covered by fewer terms at query time. Indexing and querying must agree on
/// the step for the same field.
///
/// # Example
///
/// ```
/// use numtrie::numeric::config::NumericConfig;
///
/// let config = NumericConfig::default();
/// assert_eq!(config.precision_step, 4);
///
/// let coarse = NumericConfig::with_precision_step(8).unwrap();
/// assert_eq!(coarse.ladder_len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericConfig {
    /// Shift increment between ladder entries, in [1, 64].
    pub precision_step: u32,

    /// Exclusive upper bound on generated shifts, in [1, 64].
    pub max_shift: u32,
}

impl Default for NumericConfig {
    fn default() -> Self {
        NumericConfig {
            precision_step: DEFAULT_PRECISION_STEP,
            max_shift: MAX_SHIFT,
        }
    }
}

impl NumericConfig {
    /// Build a validated config with the given step and no shift cap.
    pub fn with_precision_step(precision_step: u32) -> Result<Self> {
        let config = NumericConfig {
            precision_step,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the ladder generator depends on.
    pub fn validate(&self) -> Result<()> {
        if self.precision_step == 0 || self.precision_step > MAX_SHIFT {
            return Err(NumtrieError::invalid_config(format!(
                "precision_step must be in [1, {MAX_SHIFT}], got {}",
                self.precision_step
            )));
        }
        if self.max_shift == 0 || self.max_shift > MAX_SHIFT {
            return Err(NumtrieError::invalid_config(format!(
                "max_shift must be in [1, {MAX_SHIFT}], got {}",
                self.max_shift
            )));
        }
        Ok(())
    }

    /// Number of terms one value expands to under this config.
    pub fn ladder_len(&self) -> usize {
        self.max_shift.div_ceil(self.precision_step) as usize
    }

    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: NumericConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NumericConfig::default();
        assert_eq!(config.precision_step, DEFAULT_PRECISION_STEP);
        assert_eq!(config.max_shift, 64);
        assert!(config.validate().is_ok());
        assert_eq!(config.ladder_len(), 16);
    }

    #[test]
    fn test_ladder_len() {
        assert_eq!(NumericConfig::with_precision_step(1).unwrap().ladder_len(), 64);
        assert_eq!(NumericConfig::with_precision_step(6).unwrap().ladder_len(), 11);
        assert_eq!(NumericConfig::with_precision_step(64).unwrap().ladder_len(), 1);

        let capped = NumericConfig {
            precision_step: 4,
            max_shift: 32,
        };
        assert_eq!(capped.ladder_len(), 8);
    }

    #[test]
    fn test_invalid_config() {
        assert!(NumericConfig::with_precision_step(0).is_err());
        assert!(NumericConfig::with_precision_step(65).is_err());

        let config = NumericConfig {
            precision_step: 4,
            max_shift: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(NumtrieError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let config = NumericConfig::from_json(r#"{"precision_step": 8}"#).unwrap();
        assert_eq!(config.precision_step, 8);
        assert_eq!(config.max_shift, 64);

        assert!(NumericConfig::from_json(r#"{"precision_step": 0}"#).is_err());
        assert!(matches!(
            NumericConfig::from_json("not json"),
            Err(NumtrieError::Json(_))
        ));
    }
}

use crate::error::{Result, TimesplitError};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Single fold: contiguous train indices immediately followed by contiguous
/// test indices. `test.start == train.end` for every emitted split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub train: Range<usize>,
    pub test: Range<usize>,
}

impl Split {
    /// Train indices as positional selectors into the caller's dataset.
    pub fn train_indices(&self) -> Vec<usize> {
        self.train.clone().collect()
    }

    /// Test indices as positional selectors into the caller's dataset.
    pub fn test_indices(&self) -> Vec<usize> {
        self.test.clone().collect()
    }

    pub fn train_len(&self) -> usize {
        self.train.len()
    }

    pub fn test_len(&self) -> usize {
        self.test.len()
    }
}

/// Configuration for the rolling (fixed-size sliding window) policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingConfig {
    pub train_size: usize,
    pub test_size: usize,
    pub step_size: usize,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            train_size: 30,
            test_size: 10,
            step_size: 10,
        }
    }
}

impl RollingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.train_size == 0 {
            return Err(TimesplitError::Configuration(
                "Train size must be positive".to_string(),
            ));
        }
        if self.test_size == 0 {
            return Err(TimesplitError::Configuration(
                "Test size must be positive".to_string(),
            ));
        }
        if self.step_size == 0 {
            return Err(TimesplitError::Configuration(
                "Step size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the expanding (anchored, growing window) policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandingConfig {
    pub test_size: usize,
    pub step_size: usize,
}

impl Default for ExpandingConfig {
    fn default() -> Self {
        Self {
            test_size: 1,
            step_size: 1,
        }
    }
}

impl ExpandingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.test_size == 0 {
            return Err(TimesplitError::Configuration(
                "Test size must be positive".to_string(),
            ));
        }
        if self.step_size == 0 {
            return Err(TimesplitError::Configuration(
                "Step size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_indices_are_contiguous() {
        let split = Split {
            train: 2..5,
            test: 5..7,
        };

        assert_eq!(split.train_indices(), vec![2, 3, 4]);
        assert_eq!(split.test_indices(), vec![5, 6]);
        assert_eq!(split.train.end, split.test.start);
    }

    #[test]
    fn test_rolling_config_rejects_zero_fields() {
        let bad = RollingConfig {
            train_size: 3,
            test_size: 0,
            step_size: 1,
        };
        assert!(bad.validate().is_err());

        let bad = RollingConfig {
            train_size: 0,
            test_size: 2,
            step_size: 1,
        };
        assert!(bad.validate().is_err());

        let bad = RollingConfig {
            train_size: 3,
            test_size: 2,
            step_size: 0,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_expanding_config_rejects_zero_fields() {
        let bad = ExpandingConfig {
            test_size: 0,
            step_size: 1,
        };
        assert!(bad.validate().is_err());

        let bad = ExpandingConfig {
            test_size: 1,
            step_size: 0,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_default_configs_are_valid() {
        assert!(RollingConfig::default().validate().is_ok());
        assert!(ExpandingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_split_serde_round_trip() {
        let split = Split {
            train: 0..3,
            test: 3..5,
        };

        let json = serde_json::to_string(&split).unwrap();
        let back: Split = serde_json::from_str(&json).unwrap();
        assert_eq!(split, back);
    }
}

use super::types::{ExpandingConfig, Split};
use crate::error::Result;

/// Training window anchored at the first observation, growing with every
/// fold, paired with a fixed-size test window that slides forward by
/// `step_size` positions. Models an estimator accumulating all history.
pub struct ExpandingSplitter {
    config: ExpandingConfig,
}

impl ExpandingSplitter {
    pub fn new(test_size: usize, step_size: usize) -> Result<Self> {
        Self::from_config(ExpandingConfig {
            test_size,
            step_size,
        })
    }

    pub fn from_config(config: ExpandingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExpandingConfig {
        &self.config
    }

    /// Lazily produce folds over a dataset of length `n`. Each call starts a
    /// fresh cursor, so iterating twice yields identical sequences.
    pub fn split(&self, n: usize) -> ExpandingSplits {
        if n < self.config.test_size + 1 {
            log::debug!(
                "expanding split: dataset length {} below minimum window {}, no folds",
                n,
                self.config.test_size + 1
            );
        }
        ExpandingSplits {
            config: self.config,
            n,
            test_start: 0,
        }
    }
}

pub struct ExpandingSplits {
    config: ExpandingConfig,
    n: usize,
    // Candidate test-start position; the fold's test window begins one past
    // it, at test_start + 1.
    test_start: usize,
}

impl Iterator for ExpandingSplits {
    type Item = Split;

    fn next(&mut self) -> Option<Split> {
        let end = self.n.checked_sub(self.config.test_size)?;
        while self.test_start < end {
            let t = self.test_start;
            self.test_start += self.config.step_size;

            let test_end = t + 1 + self.config.test_size;
            if test_end > self.n {
                // A candidate whose test window overruns the dataset is
                // dropped, not truncated; later candidates are still tried.
                log::debug!(
                    "expanding split: skipping candidate test start {}, window exceeds {}",
                    t,
                    self.n
                );
                continue;
            }

            return Some(Split {
                train: 0..t + 1,
                test: t + 1..test_end,
            });
        }
        None
    }
}

impl std::iter::FusedIterator for ExpandingSplits {}

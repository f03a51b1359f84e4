use super::types::{RollingConfig, Split};
use crate::error::Result;

/// Fixed-size training window that slides forward by `step_size` positions
/// per fold. Models a frequently retrained model with bounded history.
pub struct RollingSplitter {
    config: RollingConfig,
}

impl RollingSplitter {
    pub fn new(train_size: usize, test_size: usize, step_size: usize) -> Result<Self> {
        Self::from_config(RollingConfig {
            train_size,
            test_size,
            step_size,
        })
    }

    pub fn from_config(config: RollingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RollingConfig {
        &self.config
    }

    /// Lazily produce folds over a dataset of length `n`. Each call starts a
    /// fresh cursor, so iterating twice yields identical sequences.
    pub fn split(&self, n: usize) -> RollingSplits {
        let window = self.config.train_size + self.config.test_size;
        if n < window {
            log::debug!(
                "rolling split: dataset length {} below minimum window {}, no folds",
                n,
                window
            );
        }
        RollingSplits {
            config: self.config,
            n,
            start: 0,
        }
    }
}

pub struct RollingSplits {
    config: RollingConfig,
    n: usize,
    start: usize,
}

impl Iterator for RollingSplits {
    type Item = Split;

    fn next(&mut self) -> Option<Split> {
        let train_end = self.start + self.config.train_size;
        let test_end = train_end + self.config.test_size;
        if test_end > self.n {
            return None;
        }

        let split = Split {
            train: self.start..train_end,
            test: train_end..test_end,
        };
        self.start += self.config.step_size;
        Some(split)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for RollingSplits {
    fn len(&self) -> usize {
        let window = self.config.train_size + self.config.test_size;
        match self.n.checked_sub(self.start + window) {
            Some(room) => room / self.config.step_size + 1,
            None => 0,
        }
    }
}

impl std::iter::FusedIterator for RollingSplits {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_known_sequence() {
        // train=3, test=2, step=2 over 10 samples
        let splitter = RollingSplitter::new(3, 2, 2).unwrap();
        let splits: Vec<Split> = splitter.split(10).collect();

        assert_eq!(splits.len(), 3);
        assert_eq!(splits[0].train_indices(), vec![0, 1, 2]);
        assert_eq!(splits[0].test_indices(), vec![3, 4]);
        assert_eq!(splits[1].train_indices(), vec![2, 3, 4]);
        assert_eq!(splits[1].test_indices(), vec![5, 6]);
        assert_eq!(splits[2].train_indices(), vec![4, 5, 6]);
        assert_eq!(splits[2].test_indices(), vec![7, 8]);
    }

    #[test]
    fn test_rolling_no_partial_windows() {
        let splitter = RollingSplitter::new(3, 2, 2).unwrap();
        for split in splitter.split(10) {
            assert_eq!(split.train_len(), 3);
            assert_eq!(split.test_len(), 2);
            assert!(split.test.end <= 10);
        }
    }

    #[test]
    fn test_rolling_train_starts_advance_by_step() {
        let splitter = RollingSplitter::new(5, 3, 4).unwrap();
        let splits: Vec<Split> = splitter.split(50).collect();

        for pair in splits.windows(2) {
            assert_eq!(pair[1].train.start - pair[0].train.start, 4);
        }
    }

    #[test]
    fn test_rolling_dataset_too_small_is_empty() {
        let splitter = RollingSplitter::new(3, 2, 1).unwrap();
        assert_eq!(splitter.split(4).count(), 0);
        // Exact fit produces one fold
        assert_eq!(splitter.split(5).count(), 1);
    }

    #[test]
    fn test_rolling_exact_size_hint() {
        let splitter = RollingSplitter::new(3, 2, 2).unwrap();
        let mut splits = splitter.split(10);
        assert_eq!(splits.len(), 3);
        splits.next();
        assert_eq!(splits.len(), 2);
        assert_eq!(splits.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_rolling_restartable() {
        let splitter = RollingSplitter::new(4, 2, 3).unwrap();
        let first: Vec<Split> = splitter.split(20).collect();
        let second: Vec<Split> = splitter.split(20).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rolling_rejects_zero_config() {
        assert!(RollingSplitter::new(3, 0, 2).is_err());
        assert!(RollingSplitter::new(0, 2, 2).is_err());
        assert!(RollingSplitter::new(3, 2, 0).is_err());
    }
}

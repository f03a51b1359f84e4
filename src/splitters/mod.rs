pub mod expanding;
pub mod rolling;
pub mod types;

pub use expanding::{ExpandingSplits, ExpandingSplitter};
pub use rolling::{RollingSplits, RollingSplitter};
pub use types::{ExpandingConfig, RollingConfig, Split};

use crate::error::Result;

/// Windowing policy selected at construction time. Both variants validate
/// their configuration up front and produce folds lazily through [`Splits`].
pub enum Splitter {
    Rolling(RollingSplitter),
    Expanding(ExpandingSplitter),
}

impl Splitter {
    pub fn rolling(train_size: usize, test_size: usize, step_size: usize) -> Result<Self> {
        Ok(Self::Rolling(RollingSplitter::new(
            train_size, test_size, step_size,
        )?))
    }

    pub fn expanding(test_size: usize, step_size: usize) -> Result<Self> {
        Ok(Self::Expanding(ExpandingSplitter::new(
            test_size, step_size,
        )?))
    }

    pub fn split(&self, n: usize) -> Splits {
        match self {
            Self::Rolling(s) => Splits::Rolling(s.split(n)),
            Self::Expanding(s) => Splits::Expanding(s.split(n)),
        }
    }
}

/// Fold iterator for either policy; static dispatch, no boxing.
pub enum Splits {
    Rolling(RollingSplits),
    Expanding(ExpandingSplits),
}

impl Iterator for Splits {
    type Item = Split;

    fn next(&mut self) -> Option<Split> {
        match self {
            Self::Rolling(it) => it.next(),
            Self::Expanding(it) => it.next(),
        }
    }
}

impl std::iter::FusedIterator for Splits {}

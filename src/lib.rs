//! Time-series cross-validation splitting.
//!
//! Produces (train, test) index folds over an ordered dataset under two
//! windowing policies: a fixed-size rolling window and an anchored expanding
//! window. The splitters are purely positional and never read element values.

pub mod config;
pub mod error;
pub mod splitters;

pub use error::{Result, TimesplitError};
pub use splitters::{
    ExpandingConfig, ExpandingSplitter, RollingConfig, RollingSplitter, Split, Splitter,
};

//! Analysis modules.
//!
//! Aggregation of tokenized words into word length statistics.

pub mod aggregator;

pub use aggregator::*;

//! wordstats - word length statistics for text files.
//!
//! Lines of text go through the [`tokenizer`], which decides what counts
//! as a word, and the resulting word lengths are folded into a
//! [`analysis::WordAggregator`]. [`counter::WordCounter`] wires the two
//! together over a file and [`report`] renders the result.
//!
//! ```
//! use wordstats::counter::WordCounter;
//!
//! let mut counter = WordCounter::new();
//! counter.process_lines(["Hello world & good morning. The date is 18/05/2016"]);
//!
//! assert_eq!(counter.word_count(), 9);
//! assert_eq!(counter.average_word_length().to_string(), "4.556");
//! assert_eq!(counter.highest_count(), 2);
//! assert_eq!(counter.most_frequent_lengths_string(), "4 & 5");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod models;
pub mod report;
pub mod tokenizer;

pub use error::{Result, WordStatsError};

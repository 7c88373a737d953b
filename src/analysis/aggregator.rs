//! Word length aggregation and statistics.
//!
//! This module folds word lengths into running totals and a length
//! histogram, and derives the average and modal lengths from them.

use crate::models::{AggregateStats, AverageLength, LengthHistogram};
use crate::tokenizer::word_length;

/// Lifecycle of a [`WordAggregator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregatorState {
    /// No words recorded since construction or the last reset.
    Empty,
    /// Words recorded, statistics not yet cached.
    Accumulating,
    /// Statistics computed and cached.
    Finalized,
}

/// Running word statistics.
///
/// Words are not stored, only their lengths. Recording a word after
/// [`finalize`](Self::finalize) drops the cached statistics; the next read
/// recomputes them.
#[derive(Debug, Clone, Default)]
pub struct WordAggregator {
    histogram: LengthHistogram,
    word_count: usize,
    total_length: usize,
    cached: Option<AggregateStats>,
}

impl WordAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the histogram, totals and cached statistics.
    pub fn reset(&mut self) {
        self.histogram.clear();
        self.word_count = 0;
        self.total_length = 0;
        self.cached = None;
    }

    /// Records one word of `length` characters. Zero is ignored.
    pub fn add_word(&mut self, length: usize) {
        if length == 0 {
            return;
        }
        self.histogram.record(length);
        self.word_count += 1;
        self.total_length += length;
        self.cached = None;
    }

    /// Records every word yielded by `words`.
    pub fn add_words<'a, I>(&mut self, words: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for word in words {
            self.add_word(word_length(word));
        }
    }

    /// Adds the counts of another aggregator, e.g. one that processed a
    /// separate chunk of the same source.
    pub fn merge(&mut self, other: &WordAggregator) {
        self.histogram.merge(&other.histogram);
        self.word_count += other.word_count;
        self.total_length += other.total_length;
        self.cached = None;
    }

    /// Computes and caches the derived statistics.
    pub fn finalize(&mut self) -> &AggregateStats {
        let stats = self.compute();
        self.cached.insert(stats)
    }

    pub fn state(&self) -> AggregatorState {
        if self.cached.is_some() {
            AggregatorState::Finalized
        } else if self.word_count == 0 {
            AggregatorState::Empty
        } else {
            AggregatorState::Accumulating
        }
    }

    /// Derived statistics; the cached copy when finalized.
    pub fn stats(&self) -> AggregateStats {
        match self.cached {
            Some(ref stats) => stats.clone(),
            None => self.compute(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Average word length rounded half-up to three decimals, 0 when empty.
    pub fn average_word_length(&self) -> AverageLength {
        match self.cached {
            Some(ref stats) => stats.average_length,
            None => AverageLength::from_ratio(self.total_length, self.word_count),
        }
    }

    /// Highest number of words sharing one length, 0 when empty.
    pub fn highest_count(&self) -> usize {
        match self.cached {
            Some(ref stats) => stats.modal_count,
            None => self.histogram.max_count(),
        }
    }

    /// Lengths reaching the highest count, ascending.
    pub fn modal_lengths(&self) -> Vec<usize> {
        match self.cached {
            Some(ref stats) => stats.modal_lengths.clone(),
            None => self
                .histogram
                .lengths_with_count(self.histogram.max_count()),
        }
    }

    /// Modal lengths joined with `" & "`, empty when there are no words.
    pub fn modal_lengths_string(&self) -> String {
        match self.cached {
            Some(ref stats) => stats.modal_lengths_string(),
            None => self.compute().modal_lengths_string(),
        }
    }

    pub fn histogram(&self) -> &LengthHistogram {
        &self.histogram
    }

    fn compute(&self) -> AggregateStats {
        AggregateStats::from_histogram(&self.histogram, self.word_count, self.total_length)
    }
}

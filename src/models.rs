//! Data models for word statistics.
//!
//! This module contains the core data structures shared by the
//! aggregator, the file counter and the report generator.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Delimiter placed between modal lengths when rendered as text.
pub const MODAL_LENGTH_DELIMITER: &str = " & ";

/// Mapping from word length to the number of words of that length.
///
/// Keys and values are always positive: a length is only present once a
/// word of that length has been recorded. Iteration is ascending by length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LengthHistogram {
    counts: BTreeMap<usize, usize>,
}

impl LengthHistogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one word of the given length. Zero lengths are ignored.
    pub fn record(&mut self, length: usize) {
        if length == 0 {
            return;
        }
        *self.counts.entry(length).or_insert(0) += 1;
    }

    /// Number of words recorded with the given length, if any.
    pub fn get(&self, length: usize) -> Option<usize> {
        self.counts.get(&length).copied()
    }

    /// Number of distinct lengths present.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(length, count)` pairs in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&length, &count)| (length, count))
    }

    /// Sum of all counts.
    pub fn total_words(&self) -> usize {
        self.counts.values().sum()
    }

    /// Sum of `length * count` over all entries.
    pub fn total_length(&self) -> usize {
        self.iter().map(|(length, count)| length * count).sum()
    }

    /// Highest count in the histogram, 0 when empty.
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Lengths whose count equals `count`, ascending.
    pub fn lengths_with_count(&self, count: usize) -> Vec<usize> {
        if count == 0 {
            return Vec::new();
        }
        self.iter()
            .filter(|&(_, c)| c == count)
            .map(|(length, _)| length)
            .collect()
    }

    /// Adds every entry of `other` into this histogram.
    pub fn merge(&mut self, other: &LengthHistogram) {
        for (length, count) in other.iter() {
            *self.counts.entry(length).or_insert(0) += count;
        }
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

/// Average word length held as thousandths, rounded half-up.
///
/// Stored as an integer so the three-decimal value is exact and
/// formatting never goes through floating point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AverageLength {
    thousandths: u64,
}

impl AverageLength {
    /// Number of fractional digits kept.
    pub const DECIMAL_PLACES: u32 = 3;

    const SCALE: u128 = 1000;

    /// Computes `total / count` rounded half-up to three decimal places.
    ///
    /// A zero `count` yields zero.
    pub fn from_ratio(total: usize, count: usize) -> Self {
        if count == 0 {
            return Self::default();
        }
        let total = total as u128;
        let count = count as u128;
        // floor(total * SCALE / count + 1/2), kept in integers
        let rounded = (2 * total * Self::SCALE + count) / (2 * count);
        Self {
            thousandths: u64::try_from(rounded).unwrap_or(u64::MAX),
        }
    }

    pub fn from_thousandths(thousandths: u64) -> Self {
        Self { thousandths }
    }

    pub fn thousandths(&self) -> u64 {
        self.thousandths
    }

    pub fn as_f64(&self) -> f64 {
        self.thousandths as f64 / Self::SCALE as f64
    }
}

impl fmt::Display for AverageLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:03}",
            self.thousandths / 1000,
            self.thousandths % 1000
        )
    }
}

impl Serialize for AverageLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Summary statistics derived from a histogram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    /// Total number of words.
    pub word_count: usize,
    /// Total number of characters across all words.
    pub total_length: usize,
    /// Average word length, three decimal places.
    pub average_length: AverageLength,
    /// Highest histogram count (0 when there are no words).
    pub modal_count: usize,
    /// Lengths reaching `modal_count`, ascending.
    pub modal_lengths: Vec<usize>,
}

impl AggregateStats {
    /// Derives the summary for a histogram and its running totals.
    pub fn from_histogram(
        histogram: &LengthHistogram,
        word_count: usize,
        total_length: usize,
    ) -> Self {
        let modal_count = histogram.max_count();

        Self {
            word_count,
            total_length,
            average_length: AverageLength::from_ratio(total_length, word_count),
            modal_count,
            modal_lengths: histogram.lengths_with_count(modal_count),
        }
    }

    /// Modal lengths joined with `" & "`, empty when there are no words.
    pub fn modal_lengths_string(&self) -> String {
        self.modal_lengths
            .iter()
            .map(|length| length.to_string())
            .collect::<Vec<_>>()
            .join(MODAL_LENGTH_DELIMITER)
    }
}

/// Outcome of the last attempt to read a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    /// Nothing has been processed yet.
    #[default]
    Pending,
    /// The source was read to the end.
    Processed,
    /// The source did not exist; statistics are empty.
    NotFound,
}

impl fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceStatus::Pending => write!(f, "pending"),
            SourceStatus::Processed => write!(f, "processed"),
            SourceStatus::NotFound => write!(f, "not found"),
        }
    }
}

/// Metadata about a statistics report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Path of the analyzed file.
    pub source: String,
    /// Outcome of reading the source.
    pub status: SourceStatus,
    /// Number of lines read.
    pub lines_read: usize,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the tool that produced the report.
    pub tool_version: String,
}

/// A complete word statistics report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Metadata about the report.
    pub metadata: ReportMetadata,
    /// Summary statistics.
    pub stats: AggregateStats,
    /// Full length histogram, omitted when not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<LengthHistogram>,
}

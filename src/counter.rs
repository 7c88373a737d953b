//! Word counting over text files.
//!
//! [`WordCounter`] reads a source line by line, tokenizes each line and
//! folds the words into a [`WordAggregator`]. Every run starts from a
//! reset aggregator, so statistics always describe a single source.

use crate::analysis::WordAggregator;
use crate::error::{Result, WordStatsError};
use crate::models::{AggregateStats, AverageLength, LengthHistogram, SourceStatus};
use crate::tokenizer::tokenize_line;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Counts words in a text source.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    aggregator: WordAggregator,
    source: Option<PathBuf>,
    status: SourceStatus,
    lines_read: usize,
}

impl WordCounter {
    /// Creates a counter with empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a counter and processes `path` immediately.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut counter = Self::new();
        counter.process_file(path.as_ref())?;
        Ok(counter)
    }

    /// Reads `path` and replaces the current statistics with its own.
    ///
    /// A missing file is logged and leaves empty statistics. Any other
    /// read failure discards the partial counts and is returned.
    pub fn process_file(&mut self, path: &Path) -> Result<()> {
        self.reset();
        self.source = Some(path.to_path_buf());

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("File: {} not found.", path.display());
                self.status = SourceStatus::NotFound;
                self.finish();
                return Ok(());
            }
            Err(e) => {
                error!("Failed to open {}: {}", path.display(), e);
                return Err(WordStatsError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        debug!("Reading {}", path.display());

        self.consume(BufReader::new(file)).map_err(|source| {
            error!("Failed to read {}: {}", path.display(), source);
            WordStatsError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!(
            "Processed {}: {} words in {} lines",
            path.display(),
            self.word_count(),
            self.lines_read
        );

        Ok(())
    }

    /// Processes every line of `reader`, replacing the current statistics.
    ///
    /// Invalid UTF-8 is replaced rather than rejected. On a read error the
    /// statistics are reset before the error is returned.
    pub fn process_reader<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        self.reset();
        self.consume(reader)
    }

    /// Processes in-memory lines, replacing the current statistics.
    pub fn process_lines<'a, I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.reset();

        for line in lines {
            self.process_line(line);
        }

        self.status = SourceStatus::Processed;
        self.finish();
    }

    /// Clears statistics and source information.
    pub fn reset(&mut self) {
        self.aggregator.reset();
        self.source = None;
        self.status = SourceStatus::Pending;
        self.lines_read = 0;
    }

    fn consume<R: BufRead>(&mut self, mut reader: R) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => self.process_line(&String::from_utf8_lossy(&buf)),
                Err(e) => {
                    self.aggregator.reset();
                    self.lines_read = 0;
                    return Err(e);
                }
            }
        }

        self.status = SourceStatus::Processed;
        self.finish();
        Ok(())
    }

    fn process_line(&mut self, line: &str) {
        self.lines_read += 1;
        self.aggregator.add_words(tokenize_line(line));
    }

    fn finish(&mut self) {
        if self.aggregator.word_count() == 0 {
            info!("No words were found.");
        }
        self.aggregator.finalize();
    }

    /// Total number of words found, 0 if none.
    pub fn word_count(&self) -> usize {
        self.aggregator.word_count()
    }

    /// Average word length to three decimals, 0 if no words were found.
    pub fn average_word_length(&self) -> AverageLength {
        self.aggregator.average_word_length()
    }

    /// Most times any single word length occurred, 0 if no words were found.
    pub fn highest_count(&self) -> usize {
        self.aggregator.highest_count()
    }

    /// Most frequent word lengths joined with `" & "`, empty if none.
    pub fn most_frequent_lengths_string(&self) -> String {
        self.aggregator.modal_lengths_string()
    }

    /// Word length to number of words of that length.
    pub fn histogram(&self) -> &LengthHistogram {
        self.aggregator.histogram()
    }

    pub fn stats(&self) -> AggregateStats {
        self.aggregator.stats()
    }

    pub fn aggregator(&self) -> &WordAggregator {
        &self.aggregator
    }

    /// Path of the last processed file, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn status(&self) -> SourceStatus {
        self.status
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

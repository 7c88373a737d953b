//! Library errors.

use std::io;
use std::path::PathBuf;

/// Errors surfaced while reading sources or configuration.
///
/// A missing input file is not an error; it yields empty statistics.
#[derive(Debug, thiserror::Error)]
pub enum WordStatsError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {}: {}", .path.display(), .source)]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, WordStatsError>;

//! Error types for hilltop-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// An include pattern in the configuration is not a valid glob.
    #[error("invalid include pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying glob error.
        source: globset::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while assembling a corpus from disk.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The corpus root does not exist or is not a directory.
    #[error("corpus root is not a directory: {0}")]
    NotADirectory(Utf8PathBuf),

    /// A filesystem operation failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A corpus file exceeds the configured size limit.
    #[error("corpus file too large: {path} is {size} bytes (limit: {limit} bytes)")]
    FileTooLarge {
        /// Path that exceeded the limit.
        path: Utf8PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },
}

/// Result type alias using [`CorpusError`].
pub type CorpusResult<T> = Result<T, CorpusError>;

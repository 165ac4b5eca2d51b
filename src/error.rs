//! Unified error types for Morpho.
//!
//! Errors only arise at the I/O edge: reading corpus files, parsing JSON,
//! loading configuration. The query core itself (normalizers, indexer,
//! highlighter, searcher) is total over its inputs and never fails; malformed
//! or missing optional fields are treated as empty values.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Morpho operations.
#[derive(Error, Debug)]
pub enum MorphoError {
    /// I/O errors from corpus file operations.
    #[error("corpus error at {path}: {source}")]
    Corpus {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON parsing/serialization errors.
    #[error("serialization error: {message}")]
    Serde { message: String },

    /// Configuration loading errors.
    #[error("config error: {message}")]
    Config { message: String },

    /// A proficiency level with no corpus file behind it.
    #[error("unknown level: {level}")]
    UnknownLevel { level: String },
}

/// A specialized Result type for Morpho operations.
pub type Result<T> = std::result::Result<T, MorphoError>;

impl MorphoError {
    /// Create a corpus error from an I/O error.
    pub fn corpus(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Corpus {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error.
    pub fn serde(message: impl Into<String>) -> Self {
        Self::Serde {
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown-level error.
    pub fn unknown_level(level: impl Into<String>) -> Self {
        Self::UnknownLevel {
            level: level.into(),
        }
    }
}

impl From<io::Error> for MorphoError {
    fn from(err: io::Error) -> Self {
        Self::Corpus {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for MorphoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde {
            message: err.to_string(),
        }
    }
}

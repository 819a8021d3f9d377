//! Error Types
//!
//! Only ingestion, output and argument handling can fail. Boundary matrix
//! construction, reduction and barcode extraction operate on an already
//! ordered filtration and return plain values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the persistence pipeline
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The filtration source could not be opened or read
    #[error("cannot read filtration {path}: {source}")]
    Ingest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single filtration record is not a valid simplex.
    /// Ingestion skips such records instead of failing.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// The barcode sink could not be created or written
    #[error("cannot write barcode {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O on a caller-supplied reader or writer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command line usage
    #[error("configuration error: {message}")]
    Config { message: String },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, PersistenceError>;

impl PersistenceError {
    /// Create a malformed-record error
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the pipeline may continue past this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}

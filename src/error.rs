//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with records in the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed its validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record is stored under this name
    #[error("Contact not found: {0}")]
    RecordNotFound(String),

    /// The record has no phone with this value
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// The record was refused at insertion
    #[error("Contact {name} is not valid: {}", join_reasons(.reasons))]
    InvalidRecord {
        name: String,
        reasons: Vec<ValidationError>,
    },

    /// Chunked iteration was asked for empty batches
    #[error("Chunk size must be greater than zero")]
    InvalidChunkSize,
}

fn join_reasons(reasons: &[ValidationError]) -> String {
    reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur while saving or loading the store file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading, writing or renaming the store file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file is not a JSON object of contacts
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

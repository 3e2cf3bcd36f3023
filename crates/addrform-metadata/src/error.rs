//! Metadata-specific error types.
//!
//! Loading errors carry the dataset path. Lookups through the lenient API
//! never fail; only the strict lookup reports [`MetadataError::UnknownCountry`].

use std::path::PathBuf;

use thiserror::Error;

use addrform_core::AddrFormError;

/// Errors that can occur while loading or querying metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A dataset or address file was not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A dataset key or a lookup argument is not a valid country code.
    #[error("invalid country code: {0}")]
    InvalidCountryCode(#[from] AddrFormError),

    /// Strict lookup of a code with no record.
    #[error("no postal metadata for country {code:?}")]
    UnknownCountry { code: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic serde_json error (not file-specific).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic serde_yaml error (not file-specific).
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;

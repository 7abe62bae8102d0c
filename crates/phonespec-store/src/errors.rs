//! Error handling for phonespec-store
//!
//! Wraps phonespec-core ExError with store-specific helpers

use phonespec_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_entity_id(path.display().to_string())
        .with_message(err.to_string())
}

/// Create a dataset parse error
pub fn dataset_parse(operation: &str, path: &Path, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_entity_id(path.display().to_string())
        .with_message(format!("Invalid dataset JSON: {}", err))
}

/// Create a dataset shape error
pub fn dataset_shape(operation: &str, path: &Path, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidDataset)
        .with_op(operation.to_string())
        .with_entity_id(path.display().to_string())
        .with_message(reason.to_string())
}

/// Create a TOML parse error for config or preference files
pub fn toml_invalid(operation: &str, path: &Path, err: toml::de::Error) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(operation.to_string())
        .with_entity_id(path.display().to_string())
        .with_message(format!("Invalid TOML: {}", err))
}

/// Create a serialization error for files we write
pub fn serialize_failed(operation: &str, message: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(message.to_string())
}

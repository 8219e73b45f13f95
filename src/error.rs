//! Unified application error types
//!
//! Provides a single error type for the entire service surface,
//! suitable for returning across the UI/IPC boundary.

use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing mandatory field or disallowed sort column
    #[error("validation error: {0}")]
    Validation(String),

    /// Bad username/password combination
    #[error("invalid username or password")]
    Authentication,

    /// Operation targeted an id that no longer exists
    #[error("not found: {0}")]
    NotFound(String),

    /// File operation error
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Storage layer error
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Serializable error response for the UI/IPC boundary
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Stable error code for client-side handling
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Authentication => "AUTHENTICATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Io(_) | Self::Csv(_) => "IO_ERROR",
            Self::Storage(StorageError::DuplicateUser(_)) => "DUPLICATE_USER",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

// Implement Serialize for AppError to make it usable as a command error
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        }
        .serialize(serializer)
    }
}

//! Error handling utilities for the Glimpse core.
//!
//! This module provides the `StorageError` type representing failures of the
//! key-value storage capability, together with the convenience alias
//! `StorageResult` for functions that can return these errors.
//!
//! Storage errors never escape the public store operations: the stores catch
//! and log them at the point of the I/O call, keeping the in-memory state
//! authoritative (see the store modules). The error type exists for the
//! storage capability itself and for the JSON helpers built on top of it.

use thiserror::Error;

/// Represents failures of the key-value storage capability.
///
/// # Examples
///
/// Converting from a serde_json error:
/// ```
/// use glimpse_core::errors::StorageError;
///
/// let parse_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
/// let err: StorageError = parse_err.into();
/// assert!(matches!(err, StorageError::Serialization(_)));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O failure in the underlying storage backend.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted record could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other backend-specific failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

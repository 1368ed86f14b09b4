//! Error types for the CMake cache model
//!
//! All modules use `CacheResult<T>` as their return type.

use thiserror::Error;

/// Result type alias for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// All errors that can occur while building or querying a cache
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    // Entry construction errors
    #[error("CMake variable names cannot be empty")]
    InvalidName,

    #[error("Invalid list value: {0}")]
    InvalidList(String),

    #[error("Invalid bool value: {0}")]
    InvalidBoolean(String),

    #[error("Unknown value type \"{0}\"")]
    UnknownType(String),

    // Container errors
    #[error("Cache entry not found: {0}")]
    EntryNotFound(String),

    // Text form errors
    #[error("Malformed cache entry \"{0}\": expected NAME[:TYPE]=VALUE")]
    MalformedEntry(String),
}

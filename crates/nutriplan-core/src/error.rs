//! Error types for the plan store.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

use crate::models::PlanKind;

/// Comprehensive error type for all plan store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The persistence medium was busy or locked past the busy timeout,
    /// could not be opened, or failed at the I/O level
    #[error("Storage unavailable: {message}")]
    StorageUnavailable {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Any other database failure: bad SQL, constraint violations, rows that
    /// do not decode
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No plan of the given kind has this ID
    #[error("{kind} plan with ID {id} not found")]
    PlanNotFound { kind: PlanKind, id: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Plan content could not be encoded or decoded
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification of a [`StoreError`], used by calling layers to pick
/// a response without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input; the request should be rejected
    Validation,
    /// The referenced plan does not exist
    NotFound,
    /// The persistence medium is unreachable or failed
    StorageUnavailable,
    /// Anything else (filesystem setup, serialization, task failures)
    Internal,
}

impl ErrorKind {
    /// HTTP status class conventionally associated with this kind.
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::StorageUnavailable => 503,
            ErrorKind::Internal => 500,
        }
    }
}

/// Builder for creating storage errors with optional context.
pub struct StorageErrorBuilder {
    message: String,
}

impl StorageErrorBuilder {
    /// Create a new storage error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source, classified by its SQLite
    /// result code.
    pub fn with_source(self, source: rusqlite::Error) -> StoreError {
        if is_transient(&source) {
            StoreError::StorageUnavailable {
                message: self.message,
                source,
            }
        } else {
            StoreError::Database {
                message: self.message,
                source,
            }
        }
    }
}

/// Busy, locked, unopenable and I/O failures may clear up on their own.
fn is_transient(error: &rusqlite::Error) -> bool {
    matches!(
        error.sqlite_error_code(),
        Some(
            ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::CannotOpen
                | ErrorCode::SystemIoFailure
        )
    )
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> StoreError {
        StoreError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl StoreError {
    /// Creates a builder for storage errors.
    pub fn storage(message: impl Into<String>) -> StorageErrorBuilder {
        StorageErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a not-found error for a plan of the given kind.
    pub fn not_found(kind: PlanKind, id: impl Into<String>) -> Self {
        StoreError::PlanNotFound {
            kind,
            id: id.into(),
        }
    }

    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::InvalidInput { .. } => ErrorKind::Validation,
            StoreError::PlanNotFound { .. } => ErrorKind::NotFound,
            StoreError::StorageUnavailable { .. } => ErrorKind::StorageUnavailable,
            StoreError::Database { .. }
            | StoreError::FileSystem { .. }
            | StoreError::XdgDirectory(_)
            | StoreError::Serialization { .. }
            | StoreError::Configuration { .. } => ErrorKind::Internal,
        }
    }

    /// Whether retrying the same operation later may succeed.
    ///
    /// Only transient storage conditions qualify: a busy or locked database,
    /// a file that could not be opened, or an I/O failure underneath SQLite.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::StorageUnavailable { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StoreError::storage(message).with_source(e))
    }
}

/// Result type alias for plan store operations
pub type Result<T> = std::result::Result<T, StoreError>;

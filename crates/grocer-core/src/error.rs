//! Error types for the grocer library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Item, ItemStatus, TripId};

/// Comprehensive error type for all grocer operations.
#[derive(Error, Debug)]
pub enum GroceryError {
    /// Invalid input, precondition or status transition. Rejected locally;
    /// no store call was issued.
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Item not found for the given ID
    #[error("Item with ID {id} not found")]
    ItemNotFound { id: String },
    /// The persistence backend failed to complete an operation. The caller
    /// must not assume the mutation happened.
    #[error("Store unavailable during {operation}{}: {reason}", target_suffix(.target))]
    StoreUnavailable {
        operation: &'static str,
        target: Option<String>,
        reason: String,
    },
    /// The trip record was persisted but one or more status resets failed.
    #[error(
        "Trip {trip_id} was recorded but {} item reset(s) failed",
        .failures.len()
    )]
    PartialTrip {
        trip_id: TripId,
        failures: Vec<ResetFailure>,
    },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// HTTP transport or decoding errors from the remote backend
    #[error("HTTP error: {message}: {source}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn target_suffix(target: &Option<String>) -> String {
    target
        .as_ref()
        .map(|t| format!(" of {t}"))
        .unwrap_or_default()
}

/// A status reset that could not be written after a trip was recorded.
///
/// `item` carries the status it should have been written with; `from` is the
/// status it had when the trip finished. A retry only applies while the
/// stored item still has `from`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetFailure {
    pub item: Item,
    pub from: ItemStatus,
    pub reason: String,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> GroceryError {
        GroceryError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct ValidationBuilder {
    field: String,
}

impl ValidationBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GroceryError {
        GroceryError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GroceryError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationBuilder {
        ValidationBuilder::new(field)
    }

    /// Creates a store-unavailable error for an operation on an optional
    /// target.
    pub fn unavailable(
        operation: &'static str,
        target: Option<&str>,
        reason: impl Into<String>,
    ) -> Self {
        Self::StoreUnavailable {
            operation,
            target: target.map(String::from),
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GroceryError::database(message).with_source(e))
    }
}

/// Extension trait for reqwest Results.
pub trait HttpResultExt<T> {
    /// Map HTTP errors with a message.
    fn http_context(self, message: &str) -> Result<T>;
}

impl<T> HttpResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn http_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GroceryError::Http {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Converts backend failures into [`GroceryError::StoreUnavailable`] at the
/// store trait boundary.
///
/// Domain outcomes (validation, not-found, partial trips) pass through
/// untouched; everything else becomes an unavailability error that names the
/// operation and target.
pub trait StoreResultExt<T> {
    fn store_context(self, operation: &'static str, target: Option<&str>) -> Result<T>;
}

impl<T> StoreResultExt<T> for Result<T> {
    fn store_context(self, operation: &'static str, target: Option<&str>) -> Result<T> {
        self.map_err(|e| match e {
            GroceryError::Validation { .. }
            | GroceryError::ItemNotFound { .. }
            | GroceryError::StoreUnavailable { .. }
            | GroceryError::PartialTrip { .. } => e,
            other => GroceryError::unavailable(operation, target, other.to_string()),
        })
    }
}

/// Result type alias for grocer operations
pub type Result<T> = std::result::Result<T, GroceryError>;

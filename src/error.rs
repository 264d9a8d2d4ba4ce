//! Error types for the Overtime Engine.
//!
//! Classification and aggregation never fail. Errors only arise at the
//! boundaries: parsing raw input, loading configuration, and persisting entries.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Overtime Engine.
///
/// # Example
///
/// ```
/// use overtime_engine::error::EngineError;
///
/// let error = EngineError::InvalidTime {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid clock time '25:00': expected HH:MM (24h)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A wall-clock time string was not a valid 24h `HH:MM` value.
    #[error("Invalid clock time '{value}': expected HH:MM (24h)")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },

    /// A date string was not a valid ISO `YYYY-MM-DD` date.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// A month string was not a valid `YYYY-MM` value.
    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The rejected input.
        value: String,
    },

    /// The entry cannot be classified yet because a clock time is missing.
    #[error("Entry for {date} is missing a clock-in or clock-out time")]
    IncompleteEntry {
        /// The ISO date of the entry.
        date: String,
    },

    /// No stored entry has the given id.
    #[error("Entry not found: {id}")]
    EntryNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// The backing key-value store failed or held unreadable data.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },

    /// CSV export could not be written.
    #[error("Export error: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<serde_json::Error> for EngineError {
    fn from(error: serde_json::Error) -> Self {
        EngineError::StorageError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for EngineError {
    fn from(error: csv::Error) -> Self {
        EngineError::ExportError {
            message: error.to_string(),
        }
    }
}

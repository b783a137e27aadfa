//! Trip Processor Library
//!
//! A Rust library for validating, enriching and bulk-loading NYC taxi trip
//! records from delimited CSV sources into a SQLite table.
//!
//! This library provides tools for:
//! - Parsing raw trip records from header-delimited CSV files
//! - Extracting numeric identifiers from free-form id strings
//! - Validating records against a fixed, short-circuiting check order
//! - Deriving great-circle distance, speed and trip classification features
//! - Logging rejected records with structured reason codes for audit
//! - Stable merge sorting of accepted records by numeric key
//! - Replacing the persistent `trips` table with the sorted batch

pub mod config;
pub mod constants;
pub mod sort;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod pipeline;
        pub mod rejection_log;
        pub mod store_loader;
        pub mod trip_validator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AcceptedTrip, RejectedEntry, RejectionReason, Verdict};
pub use config::Config;

/// Result type alias for trip processing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for fatal trip processing failures
///
/// Record-level validation failures are not errors: they are routed to the
/// rejection log as [`RejectedEntry`] values and processing continues. This
/// enum covers the fatal taxonomy only (I/O, storage, configuration).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading or writing error
    #[error("CSV error in file '{file}': {message}")]
    Csv {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// SQLite storage error
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with file context
    pub fn csv(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::Csv {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a storage error with context
    pub fn storage(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Storage {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            file: "unknown".to_string(),
            message: "CSV operation failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        Self::Storage {
            message: "SQLite operation failed".to_string(),
            source: error,
        }
    }
}

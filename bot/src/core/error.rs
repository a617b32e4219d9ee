//! # QClip Error Types
//!
//! File: bot/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the QClip bot. It
//! separates errors the user can recover from (a mistyped reference) from
//! errors that stop the process (a broken dataset or missing configuration).
//!
//! ## Architecture
//!
//! The error system consists of three components:
//! - `QclipError`: A `thiserror` enum covering startup, configuration and transport failures
//! - `LookupError`: The user-facing failures of resolving a typed reference
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! Startup errors (`StartupData`, `StartupDataRow`, `Config`) bubble up to
//! `main`, which prints them and exits with a non-zero status. `LookupError`
//! never leaves the interaction handler: it is turned into a short reply.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if records.is_empty() {
//!     return Err(QclipError::StartupData("dataset contains no rows".into()))?;
//! }
//!
//! // Pattern matching on lookup failures
//! match reference::lookup(&dataset, "2:255") {
//!     Ok(record) => println!("{}", record.translation),
//!     Err(LookupError::NotFound { .. }) => println!("No such verse"),
//!     Err(LookupError::InvalidFormat { .. }) => println!("Use chapter:verse"),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the QClip application.
#[derive(Error, Debug)]
pub enum QclipError {
    #[error("Dataset error: {0}")]
    StartupData(String),

    #[error("Dataset error at row {row}: {reason}")]
    StartupDataRow { row: usize, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Messaging transport error: {0}")]
    Transport(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Failure to resolve a free-text verse reference.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Invalid reference format: '{input}'. Expected CHAPTER:VERSE.")]
    InvalidFormat { input: String },

    /// Numbers are kept as typed, so negative or oversized parts still
    /// read back in the message (saturated at the `i64` bounds).
    #[error("No verse found for {chapter}:{verse}.")]
    NotFound { chapter: i64, verse: i64 },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = QclipError::Config("No bot token configured".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: No bot token configured"
        );

        let row_err = QclipError::StartupDataRow {
            row: 12,
            reason: "GlobalAyahNo 'x' is not a positive integer".into(),
        };
        assert_eq!(
            row_err.to_string(),
            "Dataset error at row 12: GlobalAyahNo 'x' is not a positive integer"
        );

        let not_found = LookupError::NotFound {
            chapter: 99,
            verse: 999,
        };
        assert_eq!(not_found.to_string(), "No verse found for 99:999.");
    }

    #[test]
    fn test_lookup_error_is_transparent() {
        let err: QclipError = LookupError::InvalidFormat {
            input: "abc".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid reference format: 'abc'. Expected CHAPTER:VERSE."
        );
    }
}

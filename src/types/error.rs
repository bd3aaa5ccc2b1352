//! Error types for the ledger
//!
//! This module defines all error types that can occur while loading, appending
//! and entering transactions. Errors are designed to be descriptive and
//! user-friendly for interactive output.
//!
//! # Error Categories
//!
//! - **File Access Errors**: The ledger file cannot be created, opened, read or written
//! - **Malformed Records**: A persisted line cannot be decoded
//! - **Invalid Input**: A user-entered date, time or amount fails validation
//!
//! A vendor search with no matches is not an error; see `core::query::VendorMatch`.

use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The ledger file cannot be created, opened, read or written
    ///
    /// The affected operation is abandoned; in-memory state is left untouched.
    #[error("Cannot access ledger file '{path}': {message}")]
    FileAccess {
        /// The file that could not be accessed
        path: String,
        /// Description of the underlying I/O failure
        message: String,
    },

    /// A persisted line cannot be decoded into a transaction
    #[error("Malformed record{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedRecord {
        /// Line number in the ledger file (if known)
        line: Option<u64>,
        /// What was wrong with the line
        message: String,
    },

    /// Loading the ledger file failed
    ///
    /// Loading aborts on the first bad line rather than skipping it, so
    /// historical transactions are never dropped silently.
    #[error("Failed to load ledger '{path}': {source}")]
    LoadFailed {
        /// The ledger file being loaded
        path: String,
        /// The underlying cause
        #[source]
        source: Box<LedgerError>,
    },

    /// User input failed validation
    ///
    /// Recovered locally by re-prompting, never fatal.
    #[error("Invalid entry: {reason}")]
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::MalformedRecord {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a FileAccess error for a path
    pub fn file_access(path: impl AsRef<std::path::Path>, error: &std::io::Error) -> Self {
        LedgerError::FileAccess {
            path: path.as_ref().display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a MalformedRecord error without a known line number
    pub fn malformed(message: impl Into<String>) -> Self {
        LedgerError::MalformedRecord {
            line: None,
            message: message.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        LedgerError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Wrap a load failure with the file it came from
    pub fn load_failed(path: impl AsRef<std::path::Path>, source: LedgerError) -> Self {
        LedgerError::LoadFailed {
            path: path.as_ref().display().to_string(),
            source: Box::new(source),
        }
    }

    /// Attach a line number to a MalformedRecord error
    ///
    /// Other variants are returned unchanged.
    pub fn at_line(self, line: u64) -> Self {
        match self {
            LedgerError::MalformedRecord { message, .. } => LedgerError::MalformedRecord {
                line: Some(line),
                message,
            },
            other => other,
        }
    }
}

//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: The ledger entry and its sign conventions
//! - `range`: Inclusive calendar date ranges used by reports
//! - `error`: Error types for the ledger

pub mod error;
pub mod range;
pub mod transaction;

pub use error::LedgerError;
pub use range::DateRange;
pub use transaction::{Transaction, TransactionKind};

//! Core traits for the transaction store
//!
//! This module defines the persistence seam behind the store, so the store's
//! append contract can be exercised against the real file or a stand-in log.

use crate::types::{LedgerError, Transaction};

/// Trait for a durable, append-only log of transactions
///
/// Implementations open and release any underlying resource within each call.
pub trait RecordLog {
    /// Load every persisted transaction in log order
    ///
    /// A log that does not exist yet is created empty.
    fn load_all(&self) -> Result<Vec<Transaction>, LedgerError>;

    /// Persist one transaction at the end of the log
    ///
    /// Returns only after the record has been flushed.
    fn append(&mut self, transaction: &Transaction) -> Result<(), LedgerError>;
}

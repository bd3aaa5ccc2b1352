//! Transaction store backed by a record log
//!
//! This module provides the TransactionStore component that owns the
//! in-memory sequence of transactions for the lifetime of the process and
//! keeps it in step with the durable log.
//!
//! # Ordering
//!
//! The in-memory sequence keeps log order (load order, then append order).
//! Date ordering is a view produced by the query engine; see [`TransactionStore::ledger`].
//!
//! # Append Contract
//!
//! Appending adds the transaction to memory and to the log as one unit. If
//! the log write fails, the in-memory add is rolled back and the error is
//! returned, so memory never holds a transaction the file does not.

use crate::core::query::sort_ledger;
use crate::core::traits::RecordLog;
use crate::io::LedgerFile;
use crate::types::{LedgerError, Transaction};
use tracing::{error, info};

/// Transaction store
///
/// Exclusively owns the in-memory transactions; readers borrow them.
#[derive(Debug)]
pub struct TransactionStore<L: RecordLog = LedgerFile> {
    /// Durable log backing the store
    log: L,

    /// Transactions in log order
    transactions: Vec<Transaction>,
}

impl<L: RecordLog> TransactionStore<L> {
    /// Open a store by loading every transaction from the log
    ///
    /// # Errors
    ///
    /// Returns the log's error if it cannot be created or read, or if any
    /// persisted record is malformed. No partial store is returned.
    pub fn open(log: L) -> Result<Self, LedgerError> {
        let transactions = log.load_all()?;
        Ok(TransactionStore { log, transactions })
    }

    /// Transactions in log order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All transactions sorted newest first
    pub fn ledger(&self) -> Vec<&Transaction> {
        sort_ledger(&self.transactions)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Append a transaction to memory and to the log
    ///
    /// # Returns
    ///
    /// * `Ok(&Transaction)` - The stored transaction
    /// * `Err(LedgerError)` - The log write failed; memory is unchanged
    pub fn append(&mut self, transaction: Transaction) -> Result<&Transaction, LedgerError> {
        self.transactions.push(transaction);
        let index = self.transactions.len() - 1;

        if let Err(e) = self.log.append(&self.transactions[index]) {
            // Roll back the in-memory add
            self.transactions.pop();
            error!(error = %e, "Failed to persist transaction");
            return Err(e);
        }

        let stored = &self.transactions[index];
        info!(amount = %stored.amount, vendor = %stored.vendor, "Stored transaction");
        Ok(stored)
    }
}

//! Personal Finance Ledger Library
//! # Overview
//!
//! This library keeps a durable, append-only log of dated deposits and
//! payments and answers ledger and report queries over it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, DateRange, errors)
//! - [`io`] - Persisted line format, the ledger file, and display tables
//! - [`core`] - Business logic components:
//!   - [`core::transaction_store`] - In-memory transactions kept in step with the file
//!   - [`core::query`] - Sorting and filtering views
//!   - [`core::reports`] - Month/year date-range presets
//!   - [`core::validator`] - Parsing of user-entered dates, times and amounts
//! - [`cli`] - Arguments, logging, and the interactive menus
//!
//! # File Format
//!
//! One transaction per line, no header, fields separated by `|`:
//!
//! ```text
//! 2023-04-15|10:13:25|ergonomic keyboard|Amazon|-89.50
//! 2023-04-15|11:15:00|Invoice 1001 paid|Joe|1500.00
//! ```
//!
//! # Sign Convention
//!
//! - **Deposit**: positive amount
//! - **Payment**: negative amount (debit)

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use self::core::{ReportPeriod, TransactionStore, VendorMatch};
pub use io::LedgerFile;
pub use types::{DateRange, LedgerError, Transaction, TransactionKind};

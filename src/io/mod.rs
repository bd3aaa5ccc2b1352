//! I/O module
//!
//! Handles the persisted ledger file and rendering of ledger views.
//!
//! # Components
//!
//! - `record_format` - Line format handling (encode/decode of one transaction)
//! - `ledger_file` - Append-only file backing the transaction store
//! - `table` - Column formatting for display

pub mod ledger_file;
pub mod record_format;
pub mod table;

pub use ledger_file::LedgerFile;
pub use record_format::{decode, encode};
pub use table::write_table;

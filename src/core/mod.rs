//! Core business logic module
//!
//! This module contains the ledger's core components:
//! - `traits` - Persistence seam behind the store
//! - `transaction_store` - In-memory transactions kept in step with the log
//! - `query` - Sorting and filtering views over the transactions
//! - `reports` - Date-range presets computed from today
//! - `validator` - Parsing and normalizing user-entered values

pub mod query;
pub mod reports;
pub mod traits;
pub mod transaction_store;
pub mod validator;

pub use query::{filter_by_date_range, filter_by_kind, filter_by_vendor, sort_ledger, VendorMatch};
pub use reports::ReportPeriod;
pub use traits::RecordLog;
pub use transaction_store::TransactionStore;
pub use validator::{validate_entry, EntryInput};

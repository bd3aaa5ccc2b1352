//! Personal Finance Ledger CLI
//!
//! Interactive menus for recording deposits and payments and viewing reports.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --file ~/finance/transactions.csv
//! cargo run -- --log-level debug
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (ledger file unreadable or malformed, terminal I/O failure)

use ledger_tracker::cli::{self, Session};
use ledger_tracker::{LedgerFile, TransactionStore};
use std::io;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let args = cli::parse_args();
    cli::init_logger(args.log_level);

    let store = match TransactionStore::open(LedgerFile::new(&args.file)) {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "Could not load ledger");
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Using ledger file {} ({} transactions).",
        args.file.display(),
        store.len()
    );

    let stdin = io::stdin();
    let mut session = Session::new(store, stdin.lock(), io::stdout());
    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

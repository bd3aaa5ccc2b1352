use crate::io::ledger_file::DEFAULT_LEDGER_FILE;
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Track deposits and payments in an append-only ledger file
#[derive(Parser, Debug)]
#[command(name = "ledger")]
#[command(about = "Track deposits and payments in an append-only ledger file", long_about = None)]
pub struct CliArgs {
    /// Ledger file holding one transaction per line
    #[arg(
        long = "file",
        value_name = "PATH",
        default_value = DEFAULT_LEDGER_FILE,
        help = "Path to the ledger file (created if missing)"
    )]
    pub file: PathBuf,

    /// Log verbosity written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level: off, error, warn, info, debug or trace (RUST_LOG overrides)"
    )]
    pub log_level: LevelFilter,
}

// CLI module
// Command-line arguments, logging setup and the interactive menus

mod args;
mod logging;
mod session;

pub use args::CliArgs;
pub use logging::init_logger;
pub use session::{system_clock, Clock, Session};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid arguments or --help flag), clap will
/// display an error message or help text and exit the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

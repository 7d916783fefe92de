// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, StoreType};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Every option can also be supplied through its `RECEIPT_PROCESSOR_*`
/// environment variable. If parsing fails (or `--help` is given), clap prints
/// the error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

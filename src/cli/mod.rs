// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, SessionMode};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid mode, malformed seed) or `--help` is given, clap prints
/// the message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

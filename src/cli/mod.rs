// CLI module
// Command-line arguments, operator input parsing and the interactive shell

mod args;
pub mod input;
pub mod shell;

pub use args::{CliArgs, LogFormat};
pub use shell::Shell;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints a message and exits the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

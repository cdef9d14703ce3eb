use crate::io::DEFAULT_DATA_FILE;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Interactive single-user account ledger
#[derive(Parser, Debug)]
#[command(name = "account-ledger")]
#[command(about = "Manage customer accounts backed by a flat text file", long_about = None)]
pub struct CliArgs {
    /// Store file holding the account snapshot
    #[arg(
        long = "data-file",
        value_name = "PATH",
        env = "LEDGER_DATA_FILE",
        default_value = DEFAULT_DATA_FILE,
        help = "Path to the account store file"
    )]
    pub data_file: PathBuf,

    /// Name shown in the banner
    #[arg(
        long = "bank-name",
        value_name = "NAME",
        default_value = "Pine Valley Bank",
        help = "Bank name shown in the welcome banner"
    )]
    pub bank_name: String,

    /// Log output format; the filter itself comes from RUST_LOG
    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        default_value = "text",
        help = "Log format: 'text' for human-readable or 'json' for structured lines"
    )]
    pub log_format: LogFormat,
}

/// Available log output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

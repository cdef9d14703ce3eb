//! Account Ledger CLI
//!
//! Interactive menu for managing customer accounts stored in a flat text file.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-file /var/lib/bank/accounts.txt
//! RUST_LOG=debug cargo run -- --log-format json
//! ```
//!
//! The store is loaded at startup and rewritten after every change. Log
//! events go to stderr; the menu uses stdin and stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Terminal I/O error

use account_ledger::cli::{self, Shell};
use account_ledger::logging;
use account_ledger::Ledger;
use std::io;
use std::process;

fn main() {
    let args = cli::parse_args();

    if let Err(e) = logging::init_logging(args.log_format) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    // A store that cannot be read leaves the ledger empty; keep going
    let ledger = Ledger::with_file(&args.data_file);
    if let Err(e) = ledger.load() {
        eprintln!("Error loading data file: {}", e);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(&ledger, stdin.lock(), stdout.lock()).with_bank_name(args.bank_name);

    if let Err(e) = shell.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

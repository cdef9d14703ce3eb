//! Store format handling for account snapshots
//!
//! The store is a flat, line-oriented UTF-8 text file:
//!
//! ```text
//! # AccountNumber,CustomerName,Balance
//! 1001,Alice,700.00
//! 1002,Doe; Jane,800.00
//! ```
//!
//! - The first line is an informational comment. Any line starting with `#`
//!   is ignored on load, as are blank lines.
//! - Each record has exactly three comma-separated fields and no quoting.
//! - Commas in owner names are replaced by semicolons before writing. This
//!   is lossy: the original commas cannot be recovered on load.
//! - Balances are written as plain decimals with two fractional digits.
//!
//! Records that cannot be decoded (wrong field count, unparsable number or
//! balance) are skipped with a warning and never abort the load.

use crate::types::{Account, AccountNumber, LedgerError};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::str::FromStr;
use tracing::warn;

/// Header written as the first line of every snapshot
pub const SNAPSHOT_HEADER: [&str; 3] = ["# AccountNumber", "CustomerName", "Balance"];

/// Number of fields in a well-formed record
pub const RECORD_FIELDS: usize = 3;

/// One line of the store, as raw text fields
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SnapshotRecord {
    pub account_number: String,
    pub owner_name: String,
    pub balance: String,
}

impl From<&Account> for SnapshotRecord {
    fn from(account: &Account) -> Self {
        SnapshotRecord {
            account_number: account.account_number().to_string(),
            owner_name: normalize_owner_name(account.owner_name()),
            balance: format!("{:.2}", account.balance()),
        }
    }
}

/// Make an owner name safe for a single unquoted record
///
/// Commas become semicolons and line breaks become spaces. Both
/// replacements are lossy.
pub fn normalize_owner_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ',' => ';',
            '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}

/// Convert a SnapshotRecord to an Account
///
/// Number and balance are trimmed before parsing; the owner name is taken
/// verbatim. Balances in scientific notation are accepted.
pub fn convert_snapshot_record(record: SnapshotRecord) -> Result<Account, String> {
    let account_number = record
        .account_number
        .trim()
        .parse::<AccountNumber>()
        .map_err(|_| format!("Invalid account number '{}'", record.account_number))?;

    let balance_str = record.balance.trim();
    let balance = Decimal::from_str(balance_str)
        .or_else(|_| Decimal::from_scientific(balance_str))
        .map_err(|_| {
            format!(
                "Invalid balance '{}' for account {}",
                record.balance, account_number
            )
        })?;

    Ok(Account::new(account_number, record.owner_name, balance))
}

/// Write a full snapshot: header line, then one record per account
///
/// Accounts are sorted by account number for deterministic output.
pub fn write_snapshot(accounts: &[Account], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(output);

    writer.write_record(SNAPSHOT_HEADER)?;

    let mut sorted: Vec<&Account> = accounts.iter().collect();
    sorted.sort_by_key(|account| account.account_number());

    for account in sorted {
        writer.serialize(SnapshotRecord::from(account))?;
    }

    writer.flush()?;
    Ok(())
}

/// Read every decodable account from a snapshot
///
/// Returns accounts in file order; when a number appears twice the later
/// record wins once inserted into the ledger. Only I/O failures abort.
pub fn read_snapshot<R: Read>(input: R) -> Result<Vec<Account>, LedgerError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .trim(Trim::None)
        .from_reader(input);

    let mut accounts = Vec::new();
    let mut record = StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {}
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!(error = %e, "Skipping undecodable store line");
                continue;
            }
        }

        if is_blank_or_comment(&record) {
            continue;
        }

        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        if record.len() != RECORD_FIELDS {
            warn!(
                line,
                fields = record.len(),
                "Skipping malformed store record"
            );
            continue;
        }

        let converted = record
            .deserialize::<SnapshotRecord>(None)
            .map_err(|e| e.to_string())
            .and_then(convert_snapshot_record);

        match converted {
            Ok(account) => accounts.push(account),
            Err(e) => warn!(line, error = %e, "Skipping malformed store record"),
        }
    }

    Ok(accounts)
}

/// Whitespace-only lines and indented comments
fn is_blank_or_comment(record: &StringRecord) -> bool {
    match record.get(0) {
        None => true,
        Some(first) => {
            let first = first.trim_start();
            first.starts_with('#') || (record.len() == 1 && first.is_empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn account(number: AccountNumber, name: &str, cents: i64) -> Account {
        Account::new(number, name, Decimal::new(cents, 2))
    }

    fn render(accounts: &[Account]) -> String {
        let mut output = Vec::new();
        write_snapshot(accounts, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[rstest]
    #[case::empty(vec![], "# AccountNumber,CustomerName,Balance\n")]
    #[case::single(
        vec![account(1001, "Alice", 70000)],
        "# AccountNumber,CustomerName,Balance\n1001,Alice,700.00\n"
    )]
    #[case::sorted_by_number(
        vec![account(1003, "Carol", 1), account(1001, "Alice", 100), account(1002, "Bob", 0)],
        "# AccountNumber,CustomerName,Balance\n1001,Alice,1.00\n1002,Bob,0.00\n1003,Carol,0.01\n"
    )]
    #[case::comma_in_name(
        vec![account(1001, "Doe, Jane", 25000)],
        "# AccountNumber,CustomerName,Balance\n1001,Doe; Jane,250.00\n"
    )]
    #[case::quote_in_name_unquoted(
        vec![account(1001, "Bob \"Bobby\" Jones", 100)],
        "# AccountNumber,CustomerName,Balance\n1001,Bob \"Bobby\" Jones,1.00\n"
    )]
    fn test_write_snapshot(#[case] accounts: Vec<Account>, #[case] expected: &str) {
        assert_eq!(render(&accounts), expected);
    }

    #[test]
    fn test_read_snapshot_valid_records() {
        let input = "# AccountNumber,CustomerName,Balance\n1001,Alice,700.00\n1002,Bob,800\n";

        let accounts = read_snapshot(input.as_bytes()).unwrap();

        assert_eq!(
            accounts,
            vec![account(1001, "Alice", 70000), account(1002, "Bob", 80000)]
        );
        assert_eq!(accounts[1].balance().to_string(), "800.00");
    }

    #[test]
    fn test_read_snapshot_skips_comments_and_blank_lines() {
        let input = "# header\n\n   \n  # indented comment\n1001,Alice,1.00\n\n";

        let accounts = read_snapshot(input.as_bytes()).unwrap();

        assert_eq!(accounts, vec![account(1001, "Alice", 100)]);
    }

    #[rstest]
    #[case::one_field("abc\n")]
    #[case::two_fields("abc,OnlyOneField\n")]
    #[case::four_fields("1001,Doe,Jane,5.00\n")]
    #[case::bad_number("x1,Alice,5.00\n")]
    #[case::negative_number("-4,Alice,5.00\n")]
    #[case::bad_balance("1001,Alice,lots\n")]
    fn test_read_snapshot_skips_malformed(#[case] bad_line: &str) {
        let input = format!("1001,Alice,1.00\n{}1002,Bob,2.00\n", bad_line);

        let accounts = read_snapshot(input.as_bytes()).unwrap();
        let numbers: Vec<_> = accounts.iter().map(Account::account_number).collect();

        assert!(numbers.contains(&1002), "load stopped at {:?}", bad_line);
        assert!(accounts.len() >= 2);
        assert!(accounts.iter().all(|a| a.owner_name() != "OnlyOneField"));
    }

    #[test]
    fn test_read_snapshot_trims_number_and_balance_but_not_name() {
        let input = "  1001, Alice ,  7.5  \r\n";

        let accounts = read_snapshot(input.as_bytes()).unwrap();

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].account_number(), 1001);
        assert_eq!(accounts[0].owner_name(), " Alice ");
        assert_eq!(accounts[0].balance().to_string(), "7.50");
    }

    #[test]
    fn test_read_snapshot_rounds_hand_edited_balances() {
        let input = "1001,Alice,10.005\n1002,Bob,1E+2\n";

        let accounts = read_snapshot(input.as_bytes()).unwrap();

        assert_eq!(accounts[0].balance().to_string(), "10.01");
        assert_eq!(accounts[1].balance().to_string(), "100.00");
    }

    #[test]
    fn test_snapshot_round_trip_normalises_commas() {
        let accounts = vec![
            account(1001, "Alice", 70000),
            account(1005, "Smith, John, Jr.", 12345),
        ];

        let reloaded = read_snapshot(render(&accounts).as_bytes()).unwrap();

        assert_eq!(reloaded[0], accounts[0]);
        assert_eq!(reloaded[1].owner_name(), "Smith; John; Jr.");
        assert_eq!(reloaded[1].balance(), accounts[1].balance());
    }

    #[rstest]
    #[case("Plain Name", "Plain Name")]
    #[case("a,b,,c", "a;b;;c")]
    #[case("Ann\nLee", "Ann Lee")]
    #[case("Bob\rX", "Bob X")]
    #[case("Doe,\r\nJane", "Doe;  Jane")]
    #[case("", "")]
    fn test_normalize_owner_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_owner_name(input), expected);
    }

    #[test]
    fn test_names_with_line_breaks_survive_reload() {
        let accounts = vec![account(1001, "Ann\nLee", 500), account(1002, "Bob\rX", 600)];

        let reloaded = read_snapshot(render(&accounts).as_bytes()).unwrap();

        let names: Vec<_> = reloaded.iter().map(Account::owner_name).collect();
        assert_eq!(names, vec!["Ann Lee", "Bob X"]);
        assert_eq!(reloaded[1].balance(), accounts[1].balance());
    }
}

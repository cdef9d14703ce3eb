//! Benchmarks for whole-snapshot persistence
//!
//! Every mutation rewrites the full store, so the cost of a single deposit
//! grows with the number of accounts. These benchmarks measure that cost.
//!
//! ```bash
//! cargo bench
//! ```

use account_ledger::io::{read_snapshot, write_snapshot};
use account_ledger::{Account, Amount, Ledger, MemoryStore};
use rust_decimal::Decimal;
use std::str::FromStr;

fn main() {
    divan::main();
}

fn accounts(count: u32) -> Vec<Account> {
    (0..count)
        .map(|i| Account::new(1001 + i, format!("Owner {}", i), Decimal::new(i as i64 * 137, 2)))
        .collect()
}

/// Encode a snapshot of N accounts
#[divan::bench(args = [100, 1_000, 10_000])]
fn encode_snapshot(bencher: divan::Bencher, count: u32) {
    let accounts = accounts(count);
    bencher.bench_local(|| {
        let mut output = Vec::new();
        write_snapshot(&accounts, &mut output).expect("Encoding failed");
        output
    });
}

/// Decode a snapshot of N accounts
#[divan::bench(args = [100, 1_000, 10_000])]
fn decode_snapshot(bencher: divan::Bencher, count: u32) {
    let mut encoded = Vec::new();
    write_snapshot(&accounts(count), &mut encoded).expect("Encoding failed");

    bencher.bench_local(|| read_snapshot(encoded.as_slice()).expect("Decoding failed"));
}

/// One deposit, including the full-snapshot persist, on a ledger of N accounts
#[divan::bench(args = [100, 1_000, 10_000])]
fn deposit_with_persist(bencher: divan::Bencher, count: u32) {
    let mut encoded = Vec::new();
    write_snapshot(&accounts(count), &mut encoded).expect("Encoding failed");
    let ledger = Ledger::new(MemoryStore::with_contents(
        String::from_utf8(encoded).expect("snapshot is UTF-8"),
    ));
    ledger.load().expect("Load failed");
    let amount = Amount::from_str("0.01").expect("valid amount");

    bencher.bench_local(|| ledger.deposit(1001, amount).expect("Deposit failed"));
}

//! Operator input parsing
//!
//! Turns raw prompt answers into the typed values the ledger expects. The
//! ledger never re-validates, so every check lives here.

use crate::types::{AccountNumber, Amount, LedgerError};

/// Parse an account number such as `1001`
pub fn parse_account_number(input: &str) -> Result<AccountNumber, LedgerError> {
    input
        .trim()
        .parse::<AccountNumber>()
        .map_err(|_| LedgerError::invalid_account_number(input.trim()))
}

/// Parse a positive amount, rounded half-up to two decimals
pub fn parse_amount(input: &str) -> Result<Amount, LedgerError> {
    input.parse()
}

/// Trim an owner name and reject it if nothing is left
pub fn parse_owner_name(input: &str) -> Result<String, LedgerError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(LedgerError::EmptyOwnerName);
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1001", 1001)]
    #[case("  1002 ", 1002)]
    #[case("0", 0)]
    fn test_parse_account_number_valid(#[case] input: &str, #[case] expected: AccountNumber) {
        assert_eq!(parse_account_number(input), Ok(expected));
    }

    #[rstest]
    #[case::negative("-1")]
    #[case::text("abc")]
    #[case::empty("")]
    #[case::decimal("10.5")]
    fn test_parse_account_number_invalid(#[case] input: &str) {
        assert!(matches!(
            parse_account_number(input),
            Err(LedgerError::InvalidAccountNumber { .. })
        ));
    }

    #[test]
    fn test_parse_amount_delegates_to_amount() {
        assert_eq!(parse_amount(" 12.345 ").unwrap().to_string(), "12.35");
        assert!(parse_amount("0").is_err());
    }

    #[rstest]
    #[case("Alice", "Alice")]
    #[case("  Bob Smith  ", "Bob Smith")]
    #[case("Doe, Jane", "Doe, Jane")]
    fn test_parse_owner_name_valid(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_owner_name(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_parse_owner_name_empty(#[case] input: &str) {
        assert_eq!(parse_owner_name(input), Err(LedgerError::EmptyOwnerName));
    }
}

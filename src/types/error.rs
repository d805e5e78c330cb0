//! Error types for the bank ledger
//!
//! This module defines every error that can occur while operating on ledgers or
//! replaying batch files. Errors are descriptive so they can be printed as-is in
//! diagnostics.
//!
//! # Error Categories
//!
//! - **Validation**: non-positive amounts, empty holder names
//! - **Business rules**: insufficient funds, arithmetic overflow
//! - **Malformed records**: wrong field count, non-numeric fields, negative opening
//!   balances, unknown operations
//! - **File I/O**: missing input files, read/write failures
//!
//! None of these abort the process. Validation and business errors leave the ledger
//! untouched; malformed records abort the current batch phase.

use super::transaction::{AccountNumber, Amount};
use std::fmt;
use thiserror::Error;

/// Batch stage a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Account-creation records (`holder,balance`)
    Accounts,

    /// Transaction records (`account,operation,amount`)
    Transactions,
}

impl Phase {
    /// Number of fields every record of this phase must have
    pub fn expected_fields(&self) -> usize {
        match self {
            Phase::Accounts => 2,
            Phase::Transactions => 3,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Accounts => f.write_str("account"),
            Phase::Transactions => f.write_str("transaction"),
        }
    }
}

/// Main error type for the bank ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is zero or negative
    #[error("Invalid amount {amount}: amounts must be greater than zero")]
    InvalidAmount {
        /// The rejected amount
        amount: Amount,
    },

    /// Withdrawal larger than the current balance
    ///
    /// The balance never goes negative, so the withdrawal is refused.
    #[error(
        "Insufficient funds in account {account:07}: balance {balance}, requested {requested}"
    )]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Amount,
        /// Requested withdrawal amount
        requested: Amount,
    },

    /// Balance arithmetic would leave the representable range
    #[error("Arithmetic overflow in {operation} for account {account:07}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },

    /// Holder name is empty or blank
    #[error("Account holder name must not be empty")]
    EmptyHolderName,

    /// Record does not have the number of fields its phase requires
    #[error("Malformed {phase} record at line {line}: expected {expected} fields, found {found}: {record}")]
    FieldCount {
        /// Phase being loaded
        phase: Phase,
        /// Required field count
        expected: usize,
        /// Actual field count
        found: usize,
        /// 1-based line number
        line: u64,
        /// Offending record as read
        record: String,
    },

    /// A numeric field could not be parsed as an integer
    #[error("Malformed {phase} record at line {line}: {field} is not an integer: {record}")]
    InvalidNumber {
        /// Phase being loaded
        phase: Phase,
        /// Name of the offending column
        field: String,
        /// 1-based line number
        line: u64,
        /// Offending record as read
        record: String,
    },

    /// Account record opens with a balance below zero
    #[error("Malformed account record at line {line}: initial balance must not be negative: {record}")]
    NegativeBalance {
        /// 1-based line number
        line: u64,
        /// Offending record as read
        record: String,
    },

    /// Transaction record names an operation other than deposit/withdraw/getBalance
    #[error("Unknown operation '{operation}' at line {line}: {record}")]
    UnknownOperation {
        /// The operation literal found
        operation: String,
        /// 1-based line number
        line: u64,
        /// Offending record as read
        record: String,
    },

    /// Line that could not be read as text (invalid UTF-8)
    #[error("Unreadable input{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Amount) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Amount, requested: Amount) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create a FieldCount error for a record of the given phase
    pub fn field_count(phase: Phase, found: usize, line: u64, record: &str) -> Self {
        LedgerError::FieldCount {
            phase,
            expected: phase.expected_fields(),
            found,
            line,
            record: record.to_string(),
        }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(phase: Phase, field: &str, line: u64, record: &str) -> Self {
        LedgerError::InvalidNumber {
            phase,
            field: field.to_string(),
            line,
            record: record.to_string(),
        }
    }

    /// Create a NegativeBalance error
    pub fn negative_balance(line: u64, record: &str) -> Self {
        LedgerError::NegativeBalance {
            line,
            record: record.to_string(),
        }
    }

    /// Create an UnknownOperation error
    pub fn unknown_operation(operation: &str, line: u64, record: &str) -> Self {
        LedgerError::UnknownOperation {
            operation: operation.to_string(),
            line,
            record: record.to_string(),
        }
    }

    /// Whether this error makes a batch record unusable
    ///
    /// Such errors abort the current phase instead of skipping a single record.
    pub fn is_malformed_record(&self) -> bool {
        matches!(
            self,
            LedgerError::FieldCount { .. }
                | LedgerError::InvalidNumber { .. }
                | LedgerError::NegativeBalance { .. }
                | LedgerError::UnknownOperation { .. }
                | LedgerError::ParseError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { amount: -5 },
        "Invalid amount -5: amounts must be greater than zero"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { account: 42, balance: 1500, requested: 2000 },
        "Insufficient funds in account 0000042: balance 1500, requested 2000"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string(), account: 1 },
        "Arithmetic overflow in deposit for account 0000001"
    )]
    #[case::negative_balance(
        LedgerError::negative_balance(3, "Carol,-20"),
        "Malformed account record at line 3: initial balance must not be negative: Carol,-20"
    )]
    #[case::field_count(
        LedgerError::field_count(Phase::Accounts, 1, 2, "BadRow"),
        "Malformed account record at line 2: expected 2 fields, found 1: BadRow"
    )]
    #[case::invalid_number(
        LedgerError::invalid_number(Phase::Transactions, "amount", 4, "1,deposit,abc"),
        "Malformed transaction record at line 4: amount is not an integer: 1,deposit,abc"
    )]
    #[case::unknown_operation(
        LedgerError::unknown_operation("badop", 2, "1,badop,5"),
        "Unknown operation 'badop' at line 2: 1,badop,5"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(3), message: "invalid UTF-8".to_string() },
        "Unreadable input at line 3: invalid UTF-8"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "invalid UTF-8".to_string() },
        "Unreadable input: invalid UTF-8"
    )]
    #[case::file_not_found(
        LedgerError::FileNotFound { path: "account.csv".to_string() },
        "File not found: account.csv"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case(LedgerError::field_count(Phase::Transactions, 2, 1, "1,deposit"), true)]
    #[case(LedgerError::invalid_number(Phase::Accounts, "initial balance", 1, "Bob,x"), true)]
    #[case(LedgerError::unknown_operation("x", 1, "1,x,1"), true)]
    #[case(LedgerError::ParseError { line: None, message: String::new() }, true)]
    #[case(LedgerError::invalid_amount(0), false)]
    #[case(LedgerError::insufficient_funds(1, 0, 1), false)]
    #[case(LedgerError::negative_balance(1, "Bob,-1"), true)]
    #[case(LedgerError::IoError { message: "broken pipe".to_string() }, false)]
    #[case(LedgerError::FileNotFound { path: "x".to_string() }, false)]
    fn test_is_malformed_record(#[case] error: LedgerError, #[case] expected: bool) {
        assert_eq!(error.is_malformed_record(), expected);
    }

    #[test]
    fn test_expected_fields_per_phase() {
        assert_eq!(Phase::Accounts.expected_fields(), 2);
        assert_eq!(Phase::Transactions.expected_fields(), 3);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}

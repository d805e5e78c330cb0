//! Transaction-related types for the bank ledger
//!
//! This module defines the identifiers, the kinds of balance movement recorded in
//! an account history, the immutable history record itself, and the operation
//! literals accepted by the transaction batch file.

use chrono::{Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Account identifier
///
/// Interactive accounts use 7-digit random numbers, batch accounts use 1, 2, 3, ...
pub type AccountNumber = i64;

/// Whole-unit monetary amount (balances are signed, movements are positive)
pub type Amount = i64;

/// Kind of entry appended to an account history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Opening balance recorded when the ledger is created
    Initial,

    /// Funds credited to the account
    Deposit,

    /// Funds debited from the account
    Withdraw,
}

impl TransactionKind {
    /// Human-readable label used in history listings
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Initial => "Initial deposit",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of an account history
///
/// Records are created once and never mutated. `balance_after` is a snapshot of the
/// balance right after the movement, not a value recomputed from earlier entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Calendar date the record was appended
    pub date: NaiveDate,

    /// What kind of movement this was
    pub kind: TransactionKind,

    /// Amount moved (the opening balance for `Initial`)
    pub amount: Amount,

    /// Account balance immediately after this movement
    pub balance_after: Amount,
}

impl TransactionRecord {
    /// Create a record stamped with today's local date
    pub fn new(kind: TransactionKind, amount: Amount, balance_after: Amount) -> Self {
        Self::dated(Local::now().date_naive(), kind, amount, balance_after)
    }

    /// Create a record with an explicit date
    pub fn dated(
        date: NaiveDate,
        kind: TransactionKind,
        amount: Amount,
        balance_after: Amount,
    ) -> Self {
        TransactionRecord {
            date,
            kind,
            amount,
            balance_after,
        }
    }
}

/// Operation requested by a line of the transaction batch file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `deposit`
    Deposit,

    /// `withdraw`
    Withdraw,

    /// `getBalance` (the amount column is still required but ignored)
    GetBalance,
}

impl FromStr for Operation {
    type Err = String;

    /// Parse the exact, case-sensitive literal used in batch files
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(Operation::Deposit),
            "withdraw" => Ok(Operation::Withdraw),
            "getBalance" => Ok(Operation::GetBalance),
            other => Err(other.to_string()),
        }
    }
}

//! Account-related types for the bank ledger
//!
//! `Account` only holds identity and the current balance. It exposes no public
//! mutators: balances move exclusively through [`crate::core::Ledger`], which keeps
//! the history in step with every change.

use super::transaction::{AccountNumber, Amount};

/// Identity and current balance of one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    holder_name: String,
    account_number: AccountNumber,
    balance: Amount,
}

impl Account {
    /// Create an account
    ///
    /// Only the ledger builds accounts, so the number is already registered with the
    /// allocator and the history already has its opening entry.
    pub(crate) fn new(holder_name: String, account_number: AccountNumber, balance: Amount) -> Self {
        Account {
            holder_name,
            account_number,
            balance,
        }
    }

    /// Name of the account holder
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Account number (immutable after creation)
    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    /// Current balance
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Replace the balance with an already validated value
    pub(crate) fn set_balance(&mut self, balance: Amount) {
        self.balance = balance;
    }
}

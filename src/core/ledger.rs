//! Ledger: one account paired with its transaction history
//!
//! The `Ledger` is the only place where a balance can change. Every successful
//! deposit or withdrawal mutates the balance exactly once and appends exactly one
//! history record whose `balance_after` is the new balance. Failed operations leave
//! both the balance and the history untouched.
//!
//! The ledger enforces:
//! - Amounts must be strictly positive
//! - Withdrawals may not exceed the current balance (no overdraft)
//! - Balance arithmetic is checked; overflow is rejected

use crate::core::traits::IdentifierAllocator;
use crate::core::transaction_log::TransactionLog;
use crate::types::{
    Account, AccountNumber, Amount, LedgerError, TransactionKind, TransactionRecord,
};

/// An account together with its append-only history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    account: Account,
    history: TransactionLog,
}

impl Ledger {
    /// Open a ledger under a freshly allocated account number
    ///
    /// The holder name is expected to be validated by the caller. The history starts
    /// with one `Initial` record holding the opening balance.
    ///
    /// # Arguments
    ///
    /// * `holder_name` - Name of the account holder
    /// * `initial_balance` - Opening balance
    /// * `allocator` - Allocator issuing the account number
    pub fn open<A>(holder_name: impl Into<String>, initial_balance: Amount, allocator: &mut A) -> Self
    where
        A: IdentifierAllocator + ?Sized,
    {
        let number = allocator.allocate();
        Self::with_opening_record(holder_name.into(), number, initial_balance)
    }

    /// Open a ledger under a caller-supplied account number
    ///
    /// The number is registered with the allocator first, so later allocations
    /// cannot collide with it.
    pub fn open_with_number<A>(
        holder_name: impl Into<String>,
        initial_balance: Amount,
        account_number: AccountNumber,
        allocator: &mut A,
    ) -> Self
    where
        A: IdentifierAllocator + ?Sized,
    {
        allocator.register(account_number);
        Self::with_opening_record(holder_name.into(), account_number, initial_balance)
    }

    fn with_opening_record(
        holder_name: String,
        account_number: AccountNumber,
        initial_balance: Amount,
    ) -> Self {
        let mut history = TransactionLog::new();
        history.append(TransactionRecord::new(
            TransactionKind::Initial,
            initial_balance,
            initial_balance,
        ));

        Ledger {
            account: Account::new(holder_name, account_number, initial_balance),
            history,
        }
    }

    /// Read-only view of the account
    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account.account_number()
    }

    pub fn holder_name(&self) -> &str {
        self.account.holder_name()
    }

    pub fn balance(&self) -> Amount {
        self.account.balance()
    }

    /// Chronological history of this account
    pub fn history(&self) -> &TransactionLog {
        &self.history
    }

    /// Deposit funds
    ///
    /// # Returns
    ///
    /// * `Ok(balance)` - The balance after the deposit
    /// * `Err(LedgerError)` - Nothing was changed
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `ArithmeticOverflow` if the new balance is not representable
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::invalid_amount(amount));
        }

        let new_balance = self
            .balance()
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", self.account_number()))?;

        Ok(self.apply(TransactionKind::Deposit, amount, new_balance))
    }

    /// Withdraw funds
    ///
    /// # Returns
    ///
    /// * `Ok(balance)` - The balance after the withdrawal
    /// * `Err(LedgerError)` - Nothing was changed
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InsufficientFunds` if `amount` exceeds the current balance
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::invalid_amount(amount));
        }

        let balance = self.balance();
        if amount > balance {
            return Err(LedgerError::insufficient_funds(
                self.account_number(),
                balance,
                amount,
            ));
        }

        let new_balance = balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdraw", self.account_number()))?;

        Ok(self.apply(TransactionKind::Withdraw, amount, new_balance))
    }

    /// Commit a validated movement: update the balance, then log the snapshot
    fn apply(&mut self, kind: TransactionKind, amount: Amount, new_balance: Amount) -> Amount {
        self.account.set_balance(new_balance);
        self.history
            .append(TransactionRecord::new(kind, amount, new_balance));

        tracing::debug!(
            account = self.account_number(),
            kind = %kind,
            amount,
            balance = new_balance,
            "ledger updated"
        );

        new_balance
    }
}

//! Ledger registry
//!
//! This module provides the `LedgerRegistry`, the collection of every ledger
//! created during a run. It is responsible for:
//! - Opening ledgers through its identifier allocator
//! - Looking ledgers up by account number
//! - Listing ledgers in creation order for output
//!
//! Account numbers are unique by construction (see [`IdentifierAllocator`]), so
//! registration never has to resolve conflicts.

use crate::core::allocator::RandomAllocator;
use crate::core::ledger::Ledger;
use crate::core::traits::IdentifierAllocator;
use crate::types::{AccountNumber, Amount, LedgerError};
use std::collections::HashMap;

/// All ledgers of a run, keyed by account number
#[derive(Debug)]
pub struct LedgerRegistry<A: IdentifierAllocator = RandomAllocator> {
    /// Map of account numbers to ledgers
    ledgers: HashMap<AccountNumber, Ledger>,
    /// Account numbers in creation order
    order: Vec<AccountNumber>,
    allocator: A,
}

impl LedgerRegistry<RandomAllocator> {
    /// Create an empty registry with an entropy-seeded random allocator
    pub fn new() -> Self {
        Self::with_allocator(RandomAllocator::new())
    }
}

impl Default for LedgerRegistry<RandomAllocator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: IdentifierAllocator> LedgerRegistry<A> {
    /// Create an empty registry that issues numbers from `allocator`
    pub fn with_allocator(allocator: A) -> Self {
        LedgerRegistry {
            ledgers: HashMap::new(),
            order: Vec::new(),
            allocator,
        }
    }

    /// Open an account under a random number
    ///
    /// This is the caller-facing entry point, so the holder name is validated here.
    ///
    /// # Returns
    ///
    /// * `Ok(AccountNumber)` - Number of the new account
    /// * `Err(LedgerError::EmptyHolderName)` - Name is empty or blank
    pub fn open_account(
        &mut self,
        holder_name: &str,
        initial_balance: Amount,
    ) -> Result<AccountNumber, LedgerError> {
        let holder_name = holder_name.trim();
        if holder_name.is_empty() {
            return Err(LedgerError::EmptyHolderName);
        }

        let ledger = Ledger::open(holder_name, initial_balance, &mut self.allocator);
        Ok(self.register(ledger))
    }

    /// Open an account under an explicit number (restoring from a batch source)
    pub fn restore_account(
        &mut self,
        holder_name: &str,
        initial_balance: Amount,
        account_number: AccountNumber,
    ) -> AccountNumber {
        let ledger = Ledger::open_with_number(
            holder_name,
            initial_balance,
            account_number,
            &mut self.allocator,
        );
        self.register(ledger)
    }

    /// Add an already created ledger
    ///
    /// Returns the ledger's account number.
    pub fn register(&mut self, ledger: Ledger) -> AccountNumber {
        let number = ledger.account_number();
        if self.ledgers.insert(number, ledger).is_none() {
            self.order.push(number);
        }
        number
    }

    /// Find a ledger by account number
    pub fn lookup(&self, account_number: AccountNumber) -> Option<&Ledger> {
        self.ledgers.get(&account_number)
    }

    /// Find a ledger by account number for mutation
    pub fn lookup_mut(&mut self, account_number: AccountNumber) -> Option<&mut Ledger> {
        self.ledgers.get_mut(&account_number)
    }

    /// All ledgers in creation order
    pub fn ledgers(&self) -> impl Iterator<Item = &Ledger> + '_ {
        self.order
            .iter()
            .filter_map(move |number| self.ledgers.get(number))
    }

    /// Drop every ledger
    ///
    /// Issued numbers stay registered with the allocator.
    pub fn clear(&mut self) {
        self.ledgers.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.ledgers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }

    /// The allocator issuing numbers for this registry
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Mutable access to the allocator, for ledgers opened outside the registry
    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.allocator
    }
}

//! Core traits for account-number allocation
//!
//! Ledger construction takes the allocator as an explicit argument so that the
//! issued-number set is owned by whoever drives a run, never by ambient global state.

use crate::types::AccountNumber;

/// Source of account numbers that are unique for the lifetime of a run
pub trait IdentifierAllocator {
    /// Produce a number that has not been issued yet and record it as issued
    fn allocate(&mut self) -> AccountNumber;

    /// Record an externally supplied number as issued, without validation
    ///
    /// Later calls to [`allocate`](IdentifierAllocator::allocate) never return it.
    fn register(&mut self, number: AccountNumber);

    /// Whether a number has already been issued or registered
    fn is_issued(&self, number: AccountNumber) -> bool;
}

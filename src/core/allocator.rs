//! Random account-number allocation
//!
//! Numbers are drawn uniformly from the 7-digit range `[1_000_000, 9_999_999]`.
//! Collisions with already issued numbers are retried, so uniqueness never depends
//! on the odds of a collision being low.

use crate::core::traits::IdentifierAllocator;
use crate::types::AccountNumber;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Smallest number the allocator hands out
pub const ACCOUNT_NUMBER_MIN: AccountNumber = 1_000_000;

/// Width of the allocation range
pub const ACCOUNT_NUMBER_SPAN: AccountNumber = 9_000_000;

/// Allocator backed by a random generator and an in-memory issued-set
///
/// The issued-set only grows and is never persisted: it lives exactly as long as the
/// allocator does.
#[derive(Debug)]
pub struct RandomAllocator {
    issued: HashSet<AccountNumber>,
    rng: StdRng,
}

impl RandomAllocator {
    /// Create an allocator seeded from the operating system
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create an allocator with a fixed seed (reproducible numbers)
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        RandomAllocator {
            issued: HashSet::new(),
            rng,
        }
    }

    /// Number of issued or registered numbers
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

impl Default for RandomAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierAllocator for RandomAllocator {
    fn allocate(&mut self) -> AccountNumber {
        loop {
            let candidate = self
                .rng
                .gen_range(ACCOUNT_NUMBER_MIN..ACCOUNT_NUMBER_MIN + ACCOUNT_NUMBER_SPAN);
            if self.issued.insert(candidate) {
                return candidate;
            }
            tracing::debug!(candidate, "account number already issued, retrying");
        }
    }

    fn register(&mut self, number: AccountNumber) {
        self.issued.insert(number);
    }

    fn is_issued(&self, number: AccountNumber) -> bool {
        self.issued.contains(&number)
    }
}

//! Core ledger logic
//!
//! This module contains the banking components:
//! - `traits` - Account-number allocation seam
//! - `allocator` - Random, collision-free account numbers
//! - `transaction_log` - Append-only per-account history
//! - `ledger` - One account plus its history; deposit and withdraw
//! - `registry` - All ledgers of a run, keyed by account number
//! - `replay` - The two batch phases and their abort policies

pub mod allocator;
pub mod ledger;
pub mod registry;
pub mod replay;
pub mod traits;
pub mod transaction_log;

pub use allocator::RandomAllocator;
pub use ledger::Ledger;
pub use registry::LedgerRegistry;
pub use replay::{BatchReplayer, PhaseSummary};
pub use traits::IdentifierAllocator;
pub use transaction_log::TransactionLog;

//! Bank Ledger Library
//! # Overview
//!
//! This library simulates a small retail bank: named accounts with integer balances,
//! an append-only history per account, and two ways of driving them, a batch replay
//! of CSV files and an interactive console.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, TransactionRecord, LedgerError, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::allocator`] - Unique random account numbers
//!   - [`core::ledger`] - Deposit and withdraw with history
//!   - [`core::registry`] - Account-number lookup over all ledgers
//!   - [`core::replay`] - The account and transaction batch phases
//! - [`io`] - Record reading, decoding and report text
//! - [`session`] - Batch and interactive drivers
//!
//! # Balance Rules
//!
//! - Deposits and withdrawals must be greater than zero
//! - A withdrawal larger than the balance is refused; balances never go negative
//! - Every successful operation appends exactly one history record
//!
//! # Batch Phases
//!
//! - **Accounts**: numbered 1..N in file order; one malformed record discards them all
//! - **Transactions**: a malformed record stops the replay without undoing earlier
//!   records; records for unknown accounts are skipped

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use core::{BatchReplayer, IdentifierAllocator, Ledger, LedgerRegistry, RandomAllocator};
pub use session::{create_session, Session, SessionConfig};
pub use types::{
    Account, AccountNumber, Amount, LedgerError, Operation, TransactionKind, TransactionRecord,
};

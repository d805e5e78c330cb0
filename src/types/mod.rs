//! Types module
//!
//! Contains the data structures shared across the crate:
//! - `account`: account identity and balance
//! - `transaction`: identifiers, history records and batch operations
//! - `record`: undecoded batch-file lines
//! - `error`: error types and batch phases

pub mod account;
pub mod error;
pub mod record;
pub mod transaction;

pub use account::Account;
pub use error::{LedgerError, Phase};
pub use record::RawRecord;
pub use transaction::{AccountNumber, Amount, Operation, TransactionKind, TransactionRecord};

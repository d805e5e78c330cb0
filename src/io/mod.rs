//! I/O module
//!
//! Handles batch file parsing and user-facing output.
//!
//! # Components
//!
//! - `sync_reader` - Streaming reader over headerless batch files
//! - `csv_format` - Decoding of account and transaction records
//! - `report` - Wording and formatting of every printed line

pub mod csv_format;
pub mod report;
pub mod sync_reader;

pub use csv_format::{decode_account_record, decode_transaction_record, AccountRow, TransactionCommand};
pub use sync_reader::RecordReader;

//! Batch record decoding
//!
//! This module turns [`RawRecord`]s into typed rows for the two batch phases:
//! - `holder,initial_balance` account records
//! - `account_number,operation,amount` transaction records
//!
//! Checks run in a fixed order: field count first, then numeric fields (decoded
//! with serde), then the opening balance sign or the operation literal. All
//! functions are pure.

use crate::types::{AccountNumber, Amount, LedgerError, Operation, Phase, RawRecord};
use serde::Deserialize;

/// Decoded account-creation record
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub holder_name: String,
    pub initial_balance: Amount,
}

/// Transaction record with numeric columns decoded
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
struct TransactionRow {
    account_number: AccountNumber,
    operation: String,
    amount: Amount,
}

/// Fully decoded transaction command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionCommand {
    pub account_number: AccountNumber,
    pub operation: Operation,
    /// Present for every operation, ignored by `GetBalance`
    pub amount: Amount,
}

const ACCOUNT_COLUMNS: [&str; 2] = ["holder name", "initial balance"];
const TRANSACTION_COLUMNS: [&str; 3] = ["account number", "operation", "amount"];

/// Decode an account-creation record
///
/// # Errors
///
/// - `FieldCount` if the record does not have exactly 2 fields
/// - `InvalidNumber` if the balance is not an integer
/// - `NegativeBalance` if the balance is below zero
pub fn decode_account_record(record: &RawRecord) -> Result<AccountRow, LedgerError> {
    check_field_count(Phase::Accounts, record)?;

    let row = record
        .fields
        .deserialize::<AccountRow>(None)
        .map_err(|e| numeric_error(Phase::Accounts, &ACCOUNT_COLUMNS, record, &e))?;

    if row.initial_balance < 0 {
        return Err(LedgerError::negative_balance(record.line, record.raw()));
    }
    Ok(row)
}

/// Decode a transaction record
///
/// # Errors
///
/// - `FieldCount` if the record does not have exactly 3 fields
/// - `InvalidNumber` if the account number or amount is not an integer
/// - `UnknownOperation` if the operation is not `deposit`, `withdraw` or `getBalance`
pub fn decode_transaction_record(record: &RawRecord) -> Result<TransactionCommand, LedgerError> {
    check_field_count(Phase::Transactions, record)?;

    let row = record
        .fields
        .deserialize::<TransactionRow>(None)
        .map_err(|e| numeric_error(Phase::Transactions, &TRANSACTION_COLUMNS, record, &e))?;

    let operation = row
        .operation
        .parse::<Operation>()
        .map_err(|op| LedgerError::unknown_operation(&op, record.line, record.raw()))?;

    Ok(TransactionCommand {
        account_number: row.account_number,
        operation,
        amount: row.amount,
    })
}

fn check_field_count(phase: Phase, record: &RawRecord) -> Result<(), LedgerError> {
    if record.len() != phase.expected_fields() {
        return Err(LedgerError::field_count(
            phase,
            record.len(),
            record.line,
            record.raw(),
        ));
    }
    Ok(())
}

/// Map a serde failure to the name of the column that could not be decoded
fn numeric_error(
    phase: Phase,
    columns: &[&str],
    record: &RawRecord,
    error: &csv::Error,
) -> LedgerError {
    let field = match error.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err
            .field()
            .and_then(|index| columns.get(index as usize))
            .copied(),
        _ => None,
    }
    .unwrap_or("numeric field");

    LedgerError::invalid_number(phase, field, record.line, record.raw())
}

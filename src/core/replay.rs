//! Batch replay
//!
//! This module provides the `BatchReplayer`, which applies the two batch phases to
//! a [`LedgerRegistry`] and writes the user-facing report.
//!
//! # Account phase
//!
//! Records are `holder,initial_balance`. Accounts are numbered 1, 2, 3, ... in
//! input order. The phase is all-or-nothing: one malformed record discards every
//! account staged so far, a diagnostic is printed and the registry is left as it
//! was. Confirmations are printed only once the whole phase has succeeded.
//!
//! # Transaction phase
//!
//! Records are `account,operation,amount`. A malformed record stops the replay:
//! the remaining records are skipped, but records already applied stay applied.
//! A record for an unknown account is skipped on its own. Failed deposits and
//! withdrawals print nothing.

use crate::core::ledger::Ledger;
use crate::core::registry::LedgerRegistry;
use crate::core::traits::IdentifierAllocator;
use crate::io::csv_format::{decode_account_record, decode_transaction_record};
use crate::io::report;
use crate::types::{AccountNumber, LedgerError, Operation, Phase, RawRecord};
use std::io::Write;

/// What a phase did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseSummary {
    /// Accounts created, or transaction records carried out
    pub applied: usize,
    /// Deposits and withdrawals refused by the ledger
    pub rejected: usize,
    /// Transaction records naming an unknown account
    pub skipped: usize,
    /// Error that aborted the phase, if any
    pub abort: Option<LedgerError>,
}

impl PhaseSummary {
    pub fn is_aborted(&self) -> bool {
        self.abort.is_some()
    }
}

/// Applies batch records to a registry, reporting to `output`
pub struct BatchReplayer<'w> {
    output: &'w mut dyn Write,
}

impl<'w> BatchReplayer<'w> {
    /// Create a replayer that prints confirmations and diagnostics to `output`
    pub fn new(output: &'w mut dyn Write) -> Self {
        BatchReplayer { output }
    }

    /// Run the account-creation phase
    ///
    /// # Arguments
    ///
    /// * `registry` - Registry receiving the new ledgers
    /// * `records` - Account records in file order
    /// * `source` - Input name used in diagnostics
    ///
    /// # Returns
    ///
    /// * `Ok(PhaseSummary)` - Including aborted phases
    /// * `Err(LedgerError)` - Only when reading the records or writing the output fails
    pub fn load_accounts<A, I>(
        &mut self,
        registry: &mut LedgerRegistry<A>,
        records: I,
        source: &str,
    ) -> Result<PhaseSummary, LedgerError>
    where
        A: IdentifierAllocator,
        I: IntoIterator<Item = Result<RawRecord, LedgerError>>,
    {
        let mut staged: Vec<Ledger> = Vec::new();
        let mut next_number: AccountNumber = 1;

        for item in records {
            let row = match item.and_then(|record| decode_account_record(&record)) {
                Ok(row) => row,
                Err(error) if !error.is_malformed_record() => return Err(error),
                Err(error) => {
                    // Nothing staged reaches the registry
                    tracing::debug!(
                        discarded = staged.len(),
                        %error,
                        "account phase aborted"
                    );
                    return self.abort_phase(Phase::Accounts, source, error);
                }
            };

            staged.push(Ledger::open_with_number(
                row.holder_name,
                row.initial_balance,
                next_number,
                registry.allocator_mut(),
            ));
            next_number += 1;
        }

        for ledger in &staged {
            writeln!(
                self.output,
                "{}",
                report::account_opened_line(
                    ledger.account_number(),
                    ledger.holder_name(),
                    ledger.balance()
                )
            )?;
        }
        writeln!(self.output, "{}", report::ACCOUNTS_OPENED)?;

        let applied = staged.len();
        for ledger in staged {
            registry.register(ledger);
        }
        tracing::info!(accounts = applied, source, "account phase completed");

        Ok(PhaseSummary {
            applied,
            ..PhaseSummary::default()
        })
    }

    /// Run the transaction-replay phase
    ///
    /// # Returns
    ///
    /// * `Ok(PhaseSummary)` - Including aborted phases
    /// * `Err(LedgerError)` - Only when reading the records or writing the output fails
    pub fn replay_transactions<A, I>(
        &mut self,
        registry: &mut LedgerRegistry<A>,
        records: I,
        source: &str,
    ) -> Result<PhaseSummary, LedgerError>
    where
        A: IdentifierAllocator,
        I: IntoIterator<Item = Result<RawRecord, LedgerError>>,
    {
        let mut summary = PhaseSummary::default();

        for item in records {
            let command = match item.and_then(|record| decode_transaction_record(&record)) {
                Ok(command) => command,
                Err(error) if !error.is_malformed_record() => return Err(error),
                Err(error) => {
                    tracing::debug!(
                        applied = summary.applied,
                        %error,
                        "transaction phase aborted, remaining records skipped"
                    );
                    let aborted = self.abort_phase(Phase::Transactions, source, error)?;
                    return Ok(PhaseSummary {
                        abort: aborted.abort,
                        ..summary
                    });
                }
            };

            let number = command.account_number;
            let Some(ledger) = registry.lookup_mut(number) else {
                tracing::debug!(account = number, "unknown account, record skipped");
                summary.skipped += 1;
                continue;
            };

            match command.operation {
                Operation::Deposit => match ledger.deposit(command.amount) {
                    Ok(_) => {
                        writeln!(self.output, "{}", report::deposit_line(number, command.amount))?;
                        summary.applied += 1;
                    }
                    Err(error) => {
                        tracing::debug!(%error, "deposit refused");
                        summary.rejected += 1;
                    }
                },
                Operation::Withdraw => match ledger.withdraw(command.amount) {
                    Ok(_) => {
                        writeln!(self.output, "{}", report::withdraw_line(number, command.amount))?;
                        summary.applied += 1;
                    }
                    Err(error) => {
                        tracing::debug!(%error, "withdrawal refused");
                        summary.rejected += 1;
                    }
                },
                Operation::GetBalance => {
                    report::write_balance_report(ledger, &mut *self.output)?;
                    summary.applied += 1;
                }
            }
        }

        tracing::info!(
            applied = summary.applied,
            rejected = summary.rejected,
            skipped = summary.skipped,
            source,
            "transaction phase completed"
        );
        Ok(summary)
    }

    /// Print the two-line diagnostic for an abandoned phase
    ///
    /// Also used when the input of a phase cannot be opened at all.
    pub fn abort_phase(
        &mut self,
        phase: Phase,
        source: &str,
        error: LedgerError,
    ) -> Result<PhaseSummary, LedgerError> {
        tracing::warn!(%phase, source, %error, "batch phase abandoned");

        writeln!(self.output, "{}", report::error_detail_line(&error))?;
        writeln!(self.output, "{}", report::load_failure_line(source))?;

        Ok(PhaseSummary {
            abort: Some(error),
            ..PhaseSummary::default()
        })
    }
}

//! Batch session
//!
//! Replays the account file and then the transaction file against a fresh registry.
//! The transaction phase always runs, even when the account phase was discarded;
//! its records then refer to unknown accounts and are skipped.
//!
//! A file that cannot be opened is reported like a malformed one: the phase is
//! abandoned with a diagnostic and the session carries on.

use crate::core::{BatchReplayer, LedgerRegistry};
use crate::io::report;
use crate::io::RecordReader;
use crate::session::{source_label, Session, SessionConfig};
use crate::types::{LedgerError, Phase};
use std::io::{BufRead, Write};

/// Batch replay of the configured account and transaction files
///
/// # Examples
///
/// ```no_run
/// use bank_ledger::session::{BatchSession, Session, SessionConfig};
/// use std::io;
///
/// let session = BatchSession::new(SessionConfig::default());
/// session
///     .run(&mut io::stdin().lock(), &mut io::stdout())
///     .expect("Batch run failed");
/// ```
#[derive(Debug, Clone)]
pub struct BatchSession {
    config: SessionConfig,
}

impl BatchSession {
    pub fn new(config: SessionConfig) -> Self {
        BatchSession { config }
    }
}

impl Session for BatchSession {
    fn run(&self, _input: &mut dyn BufRead, output: &mut dyn Write) -> Result<(), LedgerError> {
        writeln!(output, "{}", report::SYSTEM_STARTED)?;

        let mut registry = LedgerRegistry::with_allocator(self.config.allocator());
        let mut replayer = BatchReplayer::new(&mut *output);

        let source = source_label(&self.config.accounts_path);
        let accounts = match RecordReader::open(&self.config.accounts_path) {
            Ok(reader) => replayer.load_accounts(&mut registry, reader, &source)?,
            Err(error) => replayer.abort_phase(Phase::Accounts, &source, error)?,
        };

        let source = source_label(&self.config.transactions_path);
        let transactions = match RecordReader::open(&self.config.transactions_path) {
            Ok(reader) => replayer.replay_transactions(&mut registry, reader, &source)?,
            Err(error) => replayer.abort_phase(Phase::Transactions, &source, error)?,
        };

        tracing::info!(
            accounts = accounts.applied,
            transactions = transactions.applied,
            rejected = transactions.rejected,
            skipped = transactions.skipped,
            "batch run finished"
        );

        writeln!(output, "{}", report::SYSTEM_FINISHED)?;
        output.flush()?;
        Ok(())
    }
}

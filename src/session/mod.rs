//! Session drivers
//!
//! This module defines the `Session` trait for complete runs of the bank system. A
//! session owns its registry and allocator for the duration of `run`, reads from the
//! given input and writes every user-facing line to the given output. The mode is
//! selected at runtime through [`create_session`].

use crate::cli::SessionMode;
use crate::core::RandomAllocator;
use crate::types::LedgerError;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub mod batch;
pub mod interactive;

pub use batch::BatchSession;
pub use interactive::InteractiveSession;

/// A complete run of the bank system
pub trait Session: Send + Sync {
    /// Run the session to completion
    ///
    /// # Arguments
    ///
    /// * `input` - User input (read by interactive sessions only)
    /// * `output` - Destination for confirmations, reports and diagnostics
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the session finished, including runs whose batch phases aborted
    /// * `Err(LedgerError)` if reading input or writing output failed
    ///
    /// Malformed batch data is reported on `output` and never turns into an `Err`.
    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<(), LedgerError>;
}

/// Settings shared by every session mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Account-creation records for batch mode
    pub accounts_path: PathBuf,
    /// Transaction records for batch mode
    pub transactions_path: PathBuf,
    /// Seed for the account-number allocator; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            accounts_path: PathBuf::from("account.csv"),
            transactions_path: PathBuf::from("transaction.csv"),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Fresh allocator for one run
    pub fn allocator(&self) -> RandomAllocator {
        match self.seed {
            Some(seed) => RandomAllocator::with_seed(seed),
            None => RandomAllocator::new(),
        }
    }
}

/// Name of a batch input as shown in diagnostics
pub(crate) fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Create a session for the given mode
///
/// # Arguments
///
/// * `mode` - Batch replay or interactive console
/// * `config` - Input paths and allocator seed
pub fn create_session(mode: SessionMode, config: SessionConfig) -> Box<dyn Session> {
    match mode {
        SessionMode::Batch => Box::new(BatchSession::new(config)),
        SessionMode::Interactive => Box::new(InteractiveSession::new(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IdentifierAllocator;
    use rstest::rstest;

    #[rstest]
    #[case::plain("account.csv", "account.csv")]
    #[case::nested("data/run1/transaction.csv", "transaction.csv")]
    fn test_source_label_uses_file_name(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(source_label(Path::new(path)), expected);
    }

    #[test]
    fn test_seeded_config_reproduces_numbers() {
        let config = SessionConfig {
            seed: Some(99),
            ..SessionConfig::default()
        };

        assert_eq!(config.allocator().allocate(), config.allocator().allocate());
    }

    #[test]
    fn test_default_config_paths() {
        let config = SessionConfig::default();

        assert_eq!(config.accounts_path, PathBuf::from("account.csv"));
        assert_eq!(config.transactions_path, PathBuf::from("transaction.csv"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_create_interactive_session() {
        let mut output = Vec::new();
        let session = create_session(SessionMode::Interactive, SessionConfig::default());

        session.run(&mut "".as_bytes(), &mut output).unwrap();

        assert!(String::from_utf8(output)
            .unwrap()
            .starts_with(crate::io::report::SYSTEM_STARTED));
    }
}

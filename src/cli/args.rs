use crate::session::SessionConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Bank ledger simulator: batch replay or interactive console
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Replay bank account and transaction files, or run the interactive console", long_about = None)]
pub struct CliArgs {
    /// How the session is driven
    #[arg(
        long = "mode",
        value_name = "MODE",
        default_value = "batch",
        help = "Session mode: 'batch' replays the CSV files, 'interactive' reads the console"
    )]
    pub mode: SessionMode,

    /// Account-creation records (batch mode only)
    #[arg(
        long = "accounts",
        value_name = "PATH",
        default_value = "account.csv",
        help = "Path to the account file: holder,initial_balance per line"
    )]
    pub accounts: PathBuf,

    /// Transaction records (batch mode only)
    #[arg(
        long = "transactions",
        value_name = "PATH",
        default_value = "transaction.csv",
        help = "Path to the transaction file: account,operation,amount per line"
    )]
    pub transactions: PathBuf,

    /// Seed for random account numbers
    #[arg(
        long = "seed",
        value_name = "SEED",
        help = "Seed the account-number generator for reproducible runs"
    )]
    pub seed: Option<u64>,
}

/// Available session modes
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SessionMode {
    Batch,
    Interactive,
}

impl CliArgs {
    /// Create a SessionConfig from CLI arguments
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            accounts_path: self.accounts.clone(),
            transactions_path: self.transactions.clone(),
            seed: self.seed,
        }
    }
}

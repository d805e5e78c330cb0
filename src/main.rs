//! Bank ledger CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --accounts data/account.csv --transactions data/transaction.csv
//! cargo run -- --mode interactive
//! RUST_LOG=bank_ledger=debug cargo run -- --seed 7
//! ```
//!
//! Batch mode (the default) replays the account file and then the transaction file
//! and prints the results to stdout. Interactive mode reads commands from stdin.
//! Log output goes to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success, including runs where a batch phase was abandoned
//! - 1: Reading stdin or writing stdout failed

use bank_ledger::{cli, session};
use std::process;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "bank_ledger=warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse_args();
    let session = session::create_session(args.mode, args.to_session_config());

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    if let Err(e) = session.run(&mut input, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

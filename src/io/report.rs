//! User-facing text output
//!
//! Every line the sessions print is built here, so the wording lives in one place.
//! Account numbers in batch output are zero-padded to 7 digits.

use crate::core::Ledger;
use crate::types::{AccountNumber, Amount, LedgerError, TransactionRecord};
use std::io::Write;

pub const SYSTEM_STARTED: &str = "Bank system started";
pub const SYSTEM_FINISHED: &str = "Bank system finished";
pub const ACCOUNTS_OPENED: &str = "Account opening completed";

pub const PROMPT_PEOPLE: &str = "Enter the number of accounts to open: ";
pub const PROMPT_NAME: &str = "Enter the account holder name: ";
pub const PROMPT_INITIAL_BALANCE: &str = "Enter the initial balance: ";
pub const PROMPT_ACCOUNT: &str = "Enter the account number: ";
pub const PROMPT_DEPOSIT: &str = "Enter the deposit amount: ";
pub const PROMPT_WITHDRAW: &str = "Enter the withdrawal amount: ";
pub const PROMPT_SELECT: &str = "Select: ";

pub const MENU: [&str; 5] = [
    "Select an operation",
    "1: Deposit",
    "2: Withdraw",
    "3: Balance inquiry",
    "4: Exit",
];

pub const DEPOSIT_DONE: &str = "Deposit completed";
pub const WITHDRAW_DONE: &str = "Withdrawal completed";
pub const WITHDRAW_INSUFFICIENT: &str = "Insufficient funds; the withdrawal was refused";
pub const AMOUNT_INVALID: &str = "Invalid amount. The transaction was not executed.";
pub const NO_ACCOUNT: &str = "No matching account.";
pub const INVALID_INPUT: &str = "Invalid input. Please try again.";
pub const INVALID_NAME: &str = "The name is blank. Please try again.";
pub const EXIT: &str = "Exiting the system.";
pub const HISTORY_HEADER: &str = "[Transaction history]";
pub const NO_HISTORY: &str = "No transaction history.";

/// Confirmation printed for each account created by the batch account phase
pub fn account_opened_line(number: AccountNumber, holder_name: &str, balance: Amount) -> String {
    format!(
        "Account number: {:07} Holder: {} Initial balance: {}",
        number, holder_name, balance
    )
}

pub fn deposit_line(number: AccountNumber, amount: Amount) -> String {
    format!("Deposited to {:07}. Amount: {}", number, amount)
}

pub fn withdraw_line(number: AccountNumber, amount: Amount) -> String {
    format!("Withdrew from {:07}. Amount: {}", number, amount)
}

/// Header printed before each interactive account opening (1-based)
pub fn opening_header(ordinal: usize) -> String {
    format!("Opening account {}", ordinal)
}

pub fn account_number_line(number: AccountNumber) -> String {
    format!("Your account number: {:07}", number)
}

/// One history entry: `Date: yyyy-MM-dd Type: <label> Amount: n Balance: n`
pub fn history_line(record: &TransactionRecord) -> String {
    format!(
        "Date: {} Type: {} Amount: {} Balance: {}",
        record.date.format("%Y-%m-%d"),
        record.kind,
        record.amount,
        record.balance_after
    )
}

/// First diagnostic line of a phase abort
pub fn error_detail_line(error: &LedgerError) -> String {
    format!("[Error detail]: {}", error)
}

/// Second diagnostic line of a phase abort, naming the input that was abandoned
pub fn load_failure_line(source: &str) -> String {
    format!("Failed to load data, aborting: {}", source)
}

/// Balance inquiry from a batch `getBalance` record
///
/// Prints holder and balance, then the full history in chronological order.
pub fn write_balance_report(ledger: &Ledger, output: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        output,
        "Balance inquiry ({}): {}",
        ledger.holder_name(),
        ledger.balance()
    )?;
    writeln!(
        output,
        "Transaction history (account number: {:07})",
        ledger.account_number()
    )?;
    for record in ledger.history() {
        writeln!(output, "{}", history_line(record))?;
    }
    Ok(())
}

/// Balance inquiry from the interactive menu
pub fn write_account_summary(ledger: &Ledger, output: &mut dyn Write) -> std::io::Result<()> {
    writeln!(output, "Account holder: {}", ledger.holder_name())?;
    writeln!(output, "Balance: {}", ledger.balance())?;
    writeln!(output, "{}", HISTORY_HEADER)?;

    if ledger.history().is_empty() {
        writeln!(output, "{}", NO_HISTORY)?;
        return Ok(());
    }
    for record in ledger.history() {
        writeln!(output, "{}", history_line(record))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RandomAllocator;
    use crate::types::{Phase, TransactionKind};
    use chrono::NaiveDate;
    use rstest::rstest;

    fn today() -> String {
        chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
    }

    #[rstest]
    #[case(1, "Account number: 0000001 Holder: Bob Initial balance: 500")]
    #[case(1234567, "Account number: 1234567 Holder: Bob Initial balance: 500")]
    fn test_account_opened_line_pads_number(#[case] number: AccountNumber, #[case] expected: &str) {
        assert_eq!(account_opened_line(number, "Bob", 500), expected);
    }

    #[test]
    fn test_transaction_confirmation_lines() {
        assert_eq!(deposit_line(1, 100), "Deposited to 0000001. Amount: 100");
        assert_eq!(withdraw_line(42, 50), "Withdrew from 0000042. Amount: 50");
    }

    #[test]
    fn test_interactive_opening_lines() {
        assert_eq!(opening_header(2), "Opening account 2");
        assert_eq!(account_number_line(4821337), "Your account number: 4821337");
    }

    #[test]
    fn test_history_line() {
        let record = TransactionRecord::dated(
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            TransactionKind::Withdraw,
            200,
            800,
        );

        assert_eq!(
            history_line(&record),
            "Date: 2024-03-09 Type: Withdrawal Amount: 200 Balance: 800"
        );
    }

    #[test]
    fn test_diagnostic_lines() {
        let error = LedgerError::field_count(Phase::Accounts, 1, 2, "BadRow");

        assert_eq!(
            error_detail_line(&error),
            "[Error detail]: Malformed account record at line 2: expected 2 fields, found 1: BadRow"
        );
        assert_eq!(
            load_failure_line("account.csv"),
            "Failed to load data, aborting: account.csv"
        );
    }

    #[test]
    fn test_write_balance_report() {
        let mut allocator = RandomAllocator::with_seed(0);
        let mut ledger = Ledger::open_with_number("Bob", 500, 1, &mut allocator);
        ledger.deposit(100).unwrap();
        let mut output = Vec::new();

        write_balance_report(&ledger, &mut output).unwrap();

        let expected = format!(
            "Balance inquiry (Bob): 600\n\
             Transaction history (account number: 0000001)\n\
             Date: {today} Type: Initial deposit Amount: 500 Balance: 500\n\
             Date: {today} Type: Deposit Amount: 100 Balance: 600\n",
            today = today()
        );
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_write_account_summary() {
        let mut allocator = RandomAllocator::with_seed(0);
        let ledger = Ledger::open_with_number("Alice", 1000, 7, &mut allocator);
        let mut output = Vec::new();

        write_account_summary(&ledger, &mut output).unwrap();

        let expected = format!(
            "Account holder: Alice\n\
             Balance: 1000\n\
             [Transaction history]\n\
             Date: {} Type: Initial deposit Amount: 1000 Balance: 1000\n",
            today()
        );
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }
}

//! Interactive console session
//!
//! Opens a number of accounts under random account numbers, then serves a menu of
//! deposit, withdrawal and balance inquiry until the user exits. Invalid input is
//! answered with a message and asked for again; end of input ends the session.

use crate::core::LedgerRegistry;
use crate::io::report;
use crate::session::{Session, SessionConfig};
use crate::types::{Amount, LedgerError};
use std::io::{BufRead, Write};

const MENU_DEPOSIT: i64 = 1;
const MENU_WITHDRAW: i64 = 2;
const MENU_BALANCE: i64 = 3;
const MENU_EXIT: i64 = 4;

/// Console-driven session over arbitrary input and output streams
#[derive(Debug, Clone)]
pub struct InteractiveSession {
    config: SessionConfig,
}

impl InteractiveSession {
    pub fn new(config: SessionConfig) -> Self {
        InteractiveSession { config }
    }
}

impl Session for InteractiveSession {
    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<(), LedgerError> {
        let mut console = Console { input, output };
        let mut registry = LedgerRegistry::with_allocator(self.config.allocator());

        console.line(report::SYSTEM_STARTED)?;

        let Some(people) = console.read_positive_int(report::PROMPT_PEOPLE)? else {
            return console.close();
        };

        for ordinal in 1..=people {
            console.line(&report::opening_header(ordinal as usize))?;

            let Some(name) = console.read_name(report::PROMPT_NAME)? else {
                return console.close();
            };
            let Some(balance) = console.read_positive_int(report::PROMPT_INITIAL_BALANCE)? else {
                return console.close();
            };

            let number = registry.open_account(&name, balance)?;
            console.line(&report::account_number_line(number))?;
        }

        loop {
            console.menu()?;

            let Some(select) = console.read_int("")? else {
                break;
            };
            if !(MENU_DEPOSIT..=MENU_EXIT).contains(&select) {
                console.line(report::INVALID_INPUT)?;
                continue;
            }
            if select == MENU_EXIT {
                console.line(report::EXIT)?;
                break;
            }

            let Some(number) = console.read_int(report::PROMPT_ACCOUNT)? else {
                break;
            };
            let Some(ledger) = registry.lookup_mut(number) else {
                console.line(report::NO_ACCOUNT)?;
                continue;
            };

            match select {
                MENU_DEPOSIT => {
                    let Some(amount) = console.read_int(report::PROMPT_DEPOSIT)? else {
                        break;
                    };
                    match ledger.deposit(amount) {
                        Ok(_) => console.line(report::DEPOSIT_DONE)?,
                        Err(_) => console.line(report::AMOUNT_INVALID)?,
                    }
                }
                MENU_WITHDRAW => {
                    let Some(amount) = console.read_int(report::PROMPT_WITHDRAW)? else {
                        break;
                    };
                    match ledger.withdraw(amount) {
                        Ok(_) => console.line(report::WITHDRAW_DONE)?,
                        Err(LedgerError::InsufficientFunds { .. }) => {
                            console.line(report::WITHDRAW_INSUFFICIENT)?
                        }
                        Err(_) => console.line(report::AMOUNT_INVALID)?,
                    }
                }
                MENU_BALANCE => report::write_account_summary(ledger, &mut *console.output)?,
                _ => console.line(report::INVALID_INPUT)?,
            }
        }

        tracing::info!(accounts = registry.len(), "interactive session finished");
        console.close()
    }
}

/// Prompting line reader
struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl Console<'_> {
    fn line(&mut self, text: &str) -> Result<(), LedgerError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), LedgerError> {
        if !text.is_empty() {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn menu(&mut self) -> Result<(), LedgerError> {
        writeln!(self.output)?;
        for entry in report::MENU {
            self.line(entry)?;
        }
        self.prompt(report::PROMPT_SELECT)
    }

    /// Next trimmed line, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, LedgerError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_int(&mut self, prompt: &str) -> Result<Option<Amount>, LedgerError> {
        loop {
            self.prompt(prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<Amount>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.line(report::INVALID_INPUT)?,
            }
        }
    }

    fn read_positive_int(&mut self, prompt: &str) -> Result<Option<Amount>, LedgerError> {
        loop {
            let Some(value) = self.read_int(prompt)? else {
                return Ok(None);
            };
            if value > 0 {
                return Ok(Some(value));
            }
            self.line(report::INVALID_INPUT)?;
        }
    }

    fn read_name(&mut self, prompt: &str) -> Result<Option<String>, LedgerError> {
        loop {
            self.prompt(prompt)?;
            let Some(name) = self.read_line()? else {
                return Ok(None);
            };
            if !name.is_empty() {
                return Ok(Some(name));
            }
            self.line(report::INVALID_NAME)?;
        }
    }

    fn close(&mut self) -> Result<(), LedgerError> {
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IdentifierAllocator, RandomAllocator};

    const SEED: u64 = 5;

    fn first_number() -> i64 {
        RandomAllocator::with_seed(SEED).allocate()
    }

    fn run(input: &str) -> String {
        let session = InteractiveSession::new(SessionConfig {
            seed: Some(SEED),
            ..SessionConfig::default()
        });
        let mut output = Vec::new();

        session.run(&mut input.as_bytes(), &mut output).unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_open_one_account_and_exit() {
        let output = run("1\nBob\n500\n4\n");

        let expected = format!(
            "Bank system started\n\
             Enter the number of accounts to open: \
             Opening account 1\n\
             Enter the account holder name: \
             Enter the initial balance: \
             Your account number: {:07}\n\
             \n\
             Select an operation\n\
             1: Deposit\n\
             2: Withdraw\n\
             3: Balance inquiry\n\
             4: Exit\n\
             Select: \
             Exiting the system.\n",
            first_number()
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_deposit_then_balance_inquiry() {
        let n = first_number();
        let input = format!("1\nAlice\n1000\n1\n{n}\n500\n3\n{n}\n4\n");

        let output = run(&input);

        assert!(output.contains("Deposit completed\n"));
        assert!(output.contains("Account holder: Alice\nBalance: 1500\n[Transaction history]\n"));
        assert!(output.contains("Type: Initial deposit Amount: 1000 Balance: 1000\n"));
        assert!(output.contains("Type: Deposit Amount: 500 Balance: 1500\n"));
    }

    #[test]
    fn test_withdraw_distinguishes_failures() {
        let n = first_number();
        let input = format!("1\nAlice\n1000\n2\n{n}\n2000\n2\n{n}\n0\n2\n{n}\n400\n3\n{n}\n4\n");

        let output = run(&input);

        assert!(output.contains("Insufficient funds; the withdrawal was refused\n"));
        assert!(output.contains("Invalid amount. The transaction was not executed.\n"));
        assert!(output.contains("Withdrawal completed\n"));
        assert!(output.contains("Balance: 600\n"));
    }

    #[test]
    fn test_invalid_deposit_amount() {
        let n = first_number();
        let output = run(&format!("1\nBob\n10\n1\n{n}\n-3\n4\n"));

        assert!(output.contains("Invalid amount. The transaction was not executed.\n"));
        assert!(!output.contains("Deposit completed"));
    }

    #[test]
    fn test_unknown_account_number() {
        let output = run("1\nBob\n10\n1\n42\n4\n");

        assert!(output.contains("No matching account.\n"));
    }

    #[test]
    fn test_invalid_inputs_are_asked_again() {
        let output = run("0\nabc\n1\n   \nBob\n-5\nten\n500\n9\nx\n4\n");

        assert_eq!(output.matches("Invalid input. Please try again.").count(), 6);
        assert_eq!(output.matches("The name is blank. Please try again.").count(), 1);
        assert!(output.contains(&format!("Your account number: {:07}", first_number())));
        assert!(output.ends_with("Exiting the system.\n"));
    }

    #[test]
    fn test_several_accounts_get_distinct_numbers() {
        let output = run("2\nBob\n100\nAlice\n200\n4\n");

        let numbers: Vec<_> = output
            .lines()
            .filter_map(|line| line.split("Your account number: ").nth(1))
            .collect();
        assert_eq!(numbers.len(), 2);
        assert_ne!(numbers[0], numbers[1]);
        assert!(output.contains("Opening account 2\n"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let output = run("1\nBob\n");

        assert!(output.ends_with("Enter the initial balance: "));
    }

    #[test]
    fn test_end_of_input_in_menu() {
        let output = run("1\nBob\n100\n");

        assert!(output.ends_with("Select: "));
    }
}

//! Interactive menu shell
//!
//! Prompts the operator, parses answers with [`crate::cli::input`], calls the
//! ledger and renders the outcome. The shell is generic over its input and
//! output streams so it can be driven by a script in tests.
//!
//! End of input at any prompt behaves like "Save & Exit".

use crate::cli::input::{parse_account_number, parse_amount, parse_owner_name};
use crate::core::{Ledger, SnapshotStore};
use crate::types::LedgerError;
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "Menu:
1. Create Account
2. Deposit
3. Withdraw
4. Transfer
5. View Account
6. Delete Account
7. List All Accounts
8. Save & Exit
Enter choice (1-8):";

/// Menu entries, numbered as shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    Transfer,
    ViewAccount,
    DeleteAccount,
    ListAccounts,
    SaveAndExit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::CreateAccount),
            "2" => Ok(MenuChoice::Deposit),
            "3" => Ok(MenuChoice::Withdraw),
            "4" => Ok(MenuChoice::Transfer),
            "5" => Ok(MenuChoice::ViewAccount),
            "6" => Ok(MenuChoice::DeleteAccount),
            "7" => Ok(MenuChoice::ListAccounts),
            "8" => Ok(MenuChoice::SaveAndExit),
            other => Err(format!("Invalid choice '{}'", other)),
        }
    }
}

/// Why a menu action stopped before completing
#[derive(Debug)]
enum Interrupt {
    /// Invalid input; a message was shown, back to the menu
    Abort,
    /// Input stream closed
    Eof,
    /// Terminal I/O failed
    Failed(LedgerError),
}

impl From<std::io::Error> for Interrupt {
    fn from(error: std::io::Error) -> Self {
        Interrupt::Failed(error.into())
    }
}

/// Interactive shell driving a [`Ledger`]
pub struct Shell<'a, S, R, W> {
    ledger: &'a Ledger<S>,
    input: R,
    output: W,
    bank_name: String,
}

impl<'a, S, R, W> Shell<'a, S, R, W>
where
    S: SnapshotStore,
    R: BufRead,
    W: Write,
{
    pub fn new(ledger: &'a Ledger<S>, input: R, output: W) -> Self {
        Shell {
            ledger,
            input,
            output,
            bank_name: "Pine Valley Bank".to_string(),
        }
    }

    /// Set the name shown in the banner
    pub fn with_bank_name(mut self, bank_name: impl Into<String>) -> Self {
        self.bank_name = bank_name.into();
        self
    }

    /// Run the menu loop until the operator exits or input ends
    ///
    /// # Errors
    ///
    /// Only terminal I/O failures are returned. Ledger rejections and store
    /// failures are shown to the operator and the loop continues.
    pub fn run(&mut self) -> Result<(), LedgerError> {
        writeln!(self.output, "=== {} Management System ===", self.bank_name)?;

        loop {
            writeln!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return self.save_and_exit();
            };

            let outcome = match line.parse::<MenuChoice>() {
                Ok(MenuChoice::SaveAndExit) => return self.save_and_exit(),
                Ok(choice) => self.dispatch(choice),
                Err(_) => {
                    writeln!(self.output, "Invalid choice. Enter number 1-8.")?;
                    Ok(())
                }
            };

            match outcome {
                Ok(()) | Err(Interrupt::Abort) => {}
                Err(Interrupt::Eof) => return self.save_and_exit(),
                Err(Interrupt::Failed(e)) => return Err(e),
            }
            writeln!(self.output)?;
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<(), Interrupt> {
        match choice {
            MenuChoice::CreateAccount => self.create_account(),
            MenuChoice::Deposit => self.deposit(),
            MenuChoice::Withdraw => self.withdraw(),
            MenuChoice::Transfer => self.transfer(),
            MenuChoice::ViewAccount => self.view_account(),
            MenuChoice::DeleteAccount => self.delete_account(),
            MenuChoice::ListAccounts => self.list_accounts(),
            MenuChoice::SaveAndExit => Ok(()),
        }
    }

    fn create_account(&mut self) -> Result<(), Interrupt> {
        let name = self.ask("Enter customer name: ", parse_owner_name)?;
        let amount = self.ask("Initial deposit amount (e.g. 1000.00): ", parse_amount)?;

        match self.ledger.create_account(name, amount) {
            Ok(account) => {
                writeln!(self.output, "Account created successfully!")?;
                writeln!(self.output, "{}", account)?;
            }
            Err(e) => writeln!(self.output, "Account creation failed ({}).", e)?,
        }
        Ok(())
    }

    fn deposit(&mut self) -> Result<(), Interrupt> {
        let account_number = self.ask("Enter Account Number: ", parse_account_number)?;
        let amount = self.ask("Enter deposit amount: ", parse_amount)?;

        match self.ledger.deposit(account_number, amount) {
            Ok(account) => writeln!(
                self.output,
                "Deposit successful. New balance: {:.2}",
                account.balance()
            )?,
            Err(e) => writeln!(self.output, "Deposit failed ({}).", e)?,
        }
        Ok(())
    }

    fn withdraw(&mut self) -> Result<(), Interrupt> {
        let account_number = self.ask("Enter Account Number: ", parse_account_number)?;
        let amount = self.ask("Enter withdrawal amount: ", parse_amount)?;

        match self.ledger.withdraw(account_number, amount) {
            Ok(account) => writeln!(
                self.output,
                "Withdrawal successful. New balance: {:.2}",
                account.balance()
            )?,
            Err(e) => writeln!(self.output, "Withdrawal failed ({}).", e)?,
        }
        Ok(())
    }

    fn transfer(&mut self) -> Result<(), Interrupt> {
        let from = self.ask("From Account Number: ", parse_account_number)?;
        let to = self.ask("To Account Number: ", parse_account_number)?;
        let amount = self.ask("Enter transfer amount: ", parse_amount)?;

        match self.ledger.transfer(from, to, amount) {
            Ok(_) => writeln!(self.output, "Transfer successful.")?,
            Err(e) => writeln!(self.output, "Transfer failed ({}).", e)?,
        }
        Ok(())
    }

    fn view_account(&mut self) -> Result<(), Interrupt> {
        let account_number = self.ask("Enter Account Number: ", parse_account_number)?;

        match self.ledger.get_account(account_number) {
            Some(account) => writeln!(self.output, "{}", account)?,
            None => writeln!(self.output, "Account not found.")?,
        }
        Ok(())
    }

    fn delete_account(&mut self) -> Result<(), Interrupt> {
        let account_number = self.ask("Enter Account Number to delete: ", parse_account_number)?;

        match self.ledger.delete_account(account_number) {
            Ok(_) => writeln!(self.output, "Account deleted.")?,
            Err(e) => writeln!(self.output, "Delete failed ({}).", e)?,
        }
        Ok(())
    }

    fn list_accounts(&mut self) -> Result<(), Interrupt> {
        let accounts = self.ledger.list_accounts();
        if accounts.is_empty() {
            writeln!(self.output, "No accounts found.")?;
            return Ok(());
        }

        writeln!(self.output, "All accounts:")?;
        for account in accounts {
            writeln!(self.output, "{}", account)?;
        }
        Ok(())
    }

    fn save_and_exit(&mut self) -> Result<(), LedgerError> {
        match self.ledger.save() {
            Ok(()) => writeln!(self.output, "Exiting... data saved. Goodbye!")?,
            Err(e) => {
                writeln!(self.output, "Error saving data file: {}", e)?;
                writeln!(self.output, "Exiting... Goodbye!")?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Prompt, read one line and parse it, reporting invalid input
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl FnOnce(&str) -> Result<T, LedgerError>,
    ) -> Result<T, Interrupt> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let line = self
            .read_line()
            .map_err(Interrupt::Failed)?
            .ok_or(Interrupt::Eof)?;

        match parse(&line) {
            Ok(value) => Ok(value),
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                Err(Interrupt::Abort)
            }
        }
    }

    /// Next trimmed input line, or `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so the line fails to
    /// parse instead of ending the session.
    fn read_line(&mut self) -> Result<Option<String>, LedgerError> {
        let mut buffer = Vec::new();
        if self.input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buffer).trim().to_string()))
    }
}

//! Interactive menu session
//!
//! Drives the home, ledger and reports menus over any line-oriented input and
//! output, so the whole flow can be scripted in tests. All work happens
//! synchronously between two reads of input.
//!
//! Closing the input (end of file) ends the session from any menu.

use crate::core::traits::RecordLog;
use crate::core::{
    filter_by_date_range, filter_by_kind, filter_by_vendor, validate_entry, EntryInput,
    ReportPeriod, TransactionStore, VendorMatch,
};
use crate::io::{encode, write_table, LedgerFile};
use crate::types::{Transaction, TransactionKind};
use chrono::{Local, NaiveDateTime};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Source of the current date and time
pub type Clock = fn() -> NaiveDateTime;

/// Local wall-clock time
pub fn system_clock() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Where to go after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Stay in (or return to) the calling menu
    Continue,

    /// Input is closed; unwind every menu
    Quit,
}

/// One interactive session over a transaction store
pub struct Session<R, W, L: RecordLog = LedgerFile> {
    store: TransactionStore<L>,
    input: R,
    output: W,
    clock: Clock,
}

impl<R: BufRead, W: Write, L: RecordLog> Session<R, W, L> {
    pub fn new(store: TransactionStore<L>, input: R, output: W) -> Self {
        Session {
            store,
            input,
            output,
            clock: system_clock,
        }
    }

    /// Replace the clock used for blank date entries and report presets
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &TransactionStore<L> {
        &self.store
    }

    pub fn into_store(self) -> TransactionStore<L> {
        self.store
    }

    /// Run the home menu until the user exits or input closes
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nWelcome to Financial Tracker App\n")?;

        loop {
            writeln!(self.output, "=== Home Screen ===")?;
            writeln!(self.output, "Choose an option:")?;
            writeln!(self.output, "D) Add Deposit")?;
            writeln!(self.output, "P) Make Payment (Debit)")?;
            writeln!(self.output, "L) Ledger")?;
            writeln!(self.output, "X) Exit")?;

            let Some(choice) = self.read_line()? else {
                return Ok(());
            };

            let flow = match choice.to_uppercase().as_str() {
                "D" => self.add_entry(TransactionKind::Deposit)?,
                "P" => self.add_entry(TransactionKind::Payment)?,
                "L" => self.ledger_menu()?,
                "X" => return Ok(()),
                _ => self.invalid_option()?,
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Prompt for one entry, re-prompting the whole entry until it validates
    fn add_entry(&mut self, kind: TransactionKind) -> io::Result<Flow> {
        loop {
            writeln!(
                self.output,
                "Please enter information below to log your {}:",
                kind.label()
            )?;
            writeln!(
                self.output,
                "To log the current date and time, leave Date and Time empty and press enter."
            )?;

            let Some(input) = self.read_entry()? else {
                return Ok(Flow::Quit);
            };

            let transaction = match validate_entry(kind, &input, (self.clock)()) {
                Ok(transaction) => transaction,
                Err(e) => {
                    warn!(error = %e, "Rejected {} entry", kind.label());
                    writeln!(self.output, "{}. Please try again.", e)?;
                    continue;
                }
            };

            match self.store.append(transaction) {
                Ok(stored) => {
                    writeln!(
                        self.output,
                        "Successfully added new {}:\n{}",
                        kind.label(),
                        encode(stored)
                    )?;
                }
                Err(e) => {
                    writeln!(self.output, "Could not save the {}: {}", kind.label(), e)?;
                }
            }
            return Ok(Flow::Continue);
        }
    }

    fn read_entry(&mut self) -> io::Result<Option<EntryInput>> {
        let Some(date_time) = self.prompt("Date and Time 'yyyy-MM-dd HH:mm:ss': ")? else {
            return Ok(None);
        };
        let Some(description) = self.prompt("Description: ")? else {
            return Ok(None);
        };
        let Some(vendor) = self.prompt("Vendor: ")? else {
            return Ok(None);
        };
        let Some(amount) = self.prompt("Amount: ")? else {
            return Ok(None);
        };

        Ok(Some(EntryInput {
            date_time,
            description,
            vendor,
            amount,
        }))
    }

    fn ledger_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "== Ledger ==")?;
            writeln!(self.output, "Choose an option:")?;
            writeln!(self.output, "A) All")?;
            writeln!(self.output, "D) Deposits")?;
            writeln!(self.output, "P) Payments")?;
            writeln!(self.output, "R) Reports")?;
            writeln!(self.output, "H) Home")?;

            let Some(choice) = self.read_line()? else {
                return Ok(Flow::Quit);
            };

            let flow = match choice.to_uppercase().as_str() {
                "A" => show(&mut self.output, "All Transactions:", self.store.ledger())?,
                "D" => show(
                    &mut self.output,
                    "All Deposits:",
                    filter_by_kind(self.store.ledger(), TransactionKind::Deposit),
                )?,
                "P" => show(
                    &mut self.output,
                    "All Payments:",
                    filter_by_kind(self.store.ledger(), TransactionKind::Payment),
                )?,
                "R" => self.reports_menu()?,
                "H" => return Ok(Flow::Continue),
                _ => self.invalid_option()?,
            };

            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn reports_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "= Reports =")?;
            writeln!(self.output, "Choose an option:")?;
            writeln!(self.output, "1) Month To Date")?;
            writeln!(self.output, "2) Previous Month")?;
            writeln!(self.output, "3) Year To Date")?;
            writeln!(self.output, "4) Previous Year")?;
            writeln!(self.output, "5) Search by Vendor")?;
            writeln!(self.output, "6) Custom Search")?;
            writeln!(self.output, "0) Back")?;

            let Some(choice) = self.read_line()? else {
                return Ok(Flow::Quit);
            };

            let flow = match choice.as_str() {
                "1" => self.period_report(ReportPeriod::MonthToDate)?,
                "2" => self.period_report(ReportPeriod::PreviousMonth)?,
                "3" => self.period_report(ReportPeriod::YearToDate)?,
                "4" => self.period_report(ReportPeriod::PreviousYear)?,
                "5" => self.vendor_report()?,
                "6" => self.custom_search()?,
                "0" => return Ok(Flow::Continue),
                _ => self.invalid_option()?,
            };

            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn period_report(&mut self, period: ReportPeriod) -> io::Result<Flow> {
        let today = (self.clock)().date();
        writeln!(self.output, "{} Report:", period)?;

        let Some(range) = period.range(today) else {
            writeln!(
                self.output,
                "The {} period is outside the supported calendar.",
                period
            )?;
            return Ok(Flow::Continue);
        };

        debug!(%period, %range, "Running date report");
        writeln!(self.output, "Start date: {}", range.start)?;
        writeln!(self.output, "End date: {}", range.end)?;

        let view = filter_by_date_range(self.store.ledger(), &range);
        write_table(view, &mut self.output)?;
        Ok(Flow::Continue)
    }

    fn vendor_report(&mut self) -> io::Result<Flow> {
        let Some(vendor) = self.prompt("Please enter the vendor: ")? else {
            return Ok(Flow::Quit);
        };

        match filter_by_vendor(self.store.ledger(), &vendor) {
            VendorMatch::Found(found) => {
                write_table(found, &mut self.output)?;
            }
            VendorMatch::NotFound { vendor, searched: 0 } => {
                writeln!(
                    self.output,
                    "The ledger is empty. No transactions found for vendor: {}",
                    vendor
                )?;
            }
            VendorMatch::NotFound { vendor, searched } => {
                writeln!(
                    self.output,
                    "Did not find any transaction under vendor: {} ({} transactions searched)",
                    vendor, searched
                )?;
            }
        }
        Ok(Flow::Continue)
    }

    fn custom_search(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Custom search is not available yet.")?;
        writeln!(self.output, "Returning to the Reports screen...")?;
        Ok(Flow::Continue)
    }

    fn invalid_option(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Invalid option")?;
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one trimmed line, `None` once input is closed
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Print a titled view of transactions
fn show<'a, I>(output: &mut dyn Write, title: &str, view: I) -> io::Result<Flow>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    writeln!(output, "{}", title)?;
    write_table(view, output)?;
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LedgerError;
    use chrono::NaiveDate;
    use std::io::Cursor;

    #[derive(Debug, Default)]
    struct MemoryLog {
        fail_writes: bool,
    }

    impl RecordLog for MemoryLog {
        fn load_all(&self) -> Result<Vec<Transaction>, LedgerError> {
            Ok(Vec::new())
        }

        fn append(&mut self, _transaction: &Transaction) -> Result<(), LedgerError> {
            if self.fail_writes {
                return Err(LedgerError::FileAccess {
                    path: "memory".to_string(),
                    message: "read-only".to_string(),
                });
            }
            Ok(())
        }
    }

    fn fixed_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 4, 20)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    }

    fn run_script(log: MemoryLog, script: &str) -> (TransactionStore<MemoryLog>, String) {
        let store = TransactionStore::open(log).unwrap();
        let mut output = Vec::new();
        let mut session =
            Session::new(store, Cursor::new(script.as_bytes()), &mut output).with_clock(fixed_clock);
        session.run().unwrap();
        let store = session.into_store();
        (store, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_exit_immediately() {
        let (store, output) = run_script(MemoryLog::default(), "x\n");
        assert!(store.is_empty());
        assert!(output.contains("Home Screen"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (_, output) = run_script(MemoryLog::default(), "L\nR\n");
        assert!(output.contains("= Reports ="));
    }

    #[test]
    fn test_payment_with_blank_date_uses_clock() {
        let (store, output) = run_script(MemoryLog::default(), "p\n\nkeyboard\nAmazon\n89.5\nx\n");

        assert_eq!(store.len(), 1);
        assert!(output.contains("Successfully added new payment:\n2023-04-20|09:15:00|keyboard|Amazon|-89.50"));
    }

    #[test]
    fn test_invalid_amount_reprompts_whole_entry() {
        let script = "D\n2023-04-15 11:15:00\nInvoice\nJoe\n-5\n\
                      2023-04-15 11:15:00\nInvoice\nJoe\n1500\nX\n";
        let (store, output) = run_script(MemoryLog::default(), script);

        assert_eq!(store.len(), 1);
        assert_eq!(output.matches("Please enter information below").count(), 2);
        assert!(output.contains("must be greater than zero. Please try again."));
    }

    #[test]
    fn test_failed_write_reports_and_keeps_memory_clean() {
        let log = MemoryLog { fail_writes: true };
        let (store, output) = run_script(log, "D\n\nInvoice\nJoe\n10\nX\n");

        assert!(store.is_empty());
        assert!(output.contains("Could not save the deposit"));
    }

    #[test]
    fn test_custom_search_is_not_available() {
        let (_, output) = run_script(MemoryLog::default(), "L\nR\n6\n0\nH\nX\n");
        assert!(output.contains("Custom search is not available yet."));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let (_, output) = run_script(MemoryLog::default(), "Q\nX\n");
        assert!(output.contains("Invalid option"));
    }

    #[test]
    fn test_vendor_search_on_empty_ledger() {
        let (_, output) = run_script(MemoryLog::default(), "L\nR\n5\nAmazon\n0\nH\nX\n");
        assert!(output.contains("The ledger is empty. No transactions found for vendor: Amazon"));
    }
}

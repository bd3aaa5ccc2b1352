//! Column formatting for ledger views
//!
//! Rendering is one-way: rows are never parsed back into transactions.

use crate::io::record_format::{DATE_FORMAT, TIME_FORMAT};
use crate::types::Transaction;
use std::io::Write;

/// Display width of the description column
pub const DESCRIPTION_WIDTH: usize = 30;

/// Display width of the vendor column
pub const VENDOR_WIDTH: usize = 20;

const ELLIPSIS: &str = "...";

/// Header row matching the widths of `format_row`
pub fn header() -> String {
    format!(
        "{:<10}|{:<8}|{:<dw$}|{:<vw$}|{}",
        "Date",
        "Time",
        "Description",
        "Vendor",
        "Amount",
        dw = DESCRIPTION_WIDTH,
        vw = VENDOR_WIDTH,
    )
}

/// Render one transaction as an aligned row
pub fn format_row(transaction: &Transaction) -> String {
    format!(
        "{}|{}|{:<dw$}|{:<vw$}|{:.2}",
        transaction.date.format(DATE_FORMAT),
        transaction.time.format(TIME_FORMAT),
        truncate(&transaction.description, DESCRIPTION_WIDTH),
        truncate(&transaction.vendor, VENDOR_WIDTH),
        transaction.amount,
        dw = DESCRIPTION_WIDTH,
        vw = VENDOR_WIDTH,
    )
}

/// Cut text to `width` characters, ending in `...` when anything was dropped
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Write a header followed by one row per transaction
///
/// An empty view prints a notice instead of a bare header.
pub fn write_table<'a, I>(transactions: I, output: &mut dyn Write) -> std::io::Result<usize>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut rows = transactions.into_iter().peekable();
    if rows.peek().is_none() {
        writeln!(output, "No transactions to display.")?;
        return Ok(0);
    }

    writeln!(output, "{}", header())?;
    let mut count = 0;
    for transaction in rows {
        writeln!(output, "{}", format_row(transaction))?;
        count += 1;
    }
    Ok(count)
}

//! Input validation for new ledger entries
//!
//! Pure functions from raw user text to canonical values. Nothing here reads
//! input or prints; the interactive layer owns the re-prompt loop and
//! supplies "now" explicitly.
//!
//! # Rules
//!
//! - Date and time: `yyyy-MM-dd HH:mm:ss`, or blank for the current moment
//! - Amount: a number, rounded to two decimals (half-up), strictly positive after rounding
//! - Payments are negated once, after validation
//! - Description and vendor must not contain the `|` field separator

use crate::io::record_format::{
    parse_canonical_amount, parse_canonical_date, parse_canonical_date_time,
    parse_canonical_time, FIELD_DELIMITER,
};
use crate::types::transaction::round_amount;
use crate::types::{LedgerError, Transaction, TransactionKind};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SubsecRound};
use rust_decimal::Decimal;

/// Outcome of validating one raw value
pub type Validated<T> = Result<T, LedgerError>;

/// Raw text of one entry, as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryInput {
    /// Combined `yyyy-MM-dd HH:mm:ss`, or blank for now
    pub date_time: String,
    pub description: String,
    pub vendor: String,
    pub amount: String,
}

/// Parse a combined date and time; blank means `now`
pub fn parse_date_time(raw: &str, now: NaiveDateTime) -> Validated<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(now.trunc_subsecs(0));
    }

    parse_canonical_date_time(raw).ok_or_else(|| {
        LedgerError::invalid_input(format!(
            "'{}' does not match the format yyyy-MM-dd HH:mm:ss",
            raw
        ))
    })
}

/// Parse a date alone; blank means `today`
pub fn parse_date(raw: &str, today: NaiveDate) -> Validated<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(today);
    }

    parse_canonical_date(raw).ok_or_else(|| {
        LedgerError::invalid_input(format!("'{}' does not match the format yyyy-MM-dd", raw))
    })
}

/// Parse a time alone; blank means `now`
pub fn parse_time(raw: &str, now: NaiveTime) -> Validated<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(now.trunc_subsecs(0));
    }

    parse_canonical_time(raw).ok_or_else(|| {
        LedgerError::invalid_input(format!("'{}' does not match the format HH:mm:ss", raw))
    })
}

/// Resolve separately entered date and time, each blank one falling back to `now`
pub fn resolve_date_and_time(
    date_raw: &str,
    time_raw: &str,
    now: NaiveDateTime,
) -> Validated<NaiveDateTime> {
    let date = parse_date(date_raw, now.date())?;
    let time = parse_time(time_raw, now.time())?;
    Ok(date.and_time(time))
}

/// Parse a strictly positive amount, rounded to two decimal places
pub fn parse_amount(raw: &str) -> Validated<Decimal> {
    let raw = raw.trim();
    let amount = parse_canonical_amount(raw).ok_or_else(|| {
        LedgerError::invalid_input(format!("amount '{}' is not a number", raw))
    })?;

    let rounded = round_amount(amount);
    if rounded <= Decimal::ZERO {
        return Err(LedgerError::invalid_input(format!(
            "amount '{}' must be greater than zero",
            raw
        )));
    }
    Ok(rounded)
}

/// Validate free text that will be persisted as a field
pub fn parse_text(raw: &str, field: &str) -> Validated<String> {
    let text = raw.trim();
    if text.contains(FIELD_DELIMITER as char) {
        return Err(LedgerError::invalid_input(format!(
            "{} must not contain '{}'",
            field, FIELD_DELIMITER as char
        )));
    }
    Ok(text.to_string())
}

/// Validate a whole entry and build the transaction for `kind`
///
/// The amount is validated as positive first; a payment is negated afterwards.
pub fn validate_entry(
    kind: TransactionKind,
    input: &EntryInput,
    now: NaiveDateTime,
) -> Validated<Transaction> {
    let date_time = parse_date_time(&input.date_time, now)?;
    let description = parse_text(&input.description, "description")?;
    let vendor = parse_text(&input.vendor, "vendor")?;
    let amount = parse_amount(&input.amount)?;

    Ok(Transaction::new(
        date_time.date(),
        date_time.time(),
        description,
        vendor,
        kind.signed(amount),
    ))
}

//! Record format handling for persisted ledger lines
//!
//! This module centralizes the on-disk line format, providing:
//! - LedgerRecord structure for deserialization of raw fields
//! - Conversion from raw fields to Transaction
//! - Encoding of a Transaction back into one line
//!
//! A persisted line looks like `2023-04-15|10:13:25|ergonomic keyboard|Amazon|-89.50`.
//! `|` inside description or vendor is not escaped; such a line will not decode
//! back to five fields.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::transaction::round_amount;
use crate::types::{LedgerError, Transaction};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Canonical date format (`yyyy-MM-dd`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical time format (`HH:mm:ss`)
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Combined date and time format accepted at entry (`yyyy-MM-dd HH:mm:ss`)
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Field separator of a persisted line
pub const FIELD_DELIMITER: u8 = b'|';

/// Number of fields in a persisted line
pub const FIELD_COUNT: usize = 5;

/// Raw persisted record
///
/// Fields are positional: date, time, description, vendor, amount.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LedgerRecord {
    pub date: String,
    pub time: String,
    pub description: String,
    pub vendor: String,
    pub amount: String,
}

/// Encode a transaction as one persisted line (without the trailing newline)
pub fn encode(transaction: &Transaction) -> String {
    format!(
        "{}|{}|{}|{}|{:.2}",
        transaction.date.format(DATE_FORMAT),
        transaction.time.format(TIME_FORMAT),
        transaction.description,
        transaction.vendor,
        round_amount(transaction.amount),
    )
}

/// Decode one persisted line
///
/// # Errors
///
/// Returns `LedgerError::MalformedRecord` if the line does not have exactly five
/// `|`-separated fields, or if the date, time or amount does not parse.
pub fn decode(line: &str) -> Result<Transaction, LedgerError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let record: csv::StringRecord = line.split(FIELD_DELIMITER as char).collect();
    decode_record(&record)
}

/// Decode one record produced by the csv reader
///
/// Line numbers are attached by the caller, which knows the reader position.
pub fn decode_record(record: &csv::StringRecord) -> Result<Transaction, LedgerError> {
    if record.len() != FIELD_COUNT {
        return Err(field_count_error(record.len()));
    }

    let raw: LedgerRecord = record.deserialize(None)?;
    convert_record(raw)
}

/// Convert raw persisted fields into a Transaction
pub fn convert_record(record: LedgerRecord) -> Result<Transaction, LedgerError> {
    let date = parse_canonical_date(&record.date).ok_or_else(|| {
        LedgerError::malformed(format!("Invalid date '{}': expected yyyy-MM-dd", record.date))
    })?;

    let time = parse_canonical_time(&record.time).ok_or_else(|| {
        LedgerError::malformed(format!("Invalid time '{}': expected HH:mm:ss", record.time))
    })?;

    let amount = parse_canonical_amount(&record.amount).ok_or_else(|| {
        LedgerError::malformed(format!(
            "Invalid amount '{}': expected digits with an optional '-' and '.'",
            record.amount
        ))
    })?;

    Ok(Transaction::new(
        date,
        time,
        record.description,
        record.vendor,
        amount,
    ))
}

/// Parse a date written exactly as `yyyy-MM-dd`
///
/// Unpadded fields, surrounding spaces and signed years are rejected.
pub fn parse_canonical_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == raw)
}

/// Parse a time written exactly as `HH:mm:ss`, without leap seconds
pub fn parse_canonical_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .ok()
        .filter(|time| time.nanosecond() == 0 && time.format(TIME_FORMAT).to_string() == raw)
}

/// Parse a date and time written exactly as `yyyy-MM-dd HH:mm:ss`
pub fn parse_canonical_date_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT)
        .ok()
        .filter(|dt| dt.nanosecond() == 0 && dt.format(DATE_TIME_FORMAT).to_string() == raw)
}

/// Parse a plain decimal: optional `-`, digits, then optionally `.` and digits
///
/// Exponents, digit separators, a leading `+` and whitespace are rejected.
pub fn parse_canonical_amount(raw: &str) -> Option<Decimal> {
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !fraction.map_or(true, is_digits) {
        return None;
    }
    Decimal::from_str(raw).ok()
}

fn field_count_error(found: usize) -> LedgerError {
    LedgerError::malformed(format!(
        "expected {} fields separated by '|', found {}",
        FIELD_COUNT, found
    ))
}

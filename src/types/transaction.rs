//! Transaction-related types for the ledger
//!
//! This module defines the single ledger entry type and the deposit/payment
//! sign convention shared by the validator and the query engine.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every amount is stored and rendered with
pub const AMOUNT_SCALE: u32 = 2;

/// Kind of ledger entry, derived from the sign of its amount
///
/// Deposits carry a positive amount, payments (debits) a negative one.
/// A zero amount belongs to neither kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Money coming in (`amount > 0`)
    Deposit,

    /// Money going out (`amount < 0`)
    Payment,
}

impl TransactionKind {
    /// Whether an amount belongs to this kind
    pub fn matches(self, amount: Decimal) -> bool {
        match self {
            TransactionKind::Deposit => amount > Decimal::ZERO,
            TransactionKind::Payment => amount < Decimal::ZERO,
        }
    }

    /// Apply this kind's sign to a validated, strictly positive amount
    ///
    /// Payments are negated exactly once here; deposits pass through.
    pub fn signed(self, positive_amount: Decimal) -> Decimal {
        match self {
            TransactionKind::Deposit => positive_amount,
            TransactionKind::Payment => -positive_amount,
        }
    }

    /// Lowercase label used in prompts and confirmations
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Payment => "payment",
        }
    }
}

/// A single ledger entry
///
/// Transactions are flat, independent records. They are never mutated after
/// creation; the store only appends them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Calendar date, no timezone
    pub date: NaiveDate,

    /// Wall-clock time of day, second precision
    pub time: NaiveTime,

    /// Free text description
    pub description: String,

    /// Free text vendor name
    pub vendor: String,

    /// Signed amount with two decimal places
    ///
    /// Positive for deposits, negative for payments.
    pub amount: Decimal,
}

impl Transaction {
    /// Create a transaction, rounding the amount to two decimal places (half-up)
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        description: impl Into<String>,
        vendor: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Transaction {
            date,
            time,
            description: description.into(),
            vendor: vendor.into(),
            amount: round_amount(amount),
        }
    }

    /// The kind implied by the amount's sign, `None` for a zero amount
    pub fn kind(&self) -> Option<TransactionKind> {
        [TransactionKind::Deposit, TransactionKind::Payment]
            .into_iter()
            .find(|kind| kind.matches(self.amount))
    }
}

/// Round to two decimal places, halves away from zero
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

//! Query engine over the in-memory ledger
//!
//! Stateless filtering and sorting functions. Every function borrows the
//! transactions it is given and returns a view of references; the source is
//! never mutated. Filters keep the order of their input, so filtering a
//! sorted ledger yields a sorted view.

use crate::types::{DateRange, Transaction, TransactionKind};
use std::cmp::Reverse;

/// Sort newest first: date descending, then time descending
///
/// The sort is stable and idempotent.
pub fn sort_ledger<'a, I>(transactions: I) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut sorted: Vec<&Transaction> = transactions.into_iter().collect();
    sorted.sort_by_key(|t| Reverse((t.date, t.time)));
    sorted
}

/// Keep deposits (`amount > 0`) or payments (`amount < 0`)
///
/// Zero-amount transactions belong to neither view.
pub fn filter_by_kind<'a, I>(transactions: I, kind: TransactionKind) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| kind.matches(t.amount))
        .collect()
}

/// Keep transactions dated within `range`, both ends inclusive
pub fn filter_by_date_range<'a, I>(transactions: I, range: &DateRange) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| range.contains(t.date))
        .collect()
}

/// Result of a vendor search
#[derive(Debug, Clone, PartialEq)]
pub enum VendorMatch<'a> {
    /// At least one transaction matched
    Found(Vec<&'a Transaction>),

    /// Nothing matched among `searched` transactions
    ///
    /// `searched == 0` means the ledger itself was empty.
    NotFound { vendor: String, searched: usize },
}

impl<'a> VendorMatch<'a> {
    /// Matching transactions, empty when nothing matched
    pub fn transactions(&self) -> &[&'a Transaction] {
        match self {
            VendorMatch::Found(found) => found,
            VendorMatch::NotFound { .. } => &[],
        }
    }
}

/// Case-insensitive exact match on the full vendor string
///
/// `"amazon"` matches `"Amazon"` but not `"Amazon Prime"`.
pub fn filter_by_vendor<'a, I>(transactions: I, vendor: &str) -> VendorMatch<'a>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let wanted = vendor.to_lowercase();
    let mut searched = 0;
    let mut found = Vec::new();

    for transaction in transactions {
        searched += 1;
        if transaction.vendor.to_lowercase() == wanted {
            found.push(transaction);
        }
    }

    if found.is_empty() {
        VendorMatch::NotFound {
            vendor: vendor.to_string(),
            searched,
        }
    } else {
        VendorMatch::Found(found)
    }
}

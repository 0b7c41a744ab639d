//! Insertion-ordered tax buckets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::{convert_amount, Currency};

/// One named tax bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEntry {
    /// Bucket name, taken from the tax rate's display name.
    pub name: String,
    /// Summed amount of every contribution under this name.
    pub amount: Decimal,
}

/// Tax amounts keyed by tax name.
///
/// Contributions under the same name are summed, never overwritten. Entries
/// keep first-seen order: line items in array order, then the document-level
/// rates, which is the order the calling layer displays them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxMap {
    entries: Vec<TaxEntry>,
}

impl TaxMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an amount to the named bucket, creating it on first sight.
    pub fn accumulate(&mut self, name: &str, amount: Decimal) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.amount += amount;
        } else {
            self.entries.push(TaxEntry {
                name: name.to_owned(),
                amount,
            });
        }
    }

    /// Looks up a bucket amount by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.amount)
    }

    /// Sum of all buckets.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Iterates buckets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &TaxEntry> {
        self.entries.iter()
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no bucket exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the map with every bucket rounded to the currency.
    ///
    /// Buckets are rounded independently of each other and of the summed
    /// totals, so a bucket sum and a rounded total may differ by design.
    #[must_use]
    pub fn rounded(&self, currency: &Currency) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|e| TaxEntry {
                    name: e.name.clone(),
                    amount: currency.round(e.amount),
                })
                .collect(),
        }
    }

    /// Returns the map converted into a presentment currency.
    #[must_use]
    pub fn converted(&self, rate: Decimal, currency: &Currency) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|e| TaxEntry {
                    name: e.name.clone(),
                    amount: convert_amount(e.amount, rate, currency),
                })
                .collect(),
        }
    }
}

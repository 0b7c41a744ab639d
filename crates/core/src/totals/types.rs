//! Result types for document totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::{convert_amount, Currency};
use crate::document::LineItem;

use super::tax_map::TaxMap;

/// The totals of one document, rounded to its native currency.
///
/// Every monetary field is rounded independently at the result boundary;
/// nothing inside the engine rounds before aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsResult {
    /// Sum of discounted line nets, before the document discount.
    pub sub_total: Decimal,
    /// Sum of every tax bucket.
    pub total_taxes: Decimal,
    /// Grand total. Inclusive-mode taxes are embedded, not added.
    pub total: Decimal,
    /// `total` minus payments received to date.
    pub balance: Decimal,
    /// Per-tax breakdown in first-seen order.
    pub tax_map: TaxMap,
    /// The document's line items, `line_total` populated.
    pub line_items: Vec<LineItem>,
}

impl TotalsResult {
    /// Returns the result denominated in a presentment currency.
    ///
    /// Every rounded output, line totals and tax buckets included, is
    /// multiplied by the exchange rate and re-rounded to the target
    /// currency. The native-currency result is left untouched; the base
    /// computation always runs in the document's own currency.
    #[must_use]
    pub fn converted(&self, rate: Decimal, currency: &Currency) -> Self {
        Self {
            sub_total: convert_amount(self.sub_total, rate, currency),
            total_taxes: convert_amount(self.total_taxes, rate, currency),
            total: convert_amount(self.total, rate, currency),
            balance: convert_amount(self.balance, rate, currency),
            tax_map: self.tax_map.converted(rate, currency),
            line_items: self
                .line_items
                .iter()
                .map(|item| {
                    let mut item = item.clone();
                    item.line_total = convert_amount(item.line_total, rate, currency);
                    item
                })
                .collect(),
        }
    }
}

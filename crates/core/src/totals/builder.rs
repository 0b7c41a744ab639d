//! Document totals aggregation.
//!
//! Folds the line calculator over a document snapshot, applies the
//! document-level discount, surcharges, and taxes, and produces the final
//! rounded [`TotalsResult`]. This is the engine's only public entry point.

use rust_decimal::Decimal;
use tracing::warn;

use crate::currency::{Currency, CurrencyError};
use crate::document::{Document, TaxMode};

use super::line::{apply_discount, tax_contributions, LineCalculator};
use super::tax_map::TaxMap;
use super::types::TotalsResult;

/// Builds the totals of one document.
pub struct TotalsBuilder;

impl TotalsBuilder {
    /// Computes subtotal, per-tax breakdown, grand total, and balance.
    ///
    /// The snapshot is consumed; its line items come back inside the result
    /// with `line_total` populated. The tax mode is read from the document
    /// itself, and the result is denominated in the document's native
    /// currency (see [`TotalsResult::converted`] for presentment).
    ///
    /// Aggregation runs at full precision throughout; each output field is
    /// rounded half-up to the currency exactly once, independently of the
    /// others. The only failure is an invalid currency configuration; data
    /// anomalies are computed as-is.
    pub fn build(document: Document, currency: &Currency) -> Result<TotalsResult, CurrencyError> {
        currency.validate()?;

        let mode = document.tax_mode();
        let allow_negative = document.kind.allows_negative_lines();
        if document.paid_to_date.is_some() && !document.kind.tracks_payments() {
            warn!(
                kind = ?document.kind,
                "payments recorded on a document kind that does not track them; computed as-is"
            );
        }

        let mut sub_total = Decimal::ZERO;
        let mut tax_map = TaxMap::new();
        let mut line_items = document.line_items;
        for item in &mut line_items {
            let computed = LineCalculator::compute(item, mode, allow_negative);
            sub_total += computed.net;
            item.line_total = currency.round(computed.net);
            for entry in computed.taxes {
                tax_map.accumulate(&entry.name, entry.amount);
            }
        }

        // The document discount applies once, against the undiscounted line
        // subtotal. Line discounts are already inside the nets.
        let discounted = apply_discount(sub_total, document.discount, document.is_amount_discount);

        let surcharge_total: Decimal = document.surcharges.iter().map(|s| s.amount).sum();
        let taxable_surcharges: Decimal = document
            .surcharges
            .iter()
            .filter(|s| s.taxable)
            .map(|s| s.amount)
            .sum();

        // Taxable surcharges join the base after the discount and ride the
        // same document-level tax pass as the subtotal.
        let document_tax_base = discounted + taxable_surcharges;
        for entry in tax_contributions(&document.tax_rates, document_tax_base, mode) {
            tax_map.accumulate(&entry.name, entry.amount);
        }

        let total_taxes = tax_map.total();
        let total = match mode {
            TaxMode::Exclusive => discounted + surcharge_total + total_taxes,
            TaxMode::Inclusive => discounted + surcharge_total,
        };
        let balance = total - document.paid_to_date.unwrap_or(Decimal::ZERO);

        Ok(TotalsResult {
            sub_total: currency.round(sub_total),
            total_taxes: currency.round(total_taxes),
            total: currency.round(total),
            balance: currency.round(balance),
            tax_map: tax_map.rounded(currency),
            line_items,
        })
    }
}

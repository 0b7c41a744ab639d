//! Per-line calculation.
//!
//! Computes one line item's discounted net and its contribution to each
//! named tax bucket. Everything here runs at full `Decimal` precision;
//! rounding happens once, at the result boundary in the builder.

use rust_decimal::Decimal;
use tracing::warn;

use crate::document::{LineItem, TaxMode, TaxRate, TAX_SLOTS};

use super::tax_map::TaxEntry;

/// Outcome of computing one line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineComputation {
    /// The discounted net amount, the line's subtotal contribution.
    pub net: Decimal,
    /// Per-slot tax contributions, in slot order.
    pub taxes: Vec<TaxEntry>,
}

/// Computes the taxable amount and tax contributions of one line item.
pub struct LineCalculator;

impl LineCalculator {
    /// Computes one line.
    ///
    /// `gross = quantity * unit_cost`, discounted by the line's own
    /// percent-or-amount discount. The net is clamped at zero unless
    /// `allow_negative` (credit notes). Each active tax slot is computed
    /// independently against the same net; slots never compound against
    /// each other's amounts, in either tax mode.
    ///
    /// Malformed data (out-of-range percentages, rates without names, slot
    /// gaps) is computed as-is and logged; upstream form validation owns
    /// rejecting it.
    #[must_use]
    pub fn compute(item: &LineItem, mode: TaxMode, allow_negative: bool) -> LineComputation {
        if !item.is_amount_discount
            && (item.discount < Decimal::ZERO || item.discount > Decimal::ONE_HUNDRED)
        {
            warn!(
                discount = %item.discount,
                "line discount percentage outside 0-100; computed as-is"
            );
        }

        let gross = item.quantity * item.unit_cost;
        let mut net = apply_discount(gross, item.discount, item.is_amount_discount);
        if !allow_negative && net < Decimal::ZERO {
            net = Decimal::ZERO;
        }

        LineComputation {
            net,
            taxes: tax_contributions(&item.tax_rates, net, mode),
        }
    }
}

/// Applies a percent-or-amount discount to a base amount.
///
/// The same rule serves line items and the document level: an amount
/// discount subtracts directly, a percentage scales the base.
#[must_use]
pub fn apply_discount(base: Decimal, discount: Decimal, is_amount: bool) -> Decimal {
    if is_amount {
        base - discount
    } else {
        base * (Decimal::ONE - discount / Decimal::ONE_HUNDRED)
    }
}

/// Tax amount of a single rate against a base, per mode.
///
/// Exclusive rates apply on top of the base; inclusive rates are backed out
/// of it (`base - base / (1 + rate/100)`).
#[must_use]
pub fn tax_amount(base: Decimal, rate: Decimal, mode: TaxMode) -> Decimal {
    match mode {
        TaxMode::Exclusive => base * rate / Decimal::ONE_HUNDRED,
        TaxMode::Inclusive => base - base / (Decimal::ONE + rate / Decimal::ONE_HUNDRED),
    }
}

/// Contributions of a slot list against a shared base.
///
/// Every active slot is computed against the same base, so simultaneous
/// rates never compound. Empty-name slots contribute nothing; a named
/// zero-rate slot contributes a zero entry so its bucket still shows up.
pub(crate) fn tax_contributions(slots: &[TaxRate], base: Decimal, mode: TaxMode) -> Vec<TaxEntry> {
    if slots.len() > TAX_SLOTS {
        warn!(
            slots = slots.len(),
            limit = TAX_SLOTS,
            "more tax rate slots than the document convention; computed anyway"
        );
    }

    let mut taxes = Vec::new();
    let mut seen_blank = false;
    for slot in slots {
        if !slot.is_active() {
            if !slot.rate.is_zero() {
                warn!(rate = %slot.rate, "tax slot has a rate but no name; skipped");
            }
            seen_blank = true;
            continue;
        }
        if seen_blank {
            warn!(name = %slot.name, "tax slot follows an empty slot; computed anyway");
        }
        taxes.push(TaxEntry {
            name: slot.name.clone(),
            amount: tax_amount(base, slot.rate, mode),
        });
    }
    taxes
}

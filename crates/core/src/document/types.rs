//! Domain types for document totals calculation.
//!
//! A [`Document`] is an immutable snapshot of one commercial record as
//! assembled by the calling layer. The engine reads every field except
//! [`LineItem::line_total`], which is an output populated on the items
//! returned inside the result.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of tax rate slots a line item or document carries by convention.
///
/// Mirrors the sequential "tax 1/2/3" enablement of the calling UI. Extra
/// slots are a data anomaly: still computed, but logged.
pub const TAX_SLOTS: usize = 3;

/// Number of custom surcharge slots on a document.
pub const SURCHARGE_SLOTS: usize = 4;

/// The kind of commercial document being totaled.
///
/// All five kinds are structurally identical for the engine; the kind only
/// drives whether discounted line nets may go negative and whether the
/// document carries payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Sales invoice.
    Invoice,
    /// Quotation, convertible to an invoice by the calling layer.
    Quote,
    /// Credit note.
    Credit,
    /// Purchase order.
    PurchaseOrder,
    /// Template for periodically generated invoices.
    RecurringInvoice,
}

impl DocumentKind {
    /// Returns true if discounted line nets may drop below zero.
    ///
    /// Only credit notes carry negative lines; every other kind clamps a
    /// line's net at zero.
    #[must_use]
    pub fn allows_negative_lines(self) -> bool {
        matches!(self, Self::Credit)
    }

    /// Returns true if the document kind accumulates payments.
    ///
    /// Only invoices carry `paid_to_date`; a recurring invoice is a template
    /// and never does.
    #[must_use]
    pub fn tracks_payments(self) -> bool {
        matches!(self, Self::Invoice)
    }
}

/// Tax treatment applied to the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxMode {
    /// Tax rates are applied on top of net amounts.
    Exclusive,
    /// Net amounts already embed their taxes; rates are backed out and
    /// reported, never added.
    Inclusive,
}

/// One named tax rate slot.
///
/// The name is the bucket identity: contributions with the same name are
/// summed across line items and the document level. A slot with an empty
/// name is inactive regardless of its rate, and a named slot with a zero
/// rate still produces a zero bucket so the caller can display it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxRate {
    /// Display name, e.g. `"VAT"` or `"GST"`. Empty means the slot is unused.
    pub name: String,
    /// Percentage rate, e.g. `20` for 20%.
    pub rate: Decimal,
}

impl TaxRate {
    /// Creates a named tax rate slot.
    #[must_use]
    pub fn new(name: impl Into<String>, rate: Decimal) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }

    /// Returns true if this slot participates in calculation.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.name.is_empty()
    }

    /// Returns true if this slot is entirely unset.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.rate.is_zero()
    }
}

/// One purchasable or billable row of a document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineItem {
    /// Quantity. Negative values only make sense on credit notes.
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_cost: Decimal,
    /// Discount value; a percentage (0-100) unless `is_amount_discount`.
    pub discount: Decimal,
    /// Interprets `discount` as an absolute currency amount.
    pub is_amount_discount: bool,
    /// Tax rate slots, by convention at most [`TAX_SLOTS`].
    pub tax_rates: Vec<TaxRate>,
    /// OUTPUT: the discounted net for display, overwritten on every
    /// calculation. Never read as an input.
    pub line_total: Decimal,
}

/// A flat document-level charge, optionally part of the taxable base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Surcharge {
    /// Charge amount in the document currency.
    pub amount: Decimal,
    /// When true the amount joins the base for document-level taxes.
    pub taxable: bool,
}

impl Surcharge {
    /// Creates a surcharge.
    #[must_use]
    pub fn new(amount: Decimal, taxable: bool) -> Self {
        Self { amount, taxable }
    }
}

/// Snapshot of one commercial document.
///
/// Assembled by the calling layer from its own state and handed to
/// [`crate::totals::TotalsBuilder::build`]. The snapshot is consumed; the
/// line items come back inside the result with `line_total` populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document identity, for the caller's correlation only.
    pub id: Uuid,
    /// The document kind.
    pub kind: DocumentKind,
    /// Issue date. Reference data carried on the snapshot; the arithmetic
    /// does not read it.
    pub date: NaiveDate,
    /// Line items in display order.
    pub line_items: Vec<LineItem>,
    /// Document-level discount; same semantics as [`LineItem::discount`].
    pub discount: Decimal,
    /// Interprets the document discount as an absolute amount.
    pub is_amount_discount: bool,
    /// Document-level tax rate slots, by convention at most [`TAX_SLOTS`].
    pub tax_rates: Vec<TaxRate>,
    /// The four custom surcharge slots.
    pub surcharges: [Surcharge; SURCHARGE_SLOTS],
    /// Selects [`TaxMode::Inclusive`] for the whole document.
    pub uses_inclusive_taxes: bool,
    /// Rate into the presentment currency; `1` when not converting.
    pub exchange_rate: Decimal,
    /// Payments received so far. `None` for kinds that do not track
    /// payments, which makes the balance equal the total.
    pub paid_to_date: Option<Decimal>,
}

impl Document {
    /// The tax mode selected by this document.
    #[must_use]
    pub fn tax_mode(&self) -> TaxMode {
        if self.uses_inclusive_taxes {
            TaxMode::Inclusive
        } else {
            TaxMode::Exclusive
        }
    }
}

//! Document totals calculation.
//!
//! This module implements the engine proper:
//! - Per-line nets and tax contributions
//! - Tax buckets summed by name across lines and document level
//! - Document-level discount, surcharges, and taxes
//! - Boundary rounding into the document's currency
//!
//! Control flow is strictly bottom-up: [`TotalsBuilder::build`] folds
//! [`LineCalculator::compute`] over every line item, aggregates, and
//! returns a [`TotalsResult`]. Nothing calls back upward.

pub mod builder;
pub mod line;
pub mod tax_map;
pub mod types;

#[cfg(test)]
mod props;

pub use builder::TotalsBuilder;
pub use line::{apply_discount, tax_amount, LineCalculator, LineComputation};
pub use tax_map::{TaxEntry, TaxMap};
pub use types::TotalsResult;

//! Commercial document snapshot types.
//!
//! This module defines the input side of the engine:
//! - Document kinds and their calculation rules
//! - Line items with per-line discounts and tax rate slots
//! - Custom surcharges
//! - The document snapshot itself

pub mod types;

pub use types::{
    Document, DocumentKind, LineItem, Surcharge, TaxMode, TaxRate, SURCHARGE_SLOTS, TAX_SLOTS,
};

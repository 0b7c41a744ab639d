//! Currency reference data, rounding, and conversion.
//!
//! All intermediate arithmetic in the engine runs at full `Decimal`
//! precision; this module owns the single boundary where values are rounded
//! to a currency's precision or cash increment, and the conversion into a
//! presentment currency.

pub mod rounding;
pub mod types;


pub use rounding::{convert_amount, round_half_up, round_to_increment};
pub use types::{Currency, CurrencyError, MAX_PRECISION};

//! Boundary rounding and exchange-rate conversion.
//!
//! All rounding is half-up (away from zero at the midpoint), the standard
//! convention for customer-facing amounts in the surrounding product.
//! Nothing in this module is applied to intermediate values; aggregation
//! always runs at full precision and rounds once at the result boundary.

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::Currency;

/// Rounds a value half-up to `decimal_places`.
///
/// Values at exactly the midpoint round away from zero, so `0.005` becomes
/// `0.01` and `-0.005` becomes `-0.01`.
#[must_use]
pub fn round_half_up(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a value half-up to an arbitrary increment.
///
/// Used for cash rounding, e.g. an increment of `0.05` for Swiss francs.
/// A non-positive increment leaves the value untouched; configurations are
/// rejected by [`Currency::validate`] before any rounding happens.
#[must_use]
pub fn round_to_increment(value: Decimal, increment: Decimal) -> Decimal {
    if increment <= Decimal::ZERO {
        return value;
    }
    let units =
        (value / increment).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    units * increment
}

/// Converts an already-rounded amount into a presentment currency.
///
/// Multiplies by the exchange rate and re-rounds to the target currency.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal, currency: &Currency) -> Decimal {
    currency.round(amount * rate)
}

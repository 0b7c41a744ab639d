//! Currency reference data and configuration errors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rounding::{round_half_up, round_to_increment};

/// Highest precision the engine can round to.
///
/// `rust_decimal` carries at most 28 fractional digits.
pub const MAX_PRECISION: u32 = 28;

/// Invalid currency configuration.
///
/// These are programming errors on the calling side, not user-data errors:
/// the engine refuses to compute rather than produce wrongly rounded money.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Precision exceeds the supported decimal scale.
    #[error("currency precision must be at most {MAX_PRECISION}, got {precision}")]
    InvalidPrecision {
        /// The rejected precision.
        precision: u32,
    },

    /// The rounding increment must be strictly positive.
    #[error("currency rounding increment must be positive, got {increment}")]
    InvalidRoundingIncrement {
        /// The rejected increment.
        increment: Decimal,
    },
}

impl CurrencyError {
    /// Returns the error code for the calling layer.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPrecision { .. } => "INVALID_CURRENCY_PRECISION",
            Self::InvalidRoundingIncrement { .. } => "INVALID_ROUNDING_INCREMENT",
        }
    }
}

/// Immutable currency reference data.
///
/// Resolved by the caller's currency service for a client, vendor, or
/// company and passed into the engine. Only used for final rounding; it
/// never participates in intermediate arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code, e.g. `"USD"`. Display data for the caller.
    pub code: String,
    /// Decimal places of the currency, e.g. `2`.
    pub precision: u32,
    /// Cash rounding increment, e.g. `0.05` for Swiss francs.
    /// `None` rounds to `10^-precision`.
    #[serde(default)]
    pub rounding_increment: Option<Decimal>,
}

impl Currency {
    /// Creates a currency rounding to `10^-precision`.
    #[must_use]
    pub fn new(code: impl Into<String>, precision: u32) -> Self {
        Self {
            code: code.into(),
            precision,
            rounding_increment: None,
        }
    }

    /// Sets a cash rounding increment.
    #[must_use]
    pub fn with_increment(mut self, increment: Decimal) -> Self {
        self.rounding_increment = Some(increment);
        self
    }

    /// Checks the configuration.
    ///
    /// Called once per calculation before any value is rounded.
    pub fn validate(&self) -> Result<(), CurrencyError> {
        if self.precision > MAX_PRECISION {
            return Err(CurrencyError::InvalidPrecision {
                precision: self.precision,
            });
        }
        if let Some(increment) = self.rounding_increment {
            if increment <= Decimal::ZERO {
                return Err(CurrencyError::InvalidRoundingIncrement { increment });
            }
        }
        Ok(())
    }

    /// Rounds a value to this currency, half-up.
    ///
    /// The single rounding entry point of the engine; only result-boundary
    /// values ever pass through it.
    #[must_use]
    pub fn round(&self, value: Decimal) -> Decimal {
        match self.rounding_increment {
            Some(increment) => round_to_increment(value, increment),
            None => round_half_up(value, self.precision),
        }
    }
}

//! # Money Types
//!
//! Currency and amount types shared by every payment method.
//! Amounts are stored in the smallest currency unit to avoid float drift.

use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Eur => "eur",
            Currency::Usd => "usd",
            Currency::Gbp => "gbp",
        }
    }

    /// Number of decimal places (all supported currencies use 2)
    pub fn decimal_places(&self) -> u8 {
        2
    }

    /// Convert a decimal amount to the smallest currency unit (cents)
    pub fn to_smallest_unit(&self, amount: f64) -> i64 {
        let multiplier = 10_f64.powi(self.decimal_places() as i32);
        (amount * multiplier).round() as i64
    }

    /// Convert from smallest unit back to decimal
    pub fn from_smallest_unit(&self, amount: i64) -> f64 {
        let divisor = 10_f64.powi(self.decimal_places() as i32);
        amount as f64 / divisor
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Eur
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// A checkout amount in a given currency.
///
/// Zero and negative values are representable and settle like any other
/// amount; no range checks are made anywhere on the checkout path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Value in smallest currency unit (cents for EUR/USD/GBP)
    pub minor_units: i64,
    /// Currency
    pub currency: Currency,
}

impl Amount {
    /// Create an amount from a decimal value
    pub fn new(value: f64, currency: Currency) -> Self {
        Self {
            minor_units: currency.to_smallest_unit(value),
            currency,
        }
    }

    /// Create an amount from smallest currency units (cents)
    pub fn from_minor_units(minor_units: i64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Get the decimal value
    pub fn as_decimal(&self) -> f64 {
        self.currency.from_smallest_unit(self.minor_units)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.as_decimal(), self.currency)
    }
}

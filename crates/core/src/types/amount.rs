//! Money amounts for the mock transaction feeds.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A signed dollar amount.
///
/// Used by the hardcoded transaction table and the mock payment payload.
/// Negative values are debits (purchases), positive values credits. There is
/// no currency field; the reference app renders everything as USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount from a decimal value.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create an amount from whole cents (e.g. `-2999` for `-$29.99`).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// True for credits (money in).
    #[must_use]
    pub fn is_credit(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Unsigned dollar display (`$29.99`), how the transaction list renders
    /// amounts; the sign is carried by color in the UI.
    #[must_use]
    pub fn abs_display(&self) -> String {
        format!("${:.2}", self.0.abs())
    }
}

impl fmt::Display for Amount {
    /// Signed display with an explicit `+` for credits (`+$5.00`, `-$29.99`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_credit() {
            write!(f, "+${:.2}", self.0)
        } else if self.0.is_sign_negative() {
            write!(f, "-${:.2}", self.0.abs())
        } else {
            write!(f, "${:.2}", self.0)
        }
    }
}

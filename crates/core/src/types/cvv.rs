//! Card verification value.
//!
//! The reference app stores the full CVV in plaintext alongside the card
//! record. That is a real security gap, kept here only because the persisted
//! JSON shape is part of the app's external contract; see DESIGN.md. The type
//! at least keeps the value out of logs by redacting `Debug` and `Display`.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing a [`Cvv`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CvvError {
    /// The input string is empty.
    #[error("CVV cannot be empty")]
    Empty,
    /// The input contains a non-digit character.
    #[error("CVV may only contain digits")]
    InvalidCharacter,
    /// The digit count is outside 3-4.
    #[error("CVV must be 3 or 4 digits (got {got})")]
    WrongLength {
        /// Digit count found in the input.
        got: usize,
    },
}

/// A 3- or 4-digit card verification value.
///
/// `Debug` and `Display` are redacted; use [`Cvv::expose`] at the single
/// call site that persists the record.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cvv(String);

impl Cvv {
    /// Parse a `Cvv` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains non-digits, or is
    /// not 3 or 4 characters long.
    pub fn parse(s: &str) -> Result<Self, CvvError> {
        if s.is_empty() {
            return Err(CvvError::Empty);
        }

        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(CvvError::InvalidCharacter);
        }

        if !(3..=4).contains(&s.len()) {
            return Err(CvvError::WrongLength { got: s.len() });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the plaintext digits.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Digit count (3 or 4).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed value; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Cvv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cvv([REDACTED])")
    }
}

impl fmt::Display for Cvv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl std::str::FromStr for Cvv {
    type Err = CvvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Cvv {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Cvv {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

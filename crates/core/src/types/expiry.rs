//! Card expiry date (`MM/YY`) with the wallet's input masking.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing an [`ExpiryDate`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ExpiryError {
    /// The input string is empty.
    #[error("expiry date cannot be empty")]
    Empty,
    /// The input is not a complete `MM/YY` value.
    #[error("expiry date must be in MM/YY format")]
    InvalidFormat,
}

/// A card expiry date in `MM/YY` form.
///
/// The reference app validates only the shape (two digits, a slash, two
/// digits); it never range-checks the month or compares against today.
/// That behavior is kept: `13/99` parses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpiryDate(String);

impl ExpiryDate {
    /// Parse an `ExpiryDate` from a complete `MM/YY` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or is not exactly two digits,
    /// a `/`, and two digits.
    pub fn parse(s: &str) -> Result<Self, ExpiryError> {
        if s.is_empty() {
            return Err(ExpiryError::Empty);
        }

        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes.first().is_some_and(u8::is_ascii_digit)
            && bytes.get(1).is_some_and(u8::is_ascii_digit)
            && bytes.get(2) == Some(&b'/')
            && bytes.get(3).is_some_and(u8::is_ascii_digit)
            && bytes.get(4).is_some_and(u8::is_ascii_digit);

        if !well_formed {
            return Err(ExpiryError::InvalidFormat);
        }

        Ok(Self(s.to_owned()))
    }

    /// Live input formatter: strip non-digits, cap at 4 digits, and insert
    /// the `/` once two or more digits are present.
    ///
    /// `"1225"` becomes `"12/25"`, `"1"` stays `"1"`, and `"12345"` is
    /// truncated to 4 digits first, giving `"12/34"`.
    #[must_use]
    pub fn reformat(input: &str) -> String {
        let digits: String = input.chars().filter(char::is_ascii_digit).take(4).collect();

        if digits.len() >= 2 {
            let (month, year) = digits.split_at(2);
            format!("{month}/{year}")
        } else {
            digits
        }
    }

    /// Returns the full `MM/YY` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the two-digit month field.
    #[must_use]
    pub fn month(&self) -> &str {
        self.0.get(..2).unwrap_or("")
    }

    /// Returns the two-digit year field.
    #[must_use]
    pub fn year(&self) -> &str {
        self.0.get(3..).unwrap_or("")
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ExpiryDate {
    type Err = ExpiryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ExpiryDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ExpiryDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

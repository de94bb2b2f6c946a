//! Payment card number type with the wallet's display formatting.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of digits in an accepted card number.
pub const CARD_NUMBER_DIGITS: usize = 16;

/// Errors that can occur when parsing a [`CardNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CardNumberError {
    /// The input string is empty.
    #[error("card number cannot be empty")]
    Empty,
    /// The input contains a character that is neither a digit nor a space.
    #[error("card number may only contain digits and spaces")]
    InvalidCharacter,
    /// The digit count is not exactly 16.
    #[error("card number must be exactly {expected} digits (got {got})")]
    WrongLength {
        /// Required digit count.
        expected: usize,
        /// Digit count found in the input.
        got: usize,
    },
}

/// Card network inferred from the leading digit.
///
/// The reference app only distinguishes Visa from "everything else", which it
/// labels Mastercard. Kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardBrand {
    /// Leading digit 4.
    Visa,
    /// Any other leading digit.
    Mastercard,
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visa => write!(f, "Visa"),
            Self::Mastercard => write!(f, "Mastercard"),
        }
    }
}

/// A 16-digit payment card number.
///
/// Stored internally as bare digits. Serializes in the grouped display form
/// (`"1234 5678 9012 3456"`) to match the JSON the mobile app persisted, and
/// accepts either form on deserialization.
///
/// `Debug` shows only the last 4 digits.
///
/// ## Examples
///
/// ```
/// use facepay_core::CardNumber;
///
/// let card = CardNumber::parse("4111 1111 1111 1111").unwrap();
/// assert_eq!(card.last4(), "1111");
/// assert_eq!(card.grouped(), "4111 1111 1111 1111");
/// assert!(CardNumber::parse("4111 1111 1111 111").is_err()); // 15 digits
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CardNumber(String);

impl CardNumber {
    /// Parse a `CardNumber` from a string, ignoring grouping spaces.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains characters other
    /// than digits and spaces, or does not contain exactly 16 digits.
    pub fn parse(s: &str) -> Result<Self, CardNumberError> {
        if s.trim().is_empty() {
            return Err(CardNumberError::Empty);
        }

        if !s.chars().all(|c| c.is_ascii_digit() || c == ' ') {
            return Err(CardNumberError::InvalidCharacter);
        }

        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != CARD_NUMBER_DIGITS {
            return Err(CardNumberError::WrongLength {
                expected: CARD_NUMBER_DIGITS,
                got: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// Live input formatter: strip non-digits, cap at 16 digits, and regroup
    /// into blocks of 4 separated by single spaces.
    ///
    /// Used on every keystroke of a card-number field, so it accepts any
    /// partial input. Stripping spaces from the output recovers the digits of
    /// the input (up to the 16-digit cap).
    #[must_use]
    pub fn reformat(input: &str) -> String {
        let digits: Vec<char> = input
            .chars()
            .filter(char::is_ascii_digit)
            .take(CARD_NUMBER_DIGITS)
            .collect();

        digits
            .chunks(4)
            .map(|chunk| chunk.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the bare 16 digits.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Returns the display form grouped in blocks of 4.
    #[must_use]
    pub fn grouped(&self) -> String {
        Self::reformat(&self.0)
    }

    /// Returns the last 4 digits.
    #[must_use]
    pub fn last4(&self) -> &str {
        let split = self.0.len().saturating_sub(4);
        self.0.get(split..).unwrap_or(&self.0)
    }

    /// Returns the masked display form (`•••• •••• •••• 1234`).
    #[must_use]
    pub fn masked(&self) -> String {
        format!("\u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} {}", self.last4())
    }

    /// Returns the card brand inferred from the leading digit.
    #[must_use]
    pub fn brand(&self) -> CardBrand {
        if self.0.starts_with('4') {
            CardBrand::Visa
        } else {
            CardBrand::Mastercard
        }
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardNumber(\u{2022}\u{2022}\u{2022}\u{2022}{})", self.last4())
    }
}

impl std::str::FromStr for CardNumber {
    type Err = CardNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CardNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.grouped())
    }
}

impl<'de> Deserialize<'de> for CardNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exactly_16_digits() {
        assert!(CardNumber::parse("4111111111111111").is_ok());
        assert!(CardNumber::parse("4111 1111 1111 1111").is_ok());
    }

    #[test]
    fn test_parse_rejects_15_and_17_digits() {
        assert!(matches!(
            CardNumber::parse("411111111111111"),
            Err(CardNumberError::WrongLength { got: 15, .. })
        ));
        assert!(matches!(
            CardNumber::parse("41111111111111111"),
            Err(CardNumberError::WrongLength { got: 17, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_and_letters() {
        assert!(matches!(CardNumber::parse(""), Err(CardNumberError::Empty)));
        assert!(matches!(
            CardNumber::parse("   "),
            Err(CardNumberError::Empty)
        ));
        assert!(matches!(
            CardNumber::parse("4111-1111-1111-1111"),
            Err(CardNumberError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_reformat_groups_of_four() {
        assert_eq!(CardNumber::reformat("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(CardNumber::reformat("41111"), "4111 1");
        assert_eq!(CardNumber::reformat("4111"), "4111");
        assert_eq!(CardNumber::reformat("411"), "411");
        assert_eq!(CardNumber::reformat(""), "");
    }

    #[test]
    fn test_reformat_strips_non_digits_and_caps() {
        assert_eq!(CardNumber::reformat("4111-1111"), "4111 1111");
        // 17th digit dropped
        assert_eq!(
            CardNumber::reformat("41111111111111119"),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_reformat_spaces_recover_digits() {
        for input in ["4", "41", "4111", "41111", "411111111", "4111111111111111"] {
            let formatted = CardNumber::reformat(input);
            let recovered: String = formatted.chars().filter(|c| *c != ' ').collect();
            assert_eq!(recovered, input);
        }
    }

    #[test]
    fn test_last4_and_masked() {
        let card = CardNumber::parse("4111111111111234").unwrap();
        assert_eq!(card.last4(), "1234");
        assert_eq!(
            card.masked(),
            "\u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} 1234"
        );
    }

    #[test]
    fn test_brand_from_leading_digit() {
        let visa = CardNumber::parse("4111111111111111").unwrap();
        assert_eq!(visa.brand(), CardBrand::Visa);

        let other = CardNumber::parse("5111111111111111").unwrap();
        assert_eq!(other.brand(), CardBrand::Mastercard);
    }

    #[test]
    fn test_debug_redacts() {
        let card = CardNumber::parse("4111111111111234").unwrap();
        let debug = format!("{card:?}");
        assert!(debug.contains("1234"));
        assert!(!debug.contains("4111111111111234"));
    }

    #[test]
    fn test_serde_grouped_form() {
        let card = CardNumber::parse("4111111111111111").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"4111 1111 1111 1111\"");

        let parsed: CardNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, card);

        // Bare digits also accepted
        let parsed: CardNumber = serde_json::from_str("\"4111111111111111\"").unwrap();
        assert_eq!(parsed, card);
    }
}

//! Payment-card record.
//!
//! Serialized with the camelCase field names the mobile app persisted. The
//! CVV is stored in plaintext next to the card number because that is the
//! on-disk contract the reference app established; see the security note in
//! DESIGN.md.

use facepay_core::{CardBrand, CardNumber, Cvv, ExpiryDate};
use serde::{Deserialize, Serialize};

/// A card on file.
///
/// The card list is append-only: there is no edit or delete surface, and
/// duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub card_number: CardNumber,
    pub name_on_card: String,
    pub expiry_date: ExpiryDate,
    pub cvv: Cvv,
}

impl CardRecord {
    /// Card network for the carousel artwork.
    #[must_use]
    pub fn brand(&self) -> CardBrand {
        self.card_number.brand()
    }

    /// Masked number for display (`•••• •••• •••• 1234`).
    #[must_use]
    pub fn masked_number(&self) -> String {
        self.card_number.masked()
    }
}

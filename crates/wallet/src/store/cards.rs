//! Card repository.

use crate::models::CardRecord;

use super::{SecureStore, StoreError, keys};

/// Append-only access to the persisted card list.
///
/// Early builds of the app stored a single card under `cardData`; the list
/// under `cardsData` replaced it. [`CardRepository::load_all`] runs the
/// one-time shape upgrade: when the list key is absent but the legacy key is
/// present, the legacy record is wrapped in a one-element list, written back
/// under `cardsData`, and served. The legacy key is left in place, matching
/// the app.
pub struct CardRepository<'a, S> {
    store: &'a S,
}

impl<'a, S: SecureStore> CardRepository<'a, S> {
    /// Create a repository over `store`.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load all cards in insertion order, migrating the legacy single-card
    /// shape if needed. Returns an empty list when neither key is present.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DataCorruption` if a stored value does not parse.
    pub async fn load_all(&self) -> Result<Vec<CardRecord>, StoreError> {
        if let Some(raw) = self.store.get(keys::CARDS_DATA).await? {
            return serde_json::from_str(&raw)
                .map_err(|e| StoreError::corruption(keys::CARDS_DATA, &e));
        }

        let Some(raw) = self.store.get(keys::CARD_DATA).await? else {
            return Ok(Vec::new());
        };

        let legacy: CardRecord =
            serde_json::from_str(&raw).map_err(|e| StoreError::corruption(keys::CARD_DATA, &e))?;
        let migrated = vec![legacy];
        self.save_all(&migrated).await?;
        tracing::info!("migrated legacy single-card record to card list");

        Ok(migrated)
    }

    /// Append a card. Duplicates are permitted; there is no uniqueness
    /// constraint on card entries.
    ///
    /// This is a read-modify-write of the full list. Callers await it before
    /// the next user action, so writes from one screen never overlap;
    /// concurrent writes from different screens are last-write-wins.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the list cannot be read or written.
    pub async fn append(&self, record: CardRecord) -> Result<Vec<CardRecord>, StoreError> {
        let mut cards = self.load_all().await?;
        cards.push(record);
        self.save_all(&cards).await?;
        tracing::debug!(count = cards.len(), "card appended");
        Ok(cards)
    }

    async fn save_all(&self, cards: &[CardRecord]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(cards)
            .map_err(|e| StoreError::corruption(keys::CARDS_DATA, &e))?;
        self.store.set(keys::CARDS_DATA, &raw).await
    }
}

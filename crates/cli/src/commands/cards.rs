//! Card management commands.
//!
//! # Usage
//!
//! ```bash
//! facepay cards list
//! facepay cards add --number 5555444433332222 --name "AISYAH RAHMAN" --expiry 06/28 --cvv 456
//! ```

use facepay_core::{CardNumber, CardNumberError, Cvv, CvvError, ExpiryDate, ExpiryError};
use facepay_wallet::config::ConfigError;
use facepay_wallet::models::CardRecord;
use facepay_wallet::store::{CardRepository, StoreError};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during card operations.
#[derive(Debug, Error)]
pub enum CardsError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Invalid card number.
    #[error("Invalid card number: {0}")]
    Number(#[from] CardNumberError),

    /// Invalid expiry date.
    #[error("Invalid expiry date: {0}")]
    Expiry(#[from] ExpiryError),

    /// Invalid CVV.
    #[error("Invalid CVV: {0}")]
    Cvv(#[from] CvvError),
}

/// List every card on file, masked.
///
/// # Errors
///
/// Returns an error if configuration loading or a store read fails.
pub async fn list() -> Result<(), CardsError> {
    let (_config, store) = super::open_store()?;
    let cards = CardRepository::new(&store).load_all().await?;

    if cards.is_empty() {
        info!("No cards on file.");
        return Ok(());
    }

    for (index, card) in cards.iter().enumerate() {
        info!(
            "{index}: {} {}  exp {}  {}",
            card.brand(),
            card.masked_number(),
            card.expiry_date,
            card.name_on_card
        );
    }

    Ok(())
}

/// Validate the inputs and append a card to the list.
///
/// Duplicates are allowed, as in the app.
///
/// # Errors
///
/// Returns an error if any field fails validation or persistence fails.
pub async fn add(number: &str, name: &str, expiry: &str, cvv: &str) -> Result<(), CardsError> {
    let (_config, store) = super::open_store()?;

    let card = CardRecord {
        card_number: CardNumber::parse(number)?,
        name_on_card: name.to_owned(),
        // Run the input mask first so `0628` is accepted alongside `06/28`
        expiry_date: ExpiryDate::parse(&ExpiryDate::reformat(expiry))?,
        cvv: Cvv::parse(cvv)?,
    };

    let masked = card.masked_number();
    CardRepository::new(&store).append(card).await?;

    info!("Card {masked} added.");
    Ok(())
}

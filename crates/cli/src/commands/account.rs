//! Profile show/edit commands.
//!
//! # Usage
//!
//! ```bash
//! facepay account show
//! facepay account edit phoneNumber +60198765432
//! ```
//!
//! Fields are addressed by their persisted camelCase names. Values are
//! stored verbatim; like the app's edit modal, no re-validation happens
//! here.

use facepay_wallet::account::{ProfileField, edit_field};
use facepay_wallet::config::ConfigError;
use facepay_wallet::error::WalletError;
use facepay_wallet::store::ProfileRepository;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The field name is not one of the profile's nine fields.
    #[error(
        "Unknown field: {0}. Valid fields: firstName, lastName, email, phoneNumber, address, city, state, zipCode, country"
    )]
    UnknownField(String),

    /// The engine rejected the operation.
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

/// Print every profile field.
///
/// # Errors
///
/// Returns an error if no profile exists yet or a store read fails.
pub async fn show() -> Result<(), AccountError> {
    let (_config, store) = super::open_store()?;

    let profile = ProfileRepository::new(&store)
        .load()
        .await
        .map_err(WalletError::from)?
        .ok_or(WalletError::ProfileMissing)?;

    info!("{} ({})", profile.full_name(), profile.initials());
    for field in ProfileField::ALL {
        info!("  {:<12} {}", field.label(), field.get(&profile));
    }

    Ok(())
}

/// Overwrite one profile field and save the record.
///
/// # Errors
///
/// Returns an error for an unknown field name, a missing profile, or a
/// storage failure.
pub async fn edit(field: &str, value: &str) -> Result<(), AccountError> {
    let field: ProfileField = field
        .parse()
        .map_err(|_| AccountError::UnknownField(field.to_owned()))?;

    let (_config, store) = super::open_store()?;
    let updated = edit_field(&store, field, value.to_owned()).await?;

    info!("{} updated to '{}'.", field.label(), field.get(&updated));
    Ok(())
}

//! Profile repository.

use crate::models::ProfileRecord;

use super::{SecureStore, StoreError, keys};

/// Whole-record access to the persisted profile.
///
/// The profile is one JSON blob under `userData`; there is no partial
/// update at the storage layer. Field-level editing composes load + save
/// (see [`crate::account`]).
pub struct ProfileRepository<'a, S> {
    store: &'a S,
}

impl<'a, S: SecureStore> ProfileRepository<'a, S> {
    /// Create a repository over `store`.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load the profile, or `None` before onboarding has completed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DataCorruption` if the stored JSON does not
    /// parse as a `ProfileRecord`.
    pub async fn load(&self) -> Result<Option<ProfileRecord>, StoreError> {
        let Some(raw) = self.store.get(keys::USER_DATA).await? else {
            return Ok(None);
        };

        let record =
            serde_json::from_str(&raw).map_err(|e| StoreError::corruption(keys::USER_DATA, &e))?;
        Ok(Some(record))
    }

    /// Overwrite the whole profile.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend write fails.
    pub async fn save(&self, record: &ProfileRecord) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string(record).map_err(|e| StoreError::corruption(keys::USER_DATA, &e))?;
        self.store.set(keys::USER_DATA, &raw).await?;
        tracing::debug!("profile record saved");
        Ok(())
    }
}

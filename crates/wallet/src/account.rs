//! Field-by-field profile editing.
//!
//! The account screen edits one profile field at a time in a modal and then
//! overwrites the whole record. Values are stored verbatim; the screen never
//! re-validates (so an email edited here can be worse than the one
//! onboarding accepted - reference behavior).

use std::str::FromStr;

use crate::error::WalletError;
use crate::models::ProfileRecord;
use crate::store::{ProfileRepository, SecureStore};

/// The nine editable profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Address,
    City,
    State,
    ZipCode,
    Country,
}

impl ProfileField {
    /// All fields in the order the account screen lists them.
    pub const ALL: [Self; 9] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::PhoneNumber,
        Self::Address,
        Self::City,
        Self::State,
        Self::ZipCode,
        Self::Country,
    ];

    /// Row label on the account screen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::ZipCode => "ZIP Code",
            Self::Country => "Country",
        }
    }

    /// The field's current value in `record`.
    #[must_use]
    pub fn get<'a>(self, record: &'a ProfileRecord) -> &'a str {
        match self {
            Self::FirstName => &record.first_name,
            Self::LastName => &record.last_name,
            Self::Email => &record.email,
            Self::PhoneNumber => &record.phone_number,
            Self::Address => &record.address,
            Self::City => &record.city,
            Self::State => &record.state,
            Self::ZipCode => &record.zip_code,
            Self::Country => &record.country,
        }
    }

    /// Overwrite the field's value in `record`.
    pub fn set(self, record: &mut ProfileRecord, value: String) {
        match self {
            Self::FirstName => record.first_name = value,
            Self::LastName => record.last_name = value,
            Self::Email => record.email = value,
            Self::PhoneNumber => record.phone_number = value,
            Self::Address => record.address = value,
            Self::City => record.city = value,
            Self::State => record.state = value,
            Self::ZipCode => record.zip_code = value,
            Self::Country => record.country = value,
        }
    }
}

impl FromStr for ProfileField {
    type Err = String;

    /// Accepts the persisted camelCase field names (`firstName`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(Self::FirstName),
            "lastName" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "phoneNumber" => Ok(Self::PhoneNumber),
            "address" => Ok(Self::Address),
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            "zipCode" => Ok(Self::ZipCode),
            "country" => Ok(Self::Country),
            other => Err(format!("unknown profile field '{other}'")),
        }
    }
}

/// Load the profile, replace one field, and save the whole record back.
///
/// # Errors
///
/// Returns `WalletError::ProfileMissing` before onboarding has created a
/// profile, or `WalletError::Store` if persistence fails.
pub async fn edit_field<S: SecureStore>(
    store: &S,
    field: ProfileField,
    value: String,
) -> Result<ProfileRecord, WalletError> {
    let repo = ProfileRepository::new(store);
    let mut record = repo.load().await?.ok_or(WalletError::ProfileMissing)?;

    field.set(&mut record, value);
    repo.save(&record).await?;
    tracing::info!(field = field.label(), "profile field updated");

    Ok(record)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn sample() -> ProfileRecord {
        ProfileRecord {
            first_name: "Aisyah".to_owned(),
            last_name: "Rahman".to_owned(),
            email: "aisyah@example.com".to_owned(),
            phone_number: "+60123456789".to_owned(),
            address: "12 Jalan Ampang".to_owned(),
            city: "Kuala Lumpur".to_owned(),
            state: "Kuala Lumpur".to_owned(),
            zip_code: "50450".to_owned(),
            country: "Malaysia".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_edit_field_updates_and_persists() {
        let store = MemoryStore::new();
        let repo = ProfileRepository::new(&store);
        repo.save(&sample()).await.unwrap();

        let updated = edit_field(&store, ProfileField::City, "George Town".to_owned())
            .await
            .unwrap();
        assert_eq!(updated.city, "George Town");

        let reloaded = repo.load().await.unwrap().unwrap();
        assert_eq!(reloaded.city, "George Town");
        // Other fields untouched
        assert_eq!(reloaded.first_name, "Aisyah");
    }

    #[tokio::test]
    async fn test_edit_without_profile_fails() {
        let store = MemoryStore::new();
        let err = edit_field(&store, ProfileField::City, "X".to_owned())
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::ProfileMissing));
    }

    #[test]
    fn test_field_accessors_cover_all_fields() {
        let mut record = sample();
        for field in ProfileField::ALL {
            field.set(&mut record, format!("<{}>", field.label()));
        }
        for field in ProfileField::ALL {
            assert_eq!(field.get(&record), format!("<{}>", field.label()));
        }
    }

    #[test]
    fn test_from_str_accepts_persisted_names() {
        assert_eq!("zipCode".parse::<ProfileField>().unwrap(), ProfileField::ZipCode);
        assert!("zip_code".parse::<ProfileField>().is_err());
    }
}

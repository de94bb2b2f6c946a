//! Personal-information record.
//!
//! Serialized with the camelCase field names the mobile app persisted, so an
//! existing `userData` entry deserializes unchanged.

use serde::{Deserialize, Serialize};

/// Country pre-filled by onboarding; the address step does not let the user
/// change it.
pub const DEFAULT_COUNTRY: &str = "Malaysia";

/// States offered by the address step's picker.
pub const MALAYSIAN_STATES: [&str; 16] = [
    "Johor",
    "Kedah",
    "Kelantan",
    "Kuala Lumpur",
    "Labuan",
    "Malacca",
    "Negeri Sembilan",
    "Pahang",
    "Penang",
    "Perak",
    "Perlis",
    "Putrajaya",
    "Sabah",
    "Sarawak",
    "Selangor",
    "Terengganu",
];

/// The persisted profile record.
///
/// Fields stay plain strings: validation happens at the onboarding step that
/// collects each field, and the account screen lets any field be rewritten
/// verbatim, so save/load must be identity-preserving for arbitrary strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ProfileRecord {
    /// Display name shown in the home header (`"First Last"`).
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Avatar initials (`"FL"`), empty components skipped.
    #[must_use]
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .collect()
    }
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: DEFAULT_COUNTRY.to_owned(),
        }
    }
}

/// True if `state` is one of the picker's options.
#[must_use]
pub fn is_known_state(state: &str) -> bool {
    MALAYSIAN_STATES.contains(&state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

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
            country: DEFAULT_COUNTRY.to_owned(),
        }
    }

    #[test]
    fn test_default_country() {
        assert_eq!(ProfileRecord::default().country, "Malaysia");
    }

    #[test]
    fn test_serde_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("phoneNumber").is_some());
        assert!(json.get("zipCode").is_some());
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_serde_roundtrip_identity() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ProfileRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_full_name_and_initials() {
        let record = sample();
        assert_eq!(record.full_name(), "Aisyah Rahman");
        assert_eq!(record.initials(), "AR");
    }

    #[test]
    fn test_initials_with_empty_names() {
        let record = ProfileRecord::default();
        assert_eq!(record.initials(), "");
    }

    #[test]
    fn test_known_states() {
        assert!(is_known_state("Selangor"));
        assert!(!is_known_state("California"));
    }
}

//! Secure key-value storage.
//!
//! The mobile app keeps everything in the platform's secure store as JSON
//! strings under a handful of well-known keys. [`SecureStore`] models that
//! contract (async get/set/delete by string key); the engine only depends on
//! the contract, never on a concrete backend.
//!
//! # Backends
//!
//! - [`MemoryStore`] - In-process map, for tests and demos
//! - [`FileStore`] - Single JSON document on disk, single-process only
//!
//! # Repositories
//!
//! - [`ProfileRepository`] - Whole-record profile load/save
//! - [`CardRepository`] - Append-only card list with legacy migration

pub mod cards;
pub mod file;
pub mod memory;
pub mod profile;

pub use cards::CardRepository;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use profile::ProfileRepository;

/// Well-known storage keys and flag literals.
///
/// These are the app's external persistence contract; renaming one orphans
/// existing installs.
pub mod keys {
    /// ProfileRecord JSON.
    pub const USER_DATA: &str = "userData";

    /// Legacy single CardRecord JSON, written by early onboarding builds.
    pub const CARD_DATA: &str = "cardData";

    /// CardRecord list JSON.
    pub const CARDS_DATA: &str = "cardsData";

    /// Biometric-setup flag; value is [`BIOMETRIC_DONE`].
    pub const BIOMETRIC_SETUP: &str = "biometricSetup";

    /// Onboarding flag; value is [`ONBOARDING_DONE`].
    pub const ONBOARDING_COMPLETE: &str = "onboardingComplete";

    /// Literal stored under [`BIOMETRIC_SETUP`].
    pub const BIOMETRIC_DONE: &str = "completed";

    /// Literal stored under [`ONBOARDING_COMPLETE`].
    pub const ONBOARDING_DONE: &str = "true";
}

/// Errors from storage backends and repositories.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The backend could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value did not parse as the expected JSON shape.
    #[error("data corruption under key '{key}': {message}")]
    DataCorruption {
        /// Storage key holding the bad value.
        key: String,
        /// Parser detail, logged but never shown to the user.
        message: String,
    },
}

impl StoreError {
    pub(crate) fn corruption(key: &str, err: &serde_json::Error) -> Self {
        Self::DataCorruption {
            key: key.to_owned(),
            message: err.to_string(),
        }
    }
}

/// Async key-value storage with the platform secure store's contract.
///
/// Calls are point operations: callers await each one before issuing the
/// next, so a backend never sees overlapping writes from a single screen.
/// Cross-screen writes are last-write-wins, accepted under the mobile
/// single-foreground-screen assumption.
///
/// Methods are written in the desugared form so the returned futures carry a
/// `Send` bound: the scan driver awaits store writes from a spawned task, and
/// `tokio::spawn` needs that guarantee through generic `S: SecureStore`.
/// Implementations can still use plain `async fn`.
pub trait SecureStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Store `value` under `key`, replacing any existing value.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Remove the value stored under `key`. Removing an absent key is not an
    /// error.
    fn delete(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}

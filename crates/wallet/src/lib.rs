//! FacePay Wallet - the engine behind the FacePay demo app.
//!
//! Everything the mobile screens do that is not drawing pixels lives here:
//! the onboarding state machine, profile and card persistence over an opaque
//! secure key-value store, launch routing, the mocked face-enrollment scan,
//! the mocked payment prompt, card-carousel selection, and account editing.
//!
//! # Architecture
//!
//! Platform services are traits ([`store::SecureStore`],
//! [`biometric::CameraAccess`]) so the engine runs identically under a mobile
//! shell, the demo CLI, or a test harness. All failures degrade to a
//! user-facing dialog message via [`error::WalletError::user_message`]; there
//! is no fatal path.
//!
//! # Modules
//!
//! - [`config`] - Environment-based configuration
//! - [`error`] - Wallet-level error rollup and dialog mapping
//! - [`models`] - Profile, card, and mock transaction records
//! - [`store`] - Secure key-value store trait, backends, and repositories
//! - [`onboarding`] - Five-step onboarding state machine
//! - [`session`] - Session flags, launch routing, and logout
//! - [`biometric`] - Mocked face-enrollment scan driver
//! - [`notifications`] - Mocked payment prompt (delayed local notification)
//! - [`carousel`] - Card carousel selection and transaction lookup
//! - [`account`] - Field-by-field profile editing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod account;
pub mod biometric;
pub mod carousel;
pub mod config;
pub mod error;
pub mod models;
pub mod notifications;
pub mod onboarding;
pub mod session;
pub mod store;

//! Integration tests for FacePay.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p facepay-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `onboarding_flow` - The five-step wizard end to end
//! - `launch_routing` - Session flags and where the app lands
//! - `card_store` - File-backed persistence and legacy migration
//! - `payment_prompt` - Notification delivery and confirmation
//!
//! No external services are needed: the engine runs over the in-memory and
//! file-backed stores. Shared fixtures live in this crate root.

#![allow(clippy::unwrap_used)]

use facepay_core::{CardNumber, Cvv, ExpiryDate};
use facepay_wallet::models::{CardRecord, ProfileRecord};
use facepay_wallet::onboarding::{OnboardingFlow, OnboardingStep};
use facepay_wallet::store::SecureStore;

/// A profile that passes every wizard validator.
#[must_use]
pub fn sample_profile() -> ProfileRecord {
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

/// A valid card record ending in `last_digit`.
#[must_use]
pub fn sample_card(last_digit: u8) -> CardRecord {
    CardRecord {
        card_number: CardNumber::parse(&format!("41111111111111{last_digit:02}")).unwrap(),
        name_on_card: "AISYAH RAHMAN".to_owned(),
        expiry_date: ExpiryDate::parse("12/27").unwrap(),
        cvv: Cvv::parse("123").unwrap(),
    }
}

/// A wizard with every draft field filled in and ready to advance.
#[must_use]
pub fn filled_flow() -> OnboardingFlow {
    let mut flow = OnboardingFlow::new();
    flow.profile = sample_profile();
    flow.card.set_card_number("4111 1111 1111 1111");
    flow.card.set_name_on_card("AISYAH RAHMAN");
    flow.card.set_expiry_date("12/27");
    flow.card.set_cvv("123");
    flow
}

/// Drive a filled wizard to completion against `store`.
///
/// # Panics
///
/// Panics if any step fails to advance; the fixtures are valid by
/// construction, so a panic here is a test failure.
pub async fn complete_onboarding<S: SecureStore>(store: &S) {
    let mut flow = filled_flow();
    while flow.step() != OnboardingStep::Complete {
        flow.advance(store).await.unwrap();
    }
}

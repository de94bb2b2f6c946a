//! Five-step onboarding wizard.
//!
//! A linear state machine collecting the profile and the first card.
//! Forward navigation is gated by the current step's validator; `back` never
//! validates. Completing the payment step persists everything and sets the
//! onboarding flag; the final step is a terminal display whose only action
//! is routing home.

use facepay_core::{CardNumber, Cvv, Email, ExpiryDate};

use crate::error::WalletError;
use crate::models::{CardRecord, ProfileRecord};
use crate::session::SessionRepository;
use crate::store::{CardRepository, ProfileRepository, SecureStore, keys};

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OnboardingStep {
    PersonalInfo,
    ContactDetails,
    Address,
    PaymentMethod,
    Complete,
}

impl OnboardingStep {
    /// All steps in wizard order.
    pub const ALL: [Self; 5] = [
        Self::PersonalInfo,
        Self::ContactDetails,
        Self::Address,
        Self::PaymentMethod,
        Self::Complete,
    ];

    /// Zero-based position in the wizard.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::PersonalInfo => 0,
            Self::ContactDetails => 1,
            Self::Address => 2,
            Self::PaymentMethod => 3,
            Self::Complete => 4,
        }
    }

    /// Progress-header label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::ContactDetails => "Contact Details",
            Self::Address => "Address",
            Self::PaymentMethod => "Payment Method",
            Self::Complete => "Complete",
        }
    }

    const fn succ(self) -> Self {
        match self {
            Self::PersonalInfo => Self::ContactDetails,
            Self::ContactDetails => Self::Address,
            Self::Address => Self::PaymentMethod,
            Self::PaymentMethod | Self::Complete => Self::Complete,
        }
    }

    const fn pred(self) -> Self {
        match self {
            Self::PersonalInfo | Self::ContactDetails => Self::PersonalInfo,
            Self::Address => Self::ContactDetails,
            Self::PaymentMethod => Self::Address,
            Self::Complete => Self::PaymentMethod,
        }
    }
}

/// Onboarding failures.
#[derive(thiserror::Error, Debug)]
pub enum OnboardingError {
    /// The current step's validator rejected the form.
    #[error("step '{}' is incomplete or invalid", step.title())]
    Incomplete {
        /// Step that failed validation.
        step: OnboardingStep,
    },
}

/// Raw card-form input with the app's live reformatting.
///
/// Values are kept exactly as the input fields hold them (grouped card
/// number, masked expiry); typed records are only built at completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    card_number: String,
    name_on_card: String,
    expiry_date: String,
    cvv: String,
}

impl CardForm {
    /// Replace the card-number field, regrouping digits into blocks of 4 and
    /// capping at 16 digits.
    pub fn set_card_number(&mut self, input: &str) {
        self.card_number = CardNumber::reformat(input);
    }

    /// Replace the name field verbatim.
    pub fn set_name_on_card(&mut self, input: &str) {
        self.name_on_card = input.to_owned();
    }

    /// Replace the expiry field, masking to `MM/YY` and capping at 4 digits.
    pub fn set_expiry_date(&mut self, input: &str) {
        self.expiry_date = ExpiryDate::reformat(input);
    }

    /// Replace the CVV field; input longer than 4 characters is ignored,
    /// matching the input cap in the app.
    pub fn set_cvv(&mut self, input: &str) {
        if input.len() <= 4 {
            self.cvv = input.to_owned();
        }
    }

    /// Current card-number field contents (grouped form).
    #[must_use]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Current name field contents.
    #[must_use]
    pub fn name_on_card(&self) -> &str {
        &self.name_on_card
    }

    /// Current expiry field contents (masked form).
    #[must_use]
    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    /// Current CVV field contents.
    #[must_use]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// The payment step's gate: 16 card digits, non-empty name, complete
    /// `MM/YY`, 3-4 digit CVV.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let digits = self.card_number.chars().filter(char::is_ascii_digit).count();
        digits == 16
            && self.card_number.chars().all(|c| c.is_ascii_digit() || c == ' ')
            && !self.name_on_card.trim().is_empty()
            && self.expiry_date.len() == 5
            && (3..=4).contains(&self.cvv.len())
            && self.cvv.chars().all(|c| c.is_ascii_digit())
    }

    /// Build the typed record once [`is_valid`](Self::is_valid) holds.
    fn to_record(&self) -> Option<CardRecord> {
        Some(CardRecord {
            card_number: CardNumber::parse(&self.card_number).ok()?,
            name_on_card: self.name_on_card.clone(),
            expiry_date: ExpiryDate::parse(&self.expiry_date).ok()?,
            cvv: Cvv::parse(&self.cvv).ok()?,
        })
    }
}

/// The wizard's accumulated state.
#[derive(Debug, Default)]
pub struct OnboardingFlow {
    step_index: usize,
    /// Profile draft; fields are filled in by the first three steps.
    pub profile: ProfileRecord,
    /// Card draft collected by the payment step.
    pub card: CardForm,
}

impl OnboardingFlow {
    /// Start at the first step with an empty draft (country pre-filled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current step.
    #[must_use]
    pub fn step(&self) -> OnboardingStep {
        *OnboardingStep::ALL
            .get(self.step_index)
            .unwrap_or(&OnboardingStep::Complete)
    }

    /// True when the current step's validator passes (drives the Continue
    /// button's enabled state).
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.validate_current().is_ok()
    }

    /// Run the current step's validator.
    ///
    /// # Errors
    ///
    /// Returns `OnboardingError::Incomplete` naming the failing step.
    pub fn validate_current(&self) -> Result<(), OnboardingError> {
        let ok = match self.step() {
            OnboardingStep::PersonalInfo => {
                !self.profile.first_name.trim().is_empty()
                    && !self.profile.last_name.trim().is_empty()
            }
            OnboardingStep::ContactDetails => {
                !self.profile.email.trim().is_empty()
                    && Email::parse(&self.profile.email).is_ok()
                    && !self.profile.phone_number.trim().is_empty()
            }
            OnboardingStep::Address => {
                !self.profile.address.trim().is_empty()
                    && !self.profile.city.trim().is_empty()
                    && !self.profile.state.trim().is_empty()
                    && !self.profile.zip_code.trim().is_empty()
            }
            OnboardingStep::PaymentMethod => self.card.is_valid(),
            OnboardingStep::Complete => true,
        };

        if ok {
            Ok(())
        } else {
            Err(OnboardingError::Incomplete { step: self.step() })
        }
    }

    /// Step back without validation. No-op on the first step.
    pub fn back(&mut self) -> OnboardingStep {
        if self.step_index > 0 {
            self.step_index = self.step().pred().index();
        }
        self.step()
    }

    /// Validate the current step and move forward.
    ///
    /// Completing the payment step persists the profile, the first card
    /// (both the legacy `cardData` record and the `cardsData` list), and the
    /// onboarding flag, then lands on the terminal display step. Advancing
    /// from the terminal step is a no-op; the caller routes home.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::Onboarding` when validation fails and
    /// `WalletError::Store` when persistence fails; in both cases the wizard
    /// stays on the current step.
    pub async fn advance<S: SecureStore>(&mut self, store: &S) -> Result<OnboardingStep, WalletError> {
        self.validate_current()?;

        if self.step() == OnboardingStep::PaymentMethod {
            self.persist(store).await?;
            tracing::info!("onboarding complete");
        }

        self.step_index = self.step().succ().index();
        Ok(self.step())
    }

    async fn persist<S: SecureStore>(&self, store: &S) -> Result<(), WalletError> {
        // Validator has passed, so the typed build cannot fail here
        let card = self
            .card
            .to_record()
            .ok_or(OnboardingError::Incomplete {
                step: OnboardingStep::PaymentMethod,
            })?;

        ProfileRepository::new(store).save(&self.profile).await?;

        // The app wrote the single-card key at onboarding and only grew the
        // list later; both are written so either reader works. The list must
        // land first: if the legacy key exists before the list does, the
        // append's migration wraps it into the list and the card lands twice.
        let legacy = serde_json::to_string(&card)
            .map_err(|e| crate::store::StoreError::corruption(keys::CARD_DATA, &e))?;
        CardRepository::new(store).append(card).await?;
        store.set(keys::CARD_DATA, &legacy).await?;

        SessionRepository::new(store).complete_onboarding().await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn filled_flow() -> OnboardingFlow {
        let mut flow = OnboardingFlow::new();
        flow.profile.first_name = "Aisyah".to_owned();
        flow.profile.last_name = "Rahman".to_owned();
        flow.profile.email = "aisyah@example.com".to_owned();
        flow.profile.phone_number = "+60123456789".to_owned();
        flow.profile.address = "12 Jalan Ampang".to_owned();
        flow.profile.city = "Kuala Lumpur".to_owned();
        flow.profile.state = "Kuala Lumpur".to_owned();
        flow.profile.zip_code = "50450".to_owned();
        flow.card.set_card_number("4111111111111111");
        flow.card.set_name_on_card("AISYAH RAHMAN");
        flow.card.set_expiry_date("1227");
        flow.card.set_cvv("123");
        flow
    }

    #[tokio::test]
    async fn test_advance_blocked_on_empty_names() {
        let mut flow = OnboardingFlow::new();
        let store = MemoryStore::new();

        let err = flow.advance(&store).await.unwrap_err();
        assert!(matches!(err, WalletError::Onboarding(_)));
        assert_eq!(flow.step(), OnboardingStep::PersonalInfo);
    }

    #[tokio::test]
    async fn test_whitespace_names_rejected() {
        let mut flow = OnboardingFlow::new();
        flow.profile.first_name = "   ".to_owned();
        flow.profile.last_name = "Rahman".to_owned();

        assert!(!flow.can_advance());
    }

    #[tokio::test]
    async fn test_contact_step_email_rules() {
        let store = MemoryStore::new();
        let mut flow = filled_flow();
        flow.advance(&store).await.unwrap();
        assert_eq!(flow.step(), OnboardingStep::ContactDetails);

        for bad in ["a@b", "ab.com", ""] {
            flow.profile.email = bad.to_owned();
            assert!(!flow.can_advance(), "accepted {bad:?}");
        }

        flow.profile.email = "a@b.co".to_owned();
        assert!(flow.can_advance());
    }

    #[tokio::test]
    async fn test_payment_step_digit_counts() {
        let store = MemoryStore::new();
        let mut flow = filled_flow();
        for _ in 0..3 {
            flow.advance(&store).await.unwrap();
        }
        assert_eq!(flow.step(), OnboardingStep::PaymentMethod);

        flow.card.set_card_number("411111111111111"); // 15 digits
        assert!(!flow.can_advance());

        flow.card.set_card_number("41111111111111117"); // 17 digits capped to 16
        assert!(flow.can_advance());

        flow.card.set_card_number("4111111111111111");
        assert!(flow.can_advance());
    }

    #[tokio::test]
    async fn test_back_never_validates() {
        let store = MemoryStore::new();
        let mut flow = filled_flow();
        flow.advance(&store).await.unwrap();

        flow.profile.first_name = String::new();
        assert_eq!(flow.back(), OnboardingStep::PersonalInfo);
        assert_eq!(flow.back(), OnboardingStep::PersonalInfo);
    }

    #[tokio::test]
    async fn test_completion_persists_everything() {
        let store = MemoryStore::new();
        let mut flow = filled_flow();
        for _ in 0..4 {
            flow.advance(&store).await.unwrap();
        }
        assert_eq!(flow.step(), OnboardingStep::Complete);

        assert!(store.get(keys::USER_DATA).await.unwrap().is_some());
        assert!(store.get(keys::CARD_DATA).await.unwrap().is_some());
        assert!(store.get(keys::CARDS_DATA).await.unwrap().is_some());
        assert_eq!(
            store.get(keys::ONBOARDING_COMPLETE).await.unwrap().as_deref(),
            Some("true")
        );

        let cards = CardRepository::new(&store).load_all().await.unwrap();
        assert_eq!(cards.len(), 1);
    }

    #[tokio::test]
    async fn test_completion_stores_one_card_under_both_keys() {
        let store = MemoryStore::new();
        let mut flow = filled_flow();
        for _ in 0..4 {
            flow.advance(&store).await.unwrap();
        }

        let repo = CardRepository::new(&store);
        let cards = repo.load_all().await.unwrap();
        assert_eq!(cards.len(), 1);

        // Legacy key holds the same single record
        let raw = store.get(keys::CARD_DATA).await.unwrap().unwrap();
        let legacy: crate::models::CardRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(cards.first(), Some(&legacy));

        // Later reads must not migrate the legacy record into a duplicate
        assert_eq!(repo.load_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_terminal_step_advance_is_noop() {
        let store = MemoryStore::new();
        let mut flow = filled_flow();
        for _ in 0..4 {
            flow.advance(&store).await.unwrap();
        }

        let step = flow.advance(&store).await.unwrap();
        assert_eq!(step, OnboardingStep::Complete);

        // Card list not re-appended by the extra advance
        let cards = CardRepository::new(&store).load_all().await.unwrap();
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_card_form_live_formatting() {
        let mut form = CardForm::default();
        form.set_card_number("4111111111111111999");
        assert_eq!(form.card_number(), "4111 1111 1111 1111");

        form.set_expiry_date("1225");
        assert_eq!(form.expiry_date(), "12/25");

        form.set_cvv("123");
        form.set_cvv("12345"); // over the cap, ignored
        assert_eq!(form.cvv(), "123");
    }
}

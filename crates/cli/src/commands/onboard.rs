//! One-shot onboarding wizard.
//!
//! # Usage
//!
//! ```bash
//! facepay onboard --first-name Aisyah --last-name Rahman \
//!     --email aisyah@example.com --phone +60123456789 \
//!     --address "12 Jalan Ampang" --city "Kuala Lumpur" \
//!     --state "Kuala Lumpur" --zip 50450 \
//!     --card-number "4111 1111 1111 1111" --card-name "AISYAH RAHMAN" \
//!     --expiry 12/27 --cvv 123
//! ```
//!
//! Fills the wizard's drafts from the flags and advances step by step, so
//! each step's validator runs exactly as it would in the app.

use clap::Args;
use facepay_wallet::error::WalletError;
use facepay_wallet::models::is_known_state;
use facepay_wallet::onboarding::{OnboardingFlow, OnboardingStep};
use tracing::{info, warn};

/// All the wizard's inputs as flags.
#[derive(Debug, Args)]
pub struct OnboardArgs {
    /// First name
    #[arg(long)]
    pub first_name: String,

    /// Last name
    #[arg(long)]
    pub last_name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Street address
    #[arg(long)]
    pub address: String,

    /// City
    #[arg(long)]
    pub city: String,

    /// State (the app offers the 16 Malaysian states)
    #[arg(long)]
    pub state: String,

    /// ZIP code
    #[arg(long)]
    pub zip: String,

    /// Card number (16 digits, spaces allowed)
    #[arg(long)]
    pub card_number: String,

    /// Name on card
    #[arg(long)]
    pub card_name: String,

    /// Expiry date (`MM/YY` or `MMYY`)
    #[arg(long)]
    pub expiry: String,

    /// 3- or 4-digit CVV
    #[arg(long)]
    pub cvv: String,
}

/// Walk the five steps, persisting profile, card, and flag at completion.
///
/// # Errors
///
/// Returns an error naming the first step whose validator rejects the
/// input, or a storage error if persistence fails.
pub async fn run(args: OnboardArgs) -> Result<(), WalletError> {
    let (_config, store) = super::open_store()?;

    if !is_known_state(&args.state) {
        // The app's picker only offers the known states; the CLI accepts
        // anything non-empty, like the stored record does
        warn!("'{}' is not one of the address picker's states", args.state);
    }

    let mut flow = OnboardingFlow::new();
    flow.profile.first_name = args.first_name;
    flow.profile.last_name = args.last_name;
    flow.profile.email = args.email;
    flow.profile.phone_number = args.phone;
    flow.profile.address = args.address;
    flow.profile.city = args.city;
    flow.profile.state = args.state;
    flow.profile.zip_code = args.zip;
    flow.card.set_card_number(&args.card_number);
    flow.card.set_name_on_card(&args.card_name);
    flow.card.set_expiry_date(&args.expiry);
    flow.card.set_cvv(&args.cvv);

    while flow.step() != OnboardingStep::Complete {
        let step = flow.step();
        flow.advance(&store).await?;
        info!("{} ✓", step.title());
    }

    info!("Onboarding complete! Your account has been created successfully.");
    Ok(())
}

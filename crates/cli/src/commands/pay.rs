//! Mock payment prompt.
//!
//! # Usage
//!
//! ```bash
//! facepay pay
//! facepay pay --decline
//! ```
//!
//! Schedules the fixed payment-request notification, waits the configured
//! delay (`FACEPAY_NOTIFY_DELAY_MS`), and runs the confirmation against the
//! selected card (the first card, as on a fresh home screen).

use facepay_wallet::carousel::CardCarousel;
use facepay_wallet::error::WalletError;
use facepay_wallet::models::MockPayment;
use facepay_wallet::notifications::{NotificationScheduler, PaymentConfirmation};
use facepay_wallet::session::{HomeState, SessionRepository};
use tracing::info;

/// Run the notification-to-confirmation flow end to end.
///
/// # Errors
///
/// Returns `WalletError::ProfileMissing` if onboarding has not stored a
/// profile and a card yet, or a storage error if loading them fails.
pub async fn run(decline: bool) -> Result<(), WalletError> {
    let (config, store) = super::open_store()?;

    let HomeState::Ready { cards, .. } = SessionRepository::new(&store).home_state().await? else {
        return Err(WalletError::ProfileMissing);
    };

    let carousel = CardCarousel::new(cards);
    // Ready guarantees a non-empty deck
    let card = carousel.selected_card().ok_or(WalletError::ProfileMissing)?;

    info!("Requesting payment notification...");
    let pending = NotificationScheduler::new(config.notify_delay)
        .schedule_payment_request(MockPayment::reference());
    let notification = pending.delivered().await?;

    info!("{}: {}", notification.title, notification.body);

    let confirmation = PaymentConfirmation::new(&notification, card);
    info!("{}", confirmation.prompt());

    if decline {
        confirmation.decline();
        info!("Payment declined.");
    } else {
        let [success, redirect] = confirmation.confirm();
        info!("{}: {}", success.title, success.message);
        info!("{}: {}", redirect.title, redirect.message);
    }

    Ok(())
}

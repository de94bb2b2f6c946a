//! The payment prompt end to end: carousel selection, delayed delivery,
//! and the confirmation dialogs.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use facepay_integration_tests::sample_card;
use facepay_wallet::carousel::CardCarousel;
use facepay_wallet::models::MockPayment;
use facepay_wallet::notifications::{NotificationError, NotificationScheduler, PaymentConfirmation};

const VIEWPORT: f32 = 390.0;

#[tokio::test(start_paused = true)]
async fn test_prompt_charges_the_selected_card() {
    let mut carousel = CardCarousel::new(vec![sample_card(11), sample_card(22), sample_card(33)]);

    // Swipe to the third card before the bell is tapped
    carousel.settle_scroll(2.0 * VIEWPORT, VIEWPORT);

    let pending = NotificationScheduler::new(Duration::from_secs(2))
        .schedule_payment_request(MockPayment::reference());
    let notification = pending.delivered().await.unwrap();
    assert_eq!(notification.title, "Payment Request");
    assert_eq!(notification.body, "Apple Store - $99.99");

    let card = carousel.selected_card().unwrap();
    let confirmation = PaymentConfirmation::new(&notification, card);
    assert!(confirmation.prompt().ends_with("1133"));
}

#[tokio::test(start_paused = true)]
async fn test_confirm_returns_both_dialogs_in_order() {
    let pending = NotificationScheduler::new(Duration::from_secs(2))
        .schedule_payment_request(MockPayment::reference());
    let notification = pending.delivered().await.unwrap();

    let confirmation = PaymentConfirmation::new(&notification, &sample_card(11));
    let [success, redirect] = confirmation.confirm();

    assert_eq!(success.title, "Transaction Confirmed!");
    assert!(success.message.contains("processed successfully"));
    assert_eq!(redirect.title, "Redirected");
    assert_eq!(redirect.message, "Opening Apple Store store...");
}

#[tokio::test(start_paused = true)]
async fn test_decline_is_a_silent_dismissal() {
    let pending = NotificationScheduler::new(Duration::from_secs(2))
        .schedule_payment_request(MockPayment::reference());
    let notification = pending.delivered().await.unwrap();

    // Decline consumes the confirmation and produces nothing
    PaymentConfirmation::new(&notification, &sample_card(11)).decline();
}

#[tokio::test(start_paused = true)]
async fn test_leaving_the_screen_cancels_delivery() {
    let scheduler = NotificationScheduler::new(Duration::from_secs(2));

    let mut pending = scheduler.schedule_payment_request(MockPayment::reference());
    pending.cancel();
    assert!(matches!(
        pending.delivered().await,
        Err(NotificationError::Cancelled)
    ));

    // Dropping the handle cancels too
    let pending = scheduler.schedule_payment_request(MockPayment::reference());
    drop(pending);
    tokio::time::sleep(Duration::from_secs(10)).await;
}

#[tokio::test(start_paused = true)]
async fn test_transactions_panel_follows_the_swipe() {
    let mut carousel = CardCarousel::new(vec![sample_card(11), sample_card(22), sample_card(33)]);
    assert_eq!(carousel.transactions().len(), 3);

    let fade = carousel.settle_scroll(VIEWPORT, VIEWPORT);
    assert!(fade.is_some());
    assert_eq!(carousel.transactions().len(), 3);

    carousel.settle_scroll(2.0 * VIEWPORT, VIEWPORT);
    // Only the first two cards have mock feeds
    assert!(carousel.transactions().is_empty());
}

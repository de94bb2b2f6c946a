//! Mocked payment prompt.
//!
//! Tapping the bell schedules a local notification carrying a fixed
//! merchant/amount payload after a fixed delay. Tapping the delivered
//! notification opens a confirmation showing the payload and the selected
//! card's last 4 digits. Confirm always succeeds; there is no authorization
//! check, no retry, no timeout, and no persisted outcome.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error::Dialog;
use crate::models::{CardRecord, MockPayment};

/// Notification-flow failures.
#[derive(thiserror::Error, Debug)]
pub enum NotificationError {
    /// The user declined notification permission; the bell does nothing.
    #[error("notification permission denied")]
    PermissionDenied,

    /// The owning screen went away before delivery; the notification never
    /// fires.
    #[error("scheduled notification cancelled")]
    Cancelled,
}

/// A delivered local notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub payload: MockPayment,
}

/// Schedules payment-request notifications with a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct NotificationScheduler {
    delay: Duration,
}

impl NotificationScheduler {
    /// Create a scheduler delivering after `delay` (the app uses 2 seconds).
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured delivery delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `payment` for delivery after the configured delay.
    ///
    /// The returned handle owns the timer task; dropping it cancels
    /// delivery.
    #[must_use]
    pub fn schedule_payment_request(&self, payment: MockPayment) -> ScheduledNotification {
        let (tx, rx) = oneshot::channel();
        let delay = self.delay;

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let notification = Notification {
                title: "Payment Request".to_owned(),
                body: payment.summary(),
                payload: payment,
            };
            // Receiver gone means the prompt was torn down; nothing to do
            let _ = tx.send(notification);
        });

        tracing::debug!(?delay, "payment request scheduled");

        ScheduledNotification {
            rx: Some(rx),
            task: Some(task),
        }
    }
}

/// Handle to a pending notification.
#[derive(Debug)]
pub struct ScheduledNotification {
    rx: Option<oneshot::Receiver<Notification>>,
    task: Option<JoinHandle<()>>,
}

impl ScheduledNotification {
    /// Wait for delivery.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::Cancelled` if the timer was cancelled
    /// before it fired.
    pub async fn delivered(mut self) -> Result<Notification, NotificationError> {
        let Some(rx) = self.rx.take() else {
            return Err(NotificationError::Cancelled);
        };

        rx.await.map_err(|_| NotificationError::Cancelled)
    }

    /// Cancel the pending delivery.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("scheduled notification cancelled");
        }
    }
}

impl Drop for ScheduledNotification {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}

/// The confirmation modal's content and outcomes.
#[derive(Debug, Clone)]
pub struct PaymentConfirmation {
    payment: MockPayment,
    card_last4: String,
}

impl PaymentConfirmation {
    /// Build the confirmation for a delivered notification against the
    /// currently selected card.
    #[must_use]
    pub fn new(notification: &Notification, card: &CardRecord) -> Self {
        Self {
            payment: notification.payload.clone(),
            card_last4: card.card_number.last4().to_owned(),
        }
    }

    /// The payload being confirmed.
    #[must_use]
    pub const fn payment(&self) -> &MockPayment {
        &self.payment
    }

    /// Modal body: merchant, amount, and the paying card's last 4 digits.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "{} requests {} from card \u{2022}\u{2022}\u{2022}\u{2022} {}",
            self.payment.merchant,
            self.payment.amount.abs_display(),
            self.card_last4
        )
    }

    /// Approve the payment. Always succeeds; returns the success dialog and
    /// the mock merchant-redirect dialog shown after it.
    #[must_use]
    pub fn confirm(self) -> [Dialog; 2] {
        tracing::info!(merchant = %self.payment.merchant, "mock payment confirmed");
        [
            Dialog::new(
                "Transaction Confirmed!",
                "Your payment has been processed successfully. Redirecting to merchant...",
            ),
            Dialog::new(
                "Redirected",
                format!("Opening {} store...", self.payment.merchant),
            ),
        ]
    }

    /// Dismiss the prompt. Nothing is recorded.
    pub fn decline(self) {
        tracing::info!(merchant = %self.payment.merchant, "mock payment declined");
    }
}

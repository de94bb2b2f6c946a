//! Unified error handling.
//!
//! Every failure in the wallet degrades the same way: log the detail, show a
//! one-shot dialog, stay on the current screen. Nothing is retried and there
//! is no fatal path. `WalletError` is the rollup; [`WalletError::user_message`]
//! is the only text a user ever sees.

use thiserror::Error;

use crate::biometric::BiometricError;
use crate::config::ConfigError;
use crate::notifications::NotificationError;
use crate::onboarding::OnboardingError;
use crate::store::StoreError;

/// Wallet-level error type.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Onboarding validation failed.
    #[error("Onboarding error: {0}")]
    Onboarding(#[from] OnboardingError),

    /// Biometric enrollment failed or was cancelled.
    #[error("Biometric error: {0}")]
    Biometric(#[from] BiometricError),

    /// Notification scheduling or delivery failed.
    #[error("Notification error: {0}")]
    Notification(#[from] NotificationError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// An operation needed the profile before onboarding created one.
    #[error("No profile on record")]
    ProfileMissing,
}

impl WalletError {
    /// The dialog text for this failure.
    ///
    /// Internal detail (I/O errors, corrupt JSON) is logged, never shown;
    /// validation failures reuse the app's wording.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Store(err) => {
                tracing::error!(error = %err, "storage failure");
                "Failed to save your information. Please try again.".to_owned()
            }
            Self::Onboarding(_) => {
                "Please fill in all required fields correctly.".to_owned()
            }
            Self::Biometric(err) => match err {
                BiometricError::HardwareUnsupported => {
                    "Your device does not support biometric authentication. Continuing without biometric setup.".to_owned()
                }
                BiometricError::PermissionDenied => {
                    "Camera access is required for face registration.".to_owned()
                }
                BiometricError::Cancelled => "Face scan cancelled.".to_owned(),
            },
            Self::Notification(err) => match err {
                NotificationError::PermissionDenied => {
                    "Push notifications are required for transaction alerts".to_owned()
                }
                NotificationError::Cancelled => "Payment request cancelled.".to_owned(),
            },
            Self::Config(err) => {
                tracing::error!(error = %err, "configuration failure");
                "Something went wrong while starting the app.".to_owned()
            }
            Self::ProfileMissing => "Loading account...".to_owned(),
        }
    }

    /// The error as a ready-to-show dialog.
    #[must_use]
    pub fn into_dialog(self) -> Dialog {
        Dialog::new("Error", self.user_message())
    }
}

/// A one-shot user-facing dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
}

impl Dialog {
    /// Build a dialog.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for `WalletError`.
pub type Result<T> = std::result::Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::OnboardingStep;

    #[test]
    fn test_validation_message_matches_app_wording() {
        let err = WalletError::Onboarding(OnboardingError::Incomplete {
            step: OnboardingStep::PersonalInfo,
        });
        assert_eq!(
            err.user_message(),
            "Please fill in all required fields correctly."
        );
    }

    #[test]
    fn test_store_detail_is_not_shown() {
        let err = WalletError::Store(StoreError::DataCorruption {
            key: "userData".to_owned(),
            message: "expected struct".to_owned(),
        });
        let message = err.user_message();
        assert!(!message.contains("userData"));
        assert!(!message.contains("expected struct"));
    }

    #[test]
    fn test_into_dialog() {
        let dialog = WalletError::ProfileMissing.into_dialog();
        assert_eq!(dialog.title, "Error");
        assert_eq!(dialog.message, "Loading account...");
    }
}

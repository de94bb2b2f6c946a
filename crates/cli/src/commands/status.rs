//! Session status and logout.
//!
//! # Usage
//!
//! ```bash
//! facepay status
//! facepay logout
//! ```

use facepay_wallet::error::WalletError;
use facepay_wallet::session::{HomeState, LaunchRoute, SessionRepository};
use tracing::info;

/// Print the session flags and where the app would land at launch.
///
/// # Errors
///
/// Returns an error if configuration loading or a store read fails.
pub async fn show() -> Result<(), WalletError> {
    let (config, store) = super::open_store()?;
    let session = SessionRepository::new(&store);

    let flags = session.flags().await?;
    let route = session.launch_route().await?;

    info!("Store: {}", config.data_path.display());
    info!(
        "Biometric setup:     {}",
        if flags.biometric_setup { "done" } else { "not done" }
    );
    info!(
        "Onboarding complete: {}",
        if flags.onboarding_complete { "done" } else { "not done" }
    );

    let landing = match route {
        LaunchRoute::BiometricSetup => "face enrollment",
        LaunchRoute::Onboarding => "onboarding wizard",
        LaunchRoute::Home => "home",
    };
    info!("Next launch opens:   {landing}");

    if route == LaunchRoute::Home {
        match session.home_state().await? {
            HomeState::Ready { profile, cards } => {
                info!(
                    "Signed in as {} with {} card(s) on file",
                    profile.full_name(),
                    cards.len()
                );
            }
            HomeState::Loading => {
                info!("Home data incomplete; the app would sit on its loading screen");
            }
        }
    }

    Ok(())
}

/// Clear the session flags. Profile and card data stay on disk.
///
/// # Errors
///
/// Returns an error if configuration loading or a store delete fails.
pub async fn logout() -> Result<(), WalletError> {
    let (_config, store) = super::open_store()?;
    SessionRepository::new(&store).logout().await?;

    info!("Logged out. Profile and cards remain on disk; the next launch starts at face enrollment.");
    Ok(())
}

//! Mock face-enrollment scan.
//!
//! # Usage
//!
//! ```bash
//! facepay scan
//! ```
//!
//! Runs the progress loop at the configured tick (`FACEPAY_SCAN_TICK_MS`)
//! and persists the biometric flag on completion.

use std::sync::Arc;

use facepay_wallet::biometric::{FaceScan, GrantedCamera, ensure_camera};
use facepay_wallet::error::WalletError;
use tracing::info;

/// Run the scan to completion, printing progress as it advances.
///
/// # Errors
///
/// Returns an error if configuration loading fails or the completion flag
/// cannot be written.
pub async fn run() -> Result<(), WalletError> {
    let (config, store) = super::open_store()?;

    // The CLI has no camera; stand in a granting one, as the simulator does
    ensure_camera(&GrantedCamera).await?;
    info!("Position your face within the frame...");

    let scan = FaceScan::start(Arc::new(store), config.scan_tick);
    let mut progress = scan.subscribe();

    let printer = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let percent = *progress.borrow();
            info!("Scanning... {percent}%");
            if percent >= 100 {
                break;
            }
        }
    });

    scan.wait().await?;
    let _ = printer.await;

    info!("Face registered successfully!");
    Ok(())
}

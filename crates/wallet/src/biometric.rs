//! Mocked face-enrollment scan.
//!
//! There is no sensor capture or matching. The "scan" is a progress loop
//! that advances 10% per tick; reaching 100% persists the biometric flag.
//! The loop runs as a task owned by a [`FaceScan`] handle, so tearing down
//! the enrollment screen cancels the timer instead of leaking it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::session::SessionRepository;
use crate::store::{SecureStore, StoreError};

/// Progress added per tick.
pub const SCAN_STEP_PERCENT: u8 = 10;

/// Enrollment failures.
#[derive(thiserror::Error, Debug)]
pub enum BiometricError {
    /// The device reports no biometric hardware. The app shows a dialog and
    /// continues to onboarding without enrolling.
    #[error("device has no biometric hardware")]
    HardwareUnsupported,

    /// The user denied camera access.
    #[error("camera permission denied")]
    PermissionDenied,

    /// The owning screen went away before the scan finished; no flag was
    /// written.
    #[error("face scan cancelled")]
    Cancelled,
}

/// Camera permission surface, the only part of the camera the engine needs.
/// The live preview itself is platform UI.
#[allow(async_fn_in_trait)]
pub trait CameraAccess: Send + Sync {
    /// Whether the device has biometric-capable hardware at all.
    fn has_biometric_hardware(&self) -> bool;

    /// Whether camera permission is already granted.
    fn permission_granted(&self) -> bool;

    /// Prompt for permission; resolves to the user's answer.
    async fn request_permission(&self) -> bool;
}

/// A camera that always exists and always grants. Used by the demo CLI and
/// tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrantedCamera;

impl CameraAccess for GrantedCamera {
    fn has_biometric_hardware(&self) -> bool {
        true
    }

    fn permission_granted(&self) -> bool {
        true
    }

    async fn request_permission(&self) -> bool {
        true
    }
}

/// Check hardware and permission before starting a scan.
///
/// # Errors
///
/// Returns `HardwareUnsupported` or `PermissionDenied`; both degrade to a
/// dialog at the call site.
pub async fn ensure_camera(camera: &impl CameraAccess) -> Result<(), BiometricError> {
    if !camera.has_biometric_hardware() {
        tracing::warn!("no biometric hardware; enrollment unavailable");
        return Err(BiometricError::HardwareUnsupported);
    }

    if camera.permission_granted() || camera.request_permission().await {
        Ok(())
    } else {
        Err(BiometricError::PermissionDenied)
    }
}

/// Handle to a running scan.
///
/// Dropping the handle aborts the progress task; a cancelled scan writes no
/// flag.
#[derive(Debug)]
pub struct FaceScan {
    progress: watch::Receiver<u8>,
    task: Option<JoinHandle<Result<(), StoreError>>>,
}

impl FaceScan {
    /// Start the progress loop: 0 to 100 in steps of
    /// [`SCAN_STEP_PERCENT`], one step per `tick`. On completion the
    /// biometric flag is persisted to `store`.
    #[must_use]
    pub fn start<S: SecureStore + 'static>(store: Arc<S>, tick: Duration) -> Self {
        let (tx, rx) = watch::channel(0_u8);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            // First tick resolves immediately; consume it so the loop waits
            // a full tick before the first step
            interval.tick().await;

            let mut progress = 0_u8;
            while progress < 100 {
                interval.tick().await;
                progress = progress.saturating_add(SCAN_STEP_PERCENT).min(100);
                // Receiver may be gone if the caller only awaits completion
                let _ = tx.send(progress);
            }

            SessionRepository::new(store.as_ref())
                .complete_biometric_setup()
                .await
        });

        Self {
            progress: rx,
            task: Some(task),
        }
    }

    /// Latest progress percentage.
    #[must_use]
    pub fn progress(&self) -> u8 {
        *self.progress.borrow()
    }

    /// A receiver for progress updates.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.progress.clone()
    }

    /// Abort the scan without writing the flag.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("face scan cancelled");
        }
    }

    /// Wait for the scan to finish and the flag to be written.
    ///
    /// # Errors
    ///
    /// Returns `BiometricError::Cancelled` if the task was aborted; storage
    /// failures surface as a dialog at the call site.
    pub async fn wait(mut self) -> Result<(), crate::error::WalletError> {
        let Some(task) = self.task.take() else {
            return Err(BiometricError::Cancelled.into());
        };

        match task.await {
            Ok(result) => Ok(result?),
            Err(join_err) if join_err.is_cancelled() => Err(BiometricError::Cancelled.into()),
            Err(join_err) => std::panic::resume_unwind(join_err.into_panic()),
        }
    }
}

impl Drop for FaceScan {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}

//! Command implementations.

pub mod account;
pub mod cards;
pub mod onboard;
pub mod pay;
pub mod scan;
pub mod status;

use facepay_wallet::config::{ConfigError, WalletConfig};
use facepay_wallet::store::FileStore;

/// Load configuration and open the file-backed store it points at.
pub fn open_store() -> Result<(WalletConfig, FileStore), ConfigError> {
    let config = WalletConfig::from_env()?;
    let store = FileStore::new(config.data_path.clone());
    Ok((config, store))
}

//! Wallet data records.
//!
//! # Records
//!
//! - `profile` - Personal-information record persisted under `userData`
//! - `card` - Payment-card record persisted under `cardData`/`cardsData`
//! - `transaction` - Mock transaction feeds and the payment-prompt payload

pub mod card;
pub mod profile;
pub mod transaction;

pub use card::CardRecord;
pub use profile::{DEFAULT_COUNTRY, MALAYSIAN_STATES, ProfileRecord, is_known_state};
pub use transaction::{MockPayment, Transaction, TransactionKind, transactions_for_card};

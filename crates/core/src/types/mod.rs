//! Core types for FacePay.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod amount;
pub mod card_number;
pub mod cvv;
pub mod email;
pub mod expiry;

pub use amount::Amount;
pub use card_number::{CardBrand, CardNumber, CardNumberError};
pub use cvv::{Cvv, CvvError};
pub use email::{Email, EmailError};
pub use expiry::{ExpiryDate, ExpiryError};

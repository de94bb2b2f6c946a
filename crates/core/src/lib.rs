//! FacePay Core - Shared domain types.
//!
//! This crate provides the validated types used across all FacePay components:
//! - `wallet` - The wallet engine (stores, onboarding, routing, mock flows)
//! - `cli` - Command-line demo driver
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no timers.
//! Every type validates on construction, so downstream code never re-checks
//! card numbers, expiry dates, or emails once it holds a value.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails, card numbers, expiry dates,
//!   CVVs, and money amounts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

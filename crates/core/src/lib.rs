//! GlassShop Core - Shared types library.
//!
//! This crate provides common types used across all GlassShop components:
//! - `storefront` - Client-side state store, catalog and business rules
//! - `cli` - Command-line shell driving the store against local storage
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

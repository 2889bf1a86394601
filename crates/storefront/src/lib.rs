//! GlassShop storefront client core.
//!
//! A synchronous, single-owner state store for the GlassShop storefront:
//! cart, favorites, view history, the one-time promo code, the signed-in
//! user and a few UI toggles, with the durable subset saved through a
//! pluggable [`persistence::SnapshotStore`].
//!
//! # Modules
//!
//! - [`store`] - The state container and its operations
//! - [`promo`] - Promo code rules and discount math
//! - [`persistence`] - Snapshot format and storage adapters
//! - [`catalog`] - Read-only mock product catalog
//! - [`views`] - Priced cart and product lists derived from state
//! - [`auth`] - Mock sign-in, registration and profile forms
//! - [`config`] - Environment configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod persistence;
pub mod promo;
pub mod store;
pub mod views;

pub use error::{AppError, Result};
pub use store::{Store, StoreHandle};

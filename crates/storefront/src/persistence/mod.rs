//! Snapshot persistence for the state store.
//!
//! Only the durable subset of the store is saved: cart, favorites, view
//! history, user and promo status. UI toggles never reach storage.
//!
//! # Wire format
//!
//! A snapshot is stored as JSON under one namespace key, wrapped in a
//! versioned envelope:
//!
//! ```json
//! {
//!   "state": {
//!     "cart": [{ "productId": 1, "quantity": 2 }],
//!     "favorites": [7],
//!     "viewHistory": [1, 7],
//!     "user": null,
//!     "promoCodeUsed": false,
//!     "appliedPromoCode": null
//!   },
//!   "version": 0
//! }
//! ```
//!
//! Missing fields inside `state` take their defaults, so older snapshots
//! merge onto a fresh store.
//!
//! # Adapters
//!
//! - [`MemorySnapshotStore`] - In-process map, for tests and ephemeral sessions
//! - [`FileSnapshotStore`] - One JSON file per namespace in a data directory

mod file;
mod memory;

pub use file::FileSnapshotStore;
pub use memory::MemorySnapshotStore;

use glassshop_core::ProductId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{CartItem, User};

/// Namespace the storefront saves its snapshot under.
pub const DEFAULT_NAMESPACE: &str = "glassshop-storage";

/// Current envelope version.
pub const SNAPSHOT_VERSION: u32 = 0;

/// Errors that can occur while saving or loading a snapshot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Underlying storage I/O failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded or decoded.
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot was written by an incompatible version.
    #[error("Unsupported snapshot version {found} (expected {SNAPSHOT_VERSION})")]
    UnsupportedVersion {
        /// Version found in storage.
        found: u32,
    },
}

/// The persisted subset of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub cart: Vec<CartItem>,
    pub favorites: Vec<ProductId>,
    /// Most recent first.
    pub view_history: Vec<ProductId>,
    pub user: Option<User>,
    pub promo_code_used: bool,
    pub applied_promo_code: Option<String>,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: &'a Snapshot,
    version: u32,
}

#[derive(Deserialize)]
struct RawEnvelope {
    state: serde_json::Value,
    #[serde(default)]
    version: u32,
}

/// Encode a snapshot into its stored JSON form.
///
/// # Errors
///
/// Returns [`PersistenceError::Json`] if serialization fails.
pub fn encode(snapshot: &Snapshot) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(&EnvelopeRef {
        state: snapshot,
        version: SNAPSHOT_VERSION,
    })?)
}

/// Decode a stored snapshot.
///
/// # Errors
///
/// Returns [`PersistenceError::Json`] for malformed input and
/// [`PersistenceError::UnsupportedVersion`] for envelopes from another version.
pub fn decode(raw: &str) -> Result<Snapshot, PersistenceError> {
    let envelope: RawEnvelope = serde_json::from_str(raw)?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: envelope.version,
        });
    }
    Ok(serde_json::from_value(envelope.state)?)
}

/// Durable storage for store snapshots, keyed by namespace.
pub trait SnapshotStore {
    /// Load the snapshot saved under `namespace`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unreadable or the snapshot is corrupt.
    fn load(&self, namespace: &str) -> Result<Option<Snapshot>, PersistenceError>;

    /// Save `snapshot` under `namespace`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save(&mut self, namespace: &str, snapshot: &Snapshot) -> Result<(), PersistenceError>;

    /// Remove the snapshot saved under `namespace`. Missing entries are fine.
    ///
    /// # Errors
    ///
    /// Returns an error if storage refuses the removal.
    fn clear(&mut self, namespace: &str) -> Result<(), PersistenceError>;
}

//! Saving to disk and restoring after a restart.
//!
//! Each test simulates process restarts by dropping the store and restoring
//! a new one from the same data directory.

#![allow(clippy::unwrap_used)]

use std::fs;

use glassshop_core::ProductId;
use glassshop_storefront::Store;
use glassshop_storefront::persistence::{DEFAULT_NAMESPACE, FileSnapshotStore};
use glassshop_storefront::store::StoreState;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Store<FileSnapshotStore> {
    Store::with_default_namespace(FileSnapshotStore::new(dir.path()))
}

// =============================================================================
// Restart
// =============================================================================

#[test]
fn test_state_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = open(&dir);
        store.add_to_cart(ProductId::new(12));
        store.add_to_cart(ProductId::new(12));
        store.toggle_favorite(ProductId::new(40));
        store.add_to_history(ProductId::new(40));
        assert!(store.apply_promo_code("рыбка"));
    }

    let store = open(&dir);
    assert_eq!(store.cart_item_quantity(ProductId::new(12)), 2);
    assert!(store.is_favorite(ProductId::new(40)));
    assert_eq!(store.view_history().ids(), &[ProductId::new(40)]);
    assert_eq!(store.applied_promo_code(), Some("РЫБКА"));
    assert!(store.promo_code_used());
}

#[test]
fn test_used_code_stays_used_after_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = open(&dir);
        assert!(store.apply_promo_code("РЫБКА"));
        store.clear_promo_code();
    }

    let mut store = open(&dir);
    assert!(store.promo_code_used());
    assert!(!store.apply_promo_code("РЫБКА"));
}

#[test]
fn test_file_uses_envelope_format() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.add_to_cart(ProductId::new(3));

    let raw = fs::read_to_string(dir.path().join(format!("{DEFAULT_NAMESPACE}.json"))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], 0);
    assert_eq!(
        value["state"]["cart"],
        serde_json::json!([{ "productId": 3, "quantity": 1 }])
    );
    assert_eq!(value["state"]["promoCodeUsed"], false);
}

#[test]
fn test_namespaces_are_independent() {
    let dir = TempDir::new().unwrap();
    let mut first = Store::restore(FileSnapshotStore::new(dir.path()), "first");
    first.add_to_cart(ProductId::new(1));

    let second = Store::restore(FileSnapshotStore::new(dir.path()), "second");
    assert!(second.cart().is_empty());
}

// =============================================================================
// Recovery
// =============================================================================

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(format!("{DEFAULT_NAMESPACE}.json")),
        "{\"state\": {\"cart\": 12",
    )
    .unwrap();

    let mut store = open(&dir);
    assert_eq!(store.state(), &StoreState::default());

    // The next save replaces the corrupt file.
    store.add_to_cart(ProductId::new(1));
    assert_eq!(open(&dir).cart_item_quantity(ProductId::new(1)), 1);
}

#[test]
fn test_unknown_version_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(format!("{DEFAULT_NAMESPACE}.json")),
        r#"{"state":{"favorites":[1]},"version":7}"#,
    )
    .unwrap();

    assert!(open(&dir).favorites().is_empty());
}

#[test]
fn test_zero_quantity_lines_dropped_on_restore() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(format!("{DEFAULT_NAMESPACE}.json")),
        concat!(
            r#"{"state":{"cart":[{"productId":1,"quantity":0},"#,
            r#"{"productId":2,"quantity":3}]},"version":0}"#,
        ),
    )
    .unwrap();

    let store = open(&dir);
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart_item_quantity(ProductId::new(2)), 3);
}

#[test]
fn test_reset_removes_file() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.add_to_cart(ProductId::new(1));
    assert!(store.apply_promo_code("рыбка"));

    store.reset().unwrap();
    assert!(!dir.path().join(format!("{DEFAULT_NAMESPACE}.json")).exists());

    let mut store = open(&dir);
    assert!(store.cart().is_empty());
    assert!(store.apply_promo_code("рыбка"));
}

#[test]
fn test_flush_reports_unwritable_dir() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let mut store = Store::with_default_namespace(FileSnapshotStore::new(&blocker));
    // Save failures are swallowed by mutations...
    store.add_to_cart(ProductId::new(1));
    assert_eq!(store.cart_item_quantity(ProductId::new(1)), 1);
    // ...and reported by an explicit flush.
    assert!(store.flush().is_err());
}

//! Behavioral guarantees of the state store.
//!
//! Every test drives a fresh in-memory store through the public API only.

#![allow(clippy::unwrap_used)]

use glassshop_core::{Email, Price, ProductId, UserId};
use glassshop_integration_tests::pricing_catalog;
use glassshop_storefront::Store;
use glassshop_storefront::persistence::{DEFAULT_NAMESPACE, MemorySnapshotStore, SnapshotStore};
use glassshop_storefront::store::{AuthModalMode, UiState, User, VIEW_HISTORY_LIMIT};

fn id(n: i32) -> ProductId {
    ProductId::new(n)
}

// =============================================================================
// Cart
// =============================================================================

#[test]
fn test_repeated_adds_accumulate_in_one_line() {
    let mut store = Store::in_memory();
    for _ in 0..7 {
        store.add_to_cart(id(5));
    }
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart_item_quantity(id(5)), 7);
    assert_eq!(store.cart_count(), 7);
}

#[test]
fn test_non_positive_quantity_removes_line() {
    for quantity in [0, -5] {
        let mut store = Store::in_memory();
        store.add_to_cart(id(1));
        store.add_to_cart(id(2));
        store.update_quantity(id(1), quantity);
        assert_eq!(store.cart_item_quantity(id(1)), 0);
        assert_eq!(store.cart().len(), 1);
    }
}

#[test]
fn test_quantity_of_absent_product_leaves_cart() {
    let mut store = Store::in_memory();
    store.add_to_cart(id(1));
    let before = store.cart().clone();

    store.update_quantity(id(2), 4);
    assert_eq!(store.cart(), &before);
    assert_eq!(store.cart_item_quantity(id(2)), 0);
}

#[test]
fn test_cart_keeps_insertion_order() {
    let mut store = Store::in_memory();
    for n in [3, 1, 2, 1] {
        store.add_to_cart(id(n));
    }
    let order: Vec<_> = store.cart().items().iter().map(|i| i.product_id).collect();
    assert_eq!(order, vec![id(3), id(1), id(2)]);
}

// =============================================================================
// Favorites & History
// =============================================================================

#[test]
fn test_double_toggle_restores_membership() {
    let mut store = Store::in_memory();
    store.toggle_favorite(id(1));

    for n in [1, 2] {
        let before = store.is_favorite(id(n));
        store.toggle_favorite(id(n));
        store.toggle_favorite(id(n));
        assert_eq!(store.is_favorite(id(n)), before);
    }
    assert_eq!(store.favorites_count(), 1);
}

#[test]
fn test_repeat_view_moves_to_front_once() {
    let mut store = Store::in_memory();
    store.add_to_history(id(1));
    store.add_to_history(id(2));
    store.add_to_history(id(1));
    store.add_to_history(id(1));
    assert_eq!(store.view_history().ids(), &[id(1), id(2)]);
}

#[test]
fn test_history_caps_at_limit() {
    let mut store = Store::in_memory();
    for n in 1..=21 {
        store.add_to_history(id(n));
    }
    let ids = store.view_history().ids();
    assert_eq!(ids.len(), VIEW_HISTORY_LIMIT);
    assert_eq!(ids.first(), Some(&id(21)));
    assert!(!ids.contains(&id(1)));
}

// =============================================================================
// Promo Code
// =============================================================================

#[test]
fn test_code_variants_are_one_token() {
    let variants = ["рыбка", " РЫБКА ", "Рыбка"];
    let mut store = Store::in_memory();
    let accepted: Vec<bool> = variants.iter().map(|c| store.apply_promo_code(c)).collect();
    assert_eq!(accepted, vec![true, false, false]);
    assert_eq!(store.applied_promo_code(), Some("РЫБКА"));
}

#[test]
fn test_wrong_code_leaves_token_unspent() {
    let mut store = Store::in_memory();
    assert!(!store.apply_promo_code("WRONGCODE"));
    assert!(!store.promo_code_used());
    assert_eq!(store.applied_promo_code(), None);
    assert!(store.apply_promo_code("рыбка"));
}

#[test]
fn test_clear_cart_forfeits_code() {
    let mut store = Store::in_memory();
    store.add_to_cart(id(1));
    assert!(store.apply_promo_code("рыбка"));

    store.clear_cart();
    assert_eq!(store.applied_promo_code(), None);
    assert!(store.promo_code_used());
    assert!(!store.apply_promo_code("рыбка"));
}

// =============================================================================
// Pricing
// =============================================================================

#[test]
fn test_promo_discounts_regular_line() {
    let catalog = pricing_catalog();
    let mut store = Store::in_memory();
    store.add_to_cart(id(1));
    store.add_to_cart(id(1));
    assert!(store.apply_promo_code("РЫБКА"));

    let summary = store.cart_summary(&catalog);
    assert_eq!(summary.promo_discount, Price::from_units(20));
    assert_eq!(summary.payable, Price::from_units(180));
}

#[test]
fn test_promo_skips_sale_line() {
    let catalog = pricing_catalog();
    let mut store = Store::in_memory();
    store.add_to_cart(id(2));
    assert!(store.apply_promo_code("РЫБКА"));

    let summary = store.cart_summary(&catalog);
    assert!(summary.promo_discount.is_zero());
    assert_eq!(summary.payable, Price::from_units(90));
}

#[test]
fn test_mixed_cart_discounts_only_regular_lines() {
    let catalog = pricing_catalog();
    let mut store = Store::in_memory();
    store.add_to_cart(id(1));
    store.add_to_cart(id(2));
    assert!(store.apply_promo_code("РЫБКА"));

    let summary = store.cart_summary(&catalog);
    assert_eq!(summary.total, Price::from_units(190));
    assert_eq!(summary.promo_discount, Price::from_units(10));
    assert_eq!(summary.payable, Price::from_units(180));
}

// =============================================================================
// Round Trip
// =============================================================================

#[test]
fn test_snapshot_restores_into_fresh_store() {
    let mut store = Store::in_memory();
    store.add_to_cart(id(1));
    store.add_to_cart(id(1));
    store.add_to_cart(id(2));
    store.toggle_favorite(id(2));
    store.add_to_history(id(2));
    store.add_to_history(id(1));
    assert!(store.apply_promo_code("рыбка"));
    store.set_user(Some(User {
        id: UserId::parse("user-1").unwrap(),
        email: Email::parse("ivan@example.com").unwrap(),
        name: "ivan".to_string(),
        city: None,
    }));
    store.open_auth_modal(AuthModalMode::Register);
    store.toggle_mobile_menu();

    let storage: MemorySnapshotStore = store.storage().clone();
    let saved = storage.load(DEFAULT_NAMESPACE).unwrap().unwrap();
    let restored = Store::with_default_namespace(storage);

    assert_eq!(restored.cart(), store.cart());
    assert_eq!(restored.favorites(), store.favorites());
    assert_eq!(restored.view_history(), store.view_history());
    assert_eq!(restored.user(), store.user());
    assert_eq!(restored.promo(), store.promo());
    assert_eq!(restored.state().snapshot(), saved);
    assert_eq!(restored.ui(), &UiState::default());
}

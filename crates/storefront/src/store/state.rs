//! Plain data held by the store.

use super::cart::Cart;
use super::favorites::Favorites;
use super::history::ViewHistory;
use super::session::{UiState, User};
use crate::persistence::Snapshot;
use crate::promo::PromoState;

/// Everything the store owns. Behavior lives on [`super::Store`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    pub cart: Cart,
    pub favorites: Favorites,
    pub view_history: ViewHistory,
    pub promo: PromoState,
    pub user: Option<User>,
    pub ui: UiState,
}

impl StoreState {
    /// Rebuild state from a persisted snapshot.
    ///
    /// The collections re-establish their invariants, and an applied code
    /// implies the one-time token was spent. UI toggles start closed.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let promo_code_used = snapshot.promo_code_used || snapshot.applied_promo_code.is_some();
        Self {
            cart: Cart::from_items(snapshot.cart),
            favorites: Favorites::from_ids(snapshot.favorites),
            view_history: ViewHistory::from_ids(snapshot.view_history),
            promo: PromoState {
                applied_code: snapshot.applied_promo_code,
                used: promo_code_used,
            },
            user: snapshot.user,
            ui: UiState::default(),
        }
    }

    /// The persisted subset of this state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cart: self.cart.items().to_vec(),
            favorites: self.favorites.ids().to_vec(),
            view_history: self.view_history.ids().to_vec(),
            user: self.user.clone(),
            promo_code_used: self.promo.used,
            applied_promo_code: self.promo.applied_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use glassshop_core::ProductId;

    use super::*;
    use crate::store::CartItem;

    #[test]
    fn test_from_snapshot_normalizes_collections() {
        let snapshot = Snapshot {
            cart: vec![
                CartItem {
                    product_id: ProductId::new(1),
                    quantity: 1,
                },
                CartItem {
                    product_id: ProductId::new(1),
                    quantity: 2,
                },
            ],
            favorites: vec![ProductId::new(2), ProductId::new(2)],
            view_history: (1..=25).map(ProductId::new).collect(),
            ..Snapshot::default()
        };

        let state = StoreState::from_snapshot(snapshot);
        assert_eq!(state.cart.quantity_of(ProductId::new(1)), 3);
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.favorites.len(), 1);
        assert_eq!(state.view_history.len(), 20);
    }

    #[test]
    fn test_applied_code_implies_used() {
        let state = StoreState::from_snapshot(Snapshot {
            applied_promo_code: Some("РЫБКА".to_string()),
            promo_code_used: false,
            ..Snapshot::default()
        });
        assert!(state.promo.used);
    }

    #[test]
    fn test_snapshot_excludes_ui() {
        let mut state = StoreState::default();
        state.ui.mobile_menu_open = true;
        state.ui.auth_modal_open = true;

        let restored = StoreState::from_snapshot(state.snapshot());
        assert_eq!(restored.ui, UiState::default());
    }
}

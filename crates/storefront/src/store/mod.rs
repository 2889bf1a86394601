//! Client-side state store.
//!
//! [`Store`] owns the shopper's cart, favorites, view history, promo status,
//! signed-in user and UI toggles. It is constructed by the composition root
//! with an injected [`SnapshotStore`] and handed to whatever renders the UI.
//!
//! # Semantics
//!
//! Every operation is total. Removing an absent item, un-favoriting a
//! product that is not a favorite, or setting the quantity of a product that
//! is not in the cart are silent no-ops. The only signaling operation is
//! [`Store::apply_promo_code`], which returns `false` on rejection.
//!
//! Product IDs are stored without checking them against the catalog; views
//! skip IDs that no longer resolve.
//!
//! # Persistence
//!
//! The store restores its persisted subset when constructed. After each
//! operation that changes that subset it saves a fresh snapshot. Save
//! failures are logged and otherwise ignored; call [`Store::flush`] to
//! observe them.
//!
//! # Example
//!
//! ```rust
//! use glassshop_core::ProductId;
//! use glassshop_storefront::store::Store;
//!
//! let mut store = Store::in_memory();
//! store.add_to_cart(ProductId::new(1));
//! store.add_to_cart(ProductId::new(1));
//! assert_eq!(store.cart_item_quantity(ProductId::new(1)), 2);
//!
//! assert!(store.apply_promo_code(" рыбка "));
//! assert!(!store.apply_promo_code("РЫБКА"));
//! ```

mod cart;
mod favorites;
mod history;
mod session;
mod state;

use std::sync::{Arc, Mutex, PoisonError};

use glassshop_core::ProductId;
use tracing::{debug, info, warn};

pub use cart::{Cart, CartItem};
pub use favorites::Favorites;
pub use history::{VIEW_HISTORY_LIMIT, ViewHistory};
pub use session::{AuthModalMode, UiState, User};
pub use state::StoreState;

use crate::catalog::{Product, ProductLookup};
use crate::persistence::{DEFAULT_NAMESPACE, MemorySnapshotStore, PersistenceError, SnapshotStore};
use crate::promo::PromoState;
use crate::views::{self, CartSummary};

/// The state container.
#[derive(Debug)]
pub struct Store<S> {
    state: StoreState,
    storage: S,
    namespace: String,
}

impl Store<MemorySnapshotStore> {
    /// A store backed by fresh in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::restore(MemorySnapshotStore::new(), DEFAULT_NAMESPACE)
    }
}

impl<S: SnapshotStore> Store<S> {
    /// Restore the store from `storage`.
    ///
    /// A missing snapshot yields the defaults. An unreadable or corrupt one
    /// is logged and also yields the defaults; it is overwritten by the next
    /// save.
    pub fn restore(storage: S, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let state = match storage.load(&namespace) {
            Ok(Some(snapshot)) => {
                debug!(%namespace, "Restored store snapshot");
                StoreState::from_snapshot(snapshot)
            }
            Ok(None) => StoreState::default(),
            Err(e) => {
                warn!(%namespace, error = %e, "Discarding unreadable store snapshot");
                StoreState::default()
            }
        };

        Self {
            state,
            storage,
            namespace,
        }
    }

    /// Restore under [`DEFAULT_NAMESPACE`].
    pub fn with_default_namespace(storage: S) -> Self {
        Self::restore(storage, DEFAULT_NAMESPACE)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All state, read-only.
    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage, e.g. to restore a second store from it.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    // =========================================================================
    // Cart
    // =========================================================================

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.state.cart
    }

    /// Add one unit of a product.
    pub fn add_to_cart(&mut self, product_id: ProductId) {
        let quantity = self.state.cart.add(product_id);
        debug!(%product_id, quantity, "Added to cart");
        self.persist();
    }

    /// Remove a product's line. No-op if absent.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        if self.state.cart.remove(product_id) {
            debug!(%product_id, "Removed from cart");
            self.persist();
        }
    }

    /// Set a line's quantity. Non-positive quantities remove the line; a
    /// product not already in the cart is not added.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }
        if self.state.cart.set_quantity(product_id, quantity) {
            debug!(%product_id, quantity, "Updated cart quantity");
            self.persist();
        }
    }

    /// Empty the cart and drop the applied promo code. The code stays spent.
    pub fn clear_cart(&mut self) {
        let cart_changed = self.state.cart.clear();
        let promo_changed = self.state.promo.clear();
        if cart_changed || promo_changed {
            debug!(promo_dropped = promo_changed, "Cleared cart");
            self.persist();
        }
    }

    /// Total units in the cart.
    #[must_use]
    pub fn cart_count(&self) -> u64 {
        self.state.cart.count()
    }

    /// Quantity of one product, 0 if absent.
    #[must_use]
    pub fn cart_item_quantity(&self, product_id: ProductId) -> u32 {
        self.state.cart.quantity_of(product_id)
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.state.favorites
    }

    /// Flip a product's favorite status. Returns the new status.
    pub fn toggle_favorite(&mut self, product_id: ProductId) -> bool {
        let favorite = self.state.favorites.toggle(product_id);
        debug!(%product_id, favorite, "Toggled favorite");
        self.persist();
        favorite
    }

    #[must_use]
    pub fn is_favorite(&self, product_id: ProductId) -> bool {
        self.state.favorites.contains(product_id)
    }

    #[must_use]
    pub fn favorites_count(&self) -> usize {
        self.state.favorites.len()
    }

    pub fn clear_favorites(&mut self) {
        if self.state.favorites.clear() {
            debug!("Cleared favorites");
            self.persist();
        }
    }

    // =========================================================================
    // View History
    // =========================================================================

    #[must_use]
    pub const fn view_history(&self) -> &ViewHistory {
        &self.state.view_history
    }

    /// Record one product view. Callers invoke this once per view; repeated
    /// calls are not collapsed beyond moving the product to the front.
    pub fn add_to_history(&mut self, product_id: ProductId) {
        if self.state.view_history.record(product_id) {
            debug!(%product_id, "Recorded product view");
            self.persist();
        }
    }

    pub fn clear_history(&mut self) {
        if self.state.view_history.clear() {
            debug!("Cleared view history");
            self.persist();
        }
    }

    // =========================================================================
    // Promo Code
    // =========================================================================

    #[must_use]
    pub const fn promo(&self) -> &PromoState {
        &self.state.promo
    }

    /// Redeem a promo code. Returns false for a wrong code and for any code
    /// once the one-time token has been spent.
    pub fn apply_promo_code(&mut self, code: &str) -> bool {
        let accepted = self.state.promo.apply(code);
        if accepted {
            info!("Promo code accepted");
            self.persist();
        } else {
            debug!(already_used = self.state.promo.used, "Promo code rejected");
        }
        accepted
    }

    /// Drop the applied code without refunding the one-time token.
    pub fn clear_promo_code(&mut self) {
        if self.state.promo.clear() {
            debug!("Cleared promo code");
            self.persist();
        }
    }

    #[must_use]
    pub const fn promo_code_used(&self) -> bool {
        self.state.promo.used
    }

    #[must_use]
    pub fn applied_promo_code(&self) -> Option<&str> {
        self.state.promo.applied_code.as_deref()
    }

    // =========================================================================
    // User & UI
    // =========================================================================

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    /// Replace the signed-in user wholesale. `None` signs out.
    pub fn set_user(&mut self, user: Option<User>) {
        match &user {
            Some(u) => info!(user_id = %u.id, "User signed in"),
            None if self.state.user.is_some() => info!("User signed out"),
            None => {}
        }
        self.state.user = user;
        self.persist();
    }

    /// Sign out.
    pub fn clear_user(&mut self) {
        self.set_user(None);
    }

    #[must_use]
    pub const fn ui(&self) -> &UiState {
        &self.state.ui
    }

    pub const fn open_auth_modal(&mut self, mode: AuthModalMode) {
        self.state.ui.auth_modal_open = true;
        self.state.ui.auth_modal_mode = mode;
    }

    pub const fn close_auth_modal(&mut self) {
        self.state.ui.auth_modal_open = false;
    }

    pub const fn toggle_mobile_menu(&mut self) {
        self.state.ui.mobile_menu_open = !self.state.ui.mobile_menu_open;
    }

    pub const fn close_mobile_menu(&mut self) {
        self.state.ui.mobile_menu_open = false;
    }

    // =========================================================================
    // Derived Views
    // =========================================================================

    /// Priced cart with the promo discount applied.
    #[must_use]
    pub fn cart_summary(&self, lookup: &impl ProductLookup) -> CartSummary {
        CartSummary::compute(&self.state.cart, lookup, self.state.promo.is_applied())
    }

    /// Favorited products that still exist.
    #[must_use]
    pub fn favorite_products<'a>(&self, lookup: &'a impl ProductLookup) -> Vec<&'a Product> {
        views::favorite_products(&self.state.favorites, lookup)
    }

    /// Recently viewed products other than `current`.
    #[must_use]
    pub fn recently_viewed<'a>(
        &self,
        lookup: &'a impl ProductLookup,
        current: Option<ProductId>,
        limit: usize,
    ) -> Vec<&'a Product> {
        views::recently_viewed(&self.state.view_history, lookup, current, limit)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Save the persisted subset now.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the snapshot could not be written.
    pub fn flush(&mut self) -> Result<(), PersistenceError> {
        let snapshot = self.state.snapshot();
        self.storage.save(&self.namespace, &snapshot)
    }

    /// Wipe all state, including the spent promo token, and remove the
    /// saved snapshot.
    ///
    /// In-memory state is wiped even when storage fails.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the saved snapshot could not be removed;
    /// the old snapshot would then come back on the next restore.
    pub fn reset(&mut self) -> Result<(), PersistenceError> {
        self.state = StoreState::default();
        self.storage.clear(&self.namespace).inspect_err(|e| {
            warn!(namespace = %self.namespace, error = %e, "Failed to clear store snapshot");
        })?;
        info!("Store reset");
        Ok(())
    }

    fn persist(&mut self) {
        if let Err(e) = self.flush() {
            warn!(namespace = %self.namespace, error = %e, "Failed to save store snapshot");
        }
    }
}

// =============================================================================
// Shared Handle
// =============================================================================

/// Cloneable handle for sharing one store between threads.
///
/// All access goes through a single lock around the whole store, so
/// read-modify-write operations never interleave.
#[derive(Debug)]
pub struct StoreHandle<S> {
    inner: Arc<Mutex<Store<S>>>,
}

impl<S> Clone for StoreHandle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: SnapshotStore> StoreHandle<S> {
    #[must_use]
    pub fn new(store: Store<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// A panic inside an earlier closure does not lock the store out; every
    /// operation leaves the state consistent before anything can panic.
    pub fn with<R>(&self, f: impl FnOnce(&mut Store<S>) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}

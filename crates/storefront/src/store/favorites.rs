//! Favorite products.

use glassshop_core::ProductId;

/// Set of favorited product IDs, iterated in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<ProductId>,
}

impl Favorites {
    /// Build from raw IDs, keeping the first occurrence of each.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut favorites = Self::default();
        for id in ids {
            if !favorites.contains(id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }

    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Add if absent, remove if present. Returns the new membership.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.contains(id) {
            self.ids.retain(|&existing| existing != id);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Returns true if anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.ids.is_empty();
        self.ids.clear();
        had_any
    }
}

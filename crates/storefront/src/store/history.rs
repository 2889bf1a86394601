//! Recently viewed products.

use glassshop_core::ProductId;

/// Maximum number of remembered product views.
pub const VIEW_HISTORY_LIMIT: usize = 20;

/// Product views, most recent first, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewHistory {
    ids: Vec<ProductId>,
}

impl ViewHistory {
    /// Build from raw IDs (most recent first), keeping the first occurrence
    /// of each and at most [`VIEW_HISTORY_LIMIT`] entries.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut history = Self::default();
        for id in ids {
            if history.ids.len() == VIEW_HISTORY_LIMIT {
                break;
            }
            if !history.ids.contains(&id) {
                history.ids.push(id);
            }
        }
        history
    }

    /// Viewed IDs, most recent first.
    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Record a view: move or insert `id` at the front and evict the oldest
    /// entries past the limit.
    ///
    /// Returns true if the history changed.
    pub fn record(&mut self, id: ProductId) -> bool {
        if self.ids.first() == Some(&id) {
            return false;
        }
        self.ids.retain(|&existing| existing != id);
        self.ids.insert(0, id);
        self.ids.truncate(VIEW_HISTORY_LIMIT);
        true
    }

    /// Returns true if anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.ids.is_empty();
        self.ids.clear();
        had_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_twice_keeps_one_entry_at_front() {
        let mut history = ViewHistory::default();
        history.record(ProductId::new(1));
        history.record(ProductId::new(2));
        history.record(ProductId::new(2));
        history.record(ProductId::new(2));
        assert_eq!(history.ids(), &[2, 1].map(ProductId::new));
    }

    #[test]
    fn test_record_moves_to_front() {
        let mut history = ViewHistory::default();
        for n in 1..=3 {
            history.record(ProductId::new(n));
        }
        history.record(ProductId::new(1));
        assert_eq!(history.ids(), &[1, 3, 2].map(ProductId::new));
    }

    #[test]
    fn test_record_evicts_oldest() {
        let mut history = ViewHistory::default();
        for n in 1..=21 {
            history.record(ProductId::new(n));
        }
        assert_eq!(history.len(), VIEW_HISTORY_LIMIT);
        assert!(!history.ids().contains(&ProductId::new(1)));
        assert_eq!(history.ids().first(), Some(&ProductId::new(21)));
        assert_eq!(history.ids().last(), Some(&ProductId::new(2)));
    }

    #[test]
    fn test_from_ids_dedupes_and_caps() {
        let raw = (1..=30).chain([5, 6]).map(ProductId::new);
        let history = ViewHistory::from_ids(raw);
        assert_eq!(history.len(), VIEW_HISTORY_LIMIT);
        assert_eq!(history.ids().last(), Some(&ProductId::new(20)));

        let history = ViewHistory::from_ids([4, 4, 2].map(ProductId::new));
        assert_eq!(history.ids(), &[4, 2].map(ProductId::new));
    }
}

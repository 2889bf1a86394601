//! Read-only mock catalog.
//!
//! The catalog is generated once at startup and never mutated. The state
//! store only keeps product IDs; anything that needs to render a cart,
//! favorites or history list resolves those IDs through [`ProductLookup`]
//! and skips IDs that no longer resolve.
//!
//! # Example
//!
//! ```rust
//! use glassshop_storefront::catalog::{BrowseFilter, Catalog, SortOption};
//!
//! let catalog = Catalog::generate(2024);
//!
//! let phones = catalog.search("iphone");
//! assert!(!phones.is_empty());
//!
//! let cheapest_first = catalog.browse(&BrowseFilter {
//!     sort: SortOption::PriceAsc,
//!     ..BrowseFilter::default()
//! });
//! assert_eq!(cheapest_first.len(), catalog.products().len());
//! ```

mod fixtures;
mod generator;
mod types;

use std::collections::HashMap;
use std::str::FromStr;

use glassshop_core::{CategoryId, ProductId};

pub use fixtures::CITIES;
pub use types::{Category, Product};

/// Default number of products in the popular and sale rails.
pub const DEFAULT_RAIL_LIMIT: usize = 8;
/// Default number of similar products shown on a product page.
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;
/// Maximum number of hits in the search-as-you-type preview.
pub const SEARCH_PREVIEW_LIMIT: usize = 4;

/// Resolves product IDs held by the state store back to products.
pub trait ProductLookup {
    /// Look up a product by ID.
    fn product(&self, id: ProductId) -> Option<&Product>;

    /// Returns true if the ID refers to an existing product.
    fn product_exists(&self, id: ProductId) -> bool {
        self.product(id).is_some()
    }
}

// =============================================================================
// Browse Filters
// =============================================================================

/// Sort order for the catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Most reviewed first.
    #[default]
    Popular,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Best rated first.
    Rating,
}

impl SortOption {
    /// Stable identifier used in query strings and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Rating => "rating",
        }
    }
}

/// Error returned when parsing an unknown [`SortOption`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort option: {0}")]
pub struct UnknownSortOption(String);

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popular" => Ok(Self::Popular),
            "price_asc" => Ok(Self::PriceAsc),
            "price_desc" => Ok(Self::PriceDesc),
            "rating" => Ok(Self::Rating),
            other => Err(UnknownSortOption(other.to_string())),
        }
    }
}

/// Catalog listing filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowseFilter {
    /// Restrict to one category.
    pub category: Option<CategoryId>,
    /// Only products that already carry a sale price.
    pub sale_only: bool,
    pub sort: SortOption,
}

impl BrowseFilter {
    /// Number of active narrowing filters (sorting does not count).
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.category.is_some()) + usize::from(self.sale_only)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The mock product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Generate the mock catalog for a seed.
    #[must_use]
    pub fn generate(seed: u64) -> Self {
        let (categories, products) = generator::generate(seed);
        tracing::debug!(
            seed,
            categories = categories.len(),
            products = products.len(),
            "Generated mock catalog"
        );
        Self::from_parts(categories, products)
    }

    /// Build a catalog from explicit data.
    #[must_use]
    pub fn from_parts(categories: Vec<Category>, products: Vec<Product>) -> Self {
        let by_id = products
            .iter()
            .enumerate()
            .map(|(index, product)| (product.id, index))
            .collect();
        Self {
            categories,
            products,
            by_id,
        }
    }

    /// All categories in ID order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All products in ID order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn category_by_id(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).and_then(|&index| self.products.get(index))
    }

    /// Products belonging to a category, in ID order.
    #[must_use]
    pub fn products_by_category(&self, id: CategoryId) -> Vec<&Product> {
        self.products.iter().filter(|p| p.category_id == id).collect()
    }

    /// Every category except `id`, for "other categories" navigation.
    #[must_use]
    pub fn other_categories(&self, id: CategoryId) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.id != id).collect()
    }

    /// Top rated products.
    #[must_use]
    pub fn popular(&self, limit: usize) -> Vec<&Product> {
        let mut result: Vec<&Product> = self.products.iter().collect();
        result.sort_by(|a, b| b.rating.cmp(&a.rating));
        result.truncate(limit);
        result
    }

    /// Products that carry a sale price, in ID order.
    #[must_use]
    pub fn on_sale(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_on_sale())
            .take(limit)
            .collect()
    }

    /// Other products from the same category. Empty for unknown IDs.
    #[must_use]
    pub fn similar(&self, id: ProductId, limit: usize) -> Vec<&Product> {
        let Some(product) = self.product_by_id(id) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|p| p.category_id == product.category_id && p.id != id)
            .take(limit)
            .collect()
    }

    /// Case-insensitive substring search over names and descriptions.
    ///
    /// A blank query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.products.iter().filter(|p| p.matches(&needle)).collect()
    }

    /// First few search hits for the header dropdown.
    #[must_use]
    pub fn search_preview(&self, query: &str) -> Vec<&Product> {
        let mut hits = self.search(query);
        hits.truncate(SEARCH_PREVIEW_LIMIT);
        hits
    }

    /// Filtered and sorted catalog listing.
    ///
    /// Sorting is stable, so ties keep ID order.
    #[must_use]
    pub fn browse(&self, filter: &BrowseFilter) -> Vec<&Product> {
        let mut result: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| filter.category.is_none_or(|id| p.category_id == id))
            .filter(|p| !filter.sale_only || p.is_on_sale())
            .collect();

        match filter.sort {
            SortOption::Popular => result.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
            SortOption::PriceAsc => result.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
            SortOption::PriceDesc => result.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
            SortOption::Rating => result.sort_by(|a, b| b.rating.cmp(&a.rating)),
        }

        result
    }
}

impl ProductLookup for Catalog {
    fn product(&self, id: ProductId) -> Option<&Product> {
        self.product_by_id(id)
    }
}

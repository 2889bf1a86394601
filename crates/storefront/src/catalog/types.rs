//! Catalog domain types.

use glassshop_core::{CategoryId, Price, ProductId};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Emoji shown on category cards.
    pub icon: String,
    pub description: String,
    /// Number of products in this category.
    pub product_count: usize,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    /// Current selling price.
    pub price: Price,
    /// Price before the sale, present only for discounted products.
    pub old_price: Option<Price>,
    pub image_url: String,
    pub description: String,
    /// Average rating with one decimal place.
    pub rating: Decimal,
    pub review_count: u32,
}

impl Product {
    /// Returns true if the product already carries a sale price.
    #[must_use]
    pub const fn is_on_sale(&self) -> bool {
        self.old_price.is_some()
    }

    /// The pre-sale price if discounted, otherwise the current price.
    #[must_use]
    pub fn list_price(&self) -> Price {
        self.old_price.unwrap_or(self.price)
    }

    /// Sale discount as a whole percentage of the old price, 0 when not on sale.
    #[must_use]
    pub fn discount_percent(&self) -> u32 {
        let Some(old) = self.old_price else {
            return 0;
        };
        if old.amount.is_zero() {
            return 0;
        }

        let percent = ((old.amount - self.price.amount) / old.amount * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        percent.to_u32().unwrap_or(0)
    }

    /// Case-insensitive substring match against name and description.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

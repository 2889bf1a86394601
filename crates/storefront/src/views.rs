//! Display data derived from store state and the catalog.
//!
//! Nothing here is stored. Views are recomputed from the current state, and
//! product IDs that no longer resolve are skipped rather than reported.

use glassshop_core::{CurrencyCode, Price, ProductId};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::{Product, ProductLookup};
use crate::promo;
use crate::store::{Cart, Favorites, ViewHistory};

/// Number of products in the "recently viewed" rail.
pub const RECENTLY_VIEWED_LIMIT: usize = 4;

/// One resolved cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub image_url: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub old_unit_price: Option<Price>,
    pub line_total: Price,
    /// Promo discount on this line; zero for sale items.
    pub promo_discount: Price,
}

/// Priced cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub lines: Vec<CartLineView>,
    /// Units in the cart, counting lines whose product no longer resolves.
    pub item_count: u64,
    pub total: Price,
    /// Total at pre-sale prices.
    pub total_before_sale: Price,
    /// Sale savings, `total_before_sale - total`.
    pub savings: Price,
    pub promo_discount: Price,
    /// What the shopper pays, `total - promo_discount`.
    pub payable: Price,
}

impl CartSummary {
    /// Price every resolvable line of `cart`.
    ///
    /// The promo discount applies only when `promo_applied` is set, and only
    /// to lines without a sale price.
    #[must_use]
    pub fn compute(cart: &Cart, lookup: &impl ProductLookup, promo_applied: bool) -> Self {
        let mut lines = Vec::with_capacity(cart.len());
        let mut total = Decimal::ZERO;
        let mut total_before_sale = Decimal::ZERO;
        let mut discount = Decimal::ZERO;

        for item in cart.items() {
            let Some(product) = lookup.product(item.product_id) else {
                continue;
            };

            let line_total = product.price.times(item.quantity);
            let line_discount = if promo_applied {
                promo::line_discount(product.price.amount, item.quantity, product.is_on_sale())
            } else {
                Decimal::ZERO
            };

            total += line_total.amount;
            total_before_sale += product.list_price().times(item.quantity).amount;
            discount += line_discount;

            lines.push(CartLineView {
                product_id: product.id,
                name: product.name.clone(),
                image_url: product.image_url.clone(),
                quantity: item.quantity,
                unit_price: product.price,
                old_unit_price: product.old_price,
                line_total,
                promo_discount: rub(line_discount),
            });
        }

        Self {
            lines,
            item_count: cart.count(),
            total: rub(total),
            total_before_sale: rub(total_before_sale),
            savings: rub(total_before_sale - total),
            promo_discount: rub(discount),
            payable: rub(total - discount),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

const fn rub(amount: Decimal) -> Price {
    Price::new(amount, CurrencyCode::RUB)
}

/// Favorited products in insertion order.
#[must_use]
pub fn favorite_products<'a>(
    favorites: &Favorites,
    lookup: &'a impl ProductLookup,
) -> Vec<&'a Product> {
    favorites.ids().iter().filter_map(|&id| lookup.product(id)).collect()
}

/// Most recent views first, excluding `current`, resolved and truncated.
#[must_use]
pub fn recently_viewed<'a>(
    history: &ViewHistory,
    lookup: &'a impl ProductLookup,
    current: Option<ProductId>,
    limit: usize,
) -> Vec<&'a Product> {
    history
        .ids()
        .iter()
        .filter(|&&id| Some(id) != current)
        .filter_map(|&id| lookup.product(id))
        .take(limit)
        .collect()
}

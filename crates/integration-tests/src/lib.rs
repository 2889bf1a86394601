//! Integration tests for GlassShop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p glassshop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_properties` - Behavioral guarantees of the state store
//! - `persistence_restart` - Saving to disk and restoring after a restart
//! - `storefront_flow` - Catalog, cart, promo and account end to end
//!
//! This crate only holds shared fixtures.

use glassshop_core::{CategoryId, Price, ProductId};
use glassshop_storefront::catalog::{Catalog, Category, Product};
use rust_decimal::Decimal;

/// Build a product with fixed display fields.
#[must_use]
pub fn product(id: i32, price: i64, old_price: Option<i64>) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Товар {id}"),
        category_id: CategoryId::new(1),
        price: Price::from_units(price),
        old_price: old_price.map(Price::from_units),
        image_url: format!("/public/images/toys/{id:02}.jpg"),
        description: "Тестовый товар".to_string(),
        rating: Decimal::new(45, 1),
        review_count: 100,
    }
}

/// Two-product catalog: product 1 at 100, product 2 at 90 marked down from 120.
#[must_use]
pub fn pricing_catalog() -> Catalog {
    Catalog::from_parts(
        vec![Category {
            id: CategoryId::new(1),
            name: "Игрушки".to_string(),
            icon: "🧸".to_string(),
            description: "Тестовая категория".to_string(),
            product_count: 2,
        }],
        vec![product(1, 100, None), product(2, 90, Some(120))],
    )
}

//! Deterministic mock catalog generation.
//!
//! Prices, discounts and ratings are drawn from a seeded [`StdRng`], so the
//! same seed always yields the same catalog. That keeps product IDs stored in
//! a persisted cart pointing at the same products across restarts.

use glassshop_core::{CategoryId, Price, ProductId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use super::fixtures::{CATEGORY_SEEDS, CategorySeed};
use super::types::{Category, Product};

/// Lowest generated base price (inclusive).
const MIN_BASE_PRICE: i64 = 500;
/// Width of the base price range.
const BASE_PRICE_SPAN: i64 = 9000;
/// Probability that a product is put on sale.
const SALE_PROBABILITY: f64 = 0.2;
/// Smallest sale discount in percent.
const MIN_SALE_PERCENT: i64 = 10;
/// Width of the sale discount range in percent.
const SALE_PERCENT_SPAN: i64 = 30;

/// Generate the categories and products for a given seed.
///
/// Product IDs are assigned sequentially from 1 in category order.
#[must_use]
pub fn generate(seed: u64) -> (Vec<Category>, Vec<Product>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut categories = Vec::with_capacity(CATEGORY_SEEDS.len());
    let mut products = Vec::new();
    let mut next_product_id = 1;

    for (category_id, seed) in (1..).zip(CATEGORY_SEEDS.iter()) {
        let category_id = CategoryId::new(category_id);
        let before = products.len();

        for (index, (name, description)) in seed
            .product_names
            .iter()
            .zip(seed.product_descriptions.iter())
            .enumerate()
        {
            products.push(generate_product(
                &mut rng,
                ProductId::new(next_product_id),
                category_id,
                seed,
                index,
                name,
                description,
            ));
            next_product_id += 1;
        }

        categories.push(Category {
            id: category_id,
            name: seed.name.to_string(),
            icon: seed.icon.to_string(),
            description: seed.description.to_string(),
            product_count: products.len() - before,
        });
    }

    (categories, products)
}

fn generate_product(
    rng: &mut StdRng,
    id: ProductId,
    category_id: CategoryId,
    seed: &CategorySeed,
    index: usize,
    name: &str,
    description: &str,
) -> Product {
    let base_price = rng.random_range(0..BASE_PRICE_SPAN) + MIN_BASE_PRICE;
    let on_sale = rng.random_bool(SALE_PROBABILITY);

    let (price, old_price) = if on_sale {
        let percent = rng.random_range(0..SALE_PERCENT_SPAN) + MIN_SALE_PERCENT;
        let discounted = base_price * (100 - percent) / 100;
        (discounted, Some(Price::from_units(base_price)))
    } else {
        (base_price, None)
    };

    // Tenths of a star, 3.0 through 4.9.
    let rating_tenths = rng.random_range(30..50_i64);
    let review_count = rng.random_range(10..510_u32);

    Product {
        id,
        name: name.to_string(),
        category_id,
        price: Price::from_units(price),
        old_price,
        image_url: format!("/public/images/{}/{:02}.jpg", seed.image_folder, index + 1),
        description: description.to_string(),
        rating: Decimal::new(rating_tenths, 1),
        review_count,
    }
}

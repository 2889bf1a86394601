//! Terminal output.
//!
//! Everything the CLI shows the user goes through [`Printer`]. In JSON mode
//! each call prints one pretty-printed document; otherwise plain text.

use std::fmt::Write as _;

use glassshop_storefront::catalog::{Category, Product};
use glassshop_storefront::promo::PromoState;
use glassshop_storefront::store::User;
use glassshop_storefront::views::CartSummary;
use serde::Serialize;

/// Product page data.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage<'a> {
    pub product: &'a Product,
    pub category: Option<&'a Category>,
    pub favorite: bool,
    pub in_cart: u32,
    pub similar: Vec<&'a Product>,
    pub recently_viewed: Vec<&'a Product>,
}

/// Home page rails.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage<'a> {
    pub popular: Vec<&'a Product>,
    pub on_sale: Vec<&'a Product>,
}

#[derive(Serialize)]
struct Message<'a> {
    message: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartDocument<'a> {
    #[serde(flatten)]
    summary: &'a CartSummary,
    applied_promo_code: Option<&'a str>,
}

/// Writes command results to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    json: bool,
}

#[allow(clippy::print_stdout)]
impl Printer {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    fn emit<T: Serialize + ?Sized>(
        self,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> Result<(), serde_json::Error> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text().trim_end());
        }
        Ok(())
    }

    pub fn message(self, text: &str) -> Result<(), serde_json::Error> {
        self.emit(&Message { message: text }, || text.to_string())
    }

    pub fn categories(self, categories: &[Category]) -> Result<(), serde_json::Error> {
        self.emit(categories, || {
            let mut out = String::new();
            for c in categories {
                let _ = writeln!(
                    out,
                    "{:>3}  {} {} ({} products)",
                    c.id, c.icon, c.name, c.product_count
                );
            }
            out
        })
    }

    pub fn products(self, products: &[&Product]) -> Result<(), serde_json::Error> {
        self.emit(products, || {
            if products.is_empty() {
                return "Nothing found".to_string();
            }
            let mut out = String::new();
            for p in products {
                let _ = writeln!(out, "{}", product_row(p));
            }
            out
        })
    }

    pub fn home(self, page: &HomePage<'_>) -> Result<(), serde_json::Error> {
        self.emit(page, || {
            let mut out = String::from("Popular\n");
            for p in &page.popular {
                let _ = writeln!(out, "{}", product_row(p));
            }
            out.push_str("\nOn sale\n");
            for p in &page.on_sale {
                let _ = writeln!(out, "{}", product_row(p));
            }
            out
        })
    }

    pub fn product_page(self, page: &ProductPage<'_>) -> Result<(), serde_json::Error> {
        self.emit(page, || {
            let p = page.product;
            let mut out = String::new();
            let _ = writeln!(out, "#{} {}", p.id, p.name);
            if let Some(category) = page.category {
                let _ = writeln!(out, "{} {}", category.icon, category.name);
            }
            let _ = writeln!(out, "{}", price_label(p));
            let _ = writeln!(out, "Rating {} ({} reviews)", p.rating, p.review_count);
            let _ = writeln!(out, "{}", p.description);
            let _ = writeln!(out, "Image: {}", p.image_url);
            if page.favorite {
                out.push_str("In favorites\n");
            }
            if page.in_cart > 0 {
                let _ = writeln!(out, "In cart: {}", page.in_cart);
            }
            if !page.similar.is_empty() {
                out.push_str("\nSimilar\n");
                for s in &page.similar {
                    let _ = writeln!(out, "{}", product_row(s));
                }
            }
            if !page.recently_viewed.is_empty() {
                out.push_str("\nRecently viewed\n");
                for s in &page.recently_viewed {
                    let _ = writeln!(out, "{}", product_row(s));
                }
            }
            out
        })
    }

    pub fn cart(
        self,
        summary: &CartSummary,
        applied_promo_code: Option<&str>,
    ) -> Result<(), serde_json::Error> {
        let document = CartDocument {
            summary,
            applied_promo_code,
        };
        self.emit(&document, || {
            if summary.is_empty() {
                return "Cart is empty".to_string();
            }
            let mut out = String::new();
            for line in &summary.lines {
                let _ = writeln!(
                    out,
                    "{:>4}  {} x{}  {}",
                    line.product_id,
                    line.name,
                    line.quantity,
                    line.line_total.display()
                );
            }
            let _ = writeln!(out, "\nItems: {}", summary.item_count);
            if !summary.savings.is_zero() {
                let _ = writeln!(out, "Sale savings: {}", summary.savings.display());
            }
            let _ = writeln!(out, "Total: {}", summary.total.display());
            if let Some(code) = applied_promo_code {
                let _ = writeln!(out, "Promo {code}: -{}", summary.promo_discount.display());
            }
            let _ = writeln!(out, "To pay: {}", summary.payable.display());
            out
        })
    }

    pub fn promo(self, promo: &PromoState) -> Result<(), serde_json::Error> {
        self.emit(promo, || match (&promo.applied_code, promo.used) {
            (Some(code), _) => format!("Promo code {code} applied"),
            (None, true) => "Promo code already used".to_string(),
            (None, false) => "No promo code applied".to_string(),
        })
    }

    pub fn user(self, user: Option<&User>) -> Result<(), serde_json::Error> {
        self.emit(&user, || match user {
            Some(u) => {
                let mut out = format!("{} <{}>", u.name, u.email);
                if let Some(city) = &u.city {
                    let _ = write!(out, ", {city}");
                }
                out
            }
            None => "Not signed in".to_string(),
        })
    }

    pub fn list(self, items: &[&str]) -> Result<(), serde_json::Error> {
        self.emit(items, || items.join("\n"))
    }
}

fn price_label(p: &Product) -> String {
    match p.old_price {
        Some(old) => format!(
            "{} (was {}, -{}%)",
            p.price.display(),
            old.display(),
            p.discount_percent()
        ),
        None => p.price.display(),
    }
}

fn product_row(p: &Product) -> String {
    format!("{:>4}  {}  {}", p.id, p.name, price_label(p))
}

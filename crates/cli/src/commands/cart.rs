//! Cart commands.

use clap::Subcommand;
use glassshop_core::ProductId;
use glassshop_storefront::AppError;

use super::{CliError, Context, require_product};

#[derive(Subcommand)]
pub enum CartAction {
    /// Show the priced cart
    Show,
    /// Add a product
    Add {
        id: ProductId,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product's line
    Remove { id: ProductId },
    /// Set a line's quantity; zero or less removes it
    Set {
        id: ProductId,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart and drop the applied promo code
    Clear,
}

impl CartAction {
    pub const fn mutates(&self) -> bool {
        !matches!(self, Self::Show)
    }
}

pub fn run(action: CartAction, ctx: &mut Context) -> Result<(), CliError> {
    match action {
        CartAction::Show => {}
        CartAction::Add { id, quantity } => {
            if quantity == 0 {
                return Err(AppError::BadRequest("quantity must be at least 1".to_string()).into());
            }
            require_product(&ctx.catalog, id)?;
            let target = i64::from(ctx.store.cart_item_quantity(id)) + i64::from(quantity);
            ctx.store.add_to_cart(id);
            if quantity > 1 {
                ctx.store.update_quantity(id, target);
            }
        }
        CartAction::Remove { id } => ctx.store.remove_from_cart(id),
        CartAction::Set { id, quantity } => {
            if quantity > 0 && ctx.store.cart_item_quantity(id) == 0 {
                tracing::warn!(product_id = %id, "Product is not in the cart");
            }
            ctx.store.update_quantity(id, quantity);
        }
        CartAction::Clear => ctx.store.clear_cart(),
    }

    let summary = ctx.store.cart_summary(&ctx.catalog);
    ctx.out.cart(&summary, ctx.store.applied_promo_code())?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use glassshop_storefront::config::StorefrontConfig;
    use tempfile::TempDir;

    use super::*;

    fn context(tmp: &TempDir) -> Context {
        let config = StorefrontConfig {
            data_dir: tmp.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        Context::open(&config, true)
    }

    #[test]
    fn test_add_with_quantity_accumulates() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = context(&tmp);
        let id = ctx.catalog.products().first().unwrap().id;

        run(CartAction::Add { id, quantity: 3 }, &mut ctx).unwrap();
        assert_eq!(ctx.store.cart_item_quantity(id), 3);

        run(CartAction::Add { id, quantity: 3 }, &mut ctx).unwrap();
        assert_eq!(ctx.store.cart_item_quantity(id), 6);

        run(CartAction::Add { id, quantity: 1 }, &mut ctx).unwrap();
        assert_eq!(ctx.store.cart_item_quantity(id), 7);
        assert_eq!(ctx.store.cart().len(), 1);
    }

    #[test]
    fn test_add_zero_quantity_rejected() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = context(&tmp);
        let id = ctx.catalog.products().first().unwrap().id;

        let err = run(CartAction::Add { id, quantity: 0 }, &mut ctx).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(ctx.store.cart().is_empty());
    }

    #[test]
    fn test_add_unknown_product_rejected() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = context(&tmp);

        let err = run(
            CartAction::Add {
                id: ProductId::new(10_000),
                quantity: 2,
            },
            &mut ctx,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(ctx.store.cart().is_empty());
    }
}

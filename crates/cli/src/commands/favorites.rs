//! Favorites commands.

use clap::Subcommand;
use glassshop_core::ProductId;

use super::{CliError, Context, require_product};

#[derive(Subcommand)]
pub enum FavoritesAction {
    /// Add or remove a favorite
    Toggle { id: ProductId },
    /// List favorites
    List,
    /// Remove all favorites
    Clear,
}

impl FavoritesAction {
    pub const fn mutates(&self) -> bool {
        !matches!(self, Self::List)
    }
}

pub fn run(action: FavoritesAction, ctx: &mut Context) -> Result<(), CliError> {
    match action {
        FavoritesAction::Toggle { id } => {
            let name = &require_product(&ctx.catalog, id)?.name;
            let message = if ctx.store.toggle_favorite(id) {
                format!("Added {name} to favorites")
            } else {
                format!("Removed {name} from favorites")
            };
            ctx.out.message(&message)?;
        }
        FavoritesAction::List => ctx.out.products(&ctx.store.favorite_products(&ctx.catalog))?,
        FavoritesAction::Clear => {
            ctx.store.clear_favorites();
            ctx.out.message("Favorites cleared")?;
        }
    }
    Ok(())
}

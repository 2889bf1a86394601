//! View history commands.

use clap::Subcommand;
use glassshop_core::ProductId;
use glassshop_storefront::store::VIEW_HISTORY_LIMIT;

use super::{CliError, Context, require_product};

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Record a product view
    View { id: ProductId },
    /// List viewed products, most recent first
    List,
    /// Forget all views
    Clear,
}

impl HistoryAction {
    pub const fn mutates(&self) -> bool {
        !matches!(self, Self::List)
    }
}

pub fn run(action: HistoryAction, ctx: &mut Context) -> Result<(), CliError> {
    match action {
        HistoryAction::View { id } => {
            require_product(&ctx.catalog, id)?;
            ctx.store.add_to_history(id);
            ctx.out
                .products(&ctx.store.recently_viewed(&ctx.catalog, None, VIEW_HISTORY_LIMIT))?;
        }
        HistoryAction::List => ctx
            .out
            .products(&ctx.store.recently_viewed(&ctx.catalog, None, VIEW_HISTORY_LIMIT))?,
        HistoryAction::Clear => {
            ctx.store.clear_history();
            ctx.out.message("History cleared")?;
        }
    }
    Ok(())
}

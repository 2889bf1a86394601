//! Catalog browsing commands.

use clap::Subcommand;
use glassshop_core::{CategoryId, ProductId};
use glassshop_storefront::catalog::{
    BrowseFilter, DEFAULT_RAIL_LIMIT, DEFAULT_SIMILAR_LIMIT, SortOption,
};
use glassshop_storefront::views::RECENTLY_VIEWED_LIMIT;

use super::{CliError, Context, require_product};
use crate::output::{HomePage, ProductPage};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List categories
    Categories,
    /// Popular and on-sale products
    Home,
    /// List products
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<CategoryId>,

        /// Only discounted products
        #[arg(long)]
        sale: bool,

        /// `popular`, `price_asc`, `price_desc` or `rating`
        #[arg(short, long, default_value = "popular")]
        sort: SortOption,
    },
    /// Show a product page and record the view
    Show { id: ProductId },
    /// Search names and descriptions
    Search {
        query: String,

        /// Only the first few hits
        #[arg(long)]
        preview: bool,
    },
}

impl CatalogAction {
    pub const fn mutates(&self) -> bool {
        matches!(self, Self::Show { .. })
    }
}

pub fn run(action: CatalogAction, ctx: &mut Context) -> Result<(), CliError> {
    match action {
        CatalogAction::Categories => ctx.out.categories(ctx.catalog.categories())?,
        CatalogAction::Home => ctx.out.home(&HomePage {
            popular: ctx.catalog.popular(DEFAULT_RAIL_LIMIT),
            on_sale: ctx.catalog.on_sale(DEFAULT_RAIL_LIMIT),
        })?,
        CatalogAction::List {
            category,
            sale,
            sort,
        } => {
            let filter = BrowseFilter {
                category,
                sale_only: sale,
                sort,
            };
            tracing::debug!(
                filters = filter.active_count(),
                sort = sort.as_str(),
                "Browsing catalog"
            );
            ctx.out.products(&ctx.catalog.browse(&filter))?;
        }
        CatalogAction::Show { id } => {
            let product = require_product(&ctx.catalog, id)?;
            ctx.store.add_to_history(id);
            ctx.out.product_page(&ProductPage {
                product,
                category: ctx.catalog.category_by_id(product.category_id),
                favorite: ctx.store.is_favorite(id),
                in_cart: ctx.store.cart_item_quantity(id),
                similar: ctx.catalog.similar(id, DEFAULT_SIMILAR_LIMIT),
                recently_viewed: ctx.store.recently_viewed(
                    &ctx.catalog,
                    Some(id),
                    RECENTLY_VIEWED_LIMIT,
                ),
            })?;
        }
        CatalogAction::Search { query, preview } => {
            let hits = if preview {
                ctx.catalog.search_preview(&query)
            } else {
                ctx.catalog.search(&query)
            };
            ctx.out.products(&hits)?;
        }
    }
    Ok(())
}

//! Command implementations.
//!
//! Each command restores the store from the configured data directory, runs
//! one action and, if the action changed durable state, flushes so storage
//! errors surface as a failed exit status.

mod account;
mod cart;
mod catalog;
mod favorites;
mod history;
mod promo;

use clap::Subcommand;
use glassshop_core::ProductId;
use glassshop_storefront::AppError;
use glassshop_storefront::auth::AuthError;
use glassshop_storefront::catalog::{Catalog, Product};
use glassshop_storefront::config::StorefrontConfig;
use glassshop_storefront::persistence::{FileSnapshotStore, PersistenceError};
use glassshop_storefront::store::Store;
use thiserror::Error;

use crate::output::Printer;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    App(#[from] AppError),

    /// JSON output could not be produced.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::App(e) => e.exit_code(),
            Self::Output(_) => 1,
        }
    }
}

impl From<AuthError> for CliError {
    fn from(e: AuthError) -> Self {
        Self::App(e.into())
    }
}

impl From<PersistenceError> for CliError {
    fn from(e: PersistenceError) -> Self {
        Self::App(e.into())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Browse the catalog
    Catalog {
        #[command(subcommand)]
        action: catalog::CatalogAction,
    },
    /// Show and edit the cart
    Cart {
        #[command(subcommand)]
        action: cart::CartAction,
    },
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: favorites::FavoritesAction,
    },
    /// Manage view history
    History {
        #[command(subcommand)]
        action: history::HistoryAction,
    },
    /// Apply or inspect the promo code
    Promo {
        #[command(subcommand)]
        action: promo::PromoAction,
    },
    /// Mock account management
    Account {
        #[command(subcommand)]
        action: account::AccountAction,
    },
    /// Wipe all saved state, including the used promo code
    Reset,
}

impl Command {
    /// Returns true if the command changes durable state.
    const fn mutates(&self) -> bool {
        match self {
            Self::Catalog { action } => action.mutates(),
            Self::Cart { action } => action.mutates(),
            Self::Favorites { action } => action.mutates(),
            Self::History { action } => action.mutates(),
            Self::Promo { action } => action.mutates(),
            Self::Account { action } => action.mutates(),
            // Reset clears storage itself; flushing would write the defaults back.
            Self::Reset => false,
        }
    }
}

/// Everything a command needs.
pub struct Context {
    pub catalog: Catalog,
    pub store: Store<FileSnapshotStore>,
    pub out: Printer,
}

impl Context {
    fn open(config: &StorefrontConfig, json: bool) -> Self {
        tracing::debug!(
            data_dir = %config.data_dir.display(),
            namespace = %config.storage_namespace,
            "Opening store"
        );
        Self {
            catalog: Catalog::generate(config.catalog_seed),
            store: Store::restore(
                FileSnapshotStore::new(&config.data_dir),
                config.storage_namespace.clone(),
            ),
            out: Printer::new(json),
        }
    }
}

/// Look up a product the user named, failing if it does not exist.
fn require_product(catalog: &Catalog, id: ProductId) -> Result<&Product, CliError> {
    catalog
        .product_by_id(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")).into())
}

/// Run one command against the configured store.
///
/// # Errors
///
/// Returns an error if the command's input is invalid, output fails, or a
/// mutating command could not save.
pub fn run(command: Command, config: &StorefrontConfig, json: bool) -> Result<(), CliError> {
    let mut ctx = Context::open(config, json);
    let mutates = command.mutates();

    match command {
        Command::Catalog { action } => catalog::run(action, &mut ctx)?,
        Command::Cart { action } => cart::run(action, &mut ctx)?,
        Command::Favorites { action } => favorites::run(action, &mut ctx)?,
        Command::History { action } => history::run(action, &mut ctx)?,
        Command::Promo { action } => promo::run(action, &mut ctx)?,
        Command::Account { action } => account::run(action, &mut ctx)?,
        Command::Reset => {
            ctx.store.reset()?;
            ctx.out.message("Store reset")?;
        }
    }

    if mutates {
        ctx.store.flush()?;
    }
    Ok(())
}

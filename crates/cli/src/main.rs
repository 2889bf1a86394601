//! GlassShop CLI - drive the storefront state store from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! glassshop catalog list --category 6 --sort price_asc
//! glassshop catalog search iphone
//!
//! # Fill the cart and redeem the promo code
//! glassshop cart add 51 --quantity 2
//! glassshop promo apply рыбка
//! glassshop cart show
//!
//! # Sign in
//! glassshop account login -e ivan@example.com -p secret1
//! ```
//!
//! # Commands
//!
//! - `catalog` - Categories, listings, product pages and search
//! - `cart` - Show and edit the cart
//! - `favorites` - Toggle and list favorites
//! - `history` - Record and list viewed products
//! - `promo` - Apply, clear and inspect the promo code
//! - `account` - Mock sign-in, registration and profile
//! - `reset` - Wipe all saved state
//!
//! State is saved under `GLASSSHOP_DATA_DIR` and restored on every run.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::Parser;
use glassshop_storefront::AppError;
use glassshop_storefront::config::{LogFormat, StorefrontConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "glassshop")]
#[command(author, version, about = "GlassShop storefront CLI")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Override `GLASSSHOP_DATA_DIR`
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Command,
}

fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "glassshop_storefront=info,glassshop_cli=info".into());

    // Logs go to stderr so stdout stays parseable.
    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();

    let mut config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(AppError::from(e).exit_code());
        }
    };
    init_tracing(config.log_format);

    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    if let Err(e) = commands::run(cli.command, &config, cli.json) {
        tracing::error!("Command failed: {e}");
        std::process::exit(e.exit_code());
    }
}

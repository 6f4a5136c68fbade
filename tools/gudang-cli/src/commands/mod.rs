//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod product;

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use gudang_commerce::prelude::Currency;
use gudang_core::SiteConfig;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Search term matched against name, description, brand and category.
    #[arg(short, long)]
    pub q: Option<String>,

    /// Sort order: name-asc, name-desc, price-asc or price-desc.
    #[arg(short, long)]
    pub sort: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product document id.
    pub id: String,

    /// Variant value to select.
    #[arg(long)]
    pub varian: Option<String>,

    /// Choose an in-stock variant interactively.
    #[arg(long, conflicts_with = "varian")]
    pub pick: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the resolved configuration.
    Show,
    /// Write a default gudang.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

/// Currency configured for price display.
fn currency(config: &SiteConfig) -> Result<Currency> {
    Currency::from_code(&config.store.currency)
        .ok_or_else(|| anyhow!("Unknown currency in config: {}", config.store.currency))
}

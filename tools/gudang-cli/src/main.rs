//! Gudang CLI - inspect the storefront catalog from a terminal.
//!
//! Commands:
//! - `gudang catalog` - search and sort the catalog
//! - `gudang product` - show one product, its variants and WhatsApp link
//! - `gudang config` - show or create the site configuration

mod commands;
mod context;
mod output;
mod transport;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, ProductArgs};

/// Gudang CLI - browse the Gudang Pakaian Dalam catalog
#[derive(Parser)]
#[command(name = "gudang")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Read data from a JSON export instead of Firestore
    #[arg(long, global = true)]
    snapshot: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and sort the product catalog
    Catalog(CatalogArgs),

    /// Show a product with its variant selection and contact link
    Product(ProductArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = context::Context::load(cli.config.as_deref(), cli.snapshot, output)?;

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

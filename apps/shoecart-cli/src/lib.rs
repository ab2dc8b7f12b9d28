//! # ShoeCart CLI Library
//!
//! Owns the [`CartStore`] for one invocation: builds it from configuration,
//! runs a single cart command, prints any notices and the resulting cart.
//!
//! ## Module Organization
//! ```text
//! shoecart_cli/
//! ├── lib.rs          ◄─── You are here (argument model, wiring, run)
//! ├── commands.rs     ◄─── Subcommands and the printed cart view
//! └── error.rs        ◄─── Startup errors
//! ```
//!
//! ## Catalog Selection
//! ```text
//! --catalog-file db.json given ──► FixtureCatalog (offline)
//! otherwise                    ──► HttpCatalog at config.api_url
//! ```

pub mod commands;
pub mod error;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use shoecart_store::{
    Catalog, CartStore, ChannelNotifier, FixtureCatalog, HttpCatalog, StoreConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use commands::{CartView, Command};
pub use error::CliError;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "shoecart")]
#[command(author, version, about = "Shopping cart with stock checks and local persistence")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Serve lookups from a `{ "products", "stock" }` JSON file instead of the API
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Print the cart as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Runs one CLI invocation.
///
/// ## Output
/// - stdout: the cart after the command
/// - stderr: one line per notice, plus logs
pub async fn run(cli: Cli) -> Result<(), CliError> {
    init_tracing();

    let config = StoreConfig::load(cli.config.clone())?;
    let catalog = build_catalog(&cli, &config)?;

    let (notifier, mut notices) = ChannelNotifier::new();
    let store = CartStore::open(&config, catalog, Arc::new(notifier))?;

    commands::execute(&store, cli.command.clone()).await;

    while let Ok(message) = notices.try_recv() {
        eprintln!("! {}", message);
    }

    let view = CartView::from(&store.snapshot());
    if cli.json {
        println!("{}", view.to_json()?);
    } else {
        println!("{}", view.render());
    }

    Ok(())
}

/// Picks the catalog backend for this run.
fn build_catalog(cli: &Cli, config: &StoreConfig) -> Result<Arc<dyn Catalog>, CliError> {
    if let Some(path) = &cli.catalog_file {
        let catalog = FixtureCatalog::from_path(path)?;
        info!(?path, products = catalog.product_count(), "Using fixture catalog");
        return Ok(Arc::new(catalog));
    }

    info!(api_url = %config.api_url, "Using HTTP catalog");
    Ok(Arc::new(HttpCatalog::new(
        &config.api_url,
        config.request_timeout(),
    )?))
}

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn,shoecart_store=info";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shoecart_store=trace` - Trace the store only
/// - Default: warnings, plus store commits at INFO
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Logs go to stderr so `--json` output stays clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::CheckoutArgs;

#[derive(Debug, Parser)]
#[command(name = "shopfront")]
#[command(about = "Storefront frontend service command line interface")]
struct Cli {
    /// Frontend service address (overrides SHOPFRONT_FRONTEND_URL)
    #[arg(long, global = true)]
    frontend_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List all quotes
    Quotes,
    /// Fetch the home page payload
    Home {
        /// Print the page's ad as HTML instead of the JSON payload
        #[arg(long)]
        ad_html: bool,
    },
    /// Fetch a single product
    Product {
        /// Product id
        id: String,
    },
    /// Add a product to the cart
    AddToCart {
        /// Product id
        product_id: String,

        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Fetch the cart page
    Cart,
    /// Place an order for the current cart
    Checkout(CheckoutArgs),
    /// Fetch storefront metadata
    Metadata,
    /// Remove every item from the cart
    EmptyCart,
    /// Render an ad banner as HTML
    Ad {
        #[arg(long)]
        redirect_url: Option<String>,

        #[arg(long)]
        text: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Loads `.env` before reading the environment.
    let mut config = shopfront_core::load_app_config()?;
    if let Some(url) = cli.frontend_url {
        config.frontend_url = url;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    commands::run(cli.command, &config).await
}

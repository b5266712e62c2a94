//! Subcommand handlers. Each client call prints its result as pretty JSON on
//! stdout; logs go to stderr.

use clap::Args;
use serde::Serialize;
use serde_json::Value;
use shopfront_client::{AddToCartRequest, CheckoutRequest, FrontendClient};
use shopfront_core::AppConfig;
use shopfront_ui::{render_ad, AdProps};

use crate::Commands;

/// Shipping and payment details for `checkout`.
#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long)]
    pub(crate) street_address: String,
    #[arg(long)]
    pub(crate) zip_code: String,
    #[arg(long)]
    pub(crate) city: String,
    #[arg(long)]
    pub(crate) state: String,
    #[arg(long)]
    pub(crate) country: String,
    #[arg(long)]
    pub(crate) credit_card_number: String,
    #[arg(long)]
    pub(crate) credit_card_expiration_month: u32,
    #[arg(long)]
    pub(crate) credit_card_expiration_year: u32,
    #[arg(long)]
    pub(crate) credit_card_cvv: String,
}

impl From<CheckoutArgs> for CheckoutRequest {
    fn from(args: CheckoutArgs) -> Self {
        Self {
            email: args.email,
            street_address: args.street_address,
            zip_code: args.zip_code,
            city: args.city,
            state: args.state,
            country: args.country,
            credit_card_number: args.credit_card_number,
            credit_card_expiration_month: args.credit_card_expiration_month,
            credit_card_expiration_year: args.credit_card_expiration_year,
            credit_card_cvv: args.credit_card_cvv,
        }
    }
}

pub(crate) async fn run(command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    let client = || FrontendClient::from_app_config(config);

    match command {
        Commands::Quotes => print_json(&client()?.list_quotes().await?),
        Commands::Home { ad_html } => {
            let page: Value = client()?.home_page().await?;
            if ad_html {
                println!("{}", ad_from_page(&page)?);
                Ok(())
            } else {
                print_json(&page)
            }
        }
        Commands::Product { id } => print_json(&client()?.single_product::<Value>(&id).await?),
        Commands::AddToCart {
            product_id,
            quantity,
        } => {
            let request = AddToCartRequest {
                product_id,
                quantity,
            };
            print_json(&client()?.add_product_to_cart(&request).await?)
        }
        Commands::Cart => print_json(&client()?.cart_page::<Value>().await?),
        Commands::Checkout(args) => {
            let request = CheckoutRequest::from(args);
            print_json(&client()?.checkout::<_, Value>(&request).await?)
        }
        Commands::Metadata => print_json(&client()?.metadata::<Value>().await?),
        Commands::EmptyCart => print_json(&client()?.empty_cart::<Value>().await?),
        Commands::Ad { redirect_url, text } => {
            println!("{}", render_ad(&AdProps { redirect_url, text }));
            Ok(())
        }
    }
}

/// Renders the `ad` object of a home page payload.
fn ad_from_page(page: &Value) -> anyhow::Result<String> {
    let ad = page
        .get("ad")
        .filter(|ad| !ad.is_null())
        .ok_or_else(|| anyhow::anyhow!("home page payload has no ad"))?;
    let props: AdProps = serde_json::from_value(ad.clone())?;
    Ok(render_ad(&props))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

use std::io::Read;

use anyhow::{Context, Result};
use beresin::{
    config::Settings,
    handlers::{
        order_preview::handle_order_preview, order_submit::handle_order_submit,
        order_verify::handle_order_verify,
    },
    models::shop::default_categories,
    utils::pages::estimate_page_count,
};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut data = String::new();
        std::io::stdin()
            .read_to_string(&mut data)
            .context("Failed to read stdin")?;
        Ok(data)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))
    }
}

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(
        long,
        help = "(Optional) Sets the settings file path, defaults to config.toml",
        required = false
    )]
    pub settings: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Prints the price breakdown of a service detail JSON document.
    Quote {
        #[arg(long, help = "Shop base price per page, in rupiah.")]
        base_price: u64,

        #[arg(help = "Service detail JSON file, or - for stdin.")]
        input: String,
    },

    /// Builds the order creation body with the frozen total price.
    Order {
        #[arg(help = "Order submission JSON file, or - for stdin.")]
        input: String,
    },

    /// Recomputes the total of an order creation body.
    Verify {
        #[arg(long, help = "Shop base price per page, in rupiah.")]
        base_price: u64,

        #[arg(help = "Order creation JSON file, or - for stdin.")]
        input: String,
    },

    /// Lists the system service categories.
    Categories,

    /// Estimates the page count of a document.
    Pages {
        #[arg(long, help = "MIME type of the document.")]
        mime_type: String,

        #[arg(long, help = "Document size in bytes.")]
        size: u64,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let settings = Settings::load(&args.settings)?;

    info!("Starting with {} tariff", settings.marketplace);

    match args.command {
        Command::Quote { base_price, input } => {
            let data = read_input(&input)?;
            let breakdown = handle_order_preview(&settings.pricing, base_price, &data)?;
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        Command::Order { input } => {
            let data = read_input(&input)?;
            let now = Local::now().naive_local();
            let request = handle_order_submit(&settings.pricing, now, &data)?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Command::Verify { base_price, input } => {
            let data = read_input(&input)?;
            let breakdown = handle_order_verify(&settings.pricing, base_price, &data)?;
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        Command::Categories => {
            println!("{}", serde_json::to_string_pretty(&default_categories())?);
        }
        Command::Pages { mime_type, size } => {
            println!("{}", estimate_page_count(&mime_type, size));
        }
    }

    Ok(())
}

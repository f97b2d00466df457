//! Offline Methods CLI
//!
//! Command-line interface for the offline payment methods API, plus a local
//! preview of the filter pipeline over a catalog snapshot.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use offline_methods_client::OfflineMethodsClient;
use offline_methods_repo::SnapshotCatalog;
use offline_methods_types::{
    ExclusionList, FilterPolicy, PaymentMethodCatalog, PaymentMethodFilterPipeline, StoreId,
};

#[derive(Parser)]
#[command(name = "offline-methods")]
#[command(author, version, about = "Offline payment methods CLI", long_about = None)]
struct Cli {
    /// Base URL of the offline methods API
    #[arg(
        long,
        env = "OFFLINE_METHODS_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the checkout configuration of a store
    Config {
        /// Store view ID
        store: String,
    },
    /// Fetch the offline options offered to shoppers of a store
    Options {
        /// Store view ID
        store: String,
    },
    /// Run the filter pipeline locally over a catalog snapshot
    Preview {
        /// Catalog snapshot file (JSON)
        #[arg(long)]
        catalog: PathBuf,
        /// Store view ID used to pick the snapshot envelope
        #[arg(long, default_value = "1")]
        store: String,
        /// Comma-separated option values to exclude
        #[arg(long)]
        exclude: Option<String>,
        /// Allowed payment types (comma-separated)
        #[arg(long, value_delimiter = ',', default_value = "ticket,atm")]
        payment_types: Vec<String>,
    },
    /// Check API health
    Health,
}

fn parse_store_id(s: &str) -> Result<StoreId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid store ID: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = OfflineMethodsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Config { store } => {
            let store = parse_store_id(&store)?;
            let config = client.checkout_config(store).await?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }

        Commands::Options { store } => {
            let store = parse_store_id(&store)?;
            let options = client.payment_methods_off(store).await?;
            println!("{}", serde_json::to_string_pretty(&options)?);
        }

        Commands::Preview {
            catalog,
            store,
            exclude,
            payment_types,
        } => {
            let store = parse_store_id(&store)?;
            let snapshot = SnapshotCatalog::from_file(&catalog).await?;

            let methods = match snapshot.payment_methods(store).await {
                Ok(methods) => methods,
                Err(e) => {
                    eprintln!("⚠ {}; previewing an empty catalog", e);
                    Vec::new()
                }
            };

            let pipeline = PaymentMethodFilterPipeline::new(
                FilterPolicy::default().with_payment_types(payment_types),
            );
            let options = pipeline.run(methods, &ExclusionList::parse(exclude.as_deref()));
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
    }

    Ok(())
}

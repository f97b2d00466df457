//! Client example fetching checkout configurations from a local server.
//!
//! Run with: cargo run -p offline-methods-app --example client_example

use offline_methods_client::OfflineMethodsClient;
use offline_methods_hex::{OfflineMethodsService, inbound::HttpServer};
use offline_methods_repo::build_adapters;
use offline_methods_types::StoreId;
use offline_methods_types::domain::policy::METHOD_CODE;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    let fixtures = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");
    let adapters = build_adapters(
        &format!("{fixtures}/settings.toml"),
        &format!("{fixtures}/catalog.json"),
        Some("https://static.example.com/static/frontend".to_string()),
    )
    .await?;

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    println!("🚀 Starting server on {addr}...");

    let service = OfflineMethodsService::new(adapters.settings, adapters.catalog, adapters.assets);
    let router = HttpServer::new(service).router();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("server error: {e}");
        }
    });

    let client = OfflineMethodsClient::new(format!("http://{addr}"));
    println!("Health: {}", client.health().await?);

    for store in [1, 2, 3, 4] {
        let config = client.checkout_config(StoreId::new(store)).await?;
        match config.method(METHOD_CODE) {
            Some(family) => {
                println!("\nStore {store}: {}", family.title);
                for option in &family.payment_methods_off_active {
                    println!("  - {} ({})", option.label, option.value);
                }
                if family.payment_methods_off_active.is_empty() {
                    println!("  (no offline options)");
                }
            }
            None => println!("\nStore {store}: offline methods inactive"),
        }
    }

    Ok(())
}

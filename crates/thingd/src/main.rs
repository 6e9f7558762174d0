//! thingd
//!
//! A REST entity/relationship server managing projects, todos and
//! categories over an in-memory store.

use std::sync::Arc;

use clap::Parser;
use thingd_rest::{ServerConfig, create_app_with_config, init_logging};
use thingd_store::ThingStore;
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        seed = !config.no_seed,
        "Starting thingd"
    );

    let store = Arc::new(ThingStore::new());
    if !config.no_seed {
        store
            .seed_demo_data()
            .map_err(|e| anyhow::anyhow!("Failed to seed demo data: {}", e))?;
        info!("Seeded demo fixture");
    }

    let app = create_app_with_config(Arc::clone(&store), config.clone());
    serve(app, &config).await
}

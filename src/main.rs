//! Fudget budget server.
//!
//! Configuration is read from the directory named by `FUDGET_CONFIG_DIR`;
//! without it the built-in configuration is used. Log verbosity follows
//! `RUST_LOG`.

use std::env;
use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fudget::api::{AppState, create_router};
use fudget::config::ConfigLoader;
use fudget::storage::JsonFileStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match env::var("FUDGET_CONFIG_DIR") {
        Ok(dir) => ConfigLoader::load(&dir)?,
        Err(_) => ConfigLoader::builtin(),
    };

    let store = JsonFileStore::from_config(config.storage());
    let bind_address = config.server().bind_address.clone();

    info!(
        tax_schedule = config.tax_schedule().name(),
        store = %store.path().display(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config, store));
    let listener = TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}

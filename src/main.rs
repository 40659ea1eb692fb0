// src/main.rs
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use housing_assistant::{
    config::Config,
    routes,
    services::{completion::GeminiClient, listing_store::ListingStore},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    // Both of these are fatal: the service is useless without a key or data.
    let config = Config::from_env().context("invalid configuration")?;
    let listings = ListingStore::load(&config.listings_path)
        .context("could not load housing listings")?;

    let client = GeminiClient::from_config(&config);
    info!(model = %client.model(), listings = listings.len(), "completion client ready");

    let state = Arc::new(AppState::new(listings, Arc::new(client)));
    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "housing assistant listening");
    axum::serve(listener, app).await?;
    Ok(())
}

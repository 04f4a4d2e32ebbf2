use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod cookies;
mod error;
mod guard;
mod handlers;
mod routes;
mod state;
mod views;

use crate::{config::WebConfig, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting web service");

    let config = WebConfig::from_env();
    if config.tmdb_api_key.is_empty() {
        warn!("FRAMEHUB_TMDB_API_KEY is not set; catalog rails will render empty");
    }

    let bind_addr = config.bind_addr.clone();
    let app_state = AppState::new(config);

    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Web service listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

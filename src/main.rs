use std::sync::Arc;

mod analysis;
mod auth;
mod config;
mod db;
mod dto;
mod error;
mod handlers;
mod models;
mod routes;

use analysis::{PolarityScorer, VaderScorer};
use config::Config;
use db::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Arc<Config>,
    pub scorer: Arc<dyn PolarityScorer>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diary_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env()?);

    let store = Store::connect(&config.storage).await?;

    let state = AppState {
        store,
        config: config.clone(),
        scorer: Arc::new(VaderScorer),
    };

    let app = routes::build_router(state);

    let addr = config.listen_addr();
    tracing::info!(require_auth = config.require_auth, "Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

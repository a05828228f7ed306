use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use nightowl_api::{
    api::{create_router, AppState},
    config::Config,
    store::{seed, MemoryStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = if config.seed_demo_data {
        tracing::info!("seeding demo venue catalog");
        MemoryStore::with_venues(seed::demo_venues())
    } else {
        MemoryStore::new()
    };

    let state = AppState::new(Arc::new(store));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

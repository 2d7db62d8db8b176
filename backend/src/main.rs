use std::net::SocketAddr;

use expense_tracker_backend::{config::Config, create_router, initialize_backend};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let app_state = initialize_backend(&config).await?;
    let app = create_router(app_state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Serving frontend from {}", config.static_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

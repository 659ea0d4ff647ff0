use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use oversight::config::{Cli, Config};
use oversight::routes;
use oversight::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI args and load config
    let cli = Cli::parse();
    let config = Config::load(&cli)?;
    tracing::info!(
        "Feed load delay {}ms, toast duration {}ms",
        config.feed.load_delay_ms,
        config.toast.duration_ms
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = routes::app(AppState::new(config));

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

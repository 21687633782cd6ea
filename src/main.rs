mod api;
mod composer;
mod config;
mod ratings;

use crate::api::AppState;
use crate::config::AppConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("🚀 Starting Reviews Service");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Ratings enabled: {}", config.ratings.enabled);
    info!("   - Star color: {}", config.reviews.star_color);
    info!("   - Server: {}", config.server.bind_address());

    let state = AppState::new(&config)?;
    match &state.ratings {
        Some(client) => info!("⭐ Ratings service at {}", client.base_url()),
        None => info!("⭐ Ratings integration disabled"),
    }

    let app = api::router(state);

    // Start server
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Start listening http port {} ...", config.server.port);
    info!("📡 Available endpoints:");
    info!("   GET  /health                - Health check");
    info!("   GET  /reviews/{{productId}}   - Reviews with ratings");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM from the orchestrator. If a
/// handler cannot be installed that source is ignored rather than aborting.
async fn shutdown_signal() {
    use tokio::signal;

    let interrupt = async {
        match signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(err) => {
                warn!(error = %err, "Ctrl+C handler unavailable");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                "SIGTERM"
            }
            Err(err) => {
                warn!(error = %err, "SIGTERM handler unavailable");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&str>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };

    info!(signal = received, "🛑 Draining in-flight review requests");
}

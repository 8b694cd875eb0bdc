use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use streakcard_domain::SystemClock;
use streakcard_infrastructure::config::AppConfig;
use streakcard_infrastructure::http::HttpClient;
use streakcard_infrastructure::logging::init_logger;
use streakcard_infrastructure::sources::create_sources;

use super::routes::build_router;
use super::state::AppState;
use crate::application::services::StreakService;

/// Wire the HTTP client, activity sources and clock into handler state
pub fn build_app_state(config: &AppConfig) -> Result<AppState> {
    let http = HttpClient::new(&config.timeouts)?;
    let sources = create_sources(&http, &config.endpoints)?;

    let mut registered: Vec<&str> = sources.keys().map(|platform| platform.id()).collect();
    registered.sort_unstable();
    info!(
        sources = ?registered,
        timeout_secs = config.timeouts.http_request.as_secs(),
        "Activity sources registered"
    );

    Ok(AppState::new(StreakService::new(
        sources,
        Arc::new(SystemClock),
    )))
}

pub async fn run() -> Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    if let Err(e) = init_logger(config.log_dir.as_deref()) {
        eprintln!("⚠️  Failed to initialize logging: {}", e);
        eprintln!("   Falling back to console logging only");

        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true)
            .try_init();
    }

    let state = build_app_state(&config)?;
    let app = build_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("🚀 streakcard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("streakcard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

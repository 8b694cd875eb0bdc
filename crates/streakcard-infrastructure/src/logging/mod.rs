//! Logging setup
//!
//! - Human-readable stdout output, always on
//! - One-line JSON file output with daily rotation, when a log directory is configured
//!
//! Both layers honour `RUST_LOG`; otherwise they fall back to per-profile defaults.

use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

pub const LOG_FILE_PREFIX: &str = "streakcard.log";

// The app crate's library target is `streakcard_lib`
const DEBUG_FILTER: &str =
    "info,streakcard_lib=debug,streakcard_infrastructure=debug,tower_http=debug";
const RELEASE_FILTER: &str = "info,tower_http=info";

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logger(log_dir: Option<&Path>) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_ansi(cfg!(debug_assertions))
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%dT%H:%M:%S%.3fZ".to_string(),
        ))
        .with_filter(default_filter());

    let json_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;

            let file_appender = rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = FILE_GUARD.set(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(true)
                    .with_timer(fmt::time::ChronoUtc::new(
                        "%Y-%m-%dT%H:%M:%S%.3fZ".to_string(),
                    ))
                    .with_filter(default_filter()),
            )
        }
        None => None,
    };

    let subscriber = Registry::default().with(stdout_layer).with(json_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        target: "streakcard::logging",
        log_dir = ?log_dir.map(|dir| dir.display().to_string()),
        version = env!("CARGO_PKG_VERSION"),
        profile = if cfg!(debug_assertions) { "Debug" } else { "Release" },
        "Logger initialized"
    );

    Ok(())
}

fn default_filter() -> EnvFilter {
    let default_level = if cfg!(debug_assertions) {
        DEBUG_FILTER
    } else {
        RELEASE_FILTER
    };

    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

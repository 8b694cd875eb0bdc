mod app_config;
mod timeouts;

pub use app_config::{AppConfig, ConfigError, UpstreamEndpoints};
pub use timeouts::TimeoutConfig;

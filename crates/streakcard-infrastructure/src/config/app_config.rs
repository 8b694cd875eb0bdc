use std::env;
use std::path::PathBuf;

use super::TimeoutConfig;

/// Base URLs of the upstream providers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamEndpoints {
    /// streak-stats JSON API for GitHub
    pub github_streak_api: String,
    /// LeetCode GraphQL endpoint
    pub leetcode_graphql: String,
    /// Community LeetCode REST API, used when GraphQL fails
    pub leetcode_calendar_api: String,
    /// GFG stats card (SVG) service
    pub gfg_stats: String,
}

impl Default for UpstreamEndpoints {
    fn default() -> Self {
        Self {
            github_streak_api: "https://streak-stats.demolab.com".to_string(),
            leetcode_graphql: "https://leetcode.com/graphql".to_string(),
            leetcode_calendar_api: "https://alfa-leetcode-api.onrender.com".to_string(),
            gfg_stats: "https://gfgstatscard.vercel.app".to_string(),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory for rolling JSON logs; stdout only when unset
    pub log_dir: Option<PathBuf>,
    pub timeouts: TimeoutConfig,
    pub endpoints: UpstreamEndpoints,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_dir: None,
            timeouts: TimeoutConfig::default(),
            endpoints: UpstreamEndpoints::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = value("STREAKCARD_HOST").unwrap_or(defaults.host);

        let port = match value("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT"))?,
            None => defaults.port,
        };

        let log_dir = value("STREAKCARD_LOG_DIR").map(PathBuf::from);

        let timeouts = match value("STREAKCARD_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("STREAKCARD_HTTP_TIMEOUT_SECS"))?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue("STREAKCARD_HTTP_TIMEOUT_SECS"));
                }
                TimeoutConfig::with_request_secs(secs)
            }
            None => defaults.timeouts,
        };

        let endpoints = UpstreamEndpoints {
            github_streak_api: value("GITHUB_STREAK_API_URL")
                .unwrap_or(defaults.endpoints.github_streak_api),
            leetcode_graphql: value("LEETCODE_GRAPHQL_URL")
                .unwrap_or(defaults.endpoints.leetcode_graphql),
            leetcode_calendar_api: value("LEETCODE_CALENDAR_API_URL")
                .unwrap_or(defaults.endpoints.leetcode_calendar_api),
            gfg_stats: value("GFG_STATS_URL").unwrap_or(defaults.endpoints.gfg_stats),
        };

        Ok(Self {
            host,
            port,
            log_dir,
            timeouts,
            endpoints,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert!(config.log_dir.is_none());
        assert_eq!(config.timeouts, TimeoutConfig::default());
        assert_eq!(config.endpoints, UpstreamEndpoints::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("STREAKCARD_HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("STREAKCARD_LOG_DIR", "/var/log/streakcard"),
            ("STREAKCARD_HTTP_TIMEOUT_SECS", "3"),
            ("LEETCODE_GRAPHQL_URL", "http://localhost:9000/graphql"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/streakcard")));
        assert_eq!(config.timeouts.http_request, Duration::from_secs(3));
        assert_eq!(config.endpoints.leetcode_graphql, "http://localhost:9000/graphql");
        assert_eq!(
            config.endpoints.github_streak_api,
            "https://streak-stats.demolab.com"
        );
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_invalid_port() {
        let result = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue("PORT"))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("STREAKCARD_HTTP_TIMEOUT_SECS", "0")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue("STREAKCARD_HTTP_TIMEOUT_SECS"))
        ));
    }
}

use serde::{Deserialize, Serialize};

/// Where a streak figure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Retrieved from an upstream platform (possibly degraded to 0)
    Api,
    /// No retrieval adapter exists for the platform
    Manual,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Api => "api",
            DataSource::Manual => "manual",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResult {
    pub platform: String,
    pub username: String,
    pub streak_days: u32,
    pub source: DataSource,
}

impl StreakResult {
    pub fn new(
        platform: impl Into<String>,
        username: impl Into<String>,
        streak_days: u32,
        source: DataSource,
    ) -> Self {
        Self {
            platform: platform.into(),
            username: username.into(),
            streak_days,
            source,
        }
    }

    /// Zero streak for a platform without a retrieval adapter
    pub fn manual(platform: impl Into<String>, username: impl Into<String>) -> Self {
        Self::new(platform, username, 0, DataSource::Manual)
    }
}

use serde::{Deserialize, Serialize};

use streakcard_domain::{DataSource, StreakStats};

use crate::application::services::StreakReport;

/// Body of `/api/fetch-streak`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakDto {
    pub platform: String,
    pub username: String,
    pub streak: u32,
    pub source: DataSource,
    pub url: String,
}

impl From<StreakReport> for StreakDto {
    fn from(report: StreakReport) -> Self {
        Self {
            platform: report.result.platform,
            username: report.result.username,
            streak: report.result.streak_days,
            source: report.result.source,
            url: report.url,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreakQuery {
    pub platform: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakStatsDto {
    pub platform: String,
    pub username: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub active_days: u32,
    pub last_active_date: Option<String>, // YYYY-MM-DD
}

impl StreakStatsDto {
    pub fn new(platform: impl Into<String>, username: impl Into<String>, stats: StreakStats) -> Self {
        Self {
            platform: platform.into(),
            username: username.into(),
            current_streak: stats.current_streak,
            longest_streak: stats.longest_streak,
            active_days: stats.active_days,
            last_active_date: stats
                .last_active_date
                .map(|date| date.format("%Y-%m-%d").to_string()),
        }
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use streakcard_domain::platform::{display_name, profile_url};
use streakcard_domain::{
    compute_streak, normalize, summarize, ActivitySource, Clock, DataSource, Platform,
    RawActivityRecord, Retrieval, StreakResult, StreakStats,
};

/// A streak result together with what is needed to present it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakReport {
    pub result: StreakResult,
    pub display_name: String,
    pub url: String,
}

impl StreakReport {
    pub fn new(result: StreakResult) -> Self {
        Self {
            display_name: display_name(&result.platform),
            url: profile_url(&result.platform, &result.username),
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakRequest {
    pub platform: String,
    pub username: String,
}

impl StreakRequest {
    pub fn new(platform: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            username: username.into(),
        }
    }
}

/// Streak application service
/// Dispatches a platform id to its activity source and evaluates the result
pub struct StreakService {
    sources: HashMap<Platform, Arc<dyn ActivitySource>>,
    clock: Arc<dyn Clock>,
}

impl StreakService {
    pub fn new(sources: HashMap<Platform, Arc<dyn ActivitySource>>, clock: Arc<dyn Clock>) -> Self {
        Self { sources, clock }
    }

    fn resolve(&self, platform_id: &str) -> Option<(Platform, &Arc<dyn ActivitySource>)> {
        let platform = Platform::from_id(platform_id)?;
        if platform.retrieval() == Retrieval::Manual {
            return None;
        }
        self.sources.get(&platform).map(|source| (platform, source))
    }

    /// Current streak for one user. Never fails: upstream problems degrade to 0.
    pub async fn fetch_streak(&self, platform_id: &str, username: &str) -> StreakReport {
        let Some((platform, source)) = self.resolve(platform_id) else {
            debug!(platform = platform_id, username, "No activity source, reporting manual streak");
            return StreakReport::new(StreakResult::manual(platform_id, username));
        };

        let streak_days = match source.fetch(username).await {
            Ok(record) => compute_streak(&record, self.clock.now()),
            Err(e) => {
                warn!(
                    platform = %platform,
                    username,
                    source = source.name(),
                    error = %e,
                    code = e.code().code(),
                    "Streak retrieval failed, reporting 0"
                );
                0
            }
        };

        info!(platform = %platform, username, streak_days, "Streak computed");
        StreakReport::new(StreakResult::new(
            platform_id,
            username,
            streak_days,
            DataSource::Api,
        ))
    }

    /// Fetch several streaks concurrently. Output order follows `requests`.
    pub async fn fetch_all(&self, requests: &[StreakRequest]) -> Vec<StreakReport> {
        join_all(
            requests
                .iter()
                .map(|request| self.fetch_streak(&request.platform, &request.username)),
        )
        .await
    }

    /// Calendar statistics; `None` unless the platform exposes per-day activity
    pub async fn summarize(&self, platform_id: &str, username: &str) -> Option<StreakStats> {
        let (platform, source) = self.resolve(platform_id)?;
        if platform.retrieval() != Retrieval::Calendar {
            return None;
        }

        match source.fetch(username).await {
            Ok(RawActivityRecord::Calendar(calendar)) => {
                let now = self.clock.now();
                Some(summarize(&normalize(&calendar, now), now))
            }
            Ok(RawActivityRecord::Streak(_)) => None,
            Err(e) => {
                warn!(
                    platform = %platform,
                    username,
                    source = source.name(),
                    error = %e,
                    "Calendar retrieval failed, no statistics"
                );
                None
            }
        }
    }
}

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use streakcard_domain::{ActivitySource, DomainError, RawActivityRecord};

use crate::http::HttpClient;

const PROVIDER: &str = "github-streak-stats";

/// GitHub streak from the streak-stats JSON API (final count, computed upstream)
pub struct GitHubStreakSource {
    http: HttpClient,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StreakStatsResponse {
    current_streak: Option<StreakRun>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreakRun {
    length: Option<u64>,
}

impl GitHubStreakSource {
    pub fn new(http: HttpClient, base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            http,
            base_url: super::parse_base_url(base_url, "GitHub streak stats")?,
        })
    }

    fn request_url(&self, username: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("user", username)
            .append_pair("type", "json");
        url
    }
}

#[async_trait]
impl ActivitySource for GitHubStreakSource {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch(&self, username: &str) -> Result<RawActivityRecord, DomainError> {
        let url = self.request_url(username);
        debug!(provider = PROVIDER, username, "Fetching GitHub streak");

        let body = self
            .http
            .send_for_text(self.http.get(url.as_str()), PROVIDER)
            .await?;

        parse_current_streak(&body).map(RawActivityRecord::Streak)
    }
}

/// Read `currentStreak.length`; absent means 0
pub(crate) fn parse_current_streak(body: &str) -> Result<u32, DomainError> {
    let response: StreakStatsResponse = serde_json::from_str(body).map_err(|e| {
        DomainError::MalformedCalendar(format!("{}: invalid JSON: {}", PROVIDER, e))
    })?;

    if let Some(message) = response.error {
        return Err(DomainError::UpstreamUnavailable(format!(
            "{}: {}",
            PROVIDER, message
        )));
    }

    let length = response
        .current_streak
        .and_then(|run| run.length)
        .unwrap_or(0);

    u32::try_from(length).map_err(|_| {
        DomainError::MalformedCalendar(format!("{}: streak length {} out of range", PROVIDER, length))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeoutConfig;

    #[test]
    fn test_parse_current_streak() {
        let body = r#"{"totalContributions":812,"currentStreak":{"start":"2024-03-01","end":"2024-03-07","length":7},"longestStreak":{"length":40}}"#;
        assert_eq!(parse_current_streak(body).unwrap(), 7);
    }

    #[test]
    fn test_missing_current_streak_is_zero() {
        assert_eq!(parse_current_streak(r#"{"totalContributions":0}"#).unwrap(), 0);
        assert_eq!(parse_current_streak(r#"{"currentStreak":{}}"#).unwrap(), 0);
    }

    #[test]
    fn test_upstream_error_payload() {
        let err = parse_current_streak(r#"{"error":"Could not find a user with that name."}"#)
            .unwrap_err();
        assert!(matches!(err, DomainError::UpstreamUnavailable(_)));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_current_streak("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, DomainError::MalformedCalendar(_)));
    }

    #[test]
    fn test_request_url_encodes_username() {
        let http = HttpClient::new(&TimeoutConfig::default()).unwrap();
        let source = GitHubStreakSource::new(http, "https://streak-stats.demolab.com").unwrap();

        assert_eq!(
            source.request_url("octo cat").as_str(),
            "https://streak-stats.demolab.com/?user=octo+cat&type=json"
        );
    }
}

use anyhow::Context;
use async_trait::async_trait;
use regex::Regex;
use tracing::debug;
use url::Url;

use streakcard_domain::{ActivitySource, DomainError, RawActivityRecord};

use crate::http::HttpClient;

const PROVIDER: &str = "gfg-stats-card";
const STREAK_PATTERN: &str = r#"<text id="total-streak-text">\s*(\d+)"#;

/// GeeksforGeeks streak scraped from the stats card SVG
pub struct GfgStatsSource {
    http: HttpClient,
    base_url: Url,
    streak_pattern: Regex,
}

impl GfgStatsSource {
    pub fn new(http: HttpClient, base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            http,
            base_url: super::parse_base_url(base_url, "GFG stats card")?,
            streak_pattern: Regex::new(STREAK_PATTERN).context("Invalid GFG streak pattern")?,
        })
    }

    fn request_url(&self, username: &str) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DomainError::Infrastructure(format!("{}: base URL cannot be extended", PROVIDER))
            })?
            .pop_if_empty()
            .push(username);
        Ok(url)
    }

    /// Extract the streak from the card markup; no marker means 0
    pub(crate) fn parse_streak(&self, svg: &str) -> Result<u32, DomainError> {
        match self.streak_pattern.captures(svg) {
            Some(captures) => captures[1].parse::<u32>().map_err(|_| {
                DomainError::MalformedCalendar(format!(
                    "{}: streak value '{}' out of range",
                    PROVIDER, &captures[1]
                ))
            }),
            None => Ok(0),
        }
    }
}

#[async_trait]
impl ActivitySource for GfgStatsSource {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch(&self, username: &str) -> Result<RawActivityRecord, DomainError> {
        let url = self.request_url(username)?;
        debug!(provider = PROVIDER, username, "Fetching GFG stats card");

        let svg = self
            .http
            .send_for_text(self.http.get(url.as_str()), PROVIDER)
            .await?;

        self.parse_streak(&svg).map(RawActivityRecord::Streak)
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;

use streakcard_domain::{ActivitySource, Platform, Retrieval};

use super::{
    FallbackSource, GfgStatsSource, GitHubStreakSource, LeetCodeCalendarSource,
    LeetCodeGraphQlSource,
};
use crate::config::UpstreamEndpoints;
use crate::http::HttpClient;

/// Create the activity source for a platform. Manual platforms have none.
pub fn create_source(
    platform: Platform,
    http: &HttpClient,
    endpoints: &UpstreamEndpoints,
) -> Result<Option<Arc<dyn ActivitySource>>> {
    let source: Arc<dyn ActivitySource> = match platform {
        Platform::GitHub => Arc::new(GitHubStreakSource::new(
            http.clone(),
            &endpoints.github_streak_api,
        )?),
        Platform::GeeksForGeeks => {
            Arc::new(GfgStatsSource::new(http.clone(), &endpoints.gfg_stats)?)
        }
        // POTD completion is read from the same submission calendar
        Platform::LeetCode | Platform::LeetCodePotd | Platform::LeetCodeSubmissions => {
            let graphql: Arc<dyn ActivitySource> = Arc::new(LeetCodeGraphQlSource::new(
                http.clone(),
                &endpoints.leetcode_graphql,
            )?);
            let rest: Arc<dyn ActivitySource> = Arc::new(LeetCodeCalendarSource::new(
                http.clone(),
                &endpoints.leetcode_calendar_api,
            )?);
            Arc::new(FallbackSource::new("leetcode", vec![graphql, rest]))
        }
        _ => {
            debug_assert_eq!(platform.retrieval(), Retrieval::Manual);
            return Ok(None);
        }
    };

    Ok(Some(source))
}

/// Sources for every platform that has one
pub fn create_sources(
    http: &HttpClient,
    endpoints: &UpstreamEndpoints,
) -> Result<HashMap<Platform, Arc<dyn ActivitySource>>> {
    let mut sources = HashMap::new();
    for platform in Platform::ALL {
        if let Some(source) = create_source(platform, http, endpoints)? {
            sources.insert(platform, source);
        }
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeoutConfig;

    fn http() -> HttpClient {
        HttpClient::new(&TimeoutConfig::default()).unwrap()
    }

    #[test]
    fn test_every_non_manual_platform_has_a_source() {
        let sources = create_sources(&http(), &UpstreamEndpoints::default()).unwrap();

        for platform in Platform::ALL {
            let expected = platform.retrieval() != Retrieval::Manual;
            assert_eq!(sources.contains_key(&platform), expected, "{}", platform);
        }
    }

    #[test]
    fn test_source_names() {
        let endpoints = UpstreamEndpoints::default();
        let name = |platform| {
            create_source(platform, &http(), &endpoints)
                .unwrap()
                .map(|source| source.name())
        };

        assert_eq!(name(Platform::GitHub), Some("github-streak-stats"));
        assert_eq!(name(Platform::GeeksForGeeks), Some("gfg-stats-card"));
        assert_eq!(name(Platform::LeetCodePotd), Some("leetcode"));
        assert_eq!(name(Platform::Unstop), None);
    }

    #[test]
    fn test_invalid_endpoint_is_reported() {
        let endpoints = UpstreamEndpoints {
            github_streak_api: "not a url".to_string(),
            ..UpstreamEndpoints::default()
        };

        assert!(create_source(Platform::GitHub, &http(), &endpoints).is_err());
        assert!(create_source(Platform::LeetCode, &http(), &endpoints).is_ok());
    }
}

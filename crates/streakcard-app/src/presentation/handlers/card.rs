use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::info;

use streakcard_domain::{DataSource, StreakResult};

use crate::application::dtos::{CardPlatformInput, CardQuery};
use crate::application::services::{render_card, CardSpec, StreakReport, StreakRequest};
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

pub const CARD_CONTENT_TYPE: &str = "image/svg+xml";
pub const CARD_CACHE_CONTROL: &str = "public, max-age=1800";

const MISSING_PLATFORMS: &str = "Platforms parameter required";
const DEFAULT_USERNAME: &str = "user";

/// `GET /api/streak-card?platforms=<json>&name=&greeting=&color=`
pub async fn streak_card(
    State(state): State<AppState>,
    Query(query): Query<CardQuery>,
) -> Result<Response, ApiError> {
    let inputs = parse_platforms(query.platforms.as_deref())?;
    info!(tiles = inputs.len(), "Rendering streak card");

    let live: Vec<StreakRequest> = inputs
        .iter()
        .filter(|input| input.streak.is_none())
        .map(|input| StreakRequest::new(input.platform.trim(), tile_username(input)))
        .collect();
    let mut fetched = state.streaks.fetch_all(&live).await.into_iter();

    let reports: Vec<StreakReport> = inputs
        .iter()
        .map(|input| {
            let platform = input.platform.trim();
            match input.streak {
                Some(days) => StreakReport::new(StreakResult::new(
                    platform,
                    tile_username(input),
                    days,
                    DataSource::Manual,
                )),
                None => fetched.next().unwrap_or_else(|| {
                    StreakReport::new(StreakResult::manual(platform, tile_username(input)))
                }),
            }
        })
        .collect();

    let spec = CardSpec {
        name: query.name.unwrap_or_default(),
        greeting: query.greeting.unwrap_or_default(),
        color: query.color,
    };

    Ok((
        [
            (header::CONTENT_TYPE, CARD_CONTENT_TYPE),
            (header::CACHE_CONTROL, CARD_CACHE_CONTROL),
        ],
        render_card(&spec, &reports),
    )
        .into_response())
}

fn tile_username(input: &CardPlatformInput) -> &str {
    match input.username.trim() {
        "" => DEFAULT_USERNAME,
        username => username,
    }
}

/// Decode the `platforms` JSON array, tolerating one extra layer of percent-encoding
pub(crate) fn parse_platforms(raw: Option<&str>) -> Result<Vec<CardPlatformInput>, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| ApiError::missing_field(MISSING_PLATFORMS))?;

    let inputs: Vec<CardPlatformInput> = match serde_json::from_str(raw) {
        Ok(inputs) => inputs,
        Err(first_err) => {
            let decoded = urlencoding::decode(raw).map_err(|e| {
                ApiError::bad_request(format!("Invalid platforms parameter: {}", e))
            })?;
            serde_json::from_str(&decoded).map_err(|_| {
                ApiError::bad_request(format!("Invalid platforms parameter: {}", first_err))
            })?
        }
    };

    if inputs.is_empty() {
        return Err(ApiError::missing_field(MISSING_PLATFORMS));
    }

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let inputs =
            parse_platforms(Some(r#"[{"platform":"github","username":"octocat"}]"#)).unwrap();

        assert_eq!(
            inputs,
            vec![CardPlatformInput {
                platform: "github".to_string(),
                username: "octocat".to_string(),
                streak: None,
            }]
        );
    }

    #[test]
    fn test_parse_percent_encoded_json() {
        let encoded = urlencoding::encode(r#"[{"platform":"gfg","username":"geek","streak":4}]"#);
        let inputs = parse_platforms(Some(&encoded)).unwrap();

        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].platform, "gfg");
        assert_eq!(inputs[0].streak, Some(4));
    }

    #[test]
    fn test_missing_or_empty_platforms() {
        for raw in [None, Some(""), Some("   "), Some("[]")] {
            let err = parse_platforms(raw).unwrap_err();
            assert_eq!(err.error, MISSING_PLATFORMS);
        }
    }

    #[test]
    fn test_unparsable_platforms() {
        let err = parse_platforms(Some("github,leetcode")).unwrap_err();

        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert!(err.error.starts_with("Invalid platforms parameter"));
    }

    #[test]
    fn test_blank_username_defaults() {
        let input = CardPlatformInput {
            platform: "github".to_string(),
            username: " ".to_string(),
            streak: None,
        };
        assert_eq!(tile_username(&input), "user");
    }
}

use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::info;

use crate::application::dtos::{StreakDto, StreakQuery, StreakStatsDto};
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

const MISSING_PLATFORM_OR_USER: &str = "Platform and username required";

fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn platform_and_username<'a>(
    platform: Option<&'a str>,
    username: Option<&'a str>,
) -> Result<(&'a str, &'a str), ApiError> {
    match (required(platform), required(username)) {
        (Some(platform), Some(username)) => Ok((platform, username)),
        _ => Err(ApiError::missing_field(MISSING_PLATFORM_OR_USER)),
    }
}

async fn fetch(state: &AppState, platform: &str, username: &str) -> Json<StreakDto> {
    info!(platform, username, "Fetching streak");
    Json(state.streaks.fetch_streak(platform, username).await.into())
}

/// `GET /api/fetch-streak/{platform}/{username}`
pub async fn fetch_streak_by_path(
    State(state): State<AppState>,
    Path((platform, username)): Path<(String, String)>,
) -> Result<Json<StreakDto>, ApiError> {
    let (platform, username) =
        platform_and_username(Some(platform.as_str()), Some(username.as_str()))?;
    Ok(fetch(&state, platform, username).await)
}

/// `GET /api/fetch-streak?platform=&username=`
pub async fn fetch_streak_by_query(
    State(state): State<AppState>,
    Query(query): Query<StreakQuery>,
) -> Result<Json<StreakDto>, ApiError> {
    let (platform, username) =
        platform_and_username(query.platform.as_deref(), query.username.as_deref())?;
    Ok(fetch(&state, platform, username).await)
}

/// `GET /api/streak-stats/{platform}/{username}`
pub async fn streak_stats(
    State(state): State<AppState>,
    Path((platform, username)): Path<(String, String)>,
) -> Result<Json<StreakStatsDto>, ApiError> {
    let (platform, username) =
        platform_and_username(Some(platform.as_str()), Some(username.as_str()))?;

    let stats = state
        .streaks
        .summarize(platform, username)
        .await
        .ok_or_else(|| {
            ApiError::not_found(format!("No calendar data for platform '{}'", platform))
        })?;

    Ok(Json(StreakStatsDto::new(platform, username, stats)))
}

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use mockall::mock;
use tower::ServiceExt;

use streakcard_domain::{
    ActivityCalendar, ActivitySource, DomainError, FixedClock, Platform, RawActivityRecord,
};
use streakcard_lib::application::services::StreakService;
use streakcard_lib::{build_router, AppState};

mock! {
    pub Source {}

    #[async_trait]
    impl ActivitySource for Source {
        fn name(&self) -> &'static str;
        async fn fetch(&self, username: &str) -> Result<RawActivityRecord, DomainError>;
    }
}

pub const DAY: i64 = 86_400;

/// 2024-03-15 12:00:00 UTC
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

/// Calendar with one submission on each of the given days before today
pub fn calendar(days_ago: &[i64]) -> RawActivityRecord {
    let midnight = now().timestamp().div_euclid(DAY) * DAY;
    RawActivityRecord::Calendar(
        days_ago
            .iter()
            .map(|ago| (midnight - ago * DAY + 600, 2))
            .collect::<ActivityCalendar>(),
    )
}

pub fn source_returning(record: RawActivityRecord) -> Arc<dyn ActivitySource> {
    let mut source = MockSource::new();
    source.expect_name().return_const("mock-source");
    source
        .expect_fetch()
        .returning(move |_| Ok(record.clone()));
    Arc::new(source)
}

pub fn failing_source() -> Arc<dyn ActivitySource> {
    let mut source = MockSource::new();
    source.expect_name().return_const("mock-source");
    source
        .expect_fetch()
        .returning(|_| Err(DomainError::UpstreamUnavailable("connection refused".to_string())));
    Arc::new(source)
}

/// Router backed by mocked sources: GitHub 12, LeetCode calendar (streak 3), GFG failing
pub fn test_router() -> axum::Router {
    let sources: HashMap<Platform, Arc<dyn ActivitySource>> = [
        (Platform::GitHub, source_returning(RawActivityRecord::Streak(12))),
        (Platform::LeetCode, source_returning(calendar(&[0, 1, 2, 7, 8]))),
        (Platform::GeeksForGeeks, failing_source()),
    ]
    .into_iter()
    .collect();

    let service = StreakService::new(sources, Arc::new(FixedClock::new(now())));
    build_router(AppState::new(service))
}

pub async fn get(router: axum::Router, uri: &str) -> Response {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn json_body(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

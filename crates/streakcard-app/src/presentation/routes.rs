use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{card, health, streak};
use super::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/api/fetch-streak", get(streak::fetch_streak_by_query))
        .route(
            "/api/fetch-streak/{platform}/{username}",
            get(streak::fetch_streak_by_path),
        )
        .route(
            "/api/streak-stats/{platform}/{username}",
            get(streak::streak_stats),
        )
        .route("/api/streak-card", get(card::streak_card))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

//! Aggregated feed endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use crate::AppState;

/// Query parameters for the feed
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    /// Bypass the freshness cache and refetch every source
    #[serde(default)]
    pub refresh: bool,
    /// Maximum number of items to return
    pub limit: Option<usize>,
}

/// Create feed routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/feed", get(get_feed))
}

/// GET /api/feed - The aggregated tech-news feed
///
/// Served from the freshness cache when possible; `refresh=true` forces a
/// full refetch. Source failures degrade the feed, they never 500 it.
async fn get_feed(
    State(state): State<AppState>,
    Query(params): Query<FeedQuery>,
) -> impl IntoResponse {
    let mut response = state.feed_service.feed(params.refresh).await;

    if let Some(limit) = params.limit {
        response.items.truncate(limit);
    }

    info!(
        "Serving {} feed items (cached: {})",
        response.items.len(),
        response.cached
    );
    (StatusCode::OK, Json(response))
}

//! Source registry endpoint

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use pulse_core::SourceDescriptor;

use crate::AppState;

/// Registry listing response
#[derive(Debug, Serialize)]
struct SourcesResponse {
    sources: Vec<SourceDescriptor>,
}

/// Create sources routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/sources", get(list_sources))
}

/// GET /api/sources - Every configured source, trending scraper included
async fn list_sources(State(state): State<AppState>) -> Json<SourcesResponse> {
    Json(SourcesResponse {
        sources: state.feed_service.sources(),
    })
}

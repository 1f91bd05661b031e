//! API route definitions

mod feed;
mod health;
mod sources;

use axum::Router;
use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(feed::routes())
        .merge(sources::routes())
}

/// Create health routes (outside the /api prefix)
pub fn health_routes() -> Router<AppState> {
    health::routes()
}

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_borrow, get_borrow_by_id, get_summary, list_borrows, return_borrow,
};

/// Creates the API router with all borrow ledger endpoints
///
/// Query endpoints (Read operations):
/// - GET /borrows - List borrows with search and status filter
/// - GET /borrows/summary - Counts per effective status
/// - GET /borrows/:id - Get borrow details
///
/// Command endpoints (Write operations):
/// - POST /borrows - Open a new borrow
/// - POST /borrows/:id/return - Mark a borrow as returned
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Query endpoints (Read operations)
        .route("/borrows", get(list_borrows).post(create_borrow))
        .route("/borrows/summary", get(get_summary))
        .route("/borrows/:id", get(get_borrow_by_id))
        // Command endpoints (Write operations)
        .route("/borrows/:id/return", post(return_borrow))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    annotations::{api_annotations, api_chart},
    audit::api_audit,
    criteria::{criteria_get, criteria_set},
    screening::{screen_documents, screen_remote},
    system::api_health,
};
use crate::sse::sse_handler;
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Annotation data contracts
        .route("/api/annotations", get(api_annotations))
        .route("/api/annotations/chart", get(api_chart))

        // Screening
        .route("/api/criteria", get(criteria_get).post(criteria_set))
        .route("/api/screen", post(screen_documents))
        .route("/api/screen/remote", post(screen_remote))
        .route("/api/audit", get(api_audit))

        // SSE streaming
        .route("/api/events", get(sse_handler))

        // Liveness
        .route("/api/health", get(api_health))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

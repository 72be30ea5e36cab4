//! Liveness endpoint.

use axum::extract::State;
use axum::Json;

use crate::state::SharedState;

/// GET /api/health
pub async fn api_health(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "rows": state.rows.len(),
    }))
}

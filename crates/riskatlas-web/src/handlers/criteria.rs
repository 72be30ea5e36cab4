//! Criteria endpoints: read the current keyword lists, or replace them.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use riskatlas_screening::Criteria;
use serde::Deserialize;

use crate::state::{AppEvent, SharedState};

#[derive(Debug, Deserialize)]
pub struct SetCriteriaRequest {
    /// Comma-separated inclusion keywords
    #[serde(default)]
    pub inclusion: String,
    /// Comma-separated exclusion keywords
    #[serde(default)]
    pub exclusion: String,
}

/// GET /api/criteria — the current keyword-set pair.
pub async fn criteria_get(State(state): State<SharedState>) -> Json<Criteria> {
    let session = state.session.read().await;
    Json(session.criteria().clone())
}

/// POST /api/criteria — replace both lists wholesale.
pub async fn criteria_set(
    State(state): State<SharedState>,
    Json(request): Json<SetCriteriaRequest>,
) -> impl IntoResponse {
    if request.inclusion.trim().is_empty() && request.exclusion.trim().is_empty() {
        let body = serde_json::json!({
            "error": "at least one inclusion or exclusion keyword is required"
        });
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    let mut session = state.session.write().await;
    let criteria = session
        .set_criteria(&request.inclusion, &request.exclusion)
        .clone();
    drop(session);

    state.emit(AppEvent::CriteriaReplaced {
        inclusion: criteria.inclusion.len(),
        exclusion: criteria.exclusion.len(),
    });

    Json(criteria).into_response()
}

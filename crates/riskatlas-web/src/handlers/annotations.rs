//! Annotation data endpoints — the table and chart contracts.
//!
//! Rendering happens client-side; these handlers only serve the data that
//! reaches the renderer.

use axum::extract::State;
use axum::Json;
use riskatlas_annotations::chart::{chart_series, ChartSeries};
use riskatlas_annotations::AnnotationRow;

use crate::state::SharedState;

/// GET /api/annotations — flattened rows, one per (paper, cancer type).
pub async fn api_annotations(State(state): State<SharedState>) -> Json<Vec<AnnotationRow>> {
    Json(state.rows.as_ref().clone())
}

/// GET /api/annotations/chart — one bar per row, first numeric risk token.
pub async fn api_chart(State(state): State<SharedState>) -> Json<ChartSeries> {
    Json(chart_series(&state.rows))
}

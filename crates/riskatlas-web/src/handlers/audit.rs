//! Audit log endpoint.

use axum::extract::State;
use axum::Json;
use riskatlas_screening::AuditEntry;

use crate::state::SharedState;

/// GET /api/audit — the session's screening audit trail, in append order.
pub async fn api_audit(State(state): State<SharedState>) -> Json<Vec<AuditEntry>> {
    let session = state.session.read().await;
    Json(session.audit_log().entries().to_vec())
}

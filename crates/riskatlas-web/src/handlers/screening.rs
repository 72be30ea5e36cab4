//! Document screening endpoints.
//!
//! `/api/screen` reads each uploaded file as text (no format validation
//! beyond UTF-8) and classifies it independently; a read failure becomes a
//! per-file error entry and never aborts the rest of the batch. Entries
//! follow completion order. `/api/screen/remote` forwards the batch to the
//! opaque backend classifier when one is configured.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use riskatlas_common::error::ApiError;
use riskatlas_screening::remote::{DocumentClassifier, RemoteDocument, RemoteVerdict};
use riskatlas_screening::ScreeningOutcome;
use serde::Serialize;
use tracing::warn;

use crate::state::{AppEvent, SharedState};

/// Per-file entry in the screening response.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScreenEntry {
    Screened {
        #[serde(flatten)]
        outcome: ScreeningOutcome,
    },
    Error {
        document: String,
        error: String,
    },
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub results: Vec<ScreenEntry>,
}

/// Read one uploaded field as text. Documents are screened as text, so a
/// body that is not valid UTF-8 is a per-file read failure, as is a
/// transport error while draining the field.
async fn read_field_text(field: Field<'_>) -> Result<String, String> {
    let bytes = field.bytes().await.map_err(|err| err.to_string())?;
    String::from_utf8(bytes.to_vec()).map_err(|_| "file is not valid UTF-8 text".to_string())
}

/// POST /api/screen — multipart file upload, one verdict per file.
pub async fn screen_documents(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut results = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let document = field
            .file_name()
            .or(field.name())
            .unwrap_or("unnamed")
            .to_string();

        match read_field_text(field).await {
            Ok(text) => {
                // Criteria are snapshotted per document: a concurrent
                // replace may apply to part of a batch only.
                let mut session = state.session.write().await;
                let outcome = session.screen_document(&document, &text);
                drop(session);

                state.emit(AppEvent::DocumentScreened {
                    document: outcome.document.clone(),
                    verdict: outcome.verdict.as_str().to_string(),
                });
                results.push(ScreenEntry::Screened { outcome });
            }
            Err(error) => {
                warn!(document, error, "failed to read uploaded file");
                results.push(ScreenEntry::Error { document, error });
            }
        }
    }

    if results.is_empty() {
        let body = serde_json::json!({ "error": "no files uploaded" });
        return Ok((StatusCode::BAD_REQUEST, Json(body)).into_response());
    }

    Ok(Json(ScreenResponse { results }).into_response())
}

/// POST /api/screen/remote — forward the batch to the backend classifier.
pub async fn screen_remote(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let Some(remote) = &state.remote else {
        let body = serde_json::json!({ "error": "no remote classifier configured" });
        return Ok((StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response());
    };

    let mut documents = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let name = field
            .file_name()
            .or(field.name())
            .unwrap_or("unnamed")
            .to_string();
        match read_field_text(field).await {
            Ok(text) => documents.push(RemoteDocument { name, text }),
            Err(error) => warn!(document = name, error, "failed to read uploaded file"),
        }
    }

    if documents.is_empty() {
        let body = serde_json::json!({ "error": "no files uploaded" });
        return Ok((StatusCode::BAD_REQUEST, Json(body)).into_response());
    }

    let criteria = state.session.read().await.criteria().clone();
    let verdicts: Vec<RemoteVerdict> = remote.classify_batch(&documents, &criteria).await?;

    Ok(Json(verdicts).into_response())
}

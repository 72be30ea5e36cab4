//! Shared application state for the web server.

use std::sync::Arc;

use riskatlas_annotations::AnnotationRow;
use riskatlas_screening::remote::RemoteClassifier;
use riskatlas_screening::{ScreeningOptions, ScreeningSession};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, RwLock};

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// The annotation document was loaded and reshaped
    AnnotationsLoaded { papers: usize, rows: usize },
    /// The screening criteria were replaced
    CriteriaReplaced { inclusion: usize, exclusion: usize },
    /// A document finished screening
    DocumentScreened { document: String, verdict: String },
    /// General system notification
    Notification { level: String, message: String },
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    /// Read-only row snapshot for the table/chart contracts
    pub rows: Arc<Vec<AnnotationRow>>,
    /// Screening session: criteria, row snapshot, audit log
    pub session: RwLock<ScreeningSession>,
    /// Optional opaque backend classifier
    pub remote: Option<RemoteClassifier>,
    /// Broadcast channel for SSE push events
    pub event_tx: broadcast::Sender<AppEvent>,
}

impl AppState {
    pub fn new(
        rows: Vec<AnnotationRow>,
        options: ScreeningOptions,
        remote: Option<RemoteClassifier>,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        let session = ScreeningSession::new(rows.clone(), options);
        Self {
            rows: Arc::new(rows),
            session: RwLock::new(session),
            remote,
            event_tx,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.event_tx.subscribe()
    }

    /// Best-effort push; nobody listening is fine.
    pub fn emit(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

pub type SharedState = Arc<AppState>;

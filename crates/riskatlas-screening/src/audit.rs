//! Append-only audit log of screening outcomes.
//!
//! One entry per screened document. Entries carry a SHA-256 hash of the
//! screened text so a past verdict can be tied to the exact content that
//! produced it without retaining the document.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::matcher::Verdict;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub document: String,
    pub verdict: Verdict,
    pub reason: String,
    pub content_hash: String,
    pub recorded_at: chrono::DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(document: String, verdict: Verdict, reason: String, text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let content_hash = format!("{:x}", hasher.finalize());

        Self {
            id: Uuid::new_v4(),
            document,
            verdict,
            reason,
            content_hash,
            recorded_at: Utc::now(),
        }
    }

    /// One-line operator-facing message, as the dashboard lists them.
    pub fn message(&self) -> String {
        format!("{}: {} - {}", self.document, self.verdict.describe(), self.reason)
    }
}

/// Session-lifetime log. Append-only: entries are never edited or removed,
/// and append order is the order outcomes were produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

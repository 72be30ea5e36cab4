//! Session state for the screening pipeline.
//!
//! Owns the only mutable state in the system: the current criteria
//! (replaced wholesale by each set-criteria action), the read-only
//! annotation row snapshot, and the append-only audit log. Document
//! classifications themselves are stateless and independent.

use riskatlas_annotations::AnnotationRow;
use riskatlas_common::config::ScreeningConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::audit::{AuditEntry, AuditLog};
use crate::criteria::{Criteria, KeywordPolicy};
use crate::matcher::{classify, Verdict};

/// Behavioural switches of the screening pipeline. The six upstream
/// dashboard revisions differed only in these; one configurable pipeline
/// replaces the copy-pasted variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreeningOptions {
    /// Cross-reference documents against the annotation rows.
    pub cross_reference_annotations: bool,
    /// Append outcomes to the audit log.
    pub log_results: bool,
    /// Empty-segment handling for keyword parsing.
    pub keyword_policy: KeywordPolicy,
}

impl Default for ScreeningOptions {
    fn default() -> Self {
        Self {
            cross_reference_annotations: true,
            log_results: true,
            keyword_policy: KeywordPolicy::default(),
        }
    }
}

impl From<&ScreeningConfig> for ScreeningOptions {
    fn from(config: &ScreeningConfig) -> Self {
        Self {
            cross_reference_annotations: config.cross_reference_annotations,
            log_results: config.log_results,
            keyword_policy: if config.drop_empty_keywords {
                KeywordPolicy::DropEmpty
            } else {
                KeywordPolicy::KeepEmpty
            },
        }
    }
}

/// Per-document screening result. Ephemeral; rebuilt on every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub document: String,
    pub verdict: Verdict,
    pub reason: String,
}

pub struct ScreeningSession {
    criteria: Criteria,
    rows: Vec<AnnotationRow>,
    audit: AuditLog,
    options: ScreeningOptions,
}

impl ScreeningSession {
    pub fn new(rows: Vec<AnnotationRow>, options: ScreeningOptions) -> Self {
        Self {
            criteria: Criteria::default(),
            rows,
            audit: AuditLog::new(),
            options,
        }
    }

    /// Replace both keyword lists from their comma-separated inputs.
    /// No history is kept; the previous criteria are discarded.
    pub fn set_criteria(&mut self, inclusion: &str, exclusion: &str) -> &Criteria {
        self.criteria = Criteria::parse(inclusion, exclusion, self.options.keyword_policy);
        info!(
            inclusion = self.criteria.inclusion.len(),
            exclusion = self.criteria.exclusion.len(),
            "screening criteria replaced"
        );
        &self.criteria
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn rows(&self) -> &[AnnotationRow] {
        &self.rows
    }

    pub fn options(&self) -> ScreeningOptions {
        self.options
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }

    /// Classify one document against the current criteria, recording the
    /// outcome in the audit log when enabled.
    pub fn screen_document(&mut self, name: &str, text: &str) -> ScreeningOutcome {
        let rows = self
            .options
            .cross_reference_annotations
            .then(|| self.rows.as_slice());

        let classification = classify(text, &self.criteria, rows);
        debug!(
            document = name,
            verdict = classification.verdict.as_str(),
            "document screened"
        );

        if self.options.log_results {
            self.audit.append(AuditEntry::new(
                name.to_string(),
                classification.verdict,
                classification.reason.clone(),
                text,
            ));
        }

        ScreeningOutcome {
            document: name.to_string(),
            verdict: classification.verdict,
            reason: classification.reason,
        }
    }
}

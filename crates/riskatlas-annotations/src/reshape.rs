//! Flattening of the nested annotation document into tabular rows.
//!
//! One row per (paper, declared cancer type) pair, in source order. Missing
//! or empty optional fields are substituted with fixed placeholder strings,
//! never propagated as errors.

use serde::{Deserialize, Serialize};

use crate::model::AnnotationSet;

pub const UNKNOWN_RISK: &str = "Unknown";
pub const NO_RECOMMENDATIONS: &str = "No recommendations";
pub const NO_EVIDENCE: &str = "No evidence provided";
pub const NO_AUTHORS: &str = "No authors listed";

/// One flattened (paper, cancer type) record. Serializes with the column
/// names the table contract expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnnotationRow {
    pub title: String,
    pub cancer: String,
    pub risk: String,
    pub management: String,
    pub evidence_cancer: String,
    pub evidence_management: String,
    pub authors: String,
}

impl AnnotationRow {
    /// All string fields, for substring cross-referencing.
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.title,
            &self.cancer,
            &self.risk,
            &self.management,
            &self.evidence_cancer,
            &self.evidence_management,
            &self.authors,
        ]
    }
}

/// Flatten the annotation document into one row per declared cancer type.
///
/// Pure function of its input: papers in document order, types within a
/// paper in declared order, no sorting, no deduplication. Row count equals
/// the sum of `Cancer.Types` lengths across papers.
pub fn reshape(source: &AnnotationSet) -> Vec<AnnotationRow> {
    let mut rows = Vec::new();

    for paper in source.values() {
        let evidence_cancer = join_or(&paper.cancer.evidence, "; ", NO_EVIDENCE);
        let authors = join_or(&paper.authors, ", ", NO_AUTHORS);

        for cancer_type in &paper.cancer.types {
            let management = paper.medical_actions_management.get(cancer_type);

            rows.push(AnnotationRow {
                title: paper.title.clone(),
                cancer: cancer_type.clone(),
                risk: paper
                    .risk
                    .percentages
                    .get(cancer_type)
                    .filter(|r| !r.is_empty())
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_RISK.to_string()),
                management: management
                    .map(|m| join_or(&m.recommendations, "; ", NO_RECOMMENDATIONS))
                    .unwrap_or_else(|| NO_RECOMMENDATIONS.to_string()),
                evidence_cancer: evidence_cancer.clone(),
                evidence_management: management
                    .map(|m| join_or(&m.evidence, "; ", NO_EVIDENCE))
                    .unwrap_or_else(|| NO_EVIDENCE.to_string()),
                authors: authors.clone(),
            });
        }
    }

    rows
}

/// Join with `sep`, or the placeholder when the list is empty.
fn join_or(items: &[String], sep: &str, placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items.join(sep)
    }
}

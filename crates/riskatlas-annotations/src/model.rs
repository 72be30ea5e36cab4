//! Data model for the annotation source document.
//!
//! Field names mirror the upstream JSON (`Title`, `Cancer.Types`,
//! `Risk.Percentages`, `Medical_Actions_Management`, …). Maps are
//! `IndexMap` so iteration follows source document order — reshaping must
//! be deterministic and paper order is meaningful.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The full annotation document: paper identifier → annotation record.
pub type AnnotationSet = IndexMap<String, PaperAnnotation>;

/// One paper's annotation record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperAnnotation {
    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "Cancer", default)]
    pub cancer: CancerSection,

    #[serde(rename = "Risk", default)]
    pub risk: RiskSection,

    /// Per-cancer-type management recommendations and their evidence.
    #[serde(rename = "Medical_Actions_Management", default)]
    pub medical_actions_management: IndexMap<String, ManagementEntry>,

    #[serde(rename = "Authors", default)]
    pub authors: Vec<String>,

    /// Annotator-assigned keyword weights. Listed for display only;
    /// nothing downstream consumes the weights.
    #[serde(rename = "Keywords", default, skip_serializing_if = "IndexMap::is_empty")]
    pub keywords: IndexMap<String, f64>,
}

/// Declared cancer types and the evidence supporting them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CancerSection {
    #[serde(rename = "Types", default)]
    pub types: Vec<String>,

    #[serde(rename = "Evidence", default)]
    pub evidence: Vec<String>,
}

/// Risk figures per cancer type, kept as annotated text ("25%", "Unknown").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskSection {
    #[serde(rename = "Percentages", default)]
    pub percentages: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManagementEntry {
    #[serde(rename = "Recommendations", default)]
    pub recommendations: Vec<String>,

    #[serde(rename = "Evidence", default)]
    pub evidence: Vec<String>,
}

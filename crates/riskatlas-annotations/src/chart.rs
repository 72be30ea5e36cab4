//! Chart data contract.
//!
//! The dashboard's bar chart is drawn by an external rendering collaborator;
//! this module only produces the data handed to it: one bar per annotation
//! row, labelled with the cancer type, valued at the first numeric token of
//! the annotated risk text (0 when none is present, e.g. "Unknown").

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::reshape::AnnotationRow;

lazy_static! {
    static ref RISK_TOKEN: Regex = Regex::new(r"\d+").unwrap();
}

/// Bar chart payload: parallel label/value vectors, one entry per row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Extract the first numeric token from a risk string ("25%" → 25.0).
/// Non-numeric risk text ("Unknown", "High") yields 0.
pub fn risk_value(risk: &str) -> f64 {
    RISK_TOKEN
        .find(risk)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Build the chart series for a row set.
pub fn chart_series(rows: &[AnnotationRow]) -> ChartSeries {
    ChartSeries {
        labels: rows.iter().map(|r| r.cancer.clone()).collect(),
        values: rows.iter().map(|r| risk_value(&r.risk)).collect(),
    }
}

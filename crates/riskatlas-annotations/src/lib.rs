//! riskatlas-annotations — Annotation data model, loading, and reshaping.
//!
//! The annotation source is a JSON document keyed by paper identifier; each
//! entry carries the paper's cancer types, per-type risk percentages,
//! management recommendations, evidence, and authors. This crate flattens
//! that nested shape into one row per (paper, cancer type) pair — the form
//! consumed by the table, the chart, and the screening cross-reference.

pub mod chart;
pub mod loader;
pub mod model;
pub mod reshape;

pub use loader::AnnotationLoader;
pub use model::{AnnotationSet, PaperAnnotation};
pub use reshape::{reshape, AnnotationRow};

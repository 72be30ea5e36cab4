//! riskatlas-common — Shared errors and configuration used across all Riskatlas crates.

pub mod error;
pub mod config;

// Re-export commonly used types
pub use config::{AppConfig, AnnotationsSource, ScreeningConfig};
pub use error::{Result, RiskatlasError};

//! Annotation source loading.
//!
//! The document is loaded once at startup, either from a local file or via
//! a single network fetch. A failed load is reported and leaves dependent
//! features (table, chart, cross-reference) unpopulated; it never crashes
//! the service.

use riskatlas_common::config::AnnotationsSource;
use riskatlas_common::{Result, RiskatlasError};
use tracing::{info, instrument};

use crate::model::AnnotationSet;

pub struct AnnotationLoader {
    client: reqwest::Client,
}

impl Default for AnnotationLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Read and parse the annotation document from a local file.
    pub fn from_file(path: &str) -> Result<AnnotationSet> {
        let content = std::fs::read_to_string(path)?;
        let set: AnnotationSet = serde_json::from_str(&content)?;
        info!(path, papers = set.len(), "loaded annotation document");
        Ok(set)
    }

    /// Fetch and parse the annotation document from a URL.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<AnnotationSet> {
        let set: AnnotationSet = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        info!(url, papers = set.len(), "fetched annotation document");
        Ok(set)
    }

    /// Load from the configured source. A local path wins over a URL when
    /// both are set.
    pub async fn load(&self, source: &AnnotationsSource) -> Result<AnnotationSet> {
        if let Some(path) = &source.path {
            return Self::from_file(path);
        }
        if let Some(url) = &source.url {
            return self.fetch(url).await;
        }
        Err(RiskatlasError::AnnotationSource(
            "no annotation source configured".to_string(),
        ))
    }
}

//! Client for the optional backend classifier.
//!
//! One upstream revision shipped documents plus the keyword lists to a
//! separate service and displayed its per-file relevance verdicts. The
//! service's internal method is deliberately opaque here: this module only
//! fixes the wire contract.

use async_trait::async_trait;
use riskatlas_common::config::RemoteClassifierConfig;
use riskatlas_common::Result;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::criteria::Criteria;

/// One document shipped to the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteDocument {
    pub name: String,
    pub text: String,
}

/// Per-file verdict returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteVerdict {
    pub file: String,
    pub message: String,
    pub is_relevant: bool,
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    documents: &'a [RemoteDocument],
    inclusion: &'a [String],
    exclusion: &'a [String],
}

/// Interface for external document classification.
#[async_trait]
pub trait DocumentClassifier: Send + Sync {
    async fn classify_batch(
        &self,
        documents: &[RemoteDocument],
        criteria: &Criteria,
    ) -> Result<Vec<RemoteVerdict>>;
}

/// HTTP implementation posting to the configured endpoint.
pub struct RemoteClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteClassifier {
    pub fn new(config: &RemoteClassifierConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl DocumentClassifier for RemoteClassifier {
    #[instrument(skip(self, documents))]
    async fn classify_batch(
        &self,
        documents: &[RemoteDocument],
        criteria: &Criteria,
    ) -> Result<Vec<RemoteVerdict>> {
        let request = ClassifyRequest {
            documents,
            inclusion: &criteria.inclusion,
            exclusion: &criteria.exclusion,
        };

        let verdicts: Vec<RemoteVerdict> = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, "remote classifier rejected request");
                e
            })?
            .json()
            .await?;

        Ok(verdicts)
    }
}

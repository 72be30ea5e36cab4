//! Application configuration.
//!
//! Loaded once at startup from TOML or JSON; every section has serde
//! defaults so a partial (or absent) config file still yields a runnable
//! setup.

use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Web server bind options
    #[serde(default)]
    pub server: ServerConfig,

    /// Where the annotation JSON comes from
    #[serde(default)]
    pub annotations: AnnotationsSource,

    /// Document screening behaviour
    #[serde(default)]
    pub screening: ScreeningConfig,

    /// Optional opaque backend classifier
    pub remote_classifier: Option<RemoteClassifierConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            annotations: AnnotationsSource::default(),
            screening: ScreeningConfig::default(),
            remote_classifier: None,
        }
    }
}

// ── Server ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ── Annotation source ─────────────────────────────────────────────────────────

/// Where to read the annotation JSON document from.
///
/// Exactly one of `path` / `url` is expected; when both are set the local
/// path wins (no network round-trip for data already on disk).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationsSource {
    /// Local JSON file
    #[serde(default = "default_annotations_path")]
    pub path: Option<String>,

    /// Remote JSON document fetched once at startup
    pub url: Option<String>,
}

fn default_annotations_path() -> Option<String> {
    Some("data/annotations.json".to_string())
}

impl Default for AnnotationsSource {
    fn default() -> Self {
        Self {
            path: default_annotations_path(),
            url: None,
        }
    }
}

// ── Screening ─────────────────────────────────────────────────────────────────

/// Screening pipeline options. The upstream tool shipped six near-identical
/// variants; these switches collapse them into one configurable pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Cross-reference uploaded documents against the loaded annotation rows
    #[serde(default = "default_true")]
    pub cross_reference_annotations: bool,

    /// Append each screening outcome to the session audit log
    #[serde(default = "default_true")]
    pub log_results: bool,

    /// Drop empty keyword segments produced by trailing commas.
    /// An empty keyword is a substring of every document, so keeping them
    /// makes every inclusion check pass trivially.
    #[serde(default = "default_true")]
    pub drop_empty_keywords: bool,
}

fn default_true() -> bool { true }

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            cross_reference_annotations: true,
            log_results: true,
            drop_empty_keywords: true,
        }
    }
}

// ── Remote classifier ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteClassifierConfig {
    /// Endpoint accepting documents + keyword lists
    pub endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { 30 }

// ── Helper methods ────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load from a TOML file
    pub fn from_toml(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_json(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load from a path, dispatching on the file extension.
    /// Missing file falls back to defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        if !std::path::Path::new(path).exists() {
            tracing::warn!(path, "config file not found, using defaults");
            return Ok(Self::default());
        }
        if path.ends_with(".json") {
            Self::from_json(path)
        } else {
            Self::from_toml(path)
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3001);
        assert!(config.screening.cross_reference_annotations);
        assert!(config.screening.drop_empty_keywords);
        assert!(config.remote_classifier.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml_src = r#"
            [server]
            port = 8080

            [screening]
            log_results = false
        "#;
        let config: AppConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!config.screening.log_results);
        assert!(config.screening.cross_reference_annotations);
    }

    #[test]
    fn test_remote_classifier_section() {
        let toml_src = r#"
            [remote_classifier]
            endpoint = "http://localhost:5000/analyze"
        "#;
        let config: AppConfig = toml::from_str(toml_src).unwrap();
        let remote = config.remote_classifier.unwrap();
        assert_eq!(remote.endpoint, "http://localhost:5000/analyze");
        assert_eq!(remote.timeout_secs, 30);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:3001");
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nhost = \"0.0.0.0\"").unwrap();
        let config = AppConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3001);
    }
}

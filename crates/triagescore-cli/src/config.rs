//! Application configuration
//!
//! One optional YAML file covering the classifier backend, label weight
//! overrides, and precompute output. A missing file at the default path
//! means built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use triagescore_classifiers::ClassifierSettings;
use triagescore_engine::{LabelWeightSpec, LabelWeights, DEFAULT_OUTPUT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Classifier backend, cooldown, and inference mode
    #[serde(default)]
    pub classifier: ClassifierSettings,

    /// Label weight overrides; the canonical six-tier table when omitted
    #[serde(default)]
    pub labels: Option<Vec<LabelWeightSpec>>,

    /// Precompute pipeline settings
    #[serde(default)]
    pub precompute: PrecomputeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrecomputeSettings {
    /// Artifact path for the precomputed mapping
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Vocabulary file overriding the built-in phrase list
    #[serde(default)]
    pub vocabulary: Option<PathBuf>,
}

impl Default for PrecomputeSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            vocabulary: None,
        }
    }
}

impl AppConfig {
    /// Load configuration, falling back to defaults when the file does not
    /// exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// The label weight table, validated.
    pub fn label_weights(&self) -> Result<LabelWeights> {
        match &self.labels {
            Some(specs) => Ok(LabelWeights::from_specs(specs)?),
            None => Ok(LabelWeights::default_urgency()),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

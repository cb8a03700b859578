//! Configuration for the classifier backend
//!
//! Model choice, device, cooldown, and inference mode are deployment
//! decisions, so they live in configuration rather than code.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use triagescore_core::{Error, Result};

use crate::classifier::ZeroShotClassifier;
use crate::lexicon::LexiconClassifier;
use crate::model_loader::{DeviceType, ModelSource};
use crate::nli::DEFAULT_HYPOTHESIS_TEMPLATE;
use crate::provider::{ClassifierLoader, ClassifierProvider};

/// Default NLI checkpoint. Must be a plain bert-family model: the loader
/// implements only the BERT encoder, and rejects other architectures
/// (mobilebert, bart, deberta) at load time.
pub const DEFAULT_MODEL_REPO: &str = "cross-encoder/nli-bert-base";

/// Classifier backend settings (YAML)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierSettings {
    /// Which backend produces label distributions
    #[serde(default)]
    pub backend: BackendSpec,

    /// Device override for ML backends
    #[serde(default)]
    pub device: DeviceSpec,

    /// Minimum seconds between consecutive load attempts
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,

    /// Bound on a single load attempt, in seconds
    #[serde(default = "default_load_timeout_secs")]
    pub load_timeout_secs: u64,

    /// NLI hypothesis template with a `{}` label placeholder
    #[serde(default = "default_hypothesis_template")]
    pub hypothesis_template: String,

    /// Score labels independently instead of normalizing across the set
    #[serde(default)]
    pub multi_label: bool,
}

/// Backend specification (for config files)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BackendSpec {
    /// NLI checkpoint from the Hugging Face Hub
    Huggingface {
        repo_id: String,
        #[serde(default)]
        revision: Option<String>,
    },

    /// NLI checkpoint from a local directory
    Local { path: PathBuf },

    /// Built-in cue-phrase lexicon, no model download
    Lexicon,
}

/// Device specification (for config files)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceSpec {
    #[default]
    Cpu,
    Cuda {
        index: Option<usize>,
    },
    Metal {
        index: Option<usize>,
    },
}

impl Default for BackendSpec {
    fn default() -> Self {
        Self::Huggingface {
            repo_id: DEFAULT_MODEL_REPO.to_string(),
            revision: None,
        }
    }
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            backend: BackendSpec::default(),
            device: DeviceSpec::default(),
            cooldown_secs: default_cooldown_secs(),
            load_timeout_secs: default_load_timeout_secs(),
            hypothesis_template: default_hypothesis_template(),
            multi_label: false,
        }
    }
}

impl ClassifierSettings {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse classifier settings: {e}")))
    }

    /// Cooldown window between load attempts
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    /// Bound on a single load attempt
    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.load_timeout_secs)
    }

    /// Model source for ML backends; `None` for the lexicon backend.
    pub fn model_source(&self) -> Option<ModelSource> {
        match &self.backend {
            BackendSpec::Huggingface { repo_id, revision } => Some(ModelSource::HuggingFace {
                repo_id: repo_id.clone(),
                revision: revision.clone(),
            }),
            BackendSpec::Local { path } => Some(ModelSource::LocalDir(path.clone())),
            BackendSpec::Lexicon => None,
        }
    }

    /// Build a cooldown-guarded provider around the configured backend.
    pub fn provider(&self) -> ClassifierProvider {
        ClassifierProvider::new(Arc::new(ConfiguredLoader::new(self.clone())))
            .with_cooldown(self.cooldown())
            .with_load_timeout(self.load_timeout())
    }
}

impl DeviceSpec {
    /// Convert to DeviceType
    pub fn to_device_type(&self) -> DeviceType {
        match self {
            DeviceSpec::Cpu => DeviceType::Cpu,
            DeviceSpec::Cuda { index } => DeviceType::Cuda(index.unwrap_or(0)),
            DeviceSpec::Metal { index } => DeviceType::Metal(index.unwrap_or(0)),
        }
    }
}

/// Loader that instantiates whichever backend the settings select.
pub struct ConfiguredLoader {
    settings: ClassifierSettings,
}

impl ConfiguredLoader {
    pub fn new(settings: ClassifierSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl ClassifierLoader for ConfiguredLoader {
    async fn load(&self) -> Result<Arc<dyn ZeroShotClassifier>> {
        match &self.settings.backend {
            BackendSpec::Lexicon => Ok(Arc::new(LexiconClassifier::new()?)),
            BackendSpec::Huggingface { .. } | BackendSpec::Local { .. } => {
                self.load_nli().await
            }
        }
    }
}

impl ConfiguredLoader {
    #[cfg(feature = "ml-models")]
    async fn load_nli(&self) -> Result<Arc<dyn ZeroShotClassifier>> {
        use crate::nli::{NliOptions, NliZeroShotClassifier};

        let source = self
            .settings
            .model_source()
            .ok_or_else(|| Error::internal("ML backend without a model source"))?;
        let options = NliOptions {
            name: source.display_name(),
            device: self.settings.device.to_device_type(),
            hypothesis_template: self.settings.hypothesis_template.clone(),
            multi_label: self.settings.multi_label,
        };

        // Download and weight loading are blocking; keep them off the
        // runtime threads.
        let classifier = tokio::task::spawn_blocking(move || -> Result<NliZeroShotClassifier> {
            let files = source.resolve()?;
            NliZeroShotClassifier::load(&files, options)
        })
        .await
        .map_err(|e| Error::internal(format!("model load task failed: {e}")))??;

        Ok(Arc::new(classifier))
    }

    #[cfg(not(feature = "ml-models"))]
    async fn load_nli(&self) -> Result<Arc<dyn ZeroShotClassifier>> {
        Err(Error::config(
            "ML backends require the 'ml-models' feature; use the lexicon backend instead",
        ))
    }
}

fn default_cooldown_secs() -> u64 {
    60
}

fn default_load_timeout_secs() -> u64 {
    120
}

fn default_hypothesis_template() -> String {
    DEFAULT_HYPOTHESIS_TEMPLATE.to_string()
}

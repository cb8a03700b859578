//! Model file resolution for NLI checkpoints
//!
//! Resolves the three files a checkpoint needs (`config.json`,
//! `tokenizer.json`, `model.safetensors`) from either a local directory or
//! the Hugging Face Hub. Hub downloads go through hf-hub's own cache, so a
//! repeated resolve is a no-op.

use std::path::{Path, PathBuf};

use hf_hub::{api::sync::Api, Repo, RepoType};
use tracing::info;
use triagescore_core::{Error, Result};

/// Resolved checkpoint files, ready to load.
#[derive(Debug, Clone)]
pub struct ModelFiles {
    pub config: PathBuf,
    pub tokenizer: PathBuf,
    pub weights: PathBuf,
}

/// Source location for model files
#[derive(Debug, Clone)]
pub enum ModelSource {
    /// A local directory containing the checkpoint files
    LocalDir(PathBuf),

    /// Download from Hugging Face Hub
    HuggingFace {
        repo_id: String,
        revision: Option<String>,
    },
}

impl ModelSource {
    /// Human-readable identifier used as the classifier name.
    pub fn display_name(&self) -> String {
        match self {
            Self::LocalDir(dir) => dir
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("local-model")
                .to_string(),
            Self::HuggingFace { repo_id, .. } => repo_id.clone(),
        }
    }

    /// Resolve the checkpoint files, downloading if needed.
    ///
    /// This performs blocking network/filesystem work; callers on an async
    /// runtime should run it inside `spawn_blocking`.
    pub fn resolve(&self) -> Result<ModelFiles> {
        match self {
            Self::LocalDir(dir) => Self::resolve_local(dir),
            Self::HuggingFace { repo_id, revision } => Self::resolve_hub(repo_id, revision),
        }
    }

    fn resolve_local(dir: &Path) -> Result<ModelFiles> {
        if !dir.is_dir() {
            return Err(Error::config(format!(
                "Model directory not found: {}",
                dir.display()
            )));
        }

        let files = ModelFiles {
            config: dir.join("config.json"),
            tokenizer: dir.join("tokenizer.json"),
            weights: dir.join("model.safetensors"),
        };

        for path in [&files.config, &files.tokenizer, &files.weights] {
            if !path.is_file() {
                return Err(Error::model(format!(
                    "Missing checkpoint file: {}",
                    path.display()
                )));
            }
        }

        Ok(files)
    }

    fn resolve_hub(repo_id: &str, revision: &Option<String>) -> Result<ModelFiles> {
        info!(repo = repo_id, "resolving model from Hugging Face Hub");

        let api = Api::new()
            .map_err(|e| Error::model(format!("Failed to initialize HF API: {e}")))?;

        let repo = api.repo(Repo::with_revision(
            repo_id.to_string(),
            RepoType::Model,
            revision.clone().unwrap_or_else(|| "main".to_string()),
        ));

        let fetch = |filename: &str| {
            repo.get(filename).map_err(|e| {
                Error::model(format!("Failed to download {filename} from {repo_id}: {e}"))
            })
        };

        Ok(ModelFiles {
            config: fetch("config.json")?,
            tokenizer: fetch("tokenizer.json")?,
            weights: fetch("model.safetensors")?,
        })
    }
}

/// Device type for inference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    /// CPU inference (always available)
    Cpu,
    /// CUDA GPU inference (if available)
    Cuda(usize),
    /// Metal (Apple Silicon)
    Metal(usize),
}

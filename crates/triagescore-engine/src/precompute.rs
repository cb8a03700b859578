//! Batch precomputation pipeline
//!
//! Scores every phrase in a fixed vocabulary once and persists the resulting
//! normalized-phrase → level mapping, so the serving path can answer common
//! phrases without touching the model. The model is loaded eagerly at the
//! start of the run; a load failure aborts the whole run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use triagescore_core::{normalize_phrase, Result};
use triagescore_classifiers::ClassifierProvider;

use crate::scorer::UrgencyScorer;

/// Default artifact path, matching what the serving backend reads.
pub const DEFAULT_OUTPUT: &str = "emergency_levels_precomputed.json";

/// Outcome of a pipeline run.
#[derive(Debug)]
pub struct PrecomputeSummary {
    /// Distinct normalized keys persisted
    pub entries: usize,

    /// Phrases that scored as unavailable (persisted as `-1`)
    pub failed: usize,

    /// Where the artifact was written
    pub output: PathBuf,
}

pub struct PrecomputePipeline {
    scorer: UrgencyScorer,
    output: PathBuf,
}

impl PrecomputePipeline {
    pub fn new(scorer: UrgencyScorer, output: impl Into<PathBuf>) -> Self {
        Self {
            scorer,
            output: output.into(),
        }
    }

    /// Run the pipeline over the vocabulary.
    ///
    /// Phrases are processed in input order; duplicate normalized keys are
    /// last-write-wins. The persisted artifact is sorted by key and replaces
    /// any prior artifact wholesale.
    pub async fn run(
        &self,
        provider: &ClassifierProvider,
        vocabulary: &[String],
    ) -> Result<PrecomputeSummary> {
        let classifier = provider.load_eager().await?;
        info!(
            classifier = classifier.name(),
            total = vocabulary.len(),
            "precomputing urgency levels"
        );

        let mut levels: BTreeMap<String, i64> = BTreeMap::new();
        let mut failed = 0usize;

        for (i, phrase) in vocabulary.iter().enumerate() {
            let outcome = self.scorer.score(phrase, Some(&classifier)).await;
            if !outcome.is_success() {
                warn!(phrase = %phrase, "phrase scored as unavailable");
                failed += 1;
            }
            levels.insert(normalize_phrase(phrase), outcome.to_wire());

            if (i + 1) % 10 == 0 {
                info!("processed {}/{}", i + 1, vocabulary.len());
            }
        }

        self.persist(&levels)?;
        info!(
            entries = levels.len(),
            failed,
            output = %self.output.display(),
            "precomputation complete"
        );

        Ok(PrecomputeSummary {
            entries: levels.len(),
            failed,
            output: self.output.clone(),
        })
    }

    /// Atomically replace the artifact: write a sibling temp file, then
    /// rename over the destination.
    fn persist(&self, levels: &BTreeMap<String, i64>) -> Result<()> {
        let json = serde_json::to_string_pretty(levels)?;

        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp = tmp_path(&self.output);
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.output)?;
        Ok(())
    }

    /// Artifact destination
    pub fn output(&self) -> &Path {
        &self.output
    }
}

fn tmp_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "precompute".into());
    name.push(".tmp");
    output.with_file_name(name)
}

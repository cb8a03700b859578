//! Mock classifiers and loaders shared by the engine integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use triagescore_classifiers::{ClassifierLoader, LabelDistribution, ZeroShotClassifier};
use triagescore_core::{Error, Result};

enum Mode {
    /// All probability mass on one label
    Pinned(String),
    /// Uniform distribution over the candidate labels
    Uniform,
    /// Pin by raw input text, falling back to a default label
    Keyed {
        map: HashMap<String, String>,
        fallback: String,
    },
    /// Every call errors
    Failing,
}

/// Deterministic mock classifier with a call counter.
pub struct MockClassifier {
    name: String,
    mode: Mode,
    call_count: AtomicU32,
}

impl MockClassifier {
    pub fn pinned(label: &str) -> Arc<Self> {
        Arc::new(Self {
            name: "mock".to_string(),
            mode: Mode::Pinned(label.to_string()),
            call_count: AtomicU32::new(0),
        })
    }

    pub fn uniform() -> Arc<Self> {
        Arc::new(Self {
            name: "mock".to_string(),
            mode: Mode::Uniform,
            call_count: AtomicU32::new(0),
        })
    }

    pub fn keyed(map: HashMap<String, String>, fallback: &str) -> Arc<Self> {
        Arc::new(Self {
            name: "mock".to_string(),
            mode: Mode::Keyed {
                map,
                fallback: fallback.to_string(),
            },
            call_count: AtomicU32::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            name: "mock".to_string(),
            mode: Mode::Failing,
            call_count: AtomicU32::new(0),
        })
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    fn pin_distribution(label: &str, candidate_labels: &[String]) -> LabelDistribution {
        let scores = candidate_labels
            .iter()
            .map(|candidate| if candidate == label { 1.0 } else { 0.0 })
            .collect();
        LabelDistribution::new(candidate_labels.to_vec(), scores)
    }
}

#[async_trait]
impl ZeroShotClassifier for MockClassifier {
    async fn classify(&self, text: &str, candidate_labels: &[String]) -> Result<LabelDistribution> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match &self.mode {
            Mode::Failing => Err(Error::classifier("simulated classification failure")),
            Mode::Pinned(label) => Ok(Self::pin_distribution(label, candidate_labels)),
            Mode::Keyed { map, fallback } => {
                let label = map.get(text).unwrap_or(fallback);
                Ok(Self::pin_distribution(label, candidate_labels))
            }
            Mode::Uniform => {
                let n = candidate_labels.len().max(1) as f32;
                Ok(LabelDistribution::new(
                    candidate_labels.to_vec(),
                    vec![1.0 / n; candidate_labels.len()],
                ))
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Loader handing out a prepared mock, or failing every attempt.
pub struct MockLoader {
    classifier: Option<Arc<MockClassifier>>,
    calls: AtomicU32,
}

impl MockLoader {
    pub fn succeeding(classifier: Arc<MockClassifier>) -> Arc<Self> {
        Arc::new(Self {
            classifier: Some(classifier),
            calls: AtomicU32::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            classifier: None,
            calls: AtomicU32::new(0),
        })
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClassifierLoader for MockLoader {
    async fn load(&self) -> Result<Arc<dyn ZeroShotClassifier>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.classifier {
            Some(classifier) => Ok(Arc::clone(classifier) as Arc<dyn ZeroShotClassifier>),
            None => Err(Error::classifier("simulated load failure")),
        }
    }
}

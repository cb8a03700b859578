//! Single-request scoring service
//!
//! Thin orchestration over the provider and the scorer for process-boundary
//! callers: one text in, one wire integer out. Positive value means success,
//! `-1` means scoring was unavailable.

use std::sync::Arc;

use triagescore_core::ScoreOutcome;
use triagescore_classifiers::ClassifierProvider;

use crate::scorer::UrgencyScorer;

pub struct ScoreService {
    provider: Arc<ClassifierProvider>,
    scorer: UrgencyScorer,
}

impl ScoreService {
    pub fn new(provider: Arc<ClassifierProvider>, scorer: UrgencyScorer) -> Self {
        Self { provider, scorer }
    }

    /// Score one problem description.
    ///
    /// Empty input short-circuits to level 1 before the model is acquired,
    /// so a trivial request never triggers a load attempt.
    pub async fn run(&self, text: &str) -> ScoreOutcome {
        if text.trim().is_empty() {
            return ScoreOutcome::minimal();
        }

        let handle = self.provider.acquire().await;
        self.scorer.score(text, handle.as_ref()).await
    }

    /// [`ScoreService::run`], collapsed to the wire integer.
    pub async fn run_wire(&self, text: &str) -> i64 {
        self.run(text).await.to_wire()
    }
}

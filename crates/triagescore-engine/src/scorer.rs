//! Weighted-expectation urgency scorer
//!
//! Collapses a classifier's label distribution into one bounded integer:
//! `sum(weight[label] * probability)` over every returned pair, rounded and
//! clamped into `[1, 100]`. This rewards confident high-urgency
//! classification and penalizes diffuse distributions proportionally; it is
//! not "take the top label's weight".

use std::sync::Arc;

use tracing::warn;
use triagescore_core::ScoreOutcome;
use triagescore_classifiers::ZeroShotClassifier;

use crate::labels::LabelWeights;

pub struct UrgencyScorer {
    weights: LabelWeights,
}

impl UrgencyScorer {
    pub fn new(weights: LabelWeights) -> Self {
        Self { weights }
    }

    /// The candidate labels handed to the classifier.
    pub fn candidate_labels(&self) -> &[String] {
        self.weights.labels()
    }

    /// Score a problem description.
    ///
    /// - Empty or whitespace-only text is "no discernible problem": level 1,
    ///   the classifier is never invoked.
    /// - An absent classifier yields `Unavailable`; callers must treat it
    ///   as a hard failure, not as minimal urgency.
    /// - Any classifier error is logged and normalized to `Unavailable`; no
    ///   raw failure crosses this boundary. Retry policy belongs to the
    ///   caller.
    pub async fn score(
        &self,
        text: &str,
        classifier: Option<&Arc<dyn ZeroShotClassifier>>,
    ) -> ScoreOutcome {
        if text.trim().is_empty() {
            return ScoreOutcome::minimal();
        }

        let Some(classifier) = classifier else {
            return ScoreOutcome::Unavailable;
        };

        match classifier.classify(text, self.candidate_labels()).await {
            Ok(distribution) => {
                let expectation: f64 = distribution
                    .iter()
                    .map(|(label, probability)| {
                        self.weights.weight(label) as f64 * probability as f64
                    })
                    .sum();
                ScoreOutcome::from_expectation(expectation)
            }
            Err(e) => {
                warn!(error = %e, "classification failed, scoring unavailable");
                ScoreOutcome::Unavailable
            }
        }
    }
}

impl Default for UrgencyScorer {
    fn default() -> Self {
        Self::new(LabelWeights::default_urgency())
    }
}

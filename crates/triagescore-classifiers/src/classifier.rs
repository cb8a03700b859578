//! Zero-shot classifier trait and common types

use async_trait::async_trait;
use triagescore_core::Result;

/// Trait for zero-shot classification backends.
///
/// Implementations assign probabilities over an arbitrary, caller-supplied
/// label set. Inference is assumed deterministic: the same text and label
/// set always produce the same distribution.
#[async_trait]
pub trait ZeroShotClassifier: Send + Sync {
    /// Classify the given text against the candidate labels.
    async fn classify(&self, text: &str, candidate_labels: &[String]) -> Result<LabelDistribution>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Probability distribution over candidate labels, produced per call.
///
/// `labels` and `scores` are parallel sequences; order is not guaranteed to
/// match the requested label order. In single-label mode scores sum to ≈1;
/// in multi-label mode each score is an independent probability.
#[derive(Debug, Clone)]
pub struct LabelDistribution {
    /// Candidate labels, highest score first
    pub labels: Vec<String>,

    /// Probability per label, parallel to `labels`
    pub scores: Vec<f32>,

    /// Model name or version that produced this distribution
    pub model: Option<String>,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl LabelDistribution {
    /// Create a new distribution, sorting label/score pairs by descending
    /// score.
    pub fn new(labels: Vec<String>, scores: Vec<f32>) -> Self {
        let mut pairs: Vec<(String, f32)> = labels.into_iter().zip(scores).collect();
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let (labels, scores) = pairs.into_iter().unzip();
        Self {
            labels,
            scores,
            model: None,
            latency_us: 0,
        }
    }

    /// Attach the producing model's name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Record call latency
    pub fn with_latency_us(mut self, latency_us: u64) -> Self {
        self.latency_us = latency_us;
        self
    }

    /// Iterate over (label, score) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }

    /// The highest-scoring label, if any
    pub fn top(&self) -> Option<(&str, f32)> {
        self.iter().next()
    }

    /// Number of labels in the distribution
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the distribution is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_sorted_by_score() {
        let dist = LabelDistribution::new(
            vec!["low".to_string(), "high".to_string(), "medium".to_string()],
            vec![0.1, 0.7, 0.2],
        );

        assert_eq!(dist.labels, vec!["high", "medium", "low"]);
        assert_eq!(dist.top(), Some(("high", 0.7)));
    }

    #[test]
    fn test_iter_pairs() {
        let dist = LabelDistribution::new(
            vec!["a".to_string(), "b".to_string()],
            vec![0.6, 0.4],
        );

        let pairs: Vec<(&str, f32)> = dist.iter().collect();
        assert_eq!(pairs, vec![("a", 0.6), ("b", 0.4)]);
    }
}

//! Lexicon-based urgency classifier
//!
//! Cue-phrase matcher used when no ML model is configured: offline runs,
//! deterministic tests, and environments without model downloads. Produces a
//! smoothed probability distribution over the requested labels from per-label
//! cue hit counts.

use std::time::Instant;

use aho_corasick::AhoCorasick;
use triagescore_core::Result;

use crate::classifier::{LabelDistribution, ZeroShotClassifier};

/// Additive smoothing so labels without cue hits keep a small probability
/// and the distribution never collapses to a single spike.
const SMOOTHING: f32 = 0.05;

pub struct LexiconClassifier {
    name: String,
    cues: Vec<(String, AhoCorasick)>,
}

impl LexiconClassifier {
    /// Create a classifier with the default urgency cue sets.
    pub fn new() -> Result<Self> {
        Self::with_cues("lexicon-urgency", default_cues())
    }

    /// Create a classifier from custom per-label cue phrases.
    pub fn with_cues(
        name: impl Into<String>,
        cues: Vec<(String, Vec<String>)>,
    ) -> Result<Self> {
        let mut matchers = Vec::with_capacity(cues.len());
        for (label, phrases) in cues {
            let matcher = AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(&phrases)
                .map_err(|e| {
                    triagescore_core::Error::classifier(format!(
                        "Failed to build cue matcher for label '{label}': {e}"
                    ))
                })?;
            matchers.push((label, matcher));
        }

        Ok(Self {
            name: name.into(),
            cues: matchers,
        })
    }

    fn hits_for(&self, label: &str, text: &str) -> f32 {
        self.cues
            .iter()
            .find(|(known, _)| known == label)
            .map(|(_, matcher)| matcher.find_iter(text).count() as f32)
            .unwrap_or(0.0)
    }
}

#[async_trait::async_trait]
impl ZeroShotClassifier for LexiconClassifier {
    async fn classify(&self, text: &str, candidate_labels: &[String]) -> Result<LabelDistribution> {
        let start = Instant::now();

        let raw: Vec<f32> = candidate_labels
            .iter()
            .map(|label| self.hits_for(label, text) + SMOOTHING)
            .collect();
        let total: f32 = raw.iter().sum();
        let scores: Vec<f32> = raw.iter().map(|hits| hits / total).collect();

        Ok(
            LabelDistribution::new(candidate_labels.to_vec(), scores)
                .with_model("lexicon-urgency")
                .with_latency_us(start.elapsed().as_micros() as u64),
        )
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn default_cues() -> Vec<(String, Vec<String>)> {
    let cue_set = |label: &str, phrases: &[&str]| {
        (
            label.to_string(),
            phrases.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
        )
    };

    vec![
        cue_set(
            "critical emergency",
            &[
                "cardiac arrest",
                "heart attack",
                "stroke",
                "not breathing",
                "unconscious",
                "unresponsive",
                "severe bleeding",
                "anaphyla",
                "choking",
                "overdose",
                "severe trauma",
            ],
        ),
        cue_set(
            "very high urgency",
            &[
                "severe",
                "chest pain",
                "difficulty breathing",
                "shortness of breath",
                "vomiting blood",
                "blood in stool",
                "seizure",
            ],
        ),
        cue_set(
            "high urgency",
            &[
                "broken bone",
                "fracture",
                "high fever",
                "migraine",
                "appendicitis",
                "kidney stone",
                "asthma attack",
                "pneumonia",
                "burn",
            ],
        ),
        cue_set(
            "medium urgency",
            &[
                "fever",
                "infection",
                "persistent",
                "dehydration",
                "food poisoning",
                "rash",
                "sprain",
                "pain",
            ],
        ),
        cue_set(
            "low urgency",
            &[
                "cough",
                "cold symptoms",
                "sore throat",
                "runny nose",
                "headache",
                "diarrhea",
                "constipation",
                "heartburn",
                "bruise",
                "insect bite",
            ],
        ),
        cue_set(
            "very low urgency",
            &[
                "checkup",
                "check",
                "exam",
                "vaccination",
                "immunization",
                "refill",
                "screening",
                "preventive",
                "tiredness",
                "fatigue",
                "mild",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urgency_labels() -> Vec<String> {
        [
            "very low urgency",
            "low urgency",
            "medium urgency",
            "high urgency",
            "very high urgency",
            "critical emergency",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[tokio::test]
    async fn test_critical_phrase_ranks_critical_highest() {
        let classifier = LexiconClassifier::new().unwrap();
        let dist = classifier
            .classify("patient in cardiac arrest, not breathing", &urgency_labels())
            .await
            .unwrap();

        assert_eq!(dist.top().unwrap().0, "critical emergency");
    }

    #[tokio::test]
    async fn test_routine_phrase_ranks_low() {
        let classifier = LexiconClassifier::new().unwrap();
        let dist = classifier
            .classify("routine annual checkup", &urgency_labels())
            .await
            .unwrap();

        assert_eq!(dist.top().unwrap().0, "very low urgency");
    }

    #[tokio::test]
    async fn test_distribution_sums_to_one() {
        let classifier = LexiconClassifier::new().unwrap();
        let dist = classifier
            .classify("no cues here whatsoever", &urgency_labels())
            .await
            .unwrap();

        let total: f32 = dist.scores.iter().sum();
        assert!((total - 1.0).abs() < 1e-5);
        assert_eq!(dist.len(), 6);
    }

    #[tokio::test]
    async fn test_unknown_label_gets_smoothing_mass_only() {
        let classifier = LexiconClassifier::new().unwrap();
        let labels = vec!["critical emergency".to_string(), "unheard of".to_string()];
        let dist = classifier.classify("heart attack", &labels).await.unwrap();

        assert_eq!(dist.top().unwrap().0, "critical emergency");
    }

    #[tokio::test]
    async fn test_case_insensitive_matching() {
        let classifier = LexiconClassifier::new().unwrap();
        let dist = classifier
            .classify("HEART ATTACK", &urgency_labels())
            .await
            .unwrap();

        assert_eq!(dist.top().unwrap().0, "critical emergency");
    }
}

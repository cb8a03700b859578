//! Scorer and single-request service behavior

mod common;

use std::sync::Arc;

use common::{MockClassifier, MockLoader};
use triagescore_classifiers::{ClassifierProvider, ZeroShotClassifier};
use triagescore_core::ScoreOutcome;
use triagescore_engine::{ScoreService, UrgencyScorer};

fn as_classifier(mock: &Arc<MockClassifier>) -> Arc<dyn ZeroShotClassifier> {
    Arc::clone(mock) as Arc<dyn ZeroShotClassifier>
}

#[tokio::test]
async fn empty_input_scores_one_without_invoking_classifier() {
    let mock = MockClassifier::pinned("critical emergency");
    let classifier = as_classifier(&mock);
    let scorer = UrgencyScorer::default();

    for text in ["", "   ", "\t\n "] {
        let outcome = scorer.score(text, Some(&classifier)).await;
        assert_eq!(outcome, ScoreOutcome::Level(1));
    }
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn absent_classifier_yields_sentinel() {
    let scorer = UrgencyScorer::default();

    let outcome = scorer.score("severe chest pain", None).await;
    assert_eq!(outcome, ScoreOutcome::Unavailable);
    assert_eq!(outcome.to_wire(), -1);
}

#[tokio::test]
async fn all_mass_on_critical_scores_98() {
    let mock = MockClassifier::pinned("critical emergency");
    let classifier = as_classifier(&mock);
    let scorer = UrgencyScorer::default();

    let outcome = scorer.score("cardiac arrest", Some(&classifier)).await;
    assert_eq!(outcome, ScoreOutcome::Level(98));
}

#[tokio::test]
async fn uniform_distribution_scores_58() {
    // round((10 + 30 + 50 + 70 + 90 + 98) / 6) = 58
    let mock = MockClassifier::uniform();
    let classifier = as_classifier(&mock);
    let scorer = UrgencyScorer::default();

    let outcome = scorer.score("some complaint", Some(&classifier)).await;
    assert_eq!(outcome, ScoreOutcome::Level(58));
}

#[tokio::test]
async fn every_pinned_label_scores_within_bounds() {
    let scorer = UrgencyScorer::default();

    for label in scorer.candidate_labels().to_vec() {
        let mock = MockClassifier::pinned(&label);
        let classifier = as_classifier(&mock);
        let outcome = scorer.score("problem description", Some(&classifier)).await;

        let level = outcome.level().expect("available classifier must score");
        assert!((1..=100).contains(&level), "label '{label}' gave {level}");
    }
}

#[tokio::test]
async fn pinned_low_label_scores_its_weight() {
    let mock = MockClassifier::pinned("very low urgency");
    let classifier = as_classifier(&mock);
    let scorer = UrgencyScorer::default();

    let outcome = scorer.score("tiredness", Some(&classifier)).await;
    assert_eq!(outcome, ScoreOutcome::Level(10));
}

#[tokio::test]
async fn classification_failure_yields_sentinel_for_any_input() {
    let mock = MockClassifier::failing();
    let classifier = as_classifier(&mock);
    let scorer = UrgencyScorer::default();

    for text in ["headache", "severe bleeding", "x"] {
        let outcome = scorer.score(text, Some(&classifier)).await;
        assert_eq!(outcome, ScoreOutcome::Unavailable);
    }
}

#[tokio::test]
async fn service_returns_wire_score_on_success() {
    let mock = MockClassifier::pinned("critical emergency");
    let loader = MockLoader::succeeding(Arc::clone(&mock));
    let provider = Arc::new(ClassifierProvider::new(loader));
    let service = ScoreService::new(provider, UrgencyScorer::default());

    let wire = service.run_wire("not breathing").await;
    assert_eq!(wire, 98);
}

#[tokio::test]
async fn service_returns_sentinel_when_load_fails() {
    let loader = MockLoader::failing();
    let provider = Arc::new(ClassifierProvider::new(loader));
    let service = ScoreService::new(provider, UrgencyScorer::default());

    let wire = service.run_wire("severe chest pain").await;
    assert_eq!(wire, -1);
}

#[tokio::test]
async fn service_short_circuits_empty_input_before_acquiring() {
    let loader = MockLoader::failing();
    let provider = Arc::new(ClassifierProvider::new(Arc::clone(&loader) as _));
    let service = ScoreService::new(provider, UrgencyScorer::default());

    let wire = service.run_wire("   ").await;
    assert_eq!(wire, 1);
    assert_eq!(loader.calls(), 0);
}

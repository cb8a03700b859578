//! Triagescore Classifiers
//!
//! Zero-shot classification backends for urgency scoring, plus the
//! cooldown-guarded provider that owns the at-most-one live model handle.
//!
//! Two backends are available:
//! - NLI zero-shot via a Candle BERT MNLI checkpoint (`ml-models` feature)
//! - A cue-phrase lexicon for offline runs and deterministic tests

pub mod classifier;
pub mod config;
pub mod lexicon;
pub mod model_loader;
pub mod nli;
pub mod provider;

pub use classifier::{LabelDistribution, ZeroShotClassifier};
pub use config::{BackendSpec, ClassifierSettings, ConfiguredLoader, DeviceSpec};
pub use lexicon::LexiconClassifier;
pub use model_loader::{DeviceType, ModelFiles, ModelSource};
pub use nli::{NliOptions, DEFAULT_HYPOTHESIS_TEMPLATE};
#[cfg(feature = "ml-models")]
pub use nli::NliZeroShotClassifier;
pub use provider::{
    ClassifierLoader, ClassifierProvider, Clock, SystemClock, DEFAULT_COOLDOWN,
    DEFAULT_LOAD_TIMEOUT,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{LabelDistribution, ZeroShotClassifier};
    pub use crate::config::ClassifierSettings;
    pub use crate::lexicon::LexiconClassifier;
    pub use crate::provider::{ClassifierLoader, ClassifierProvider};
}

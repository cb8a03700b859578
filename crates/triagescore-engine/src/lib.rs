//! Triagescore Engine
//!
//! Turns a zero-shot classifier's label distribution into a bounded urgency
//! level:
//! - `LabelWeights`: the fixed label/weight table
//! - `UrgencyScorer`: weighted-expectation aggregation, clamped to [1, 100]
//! - `ScoreService`: single-request orchestration over the provider
//! - `PrecomputePipeline`: batch scoring of a fixed vocabulary into a
//!   persisted lookup artifact

pub mod labels;
pub mod precompute;
pub mod scorer;
pub mod service;
pub mod vocabulary;

pub use labels::{LabelWeightSpec, LabelWeights};
pub use precompute::{PrecomputePipeline, PrecomputeSummary, DEFAULT_OUTPUT};
pub use scorer::UrgencyScorer;
pub use service::ScoreService;
pub use vocabulary::{default_vocabulary, load_vocabulary};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::labels::LabelWeights;
    pub use crate::precompute::PrecomputePipeline;
    pub use crate::scorer::UrgencyScorer;
    pub use crate::service::ScoreService;
}

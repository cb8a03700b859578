//! Triagescore Core
//!
//! Core types shared across triagescore components:
//! - Error types and result handling
//! - Urgency score domain types and the `-1` sentinel wire contract
//! - Phrase normalization for the precomputed cache

pub mod error;
pub mod score;

pub use error::{Error, Result};
pub use score::{normalize_phrase, ScoreOutcome, MAX_LEVEL, MIN_LEVEL, UNAVAILABLE_WIRE};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::score::{normalize_phrase, ScoreOutcome};
}

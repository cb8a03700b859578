//! Urgency score domain types and the wire contract
//!
//! Scores live in `[1, 100]`. The wire format used by the calling backend is
//! a raw integer where `-1` means "scoring unavailable", distinct from
//! level 1, which means "no discernible problem". Callers must treat a
//! non-positive wire value as a hard failure.

use std::fmt;

/// Minimum valid urgency level. Empty input maps here, never to 0.
pub const MIN_LEVEL: u8 = 1;

/// Maximum valid urgency level.
pub const MAX_LEVEL: u8 = 100;

/// Wire sentinel for "scoring unavailable".
pub const UNAVAILABLE_WIRE: i64 = -1;

/// Outcome of a scoring call.
///
/// Internally the failure case is a typed variant; it collapses to the `-1`
/// sentinel only at the wire boundary ([`ScoreOutcome::to_wire`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// A computed urgency level in `[1, 100]`.
    Level(u8),
    /// The classifier was absent or the classification call failed.
    Unavailable,
}

impl ScoreOutcome {
    /// Round a weighted-expectation sum to the nearest integer and clamp
    /// into `[1, 100]`.
    pub fn from_expectation(raw: f64) -> Self {
        let rounded = raw.round();
        let clamped = rounded.clamp(MIN_LEVEL as f64, MAX_LEVEL as f64);
        Self::Level(clamped as u8)
    }

    /// The minimum level, used for empty input.
    pub fn minimal() -> Self {
        Self::Level(MIN_LEVEL)
    }

    /// Wire integer consumed by the calling backend: the level itself, or
    /// `-1` when scoring was unavailable.
    pub fn to_wire(self) -> i64 {
        match self {
            Self::Level(level) => level as i64,
            Self::Unavailable => UNAVAILABLE_WIRE,
        }
    }

    /// Whether this outcome maps to process-level success (positive wire
    /// value).
    pub fn is_success(self) -> bool {
        matches!(self, Self::Level(_))
    }

    /// The level, if one was computed.
    pub fn level(self) -> Option<u8> {
        match self {
            Self::Level(level) => Some(level),
            Self::Unavailable => None,
        }
    }
}

impl fmt::Display for ScoreOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_wire())
    }
}

/// Normalize a vocabulary phrase into its cache key form: whitespace-trimmed
/// and case-folded. Cache lookups are exact, no partial matching.
pub fn normalize_phrase(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_expectation_rounds() {
        assert_eq!(ScoreOutcome::from_expectation(57.9), ScoreOutcome::Level(58));
        assert_eq!(ScoreOutcome::from_expectation(58.4), ScoreOutcome::Level(58));
    }

    #[test]
    fn test_from_expectation_clamps_low() {
        assert_eq!(ScoreOutcome::from_expectation(0.2), ScoreOutcome::Level(1));
        assert_eq!(ScoreOutcome::from_expectation(-3.0), ScoreOutcome::Level(1));
    }

    #[test]
    fn test_from_expectation_clamps_high() {
        assert_eq!(
            ScoreOutcome::from_expectation(140.0),
            ScoreOutcome::Level(100)
        );
    }

    #[test]
    fn test_wire_contract() {
        assert_eq!(ScoreOutcome::Level(98).to_wire(), 98);
        assert_eq!(ScoreOutcome::Unavailable.to_wire(), -1);
        assert!(ScoreOutcome::Level(1).is_success());
        assert!(!ScoreOutcome::Unavailable.is_success());
    }

    #[test]
    fn test_normalize_phrase() {
        assert_eq!(normalize_phrase("  Heart Attack  "), "heart attack");
        assert_eq!(normalize_phrase("STROKE"), "stroke");
        assert_eq!(normalize_phrase(""), "");
    }
}

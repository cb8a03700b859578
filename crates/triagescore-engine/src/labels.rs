//! Label weight table
//!
//! A closed set of urgency labels with integer weights in `[0, 100]`,
//! immutable after construction and shared read-only by all callers. The
//! weighted-expectation scorer multiplies each label's weight by its
//! classified probability.

use serde::{Deserialize, Serialize};
use triagescore_core::{Error, Result};

/// One label/weight pair as it appears in config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelWeightSpec {
    pub label: String,
    pub weight: u32,
}

/// Immutable label → weight mapping. Unknown labels weigh zero.
#[derive(Debug, Clone)]
pub struct LabelWeights {
    entries: Vec<(String, u32)>,
    labels: Vec<String>,
}

impl LabelWeights {
    /// Build a weight table, validating that it is non-empty and every
    /// weight lies in `[0, 100]`.
    pub fn new(entries: Vec<(String, u32)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::config("label weight table must not be empty"));
        }
        for (label, weight) in &entries {
            if *weight > 100 {
                return Err(Error::config(format!(
                    "weight {weight} for label '{label}' is outside [0, 100]"
                )));
            }
        }

        let labels = entries.iter().map(|(label, _)| label.clone()).collect();
        Ok(Self { entries, labels })
    }

    /// Build from config specs.
    pub fn from_specs(specs: &[LabelWeightSpec]) -> Result<Self> {
        Self::new(
            specs
                .iter()
                .map(|spec| (spec.label.clone(), spec.weight))
                .collect(),
        )
    }

    /// The canonical six-tier urgency table.
    pub fn default_urgency() -> Self {
        Self::new(vec![
            ("very low urgency".to_string(), 10),
            ("low urgency".to_string(), 30),
            ("medium urgency".to_string(), 50),
            ("high urgency".to_string(), 70),
            ("very high urgency".to_string(), 90),
            ("critical emergency".to_string(), 98),
        ])
        .expect("default urgency table is valid")
    }

    /// The label set, in table order. These are the candidate labels handed
    /// to the classifier.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Weight for a label; labels outside the table weigh zero.
    pub fn weight(&self, label: &str) -> u32 {
        self.entries
            .iter()
            .find(|(known, _)| known == label)
            .map(|(_, weight)| *weight)
            .unwrap_or(0)
    }

    /// Number of labels in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LabelWeights {
    fn default() -> Self {
        Self::default_urgency()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let weights = LabelWeights::default_urgency();
        assert_eq!(weights.len(), 6);
        assert_eq!(weights.weight("critical emergency"), 98);
        assert_eq!(weights.weight("very low urgency"), 10);
    }

    #[test]
    fn test_unknown_label_weighs_zero() {
        let weights = LabelWeights::default_urgency();
        assert_eq!(weights.weight("no such label"), 0);
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(LabelWeights::new(vec![]).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_weight() {
        let result = LabelWeights::new(vec![("too heavy".to_string(), 101)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_labels_preserve_order() {
        let weights = LabelWeights::new(vec![
            ("low".to_string(), 10),
            ("high".to_string(), 90),
        ])
        .unwrap();
        assert_eq!(weights.labels(), &["low".to_string(), "high".to_string()]);
    }
}

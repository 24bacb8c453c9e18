//! Tuning knobs for the fuzzy matcher

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Relative importance of each indexed field.
///
/// Weights are normalized to sum to one when the index is built. A weight
/// of zero removes the field from the index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub name: f64,
    pub id: f64,
    pub tags: f64,
    pub description: f64,
    pub category: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 2.0,
            id: 2.0,
            tags: 1.5,
            description: 1.0,
            category: 1.0,
        }
    }
}

impl FieldWeights {
    fn as_array(&self) -> [(&'static str, f64); 5] {
        [
            ("name", self.name),
            ("id", self.id),
            ("tags", self.tags),
            ("description", self.description),
            ("category", self.category),
        ]
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.as_array().iter().map(|(_, w)| w).sum()
    }
}

/// Matcher configuration.
///
/// The defaults let one typo through in words of four letters or more and
/// ignore matches that span a single character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Highest score (0 = perfect) still counted as a match.
    pub threshold: f64,
    /// Shortest matched fragment, in characters.
    pub min_match_char_length: usize,
    /// Character position where matches are expected to start.
    pub location: usize,
    /// How far from `location` a match may drift before its score reaches 1.
    pub distance: usize,
    /// Score matches without regard to where they start.
    pub ignore_location: bool,
    pub weights: FieldWeights,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            min_match_char_length: 2,
            location: 0,
            distance: 100,
            ignore_location: false,
            weights: FieldWeights::default(),
        }
    }
}

impl SearchOptions {
    /// Reject option sets the matcher cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::invalid_options(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if self.min_match_char_length == 0 {
            return Err(Error::invalid_options(
                "min_match_char_length must be at least 1",
            ));
        }
        for (field, weight) in self.weights.as_array() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::invalid_options(format!(
                    "weight for '{}' must be a non-negative number, got {}",
                    field, weight
                )));
            }
        }
        if self.weights.total() <= 0.0 {
            return Err(Error::invalid_options("at least one field weight must be positive"));
        }
        Ok(())
    }
}

//! Configuration for the garbling engine.

use serde::{Deserialize, Serialize};
use sp_lexicon::FineTag;

use crate::error::{GarbleError, GarbleResult};

/// Default probability that an attempted guess produces a word at all
/// (rather than the unknown-word marker).
pub const DEFAULT_CHANCE_OF_GUESSING: f64 = 0.75;

/// Default skill floor: an unskilled reader's best case.
pub const DEFAULT_MIN_CHANCE: f64 = 0.25;

/// Configuration for a [`crate::Garbler`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarbleConfig {
    /// Probability that an attempted guess yields a candidate instead of
    /// the unknown-word marker.
    pub chance_of_guessing: f64,
    /// Floor of the skill scale; see [`crate::skill_level_with_floor`].
    pub min_chance: f64,
    /// When set, replaced words render as `[possibly '<word>']`.
    pub annotate_guesses: bool,
    /// Sentence punctuation: these tokens are never garbled and spacing
    /// before them is repaired during reassembly.
    pub punctuation: Vec<char>,
    /// Tags treated as "plural-like" during re-inflection. Only the plural
    /// noun tags in this set actually trigger pluralization.
    pub plural_tags: Vec<FineTag>,
}

impl Default for GarbleConfig {
    fn default() -> Self {
        Self {
            chance_of_guessing: DEFAULT_CHANCE_OF_GUESSING,
            min_chance: DEFAULT_MIN_CHANCE,
            annotate_guesses: false,
            punctuation: vec!['.', ',', '!', '?'],
            plural_tags: vec![
                FineTag::NounPlural,
                FineTag::ProperNounPlural,
                FineTag::AdjectiveSuperlative,
                FineTag::AdverbSuperlative,
            ],
        }
    }
}

impl GarbleConfig {
    /// Set the chance that an attempted guess yields a candidate.
    pub fn with_chance_of_guessing(mut self, chance: f64) -> Self {
        self.chance_of_guessing = chance;
        self
    }

    /// Set the skill floor.
    pub fn with_min_chance(mut self, floor: f64) -> Self {
        self.min_chance = floor;
        self
    }

    /// Enable or disable `[possibly '...']` annotations on changed words.
    pub fn with_annotations(mut self, on: bool) -> Self {
        self.annotate_guesses = on;
        self
    }

    /// Check that all probabilities lie in [0, 1].
    pub fn validate(&self) -> GarbleResult<()> {
        if !(0.0..=1.0).contains(&self.chance_of_guessing) {
            return Err(GarbleError::InvalidConfig(format!(
                "chance_of_guessing must be in [0, 1], got {}",
                self.chance_of_guessing
            )));
        }
        if !(0.0..=1.0).contains(&self.min_chance) {
            return Err(GarbleError::InvalidConfig(format!(
                "min_chance must be in [0, 1], got {}",
                self.min_chance
            )));
        }
        Ok(())
    }
}

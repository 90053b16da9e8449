//! Document garbling: tokenization, the per-document replacement memo,
//! and text reassembly.

use std::collections::HashMap;

use rand::Rng;
use rand::rngs::StdRng;
use sp_lexicon::{FineTag, LexicalResource};

use crate::cache::SynsetCache;
use crate::config::GarbleConfig;
use crate::error::GarbleResult;
use crate::skill::skill_level_with_floor;
use crate::word::{Decision, UNKNOWN_MARKER, guess, match_case, transform_word};

/// Garbles documents through the lens of a reader's skill level.
///
/// Owns the lexical resource and a process-long sense cache. Each call to
/// [`Garbler::garble`] opens a fresh replacement memo, so decisions are
/// consistent within a document and independent across documents.
#[derive(Debug)]
pub struct Garbler<L: LexicalResource> {
    lexicon: L,
    cache: SynsetCache,
    config: GarbleConfig,
}

impl<L: LexicalResource> Garbler<L> {
    /// Create a garbler with the default configuration. Warms up the
    /// lexical resource once.
    pub fn new(lexicon: L) -> Self {
        lexicon.warm_up();
        Self {
            lexicon,
            cache: SynsetCache::new(),
            config: GarbleConfig::default(),
        }
    }

    /// Create a garbler with a custom configuration, validating it first.
    pub fn with_config(lexicon: L, config: GarbleConfig) -> GarbleResult<Self> {
        config.validate()?;
        lexicon.warm_up();
        Ok(Self {
            lexicon,
            cache: SynsetCache::new(),
            config,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &GarbleConfig {
        &self.config
    }

    /// Convert a raw check result into a skill level using the configured
    /// floor.
    pub fn skill_level(&self, roll: f64, difficulty: f64) -> f64 {
        skill_level_with_floor(roll, difficulty, self.config.min_chance)
    }

    /// Garble a document.
    ///
    /// `skill_level` is clamped to [0, 1]; 1.0 reproduces the input
    /// exactly. Words containing any of `specific_terms`
    /// (case-insensitive substring) garble more readily: `1 - skill/2`
    /// instead of `1 - skill`. All randomness comes from `rng`, so a
    /// seeded generator makes the transform reproducible.
    pub fn garble(
        &mut self,
        text: &str,
        skill_level: f64,
        specific_terms: &[String],
        rng: &mut StdRng,
    ) -> String {
        let skill_level = skill_level.clamp(0.0, 1.0);
        let mut memo: HashMap<String, Decision> = HashMap::new();
        let mut lines = Vec::new();
        for line in text.split('\n') {
            let tokens = self.lexicon.tokenize(line);
            let tags = self.lexicon.tag(&tokens);
            let rendered: Vec<String> = tokens
                .iter()
                .zip(tags)
                .map(|(token, tag)| {
                    self.render_token(token, tag, skill_level, specific_terms, &mut memo, rng)
                })
                .collect();
            lines.push(self.assemble_line(&rendered));
        }
        lines.join("\n")
    }

    /// Decide and render a single token, consulting and updating the memo.
    fn render_token(
        &mut self,
        token: &str,
        tag: FineTag,
        skill_level: f64,
        specific_terms: &[String],
        memo: &mut HashMap<String, Decision>,
        rng: &mut StdRng,
    ) -> String {
        let lower = token.to_lowercase();

        // Eligibility gate: punctuation, proper nouns, stop words, and
        // untaggable tokens pass through verbatim without touching the RNG.
        let ineligible = self.is_punctuation_token(token)
            || tag.is_proper_noun()
            || self.lexicon.is_stop_word(&lower);
        let Some(pos) = tag.coarse() else {
            memo.insert(lower, Decision::Kept);
            return token.to_string();
        };
        if ineligible {
            memo.insert(lower, Decision::Kept);
            return token.to_string();
        }

        let decision = match memo.get(&lower) {
            Some(decision) => decision.clone(),
            None => {
                let emphasized = specific_terms
                    .iter()
                    .any(|term| lower.contains(&term.to_lowercase()));
                let prob = if emphasized {
                    1.0 - skill_level / 2.0
                } else {
                    1.0 - skill_level
                };
                let decision = if rng.random::<f64>() < prob {
                    match guess(
                        &mut self.cache,
                        &self.lexicon,
                        &self.config,
                        &lower,
                        pos,
                        skill_level,
                        rng,
                    ) {
                        Some(replacement) => Decision::Replaced(replacement),
                        None => Decision::Unknown,
                    }
                } else {
                    Decision::Kept
                };
                memo.insert(lower.clone(), decision.clone());
                decision
            }
        };

        match decision {
            Decision::Kept => token.to_string(),
            Decision::Unknown => UNKNOWN_MARKER.to_string(),
            Decision::Replaced(replacement) => {
                let changed = replacement != lower;
                let inflected = transform_word(&self.lexicon, &self.config, &replacement, tag);
                let cased = match_case(token, inflected);
                if self.config.annotate_guesses && changed {
                    format!("[possibly '{cased}']")
                } else {
                    cased
                }
            }
        }
    }

    /// Join renditions with single spaces, then glue sentence punctuation
    /// back onto the preceding word.
    fn assemble_line(&self, rendered: &[String]) -> String {
        let mut line = rendered.join(" ");
        for mark in &self.config.punctuation {
            line = line.replace(&format!(" {mark}"), &mark.to_string());
        }
        line
    }

    fn is_punctuation_token(&self, token: &str) -> bool {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.config.punctuation.contains(&c),
            _ => false,
        }
    }
}

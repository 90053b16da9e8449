//! Candidate pools for replacement words.
//!
//! Two modes: a *faithful* pool (synonyms, direct hypernyms, direct
//! hyponyms — what a reader in the right ballpark would land on) and a
//! *misleading* pool (antonyms, falling back to random corpus words of the
//! same part of speech). Pool entries are normalized lowercase-ish strings;
//! the word garbler applies the final lowercase-only filter.

use std::collections::BTreeSet;

use rand::Rng;
use rand::rngs::StdRng;
use sp_lexicon::{CoarsePos, LexicalResource, token};

use crate::cache::SynsetCache;

/// Number of corpus words sampled when a misleading pool has no antonyms.
const CORPUS_SAMPLE_SIZE: usize = 6;

/// Normalize a lemma name: underscores become spaces, newlines are removed.
fn normalize(name: &str) -> String {
    name.replace('_', " ").replace('\n', "")
}

/// The faithful candidate pool for (word, pos): every lemma of every sense,
/// plus direct hypernym and hyponym lemmas. Proper-noun-like (title-case)
/// entries are excluded. Sorted and deduplicated so uniform sampling is
/// deterministic under a seeded RNG.
pub fn faithful_pool(
    cache: &mut SynsetCache,
    lexicon: &dyn LexicalResource,
    word: &str,
    pos: CoarsePos,
) -> Vec<String> {
    let mut pool = BTreeSet::new();
    for sense in cache.senses(lexicon, word, pos) {
        for lemma in &sense.lemmas {
            if !token::is_title_case(&lemma.name) {
                pool.insert(normalize(&lemma.name));
            }
        }
        for related in sense.hypernyms.iter().chain(&sense.hyponyms) {
            if !token::is_title_case(related) {
                pool.insert(normalize(related));
            }
        }
    }
    pool.into_iter().collect()
}

/// The misleading candidate pool for (word, pos): all antonym names across
/// every lemma of every sense. When no antonyms exist, falls back to
/// sampling the background corpus list for `pos` uniformly with
/// replacement; a POS with no corpus list substitutes the noun list.
///
/// Duplicates are kept, so repeated antonyms carry proportionally more
/// weight when the garbler samples the pool.
pub fn misleading_pool(
    cache: &mut SynsetCache,
    lexicon: &dyn LexicalResource,
    word: &str,
    pos: CoarsePos,
    rng: &mut StdRng,
) -> Vec<String> {
    let mut pool = Vec::new();
    for sense in cache.senses(lexicon, word, pos) {
        for lemma in &sense.lemmas {
            for antonym in &lemma.antonyms {
                pool.push(normalize(antonym));
            }
        }
    }

    if pool.is_empty() {
        let corpus = lexicon.corpus_words(pos).or_else(|| {
            tracing::debug!(%word, %pos, "no corpus list for POS, substituting nouns");
            lexicon.corpus_words(CoarsePos::Noun)
        });
        if let Some(list) = corpus {
            if !list.is_empty() {
                pool = (0..CORPUS_SAMPLE_SIZE)
                    .map(|_| list[rng.random_range(0..list.len())].clone())
                    .collect();
            }
        }
    }

    pool
}

/// Keep only candidates already equal to their lowercase form. Drops
/// proper nouns and mixed-case phrases that slipped through normalization;
/// lowercase multi-word phrases survive.
pub fn filter_lowercase(pool: Vec<String>) -> Vec<String> {
    pool.into_iter()
        .filter(|c| c.to_lowercase() == *c)
        .collect()
}

/// Weight each word by its number of senses for `pos`, normalized to sum
/// to `multiplier`. More senses means a more central, more commonly known
/// word. Words with no senses at all weigh zero; an input where nothing
/// has senses yields all zeros.
///
/// This is a selection utility for callers that want frequency-shaped
/// sampling; the default guess path samples pools uniformly.
pub fn sense_weights(
    cache: &mut SynsetCache,
    lexicon: &dyn LexicalResource,
    words: &[String],
    pos: CoarsePos,
    multiplier: f64,
) -> Vec<f64> {
    if words.is_empty() {
        return Vec::new();
    }
    let counts: Vec<usize> = words
        .iter()
        .map(|w| cache.senses(lexicon, w, pos).len())
        .collect();
    let total: usize = counts.iter().sum();
    if total == 0 {
        return vec![0.0; words.len()];
    }
    counts
        .iter()
        .map(|&c| c as f64 * multiplier / total as f64)
        .collect()
}

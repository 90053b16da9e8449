//! Per-word garbling: the guess, the memoized decision, and morphological
//! repair of the replacement.

use rand::Rng;
use rand::rngs::StdRng;
use sp_lexicon::{CoarsePos, FineTag, LexicalResource, VerbForm, token};

use crate::cache::SynsetCache;
use crate::candidates::{faithful_pool, filter_lowercase, misleading_pool};
use crate::config::GarbleConfig;

/// The memoized outcome for one source word within a document pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The word survived: rendered verbatim.
    Kept,
    /// The word was replaced by this (lowercase, pre-inflection) candidate.
    Replaced(String),
    /// No guess was available: rendered as the unknown-word marker.
    Unknown,
}

/// The literal rendering of [`Decision::Unknown`].
pub const UNKNOWN_MARKER: &str = "[unknown word]";

/// Attempt an educated guess for a word the reader failed to comprehend.
///
/// With probability `1 - skill_level` the guess draws from the misleading
/// pool (antonyms or random corpus words); otherwise from the faithful pool
/// (synonyms, hypernyms, hyponyms). An empty pool, or failing the
/// chance-of-guessing draw, yields `None`: the reader has no guess at all.
pub fn guess(
    cache: &mut SynsetCache,
    lexicon: &dyn LexicalResource,
    config: &GarbleConfig,
    word: &str,
    pos: CoarsePos,
    skill_level: f64,
    rng: &mut StdRng,
) -> Option<String> {
    let word = word.to_lowercase();
    let misleading_chance = 1.0 - skill_level;
    let pool = if rng.random::<f64>() < misleading_chance {
        let pool = misleading_pool(cache, lexicon, &word, pos, rng);
        if pool.is_empty() {
            tracing::debug!(%word, %pos, "no misleading candidates");
        }
        pool
    } else {
        let pool = faithful_pool(cache, lexicon, &word, pos);
        if pool.is_empty() {
            tracing::debug!(%word, %pos, "no faithful candidates");
        }
        pool
    };

    let pool = filter_lowercase(pool);
    // Short-circuit: an empty pool consumes no chance-of-guessing draw.
    if pool.is_empty() || rng.random::<f64>() >= config.chance_of_guessing {
        return None;
    }
    Some(pool[rng.random_range(0..pool.len())].clone())
}

/// Re-inflect a replacement word to the grammatical form of the original
/// token's tag.
///
/// Verb tags conjugate; plural noun tags pluralize. Superlative
/// adjective/adverb tags sit in the configured plural-like bucket but pass
/// through unchanged (long-standing behavior; kept as-is). Multi-word
/// phrases are never inflected. A failed conjugation leaves the word
/// unchanged rather than dropping it.
pub fn transform_word(
    lexicon: &dyn LexicalResource,
    config: &GarbleConfig,
    word: &str,
    tag: FineTag,
) -> String {
    if word.split_whitespace().count() > 1 {
        return word.to_string();
    }
    let conjugate = |form: VerbForm| {
        lexicon
            .conjugate(word, form)
            .unwrap_or_else(|| word.to_string())
    };
    match tag {
        FineTag::VerbBase => word.to_string(),
        FineTag::VerbPast => conjugate(VerbForm::Past),
        FineTag::VerbGerund => conjugate(VerbForm::PresentParticiple),
        FineTag::VerbPastParticiple => conjugate(VerbForm::PastParticiple),
        FineTag::VerbPresent => conjugate(VerbForm::FirstSingular),
        FineTag::VerbThirdPerson => conjugate(VerbForm::ThirdSingular),
        tag if config.plural_tags.contains(&tag) && tag.is_plural_noun() => plural(lexicon, word),
        _ => word.to_string(),
    }
}

/// Pluralize a word only when the round trip back through `singularize` is
/// clean; irregular forms that would mangle are returned unchanged.
pub fn plural(lexicon: &dyn LexicalResource, word: &str) -> String {
    let pluralized = lexicon.pluralize(word);
    if lexicon.singularize(&pluralized) == word {
        pluralized
    } else {
        word.to_string()
    }
}

/// Title-case the rendition when the original token was title-case.
pub fn match_case(original: &str, rendition: String) -> String {
    if token::is_title_case(original) {
        token::to_title_case(&rendition)
    } else {
        rendition
    }
}

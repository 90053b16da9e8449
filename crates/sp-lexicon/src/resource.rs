//! The lexical resource seam.
//!
//! The garbling engine does not ship a dictionary. It consumes anything that
//! can tag tokens, answer stop-word membership, enumerate word senses with
//! their related terms, offer a background corpus for fallback sampling, and
//! perform basic morphology. [`crate::TableLexicon`] is the bundled
//! table-driven implementation; adapters over real taggers and wordnets
//! implement the same trait.

use serde::{Deserialize, Serialize};

use crate::pos::{CoarsePos, FineTag, VerbForm};
use crate::token;

/// One lemma of a sense, with its antonym lemma names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lemma {
    /// The lemma name as stored in the resource. May contain underscores
    /// (multi-word entries) and capitals (proper-noun-like entries).
    pub name: String,
    /// Antonym lemma names, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<String>,
}

impl Lemma {
    /// A lemma with no antonyms.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            antonyms: Vec::new(),
        }
    }
}

/// One sense (synset) of a word: interchangeable lemmas plus the lemma
/// names of the directly related more-general and more-specific senses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    /// Lemmas belonging to this sense.
    pub lemmas: Vec<Lemma>,
    /// Lemma names of the direct hypernym senses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hypernyms: Vec<String>,
    /// Lemma names of the direct hyponym senses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hyponyms: Vec<String>,
}

/// A pluggable lexical resource: tagger, stop words, word senses, background
/// corpus, and morphology.
pub trait LexicalResource {
    /// One-time initialization hook, called once when a garbler takes
    /// ownership of the resource. Adapters over morphology backends that
    /// fail on their first call can absorb that failure here; the default
    /// does nothing.
    fn warm_up(&self) {}

    /// Split a line into word and punctuation tokens.
    fn tokenize(&self, line: &str) -> Vec<String> {
        token::tokenize(line)
    }

    /// Assign a fine-grained tag to each token. Must return one tag per
    /// token; unknown tokens tag as [`FineTag::Other`].
    fn tag(&self, tokens: &[String]) -> Vec<FineTag>;

    /// Whether a (lowercased) word is a stop word.
    fn is_stop_word(&self, word: &str) -> bool;

    /// All senses of a word for the given coarse POS. Empty when the word
    /// is unknown — never an error.
    fn senses(&self, word: &str, pos: CoarsePos) -> Vec<Sense>;

    /// Background corpus word list for a coarse POS, used for fallback
    /// sampling of misleading candidates. `None` when the resource has no
    /// list for that POS.
    fn corpus_words(&self, pos: CoarsePos) -> Option<&[String]>;

    /// Pluralize a word.
    fn pluralize(&self, word: &str) -> String;

    /// Singularize a word.
    fn singularize(&self, word: &str) -> String;

    /// Conjugate a verb to the requested form. `None` when the resource
    /// cannot conjugate the word; callers leave the word unchanged.
    fn conjugate(&self, word: &str, form: VerbForm) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lemma_new_has_no_antonyms() {
        let l = Lemma::new("feline");
        assert_eq!(l.name, "feline");
        assert!(l.antonyms.is_empty());
    }

    #[test]
    fn sense_serde_skips_empty_lists() {
        let s = Sense {
            lemmas: vec![Lemma::new("cat")],
            hypernyms: Vec::new(),
            hyponyms: Vec::new(),
        };
        let json = serde_json::to_string(&s).unwrap();
        assert!(!json.contains("hypernyms"));
        let back: Sense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}

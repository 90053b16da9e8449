//! Memoization of lexical-resource sense lookups.

use std::collections::HashMap;

use sp_lexicon::{CoarsePos, LexicalResource, Sense};

/// Cache of sense lookups keyed by (lowercased word, coarse POS).
///
/// Lexical facts do not change, so entries are populated at most once and
/// never invalidated. The cache lives as long as the garbler that owns it;
/// it is not shared across threads.
#[derive(Debug, Default)]
pub struct SynsetCache {
    entries: HashMap<(String, CoarsePos), Vec<Sense>>,
}

impl SynsetCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The senses of (word, pos), fetched from the resource on first access.
    pub fn senses(
        &mut self,
        lexicon: &dyn LexicalResource,
        word: &str,
        pos: CoarsePos,
    ) -> &[Sense] {
        self.entries
            .entry((word.to_lowercase(), pos))
            .or_insert_with(|| lexicon.senses(word, pos))
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use sp_lexicon::{FineTag, Lemma, VerbForm};

    use super::*;

    /// Counts sense lookups so tests can observe cache hits.
    struct CountingLexicon {
        calls: Cell<usize>,
    }

    impl LexicalResource for CountingLexicon {
        fn tag(&self, tokens: &[String]) -> Vec<FineTag> {
            tokens.iter().map(|_| FineTag::Noun).collect()
        }

        fn is_stop_word(&self, _word: &str) -> bool {
            false
        }

        fn senses(&self, _word: &str, _pos: CoarsePos) -> Vec<Sense> {
            self.calls.set(self.calls.get() + 1);
            vec![Sense {
                lemmas: vec![Lemma::new("thing")],
                hypernyms: Vec::new(),
                hyponyms: Vec::new(),
            }]
        }

        fn corpus_words(&self, _pos: CoarsePos) -> Option<&[String]> {
            None
        }

        fn pluralize(&self, word: &str) -> String {
            word.to_string()
        }

        fn singularize(&self, word: &str) -> String {
            word.to_string()
        }

        fn conjugate(&self, word: &str, _form: VerbForm) -> Option<String> {
            Some(word.to_string())
        }
    }

    #[test]
    fn populates_once_per_key() {
        let lex = CountingLexicon { calls: Cell::new(0) };
        let mut cache = SynsetCache::new();
        assert!(cache.is_empty());

        cache.senses(&lex, "cat", CoarsePos::Noun);
        cache.senses(&lex, "cat", CoarsePos::Noun);
        cache.senses(&lex, "Cat", CoarsePos::Noun); // case folds to the same key
        assert_eq!(lex.calls.get(), 1);

        cache.senses(&lex, "cat", CoarsePos::Verb);
        assert_eq!(lex.calls.get(), 2);
        assert_eq!(cache.len(), 2);
    }
}

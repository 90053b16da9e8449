//! Table-driven in-memory lexical resource.
//!
//! Backed by a plain serde document ([`LexiconData`]), so lexicons can be
//! authored as JSON and loaded from disk. Regular morphology falls back to
//! the suffix rules in [`crate::morph`]; irregular forms come from the
//! document's lookup tables.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LexiconResult;
use crate::morph;
use crate::pos::{CoarsePos, FineTag, VerbForm};
use crate::resource::{LexicalResource, Sense};

/// Irregular verb forms for one lexeme. Missing forms fall back to the
/// regular suffix rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexeme {
    /// Simple past ("gave").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past: Option<String>,
    /// Present participle ("giving").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_participle: Option<String>,
    /// Past participle ("given").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past_participle: Option<String>,
    /// Third-person singular present ("gives").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_singular: Option<String>,
}

/// Senses of one (word, coarse POS) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// The word, lowercase.
    pub word: String,
    /// The coarse POS this entry is keyed under.
    pub pos: CoarsePos,
    /// The word's senses.
    #[serde(default)]
    pub senses: Vec<Sense>,
}

/// The on-disk shape of a table lexicon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconData {
    /// Stop words, lowercase.
    #[serde(default)]
    pub stop_words: Vec<String>,
    /// Fine-grained tag per word (lowercase). Words absent here tag as
    /// [`FineTag::Other`] and are never garbled.
    #[serde(default)]
    pub tags: HashMap<String, FineTag>,
    /// Sense entries per (word, coarse POS).
    #[serde(default)]
    pub entries: Vec<LexiconEntry>,
    /// Background corpus word lists per coarse POS.
    #[serde(default)]
    pub corpus: HashMap<CoarsePos, Vec<String>>,
    /// Irregular plurals, singular form to plural form.
    #[serde(default)]
    pub plurals: HashMap<String, String>,
    /// Irregular verb lexemes, base form to its forms.
    #[serde(default)]
    pub lexemes: HashMap<String, Lexeme>,
}

/// An in-memory [`LexicalResource`] built from a [`LexiconData`] document.
#[derive(Debug, Clone)]
pub struct TableLexicon {
    stop_words: HashSet<String>,
    tags: HashMap<String, FineTag>,
    senses: HashMap<(String, CoarsePos), Vec<Sense>>,
    corpus: HashMap<CoarsePos, Vec<String>>,
    plurals: HashMap<String, String>,
    singulars: HashMap<String, String>,
    lexemes: HashMap<String, Lexeme>,
}

impl TableLexicon {
    /// Build a lexicon from its document form.
    pub fn new(data: LexiconData) -> Self {
        let mut senses: HashMap<(String, CoarsePos), Vec<Sense>> = HashMap::new();
        for entry in data.entries {
            senses
                .entry((entry.word.to_lowercase(), entry.pos))
                .or_default()
                .extend(entry.senses);
        }
        let singulars = data
            .plurals
            .iter()
            .map(|(singular, plural)| (plural.clone(), singular.clone()))
            .collect();
        Self {
            stop_words: data.stop_words.iter().map(|w| w.to_lowercase()).collect(),
            tags: data
                .tags
                .into_iter()
                .map(|(word, tag)| (word.to_lowercase(), tag))
                .collect(),
            senses,
            corpus: data.corpus,
            plurals: data.plurals,
            singulars,
            lexemes: data.lexemes,
        }
    }

    /// Parse a lexicon from a JSON document.
    pub fn from_json(json: &str) -> LexiconResult<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a lexicon from a JSON file.
    pub fn from_path(path: &Path) -> LexiconResult<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

impl LexicalResource for TableLexicon {
    fn tag(&self, tokens: &[String]) -> Vec<FineTag> {
        tokens
            .iter()
            .map(|t| {
                self.tags
                    .get(&t.to_lowercase())
                    .copied()
                    .unwrap_or(FineTag::Other)
            })
            .collect()
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    fn senses(&self, word: &str, pos: CoarsePos) -> Vec<Sense> {
        self.senses
            .get(&(word.to_lowercase(), pos))
            .cloned()
            .unwrap_or_default()
    }

    fn corpus_words(&self, pos: CoarsePos) -> Option<&[String]> {
        self.corpus.get(&pos).map(Vec::as_slice)
    }

    fn pluralize(&self, word: &str) -> String {
        self.plurals
            .get(word)
            .cloned()
            .unwrap_or_else(|| morph::pluralize(word))
    }

    fn singularize(&self, word: &str) -> String {
        self.singulars
            .get(word)
            .cloned()
            .unwrap_or_else(|| morph::singularize(word))
    }

    fn conjugate(&self, word: &str, form: VerbForm) -> Option<String> {
        if let Some(lexeme) = self.lexemes.get(word) {
            let irregular = match form {
                VerbForm::Base | VerbForm::FirstSingular => Some(word.to_string()),
                VerbForm::Past => lexeme.past.clone(),
                VerbForm::PresentParticiple => lexeme.present_participle.clone(),
                VerbForm::PastParticiple => lexeme.past_participle.clone(),
                VerbForm::ThirdSingular => lexeme.third_singular.clone(),
            };
            if let Some(form) = irregular {
                return Some(form);
            }
        }
        Some(morph::conjugate(word, form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Lemma;

    fn lexicon() -> TableLexicon {
        let mut tags = HashMap::new();
        tags.insert("cat".to_string(), FineTag::Noun);
        tags.insert("cats".to_string(), FineTag::NounPlural);
        tags.insert("gave".to_string(), FineTag::VerbPast);
        tags.insert("the".to_string(), FineTag::Other);

        let mut corpus = HashMap::new();
        corpus.insert(
            CoarsePos::Noun,
            vec!["stone".to_string(), "river".to_string()],
        );

        let mut plurals = HashMap::new();
        plurals.insert("child".to_string(), "children".to_string());

        let mut lexemes = HashMap::new();
        lexemes.insert(
            "give".to_string(),
            Lexeme {
                past: Some("gave".to_string()),
                present_participle: Some("giving".to_string()),
                past_participle: Some("given".to_string()),
                third_singular: Some("gives".to_string()),
            },
        );

        TableLexicon::new(LexiconData {
            stop_words: vec!["the".to_string(), "a".to_string()],
            tags,
            entries: vec![LexiconEntry {
                word: "cat".to_string(),
                pos: CoarsePos::Noun,
                senses: vec![Sense {
                    lemmas: vec![Lemma::new("cat"), Lemma::new("feline")],
                    hypernyms: vec!["animal".to_string()],
                    hyponyms: vec!["kitten".to_string()],
                }],
            }],
            corpus,
            plurals,
            lexemes,
        })
    }

    #[test]
    fn tags_are_case_insensitive() {
        let lex = lexicon();
        let tags = lex.tag(&["The".to_string(), "Cat".to_string(), "purred".to_string()]);
        assert_eq!(tags, vec![FineTag::Other, FineTag::Noun, FineTag::Other]);
    }

    #[test]
    fn stop_words() {
        let lex = lexicon();
        assert!(lex.is_stop_word("The"));
        assert!(!lex.is_stop_word("cat"));
    }

    #[test]
    fn sense_lookup() {
        let lex = lexicon();
        let senses = lex.senses("Cat", CoarsePos::Noun);
        assert_eq!(senses.len(), 1);
        assert_eq!(senses[0].lemmas[1].name, "feline");
        assert!(lex.senses("cat", CoarsePos::Verb).is_empty());
        assert!(lex.senses("dog", CoarsePos::Noun).is_empty());
    }

    #[test]
    fn corpus_lists() {
        let lex = lexicon();
        assert_eq!(lex.corpus_words(CoarsePos::Noun).unwrap().len(), 2);
        assert!(lex.corpus_words(CoarsePos::Adverb).is_none());
    }

    #[test]
    fn irregular_morphology() {
        let lex = lexicon();
        assert_eq!(lex.pluralize("child"), "children");
        assert_eq!(lex.singularize("children"), "child");
        assert_eq!(lex.pluralize("cat"), "cats");
        assert_eq!(
            lex.conjugate("give", VerbForm::Past).unwrap(),
            "gave"
        );
        assert_eq!(
            lex.conjugate("walk", VerbForm::Past).unwrap(),
            "walked"
        );
    }

    #[test]
    fn json_round_trip() {
        let json = r#"{
            "stop_words": ["the"],
            "tags": {"cat": "NN"},
            "entries": [{"word": "cat", "pos": "noun", "senses": [
                {"lemmas": [{"name": "cat"}, {"name": "feline"}]}
            ]}],
            "corpus": {"noun": ["stone"]}
        }"#;
        let lex = TableLexicon::from_json(json).unwrap();
        assert!(lex.is_stop_word("the"));
        assert_eq!(lex.senses("cat", CoarsePos::Noun).len(), 1);
        assert!(TableLexicon::from_json("not json").is_err());
    }
}

//! Part-of-speech model.
//!
//! Lexical lookups are keyed by a coarse part of speech (noun, verb,
//! adjective, adverb), while re-inflection of a replacement word needs the
//! fine-grained tag of the original token (past tense vs. gerund, singular
//! vs. plural). Fine tags follow the Penn Treebank code strings so that any
//! off-the-shelf tagger can feed the engine.

use serde::{Deserialize, Serialize};

/// The granularity at which lexical lookups are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoarsePos {
    /// Nouns.
    Noun,
    /// Verbs.
    Verb,
    /// Adjectives.
    Adjective,
    /// Adverbs.
    Adverb,
}

impl CoarsePos {
    /// Parse a coarse POS from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "noun" | "n" => Some(Self::Noun),
            "verb" | "v" => Some(Self::Verb),
            "adjective" | "adj" | "a" => Some(Self::Adjective),
            "adverb" | "adv" | "r" => Some(Self::Adverb),
            _ => None,
        }
    }
}

impl std::fmt::Display for CoarsePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Noun => write!(f, "noun"),
            Self::Verb => write!(f, "verb"),
            Self::Adjective => write!(f, "adjective"),
            Self::Adverb => write!(f, "adverb"),
        }
    }
}

/// A fine-grained grammatical tag assigned by the tagger.
///
/// Serialized as the Penn Treebank code string (`"NN"`, `"VBD"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FineTag {
    /// Singular or mass noun ("cat").
    #[serde(rename = "NN")]
    Noun,
    /// Plural noun ("cats").
    #[serde(rename = "NNS")]
    NounPlural,
    /// Singular proper noun ("London").
    #[serde(rename = "NNP")]
    ProperNoun,
    /// Plural proper noun ("Alps").
    #[serde(rename = "NNPS")]
    ProperNounPlural,
    /// Verb base form ("give").
    #[serde(rename = "VB")]
    VerbBase,
    /// Verb past tense ("gave").
    #[serde(rename = "VBD")]
    VerbPast,
    /// Gerund / present participle ("giving").
    #[serde(rename = "VBG")]
    VerbGerund,
    /// Past participle ("given").
    #[serde(rename = "VBN")]
    VerbPastParticiple,
    /// Non-third-person present ("give").
    #[serde(rename = "VBP")]
    VerbPresent,
    /// Third-person singular present ("gives").
    #[serde(rename = "VBZ")]
    VerbThirdPerson,
    /// Adjective ("quick").
    #[serde(rename = "JJ")]
    Adjective,
    /// Comparative adjective ("quicker").
    #[serde(rename = "JJR")]
    AdjectiveComparative,
    /// Superlative adjective ("quickest").
    #[serde(rename = "JJS")]
    AdjectiveSuperlative,
    /// Adverb ("quickly").
    #[serde(rename = "RB")]
    Adverb,
    /// Comparative adverb ("faster").
    #[serde(rename = "RBR")]
    AdverbComparative,
    /// Superlative adverb ("fastest").
    #[serde(rename = "RBS")]
    AdverbSuperlative,
    /// Any other tag (punctuation, determiners, ...). Never garbled.
    #[serde(rename = "OTHER")]
    Other,
}

impl FineTag {
    /// Parse a Penn Treebank tag code. Unrecognized codes map to [`FineTag::Other`].
    pub fn parse(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "NN" => Self::Noun,
            "NNS" => Self::NounPlural,
            "NNP" => Self::ProperNoun,
            "NNPS" => Self::ProperNounPlural,
            "VB" => Self::VerbBase,
            "VBD" => Self::VerbPast,
            "VBG" => Self::VerbGerund,
            "VBN" => Self::VerbPastParticiple,
            "VBP" => Self::VerbPresent,
            "VBZ" => Self::VerbThirdPerson,
            "JJ" => Self::Adjective,
            "JJR" => Self::AdjectiveComparative,
            "JJS" => Self::AdjectiveSuperlative,
            "RB" => Self::Adverb,
            "RBR" => Self::AdverbComparative,
            "RBS" => Self::AdverbSuperlative,
            _ => Self::Other,
        }
    }

    /// The coarse POS this tag belongs to, or `None` if tokens with this tag
    /// are not subject to lexical lookup at all.
    pub fn coarse(self) -> Option<CoarsePos> {
        match self {
            Self::Noun | Self::NounPlural | Self::ProperNoun | Self::ProperNounPlural => {
                Some(CoarsePos::Noun)
            }
            Self::VerbBase
            | Self::VerbPast
            | Self::VerbGerund
            | Self::VerbPastParticiple
            | Self::VerbPresent
            | Self::VerbThirdPerson => Some(CoarsePos::Verb),
            Self::Adjective | Self::AdjectiveComparative | Self::AdjectiveSuperlative => {
                Some(CoarsePos::Adjective)
            }
            Self::Adverb | Self::AdverbComparative | Self::AdverbSuperlative => {
                Some(CoarsePos::Adverb)
            }
            Self::Other => None,
        }
    }

    /// Whether this tag marks a proper noun (kept verbatim by the garbler).
    pub fn is_proper_noun(self) -> bool {
        matches!(self, Self::ProperNoun | Self::ProperNounPlural)
    }

    /// Whether this is a plural noun tag (the only tags that actually
    /// trigger pluralization during re-inflection).
    pub fn is_plural_noun(self) -> bool {
        matches!(self, Self::NounPlural | Self::ProperNounPlural)
    }
}

impl std::fmt::Display for FineTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Self::Noun => "NN",
            Self::NounPlural => "NNS",
            Self::ProperNoun => "NNP",
            Self::ProperNounPlural => "NNPS",
            Self::VerbBase => "VB",
            Self::VerbPast => "VBD",
            Self::VerbGerund => "VBG",
            Self::VerbPastParticiple => "VBN",
            Self::VerbPresent => "VBP",
            Self::VerbThirdPerson => "VBZ",
            Self::Adjective => "JJ",
            Self::AdjectiveComparative => "JJR",
            Self::AdjectiveSuperlative => "JJS",
            Self::Adverb => "RB",
            Self::AdverbComparative => "RBR",
            Self::AdverbSuperlative => "RBS",
            Self::Other => "OTHER",
        };
        write!(f, "{code}")
    }
}

/// A conjugation target for [`crate::LexicalResource::conjugate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbForm {
    /// Infinitive / base form ("give").
    Base,
    /// Simple past ("gave").
    Past,
    /// Present participle ("giving").
    PresentParticiple,
    /// Past participle ("given").
    PastParticiple,
    /// First-person singular present ("give").
    FirstSingular,
    /// Third-person singular present ("gives").
    ThirdSingular,
}

impl std::fmt::Display for VerbForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Past => write!(f, "past"),
            Self::PresentParticiple => write!(f, "present participle"),
            Self::PastParticiple => write!(f, "past participle"),
            Self::FirstSingular => write!(f, "first-person singular"),
            Self::ThirdSingular => write!(f, "third-person singular"),
        }
    }
}

//! Stille Post: skill-based text garbling.
//!
//! Simulates imperfect comprehension of a document. Each content word is
//! kept, replaced with a related or misleading term, or rendered as an
//! unknown-word marker, with a single skill level in [0, 1] controlling the
//! intensity. Decisions are memoized per document so a word always garbles
//! the same way within one pass, and replacements are re-inflected to the
//! original word's grammatical form and letter case.
//!
//! All lexical knowledge comes through the [`sp_lexicon::LexicalResource`]
//! seam; all randomness comes from a caller-supplied seedable RNG.

pub mod cache;
pub mod candidates;
pub mod config;
pub mod document;
pub mod error;
pub mod skill;
pub mod word;

pub use cache::SynsetCache;
pub use config::{DEFAULT_CHANCE_OF_GUESSING, DEFAULT_MIN_CHANCE, GarbleConfig};
pub use document::Garbler;
pub use error::{GarbleError, GarbleResult};
pub use skill::{skill_level_from_roll, skill_level_with_floor};
pub use word::{Decision, UNKNOWN_MARKER};

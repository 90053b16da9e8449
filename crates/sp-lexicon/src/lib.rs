//! Lexical resource seam for the Stille Post garbling engine.
//!
//! Defines the part-of-speech model, the line tokenizer, and the
//! [`LexicalResource`] trait the engine consumes for tagging, stop-word
//! membership, word-sense lookup, background corpus sampling, and
//! morphology. Ships a table-driven implementation ([`TableLexicon`])
//! loadable from JSON for tests, demos, and small hand-authored lexicons.

pub mod error;
pub mod morph;
pub mod pos;
pub mod resource;
pub mod table;
pub mod token;

pub use error::{LexiconError, LexiconResult};
pub use pos::{CoarsePos, FineTag, VerbForm};
pub use resource::{Lemma, LexicalResource, Sense};
pub use table::{LexiconData, LexiconEntry, TableLexicon};

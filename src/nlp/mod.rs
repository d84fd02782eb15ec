//! Lexical resources consumed by the filtering stages
//!
//! Stopword vocabularies and the lemma-override lookup seam.

pub mod lemmatizer;
pub mod stopwords;

pub use lemmatizer::{resolve_lemma, DictLemmatizer, LemmaLookup, LexiconError, NoopLemmatizer};
pub use stopwords::StopwordSet;

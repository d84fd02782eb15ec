//! presift — token filtering and lemma resolution over annotated documents
//!
//! Given a document already tokenized, tagged, lemmatized, and
//! span-annotated by an external NLP pipeline, presift decides which tokens
//! survive into a cleaned representation, resolves each survivor to a
//! canonical lemma (preferring a lookup lemmatizer over the pipeline
//! lemma), and assembles the result flat or grouped by sentence.
//!
//! Noun-chunk tokens that pass the validity check and all named-entity
//! tokens are protected: they survive regardless of stopword status or the
//! POS denylist.
//!
//! ```
//! use presift::{AnnotatedDocument, PreprocessOptions, Preprocessor, Span, Token};
//!
//! let tokens = vec![
//!     Token::new("Der", "der", "ART", 0, 0),
//!     Token::new("Mann", "Mann", "NN", 1, 0),
//!     Token::new("schläft", "schlafen", "VVFIN", 2, 0),
//! ];
//! let doc = AnnotatedDocument::new(tokens, vec![Span::new(0, 2)], vec![]).unwrap();
//!
//! let cleaned = Preprocessor::new().preprocess(&doc, &PreprocessOptions::flat());
//! assert_eq!(cleaned.into_flat(), vec!["mann", "schlafen"]);
//! ```

pub mod doc;
pub mod filter;
pub mod nlp;
pub mod preprocess;
pub mod types;

pub use doc::{AnnotatedDocument, DocumentError, Sentences};
pub use filter::{ProtectedIndices, TokenFilter};
pub use nlp::{resolve_lemma, DictLemmatizer, LemmaLookup, LexiconError, NoopLemmatizer, StopwordSet};
pub use preprocess::{
    ChunkCleaning, EntityToken, Preprocessed, PreprocessConfig, PreprocessOptions, Preprocessor,
};
pub use types::{EntitySpan, Span, Token};

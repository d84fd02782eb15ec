//! Core data model for annotated documents
//!
//! These types are the contract an external annotation pipeline fills in:
//! tokens with tags, lemmas, and classification flags, plus span annotations
//! for noun chunks and named entities.

use serde::{Deserialize, Serialize};

/// A single annotated token produced by an external pipeline.
///
/// `index` is the token's position in the document and must equal its slot
/// in the document's token vector. `tag` is the fine-grained POS tag as
/// emitted by the tagger (STTS for German models, e.g. `NN`, `ART`, `$.`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Lemma assigned by the pipeline's own lemmatizer
    pub lemma: String,
    /// Fine-grained POS tag
    pub tag: String,
    /// Position in the document (surface order)
    pub index: usize,
    /// Index of the sentence this token belongs to
    #[serde(default)]
    pub sentence_idx: usize,
    /// Stopword flag as assigned by the pipeline. Filtering re-derives
    /// stopword status from the lowercased surface form instead of reading
    /// this flag; upstream taggers miss capitalized forms.
    #[serde(default)]
    pub is_stopword: bool,
    /// Punctuation flag
    #[serde(default)]
    pub is_punct: bool,
    /// Whitespace-only token flag
    #[serde(default)]
    pub is_space: bool,
}

impl Token {
    /// Create a token with all classification flags cleared.
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        tag: impl Into<String>,
        index: usize,
        sentence_idx: usize,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            tag: tag.into(),
            index,
            sentence_idx,
            is_stopword: false,
            is_punct: false,
            is_space: false,
        }
    }

    /// Set the stopword/punctuation/whitespace flags.
    pub fn with_flags(mut self, is_stopword: bool, is_punct: bool, is_space: bool) -> Self {
        self.is_stopword = is_stopword;
        self.is_punct = is_punct;
        self.is_space = is_space;
        self
    }
}

/// A contiguous run of tokens, as a half-open index range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Index of the first token in the span
    pub start: usize,
    /// One past the index of the last token
    pub end: usize,
}

impl Span {
    /// Create a span covering `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of tokens covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span covers no tokens
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Token indices covered by the span
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// A named-entity span with its category label.
///
/// Labels are whatever the recognizer emits (`PER`, `LOC`, `ORG`, `MISC`
/// for the German models this crate was built against); the filtering logic
/// never branches on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Token range of the entity
    pub span: Span,
    /// Entity category label
    pub label: String,
}

impl EntitySpan {
    /// Create an entity span over `start..end` with the given label.
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            span: Span::new(start, end),
            label: label.into(),
        }
    }
}

//! Annotated document container
//!
//! An [`AnnotatedDocument`] is the validated output of an external
//! annotation pipeline: the token vector plus noun-chunk and named-entity
//! spans. Construction checks the invariants the filtering stages rely on;
//! after that the document is read-only.

use serde::Deserialize;
use thiserror::Error;

use crate::types::{EntitySpan, Span, Token};

/// Violations of the document invariants, caught at construction.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A token's `index` field does not match its position in the vector.
    #[error("token at position {position} carries index {index}")]
    TokenIndexMismatch { position: usize, index: usize },

    /// Sentence indices must be non-decreasing in surface order.
    #[error("sentence index decreases at token {position}")]
    SentenceOrder { position: usize },

    /// A span reaches past the end of the token vector or is empty.
    #[error("span {start}..{end} invalid for document of {len} tokens")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },

    /// Malformed JSON input.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Raw JSON shape accepted by [`AnnotatedDocument::from_json_str`].
#[derive(Deserialize)]
struct RawDocument {
    tokens: Vec<Token>,
    #[serde(default)]
    noun_chunks: Vec<Span>,
    #[serde(default)]
    entities: Vec<EntitySpan>,
}

/// A fully annotated, validated document.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedDocument {
    tokens: Vec<Token>,
    noun_chunks: Vec<Span>,
    entities: Vec<EntitySpan>,
}

impl AnnotatedDocument {
    /// Build a document from pipeline output, checking invariants:
    /// token indices match positions, sentence indices are non-decreasing,
    /// and every span is non-empty and in bounds.
    pub fn new(
        tokens: Vec<Token>,
        noun_chunks: Vec<Span>,
        entities: Vec<EntitySpan>,
    ) -> Result<Self, DocumentError> {
        for (position, token) in tokens.iter().enumerate() {
            if token.index != position {
                return Err(DocumentError::TokenIndexMismatch {
                    position,
                    index: token.index,
                });
            }
            if position > 0 && token.sentence_idx < tokens[position - 1].sentence_idx {
                return Err(DocumentError::SentenceOrder { position });
            }
        }

        let len = tokens.len();
        for span in noun_chunks.iter().chain(entities.iter().map(|e| &e.span)) {
            if span.is_empty() || span.end > len {
                return Err(DocumentError::SpanOutOfBounds {
                    start: span.start,
                    end: span.end,
                    len,
                });
            }
        }

        Ok(Self {
            tokens,
            noun_chunks,
            entities,
        })
    }

    /// Parse a document from its JSON representation.
    ///
    /// Expected shape: `{ "tokens": [...], "noun_chunks": [...],
    /// "entities": [...] }`, with the span arrays optional. The parsed
    /// document goes through the same validation as [`Self::new`].
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        Self::new(raw.tokens, raw.noun_chunks, raw.entities)
    }

    /// Parse a document from a JSON reader. See [`Self::from_json_str`].
    pub fn from_json_reader(reader: impl std::io::Read) -> Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_reader(reader)?;
        Self::new(raw.tokens, raw.noun_chunks, raw.entities)
    }

    /// All tokens in surface order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the document has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Noun-chunk spans as annotated by the pipeline.
    pub fn noun_chunk_spans(&self) -> &[Span] {
        &self.noun_chunks
    }

    /// Named-entity spans as annotated by the pipeline.
    pub fn entity_spans(&self) -> &[EntitySpan] {
        &self.entities
    }

    /// The tokens covered by a span.
    pub fn span_tokens(&self, span: Span) -> &[Token] {
        &self.tokens[span.start..span.end]
    }

    /// Iterate over sentences as token slices, grouped by `sentence_idx`.
    pub fn sentences(&self) -> Sentences<'_> {
        Sentences {
            tokens: &self.tokens,
        }
    }
}

/// Iterator over a document's sentences. See [`AnnotatedDocument::sentences`].
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    tokens: &'a [Token],
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a [Token];

    fn next(&mut self) -> Option<&'a [Token]> {
        let first = self.tokens.first()?;
        let end = self
            .tokens
            .iter()
            .position(|t| t.sentence_idx != first.sentence_idx)
            .unwrap_or(self.tokens.len());
        let (sentence, rest) = self.tokens.split_at(end);
        self.tokens = rest;
        Some(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, index: usize, sentence_idx: usize) -> Token {
        Token::new(text, text, "NN", index, sentence_idx)
    }

    #[test]
    fn test_new_accepts_well_formed_document() {
        let doc = AnnotatedDocument::new(
            vec![token("a", 0, 0), token("b", 1, 0), token("c", 2, 1)],
            vec![Span::new(0, 2)],
            vec![EntitySpan::new(2, 3, "LOC")],
        )
        .unwrap();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.noun_chunk_spans().len(), 1);
    }

    #[test]
    fn test_new_rejects_index_mismatch() {
        let err = AnnotatedDocument::new(vec![token("a", 0, 0), token("b", 5, 0)], vec![], vec![]);
        assert!(matches!(
            err,
            Err(DocumentError::TokenIndexMismatch {
                position: 1,
                index: 5
            })
        ));
    }

    #[test]
    fn test_new_rejects_decreasing_sentence_index() {
        let err = AnnotatedDocument::new(vec![token("a", 0, 1), token("b", 1, 0)], vec![], vec![]);
        assert!(matches!(err, Err(DocumentError::SentenceOrder { position: 1 })));
    }

    #[test]
    fn test_new_rejects_span_out_of_bounds() {
        let err = AnnotatedDocument::new(vec![token("a", 0, 0)], vec![Span::new(0, 2)], vec![]);
        assert!(matches!(err, Err(DocumentError::SpanOutOfBounds { .. })));
    }

    #[test]
    fn test_new_rejects_empty_span() {
        let err = AnnotatedDocument::new(vec![token("a", 0, 0)], vec![Span::new(1, 1)], vec![]);
        assert!(matches!(err, Err(DocumentError::SpanOutOfBounds { .. })));
    }

    #[test]
    fn test_empty_document_is_valid() {
        let doc = AnnotatedDocument::new(vec![], vec![], vec![]).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.sentences().count(), 0);
    }

    #[test]
    fn test_sentences_groups_by_index() {
        let doc = AnnotatedDocument::new(
            vec![
                token("a", 0, 0),
                token("b", 1, 0),
                token("c", 2, 1),
                token("d", 3, 2),
            ],
            vec![],
            vec![],
        )
        .unwrap();

        let sentences: Vec<Vec<&str>> = doc
            .sentences()
            .map(|s| s.iter().map(|t| t.text.as_str()).collect())
            .collect();
        assert_eq!(sentences, vec![vec!["a", "b"], vec!["c"], vec!["d"]]);
    }

    #[test]
    fn test_span_tokens() {
        let doc = AnnotatedDocument::new(
            vec![token("a", 0, 0), token("b", 1, 0), token("c", 2, 0)],
            vec![],
            vec![],
        )
        .unwrap();
        let covered = doc.span_tokens(Span::new(1, 3));
        assert_eq!(covered.len(), 2);
        assert_eq!(covered[0].text, "b");
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "tokens": [
                { "text": "New", "lemma": "New", "tag": "NE", "index": 0 },
                { "text": "York", "lemma": "York", "tag": "NE", "index": 1 }
            ],
            "entities": [ { "span": { "start": 0, "end": 2 }, "label": "LOC" } ]
        }"#;
        let doc = AnnotatedDocument::from_json_str(json).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.entity_spans()[0].label, "LOC");
        assert!(doc.noun_chunk_spans().is_empty());
    }

    #[test]
    fn test_from_json_str_still_validates() {
        let json = r#"{
            "tokens": [ { "text": "a", "lemma": "a", "tag": "NN", "index": 7 } ]
        }"#;
        assert!(matches!(
            AnnotatedDocument::from_json_str(json),
            Err(DocumentError::TokenIndexMismatch { .. })
        ));
    }

    #[test]
    fn test_from_json_str_rejects_malformed_json() {
        assert!(matches!(
            AnnotatedDocument::from_json_str("{ not json"),
            Err(DocumentError::Json(_))
        ));
    }
}

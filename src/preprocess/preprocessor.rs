//! Preprocessor — filtering and lemma resolution over a document
//!
//! [`Preprocessor`] applies the [`TokenFilter`] and lemma resolution across
//! an [`AnnotatedDocument`], flat or per sentence, and exposes the span
//! accessors (noun chunks, named entities) the protected set is derived
//! from. It is generic over the lemma-override source, statically
//! dispatched; the default [`NoopLemmatizer`] adds no overhead.

use rayon::prelude::*;
use serde::Serialize;

use crate::doc::AnnotatedDocument;
use crate::filter::{ProtectedIndices, TokenFilter};
use crate::nlp::{resolve_lemma, LemmaLookup, NoopLemmatizer};
use crate::preprocess::config::{ChunkCleaning, PreprocessConfig, PreprocessOptions};
use crate::types::Token;

/// Cleaned output: resolved lemmas of the surviving tokens.
///
/// Serializes untagged, so both shapes cross the JSON boundary as plain
/// arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Preprocessed {
    /// One flat sequence over the whole document.
    Flat(Vec<String>),
    /// One sub-sequence per sentence, empty sub-sequences included.
    Sentences(Vec<Vec<String>>),
}

impl Preprocessed {
    /// Collapse to a single flat sequence, concatenating sentences in
    /// order.
    pub fn into_flat(self) -> Vec<String> {
        match self {
            Preprocessed::Flat(lemmas) => lemmas,
            Preprocessed::Sentences(sentences) => sentences.into_iter().flatten().collect(),
        }
    }

    /// Total number of surviving tokens.
    pub fn len(&self) -> usize {
        match self {
            Preprocessed::Flat(lemmas) => lemmas.len(),
            Preprocessed::Sentences(sentences) => sentences.iter().map(Vec::len).sum(),
        }
    }

    /// Returns `true` if no token survived.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named-entity token as reported by
/// [`Preprocessor::named_entity_tokens`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityToken<'a> {
    /// Token index in the document
    pub index: usize,
    /// The token itself
    pub token: &'a Token,
    /// Label of the entity span the token belongs to
    pub label: &'a str,
}

/// Token filtering and lemma resolution over annotated documents.
#[derive(Debug, Clone)]
pub struct Preprocessor<L = NoopLemmatizer> {
    filter: TokenFilter,
    lemmas: L,
}

impl Preprocessor<NoopLemmatizer> {
    /// Preprocessor with the default German configuration and no lemma
    /// overrides.
    pub fn new() -> Self {
        Self::from_config(&PreprocessConfig::default())
    }

    /// Preprocessor for a configuration, without lemma overrides.
    pub fn from_config(config: &PreprocessConfig) -> Self {
        Self {
            filter: config.build_filter(),
            lemmas: NoopLemmatizer,
        }
    }
}

impl Default for Preprocessor<NoopLemmatizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LemmaLookup> Preprocessor<L> {
    /// Replace the lemma-override source.
    pub fn with_lemmatizer<M: LemmaLookup>(self, lemmas: M) -> Preprocessor<M> {
        Preprocessor {
            filter: self.filter,
            lemmas,
        }
    }

    /// The filtering policy in use.
    pub fn filter(&self) -> &TokenFilter {
        &self.filter
    }

    /// Preprocess a document: build the protected set, filter, resolve
    /// lemmas, and assemble per [`PreprocessOptions::sentence_split`].
    pub fn preprocess(&self, doc: &AnnotatedDocument, opts: &PreprocessOptions) -> Preprocessed {
        let protected = self.protected_indices(doc, &opts.extra_indices);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            tokens = doc.len(),
            protected = protected.len(),
            sentence_split = opts.sentence_split,
            "preprocess"
        );

        if opts.sentence_split {
            Preprocessed::Sentences(self.tokenize_by_sentence(doc, &protected))
        } else {
            Preprocessed::Flat(self.tokenize_flat(doc, &protected))
        }
    }

    /// Preprocess independent documents in parallel.
    pub fn preprocess_batch(
        &self,
        docs: &[AnnotatedDocument],
        opts: &PreprocessOptions,
    ) -> Vec<Preprocessed>
    where
        L: Sync,
    {
        docs.par_iter().map(|doc| self.preprocess(doc, opts)).collect()
    }

    /// The protected index set for a document: cleaned noun-chunk indices,
    /// all entity indices, and `extra`, deduplicated and sorted.
    pub fn protected_indices(&self, doc: &AnnotatedDocument, extra: &[usize]) -> ProtectedIndices {
        ProtectedIndices::build(doc, extra, &self.filter)
    }

    /// Resolved lemmas of the surviving tokens, in surface order.
    pub fn tokenize_flat(
        &self,
        doc: &AnnotatedDocument,
        protected: &ProtectedIndices,
    ) -> Vec<String> {
        self.filter_lemmas(doc.tokens(), protected)
    }

    /// Resolved lemmas grouped by sentence. Sentences with no surviving
    /// token yield an empty sub-sequence.
    pub fn tokenize_by_sentence(
        &self,
        doc: &AnnotatedDocument,
        protected: &ProtectedIndices,
    ) -> Vec<Vec<String>> {
        doc.sentences()
            .map(|sentence| self.filter_lemmas(sentence, protected))
            .collect()
    }

    fn filter_lemmas(&self, tokens: &[Token], protected: &ProtectedIndices) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| self.filter.should_keep(token, protected))
            .map(|token| resolve_lemma(token, &self.lemmas))
            .collect()
    }

    /// Flattened noun-chunk token indices, in order of first appearance.
    pub fn noun_chunk_indices(&self, doc: &AnnotatedDocument, cleaning: ChunkCleaning) -> Vec<usize> {
        self.noun_chunk_tokens(doc, cleaning)
            .into_iter()
            .map(|(index, _)| index)
            .collect()
    }

    /// Noun-chunk token indices grouped per chunk.
    pub fn noun_chunk_groups(
        &self,
        doc: &AnnotatedDocument,
        cleaning: ChunkCleaning,
    ) -> Vec<Vec<usize>> {
        doc.noun_chunk_spans()
            .iter()
            .map(|span| {
                doc.span_tokens(*span)
                    .iter()
                    .filter(|t| self.chunk_keeps(t, cleaning))
                    .map(|t| t.index)
                    .collect()
            })
            .collect()
    }

    /// Flattened noun-chunk tokens as `(index, token)` pairs.
    pub fn noun_chunk_tokens<'a>(
        &self,
        doc: &'a AnnotatedDocument,
        cleaning: ChunkCleaning,
    ) -> Vec<(usize, &'a Token)> {
        doc.noun_chunk_spans()
            .iter()
            .flat_map(|span| doc.span_tokens(*span))
            .filter(|t| self.chunk_keeps(t, cleaning))
            .map(|t| (t.index, t))
            .collect()
    }

    fn chunk_keeps(&self, token: &Token, cleaning: ChunkCleaning) -> bool {
        match cleaning {
            ChunkCleaning::Cleaned => self.filter.is_valid(token),
            ChunkCleaning::Raw => true,
        }
    }

    /// Flattened named-entity token indices, in order of first appearance.
    pub fn named_entity_indices(&self, doc: &AnnotatedDocument) -> Vec<usize> {
        doc.entity_spans()
            .iter()
            .flat_map(|e| e.span.indices())
            .collect()
    }

    /// Named-entity token indices grouped per entity.
    pub fn named_entity_groups(&self, doc: &AnnotatedDocument) -> Vec<Vec<usize>> {
        doc.entity_spans()
            .iter()
            .map(|e| e.span.indices().collect())
            .collect()
    }

    /// Flattened named-entity tokens with their labels.
    pub fn named_entity_tokens<'a>(&self, doc: &'a AnnotatedDocument) -> Vec<EntityToken<'a>> {
        doc.entity_spans()
            .iter()
            .flat_map(|entity| {
                doc.span_tokens(entity.span).iter().map(|token| EntityToken {
                    index: token.index,
                    token,
                    label: entity.label.as_str(),
                })
            })
            .collect()
    }
}

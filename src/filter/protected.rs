//! Protected token indices
//!
//! Indices in a [`ProtectedIndices`] set survive filtering no matter what
//! the filter would otherwise decide. The set is the union of cleaned
//! noun-chunk indices, all named-entity indices, and caller-supplied
//! indices; it is built once per document and immutable afterwards.

use rustc_hash::FxHashSet;

use crate::doc::AnnotatedDocument;
use crate::filter::token_filter::TokenFilter;

/// A deduplicated, ascending set of token indices exempt from filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedIndices {
    indices: Vec<usize>,
}

impl ProtectedIndices {
    /// The empty set: nothing is protected.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from arbitrary indices, deduplicating and sorting.
    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        let set: FxHashSet<usize> = indices.into_iter().collect();
        let mut indices: Vec<usize> = set.into_iter().collect();
        indices.sort_unstable();
        Self { indices }
    }

    /// Compute the protected set for a document.
    ///
    /// Noun-chunk tokens are protected only if they pass the filter's
    /// validity predicate, so embedded stopwords and punctuation gain no
    /// protection. Entity tokens are protected wholesale: a partial entity
    /// is not meaningful. Caller-supplied `extra` indices are merged in
    /// as given.
    pub fn build(doc: &AnnotatedDocument, extra: &[usize], filter: &TokenFilter) -> Self {
        let mut set: FxHashSet<usize> = extra.iter().copied().collect();

        for span in doc.noun_chunk_spans() {
            for token in doc.span_tokens(*span) {
                if filter.is_valid(token) {
                    set.insert(token.index);
                }
            }
        }

        for entity in doc.entity_spans() {
            set.extend(entity.span.indices());
        }

        let mut indices: Vec<usize> = set.into_iter().collect();
        indices.sort_unstable();
        Self { indices }
    }

    /// Whether `index` is protected.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// The protected indices in ascending order.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Number of protected indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if nothing is protected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

//! Lemma override lookup
//!
//! The annotation pipeline assigns a lemma to every token, but lookup-based
//! lemmatizers (IWNLP and friends) are more reliable where they have an
//! entry. [`LemmaLookup`] is the seam for such a source; [`resolve_lemma`]
//! prefers its first candidate and falls back to the pipeline lemma.

use std::io;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::types::Token;

/// Failures while loading a lemma dictionary.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Malformed dictionary JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A source of override lemmas for annotated tokens.
///
/// Implementations return candidate lemmas best-first, or `None` when the
/// token has no entry. A miss is not an error; resolution falls back to the
/// pipeline lemma.
pub trait LemmaLookup {
    /// Candidate lemmas for a token, best candidate first.
    fn candidates(&self, token: &Token) -> Option<&[String]>;
}

/// Lookup that never has an entry — resolution always falls back to the
/// pipeline lemma. Zero-sized default for pipelines without a secondary
/// lemmatizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLemmatizer;

impl LemmaLookup for NoopLemmatizer {
    #[inline]
    fn candidates(&self, _token: &Token) -> Option<&[String]> {
        None
    }
}

/// Dictionary-backed lemma lookup keyed by lowercased surface form.
#[derive(Debug, Clone, Default)]
pub struct DictLemmatizer {
    entries: FxHashMap<String, Vec<String>>,
}

impl DictLemmatizer {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from (surface, candidates) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(surface, candidates)| (surface.as_ref().to_lowercase(), candidates))
            .collect();
        Self { entries }
    }

    /// Load a dictionary from JSON of the shape
    /// `{ "surface": ["lemma", ...], ... }`.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let raw: FxHashMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::from_pairs(raw))
    }

    /// Load a dictionary from a JSON reader. See [`Self::from_json_str`].
    pub fn from_json_reader(reader: impl io::Read) -> Result<Self, LexiconError> {
        let raw: FxHashMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        Ok(Self::from_pairs(raw))
    }

    /// Insert or replace the candidates for a surface form.
    pub fn insert(&mut self, surface: impl AsRef<str>, candidates: Vec<String>) {
        self.entries
            .insert(surface.as_ref().to_lowercase(), candidates);
    }

    /// Number of surface forms in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LemmaLookup for DictLemmatizer {
    fn candidates(&self, token: &Token) -> Option<&[String]> {
        self.entries
            .get(&token.text.to_lowercase())
            .map(Vec::as_slice)
    }
}

impl<L: LemmaLookup + ?Sized> LemmaLookup for &L {
    fn candidates(&self, token: &Token) -> Option<&[String]> {
        (**self).candidates(token)
    }
}

/// Resolve a token's canonical lemma.
///
/// The lookup's first candidate wins when one exists (no further
/// disambiguation); otherwise the pipeline lemma is used. Either way the
/// result is lowercased.
pub fn resolve_lemma<L: LemmaLookup + ?Sized>(token: &Token, lookup: &L) -> String {
    if let Some(first) = lookup.candidates(token).and_then(|c| c.first()) {
        return first.to_lowercase();
    }
    token.lemma.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, lemma: &str) -> Token {
        Token::new(text, lemma, "NN", 0, 0)
    }

    #[test]
    fn test_first_candidate_wins() {
        let dict = DictLemmatizer::from_pairs([(
            "jahren",
            vec!["Jahr".to_string(), "Jahre".to_string()],
        )]);
        assert_eq!(resolve_lemma(&token("Jahren", "jahren"), &dict), "jahr");
    }

    #[test]
    fn test_fallback_to_pipeline_lemma() {
        let dict = DictLemmatizer::new();
        assert_eq!(resolve_lemma(&token("Häuser", "Haus"), &dict), "haus");
    }

    #[test]
    fn test_empty_candidate_list_falls_back() {
        let dict = DictLemmatizer::from_pairs([("häuser", vec![])]);
        assert_eq!(resolve_lemma(&token("Häuser", "Haus"), &dict), "haus");
    }

    #[test]
    fn test_result_is_lowercased() {
        let dict = DictLemmatizer::from_pairs([("mann", vec!["Mann".to_string()])]);
        assert_eq!(resolve_lemma(&token("Mann", "Mann"), &dict), "mann");
    }

    #[test]
    fn test_lookup_ignores_surface_case() {
        let dict = DictLemmatizer::from_pairs([("mann", vec!["Mann".to_string()])]);
        assert_eq!(resolve_lemma(&token("MANN", "x"), &dict), "mann");
    }

    #[test]
    fn test_noop_lemmatizer_always_misses() {
        assert_eq!(NoopLemmatizer.candidates(&token("Mann", "Mann")), None);
        assert_eq!(resolve_lemma(&token("Mann", "Mann"), &NoopLemmatizer), "mann");
    }

    #[test]
    fn test_from_json_str() {
        let dict =
            DictLemmatizer::from_json_str(r#"{ "jahren": ["Jahr"], "uhr": ["Uhr"] }"#).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(resolve_lemma(&token("Jahren", "jahren"), &dict), "jahr");
    }

    #[test]
    fn test_from_json_str_rejects_malformed() {
        assert!(matches!(
            DictLemmatizer::from_json_str(r#"{ "jahren": "Jahr" }"#),
            Err(LexiconError::Json(_))
        ));
    }

    #[test]
    fn test_insert() {
        let mut dict = DictLemmatizer::new();
        dict.insert("Uhr", vec!["Uhr".to_string()]);
        assert_eq!(resolve_lemma(&token("uhr", "x"), &dict), "uhr");
    }
}

//! Stopword vocabulary
//!
//! Wraps the language lists from the `stop-words` crate as an immutable set
//! with per-instance removals and additions. Membership is always keyed by
//! the lowercased surface form: taggers that flag stopwords on the token
//! itself miss capitalized forms ("Der" vs "der"), so callers re-derive the
//! verdict through [`StopwordSet::is_stopword`] instead of trusting flags.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// An immutable stopword vocabulary for one language.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::new("de")
    }
}

impl StopwordSet {
    /// Load the stopword list for a language.
    ///
    /// Accepts ISO codes or English names (`"de"`/`"german"`, `"en"`,
    /// `"fr"`, `"es"`, `"it"`, `"pt"`, `"nl"`). Unknown languages fall back
    /// to German, the language this crate's defaults target.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "en" | "english" => LANGUAGE::English,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            _ => LANGUAGE::German,
        };
        let words = get(lang).iter().map(|w| w.to_lowercase()).collect();
        Self { words }
    }

    /// An empty vocabulary: nothing is a stopword.
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Build a vocabulary from an explicit word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Remove words from the vocabulary, so they count as content-bearing.
    pub fn without_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
        self
    }

    /// Add words to the vocabulary.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
        self
    }

    /// Whether the lowercased form of `word` is in the vocabulary.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

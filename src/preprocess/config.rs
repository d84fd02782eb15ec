//! Preprocessing configuration
//!
//! [`PreprocessConfig`] replaces process-wide pipeline state with an
//! explicit, serializable object: stopword language, words to keep despite
//! the default list, and the POS denylist. [`PreprocessOptions`] carries the
//! per-call knobs.

use serde::{Deserialize, Serialize};

use crate::filter::{TokenFilter, GERMAN_FUNCTION_TAGS};
use crate::nlp::StopwordSet;

fn default_language() -> String {
    "de".to_string()
}

fn default_keep_words() -> Vec<String> {
    [
        "schlecht", "mensch", "menschen", "beispiel", "gott", "jahr", "jahre", "jahren", "nicht",
        "uhr",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

fn default_denylist() -> Vec<String> {
    GERMAN_FUNCTION_TAGS.iter().map(|t| t.to_string()).collect()
}

fn default_sentence_split() -> bool {
    true
}

/// Filtering configuration. The default is the German setup this crate was
/// built against: `stop-words` German list minus [`Self::keep_words`], and
/// the STTS function-word denylist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Language of the base stopword list.
    #[serde(default = "default_language")]
    pub language: String,

    /// Words removed from the base stopword list. These carry content in
    /// the target corpora despite appearing in the default list.
    #[serde(default = "default_keep_words")]
    pub keep_words: Vec<String>,

    /// Fine-grained POS tags dropped unless protected.
    #[serde(default = "default_denylist")]
    pub pos_denylist: Vec<String>,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            keep_words: default_keep_words(),
            pos_denylist: default_denylist(),
        }
    }
}

impl PreprocessConfig {
    /// Set the stopword-list language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the words kept despite the default stopword list.
    pub fn with_keep_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the POS denylist.
    pub fn with_pos_denylist<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pos_denylist = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Materialize the config into an immutable [`TokenFilter`].
    pub fn build_filter(&self) -> TokenFilter {
        let stopwords = StopwordSet::new(&self.language).without_words(&self.keep_words);
        let denylist = self.pos_denylist.iter().cloned().collect();
        TokenFilter::new(stopwords, denylist)
    }
}

/// Per-call preprocessing options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessOptions {
    /// Caller-supplied token indices to protect in addition to noun-chunk
    /// and entity indices.
    #[serde(default)]
    pub extra_indices: Vec<usize>,

    /// Group the output by sentence (`true`) or return one flat sequence.
    #[serde(default = "default_sentence_split")]
    pub sentence_split: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            extra_indices: Vec::new(),
            sentence_split: true,
        }
    }
}

impl PreprocessOptions {
    /// Request one flat output sequence instead of per-sentence grouping.
    pub fn flat() -> Self {
        Self {
            sentence_split: false,
            ..Self::default()
        }
    }

    /// Set extra protected indices.
    pub fn with_extra_indices<I: IntoIterator<Item = usize>>(mut self, indices: I) -> Self {
        self.extra_indices = indices.into_iter().collect();
        self
    }
}

/// Whether noun-chunk accessors apply the validity predicate to the chunk's
/// tokens before reporting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkCleaning {
    /// Drop stopword/punctuation/whitespace tokens from each chunk.
    Cleaned,
    /// Report every token of each chunk.
    Raw,
}

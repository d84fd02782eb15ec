//! Token validity and keep/drop policy
//!
//! [`TokenFilter`] bundles the stopword vocabulary and the POS denylist
//! into one immutable decision unit. Validity (stopword/punctuation/
//! whitespace) and the denylist drop tokens; protected indices override
//! both.

use rustc_hash::FxHashSet;

use crate::filter::denylist::german_function_tags;
use crate::filter::protected::ProtectedIndices;
use crate::nlp::StopwordSet;
use crate::types::Token;

/// Immutable filtering policy: stopword vocabulary plus POS denylist.
#[derive(Debug, Clone)]
pub struct TokenFilter {
    stopwords: StopwordSet,
    denylist: FxHashSet<String>,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::new(StopwordSet::default(), german_function_tags())
    }
}

impl TokenFilter {
    /// Create a filter from a stopword vocabulary and a tag denylist.
    pub fn new(stopwords: StopwordSet, denylist: FxHashSet<String>) -> Self {
        Self {
            stopwords,
            denylist,
        }
    }

    /// The stopword vocabulary this filter consults.
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Whether a token is content-bearing: not a stopword, not punctuation,
    /// not whitespace. Stopword status comes from the vocabulary keyed by
    /// the lowercased surface form; the token's own flag is not consulted.
    pub fn is_valid(&self, token: &Token) -> bool {
        !self.stopwords.is_stopword(&token.text) && !token.is_punct && !token.is_space
    }

    /// Whether a token survives filtering.
    ///
    /// Protected indices keep the token unconditionally; otherwise it must
    /// be valid and its tag must not be denylisted.
    pub fn should_keep(&self, token: &Token, protected: &ProtectedIndices) -> bool {
        protected.contains(token.index)
            || (self.is_valid(token) && !self.denylist.contains(token.tag.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> TokenFilter {
        TokenFilter::default()
    }

    fn noun(text: &str, index: usize) -> Token {
        Token::new(text, text, "NN", index, 0)
    }

    #[test]
    fn test_valid_content_token() {
        let f = filter();
        assert!(f.is_valid(&noun("Mann", 0)));
    }

    #[test]
    fn test_stopword_invalid_even_capitalized() {
        let f = filter();
        // "Der" is not flagged by upstream taggers; the lowercased lookup
        // still catches it.
        let der = Token::new("Der", "der", "ART", 0, 0);
        assert!(!f.is_valid(&der));
    }

    #[test]
    fn test_flag_on_token_is_ignored() {
        let f = filter();
        // Flag claims stopword, vocabulary disagrees: the vocabulary wins.
        let token = noun("Lokomotive", 0).with_flags(true, false, false);
        assert!(f.is_valid(&token));
    }

    #[test]
    fn test_punctuation_invalid() {
        let f = filter();
        let dot = Token::new(".", ".", "$.", 0, 0).with_flags(false, true, false);
        assert!(!f.is_valid(&dot));
    }

    #[test]
    fn test_whitespace_invalid() {
        let f = filter();
        let space = Token::new("\n", "\n", "SP", 0, 0).with_flags(false, false, true);
        assert!(!f.is_valid(&space));
    }

    #[test]
    fn test_keep_valid_non_denylisted() {
        let f = filter();
        assert!(f.should_keep(&noun("Mann", 0), &ProtectedIndices::empty()));
    }

    #[test]
    fn test_drop_denylisted_tag() {
        let f = filter();
        // "Geburts-" is not a stopword, but TRUNC is a function-word tag.
        let token = Token::new("Geburts-", "geburts-", "TRUNC", 0, 0);
        assert!(!f.should_keep(&token, &ProtectedIndices::empty()));
    }

    #[test]
    fn test_drop_stopword() {
        let f = filter();
        let token = Token::new("ist", "sein", "VAFIN", 0, 0);
        assert!(!f.should_keep(&token, &ProtectedIndices::empty()));
    }

    #[test]
    fn test_protection_overrides_denylist() {
        let f = filter();
        let protected = ProtectedIndices::from_indices([0]);
        let token = Token::new("Der", "der", "ART", 0, 0);
        assert!(f.should_keep(&token, &protected));
    }

    #[test]
    fn test_protection_overrides_validity() {
        let f = filter();
        let protected = ProtectedIndices::from_indices([3]);
        let dot = Token::new(".", ".", "$.", 3, 0).with_flags(false, true, false);
        assert!(f.should_keep(&dot, &protected));
    }

    #[test]
    fn test_unprotected_index_unaffected() {
        let f = filter();
        let protected = ProtectedIndices::from_indices([1]);
        let token = Token::new("ist", "sein", "VAFIN", 0, 0);
        assert!(!f.should_keep(&token, &protected));
    }
}

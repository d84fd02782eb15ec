//! Default POS tag denylist
//!
//! Fine-grained STTS tags for German function words: determiners, pronouns,
//! conjunctions, adpositions, particles, interjections, tag-level
//! punctuation, and residual categories. Tokens with these tags are dropped
//! unless a protected index keeps them.

use rustc_hash::FxHashSet;

/// STTS function-word tags dropped by default.
///
/// `CARD` (cardinal numbers) and `PTKANT` (answer particles) are
/// deliberately absent: numbers and yes/no answers stay in.
pub const GERMAN_FUNCTION_TAGS: &[&str] = &[
    "$(", "$,", "$.", "APPR", "APPO", "APPRART", "APZR", "ART", "ITJ", "KOKOM", "KON", "KOUI",
    "KOUS", "PDS", "PAV", "PROAV", "PDAT", "PIAT", "PIDAT", "PIS", "PPER", "PPOSAT", "PPOSS",
    "PRELAT", "PRELS", "PRF", "PTKA", "PTKVZ", "PTKZU", "PWAT", "PWAV", "PWS", "TRUNC", "XY",
    "SP", "WRP",
];

/// The default German denylist as a set.
pub fn german_function_tags() -> FxHashSet<String> {
    GERMAN_FUNCTION_TAGS.iter().map(|t| t.to_string()).collect()
}

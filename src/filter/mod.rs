//! Token filtering
//!
//! The keep/drop decision: validity (stopword/punctuation/whitespace), the
//! POS denylist, and the protected-index override.

pub mod denylist;
pub mod protected;
pub mod token_filter;

pub use denylist::{german_function_tags, GERMAN_FUNCTION_TAGS};
pub use protected::ProtectedIndices;
pub use token_filter::TokenFilter;

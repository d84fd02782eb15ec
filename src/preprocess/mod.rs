//! Preprocessing front end
//!
//! Configuration plus the [`Preprocessor`] that drives filtering, lemma
//! resolution, and sentence-wise assembly.

pub mod config;
pub mod preprocessor;

pub use config::{ChunkCleaning, PreprocessConfig, PreprocessOptions};
pub use preprocessor::{EntityToken, Preprocessed, Preprocessor};

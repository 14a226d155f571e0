//! Dictionaries for text analysis.
//!
//! Provides curated word sets used by spelling checks, TF-IDF stop-word
//! filtering, syllable counting, and sentence splitting.

pub mod abbreviations;
pub mod english;
pub mod stop_words;
pub mod syllables;

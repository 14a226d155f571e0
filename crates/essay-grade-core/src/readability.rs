//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher = easier to read. Typical prose lands between 0 and 100, but short
//! or pathological inputs can leave that range, so the raw score is clamped
//! to `[-100, 200]` and mapped onto `[0, 1]` via `(raw + 100) / 300`.
//!
//! The Flesch-Kincaid Grade Level is reported alongside for context.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::syllables;
use crate::error::{AnalysisError, AnalysisResult};
use crate::text;

/// Raw score substituted when the formula cannot be computed.
pub const FALLBACK_READING_EASE: f64 = 50.0;

const RAW_MIN: f64 = -100.0;
const RAW_MAX: f64 = 200.0;

/// Sentence, word and syllable counts with the formulas applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityStats {
    /// Flesch Reading Ease (unclamped).
    pub reading_ease: f64,
    /// Flesch-Kincaid Grade Level.
    pub grade: f64,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Number of words detected.
    pub words: usize,
    /// Total syllable count.
    pub syllables: usize,
}

/// Readability metric for the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Normalized score in `[0, 1]`.
    pub score: f64,
    /// Raw reading ease actually used (after fallback, before clamping).
    pub reading_ease: f64,
    /// Whether the neutral fallback replaced an uncomputable formula.
    pub fallback: bool,
    /// Full statistics when the formula could be computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ReadabilityStats>,
}

/// Compute readability statistics.
///
/// Fails with [`AnalysisError::EmptyInput`] when there are no words or no
/// sentences to measure.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn readability_stats(text: &str) -> AnalysisResult<ReadabilityStats> {
    let sentences = text::split_sentences(text).len();
    let words = count_words(text);
    let syllables = count_syllables(text);

    if words == 0 || sentences == 0 {
        return Err(AnalysisError::EmptyInput);
    }

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let reading_ease = 1.015f64.mul_add(-words_per_sentence, 206.835) - 84.6 * syllables_per_word;
    let grade = 0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59;

    Ok(ReadabilityStats {
        reading_ease,
        grade,
        sentences,
        words,
        syllables,
    })
}

/// Run a fallible metric, substituting `default` on failure.
///
/// The failure is logged at `debug` and reported back as `true` so callers
/// can surface that the neutral value was used.
pub fn with_fallback<T, F>(default: T, metric: F) -> (T, bool)
where
    F: FnOnce() -> AnalysisResult<T>,
{
    match metric() {
        Ok(value) => (value, false),
        Err(err) => {
            tracing::debug!(error = %err, "metric unavailable, using neutral default");
            (default, true)
        }
    }
}

/// Map a raw reading-ease value onto `[0, 1]`.
pub fn normalize_reading_ease(raw: f64) -> f64 {
    ((raw.clamp(RAW_MIN, RAW_MAX) - RAW_MIN) / (RAW_MAX - RAW_MIN)).clamp(0.0, 1.0)
}

/// Score readability in `[0, 1]`. Never fails.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn score_readability(text: &str) -> ReadabilityReport {
    let (stats, fallback) = with_fallback(None, || readability_stats(text).map(Some));
    let reading_ease = stats.map_or(FALLBACK_READING_EASE, |s| s.reading_ease);

    ReadabilityReport {
        score: normalize_reading_ease(reading_ease),
        reading_ease,
        fallback,
        stats,
    }
}

/// Count words by whitespace splitting, ignoring pure punctuation.
fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .count()
}

/// Count total syllables across all words.
fn count_syllables(text: &str) -> usize {
    text.split_whitespace()
        .map(|w| syllables::count_syllables(w.trim_matches(|c: char| !c.is_alphabetic())))
        .sum()
}

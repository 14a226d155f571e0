//! Structural coherence from sentence-length statistics.
//!
//! Two terms are blended: how close the average sentence is to an ideal
//! length, and how steady sentence lengths are. The average alone cannot
//! tell a uniformly long essay from a volatile one; the variance alone
//! cannot tell a choppy essay from a well-paced one.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Default target sentence length, in words.
pub const DEFAULT_IDEAL_SENTENCE_LENGTH: f64 = 16.0;

const AVERAGE_WEIGHT: f64 = 0.6;
const VARIANCE_WEIGHT: f64 = 0.4;

/// Coherence metric for the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CoherenceReport {
    /// Blended score in `[0, 1]`.
    pub score: f64,
    /// Number of sentences detected.
    pub sentence_count: usize,
    /// Mean words per sentence.
    pub average_length: f64,
    /// Population variance of words per sentence.
    pub variance: f64,
    /// Closeness of the mean to the ideal, in `[0, 1]`.
    pub average_score: f64,
    /// `1 / (1 + variance)`.
    pub variance_score: f64,
}

impl CoherenceReport {
    const fn empty() -> Self {
        Self {
            score: 0.0,
            sentence_count: 0,
            average_length: 0.0,
            variance: 0.0,
            average_score: 0.0,
            variance_score: 0.0,
        }
    }
}

/// Score coherence against an `ideal` words-per-sentence target.
///
/// Text with no sentences scores exactly 0.
#[tracing::instrument(skip(input), fields(text_len = input.len()))]
pub fn score_coherence(input: &str, ideal: f64) -> CoherenceReport {
    let lengths: Vec<f64> = text::split_sentences(input)
        .into_iter()
        .map(|s| text::word_count(s) as f64)
        .collect();
    if lengths.is_empty() {
        return CoherenceReport::empty();
    }

    let n = lengths.len() as f64;
    let average_length = lengths.iter().sum::<f64>() / n;
    let variance = population_variance(&lengths, average_length);

    let ideal = if ideal > 0.0 {
        ideal
    } else {
        DEFAULT_IDEAL_SENTENCE_LENGTH
    };
    let average_score = (1.0 - (average_length - ideal).abs() / ideal).max(0.0);
    let variance_score = 1.0 / (1.0 + variance);
    let score = AVERAGE_WEIGHT
        .mul_add(average_score, VARIANCE_WEIGHT * variance_score)
        .clamp(0.0, 1.0);

    tracing::debug!(
        sentences = lengths.len(),
        average_length,
        variance,
        score,
        "coherence scored"
    );

    CoherenceReport {
        score,
        sentence_count: lengths.len(),
        average_length,
        variance,
        average_score,
        variance_score,
    }
}

/// Variance over the full set; a single value has variance 0.
fn population_variance(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(words: usize) -> String {
        let body: Vec<&str> = std::iter::once("Each")
            .chain(std::iter::repeat_n("word", words - 1))
            .collect();
        format!("{}.", body.join(" "))
    }

    #[test]
    fn empty_text_scores_zero() {
        let report = score_coherence("", DEFAULT_IDEAL_SENTENCE_LENGTH);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.sentence_count, 0);
    }

    #[test]
    fn uniform_ideal_sentences_score_one() {
        let text = [sentence(16), sentence(16), sentence(16)].join(" ");
        let report = score_coherence(&text, 16.0);
        assert_eq!(report.sentence_count, 3);
        assert!((report.average_length - 16.0).abs() < 1e-9);
        assert_eq!(report.variance, 0.0);
        assert!((report.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn single_sentence_has_zero_variance() {
        let report = score_coherence(&sentence(8), 16.0);
        assert_eq!(report.variance, 0.0);
        assert!((report.average_score - 0.5).abs() < 1e-9);
        assert!((report.score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn erratic_lengths_are_penalized() {
        let steady = [sentence(14), sentence(18)].join(" ");
        let erratic = [sentence(4), sentence(28)].join(" ");
        let steady = score_coherence(&steady, 16.0);
        let erratic = score_coherence(&erratic, 16.0);
        assert!((steady.average_length - erratic.average_length).abs() < 1e-9);
        assert!((steady.variance - 4.0).abs() < 1e-9);
        assert!((erratic.variance - 144.0).abs() < 1e-9);
        assert!(steady.score > erratic.score);
    }

    #[test]
    fn very_long_sentences_floor_average_term() {
        let report = score_coherence(&sentence(40), 16.0);
        assert_eq!(report.average_score, 0.0);
        assert!((report.score - 0.4).abs() < 1e-9);
    }

    #[test]
    fn non_positive_ideal_uses_default() {
        let report = score_coherence(&sentence(16), 0.0);
        assert!((report.score - 1.0).abs() < 1e-9);
    }
}

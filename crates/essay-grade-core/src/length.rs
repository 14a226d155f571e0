//! Length fitness: how well the word count fits an ideal range.
//!
//! The ideal range is inclusive at both ends. Below it the score rises
//! linearly from 0; above it the score decays linearly, reaching 0 at twice
//! the upper bound.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Default lower bound of the ideal range.
pub const DEFAULT_MIN_WORDS: usize = 250;
/// Default upper bound of the ideal range.
pub const DEFAULT_MAX_WORDS: usize = 1200;

/// Inclusive ideal word-count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LengthBounds {
    /// Lowest word count that scores 1.
    pub min_words: usize,
    /// Highest word count that scores 1.
    pub max_words: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl LengthBounds {
    /// Create bounds without validation.
    pub const fn new(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words,
            max_words,
        }
    }

    /// Problems with these bounds, empty when valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.max_words == 0 {
            errors.push("length.max_words must be greater than 0".to_string());
        }
        if self.min_words > self.max_words {
            errors.push(format!(
                "length.min_words ({}) must not exceed length.max_words ({})",
                self.min_words, self.max_words
            ));
        }
        errors
    }

    /// Fitness of a word count, in `[0, 1]`.
    pub fn fitness(&self, words: usize) -> f64 {
        let n = words as f64;
        if words < self.min_words {
            n / self.min_words.max(1) as f64
        } else if words <= self.max_words {
            1.0
        } else {
            let max = self.max_words.max(1) as f64;
            (1.0 - (n - max) / max).max(0.0)
        }
    }
}

/// Length metric for the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LengthReport {
    /// Fitness in `[0, 1]`.
    pub score: f64,
    /// Number of `\w+` tokens.
    pub word_count: usize,
    /// Range the count was scored against.
    pub bounds: LengthBounds,
}

/// Score the essay's word count against `bounds`.
#[tracing::instrument(skip(input), fields(text_len = input.len()))]
pub fn score_length(input: &str, bounds: LengthBounds) -> LengthReport {
    let word_count = text::word_count(input);
    let score = bounds.fitness(word_count).clamp(0.0, 1.0);
    tracing::debug!(word_count, score, "length scored");
    LengthReport {
        score,
        word_count,
        bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["essay"; n].join(" ")
    }

    #[test]
    fn inside_range_scores_one() {
        let report = score_length(&words(500), LengthBounds::default());
        assert_eq!(report.word_count, 500);
        assert_eq!(report.score, 1.0);
    }

    #[test]
    fn boundaries_are_inclusive() {
        let bounds = LengthBounds::default();
        assert_eq!(bounds.fitness(250), 1.0);
        assert_eq!(bounds.fitness(1200), 1.0);
        assert!(bounds.fitness(249) < 1.0);
        assert!(bounds.fitness(1201) < 1.0);
    }

    #[test]
    fn short_essay_rises_linearly() {
        let report = score_length(&words(100), LengthBounds::default());
        assert!((report.score - 0.4).abs() < 1e-12);
    }

    #[test]
    fn long_essay_decays() {
        let report = score_length(&words(1500), LengthBounds::default());
        assert!((report.score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn never_negative() {
        let bounds = LengthBounds::default();
        assert_eq!(bounds.fitness(5000), 0.0);
        assert_eq!(bounds.fitness(0), 0.0);
    }

    #[test]
    fn zero_minimum_does_not_divide_by_zero() {
        let bounds = LengthBounds::new(0, 10);
        assert_eq!(bounds.fitness(0), 1.0);
        assert!(bounds.validate().is_empty());
    }

    #[test]
    fn validation_catches_bad_bounds() {
        assert_eq!(LengthBounds::new(10, 5).validate().len(), 1);
        assert_eq!(LengthBounds::new(0, 0).validate().len(), 1);
        assert!(LengthBounds::default().validate().is_empty());
    }
}

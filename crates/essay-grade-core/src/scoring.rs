//! Aggregation of metric scores and suggestion generation.
//!
//! The five rule-based metrics are combined with a fixed weight table into a
//! rule score on `[0, 100]`, which is then blended with the external ML
//! score. Suggestions are threshold-driven and emitted in check order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coherence::CoherenceReport;
use crate::grammar::{GrammarReport, Misspelling};
use crate::length::LengthReport;
use crate::readability::ReadabilityReport;
use crate::relevance::RelevanceReport;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Suggestion emitted when the relevance threshold fires.
pub const RELEVANCE_SUGGESTION: &str = "Add more domain-specific content and examples.";
/// Suggestion emitted when the coherence threshold fires.
pub const COHERENCE_SUGGESTION: &str = "Improve sentence structure and flow.";
/// Suggestion emitted when the readability threshold fires.
pub const READABILITY_SUGGESTION: &str = "Use shorter, clearer sentences.";
/// Suggestion emitted when the length threshold fires.
pub const LENGTH_SUGGESTION: &str = "Adjust essay length closer to ideal range.";

/// Per-metric weights of the rule score. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Weights {
    /// Domain relevance.
    pub relevance: f64,
    /// Spelling.
    pub grammar: f64,
    /// Sentence-length coherence.
    pub coherence: f64,
    /// Reading ease.
    pub readability: f64,
    /// Length fitness.
    pub length: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            relevance: 0.40,
            grammar: 0.25,
            coherence: 0.15,
            readability: 0.10,
            length: 0.10,
        }
    }
}

impl Weights {
    fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("relevance", self.relevance),
            ("grammar", self.grammar),
            ("coherence", self.coherence),
            ("readability", self.readability),
            ("length", self.length),
        ]
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, w)| w).sum()
    }
}

/// Cutoffs below which a suggestion is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Thresholds {
    /// Relevance cutoff.
    pub relevance: f64,
    /// Coherence cutoff.
    pub coherence: f64,
    /// Readability cutoff.
    pub readability: f64,
    /// Length fitness cutoff.
    pub length: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            relevance: 0.4,
            coherence: 0.5,
            readability: 0.4,
            length: 0.5,
        }
    }
}

/// What to do when the ML predictor fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PredictorFailure {
    /// Log the failure and aggregate from the rule score alone.
    #[default]
    RuleOnly,
    /// Abort the evaluation with the predictor's error.
    Fail,
}

impl PredictorFailure {
    /// Returns the policy as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RuleOnly => "rule-only",
            Self::Fail => "fail",
        }
    }
}

/// Tunable aggregation policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringPolicy {
    /// Rule-score weights.
    pub weights: Weights,
    /// Share of the ML score in the final blend, in `[0, 1]`.
    pub ml_weight: f64,
    /// Suggestion cutoffs.
    pub thresholds: Thresholds,
    /// Behavior on predictor failure.
    pub on_predictor_error: PredictorFailure,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            ml_weight: 0.4,
            thresholds: Thresholds::default(),
            on_predictor_error: PredictorFailure::RuleOnly,
        }
    }
}

impl ScoringPolicy {
    /// All problems with this policy, empty when valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        for (name, weight) in self.weights.entries() {
            if !weight.is_finite() || weight < 0.0 {
                errors.push(format!(
                    "weights.{name} must be a non-negative number (got {weight})"
                ));
            }
        }
        let total = self.weights.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            errors.push(format!("weights must sum to 1.0 (got {total})"));
        }
        if !(0.0..=1.0).contains(&self.ml_weight) {
            errors.push(format!(
                "ml_weight must be within [0, 1] (got {})",
                self.ml_weight
            ));
        }
        errors
    }

    /// Weighted rule score on `[0, 100]`.
    pub fn rule_score(&self, metrics: &Metrics) -> f64 {
        let w = &self.weights;
        let sum = w.relevance * metrics.relevance.score
            + w.grammar * metrics.grammar.score
            + w.coherence * metrics.coherence.score
            + w.readability * metrics.readability.score
            + w.length * metrics.length.score;
        sum.clamp(0.0, 1.0) * 100.0
    }

    /// Final score on `[0, 100]`: the blend when an ML score exists, else the rule score.
    pub fn blend(&self, rule_score: f64, ml_score: Option<f64>) -> f64 {
        let blended = match ml_score {
            Some(ml) => {
                (1.0 - self.ml_weight).mul_add(rule_score, self.ml_weight * ml.clamp(0.0, 100.0))
            }
            None => rule_score,
        };
        blended.clamp(0.0, 100.0)
    }

    /// Canned suggestions for each metric below its cutoff, in check order.
    pub fn suggestions(&self, metrics: &Metrics) -> Vec<String> {
        let t = &self.thresholds;
        let mut out = Vec::new();
        let misspelled = metrics.grammar.misspelled.len();
        if misspelled > 0 {
            out.push(format!("Fix {misspelled} spelling mistakes."));
        }
        if metrics.relevance.score < t.relevance {
            out.push(RELEVANCE_SUGGESTION.to_string());
        }
        if metrics.coherence.score < t.coherence {
            out.push(COHERENCE_SUGGESTION.to_string());
        }
        if metrics.readability.score < t.readability {
            out.push(READABILITY_SUGGESTION.to_string());
        }
        if metrics.length.score < t.length {
            out.push(LENGTH_SUGGESTION.to_string());
        }
        out
    }
}

/// Every rule-based metric for one essay.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    /// Spelling.
    pub grammar: GrammarReport,
    /// Domain relevance.
    pub relevance: RelevanceReport,
    /// Reading ease.
    pub readability: ReadabilityReport,
    /// Sentence-length coherence.
    pub coherence: CoherenceReport,
    /// Length fitness.
    pub length: LengthReport,
}

/// What the ML predictor contributed to an evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prediction {
    /// Predicted subject domain.
    pub domain: Option<String>,
    /// Predicted score on `[0, 100]`.
    pub score: Option<f64>,
}

/// The engine's complete, immutable output for one essay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationResult {
    /// Final score on `[0, 100]`.
    pub aggregate_score: f64,
    /// Weighted rule-based score on `[0, 100]`.
    pub rule_score: f64,
    /// Domain the essay was scored against.
    pub domain: String,
    /// TF-IDF similarity to the domain corpus.
    pub relevance: f64,
    /// Spelling correctness.
    pub grammar: f64,
    /// Normalized reading ease.
    pub readability: f64,
    /// Sentence-length coherence.
    pub coherence: f64,
    /// Length fitness.
    pub length_score: f64,
    /// Share of domain keywords used.
    pub keyword_coverage: f64,
    /// Domain keywords found, sorted.
    pub matched_keywords: Vec<String>,
    /// Unknown words and their suggested corrections.
    pub misspelled: Vec<Misspelling>,
    /// Domain predicted by the ML collaborator.
    pub predicted_domain: Option<String>,
    /// Score predicted by the ML collaborator, clamped to `[0, 100]`.
    pub ml_score: Option<f64>,
    /// Number of words in the normalized essay.
    pub word_count: usize,
    /// Improvement suggestions in check order.
    pub suggestions: Vec<String>,
}

/// Combine metrics and the ML prediction into an [`EvaluationResult`].
#[tracing::instrument(skip_all, fields(domain = %domain))]
pub fn aggregate(
    domain: &str,
    metrics: Metrics,
    prediction: Prediction,
    policy: &ScoringPolicy,
) -> EvaluationResult {
    let rule_score = policy.rule_score(&metrics);
    let ml_score = prediction.score.map(|s| s.clamp(0.0, 100.0));
    let aggregate_score = policy.blend(rule_score, ml_score);
    let suggestions = policy.suggestions(&metrics);

    tracing::info!(
        domain,
        aggregate_score,
        rule_score,
        ml_score = ?ml_score,
        suggestions = suggestions.len(),
        "essay aggregated"
    );

    let Metrics {
        grammar,
        relevance,
        readability,
        coherence,
        length,
    } = metrics;

    EvaluationResult {
        aggregate_score,
        rule_score,
        domain: domain.to_string(),
        relevance: relevance.score,
        grammar: grammar.score,
        readability: readability.score,
        coherence: coherence.score,
        length_score: length.score,
        keyword_coverage: relevance.coverage,
        matched_keywords: relevance.matched_keywords,
        misspelled: grammar.misspelled,
        predicted_domain: prediction.domain,
        ml_score,
        word_count: length.word_count,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::LengthBounds;

    fn metrics(value: f64, misspelled: usize) -> Metrics {
        Metrics {
            grammar: GrammarReport {
                score: value,
                token_count: 10,
                misspelled: (0..misspelled)
                    .map(|i| Misspelling {
                        word: format!("xq{i}"),
                        suggestion: None,
                    })
                    .collect(),
            },
            relevance: RelevanceReport {
                score: value,
                matched_keywords: vec!["trade".to_string()],
                coverage: 0.25,
                known_domain: true,
            },
            readability: ReadabilityReport {
                score: value,
                reading_ease: 50.0,
                fallback: false,
                stats: None,
            },
            coherence: CoherenceReport {
                score: value,
                sentence_count: 1,
                average_length: 16.0,
                variance: 0.0,
                average_score: value,
                variance_score: 1.0,
            },
            length: LengthReport {
                score: value,
                word_count: 300,
                bounds: LengthBounds::default(),
            },
        }
    }

    #[test]
    fn default_policy_is_valid() {
        let policy = ScoringPolicy::default();
        assert!(policy.validate().is_empty());
        assert!((policy.weights.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn validation_collects_every_problem() {
        let policy = ScoringPolicy {
            weights: Weights {
                relevance: -0.1,
                ..Weights::default()
            },
            ml_weight: 1.5,
            ..ScoringPolicy::default()
        };
        let errors = policy.validate();
        assert_eq!(errors.len(), 3, "{errors:?}");
        assert!(errors.iter().any(|e| e.contains("weights.relevance")));
        assert!(errors.iter().any(|e| e.contains("sum to 1.0")));
        assert!(errors.iter().any(|e| e.contains("ml_weight")));
    }

    #[test]
    fn perfect_metrics_give_full_rule_score() {
        let policy = ScoringPolicy::default();
        assert!((policy.rule_score(&metrics(1.0, 0)) - 100.0).abs() < 1e-9);
        assert_eq!(policy.rule_score(&metrics(0.0, 0)), 0.0);
    }

    #[test]
    fn blend_mixes_sixty_forty() {
        let policy = ScoringPolicy::default();
        assert!((policy.blend(50.0, Some(100.0)) - 70.0).abs() < 1e-9);
        assert_eq!(policy.blend(50.0, None), 50.0);
    }

    #[test]
    fn blend_clamps_ml_score() {
        let policy = ScoringPolicy::default();
        assert!((policy.blend(100.0, Some(250.0)) - 100.0).abs() < 1e-9);
        assert!((policy.blend(0.0, Some(-40.0))).abs() < 1e-9);
    }

    #[test]
    fn all_suggestions_fire_in_check_order() {
        let policy = ScoringPolicy::default();
        let suggestions = policy.suggestions(&metrics(0.1, 3));
        assert_eq!(
            suggestions,
            vec![
                "Fix 3 spelling mistakes.".to_string(),
                RELEVANCE_SUGGESTION.to_string(),
                COHERENCE_SUGGESTION.to_string(),
                READABILITY_SUGGESTION.to_string(),
                LENGTH_SUGGESTION.to_string(),
            ]
        );
    }

    #[test]
    fn good_metrics_need_no_suggestions() {
        let policy = ScoringPolicy::default();
        assert!(policy.suggestions(&metrics(0.9, 0)).is_empty());
    }

    #[test]
    fn aggregate_builds_result() {
        let policy = ScoringPolicy::default();
        let result = aggregate(
            "Economy",
            metrics(1.0, 0),
            Prediction {
                domain: Some("Economy".to_string()),
                score: Some(80.0),
            },
            &policy,
        );
        assert!((result.aggregate_score - 92.0).abs() < 1e-9);
        assert!((result.rule_score - 100.0).abs() < 1e-9);
        assert_eq!(result.keyword_coverage, 0.25);
        assert_eq!(result.matched_keywords, vec!["trade"]);
        assert_eq!(result.predicted_domain.as_deref(), Some("Economy"));
        assert_eq!(result.word_count, 300);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn policy_deserializes_kebab_case() {
        let yaml = "ml_weight: 0.0\non_predictor_error: fail\nweights:\n  relevance: 0.5\n  grammar: 0.15\n";
        let policy: ScoringPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.on_predictor_error, PredictorFailure::Fail);
        assert_eq!(policy.ml_weight, 0.0);
        assert_eq!(policy.weights.relevance, 0.5);
        assert_eq!(policy.weights.coherence, 0.15);
        assert!(policy.validate().is_empty());
    }
}

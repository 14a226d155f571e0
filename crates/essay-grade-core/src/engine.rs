//! The evaluation engine.
//!
//! An [`Engine`] owns the shared read-only resources (domain registry,
//! spelling dictionary), the scoring policy and an optional ML predictor.
//! It holds no per-call state, so one engine can serve concurrent
//! evaluations behind an `Arc`.

use std::sync::Arc;

use camino::Utf8Path;

use crate::coherence::{self, DEFAULT_IDEAL_SENTENCE_LENGTH};
use crate::config::Config;
use crate::domains::DomainRegistry;
use crate::error::{EngineError, EvalResult, EvaluationError, PredictorError};
use crate::grammar::{self, Dictionary, GrammarReport};
use crate::length::{self, LengthBounds};
use crate::predictor::{CommandPredictor, CorpusPredictor, MlPrediction, ScorePredictor};
use crate::readability::{self, ReadabilityReport};
use crate::relevance;
use crate::scoring::{self, EvaluationResult, Metrics, Prediction, PredictorFailure, ScoringPolicy};
use crate::text;

/// Scores essays against a domain.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: Arc<DomainRegistry>,
    dictionary: Arc<Dictionary>,
    policy: ScoringPolicy,
    length_bounds: LengthBounds,
    ideal_sentence_length: f64,
    predictor: Option<Arc<dyn ScorePredictor>>,
}

impl Default for Engine {
    /// Built-in domains and dictionary, default policy, no predictor.
    fn default() -> Self {
        Self {
            registry: DomainRegistry::builtin(),
            dictionary: Dictionary::english(),
            policy: ScoringPolicy::default(),
            length_bounds: LengthBounds::default(),
            ideal_sentence_length: DEFAULT_IDEAL_SENTENCE_LENGTH,
            predictor: None,
        }
    }
}

impl Engine {
    /// Start building an engine from the built-in resources.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Domain names in registry order.
    pub fn domain_list(&self) -> Vec<String> {
        self.registry.names()
    }

    /// The domain registry.
    pub fn registry(&self) -> &DomainRegistry {
        &self.registry
    }

    /// The active scoring policy.
    pub const fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Name of the configured predictor, if any.
    pub fn predictor_name(&self) -> Option<&str> {
        self.predictor.as_deref().map(|p| p.name())
    }

    /// The registry domain whose corpus is most similar to `text`.
    pub fn closest_domain(&self, text: &str) -> Option<String> {
        self.registry
            .closest(text::normalize(text).as_str())
            .map(|p| p.name().to_string())
    }

    /// Spelling report using this engine's dictionary.
    pub fn check_spelling(&self, text: &str) -> GrammarReport {
        grammar::check_grammar(text::normalize(text).as_str(), &self.dictionary)
    }

    /// Readability report for `text`.
    pub fn check_readability(&self, text: &str) -> ReadabilityReport {
        readability::score_readability(text::normalize(text).as_str())
    }

    /// Evaluate an essay against `domain`.
    ///
    /// An unknown domain is scored against an empty corpus rather than
    /// rejected. Fails only on empty text, or on predictor failure when the
    /// policy is [`PredictorFailure::Fail`].
    #[tracing::instrument(skip_all, fields(domain = %domain, text_len = text.len()))]
    pub fn evaluate(&self, text: &str, domain: &str) -> EvalResult<EvaluationResult> {
        let essay = text::normalize(text);
        if essay.is_empty() {
            tracing::debug!("empty essay after normalization");
            return Err(EvaluationError::EmptyInput);
        }
        let input = essay.as_str();

        let metrics = Metrics {
            grammar: grammar::check_grammar(input, &self.dictionary),
            relevance: relevance::score_relevance(input, domain, &self.registry),
            readability: readability::score_readability(input),
            coherence: coherence::score_coherence(input, self.ideal_sentence_length),
            length: length::score_length(input, self.length_bounds),
        };
        let prediction = self.predict(input)?;

        Ok(scoring::aggregate(domain, metrics, prediction, &self.policy))
    }

    fn predict(&self, input: &str) -> EvalResult<Prediction> {
        let Some(predictor) = self.predictor.as_deref() else {
            return Ok(Prediction::default());
        };

        match predictor.predict(input) {
            Ok(MlPrediction { domain, score }) => Ok(Prediction {
                domain: Some(domain),
                score,
            }),
            Err(PredictorError::Unsupported(what)) => {
                tracing::debug!(predictor = predictor.name(), what, "prediction unsupported");
                Ok(Prediction::default())
            }
            Err(err) => match self.policy.on_predictor_error {
                PredictorFailure::RuleOnly => {
                    tracing::warn!(
                        predictor = predictor.name(),
                        error = %err,
                        "predictor failed, using rule-based score only"
                    );
                    Ok(Prediction::default())
                }
                PredictorFailure::Fail => Err(err.into()),
            },
        }
    }
}

/// Builder for [`Engine`].
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    engine: Engine,
}

impl EngineBuilder {
    /// Builder configured from a loaded [`Config`].
    ///
    /// A relative `dictionary.word_list` resolves against `base_dir`. Without
    /// a predictor command, the domain is predicted from corpus similarity.
    #[tracing::instrument(skip_all)]
    pub fn from_config(config: &Config, base_dir: Option<&Utf8Path>) -> Result<Self, EngineError> {
        let registry = match &config.domains {
            Some(custom) if !custom.is_empty() => Arc::new(DomainRegistry::with_custom(
                custom.iter().map(|(name, corpus)| (name.as_str(), corpus.as_str())),
            )),
            _ => DomainRegistry::builtin(),
        };

        let extras = &config.dictionary;
        let dictionary = if extras.extra_words.is_empty() && extras.word_list.is_none() {
            Dictionary::english()
        } else {
            let mut dict = (*Dictionary::english()).clone();
            dict.extend(&extras.extra_words);
            if let Some(list) = &extras.word_list {
                let path = match base_dir {
                    Some(dir) if list.is_relative() => dir.join(list),
                    _ => list.clone(),
                };
                dict.load_word_list(&path)?;
            }
            Arc::new(dict)
        };

        let predictor: Arc<dyn ScorePredictor> = match &config.predictor.command {
            Some(command) => Arc::new(CommandPredictor::new(command.clone())),
            None => Arc::new(CorpusPredictor::new(Arc::clone(&registry))),
        };

        tracing::debug!(
            domains = registry.len(),
            words = dictionary.len(),
            predictor = predictor.name(),
            "engine configured"
        );

        let mut builder = Self::default()
            .registry(registry)
            .dictionary(dictionary)
            .policy(config.scoring)
            .length_bounds(config.length)
            .predictor(predictor);
        if let Some(ideal) = config.ideal_sentence_length {
            builder = builder.ideal_sentence_length(ideal);
        }
        Ok(builder)
    }

    /// Use `registry` for relevance scoring and domain listing.
    pub fn registry(mut self, registry: Arc<DomainRegistry>) -> Self {
        self.engine.registry = registry;
        self
    }

    /// Use `dictionary` for spelling.
    pub fn dictionary(mut self, dictionary: Arc<Dictionary>) -> Self {
        self.engine.dictionary = dictionary;
        self
    }

    /// Use `policy` for aggregation.
    pub const fn policy(mut self, policy: ScoringPolicy) -> Self {
        self.engine.policy = policy;
        self
    }

    /// Use `bounds` for length fitness.
    pub const fn length_bounds(mut self, bounds: LengthBounds) -> Self {
        self.engine.length_bounds = bounds;
        self
    }

    /// Target average sentence length for coherence.
    pub const fn ideal_sentence_length(mut self, words: f64) -> Self {
        self.engine.ideal_sentence_length = words;
        self
    }

    /// The configured registry's closest domain to `text`.
    pub fn closest_domain(&self, text: &str) -> Option<String> {
        self.engine.closest_domain(text)
    }

    /// Consult `predictor` on every evaluation.
    pub fn predictor(mut self, predictor: Arc<dyn ScorePredictor>) -> Self {
        self.engine.predictor = Some(predictor);
        self
    }

    /// Aggregate from the rule-based score alone.
    pub fn without_predictor(mut self) -> Self {
        self.engine.predictor = None;
        self
    }

    /// Validate the settings and build the engine.
    pub fn build(self) -> Result<Engine, EngineError> {
        let engine = self.engine;
        let mut errors = engine.policy.validate();
        errors.extend(engine.length_bounds.validate());
        let ideal = engine.ideal_sentence_length;
        if !ideal.is_finite() || ideal <= 0.0 {
            errors.push(format!(
                "ideal_sentence_length must be a positive number (got {ideal})"
            ));
        }
        if !errors.is_empty() {
            return Err(EngineError::InvalidPolicy(errors));
        }
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictorResult;
    use crate::predictor::FixedPredictor;
    use crate::scoring::{LENGTH_SUGGESTION, RELEVANCE_SUGGESTION};

    const SENTENCES: [&str; 4] = [
        "Fiscal policy and monetary policy shape growth, inflation and unemployment across the national economy every year.",
        "Public finance depends on taxation, trade and investment, while sound banking reforms keep the market stable.",
        "Strong growth in every sector needs investment, stable inflation, fair taxation and open trade with partners.",
        "Market reforms in banking and public finance can lower unemployment and raise growth for the economy.",
    ];

    /// Nineteen 16-word sentences about the economy: 304 words.
    fn economy_essay() -> String {
        SENTENCES
            .iter()
            .cycle()
            .take(19)
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[derive(Debug)]
    struct BrokenPredictor;

    impl ScorePredictor for BrokenPredictor {
        fn name(&self) -> &str {
            "broken"
        }

        fn predict_domain(&self, _text: &str) -> PredictorResult<String> {
            Err(PredictorError::Malformed("garbage".to_string()))
        }

        fn predict_score(&self, _text: &str, _domain: &str) -> PredictorResult<f64> {
            Err(PredictorError::Malformed("garbage".to_string()))
        }
    }

    fn engine_with(predictor: Arc<dyn ScorePredictor>, on_error: PredictorFailure) -> Engine {
        Engine::builder()
            .policy(ScoringPolicy {
                on_predictor_error: on_error,
                ..ScoringPolicy::default()
            })
            .predictor(predictor)
            .build()
            .unwrap()
    }

    #[test]
    fn well_written_economy_essay_scores_high() {
        let engine = engine_with(
            Arc::new(FixedPredictor::new("Economy", 80.0)),
            PredictorFailure::RuleOnly,
        );
        let result = engine.evaluate(&economy_essay(), "Economy").unwrap();

        assert_eq!(result.domain, "Economy");
        assert_eq!(result.word_count, 304);
        assert_eq!(result.length_score, 1.0);
        assert!(result.coherence > 0.9, "coherence {}", result.coherence);
        assert!(result.grammar > 0.9, "grammar {}", result.grammar);
        assert!(result.relevance > 0.4, "relevance {}", result.relevance);
        assert!(result.aggregate_score > 70.0, "{result:?}");
        assert!(result.suggestions.len() <= 1, "{:?}", result.suggestions);
        assert_eq!(result.ml_score, Some(80.0));
        assert_eq!(result.predicted_domain.as_deref(), Some("Economy"));
        for keyword in ["fiscal", "inflation", "taxation", "trade"] {
            assert!(result.matched_keywords.iter().any(|k| k == keyword), "{keyword}");
        }
    }

    #[test]
    fn everyday_essay_gets_no_spelling_suggestion() {
        let text = include_str!("../tests/fixtures/everyday_essay.txt");
        let result = Engine::default().evaluate(text, "Economy").unwrap();

        assert!(result.misspelled.is_empty(), "{:?}", result.misspelled);
        assert_eq!(result.grammar, 1.0);
        assert!(
            !result.suggestions.iter().any(|s| s.contains("spelling")),
            "{:?}",
            result.suggestions
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let engine = Engine::default();
        let essay = economy_essay();
        let first = engine.evaluate(&essay, "Economy").unwrap();
        let second = engine.evaluate(&essay, "Economy").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn scores_stay_in_bounds() {
        let engine = engine_with(
            Arc::new(FixedPredictor::new("Economy", 250.0)),
            PredictorFailure::RuleOnly,
        );
        for essay in ["Zxq.", "a", "Trade. Trade! Trade?", &economy_essay()] {
            let result = engine.evaluate(essay, "Economy").unwrap();
            assert!((0.0..=100.0).contains(&result.aggregate_score), "{essay}");
            assert!((0.0..=100.0).contains(&result.rule_score), "{essay}");
            for metric in [
                result.relevance,
                result.grammar,
                result.readability,
                result.coherence,
                result.length_score,
                result.keyword_coverage,
            ] {
                assert!((0.0..=1.0).contains(&metric), "{essay}: {metric}");
            }
            assert_eq!(result.ml_score, Some(100.0));
        }
    }

    #[test]
    fn empty_text_is_rejected() {
        let engine = Engine::default();
        assert!(matches!(
            engine.evaluate("  \n\t ", "Economy"),
            Err(EvaluationError::EmptyInput)
        ));
        assert_eq!(
            engine.evaluate("", "Economy").unwrap_err().to_string(),
            "no text detected"
        );
    }

    #[test]
    fn unknown_domain_degrades_gracefully() {
        let engine = Engine::default();
        let result = engine
            .evaluate(&economy_essay(), "NonexistentDomain")
            .unwrap();
        assert_eq!(result.relevance, 0.0);
        assert_eq!(result.keyword_coverage, 0.0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.suggestions.iter().any(|s| s == RELEVANCE_SUGGESTION));
    }

    #[test]
    fn short_essay_gets_length_suggestion() {
        let engine = Engine::default();
        let result = engine.evaluate(SENTENCES[0], "Economy").unwrap();
        assert!(result.length_score < 0.5);
        assert!(result.suggestions.iter().any(|s| s == LENGTH_SUGGESTION));
    }

    #[test]
    fn predictor_failure_falls_back_to_rule_score() {
        let engine = engine_with(Arc::new(BrokenPredictor), PredictorFailure::RuleOnly);
        let result = engine.evaluate(&economy_essay(), "Economy").unwrap();
        assert_eq!(result.aggregate_score, result.rule_score);
        assert_eq!(result.ml_score, None);
        assert_eq!(result.predicted_domain, None);
    }

    #[test]
    fn predictor_failure_is_fatal_when_configured() {
        let engine = engine_with(Arc::new(BrokenPredictor), PredictorFailure::Fail);
        let err = engine.evaluate(&economy_essay(), "Economy").unwrap_err();
        assert!(matches!(err, EvaluationError::Predictor(_)));
    }

    #[test]
    fn corpus_predictor_contributes_domain_only() {
        let engine = engine_with(
            Arc::new(CorpusPredictor::new(DomainRegistry::builtin())),
            PredictorFailure::Fail,
        );
        let result = engine.evaluate(&economy_essay(), "Economy").unwrap();
        assert_eq!(result.predicted_domain.as_deref(), Some("Economy"));
        assert_eq!(result.ml_score, None);
        assert_eq!(result.aggregate_score, result.rule_score);
    }

    #[test]
    fn no_predictor_means_rule_score() {
        let result = Engine::default()
            .evaluate(&economy_essay(), "Economy")
            .unwrap();
        assert_eq!(result.aggregate_score, result.rule_score);
        assert_eq!(result.predicted_domain, None);
    }

    #[test]
    fn build_rejects_invalid_settings() {
        let err = Engine::builder()
            .policy(ScoringPolicy {
                ml_weight: 2.0,
                ..ScoringPolicy::default()
            })
            .length_bounds(LengthBounds::new(500, 100))
            .ideal_sentence_length(0.0)
            .build()
            .unwrap_err();
        let EngineError::InvalidPolicy(errors) = err else {
            panic!("expected InvalidPolicy");
        };
        assert_eq!(errors.len(), 3, "{errors:?}");
    }

    #[test]
    fn domain_list_follows_registry() {
        let engine = Engine::default();
        assert_eq!(engine.domain_list(), DomainRegistry::builtin().names());
        assert_eq!(engine.domain_list().len(), 7);
        assert_eq!(engine.closest_domain(&economy_essay()).as_deref(), Some("Economy"));
        assert_eq!(
            Engine::builder().closest_domain(&economy_essay()).as_deref(),
            Some("Economy")
        );
    }

    #[test]
    fn from_config_applies_custom_domains_and_words() {
        let mut config = Config::default();
        config.domains = Some(
            [(
                "Agriculture".to_string(),
                "crops farming irrigation soil harvest farmers".to_string(),
            )]
            .into_iter()
            .collect(),
        );
        config.dictionary.extra_words = vec!["agroforestry".to_string()];

        let engine = EngineBuilder::from_config(&config, None)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(engine.domain_list().len(), 8);
        assert_eq!(engine.predictor_name(), Some("corpus"));
        assert!(engine.check_spelling("Agroforestry").misspelled.is_empty());

        let result = engine
            .evaluate("Farmers need irrigation for crops.", "Agriculture")
            .unwrap();
        assert!(result.keyword_coverage > 0.0);
        assert_eq!(result.predicted_domain.as_deref(), Some("Agriculture"));
    }

    #[test]
    fn from_config_reports_missing_word_list() {
        let mut config = Config::default();
        config.dictionary.word_list = Some("missing-words.txt".into());
        let err = EngineBuilder::from_config(&config, Some(Utf8Path::new("/nonexistent")))
            .unwrap_err();
        assert!(matches!(err, EngineError::Dictionary(_)));
        assert!(err.to_string().contains("/nonexistent/missing-words.txt"));
    }
}

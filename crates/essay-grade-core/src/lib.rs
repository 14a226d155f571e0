//! Core library for essay-grade.
//!
//! Scores a free-form essay against a subject domain. Five rule-based
//! metrics (spelling, domain relevance, readability, coherence and length
//! fitness) are weighted into a rule score, optionally blended with a score
//! from an external ML predictor, and accompanied by improvement
//! suggestions.
//!
//! # Modules
//!
//! - [`engine`] - The [`Engine`] that runs a full evaluation
//! - [`text`], [`ingest`], [`markdown`] - Getting clean text out of a document
//! - [`grammar`], [`relevance`], [`readability`], [`coherence`], [`length`] - The scorers
//! - [`domains`], [`tfidf`] - Domain corpora and similarity
//! - [`scoring`] - Weights, blending and suggestions
//! - [`predictor`] - The ML predictor seam
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use essay_grade_core::Engine;
//!
//! let engine = Engine::default();
//! let result = engine
//!     .evaluate("Fiscal policy shapes growth and inflation.", "Economy")
//!     .expect("essay is not empty");
//! println!("{:.1}: {:?}", result.aggregate_score, result.suggestions);
//! ```
#![deny(unsafe_code)]

pub mod coherence;
pub mod config;
pub mod dictionaries;
pub mod domains;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod ingest;
pub mod length;
pub mod markdown;
pub mod predictor;
pub mod readability;
pub mod relevance;
pub mod scoring;
pub mod text;
pub mod tfidf;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use domains::{DomainRegistry, get_domain_list};
pub use engine::{Engine, EngineBuilder};
pub use error::{
    ConfigError, ConfigResult, EngineError, EvalResult, EvaluationError, IngestError,
    PredictorError,
};
pub use ingest::{DEFAULT_MAX_INPUT_BYTES, detect_title, extract_text};
pub use predictor::{
    CommandPredictor, CorpusPredictor, FixedPredictor, PredictorCommand, ScorePredictor,
};
pub use scoring::{EvaluationResult, PredictorFailure, ScoringPolicy};

//! Error types for essay-grade-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by an individual metric computation.
///
/// These never escape [`crate::engine::Engine::evaluate`]; each scorer
/// recovers with a neutral default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input text is empty or has no scorable content.
    #[error("no scorable text in input")]
    EmptyInput,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors from the external ML predictor.
#[derive(Error, Debug)]
pub enum PredictorError {
    /// The predictor does not provide this kind of prediction.
    #[error("predictor does not support {0}")]
    Unsupported(&'static str),

    /// The predictor process could not be started or talked to.
    #[error("failed to run predictor `{program}`: {source}")]
    Spawn {
        /// Program that was launched.
        program: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The predictor process exited unsuccessfully.
    #[error("predictor `{program}` exited with {status}: {stderr}")]
    Failed {
        /// Program that was launched.
        program: String,
        /// Exit status description.
        status: String,
        /// Captured standard error.
        stderr: String,
    },

    /// The predictor produced output that could not be understood.
    #[error("malformed predictor output: {0}")]
    Malformed(String),
}

/// Result type alias using [`PredictorError`].
pub type PredictorResult<T> = Result<T, PredictorError>;

/// Errors that can occur while loading a spelling dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// A word-list file could not be read.
    #[error("failed to read word list {path}: {source}")]
    Read {
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that can occur while reading an essay document.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The document could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document exceeds the input size limit.
    #[error("{path} is {size} bytes, exceeding the {max} byte limit")]
    TooLarge {
        /// Path that was rejected.
        path: Utf8PathBuf,
        /// Size of the document in bytes.
        size: usize,
        /// Configured limit in bytes.
        max: usize,
    },
}

/// Result type alias using [`IngestError`].
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors raised while assembling an [`crate::engine::Engine`].
#[derive(Error, Debug)]
pub enum EngineError {
    /// The scoring policy failed validation.
    #[error("invalid scoring policy: {}", .0.join("; "))]
    InvalidPolicy(Vec<String>),

    /// The spelling dictionary could not be loaded.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Errors surfaced to callers of [`crate::engine::Engine::evaluate`].
#[derive(Error, Debug)]
pub enum EvaluationError {
    /// The essay is empty after whitespace normalization.
    #[error("no text detected")]
    EmptyInput,

    /// The ML predictor failed and the policy treats that as fatal.
    #[error("ML prediction failed: {0}")]
    Predictor(#[from] PredictorError),
}

/// Result type alias using [`EvaluationError`].
pub type EvalResult<T> = Result<T, EvaluationError>;

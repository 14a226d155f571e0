//! The ML predictor seam.
//!
//! The engine never inspects a model. It asks a [`ScorePredictor`] for a
//! domain and a 0–100 score and mixes the score into the aggregate. Stock
//! implementations cover fixed values ([`FixedPredictor`]), an external
//! process ([`CommandPredictor`]) and corpus similarity ([`CorpusPredictor`]).

use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domains::DomainRegistry;
use crate::error::{PredictorError, PredictorResult};

/// One complete answer from a predictor.
#[derive(Debug, Clone, PartialEq)]
pub struct MlPrediction {
    /// Predicted domain name.
    pub domain: String,
    /// Predicted score, when the predictor provides one.
    pub score: Option<f64>,
}

/// An opaque domain and score predictor.
pub trait ScorePredictor: Send + Sync + fmt::Debug {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Predict the essay's subject domain.
    fn predict_domain(&self, text: &str) -> PredictorResult<String>;

    /// Predict a 0–100 score for the essay within `domain`.
    fn predict_score(&self, text: &str, domain: &str) -> PredictorResult<f64>;

    /// Predict the domain, then the score within that domain.
    ///
    /// [`PredictorError::Unsupported`] from the score step yields a
    /// prediction without a score. Non-finite scores are rejected.
    fn predict(&self, text: &str) -> PredictorResult<MlPrediction> {
        let domain = self.predict_domain(text)?;
        let score = match self.predict_score(text, &domain) {
            Ok(score) => Some(finite(score)?),
            Err(PredictorError::Unsupported(_)) => None,
            Err(err) => return Err(err),
        };
        Ok(MlPrediction { domain, score })
    }
}

fn finite(score: f64) -> PredictorResult<f64> {
    if score.is_finite() {
        Ok(score)
    } else {
        Err(PredictorError::Malformed(format!(
            "score must be a finite number (got {score})"
        )))
    }
}

/// Returns preconfigured values regardless of input.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPredictor {
    domain: String,
    score: f64,
}

impl FixedPredictor {
    /// Always predict `domain` with `score`.
    pub fn new(domain: impl Into<String>, score: f64) -> Self {
        Self {
            domain: domain.into(),
            score,
        }
    }
}

impl ScorePredictor for FixedPredictor {
    fn name(&self) -> &str {
        "fixed"
    }

    fn predict_domain(&self, _text: &str) -> PredictorResult<String> {
        Ok(self.domain.clone())
    }

    fn predict_score(&self, _text: &str, _domain: &str) -> PredictorResult<f64> {
        Ok(self.score)
    }
}

/// Predicts the closest registry domain; offers no score.
#[derive(Debug, Clone)]
pub struct CorpusPredictor {
    registry: Arc<DomainRegistry>,
}

impl CorpusPredictor {
    /// Predict against the domains in `registry`.
    pub const fn new(registry: Arc<DomainRegistry>) -> Self {
        Self { registry }
    }
}

impl ScorePredictor for CorpusPredictor {
    fn name(&self) -> &str {
        "corpus"
    }

    fn predict_domain(&self, text: &str) -> PredictorResult<String> {
        self.registry
            .closest(text)
            .map(|p| p.name().to_string())
            .ok_or(PredictorError::Unsupported("domain prediction without domains"))
    }

    fn predict_score(&self, _text: &str, _domain: &str) -> PredictorResult<f64> {
        Err(PredictorError::Unsupported("score prediction"))
    }
}

/// External predictor process settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictorCommand {
    /// Program to run.
    pub program: String,
    /// Arguments passed to the program.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Runs an external process that reads the essay on stdin and prints
/// `{"domain": "...", "score": 0..100}` on stdout.
#[derive(Debug, Clone)]
pub struct CommandPredictor {
    command: PredictorCommand,
}

#[derive(Debug, Deserialize)]
struct CommandOutput {
    domain: String,
    score: f64,
}

impl CommandPredictor {
    /// Predict by running `command`.
    pub const fn new(command: PredictorCommand) -> Self {
        Self { command }
    }

    #[tracing::instrument(skip_all, fields(program = %self.command.program, text_len = text.len()))]
    fn run(&self, text: &str) -> PredictorResult<CommandOutput> {
        let program = &self.command.program;
        let spawn_err = |source: std::io::Error| PredictorError::Spawn {
            program: program.clone(),
            source,
        };

        let mut child = Command::new(program)
            .args(&self.command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        // Stdin is fed from its own thread while stdout and stderr drain, so a
        // predictor that writes before reading cannot fill a pipe and stall.
        let stdin = child.stdin.take();
        let (output, written) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(text.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            (output, written)
        });
        let output = output.map_err(spawn_err)?;
        // A predictor may exit without reading its input.
        if let Err(err) = written
            && err.kind() != std::io::ErrorKind::BrokenPipe
        {
            return Err(spawn_err(err));
        }

        if !output.status.success() {
            return Err(PredictorError::Failed {
                program: program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let parsed: CommandOutput = serde_json::from_slice(&output.stdout)
            .map_err(|e| PredictorError::Malformed(e.to_string()))?;
        tracing::debug!(domain = %parsed.domain, score = parsed.score, "predictor responded");
        Ok(parsed)
    }
}

impl ScorePredictor for CommandPredictor {
    fn name(&self) -> &str {
        &self.command.program
    }

    fn predict_domain(&self, text: &str) -> PredictorResult<String> {
        self.run(text).map(|out| out.domain)
    }

    fn predict_score(&self, text: &str, _domain: &str) -> PredictorResult<f64> {
        self.run(text).and_then(|out| finite(out.score))
    }

    fn predict(&self, text: &str) -> PredictorResult<MlPrediction> {
        let out = self.run(text)?;
        Ok(MlPrediction {
            domain: out.domain,
            score: Some(finite(out.score)?),
        })
    }
}

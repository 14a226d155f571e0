//! Logging setup: human-readable events on stderr, optional JSONL file.
//!
//! File logging is enabled by `ESSAY_GRADE_LOG_PATH` (an explicit file,
//! rotated daily under its parent) or `ESSAY_GRADE_LOG_DIR` / config
//! `log_dir` (a directory holding `essay-grade.jsonl.<date>` files).

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "ESSAY_GRADE_LOG_PATH";
const LOG_DIR_ENV: &str = "ESSAY_GRADE_LOG_DIR";
const DEFAULT_LOG_FILE: &str = "essay-grade.jsonl";

/// Where log files go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory of the rolling log file.
    pub log_dir: Option<PathBuf>,
    /// File name prefix within `log_dir`.
    pub file_name: String,
}

impl ObservabilityConfig {
    /// Resolve from the environment, falling back to `config_log_dir`.
    ///
    /// Precedence: `ESSAY_GRADE_LOG_PATH` > `ESSAY_GRADE_LOG_DIR` > config.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path.filter(|p| !p.as_os_str().is_empty()) {
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(DEFAULT_LOG_FILE)
                .to_string();
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: Some(dir),
                file_name,
            };
        }

        Self {
            log_dir: env_dir
                .filter(|p| !p.as_os_str().is_empty())
                .or(config_dir),
            file_name: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` selects `error`, each `-v`
/// raises the level one step, and the config level is the baseline.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, config_level))
}

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn level_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    if verbose == 0 {
        return config_level;
    }
    // Unrecognized config levels step up from `info`.
    let base = LEVELS
        .iter()
        .position(|level| level.eq_ignore_ascii_case(config_level))
        .unwrap_or(2);
    LEVELS[(base + usize::from(verbose)).min(LEVELS.len() - 1)]
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process so buffered
/// file events are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, &config.file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(true)
                .with_span_list(false)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

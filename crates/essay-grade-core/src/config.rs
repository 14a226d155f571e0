//! Configuration loading and discovery.
//!
//! Sources are layered with figment, lowest precedence first:
//! 1. Built-in defaults
//! 2. User config from the XDG config directory
//! 3. Project config found by walking up from the working directory
//! 4. Explicit files (e.g. `--config`)
//! 5. `ESSAY_GRADE_*` environment variables
//!
//! # Supported formats
//!
//! TOML (`.toml`), YAML (`.yaml`, `.yml`) and JSON (`.json`).
//!
//! # Project config names (lowest precedence first)
//! - `.essay.<ext>`, then `essay.<ext>`
//! - `.essay-grade.<ext>`, then `essay-grade.<ext>`
//!
//! Only the closest directory containing any of these contributes. The walk
//! stops at a `.git` boundary by default.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use essay_grade_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("ml weight: {}", config.scoring.ml_weight);
//! ```

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::ingest::DEFAULT_MAX_INPUT_BYTES;
use crate::length::LengthBounds;
use crate::predictor::PredictorCommand;
use crate::scoring::ScoringPolicy;

/// Extra vocabulary for the spelling checker.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Words accepted in addition to the built-in dictionary.
    pub extra_words: Vec<String>,
    /// A word-list file, one word per line (`#` starts a comment line).
    pub word_list: Option<Utf8PathBuf>,
}

/// ML predictor settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PredictorConfig {
    /// External predictor process. Without one, the domain is predicted
    /// from corpus similarity and no ML score is blended.
    pub command: Option<PredictorCommand>,
}

/// The configuration for essay-grade.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files. File logging is off when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Maximum input size in bytes (default: 5 MiB).
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored.
    pub disable_input_limit: bool,
    /// Domain used when none is given on the command line.
    pub default_domain: Option<String>,
    /// Aggregation weights, thresholds and predictor failure policy.
    pub scoring: ScoringPolicy,
    /// Ideal word-count range.
    pub length: LengthBounds,
    /// Ideal average sentence length in words (default: 16).
    pub ideal_sentence_length: Option<f64>,
    /// Spelling dictionary extensions.
    pub dictionary: DictionaryConfig,
    /// Custom domains (name → reference corpus).
    ///
    /// These extend the built-in domains. A custom domain with a built-in
    /// name replaces it.
    pub domains: Option<BTreeMap<String, String>>,
    /// ML predictor settings.
    pub predictor: PredictorConfig,
}

impl Config {
    /// Effective input size limit, `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Which configuration files were loaded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from the XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files (e.g., from `--config`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The highest-precedence config file that was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }

    /// Directory of the primary file, for resolving relative paths in it.
    pub fn primary_dir(&self) -> Option<&Utf8Path> {
        self.primary_file().and_then(Utf8Path::parent)
    }
}

const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

const APP_NAME: &str = "essay-grade";

/// Project config base names, lowest precedence first.
const APP_NAMES: &[&str] = &["essay", "essay-grade"];

const ENV_PREFIX: &str = "ESSAY_GRADE_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that includes user config and stops at `.git`.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Walk up from `path` looking for project config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/essay-grade/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop the upward walk at a directory containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Search all the way to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file. Later files take precedence.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = find_user_config()
        {
            figment = merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // ESSAY_GRADE_DEFAULT_DOMAIN=Economy, ESSAY_GRADE_SCORING__ML_WEIGHT=0.3
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true).split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            files = sources.project_files.len() + sources.explicit_files.len(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Like [`load`](Self::load), but fails when no config file exists.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Config files from the closest directory that has any, low→high precedence.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();
            for app_name in APP_NAMES {
                for prefix in [".", ""] {
                    for ext in CONFIG_EXTENSIONS {
                        let candidate = dir.join(format!("{prefix}{app_name}.{ext}"));
                        if candidate.is_file() {
                            found.push(candidate);
                        }
                    }
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Checked after the config files so a config beside the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }
}

fn find_user_config() -> Option<Utf8PathBuf> {
    let config_dir = user_config_dir()?;
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| config_dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

/// Merge a config file, detecting the format from its extension.
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

/// The user config directory.
///
/// `~/.config/essay-grade/` on Linux, `~/Library/Application Support/essay-grade/`
/// on macOS, and the equivalent elsewhere.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

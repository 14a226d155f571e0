//! Info command implementation

use clap::Args;
use essay_grade_core::config::{Config, ConfigSources};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_domain: Option<String>,
    ml_weight: f64,
    on_predictor_error: &'static str,
    min_words: usize,
    max_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    predictor_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_domains: Option<Vec<String>>,
    extra_words: usize,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let custom_domains = config
            .domains
            .as_ref()
            .map(|d| d.keys().cloned().collect());
        let predictor_command = config.predictor.command.as_ref().map(|c| {
            std::iter::once(c.program.as_str())
                .chain(c.args.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(" ")
        });
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            default_domain: config.default_domain.clone(),
            ml_weight: config.scoring.ml_weight,
            on_predictor_error: config.scoring.on_predictor_error.as_str(),
            min_words: config.length.min_words,
            max_words: config.length.max_words,
            predictor_command,
            custom_domains,
            extra_words: config.dictionary.extra_words.len(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    if !package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), package.repository.cyan());
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match &cfg.config_file {
        Some(path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(dir) = &cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }

    println!();
    println!("{}", "Scoring".bold().underline());
    print_opt("Default domain", cfg.default_domain.as_ref());
    println!("{}: {:.2}", "ML weight".dimmed(), cfg.ml_weight);
    println!("{}: {}", "On predictor error".dimmed(), cfg.on_predictor_error);
    println!(
        "{}: {}-{} words",
        "Ideal length".dimmed(),
        cfg.min_words,
        cfg.max_words
    );
    print_opt("Predictor command", cfg.predictor_command.as_ref());
    if let Some(domains) = &cfg.custom_domains {
        println!("{}: {}", "Custom domains".dimmed(), domains.join(", "));
    }
    if cfg.extra_words > 0 {
        println!("{}: {}", "Extra words".dimmed(), cfg.extra_words);
    }

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: Option<&T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}

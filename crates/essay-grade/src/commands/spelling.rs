//! Spelling command: dictionary check with suggested corrections.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use essay_grade_core::{Config, ConfigSources};

use super::{build_engine, finish_engine, read_input_file};

/// Arguments for the `spelling` subcommand.
#[derive(Args, Debug)]
pub struct SpellingArgs {
    /// File to check.
    pub file: Utf8PathBuf,

    /// Fail when more than this many distinct words are misspelled.
    #[arg(long)]
    pub max_misspelled: Option<usize>,
}

/// Report misspelled words in a file.
#[instrument(name = "cmd_spelling", skip_all, fields(file = %args.file))]
pub fn cmd_spelling(
    args: SpellingArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(max_misspelled = ?args.max_misspelled, "executing spelling command");

    let content = read_input_file(&args.file, config.input_limit())?;
    let engine = finish_engine(build_engine(config, sources)?.without_predictor())?;
    let report = engine.check_spelling(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}: {} words checked, score {:.2}",
            args.file, report.token_count, report.score
        );
        if report.misspelled.is_empty() {
            println!("  Misspelled: none detected");
        } else {
            println!("  Misspelled: {}", report.misspelled.len());
            for m in &report.misspelled {
                match &m.suggestion {
                    Some(s) => println!("    {} → {}", m.word.red(), s.green()),
                    None => println!("    {} {}", m.word.red(), "(no suggestion)".dimmed()),
                }
            }
        }
    }

    if let Some(max) = args.max_misspelled
        && report.misspelled.len() > max
    {
        bail!(
            "{} has {} misspelled words (max: {max}). Fix the spelling.",
            args.file,
            report.misspelled.len(),
        );
    }

    Ok(())
}

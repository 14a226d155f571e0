//! Readability command: Flesch Reading Ease scoring.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use essay_grade_core::{readability, text};

use super::read_input_file;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Minimum acceptable normalized readability score (0-1).
    #[arg(long)]
    pub min_score: Option<f64>,
}

/// Score readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let essay = text::normalize(&content);
    let report = readability::score_readability(essay.as_str());

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let note = if report.fallback {
            " (fallback)".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "{:.2} (reading ease {:.1}){note}",
            report.score, report.reading_ease
        );
        if let Some(stats) = &report.stats {
            println!(
                "  {} sentences, {} words, {} syllables, grade {:.1}",
                stats.sentences, stats.words, stats.syllables, stats.grade
            );
        }
    }

    if let Some(min) = args.min_score
        && report.score < min
    {
        bail!(
            "{} scores {:.2} (min: {:.2}). Use shorter sentences and simpler words.",
            args.file,
            report.score,
            min,
        );
    }

    Ok(())
}

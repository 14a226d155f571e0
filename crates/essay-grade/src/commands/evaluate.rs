//! Evaluate command: score an essay against a domain.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use essay_grade_core::{
    Config, ConfigSources, EvaluationResult, FixedPredictor, PredictorFailure, detect_title,
};

use super::{build_engine, finish_engine, read_input_file};

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Essay file (.txt, .md, or no extension).
    pub file: Utf8PathBuf,

    /// Domain to score against. Defaults to the configured default domain,
    /// then to the closest built-in corpus.
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Externally computed ML score (0-100) to blend in.
    #[arg(long, value_name = "SCORE", conflicts_with = "no_ml")]
    pub ml_score: Option<f64>,

    /// Domain predicted alongside --ml-score.
    #[arg(long, value_name = "DOMAIN", requires = "ml_score")]
    pub ml_domain: Option<String>,

    /// Skip the ML predictor and report the rule-based score only.
    #[arg(long)]
    pub no_ml: bool,

    /// What to do when the ML predictor fails.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_predictor_error: Option<PredictorFailure>,

    /// Fail when the final score is below this value (0-100).
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<f64>,
}

#[derive(Serialize)]
struct EvaluateOutput<'a> {
    file: &'a str,
    title: String,
    #[serde(flatten)]
    result: &'a EvaluationResult,
}

/// Evaluate an essay file.
#[instrument(name = "cmd_evaluate", skip_all, fields(file = %args.file))]
pub fn cmd_evaluate(
    args: EvaluateArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(
        domain = ?args.domain,
        ml_score = ?args.ml_score,
        no_ml = args.no_ml,
        "executing evaluate command"
    );

    let text = read_input_file(&args.file, config.input_limit())?;

    let mut builder = build_engine(config, sources)?;
    if args.no_ml {
        builder = builder.without_predictor();
    }
    if let Some(policy) = args.on_predictor_error {
        let mut scoring = config.scoring;
        scoring.on_predictor_error = policy;
        builder = builder.policy(scoring);
    }

    let Some(domain) = args
        .domain
        .clone()
        .or_else(|| config.default_domain.clone())
        .or_else(|| builder.closest_domain(&text))
    else {
        bail!("no domain given and none could be inferred; pass --domain");
    };

    if let Some(score) = args.ml_score {
        let predicted = args.ml_domain.clone().unwrap_or_else(|| domain.clone());
        builder = builder.predictor(Arc::new(FixedPredictor::new(predicted, score)));
    }
    let engine = finish_engine(builder)?;

    let spinner = (!global_json).then(|| {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Scoring {}", args.file));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });
    let outcome = engine.evaluate(&text, &domain);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let result = outcome.with_context(|| format!("failed to evaluate {}", args.file))?;

    if global_json {
        let output = EvaluateOutput {
            file: args.file.as_str(),
            title: detect_title(&text),
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&args.file, &detect_title(&text), &result);
    }

    if let Some(min) = args.min_score
        && result.aggregate_score < min
    {
        bail!(
            "{} scores {:.1} (min: {:.1}). Address the suggestions above.",
            args.file,
            result.aggregate_score,
            min,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8Path, title: &str, result: &EvaluationResult) {
    println!("{} {}", title.bold(), format!("({file})").dimmed());

    match &result.predicted_domain {
        Some(predicted) if predicted != &result.domain => println!(
            "{}: {} (predicted: {predicted})",
            "Domain".dimmed(),
            result.domain
        ),
        _ => println!("{}: {}", "Domain".dimmed(), result.domain),
    }

    let score = format!("{:.1}", result.aggregate_score);
    let score = if result.aggregate_score >= 70.0 {
        score.green().to_string()
    } else if result.aggregate_score >= 50.0 {
        score.yellow().to_string()
    } else {
        score.red().to_string()
    };
    match result.ml_score {
        Some(ml) => println!(
            "{}: {score} / 100 (rule {:.1}, ml {ml:.1})",
            "Score".bold(),
            result.rule_score
        ),
        None => println!("{}: {score} / 100 (rule-based)", "Score".bold()),
    }

    println!();
    for (label, value) in [
        ("Relevance", result.relevance),
        ("Grammar", result.grammar),
        ("Readability", result.readability),
        ("Coherence", result.coherence),
        ("Length", result.length_score),
    ] {
        println!("  {label:<12} {value:.2}");
    }
    println!("  {:<12} {} words", "Word count", result.word_count);
    if !result.matched_keywords.is_empty() {
        println!(
            "  {:<12} {:.0}% ({})",
            "Keywords",
            result.keyword_coverage * 100.0,
            result.matched_keywords.join(", ")
        );
    }

    if !result.misspelled.is_empty() {
        println!();
        println!("{}", "Misspelled".bold().underline());
        for m in &result.misspelled {
            match &m.suggestion {
                Some(s) => println!("  {} → {}", m.word.red(), s.green()),
                None => println!("  {}", m.word.red()),
            }
        }
    }

    println!();
    if result.suggestions.is_empty() {
        println!("{} no suggestions", "PASS:".green());
    } else {
        println!("{}", "Suggestions".bold().underline());
        for s in &result.suggestions {
            println!("  - {s}");
        }
    }
}

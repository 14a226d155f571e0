//! Domains command: list the subject domains essays can be scored against.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use essay_grade_core::{Config, ConfigSources};

use super::{build_engine, finish_engine};

/// Arguments for the `domains` subcommand.
#[derive(Args, Debug, Default)]
pub struct DomainsArgs {
    /// Also show each domain's keywords.
    #[arg(long)]
    pub keywords: bool,
}

#[derive(Serialize)]
struct DomainEntry<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<Vec<&'a str>>,
}

/// List the configured domains in registry order.
#[instrument(name = "cmd_domains", skip_all)]
pub fn cmd_domains(
    args: DomainsArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(keywords = args.keywords, "executing domains command");

    let engine = finish_engine(build_engine(config, sources)?)?;
    let entries: Vec<DomainEntry<'_>> = engine
        .registry()
        .iter()
        .map(|profile| DomainEntry {
            name: profile.name(),
            keywords: args
                .keywords
                .then(|| profile.keywords().iter().map(String::as_str).collect()),
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        match &entry.keywords {
            Some(keywords) => println!("{}: {}", entry.name.bold(), keywords.join(", ").dimmed()),
            None => println!("{}", entry.name),
        }
    }
    Ok(())
}

//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

use essay_grade_core::{Config, ConfigSources, Engine, EngineBuilder, ingest};

pub mod domains;
pub mod evaluate;
pub mod info;
pub mod readability;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod spelling;

/// Extract an essay's text, enforcing the configured size limit.
///
/// Markdown is stripped to prose; unsupported document types yield an
/// empty string, which evaluation reports as "no text detected".
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    Ok(ingest::extract_text(path, max_bytes)?)
}

/// Build the scoring engine from loaded configuration.
pub fn build_engine(config: &Config, sources: &ConfigSources) -> anyhow::Result<EngineBuilder> {
    EngineBuilder::from_config(config, sources.primary_dir())
        .context("failed to configure the scoring engine")
}

/// Finish an engine builder, reporting every invalid setting.
pub fn finish_engine(builder: EngineBuilder) -> anyhow::Result<Engine> {
    builder.build().context("invalid scoring configuration")
}

//! Serve command: run the MCP server on stdio.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use essay_grade_core::{Config, ConfigSources};

use super::{build_engine, finish_engine};
use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve MCP requests on stdin/stdout until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let engine = finish_engine(build_engine(config, sources)?)?;
    let server = ProjectServer::new(Arc::new(engine), max_input_bytes, config.default_domain.clone());

    info!(max_input_bytes = ?max_input_bytes, "starting MCP server on stdio");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service
        .waiting()
        .await
        .context("MCP server terminated abnormally")?;
    info!("MCP server stopped");
    Ok(())
}

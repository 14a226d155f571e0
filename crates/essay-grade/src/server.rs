//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes essay scoring to AI assistants over stdio. The server is a
//! presentation layer: every tool delegates to the shared [`Engine`] that
//! the CLI commands use.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use essay_grade_core::{Engine, EvaluationError};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `evaluate_essay` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct EvaluateEssayParams {
    /// The essay text.
    pub text: String,
    /// Domain to score against. Omit to use the configured default or the
    /// closest built-in domain.
    pub domain: Option<String>,
}

/// Parameters for the `list_domains` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ListDomainsParams {}

/// Parameters for the `check_spelling` and `check_readability` tools.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The text to analyze.
    pub text: String,
}

/// MCP server exposing the essay scoring engine.
#[derive(Clone)]
pub struct ProjectServer {
    engine: Arc<Engine>,
    max_input_bytes: Option<usize>,
    default_domain: Option<String>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl ProjectServer {
    /// Create a server around a shared engine.
    pub fn new(
        engine: Arc<Engine>,
        max_input_bytes: Option<usize>,
        default_domain: Option<String>,
    ) -> Self {
        Self {
            engine,
            max_input_bytes,
            default_domain,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        if params.format == "json" {
            return to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
                "domains": self.engine.domain_list(),
            }));
        }

        let text = format!(
            "{} v{}\n{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score an essay.
    #[tool(
        description = "Score an essay against a subject domain. Returns the aggregate score (0-100), per-metric scores (relevance, grammar, readability, coherence, length), misspellings, matched domain keywords and improvement suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", domain = ?params.domain))]
    fn evaluate_essay(
        &self,
        Parameters(params): Parameters<EvaluateEssayParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "evaluate_essay", "executing MCP tool");
        self.check_size(&params.text)?;

        let domain = params
            .domain
            .or_else(|| self.default_domain.clone())
            .or_else(|| self.engine.closest_domain(&params.text))
            .ok_or_else(|| McpError::invalid_params("no domain given and none inferred", None))?;

        let result = self
            .engine
            .evaluate(&params.text, &domain)
            .map_err(|e| match e {
                EvaluationError::EmptyInput => McpError::invalid_params(e.to_string(), None),
                EvaluationError::Predictor(_) => McpError::internal_error(e.to_string(), None),
            })?;

        tracing::info!(
            tool = "evaluate_essay",
            aggregate_score = result.aggregate_score,
            "MCP tool completed"
        );
        to_json(&result)
    }

    /// List domains.
    #[tool(description = "List the subject domains essays can be scored against.")]
    #[tracing::instrument(skip(self, _params), fields(otel.kind = "server"))]
    fn list_domains(
        &self,
        Parameters(_params): Parameters<ListDomainsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "list_domains", "executing MCP tool");
        to_json(&self.engine.domain_list())
    }

    /// Check spelling.
    #[tool(
        description = "Check spelling against the English dictionary. Returns a 0-1 score and each unknown word with a suggested correction."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_spelling(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_spelling", "executing MCP tool");
        self.check_size(&params.text)?;
        let report = self.engine.check_spelling(&params.text);
        tracing::info!(
            tool = "check_spelling",
            misspelled = report.misspelled.len(),
            "MCP tool completed"
        );
        to_json(&report)
    }

    /// Score readability.
    #[tool(
        description = "Score readability with Flesch Reading Ease. Returns a 0-1 score, the raw reading ease and sentence/word/syllable statistics."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_readability", "executing MCP tool");
        self.check_size(&params.text)?;
        let report = self.engine.check_readability(&params.text);
        tracing::info!(
            tool = "check_readability",
            score = report.score,
            "MCP tool completed"
        );
        to_json(&report)
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use evaluate_essay to score an essay; list_domains shows valid domains.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

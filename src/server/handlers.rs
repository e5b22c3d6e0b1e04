//! MCP tool handlers for the FAQ server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::LookupError;
use crate::services::LookupService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes FAQ lookup tools.
#[derive(Clone)]
pub struct FaqMcpServer {
    service: Arc<dyn LookupService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for FaqMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "faq-lookup".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Offline FAQ lookup - answers questions from a static FAQ corpus and suggests matching contacts from the directory.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LookupParams {
    /// Free-text question
    pub query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FindContactsParams {
    /// Department, person, duty or phone fragment
    pub query: String,
    #[serde(default)]
    pub max_results: Option<usize>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn lookup_error(e: LookupError) -> McpError {
    match e {
        LookupError::InvalidQuery(_) => McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(e.to_string()),
            data: None,
        },
        other => to_mcp_error(other),
    }
}

fn json_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    let body = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(body)]))
}

#[tool_router]
impl FaqMcpServer {
    /// Create a new FAQ MCP server over a lookup service.
    pub fn new(service: Arc<dyn LookupService>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Answer a question from the FAQ corpus.
    #[tool(
        description = "Answer a question from the FAQ corpus. Returns the best matching entry with its provenance, up to two related questions, and matching directory contacts when the question asks for a phone number, contact or person in charge."
    )]
    pub async fn lookup(
        &self,
        params: Parameters<LookupParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .service
            .lookup(&params.0.query)
            .await
            .map_err(lookup_error)?;

        json_result(&outcome)
    }

    /// Search the contact directory.
    #[tool(
        description = "Search the contact directory by department, person, duty or phone fragment. Returns ranked contacts with a dial string for tel: links."
    )]
    pub async fn find_contacts(
        &self,
        params: Parameters<FindContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let outcome = self
            .service
            .find_contacts(&params.query, params.max_results)
            .await
            .map_err(lookup_error)?;

        json_result(&outcome)
    }

    /// Report corpus and session status.
    #[tool(
        description = "Report corpus sizes, the corpus fingerprint, the active ranking strategy, embedding backend state and lookup counters."
    )]
    pub async fn corpus_info(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.service.corpus_info())
    }
}

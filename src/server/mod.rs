//! MCP server implementation for the FAQ lookup.
//!
//! This module provides the MCP protocol server that exposes FAQ and
//! contact-directory lookup to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::FaqMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the FAQ MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: FaqMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}

//! MCP server for the contact book.
//!
//! This module provides the MCP protocol server that exposes the contact
//! book to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::ContactBookMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact book server with stdio transport.
///
/// Returns once the client closes the transport; the contact book is
/// dropped with the server.
pub async fn run_server(server: ContactBookMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}

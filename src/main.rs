//! Contact Book Server - Main entry point
//!
//! Starts an MCP server on stdio that holds an in-memory contact book for
//! the lifetime of the process.

use anyhow::Result;
use contact_book_server::{Config, ContactBook, ContactBookMcpServer, ContactService, Metrics};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Configuration loaded (list page size: {})",
        config.list_page_size
    );

    let service = ContactService::new(Box::new(ContactBook::new()), Metrics::new());
    let server = ContactBookMcpServer::new(service, config.list_page_size);

    info!("Starting MCP server with stdio transport");
    contact_book_server::server::run_server(server).await?;

    info!("Contact book server shutdown complete");
    Ok(())
}

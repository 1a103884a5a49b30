//! MCP server exposing the document over stdio.
//!
//! Stdout carries the protocol frames; logs must go to stderr.

pub mod resources;

use rmcp::ServiceExt;

use crate::services::DocumentStore;
use resources::IzahnameServer;

/// Serve MCP resources over stdio. Resolves when the connection closes
/// (client detach or EOF), which the caller treats as a shutdown signal.
pub async fn serve_stdio(store: DocumentStore) -> anyhow::Result<()> {
    let server = IzahnameServer::new(store);
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

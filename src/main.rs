use izahname_service::config::IzahnameConfig;
use izahname_service::mcp;
use izahname_service::observability::init_tracing;
use izahname_service::services::metrics::init_metrics;
use izahname_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing (stderr; stdout is reserved for MCP stdio)
    init_tracing("info");

    let config = IzahnameConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_metrics();

    let mcp_enabled = config.mcp.enabled;

    let application = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    if !mcp_enabled {
        return application.run_until_stopped().await;
    }

    let document_store = application.document_store();
    tracing::info!("MCP server listening on stdio");

    // Run both servers concurrently; when the MCP transport closes the
    // whole process shuts down.
    tokio::select! {
        result = application.run_until_stopped() => {
            if let Err(e) = result {
                tracing::error!("HTTP server error: {}", e);
                return Err(e);
            }
        }
        result = mcp::serve_stdio(document_store) => {
            match result {
                Ok(()) => tracing::info!("MCP connection closed, shutting down"),
                Err(e) => {
                    tracing::error!("MCP server error: {}", e);
                    return Err(std::io::Error::other(format!("MCP server error: {}", e)));
                }
            }
        }
    }

    Ok(())
}

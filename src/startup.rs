//! Application startup and lifecycle management.
//!
//! Builds the HTTP router, selects the answer provider for the configured
//! mode, and binds the listener. The MCP server shares the same document
//! store and is wired in by `main`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{AnswerMode, IzahnameConfig};
use crate::error::AppError;
use crate::handlers::{
    app::index,
    ask::ask,
    health::{health_check, readiness_check},
    metrics::metrics,
};
use crate::middleware::metrics::metrics_middleware;
use crate::services::providers::{
    AnswerProvider, HuggingFaceConfig, HuggingFaceProvider, KeywordAnswerProvider,
};
use crate::services::DocumentStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub document_store: DocumentStore,
    pub provider: Arc<dyn AnswerProvider>,
}

/// Build the HTTP router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ask", post(ask))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics))
        .layer(from_fn(metrics_middleware))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .with_state(state)
}

/// Select the answer provider for the configured mode.
fn build_provider(config: &IzahnameConfig) -> Result<Arc<dyn AnswerProvider>, AppError> {
    match config.answer.mode {
        AnswerMode::Keyword => {
            tracing::info!("Initialized keyword answer provider");
            Ok(Arc::new(KeywordAnswerProvider::new()))
        }
        AnswerMode::Remote => {
            let api_key = config.answer.api_key.clone().ok_or_else(|| {
                AppError::ConfigError(anyhow::anyhow!(
                    "HF_API_KEY is required in remote answer mode"
                ))
            })?;

            let provider = HuggingFaceProvider::new(HuggingFaceConfig::new(
                api_key,
                config.answer.text_model.clone(),
            ));
            tracing::info!(
                model = %config.answer.text_model,
                "Initialized Hugging Face answer provider"
            );
            Ok(Arc::new(provider))
        }
    }
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: IzahnameConfig) -> Result<Self, AppError> {
        let document_store = DocumentStore::new(config.document.path.clone());
        let provider = build_provider(&config)?;

        let state = AppState {
            document_store,
            provider,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            mode = %config.answer.mode,
            document = %config.document.path,
            "Izahname service: HTTP on port {}",
            port
        );

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a handle to the document store, shared with the MCP server.
    pub fn document_store(&self) -> DocumentStore {
        self.state.document_store.clone()
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}

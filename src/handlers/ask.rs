use std::time::Instant;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::services::metrics;
use crate::startup::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Answer a question against the document.
///
/// The document is read fresh from disk, then handed to the configured
/// provider together with the question. Every failure on this path maps
/// to a 500 with an `{"error"}` body.
#[tracing::instrument(skip(state, payload), fields(request_id, provider, question_len))]
pub async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let request_id = uuid::Uuid::new_v4().to_string();
    let provider_name = state.provider.name();

    tracing::Span::current().record("request_id", request_id.as_str());
    tracing::Span::current().record("provider", provider_name);
    tracing::Span::current().record("question_len", payload.question.len());

    let document = state.document_store.read().await.map_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Failed to load document");
        metrics::record_answer_request(provider_name, "error");
        e
    })?;

    let started = Instant::now();
    let result = state.provider.answer(&payload.question, &document).await;
    metrics::record_provider_latency(provider_name, started.elapsed().as_secs_f64());

    match result {
        Ok(answer) => {
            metrics::record_answer_request(provider_name, "ok");
            tracing::info!(
                request_id = %request_id,
                answer_len = answer.len(),
                "Question answered"
            );
            Ok(Json(AskResponse { answer }))
        }
        Err(e) => {
            metrics::record_answer_request(provider_name, "error");
            tracing::error!(request_id = %request_id, error = %e, "Provider failed to answer");
            Err(e.into())
        }
    }
}

//! Answer provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction for answer providers,
//! allowing easy swapping between backends (local keyword lookup, Hugging
//! Face inference, mock).

pub mod huggingface;
pub mod keyword;
pub mod mock;

pub use huggingface::{HuggingFaceConfig, HuggingFaceProvider};
pub use keyword::KeywordAnswerProvider;
pub use mock::MockAnswerProvider;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Trait for answer providers.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Answer `question` using `document` as the only context.
    async fn answer(&self, question: &str, document: &str) -> Result<String, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;

    /// Name used in logs and metric labels.
    fn name(&self) -> &'static str;
}

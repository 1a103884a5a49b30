//! Hugging Face answer provider implementation.
//!
//! Implements remote answering by sending one prompt per request (an
//! instruction, the full document, and the question) to the hosted
//! inference API and returning the generated text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{AnswerProvider, ProviderError};

/// Hugging Face hosted inference API base URL.
const HF_API_BASE: &str = "https://api-inference.huggingface.co/models";

/// Fixed sampling parameters; one call per request, no negotiation.
const MAX_NEW_TOKENS: u32 = 100;
const TEMPERATURE: f64 = 0.7;

/// Per-call timeout for the upstream request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Answer label that ends the prompt; the model tends to echo it back.
const ANSWER_LABEL: &str = "Cevap:";

/// Hugging Face provider configuration.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl HuggingFaceConfig {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            api_base: HF_API_BASE.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Answer provider backed by the Hugging Face hosted inference API.
pub struct HuggingFaceProvider {
    config: HuggingFaceConfig,
    client: Client,
}

impl HuggingFaceProvider {
    pub fn new(config: HuggingFaceConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Build the API URL for the configured model.
    fn api_url(&self) -> String {
        format!("{}/{}", self.config.api_base, self.config.model)
    }

    /// Build the single prompt: instruction, full document, question, and a
    /// trailing answer label for the model to complete.
    fn build_prompt(document: &str, question: &str) -> String {
        format!(
            "Aşağıdaki izahname dokümanını kullanarak soruyu yanıtla.\n\n\
             Doküman:\n{}\n\nSoru: {}\n{}",
            document, question, ANSWER_LABEL
        )
    }

    /// Strip an echoed answer label and surrounding whitespace from the
    /// generated text, if present.
    fn strip_answer_label(text: &str) -> String {
        let text = text.trim();
        match text.strip_prefix(ANSWER_LABEL) {
            Some(rest) => rest.trim().to_string(),
            None => text.to_string(),
        }
    }
}

#[async_trait]
impl AnswerProvider for HuggingFaceProvider {
    async fn answer(&self, question: &str, document: &str) -> Result<String, ProviderError> {
        let request = GenerateRequest {
            inputs: Self::build_prompt(document, question),
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                return_full_text: false,
            },
            options: RequestOptions {
                wait_for_model: true,
            },
        };

        tracing::debug!(
            model = %self.config.model,
            question_len = question.len(),
            document_len = document.len(),
            "Sending request to Hugging Face inference API"
        );

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(e.to_string())
                } else {
                    ProviderError::NetworkError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(ProviderError::ApiError(format!(
                "Hugging Face API error {}: {}",
                status, error_text
            )));
        }

        let api_response: Vec<GeneratedText> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(e.to_string())
            } else {
                ProviderError::UnexpectedResponse(format!("Failed to parse response: {}", e))
            }
        })?;

        let generated = api_response
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or_else(|| {
                ProviderError::UnexpectedResponse(
                    "Response contained no generated text".to_string(),
                )
            })?;

        Ok(Self::strip_answer_label(&generated))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Hugging Face API key not configured".to_string(),
            ));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "huggingface"
    }
}

// ============================================================================
// Hugging Face API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    inputs: String,
    parameters: GenerationParameters,
    options: RequestOptions,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f64,
    return_full_text: bool,
}

#[derive(Debug, Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

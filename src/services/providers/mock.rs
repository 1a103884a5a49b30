//! Mock provider implementation for testing.

use async_trait::async_trait;

use super::{AnswerProvider, ProviderError};

/// Mock answer provider for testing.
pub struct MockAnswerProvider {
    enabled: bool,
}

impl MockAnswerProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl AnswerProvider for MockAnswerProvider {
    async fn answer(&self, question: &str, _document: &str) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock answer provider not enabled".to_string(),
            ));
        }

        Ok(format!("Mock answer for: {}", question))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock answer provider not enabled".to_string(),
            ))
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn enabled_mock_echoes_the_question() {
        let provider = MockAnswerProvider::new(true);
        let answer = provider.answer("fon nedir?", "doküman").await.unwrap();
        assert_eq!(answer, "Mock answer for: fon nedir?");
        assert!(provider.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn disabled_mock_fails() {
        let provider = MockAnswerProvider::new(false);
        let err = provider.answer("fon nedir?", "doküman").await.unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
        assert!(provider.health_check().await.is_err());
    }
}

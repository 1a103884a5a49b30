use izahname_service::config::{
    AnswerConfig, AnswerMode, CommonConfig, DocumentConfig, IzahnameConfig, McpConfig,
};
use izahname_service::services::metrics::init_metrics;
use izahname_service::startup::Application;
use std::io::Write;

/// Default test document. Contains `kriptoloji` so the topic fallback fires.
pub const TEST_DOCUMENT: &str = "Bu izahname, fonun yatırım stratejisini ve \
    risklerini açıklayan resmi dokümandır. Yatırım stratejisi uzun vadeli \
    sermaye kazancı elde etmeyi hedefler. Kriptoloji, bilgiyi güvenli bir \
    şekilde kodlama ve çözme bilimidir. Ücretler fon toplam gider oranı \
    üzerinden hesaplanır ve yıllık bazda ilan edilir.";

pub struct TestApp {
    pub address: String,
    // Keeps the backing file alive for the lifetime of the app.
    _document: Option<tempfile::NamedTempFile>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_document(TEST_DOCUMENT).await
    }

    /// Spawn against a fresh temp file holding `content`.
    pub async fn spawn_with_document(content: &str) -> Self {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create test document");
        write!(file, "{}", content).expect("Failed to write test document");
        let path = file.path().display().to_string();

        Self::spawn_at_path(path, Some(file)).await
    }

    /// Spawn against a path with no file behind it.
    pub async fn spawn_with_missing_document() -> Self {
        let path = format!("/tmp/izahname-test-{}.txt", uuid::Uuid::new_v4());
        Self::spawn_at_path(path, None).await
    }

    async fn spawn_at_path(document_path: String, document: Option<tempfile::NamedTempFile>) -> Self {
        init_metrics();

        let config = IzahnameConfig {
            common: CommonConfig {
                port: 0, // Random port
            },
            document: DocumentConfig {
                path: document_path,
            },
            answer: AnswerConfig {
                mode: AnswerMode::Keyword,
                text_model: "ytu-ce-cosmos/turkish-gpt2-large".to_string(),
                api_key: None,
            },
            mcp: McpConfig { enabled: false },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to come up by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            _document: document,
        }
    }
}

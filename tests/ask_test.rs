mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn ask_returns_window_at_first_word_match() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/ask", app.address))
        .json(&json!({ "question": "izahname nedir?" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");

    // Window of 100 characters starting at the first occurrence of the
    // question's first word, both sides lowercased
    let content = common::TEST_DOCUMENT.to_lowercase();
    let start = content.find("izahname").unwrap();
    let window: String = content[start..].chars().take(100).collect();
    assert_eq!(
        body["answer"],
        format!("Dokümanda şu anlatılıyor: \"{}...\"", window)
    );
}

#[tokio::test]
async fn ask_falls_back_to_topic_answer() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/ask", app.address))
        .json(&json!({ "question": "blokzincir nedir?" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["answer"],
        "Dokümanda şu anlatılıyor: \"Kriptoloji, bilgiyi güvenli bir şekilde \
         kodlama ve çözme bilimidir, genellikle şifreleme ve güvenlik için \
         kullanılır.\""
    );
}

#[tokio::test]
async fn ask_without_match_or_topic_is_not_found() {
    let app = TestApp::spawn_with_document("Bu metin yatırım fonlarını anlatır.").await;
    let client = Client::new();

    let response = client
        .post(format!("{}/ask", app.address))
        .json(&json!({ "question": "blokzincir nedir?" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["answer"], "Dokümanda bu soruya yanıt bulunamadı");
}

#[tokio::test]
async fn ask_with_missing_document_returns_500() {
    let app = TestApp::spawn_with_missing_document().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/ask", app.address))
        .json(&json!({ "question": "izahname nedir?" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let error = body["error"].as_str().expect("error field missing");
    assert!(error.starts_with("Cevap alınamadı"));
    assert!(error.contains("Document not found"));
}

#[tokio::test]
async fn index_page_serves_question_form() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("<textarea"));
    assert!(body.contains("Soruyu Gönder"));
    assert!(body.contains("/ask"));
}

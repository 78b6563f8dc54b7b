//! Common test utilities for integration tests.
//!
//! ```ignore
//! let mut harness = TestHarness::new();
//! harness.http.push_response(completion_ok("1. 笑话"));
//! harness.app.keywords.set_content("猫".into());
//! harness.app.generate();
//! harness.next_message().await;
//! ```

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use jokecard::adapters::{MockClipboard, MockHttpClient, MockResponse};
use jokecard::app::{App, AppMessage};
use jokecard::clipboard::TextCopier;
use jokecard::config::AppConfig;
use jokecard::share_card::CardExporter;
use jokecard::traits::Response;
use tokio::sync::mpsc;

pub const TEST_API_KEY: &str = "test-api-key";

/// Chat-completion response body carrying `content`.
pub fn completion_json(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

pub fn completion_ok(content: &str) -> MockResponse {
    MockResponse::Success(Response::json_body(200, &completion_json(content)))
}

pub fn status_response(status: u16, body: &str) -> MockResponse {
    MockResponse::Success(Response::new(status, bytes::Bytes::from(body.to_string())))
}

pub fn test_config() -> AppConfig {
    AppConfig::new(TEST_API_KEY).with_log_dir(None)
}

/// An [`App`] wired to mocks, with the message receiver kept aside.
pub struct TestHarness {
    pub app: App,
    pub http: MockHttpClient,
    pub clipboard: MockClipboard,
    pub fallback: MockClipboard,
    rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_clipboards(MockClipboard::new(), MockClipboard::new())
    }

    pub fn with_clipboards(clipboard: MockClipboard, fallback: MockClipboard) -> Self {
        let http = MockHttpClient::new();
        let mut app = App::new(
            &test_config(),
            Arc::new(http.clone()),
            TextCopier::new(Box::new(clipboard.clone()), Box::new(fallback.clone())),
        );
        let rx = app.message_rx.take().expect("fresh app has a receiver");
        Self {
            app,
            http,
            clipboard,
            fallback,
            rx,
        }
    }

    /// Point card export at `dir` with an explicit font path.
    pub fn export_to(mut self, dir: &Path, font: &Path) -> Self {
        self.app = self
            .app
            .with_exporter(CardExporter::new(dir, "冷笑话").with_font_path(font));
        self
    }

    /// Wait for the next background message and hand it to the app.
    pub async fn next_message(&mut self) {
        let msg = tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
            .await
            .expect("timed out waiting for app message")
            .expect("message channel closed");
        self.app.handle_message(msg);
    }

    /// Type keywords and generate, then process the result.
    pub async fn generate(&mut self, keywords: &str) {
        self.app.keywords.set_content(keywords.to_string());
        self.app.generate().expect("generate should start a request");
        self.next_message().await;
    }
}

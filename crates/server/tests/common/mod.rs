//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port. By default the Gemini
//! provider is pointed at an `httpmock::MockServer`, so tests can program the
//! upstream reply and count how often it was contacted.

// Not every helper is used by every test file that includes this module.
#![allow(unused)]

use anyhow::Result;
use brs::GenerativeContentProvider;
use brs_server::{
    config::AppConfig,
    router,
    state::{build_app_state, build_app_state_with_provider, AppState},
    types::Envelope,
};
use axum::serve;
use httpmock::MockServer;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

/// The path the mock Gemini endpoint is served under.
pub const GEMINI_PATH: &str = "/v1beta/models/gemini-1.5-pro:generateContent";

/// The API key configured for the test server.
pub const TEST_API_KEY: &str = "test-api-key";

// --- Full Application Test Harness ---

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with a Gemini provider pointed at a fresh mock server.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_config(|_| {}).await
    }

    /// Like [`TestApp::spawn`], but lets the caller adjust the configuration first.
    pub async fn spawn_with_config(customize: impl FnOnce(&mut AppConfig)) -> Result<Self> {
        let mock_server = MockServer::start_async().await;
        let mut config = AppConfig {
            gemini_api_key: Some(TEST_API_KEY.to_string()),
            gemini_api_url: Some(mock_server.url(GEMINI_PATH)),
            ..AppConfig::default()
        };
        customize(&mut config);

        let app_state = build_app_state(config)?;
        Self::spawn_with_state(app_state, mock_server).await
    }

    /// Spawns the server around a test double instead of the Gemini client.
    pub async fn spawn_with_provider(provider: Box<dyn GenerativeContentProvider>) -> Result<Self> {
        let app_state = build_app_state_with_provider(AppConfig::default(), provider)?;
        Self::spawn_with_state(app_state, MockServer::start_async().await).await
    }

    pub async fn spawn_with_state(app_state: AppState, mock_server: MockServer) -> Result<Self> {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state: app_state_for_harness,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Posts `{"fileBase64": ...}` to `path`.
    pub async fn post_document(&self, path: &str, file_base64: &str) -> Result<Response> {
        self.post_json(path, &json!({ "fileBase64": file_base64 }))
            .await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Result<Response> {
        Ok(self
            .client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

// --- Response Helpers ---

/// Reads the status and the decoded envelope of a generation response.
pub async fn read_envelope(response: Response) -> Result<(u16, Envelope)> {
    let status = response.status().as_u16();
    let envelope = response.json::<Envelope>().await?;
    Ok((status, envelope))
}

/// A Gemini `generateContent` reply whose first candidate has the given text parts.
pub fn gemini_reply(parts: &[&str]) -> Value {
    let parts: Vec<Value> = parts.iter().map(|text| json!({ "text": text })).collect();
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": "STOP"
        }]
    })
}

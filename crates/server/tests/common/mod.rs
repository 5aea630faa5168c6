//! # Common Test Utilities
//!
//! `TestApp` spawns a real server on a random port. Its generation provider
//! points at an `httpmock::MockServer`, and its database and upload directory
//! live in temporary directories that are removed when the harness is dropped.

#![allow(unused)]

use anyhow::Result;
use axum::serve;
use httpmock::MockServer;
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use socialyze_server::{
    config::{self, AppConfig, GenerationConfig},
    router,
    state::{build_app_state, AppState},
};
use std::{fs::File, io::Write, net::SocketAddr, path::PathBuf};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    pub upload_dir: PathBuf,
    _work_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application with the default upload limit.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_limit(10 * 1024 * 1024).await
    }

    /// Spawns the application from a generated `config.yml`.
    pub async fn spawn_with_limit(max_upload_bytes: usize) -> Result<Self> {
        let mock_server = MockServer::start();
        let work_dir = tempdir()?;
        let db_path = work_dir.path().join("test.db");
        let upload_dir = work_dir.path().join("uploads");

        let config_path = work_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
db_url: "{}"
upload_dir: "{}"
max_upload_bytes: {}
generation:
  timeout_secs: 5
  provider:
    provider: "local"
    api_url: "{}"
    api_key: null
    model_name: "mock-chat-model"
"#,
            db_path.to_str().unwrap(),
            upload_dir.to_str().unwrap(),
            max_upload_bytes,
            mock_server.url("/v1/chat/completions")
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let config = config::get_config(Some(config_path.to_str().unwrap()))?;
        let app_state = build_app_state(config).await?;

        Self::spawn_with_state(app_state, mock_server, work_dir).await
    }

    /// Spawns the application around a prebuilt state, for tests that inject
    /// their own collaborators.
    pub async fn spawn_with_state(
        app_state: AppState,
        mock_server: MockServer,
        work_dir: TempDir,
    ) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let upload_dir = PathBuf::from(&app_state.config.upload_dir);
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
            upload_dir,
            _work_dir: work_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Posts `bytes` as the `file` field of a multipart upload.
    pub async fn upload(&self, file_name: &str, mime: &str, bytes: Vec<u8>) -> Result<Response> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = Form::new().part("file", part);
        let response = self
            .client
            .post(format!("{}/api/upload", self.address))
            .multipart(form)
            .send()
            .await?;
        Ok(response)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A configuration rooted in `work_dir`, with persistence disabled and no provider.
pub fn offline_config(work_dir: &TempDir) -> AppConfig {
    AppConfig {
        port: 0,
        db_url: String::new(),
        upload_dir: work_dir.path().join("uploads").to_string_lossy().into_owned(),
        max_upload_bytes: 10 * 1024 * 1024,
        generation: GenerationConfig::default(),
    }
}

/// Wraps `content` the way an OpenAI-compatible chat endpoint does.
pub fn chat_completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{
            "message": { "role": "assistant", "content": content }
        }]
    })
}

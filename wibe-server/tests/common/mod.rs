#![allow(dead_code)]

use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use wibe_server::app::{build, serve};
use wibe_server::config::{AppConfig, LiveKitConfig, ServerConfig};
use wibe_server::state::AppState;

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_API_SECRET: &str = "test-secret-with-enough-entropy";
pub const ALLOWED_ORIGIN: &str = "https://wibechat-demo.web.app";
pub const DEV_ORIGIN: &str = "http://localhost:5000";
pub const FOREIGN_ORIGIN: &str = "https://evil.example.com";

pub struct TestApp {
    pub state: Arc<AppState>,
    pub client: reqwest::Client,
    addr: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = AppConfig {
            server: ServerConfig {
                bind_addr: "127.0.0.1:0".to_string(),
            },
            livekit: LiveKitConfig {
                api_key: TEST_API_KEY.to_string(),
                api_secret: TEST_API_SECRET.to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        config.validate().expect("Invalid test config");

        let (app, state) = build(&config);
        let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(serve(listener, app, state.clone(), async move {
            let _ = shutdown_rx.await;
        }));

        Self {
            state,
            client: reqwest::Client::new(),
            addr: format!("http://{addr}"),
            shutdown_tx: Some(shutdown_tx),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
        self.handle.abort();
    }
}

//! Mock HTTP server setup for integration tests

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::io;
use std::sync::{Arc, Mutex};
use stellarforge_client::{StellarForgeClient, StellarForgeClientBuilder};

/// Test fixture that manages a mock StellarForge API under `/api`.
pub struct MockApiFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockApiFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = format!("{}/api", server.url());
        Self { server, base_url }
    }

    pub fn client(&self) -> StellarForgeClient {
        StellarForgeClient::new(&self.base_url).expect("client builds against mock server")
    }

    pub fn builder(&self) -> StellarForgeClientBuilder {
        StellarForgeClientBuilder::new().api_base_url(&self.base_url)
    }

    /// Mock a JSON response for `method` on `/api{path}`.
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, format!("/api{}", path).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock `POST /api/projects/generate`, matching the request body exactly.
    pub async fn mock_generate(
        &mut self,
        expected_body: serde_json::Value,
        status: usize,
        body: &str,
    ) -> Mock {
        self.server
            .mock("POST", "/api/projects/generate")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(expected_body))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    pub async fn mock_status(&mut self, method: &str, path: &str, status: usize) -> Mock {
        self.server
            .mock(method, format!("/api{}", path).as_str())
            .with_status(status)
            .create_async()
            .await
    }
}

/// Base URL on a local port nothing listens on.
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}

/// Base URL of a server that accepts connections and never answers.
pub async fn silent_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://127.0.0.1:{}/api", port)
}

pub const ALPHA_RESPONSE: &str = r#"{"projectId":"p1","name":"Alpha","numStarSystems":30,"numStarsTotal":50,"soloSystems":20,"binarySystems":8,"trinarySystems":2,"generationTimeMs":42}"#;

/// In-memory sink for formatted `tracing` output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Route this thread's events into the buffer until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

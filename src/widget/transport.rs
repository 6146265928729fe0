//! Delivery of submitted tasks to the agent endpoint.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by a task transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server replied {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response was not valid JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),
}

/// Asynchronous channel that carries one task to the server.
#[async_trait]
pub trait TaskTransport: Send + Sync {
    /// Submit a trimmed, non-empty task.
    ///
    /// Returns the parsed response body. Callers only echo and log the
    /// body; its shape is never validated here.
    async fn submit(&self, task: &str) -> Result<Value, TransportError>;
}

/// HTTP transport posting JSON to the `/agent` endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for a server at `base_url`, e.g.
    /// `http://127.0.0.1:8080`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TaskTransport for HttpTransport {
    async fn submit(&self, task: &str) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(format!("{}/agent", self.base_url))
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "task": task }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status { status, body });
        }

        serde_json::from_str(&body).map_err(TransportError::InvalidBody)
    }
}

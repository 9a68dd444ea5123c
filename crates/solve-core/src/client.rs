// HTTP client for the remote solve endpoint.
//
// One POST per query, JSON in and JSON out. The HTTP status is logged but
// not acted on: the service reports its own failures as `{"ok": false, ...}`
// bodies with 4xx/5xx codes, and those bodies are rendered like any other.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ServerConfig;
use crate::protocol::SolveRequest;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that kept a reply from being read as JSON.
///
/// `Display` is the bare message; the result panel prefixes it with
/// `"Error: "`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Decode(String),
}

// ---------------------------------------------------------------------------
// SolveClient
// ---------------------------------------------------------------------------

/// Something that can answer a query with a JSON value.
#[async_trait]
pub trait SolveClient: Send + Sync {
    async fn solve(&self, query: &str) -> Result<Value, SolveError>;
}

/// `SolveClient` backed by a real HTTP endpoint.
pub struct HttpSolveClient {
    http: reqwest::Client,
    url: String,
}

impl HttpSolveClient {
    /// Create a client posting to `url` (the full endpoint URL).
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), url)
    }

    /// Create a client reusing a preconfigured `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn from_config(server: &ServerConfig) -> Self {
        Self::new(server.solve_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SolveClient for HttpSolveClient {
    async fn solve(&self, query: &str) -> Result<Value, SolveError> {
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(&SolveRequest { query })
            .send()
            .await
            .map_err(|e| {
                warn!(url = %self.url, error = %e, "solve request failed");
                SolveError::Transport(transport_message(&e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!(%status, error = %e, "failed to read solve response body");
            SolveError::Transport(transport_message(&e))
        })?;
        debug!(%status, bytes = body.len(), "solve response received");

        parse_body(&body)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a response body as JSON.
pub(crate) fn parse_body(body: &str) -> Result<Value, SolveError> {
    serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "solve response is not JSON");
        SolveError::Decode(format!("invalid JSON in response: {e}"))
    })
}

/// Human-readable message for a reqwest failure.
fn transport_message(err: &reqwest::Error) -> String {
    if err.is_connect() {
        format!("could not connect to solver: {err}")
    } else if err.is_timeout() {
        "timeout".to_string()
    } else {
        format!("network error: {err}")
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

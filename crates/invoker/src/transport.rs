//! Ways of delivering a JSON POST to the admin server.
//!
//! [`HttpTransport`] sends the request in-process with [`reqwest`].
//! [`CurlTransport`] shells out to the `curl` command-line client and
//! captures its stdout. Neither sets a timeout of its own.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tokio::process::Command;

use crate::error::InvokeError;

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Sends one JSON body to one URL and returns the response body text.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// POST `body` to `url` with a JSON content type.
    async fn post_json(&self, url: &str, body: &str) -> Result<String, InvokeError>;
}

// ---------------------------------------------------------------------------
// In-process HTTP
// ---------------------------------------------------------------------------

/// Transport backed by a [`reqwest::Client`].
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Return the body text, or [`InvokeError::Status`] for a non-2xx code.
    async fn ensure_success(response: reqwest::Response) -> Result<String, InvokeError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(InvokeError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<String, InvokeError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body.to_string())
            .send()
            .await?;

        tracing::debug!(status = response.status().as_u16(), "Admin API responded");
        Self::ensure_success(response).await
    }
}

// ---------------------------------------------------------------------------
// External curl process
// ---------------------------------------------------------------------------

/// Transport that runs `curl` as a child process.
///
/// `--fail` makes curl exit non-zero on HTTP errors, so a 4xx/5xx reply
/// surfaces as [`InvokeError::ProcessFailed`].
pub struct CurlTransport {
    program: String,
}

impl CurlTransport {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments passed to curl, in order.
    pub fn args(url: &str, body: &str) -> Vec<String> {
        let content_type = format!("Content-Type: {JSON_CONTENT_TYPE}");
        ["-sS", "--fail", "-X", "POST", "-H", content_type.as_str(), "-d", body, url]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

#[async_trait]
impl Transport for CurlTransport {
    fn name(&self) -> &'static str {
        "curl"
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<String, InvokeError> {
        let output = Command::new(&self.program)
            .args(Self::args(url, body))
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(InvokeError::ProcessFailed {
                code: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

//! Errors raised while invoking the admin endpoint.

/// Failure of the single outbound invocation.
///
/// Every variant means the same thing to the operator: the action was not
/// confirmed by the admin server.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// The HTTP request itself failed (connection refused, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The admin server returned a non-2xx status code.
    #[error("Admin API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The external HTTP client could not be started.
    #[error("Failed to execute curl: {0}")]
    Spawn(#[from] std::io::Error),

    /// The external HTTP client exited unsuccessfully.
    #[error("curl exited with status {code}: {stderr}")]
    ProcessFailed { code: i32, stderr: String },

    /// The request payload could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

//! Invoker configuration loaded from environment variables.

use db_action_core::error::CoreError;

/// Default admin server base URL.
pub const DEFAULT_ADMIN_API_URL: &str = "http://localhost:5000";

/// Default external HTTP client executable.
pub const DEFAULT_CURL_BIN: &str = "curl";

/// Transport string for the in-process HTTP client.
pub const TRANSPORT_HTTP: &str = "http";
/// Transport string for the external `curl` process.
pub const TRANSPORT_CURL: &str = "curl";

/// All valid transport names.
pub const VALID_TRANSPORTS: &[&str] = &[TRANSPORT_HTTP, TRANSPORT_CURL];

/// How the request leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Http,
    Curl,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => TRANSPORT_HTTP,
            Self::Curl => TRANSPORT_CURL,
        }
    }

    /// Parse from a string, returning an error for unknown transports.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            TRANSPORT_HTTP => Ok(Self::Http),
            TRANSPORT_CURL => Ok(Self::Curl),
            other => Err(CoreError::Validation(format!(
                "Unknown transport: '{other}'. Valid transports: {}",
                VALID_TRANSPORTS.join(", ")
            ))),
        }
    }
}

/// Invoker configuration.
///
/// [`Default`] reproduces the fixed target: `http://localhost:5000` over
/// the in-process HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokerConfig {
    /// Admin server base URL, without a trailing slash.
    pub admin_api_url: String,
    pub transport: TransportKind,
    /// Executable used when `transport` is [`TransportKind::Curl`].
    pub curl_bin: String,
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            admin_api_url: DEFAULT_ADMIN_API_URL.to_string(),
            transport: TransportKind::Http,
            curl_bin: DEFAULT_CURL_BIN.to_string(),
        }
    }
}

impl InvokerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                 |
    /// |-----------------------|-------------------------|
    /// | `ADMIN_API_URL`       | `http://localhost:5000` |
    /// | `DB_ACTION_TRANSPORT` | `http`                  |
    /// | `CURL_BIN`            | `curl`                  |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable
    /// source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let admin_api_url = lookup("ADMIN_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.admin_api_url);

        let transport = match lookup("DB_ACTION_TRANSPORT") {
            Some(v) => TransportKind::from_str(v.trim())?,
            None => defaults.transport,
        };

        let curl_bin = lookup("CURL_BIN")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.curl_bin);

        Ok(Self {
            admin_api_url,
            transport,
            curl_bin,
        })
    }
}

//! Client for the admin server's database-action endpoint.

use db_action_core::action::{DatabaseAction, DatabaseActionRequest, DATABASE_ACTION_PATH};

use crate::config::{InvokerConfig, TransportKind};
use crate::error::InvokeError;
use crate::transport::{CurlTransport, HttpTransport, Transport};

/// Issues database actions against a single admin server.
pub struct AdminApi {
    transport: Box<dyn Transport>,
    api_url: String,
}

impl AdminApi {
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:5000`.
    pub fn new(transport: Box<dyn Transport>, api_url: String) -> Self {
        Self { transport, api_url }
    }

    /// Build the client and transport described by `config`.
    pub fn from_config(config: &InvokerConfig) -> Self {
        let transport: Box<dyn Transport> = match config.transport {
            TransportKind::Http => Box::new(HttpTransport::new()),
            TransportKind::Curl => Box::new(CurlTransport::new(config.curl_bin.clone())),
        };
        Self::new(transport, config.admin_api_url.clone())
    }

    /// Full URL of the database-action endpoint.
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.api_url, DATABASE_ACTION_PATH)
    }

    /// Send `action` once and return the raw response text.
    ///
    /// No retries: any failure is returned to the caller as is.
    pub async fn execute(&self, action: DatabaseAction) -> Result<String, InvokeError> {
        let body = DatabaseActionRequest::new(action).to_json()?;
        let url = self.endpoint_url();

        tracing::info!(
            url = %url,
            action = action.as_str(),
            transport = self.transport.name(),
            "Sending database action",
        );

        let result = self.transport.post_json(&url, &body).await;

        match &result {
            Ok(text) => tracing::info!(bytes = text.len(), "Database action completed"),
            Err(e) => tracing::error!(error = %e, "Database action failed"),
        }

        result
    }

    /// `POST {"action":"rename_column"}`.
    pub async fn rename_column(&self) -> Result<String, InvokeError> {
        self.execute(DatabaseAction::RenameColumn).await
    }
}

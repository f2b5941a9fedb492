//! `db-action` -- one-shot admin database action.
//!
//! Asks the local admin server to rename a database column by posting
//! `{"action":"rename_column"}` to `/api/admin/database-action`, then
//! prints the server's reply or the failure.  Failures are reported,
//! not propagated: the process exits 0 either way.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default                 | Description                         |
//! |-----------------------|----------|-------------------------|-------------------------------------|
//! | `ADMIN_API_URL`       | no       | `http://localhost:5000` | Admin server base URL               |
//! | `DB_ACTION_TRANSPORT` | no       | `http`                  | `http` (in-process) or `curl`       |
//! | `CURL_BIN`            | no       | `curl`                  | curl executable for `curl` transport |

use db_action_invoker::api::AdminApi;
use db_action_invoker::config::InvokerConfig;
use db_action_invoker::report;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "db_action=info,db_action_invoker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = InvokerConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    tracing::info!(
        admin_api_url = %config.admin_api_url,
        transport = config.transport.as_str(),
        "Starting db-action",
    );

    let api = AdminApi::from_config(&config);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = report::run(&api, &mut stdout).await {
        tracing::error!(error = %e, "Failed to write to stdout");
    }
}

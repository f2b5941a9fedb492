//! Console reporting for a single invocation.
//!
//! Stdout carries exactly the operator-facing lines below; structured
//! logs go to stderr via `tracing`.

use std::error::Error as _;
use std::io::Write;

use crate::api::AdminApi;
use crate::error::InvokeError;

/// Printed before the request is sent.
pub const START_BANNER: &str = "🔄 Renaming database column...";
/// Prefix of the success line; the response text follows.
pub const SUCCESS_PREFIX: &str = "✅ Column rename result: ";
/// Prefix of the failure line; the error message follows.
pub const ERROR_PREFIX: &str = "❌ Error renaming column: ";

/// Render the final console line for an invocation outcome.
pub fn render(outcome: &Result<String, InvokeError>) -> String {
    match outcome {
        Ok(text) => format!("{SUCCESS_PREFIX}{text}"),
        Err(e) => format!("{ERROR_PREFIX}{}", error_message(e)),
    }
}

/// `Display` of `err` followed by its deeper causes.
///
/// Each variant's message already embeds its direct source, so the chain
/// starts one level down.
fn error_message(err: &InvokeError) -> String {
    let mut message = err.to_string();
    let mut cause = err.source().and_then(|s| s.source());
    while let Some(e) = cause {
        message.push_str(": ");
        message.push_str(&e.to_string());
        cause = e.source();
    }
    message
}

/// Run the rename once and write the outcome to `out`.
///
/// Invocation failures are reported and swallowed; only a failure to
/// write to `out` is returned.
pub async fn run<W: Write>(api: &AdminApi, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{START_BANNER}")?;
    out.flush()?;

    let outcome = api.rename_column().await;

    writeln!(out, "{}", render(&outcome))?;
    out.flush()
}

//! Admin database action names and the request payload.
//!
//! The admin server exposes a single `database-action` endpoint that
//! dispatches on the `action` field of a JSON body.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Endpoint
// ---------------------------------------------------------------------------

/// Path of the admin endpoint, relative to the server base URL.
pub const DATABASE_ACTION_PATH: &str = "/api/admin/database-action";

// ---------------------------------------------------------------------------
// Action constants
// ---------------------------------------------------------------------------

/// Rename a database column.
pub const ACTION_RENAME_COLUMN: &str = "rename_column";

/// All valid action names.
pub const VALID_ACTIONS: &[&str] = &[ACTION_RENAME_COLUMN];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Database action enum with string conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseAction {
    RenameColumn,
}

impl DatabaseAction {
    /// Return the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RenameColumn => ACTION_RENAME_COLUMN,
        }
    }

    /// Parse from a string, returning an error for unknown actions.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            ACTION_RENAME_COLUMN => Ok(Self::RenameColumn),
            other => Err(CoreError::Validation(format!(
                "Unknown database action: '{other}'. Valid actions: {}",
                VALID_ACTIONS.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// JSON body posted to [`DATABASE_ACTION_PATH`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseActionRequest {
    pub action: String,
}

impl DatabaseActionRequest {
    pub fn new(action: DatabaseAction) -> Self {
        Self {
            action: action.as_str().to_string(),
        }
    }

    /// Compact JSON encoding, e.g. `{"action":"rename_column"}`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn action_round_trips_through_str() {
        let action = DatabaseAction::from_str("rename_column").unwrap();
        assert_eq!(action, DatabaseAction::RenameColumn);
        assert_eq!(action.as_str(), ACTION_RENAME_COLUMN);
    }

    #[test]
    fn unknown_action_rejected() {
        let err = DatabaseAction::from_str("drop_table").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("drop_table"));
    }

    #[test]
    fn empty_action_rejected() {
        assert!(DatabaseAction::from_str("").is_err());
    }

    #[test]
    fn rename_request_encodes_compactly() {
        let body = DatabaseActionRequest::new(DatabaseAction::RenameColumn)
            .to_json()
            .unwrap();
        assert_eq!(body, r#"{"action":"rename_column"}"#);
    }

    #[test]
    fn request_decodes_from_server_shape() {
        let req: DatabaseActionRequest =
            serde_json::from_str(r#"{ "action": "rename_column" }"#).unwrap();
        assert_eq!(req, DatabaseActionRequest::new(DatabaseAction::RenameColumn));
    }
}

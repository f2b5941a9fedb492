//! Shared types for admin database actions.
//!
//! Holds the action name constants, the request payload sent to the
//! admin server, and the validation error type.

pub mod action;
pub mod error;

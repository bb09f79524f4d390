//! Error types for the helpdesk crate
//!
//! All operations return [`Result`], and every failure is classified as one
//! of the [`HelpdeskError`] variants. The engine variants (`Unauthenticated`,
//! `Unauthorized`, `TicketNotFound`, `InvalidInput`) are the only errors the
//! ticket store itself produces; the remaining variants belong to the
//! collaborators around it (workspace discovery, storage, output).

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, HelpdeskError>;

/// All errors that can occur in helpdesk
#[derive(Debug, Error)]
pub enum HelpdeskError {
    /// An operation that requires an identity was attempted without one
    #[error("You must be logged in to perform this action")]
    Unauthenticated,

    /// The caller is known but their role or ownership does not permit the
    /// requested operation
    #[error("Not authorized: {reason}")]
    Unauthorized { reason: String },

    /// The referenced ticket does not exist in the store
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    /// Required input was missing or empty
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No `.helpdesk` workspace was found in this directory or any parent
    #[error("Workspace is not initialized")]
    WorkspaceNotInitialized,

    /// The workspace is already initialized
    #[error("Workspace is already initialized at {path}")]
    AlreadyInitialized { path: String },

    /// IO error from the filesystem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An interactive prompt failed or was interrupted
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Failed to serialize or deserialize workspace data
    #[error("Failed to {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Catch-all for errors that do not fit the other variants
    #[error("{0}")]
    Custom(String),
}

impl HelpdeskError {
    /// Create a custom error from any message
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Create an `Unauthorized` error with the given reason
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            reason: reason.into(),
        }
    }

    /// Create a `Serialization` error wrapping a serde_yaml failure
    pub fn serialization(context: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// The message shown to the user when this error surfaces in the CLI
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Actionable follow-ups displayed under the error message
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Unauthenticated => {
                vec!["Log in with `helpdesk login <email>`".to_string()]
            },
            Self::TicketNotFound { .. } => {
                vec!["Run `helpdesk list` to see the tickets you can access".to_string()]
            },
            Self::WorkspaceNotInitialized => {
                vec!["Run `helpdesk init` to create a workspace here".to_string()]
            },
            Self::AlreadyInitialized { .. } => {
                vec!["Pass `--force` to overwrite the existing configuration".to_string()]
            },
            _ => Vec::new(),
        }
    }

    /// Whether retrying the same command could succeed without a fix
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_constructor() {
        let err = HelpdeskError::unauthorized("only agents can assign tickets");
        assert_eq!(
            err.to_string(),
            "Not authorized: only agents can assign tickets"
        );
    }

    #[test]
    fn test_unauthenticated_suggests_login() {
        let suggestions = HelpdeskError::Unauthenticated.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("login")));
    }

    #[test]
    fn test_engine_errors_are_not_recoverable() {
        assert!(!HelpdeskError::Unauthenticated.is_recoverable());
        assert!(
            !HelpdeskError::TicketNotFound {
                id: "abc".to_string()
            }
            .is_recoverable()
        );
    }
}

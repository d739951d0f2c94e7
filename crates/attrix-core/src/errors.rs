use thiserror::Error;

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;

/// Canonical error kind taxonomy
///
/// Only precondition violations ever escalate out of the session; routing
/// misses and validation failures are reported through their own channels
/// and collaborator failures are recovered at the delegation site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller/UI wiring bug (e.g. command issued with no bound table)
    Precondition,
    /// An external collaborator reported failure
    Collaborator,
    /// Internal invariant broken
    Internal,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Precondition => "ERR_PRECONDITION",
            ErrorKind::Collaborator => "ERR_COLLABORATOR",
            ErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Failure reported by an external collaborator
///
/// Carries the collaborator's own diagnostic verbatim. Collaborator failures
/// are converted to a user-facing warning and never change session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct CollaboratorError {
    pub reason: String,
}

impl CollaboratorError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors raised by the session core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A command that requires a bound table was dispatched while inactive
    #[error("no table is bound; command `{command}` requires an active session")]
    NoBoundTable { command: &'static str },

    /// The table collaborator refused or failed an editing transaction
    #[error("editing transaction failed: {reason}")]
    Transaction { reason: String },

    /// A delegated field-schema mutation failed inside the collaborator
    #[error("field operation `{operation}` failed: {reason}")]
    FieldMutation {
        operation: &'static str,
        reason: String,
    },
}

impl CoreError {
    /// Wrap a collaborator failure from an editing transaction
    pub fn transaction(err: CollaboratorError) -> Self {
        CoreError::Transaction { reason: err.reason }
    }

    /// Wrap a collaborator failure from a delegated field-schema mutation
    pub fn field_mutation(operation: &'static str, err: CollaboratorError) -> Self {
        CoreError::FieldMutation {
            operation,
            reason: err.reason,
        }
    }

    /// Map this error to its kind in the canonical taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::NoBoundTable { .. } => ErrorKind::Precondition,
            CoreError::Transaction { .. } | CoreError::FieldMutation { .. } => {
                ErrorKind::Collaborator
            }
        }
    }

    /// Stable error code, suitable for logs and assertions
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

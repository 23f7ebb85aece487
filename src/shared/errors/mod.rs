use thiserror::Error;

use crate::shared::validation::Notification;

/// Error taxonomy shared by the domain and application layers.
///
/// Validation failures carry the complete accumulated [`Notification`] so a
/// caller gets every problem in one round trip. Collaborator (gateway)
/// failures are opaque; the workflow that triggered them wraps them as
/// `Internal` after running its compensation.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{message}")]
    Validation {
        message: String,
        notification: Notification,
    },

    #[error("{kind} with ID {id} was not found")]
    NotFound { kind: &'static str, id: String },

    #[error("gateway failure: {0}")]
    Gateway(anyhow::Error),

    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Box<DomainError>,
    },
}

impl DomainError {
    pub fn validation(message: impl Into<String>, notification: Notification) -> Self {
        DomainError::Validation {
            message: message.into(),
            notification,
        }
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn internal(message: impl Into<String>, source: DomainError) -> Self {
        DomainError::Internal {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// The accumulated notification, when this is a validation failure.
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            DomainError::Validation { notification, .. } => Some(notification),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for DomainError {
    fn from(err: anyhow::Error) -> Self {
        DomainError::Gateway(err)
    }
}

// Result type alias for convenience
pub type DomainResult<T> = Result<T, DomainError>;

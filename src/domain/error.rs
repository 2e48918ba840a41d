use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Response contained no predictions")]
    EmptyPredictions,
}

impl DomainError {
    pub fn missing_credential(msg: impl Into<String>) -> Self {
        Self::MissingCredential(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn service(status: u16, msg: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: msg.into(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Short, stable label used as a structured logging field.
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingCredential(_) => "missing_credential",
            Self::Transport(_) => "transport",
            Self::Service { .. } => "service",
            Self::MalformedResponse(_) => "malformed_response",
            Self::EmptyPredictions => "empty_predictions",
        }
    }

    /// Fatal errors stop the application from starting at all; everything
    /// else is reported to the user as a single recoverable failure.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingCredential(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }
}

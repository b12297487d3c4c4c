use thiserror::Error;

/// Unified error type for the crate.
///
/// Remote control-plane failures keep the provider's error *code* as a
/// structured field; all classification (throttle, not-found) matches on
/// that code string, never on display text.
#[derive(Debug, Error)]
pub enum Error {
    /// Provider-reported failure with a stable error code, e.g.
    /// `Throttled`, `PipelineNotFound`, `AccessDenied`.
    #[error("Remote error {code}: {message}")]
    Remote { code: String, message: String },

    /// Network-level failure before any provider response was decoded.
    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Caller misuse, e.g. a zero chunk size or zero worker count.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The remote API violated its own contract (e.g. a not-found message
    /// naming an id that was never in the request). Fail fast rather than
    /// loop on these.
    #[error("API contract violation: {message}")]
    Contract { message: String },
}

impl Error {
    pub fn remote(code: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Remote {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn contract(message: impl Into<String>) -> Self {
        Error::Contract {
            message: message.into(),
        }
    }

    /// Provider error code, if this is a remote failure.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Remote { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Provider error message, if this is a remote failure.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Error::Remote { message, .. } => Some(message),
            _ => None,
        }
    }
}

use thiserror::Error;

use crate::operation::Operation;

/// Errors returned by the frontend service client.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// The service answered with a non-2xx status. Displays the message from
    /// the response body, or the operation's default when the body has none.
    #[error("{message}")]
    RequestFailed {
        operation: Operation,
        status: u16,
        message: String,
    },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not JSON, or not the shape the caller asked for.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid frontend URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl FrontendError {
    /// HTTP status of a failed request, if the service answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Deserialize { .. } | Self::InvalidUrl { .. } => None,
        }
    }
}

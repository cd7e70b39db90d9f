//! Error types exposed by the movie API layer.

use http::StatusCode;
use thiserror::Error;

/// Errors surfaced while configuring or communicating with the movie API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The requested movie or review does not exist (HTTP 404).
    #[error("not found: {message}")]
    NotFound {
        /// Server message or request description.
        message: String,
    },

    /// The server rejected the request as invalid (HTTP 4xx other than 404).
    #[error("request rejected: {message}")]
    Validation {
        /// Server message describing the rejection.
        message: String,
    },

    /// Networking failed before a response arrived.
    #[error("network error talking to the movie API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The server failed to handle the request (HTTP 5xx).
    #[error("movie API server error {status}: {message}")]
    Server {
        /// HTTP status returned by the server.
        status: u16,
        /// Server message or truncated response body.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("could not decode movie API response: {message}")]
    Decode {
        /// Deserialiser error detail.
        message: String,
    },

    /// The configured API base URL is unusable.
    #[error("movie API URL is invalid: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ApiError {
    /// Returns true when retrying the same request later could succeed.
    ///
    /// Network failures and server errors are transient; the remaining
    /// variants describe requests that will fail again unchanged.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Server { .. })
    }

    /// Returns the HTTP status associated with the error, when one exists.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Self::Server { status, .. } => StatusCode::from_u16(*status).ok(),
            _ => None,
        }
    }

    /// Returns a short, stable category name used in telemetry.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Validation { .. } => "validation",
            Self::Network { .. } => "network",
            Self::Server { .. } => "server",
            Self::Decode { .. } => "decode",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Configuration { .. } => "configuration",
            Self::Io { .. } => "io",
        }
    }
}

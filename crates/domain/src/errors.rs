//! Error types used throughout the hub client

use thiserror::Error;

use crate::constants::RETRYABLE_CLIENT_STATUSES;
use crate::types::ErrorBody;

/// Categories of hub failures for retry decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubErrorCategory {
    /// Key material could not be used to sign the client assertion
    Credential,
    /// 5xx, 408 or 429 from the hub - retryable
    Server,
    /// Any other non-2xx status - non-retryable
    Client,
    /// Request sent but no response arrived - retryable
    Network,
    /// Local failure that fits nowhere else - non-retryable
    Unknown,
}

/// Hub pipeline errors
///
/// Produced by the signing, token exchange and submission steps. Provider
/// operations never surface these directly; they are folded into
/// [`crate::SubmissionResult`] / [`crate::StatusResult`] at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    #[error("Error generating JWT. Confirm your PEM is correct: {0}")]
    Assertion(String),

    #[error("Token exchange failed: {0}")]
    TokenExchange(Box<HubError>),

    #[error("Server error: HTTP {status}")]
    Server { status: u16, body: ErrorBody },

    #[error("Client error: HTTP {status}")]
    Client { status: u16, body: ErrorBody },

    #[error("A network error has occurred: {0}")]
    Network(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl HubError {
    /// Build the error for a non-2xx response, picking `Server` or `Client`
    /// from the status alone.
    pub fn from_status(status: u16, body: ErrorBody) -> Self {
        if is_retryable_status(status) {
            Self::Server { status, body }
        } else {
            Self::Client { status, body }
        }
    }

    /// Wrap a transport fault raised while redeeming the client assertion.
    pub fn token_exchange(inner: Self) -> Self {
        Self::TokenExchange(Box::new(inner))
    }

    /// Get the error category for this error
    pub fn category(&self) -> HubErrorCategory {
        match self {
            Self::Assertion(_) => HubErrorCategory::Credential,
            Self::TokenExchange(inner) => inner.category(),
            Self::Server { .. } => HubErrorCategory::Server,
            Self::Client { .. } => HubErrorCategory::Client,
            Self::Network(_) => HubErrorCategory::Network,
            Self::Unknown(_) => HubErrorCategory::Unknown,
        }
    }

    /// Check if resending the same request later may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), HubErrorCategory::Server | HubErrorCategory::Network)
    }

    /// HTTP status of the response that caused this error, if one arrived
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Client { status, .. } => Some(*status),
            Self::TokenExchange(inner) => inner.status_code(),
            Self::Assertion(_) | Self::Network(_) | Self::Unknown(_) => None,
        }
    }

    /// Response body carried by this error, if the hub answered
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            Self::Server { body, .. } | Self::Client { body, .. } => Some(body),
            Self::TokenExchange(inner) => inner.body(),
            Self::Assertion(_) | Self::Network(_) | Self::Unknown(_) => None,
        }
    }
}

/// Whether a failed HTTP status is worth retrying unchanged.
///
/// True for every 5xx and for 408 (Request Timeout) and 429 (Too Many
/// Requests).
pub fn is_retryable_status(status: u16) -> bool {
    status >= 500 || RETRYABLE_CLIENT_STATUSES.contains(&status)
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to build HTTP client: {0}")]
    Transport(String),
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue { field: field.into(), reason: reason.into() }
    }
}

/// Result type alias for hub pipeline operations
pub type Result<T> = std::result::Result<T, HubError>;

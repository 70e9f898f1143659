//! Error types and handling for the TikTok Shop SDK
//!
//! Errors carry enough detail for debugging without ever including credential
//! values. Three families matter to callers:
//!
//! - **Missing credentials**: a required environment variable was absent or
//!   empty. Raised before any network activity.
//! - **Transport failures**: DNS, connection or timeout problems
//!   ([`Error::Network`], [`Error::Timeout`]).
//! - **API errors**: the platform answered with a non-success status or a
//!   non-zero envelope code ([`Error::Http`]).
//!
//! Parameter validation ([`Error::InvalidParameter`]) and configuration
//! problems ([`Error::Config`]) are reported locally, also before any request
//! is sent.
//!
//! # Example
//!
//! ```no_run
//! # use tiktok_shop_sdk::{Client, Error, ErrorKind, SearchProductsRequest};
//! # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
//! let request = SearchProductsRequest::new(10, "access-token");
//! match client.products().search_products(&request).await {
//!     Ok(resp) => println!("status {}", resp.status),
//!     Err(e) if e.kind() == ErrorKind::Auth => println!("token rejected"),
//!     Err(Error::Timeout) => println!("request timed out"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Result type alias for the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the SDK
#[derive(Error, Debug)]
pub enum Error {
    /// A required credential environment variable is missing or empty
    #[error("missing credential: {var} is not set or empty")]
    MissingCredential {
        /// Name of the offending environment variable
        var: String,
    },

    /// Error status or error payload from the API
    #[error("http {status}: code={code:?} {message} (req={request_id:?})")]
    Http {
        /// HTTP status code
        status: u16,
        /// Platform error code from the response envelope, if any
        code: Option<i64>,
        /// Error message from the platform
        message: String,
        /// Request ID reported by the platform
        request_id: Option<String>,
    },

    /// A call parameter was rejected before sending
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Deserialization error
    #[error("deserialize: {0}")]
    Deserialize(String),

    /// Network error
    #[error("network: {0}")]
    Network(String),

    /// Request timeout
    #[error("timeout")]
    Timeout,

    /// Configuration error
    #[error("config: {0}")]
    Config(String),

    /// Failed to write output
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("other: {0}")]
    Other(String),
}

/// Coarse error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credential variable missing before startup
    MissingCredential,
    /// Authentication/authorization errors (401/403 or token error codes)
    Auth,
    /// Malformed request parameters (400/422 or local validation)
    Validation,
    /// Resource not found (404)
    NotFound,
    /// Rate limit exceeded (429)
    RateLimit,
    /// Server side failure (5xx)
    Internal,
    /// Network or timeout failure
    Transport,
    /// Configuration error
    Config,
    /// Other/unknown error
    Other,
}

/// Platform codes for invalid, expired or revoked access tokens
const AUTH_ERROR_CODES: &[i64] = &[105000, 105001, 105002, 105003, 105005, 106001];

impl ErrorKind {
    /// Classify an API error from its HTTP status and envelope code
    pub fn from_status(status: u16, code: Option<i64>) -> Self {
        if let Some(code) = code {
            if AUTH_ERROR_CODES.contains(&code) {
                return ErrorKind::Auth;
            }
        }
        match status {
            401 | 403 => ErrorKind::Auth,
            400 | 422 => ErrorKind::Validation,
            404 => ErrorKind::NotFound,
            429 => ErrorKind::RateLimit,
            500..=599 => ErrorKind::Internal,
            _ => ErrorKind::Other,
        }
    }
}

impl Error {
    /// Get the error kind for categorization
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingCredential { .. } => ErrorKind::MissingCredential,
            Error::Http { status, code, .. } => ErrorKind::from_status(*status, *code),
            Error::InvalidParameter(_) => ErrorKind::Validation,
            Error::Network(_) | Error::Timeout => ErrorKind::Transport,
            Error::Config(_) => ErrorKind::Config,
            Error::Deserialize(_) | Error::Io(_) | Error::Other(_) => ErrorKind::Other,
        }
    }

    /// Whether the error was raised before any request left the process
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Error::MissingCredential { .. } | Error::InvalidParameter(_) | Error::Config(_)
        )
    }

    /// Get the HTTP status code if this is an HTTP error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the platform error code if the envelope carried one
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Error::Http { code, .. } => *code,
            _ => None,
        }
    }

    /// Get the request ID if available
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::Http { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    pub(crate) fn missing(var: &str) -> Self {
        Error::MissingCredential {
            var: var.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() || err.is_request() {
            Error::Network(err.to_string())
        } else if err.is_decode() {
            Error::Deserialize(err.to_string())
        } else {
            Error::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Deserialize(err.to_string())
    }
}

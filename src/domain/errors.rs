//! Domain error types
//!
//! This module defines the error hierarchy for the HMC client.
//! All errors are domain-specific and don't expose third-party types:
//! HTTP and XML library errors are converted to strings with enough context
//! (URL, status code, byte position) to diagnose a failure without re-running.

use thiserror::Error;

/// Main HMC client error type
///
/// This is the primary error type used throughout the crate. Each variant
/// wraps the error of one stage of the pipeline (logon, fetch, decode) so
/// callers can match on the stage that failed.
#[derive(Debug, Error)]
pub enum HmcError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logon handshake errors
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Resource GET errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Feed decoding errors
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl HmcError {
    /// Process exit code for this error
    ///
    /// - `2` configuration
    /// - `3` authentication
    /// - `4` fetch / connection
    /// - `5` decode and anything else fatal
    pub fn exit_code(&self) -> i32 {
        match self {
            HmcError::Configuration(_) => 2,
            HmcError::Auth(_) => 3,
            HmcError::Fetch(_) => 4,
            HmcError::Decode(_) | HmcError::Io(_) => 5,
        }
    }
}

impl From<std::io::Error> for HmcError {
    fn from(err: std::io::Error) -> Self {
        HmcError::Io(err.to_string())
    }
}

/// Logon errors
///
/// Any of these means the session holds no usable cookie.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A credential cannot be rendered into the LogonRequest document
    #[error("Cannot render logon request: {0}")]
    InvalidCredential(String),

    /// The HMC answered the logon with a non-200 status
    #[error("Logon to {url} rejected with status {status}")]
    Rejected { url: String, status: u16 },

    /// DNS, TLS, connection refused and similar failures
    #[error("Logon to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// No response within the configured request timeout
    #[error("Logon to {url} timed out")]
    Timeout { url: String },
}

/// Resource GET errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-200 response. An unauthenticated session usually lands here with 401.
    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// DNS, TLS, connection refused and similar failures
    #[error("GET {url} failed: {message}")]
    Transport { url: String, message: String },

    /// No response within the configured request timeout
    #[error("GET {url} timed out")]
    Timeout { url: String },

    /// The response body could not be read to the end
    #[error("Failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

impl FetchError {
    /// HTTP status observed for this failure, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// URL of the failed request
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::Timeout { url }
            | FetchError::Body { url, .. } => url,
        }
    }
}

/// Feed decoding errors
///
/// Decoding never yields a partial record list: any of these aborts the
/// whole decode call.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// The byte stream is not well-formed XML
    #[error("Malformed XML at byte {position}: {message}")]
    Syntax { position: u64, message: String },

    /// The document root is not an Atom `feed`
    #[error("Expected <feed> root element, found <{found}>")]
    UnexpectedRoot { found: String },

    /// The document contains no element at all
    #[error("Document has no root element")]
    MissingRoot,

    /// The document ended while elements were still open
    #[error("Document truncated inside <{open}>")]
    Truncated { open: String },

    /// A scalar field holds text that does not parse as its type
    #[error("Invalid value '{value}' for {element}/{field}: {message}")]
    InvalidField {
        element: &'static str,
        field: String,
        value: String,
        message: String,
    },
}

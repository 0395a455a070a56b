//! Error types for the solrkit library.
//!
//! All errors are represented by the [`SolrError`] enum. Failures reported by
//! the Solr server itself are split into two variants: [`SolrError::Server`]
//! for responses that carry a structured error body, and
//! [`SolrError::Transport`] for HTTP failures where no structured body was
//! available and only the status code is known.
//!
//! # Examples
//!
//! ```
//! use solrkit::error::{Result, SolrError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SolrError::invalid_config("missing collection name"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for solrkit operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum SolrError {
    /// HTTP-level errors from the underlying client (connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error response with a structured error body from the server.
    #[error("Solr error {code} (HTTP {status}): {message}")]
    Server {
        /// HTTP status of the response.
        status: u16,
        /// Server-supplied numeric error code.
        code: i64,
        /// Human-readable message from the server.
        message: String,
        /// Additional error metadata entries, if the server supplied any.
        metadata: Vec<String>,
    },

    /// A non-success HTTP response without a parseable error body.
    #[error("HTTP {status}: {message}")]
    Transport {
        /// HTTP status of the response.
        status: u16,
        /// Synthesized description of the failure.
        message: String,
    },

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SolrError.
pub type Result<T> = std::result::Result<T, SolrError>;

impl SolrError {
    /// Create a new server error from a structured error body.
    pub fn server<S: Into<String>>(
        status: u16,
        code: i64,
        message: S,
        metadata: Vec<String>,
    ) -> Self {
        SolrError::Server {
            status,
            code,
            message: message.into(),
            metadata,
        }
    }

    /// Create a new transport error carrying just an HTTP status.
    pub fn transport(status: u16) -> Self {
        SolrError::Transport {
            status,
            message: format!("request failed with HTTP status {status}"),
        }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SolrError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SolrError::Other(msg.into())
    }

    /// HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SolrError::Server { status, .. } | SolrError::Transport { status, .. } => Some(*status),
            SolrError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let error = SolrError::server(400, 400, "undefined field rate", vec![]);
        assert_eq!(
            error.to_string(),
            "Solr error 400 (HTTP 400): undefined field rate"
        );
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn test_transport_error_display() {
        let error = SolrError::transport(502);
        assert_eq!(
            error.to_string(),
            "HTTP 502: request failed with HTTP status 502"
        );
        assert_eq!(error.status(), Some(502));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = SolrError::from(json_error);
        match error {
            SolrError::Json(_) => {}
            _ => panic!("Expected JSON error variant"),
        }
        assert!(error.status().is_none());
    }
}

/*
[INPUT]:  Error sources (configuration, clock offset, HTTP transport, API envelopes)
[OUTPUT]: Structured error types with cause chains
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use chrono::FixedOffset;
use thiserror::Error;

/// Boxed error cause attached to [`IntranetError::Internal`].
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for the Intranet SDK
#[derive(Error, Debug)]
pub enum IntranetError {
    /// Invalid client configuration, fatal at construction
    #[error("configuration error: {0}")]
    Config(String),

    /// STS token derivation requires the local clock to sit in UTC+8
    #[error("system timezone must be UTC+8, current offset is {offset}")]
    Timezone { offset: FixedOffset },

    /// Transport-layer failure: connection, timeout, non-2xx status,
    /// undecodable body, or request serialization
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// The remote service returned an envelope with a non-zero code
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },
}

impl IntranetError {
    /// Create an internal error wrapping an underlying cause
    pub fn internal(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        IntranetError::Internal {
            message: message.into(),
            source: Some(cause.into()),
        }
    }

    /// Create an internal error with no underlying cause
    pub fn internal_msg(message: impl Into<String>) -> Self {
        IntranetError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Check if the error came from the remote API rather than this SDK
    pub fn is_api_error(&self) -> bool {
        matches!(self, IntranetError::Api { .. })
    }

    /// Remote application code, when the error is an API error
    pub fn api_code(&self) -> Option<i64> {
        match self {
            IntranetError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for IntranetError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else {
            "HTTP request failed".to_string()
        };
        IntranetError::internal(message, err)
    }
}

impl From<serde_json::Error> for IntranetError {
    fn from(err: serde_json::Error) -> Self {
        IntranetError::internal("invalid JSON payload", err)
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, IntranetError>;

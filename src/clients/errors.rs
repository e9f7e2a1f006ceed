//! Dispatch-level error types.
//!
//! - [`HttpResponseError`]: a non-2xx response from the platform
//! - [`MaxHttpRetriesExceededError`]: retry attempts were exhausted
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: the unified error returned by a [`RequestDispatcher`]
//!
//! Which part of an error response becomes the human-readable message is
//! decided per request by an [`ErrorPolicy`].
//!
//! [`RequestDispatcher`]: crate::clients::RequestDispatcher

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// # Example
///
/// ```rust
/// use shopify_fetch::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"errors":"Not Found"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
/// assert_eq!(error.to_string(), r#"{"errors":"Not Found"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The error message, extracted according to the request's [`ErrorPolicy`].
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when 429/500 responses persist after every allowed try.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Error message from the last response.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty.
    #[error("Cannot send a request without a path.")]
    EmptyPath,
}

/// Unified error type for a single dispatch.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the failure came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

/// Where the human-readable message of an error response comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorMessageSource {
    /// The whole raw response body.
    Body,
    /// A top-level field of the decoded JSON body.
    Field(String),
}

/// Caller-declared extraction rules for error messages, keyed by status code.
///
/// Statuses without a rule, or whose rule finds nothing, fall back to the
/// default JSON serialization of `errors`, `error`, `error_description` and
/// the request id.
///
/// # Example
///
/// ```rust
/// use shopify_fetch::clients::{ErrorMessageSource, ErrorPolicy};
/// use serde_json::json;
///
/// let policy = ErrorPolicy::new().on_status(403, ErrorMessageSource::Body);
/// assert_eq!(
///     policy.extract(403, "Forbidden: bad token", &json!({})),
///     Some("Forbidden: bad token".to_string())
/// );
/// assert_eq!(policy.extract(404, "nope", &json!({})), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorPolicy {
    rules: HashMap<u16, ErrorMessageSource>,
}

impl ErrorPolicy {
    /// Creates an empty policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule for `status`, replacing any previous rule.
    #[must_use]
    pub fn on_status(mut self, status: u16, source: ErrorMessageSource) -> Self {
        self.rules.insert(status, source);
        self
    }

    /// Returns `true` if no rules are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Extracts the message for `status`, if a rule applies and yields text.
    #[must_use]
    pub fn extract(&self, status: u16, raw_body: &str, body: &Value) -> Option<String> {
        match self.rules.get(&status)? {
            ErrorMessageSource::Body => {
                (!raw_body.is_empty()).then(|| raw_body.to_string())
            }
            ErrorMessageSource::Field(name) => match body.get(name)? {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other => Some(other.to_string()),
            },
        }
    }
}

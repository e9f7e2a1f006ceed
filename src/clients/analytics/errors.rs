//! Analytics-specific error types.

use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};

/// Error type for ShopifyQL analytics queries.
///
/// A query can fail in transport ([`AnalyticsError::Http`]) or be rejected
/// by the analytics service with a 2xx response carrying a `message`
/// ([`AnalyticsError::Reported`]).
///
/// # Example
///
/// ```rust
/// use shopify_fetch::clients::analytics::AnalyticsError;
///
/// let error = AnalyticsError::Reported {
///     message: "Invalid query".to_string(),
/// };
/// assert_eq!(error.to_string(), "Analytics query failed: Invalid query");
/// ```
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The analytics service reported an error in the response body.
    #[error("Analytics query failed: {message}")]
    Reported {
        /// The message from the response body.
        message: String,
    },

    /// No analytics token is configured.
    #[error("No analytics token configured. Set one with ClientConfigBuilder::analytics_token.")]
    MissingToken,
}

impl From<InvalidHttpRequestError> for AnalyticsError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

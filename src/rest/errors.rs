//! Errors raised while fetching pages.
//!
//! Failure is all-or-nothing: when any page fails, the items gathered so far
//! are dropped and the error is returned to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_fetch::rest::FetchError;
//!
//! match client.get_all_orders::<serde_json::Value>(&params).await {
//!     Ok(orders) => println!("{} orders", orders.len()),
//!     Err(FetchError::PageLimitExceeded { max_pages, .. }) => {
//!         eprintln!("gave up after {max_pages} pages");
//!     }
//!     Err(e) => eprintln!("fetch failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};

/// Error type for single-page, paginated, batched and count fetches.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A dispatch failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A page's item array could not be decoded into the requested type.
    #[error("Failed to decode '{key}' items: {source}")]
    Decode {
        /// The body key holding the item array.
        key: &'static str,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The traversal needed more pages than the configured ceiling.
    #[error("Pagination of {path} exceeded the limit of {max_pages} pages")]
    PageLimitExceeded {
        /// The request path.
        path: String,
        /// The configured ceiling.
        max_pages: u32,
    },

    /// The traversal was cancelled between pages.
    #[error("Fetching {path} was cancelled after {pages} pages")]
    Cancelled {
        /// The request path.
        path: String,
        /// Pages fetched before cancellation was observed.
        pages: u32,
    },

    /// Query parameters could not be turned into a query string.
    #[error("Invalid query parameters: {reason}")]
    InvalidParams {
        /// What was wrong.
        reason: String,
    },

    /// A successful response lacked a required field.
    #[error("Response from {path} is missing the '{field}' field")]
    MissingField {
        /// The request path.
        path: String,
        /// The missing field.
        field: &'static str,
    },
}

impl From<InvalidHttpRequestError> for FetchError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

impl FetchError {
    /// Returns the HTTP status code, if the failure came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_http_error_is_transparent() {
        let error: FetchError = HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
            error_reference: None,
        })
        .into();

        assert_eq!(error.to_string(), r#"{"errors":"Not Found"}"#);
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_page_limit_message() {
        let error = FetchError::PageLimitExceeded {
            path: "orders.json".to_string(),
            max_pages: 3,
        };
        assert_eq!(
            error.to_string(),
            "Pagination of orders.json exceeded the limit of 3 pages"
        );
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<u64>("\"x\"").unwrap_err();
        let error = FetchError::Decode {
            key: "orders",
            source,
        };
        assert!(error.to_string().contains("'orders'"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_invalid_request_converts_to_http() {
        let error = FetchError::from(InvalidHttpRequestError::EmptyPath);
        assert!(matches!(
            error,
            FetchError::Http(HttpError::InvalidRequest(InvalidHttpRequestError::EmptyPath))
        ));
    }
}

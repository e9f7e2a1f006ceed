//! HTTP request types.
//!
//! An [`HttpRequest`] carries everything a [`RequestDispatcher`] needs for a
//! single call, including per-call overrides that would otherwise require
//! mutating shared client state: a base URL, a [`HeaderMode`], the pacing
//! delay and the [`ErrorPolicy`].
//!
//! [`RequestDispatcher`]: crate::clients::RequestDispatcher

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::clients::errors::{ErrorPolicy, InvalidHttpRequestError};

/// HTTP methods supported by the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources or running queries.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A request body.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON document, sent as `application/json`.
    Json(serde_json::Value),
    /// URL-encoded form pairs. Repeated keys are kept in order.
    Form(Vec<(String, String)>),
}

impl RequestBody {
    /// Returns the default `Content-Type` for this body.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Form(_) => "application/x-www-form-urlencoded",
        }
    }

    /// Encodes the body for the wire.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Form(pairs) => pairs
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(value)
                    )
                })
                .collect::<Vec<_>>()
                .join("&"),
        }
    }
}

/// How a request's headers relate to the dispatcher's default headers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderMode {
    /// Start from the default headers and overlay the request's own.
    #[default]
    MergeDefaults,
    /// Send only the request's own headers.
    ReplaceDefaults,
}

/// A single request to be dispatched.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use shopify_fetch::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
///     .query_param("limit", "250")
///     .query_param("order", "id asc")
///     .pacing(Duration::from_millis(500))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.query.len(), 2);
/// assert_eq!(request.pacing, Duration::from_millis(500));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path, relative to the base URL.
    pub path: String,
    /// Ordered query parameters.
    pub query: Vec<(String, String)>,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Additional headers to include in the request.
    pub extra_headers: HashMap<String, String>,
    /// Whether the dispatcher's default headers are merged or replaced.
    pub header_mode: HeaderMode,
    /// Base URL overriding the dispatcher's default for this call only.
    pub base_url: Option<String>,
    /// Fixed delay the dispatcher waits before sending.
    pub pacing: Duration,
    /// Number of times to attempt the request (default: 1).
    pub tries: u32,
    /// Which part of an error response becomes the error message.
    pub error_policy: ErrorPolicy,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the path is empty, or if the
    /// method is `Post` or `Put` and there is no body.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim().is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the first query value bound to `key`.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            request: HttpRequest {
                http_method: method,
                path: path.into(),
                query: Vec::new(),
                body: None,
                extra_headers: HashMap::new(),
                header_mode: HeaderMode::default(),
                base_url: None,
                pacing: Duration::ZERO,
                tries: 1,
                error_policy: ErrorPolicy::default(),
            },
        }
    }

    /// Appends query parameters in iteration order.
    #[must_use]
    pub fn query<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request
            .query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.query.push((key.into(), value.into()));
        self
    }

    /// Sets a JSON body.
    #[must_use]
    pub fn json(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.request.body = Some(RequestBody::Json(body.into()));
        self
    }

    /// Sets a URL-encoded form body.
    #[must_use]
    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.request.body = Some(RequestBody::Form(pairs));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.extra_headers.insert(key.into(), value.into());
        self
    }

    /// Sets how the dispatcher's default headers are treated.
    #[must_use]
    pub const fn header_mode(mut self, mode: HeaderMode) -> Self {
        self.request.header_mode = mode;
        self
    }

    /// Overrides the base URL for this request.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.request.base_url = Some(base_url.into());
        self
    }

    /// Sets the pacing delay applied before the request is sent.
    #[must_use]
    pub const fn pacing(mut self, delay: Duration) -> Self {
        self.request.pacing = delay;
        self
    }

    /// Sets the number of times to attempt the request.
    ///
    /// Default is 1 (no retries). Higher values enable automatic retries for
    /// 429 and 500 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.request.tries = tries;
        self
    }

    /// Sets the error extraction policy.
    #[must_use]
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.request.error_policy = policy;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::ErrorMessageSource;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_defaults() {
        let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "orders.json");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
        assert_eq!(request.header_mode, HeaderMode::MergeDefaults);
        assert!(request.base_url.is_none());
        assert_eq!(request.pacing, Duration::ZERO);
        assert_eq!(request.tries, 1);
        assert!(request.error_policy.is_empty());
    }

    #[test]
    fn test_query_preserves_insertion_order_and_repeats() {
        let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
            .query([("status", "any"), ("limit", "250")])
            .query_param("status", "open")
            .build()
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("status".to_string(), "any".to_string()),
                ("limit".to_string(), "250".to_string()),
                ("status".to_string(), "open".to_string()),
            ]
        );
        assert_eq!(request.query_value("status"), Some("any"));
        assert_eq!(request.query_value("missing"), None);
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        let result = HttpRequest::builder(HttpMethod::Post, "queries").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));

        let result = HttpRequest::builder(HttpMethod::Put, "orders/1.json").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "put"
        ));
    }

    #[test]
    fn test_verify_rejects_empty_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "  ").build();
        assert_eq!(result.unwrap_err(), InvalidHttpRequestError::EmptyPath);
    }

    #[test]
    fn test_form_body_encoding_keeps_repeated_keys() {
        let body = RequestBody::Form(vec![
            ("request_metadata[path]".to_string(), "/store/shop/marketing".to_string()),
            ("q[]".to_string(), "FROM sales SHOW total_sales".to_string()),
            ("q[]".to_string(), "SINCE -7d".to_string()),
        ]);

        assert_eq!(body.content_type(), "application/x-www-form-urlencoded");
        assert_eq!(
            body.encode(),
            "request_metadata%5Bpath%5D=%2Fstore%2Fshop%2Fmarketing\
             &q%5B%5D=FROM%20sales%20SHOW%20total_sales\
             &q%5B%5D=SINCE%20-7d"
        );
    }

    #[test]
    fn test_json_body_encoding() {
        let body = RequestBody::Json(json!({"a": 1}));
        assert_eq!(body.content_type(), "application/json");
        assert_eq!(body.encode(), r#"{"a":1}"#);
    }

    #[test]
    fn test_builder_sets_per_request_overrides() {
        let policy = ErrorPolicy::new().on_status(403, ErrorMessageSource::Body);
        let request = HttpRequest::builder(HttpMethod::Post, "queries")
            .form(vec![("token".to_string(), "t".to_string())])
            .header("Accept", "application/json")
            .header_mode(HeaderMode::ReplaceDefaults)
            .base_url("https://analytics.example.com")
            .tries(3)
            .error_policy(policy.clone())
            .build()
            .unwrap();

        assert_eq!(request.header_mode, HeaderMode::ReplaceDefaults);
        assert_eq!(
            request.base_url.as_deref(),
            Some("https://analytics.example.com")
        );
        assert_eq!(
            request.extra_headers.get("Accept"),
            Some(&"application/json".to_string())
        );
        assert_eq!(request.tries, 3);
        assert_eq!(request.error_policy, policy);
    }
}

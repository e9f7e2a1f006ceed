//! HTTP response types.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-Shopify-Shop-Api-Call-Limit` header.
///
/// The header format is "X/Y" where X is the current request count and Y is
/// the bucket size.
///
/// # Example
///
/// ```rust
/// use shopify_fetch::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("40/80").unwrap();
/// assert_eq!(limit.request_count, 40);
/// assert_eq!(limit.bucket_size, 80);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// The current number of requests made in this bucket.
    pub request_count: u32,
    /// The maximum number of requests allowed in this bucket.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses the rate limit header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: count.parse().ok()?,
            bucket_size: size.parse().ok()?,
        })
    }
}

/// A response returned by a dispatcher.
///
/// Header names are lower-cased and every header maps to the sequence of its
/// values, so repeated headers survive intact.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// Rate limit information (from `X-Shopify-Shop-Api-Call-Limit` header).
    pub api_call_limit: Option<ApiCallLimit>,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit and retry headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let api_call_limit = first_value(&headers, "x-shopify-shop-api-call-limit")
            .and_then(ApiCallLimit::parse);

        let retry_request_after =
            first_value(&headers, "retry-after").and_then(|value| value.trim().parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            api_call_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        first_value(&self.headers, &name.to_ascii_lowercase())
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        first_value(&self.headers, "x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        first_value(&self.headers, "x-shopify-api-deprecated-reason")
    }
}

fn first_value<'a>(headers: &'a HashMap<String, Vec<String>>, key: &str) -> Option<&'a str> {
    headers
        .get(key)
        .and_then(|values| values.first())
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (k, v) in pairs {
            map.entry((*k).to_string()).or_default().push((*v).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_returns_true_only_for_2xx() {
        for code in 200..=299 {
            assert!(HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
        for code in [199, 300, 400, 404, 429, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
    }

    #[test]
    fn test_api_call_limit_parsing() {
        let limit = ApiCallLimit::parse("1/40").unwrap();
        assert_eq!(limit.request_count, 1);
        assert_eq!(limit.bucket_size, 40);

        assert!(ApiCallLimit::parse("invalid").is_none());
        assert!(ApiCallLimit::parse("40").is_none());
        assert!(ApiCallLimit::parse("40/").is_none());
        assert!(ApiCallLimit::parse("/80").is_none());
        assert!(ApiCallLimit::parse("abc/def").is_none());
    }

    #[test]
    fn test_new_parses_shopify_headers() {
        let response = HttpResponse::new(
            429,
            headers(&[
                ("x-shopify-shop-api-call-limit", "39/40"),
                ("retry-after", "2.5"),
                ("x-request-id", "req-1"),
            ]),
            json!({}),
        );

        assert_eq!(
            response.api_call_limit,
            Some(ApiCallLimit {
                request_count: 39,
                bucket_size: 40
            })
        );
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
        assert_eq!(response.request_id(), Some("req-1"));
        assert!(response.deprecation_reason().is_none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(
            200,
            headers(&[("x-shopify-api-deprecated-reason", "use GraphQL")]),
            json!({}),
        );
        assert_eq!(
            response.header("X-Shopify-API-Deprecated-Reason"),
            Some("use GraphQL")
        );
        assert_eq!(response.deprecation_reason(), Some("use GraphQL"));
    }

    #[test]
    fn test_repeated_headers_are_kept() {
        let response = HttpResponse::new(
            200,
            headers(&[("link", "<a>; rel=\"next\""), ("link", "<b>; rel=\"previous\"")]),
            json!({}),
        );
        assert_eq!(response.headers["link"].len(), 2);
        assert_eq!(response.header("link"), Some("<a>; rel=\"next\""));
    }
}

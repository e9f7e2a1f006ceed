//! HTTP client for Admin API and analytics communication.
//!
//! This module provides [`HttpClient`], the reqwest-backed
//! [`RequestDispatcher`] used in production.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::dispatcher::RequestDispatcher;
use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HeaderMode, HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::ClientConfig;

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the Shopify Admin API.
///
/// The client handles:
/// - Base URI construction from the shop domain or `api_host`
/// - Default headers including User-Agent and access token
/// - Per-request base URL and header overrides
/// - The pacing delay carried by each request
/// - Automatic retry logic for 429 and 500 responses
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use shopify_fetch::{AccessToken, ClientConfig, ShopDomain};
/// use shopify_fetch::clients::HttpClient;
///
/// let config = ClientConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("shpat_123").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// assert_eq!(client.base_uri(), "https://my-store.myshopify.com");
/// assert_eq!(client.base_path(), "/admin/api/2025-10");
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Base path (e.g., "/admin/api/2025-10").
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        let shop = config.shop().as_ref();
        let api_host = config.api_host();

        let base_uri = api_host.map_or_else(
            || format!("https://{shop}"),
            |host| host.as_ref().to_string(),
        );
        let base_path = format!("/admin/api/{}", config.api_version());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}shopify-fetch v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );

        // Proxies route on the Host header
        if api_host.is_some() {
            default_headers.insert("Host".to_string(), shop.to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL `request` will be sent to.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        let path = request.path.trim_start_matches('/');
        match &request.base_url {
            Some(base_url) => format!("{}/{path}", base_url.trim_end_matches('/')),
            None => format!("{}{}/{path}", self.base_uri, self.base_path),
        }
    }

    /// Returns the headers `request` will be sent with.
    #[must_use]
    pub fn headers_for(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers = match request.header_mode {
            HeaderMode::MergeDefaults => self.default_headers.clone(),
            HeaderMode::ReplaceDefaults => HashMap::new(),
        };

        if let Some(body) = &request.body {
            headers.insert("Content-Type".to_string(), body.content_type().to_string());
        }
        for (key, value) in &request.extra_headers {
            // Header names are case-insensitive; drop any default spelled differently
            headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
            headers.insert(key.clone(), value.clone());
        }
        headers
    }

    /// Sends an HTTP request.
    ///
    /// Waits for the request's pacing delay, then sends it, retrying 429
    /// and 500 responses up to `request.tries` times.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);
        let headers = self.headers_for(&request);
        let body = request.body.as_ref().map(RequestBody::encode);

        if !request.pacing.is_zero() {
            tokio::time::sleep(request.pacing).await;
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }
            if !request.query.is_empty() {
                req_builder = req_builder.query(&request.query);
            }
            if let Some(body) = &body {
                req_builder = req_builder.body(body.clone());
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    if code >= 500 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::json!({})
                    }
                })
            };

            let response = HttpResponse::new(code, res_headers, body);

            if let Some(reason) = response.deprecation_reason() {
                tracing::warn!(
                    "Deprecated request to Shopify API at {}, received reason: {}",
                    request.path,
                    reason
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let error_message = request
                .error_policy
                .extract(code, &body_text, &response.body)
                .unwrap_or_else(|| Self::serialize_error(&response));
            let error_reference = response.request_id().map(String::from);

            let should_retry = code == 429 || code == 500;
            if !should_retry || request.tries <= 1 {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    error_reference,
                }));
            }

            if tries >= request.tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: error_message,
                    error_reference,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::debug!(
                path = %request.path,
                status = code,
                attempt = tries,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "retrying request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap` with lower-cased keys.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        // 500s ignore Retry-After
        if status == 429 {
            if let Some(retry_after) = response.retry_request_after {
                if retry_after.is_finite() && retry_after >= 0.0 {
                    return Duration::from_secs_f64(retry_after);
                }
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Serializes an error response to the default JSON message format.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = response.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
            if let Some(desc) = response.body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

impl RequestDispatcher for HttpClient {
    async fn perform(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, HostUrl, ShopDomain};

    fn config() -> ClientConfig {
        ClientConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-access-token").unwrap())
            .api_version("2024-10".parse().unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_from_config() {
        let client = HttpClient::new(&config()).unwrap();

        assert_eq!(client.base_uri(), "https://test-shop.myshopify.com");
        assert_eq!(client.base_path(), "/admin/api/2024-10");
        assert!(client.default_headers().get("Host").is_none());
    }

    #[test]
    fn test_default_headers() {
        let client = HttpClient::new(&config()).unwrap();
        let headers = client.default_headers();

        let user_agent = headers.get("User-Agent").unwrap();
        assert!(user_agent.contains("shopify-fetch v"));
        assert!(user_agent.contains("Rust"));
        assert_eq!(
            headers.get("X-Shopify-Access-Token"),
            Some(&"test-access-token".to_string())
        );
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ClientConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_api_host_overrides_base_uri_and_sets_host_header() {
        let config = ClientConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .api_host(HostUrl::new("http://127.0.0.1:9999/").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(client.base_uri(), "http://127.0.0.1:9999");
        assert_eq!(
            client.default_headers().get("Host"),
            Some(&"test-shop.myshopify.com".to_string())
        );
    }

    #[test]
    fn test_url_for_uses_base_path_or_override() {
        let client = HttpClient::new(&config()).unwrap();

        let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
            .build()
            .unwrap();
        assert_eq!(
            client.url_for(&request),
            "https://test-shop.myshopify.com/admin/api/2024-10/orders.json"
        );

        let request = HttpRequest::builder(HttpMethod::Get, "/queries")
            .base_url("https://analytics.shopify.com/")
            .build()
            .unwrap();
        assert_eq!(
            client.url_for(&request),
            "https://analytics.shopify.com/queries"
        );
    }

    #[test]
    fn test_headers_for_replace_mode_drops_defaults() {
        let client = HttpClient::new(&config()).unwrap();
        let request = HttpRequest::builder(HttpMethod::Post, "queries")
            .form(vec![("token".to_string(), "t".to_string())])
            .header("Accept", "application/json")
            .header_mode(HeaderMode::ReplaceDefaults)
            .build()
            .unwrap();

        let headers = client.headers_for(&request);
        assert!(!headers.contains_key("X-Shopify-Access-Token"));
        assert!(!headers.contains_key("User-Agent"));
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/x-www-form-urlencoded".to_string())
        );
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_headers_for_merge_mode_overlays_extra_headers() {
        let client = HttpClient::new(&config()).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
            .header("accept", "text/plain")
            .build()
            .unwrap();

        let headers = client.headers_for(&request);
        assert!(headers.contains_key("X-Shopify-Access-Token"));
        assert!(!headers.contains_key("Accept"));
        assert_eq!(headers.get("accept"), Some(&"text/plain".to_string()));
    }

    #[test]
    fn test_serialize_error_formats() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc".to_string()]);
        let response = HttpResponse::new(
            401,
            headers,
            serde_json::json!({"error": "invalid", "error_description": "bad token"}),
        );

        let message = HttpClient::serialize_error(&response);
        assert!(message.contains(r#""error":"invalid""#));
        assert!(message.contains(r#""error_description":"bad token""#));
        assert!(message.contains("please include this id: abc."));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}

//! ShopifyQL query construction and execution.

use serde_json::Value;

use crate::clients::analytics::AnalyticsError;
use crate::clients::rest::RestClient;
use crate::clients::{
    ErrorMessageSource, ErrorPolicy, HeaderMode, HttpMethod, HttpRequest, HttpResponse,
    RequestDispatcher,
};
use crate::config::ClientConfig;

/// The analytics host used when none is configured.
pub const DEFAULT_ANALYTICS_HOST: &str = "https://analytics.shopify.com";

/// The data source queried when none is given.
pub const DEFAULT_SOURCE: &str = "marketing-kpi-total-sales";

/// A ShopifyQL query against the analytics service.
///
/// Every statement is sent as its own `q[]` form field.
///
/// # Example
///
/// ```rust
/// use shopify_fetch::{AccessToken, AnalyticsToken, ClientConfig, ShopDomain};
/// use shopify_fetch::clients::analytics::AnalyticsQuery;
///
/// let config = ClientConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("shpat_123").unwrap())
///     .analytics_token(AnalyticsToken::new("analytics-token").unwrap())
///     .build()
///     .unwrap();
///
/// let request = AnalyticsQuery::new(["FROM sales SHOW total_sales SINCE -7d"])
///     .build_request(&config)
///     .unwrap();
///
/// assert_eq!(request.base_url.as_deref(), Some("https://analytics.shopify.com"));
/// assert_eq!(request.query_value("dataOnly"), Some("true"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsQuery {
    statements: Vec<String>,
    source: String,
}

impl AnalyticsQuery {
    /// Creates a query for `statements` against the default source.
    #[must_use]
    pub fn new<I, S>(statements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            statements: statements.into_iter().map(Into::into).collect(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }

    /// Sets the data source.
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Returns the statements.
    #[must_use]
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Builds the request for `config`'s shop.
    ///
    /// The request replaces the client's default headers and carries no
    /// pacing delay.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::MissingToken`] if no analytics token is
    /// configured.
    pub fn build_request(&self, config: &ClientConfig) -> Result<HttpRequest, AnalyticsError> {
        let token = config
            .analytics_token()
            .ok_or(AnalyticsError::MissingToken)?;
        let base_url = config
            .analytics_host()
            .map_or(DEFAULT_ANALYTICS_HOST, |host| host.as_ref());

        let mut form = vec![
            (
                "request_metadata[path]".to_string(),
                format!("/store/{}/marketing", config.shop().shop_name()),
            ),
            ("source".to_string(), self.source.clone()),
            ("token".to_string(), token.as_ref().to_string()),
        ];
        form.extend(
            self.statements
                .iter()
                .map(|statement| ("q[]".to_string(), statement.clone())),
        );

        let request = HttpRequest::builder(HttpMethod::Post, "queries")
            .base_url(base_url)
            .query_param("beta", "true")
            .query_param("dataOnly", "true")
            .form(form)
            .header_mode(HeaderMode::ReplaceDefaults)
            .header("Accept", "application/json")
            .header("Accept-Encoding", "gzip, deflate")
            .header(
                "Content-Type",
                "application/x-www-form-urlencoded;charset=UTF-8",
            )
            .error_policy(ErrorPolicy::new().on_status(403, ErrorMessageSource::Body))
            .build()?;
        Ok(request)
    }

    /// Turns a response into the decoded body.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Reported`] if the body carries a `message`.
    pub fn decode(response: HttpResponse) -> Result<Value, AnalyticsError> {
        let message = match response.body.get("message") {
            None | Some(Value::Null) => None,
            Some(Value::String(message)) => Some(message.clone()),
            Some(other) => Some(other.to_string()),
        };
        match message {
            Some(message) => Err(AnalyticsError::Reported { message }),
            None => Ok(response.body),
        }
    }
}

impl<D: RequestDispatcher> RestClient<D> {
    /// Runs ShopifyQL `statements` against the analytics service.
    ///
    /// `source` defaults to `marketing-kpi-total-sales`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError`] if no analytics token is configured, the
    /// request fails, or the service reports an error.
    pub async fn run_analytics_query<I, S>(
        &self,
        statements: I,
        source: Option<&str>,
    ) -> Result<Value, AnalyticsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut query = AnalyticsQuery::new(statements);
        if let Some(source) = source {
            query = query.source(source);
        }
        self.run_analytics(&query).await
    }

    /// Runs a prepared [`AnalyticsQuery`].
    ///
    /// # Errors
    ///
    /// See [`run_analytics_query`](Self::run_analytics_query).
    pub async fn run_analytics(&self, query: &AnalyticsQuery) -> Result<Value, AnalyticsError> {
        let request = query.build_request(self.config())?;
        tracing::debug!(
            statements = query.statements().len(),
            source = %query.source,
            "running analytics query"
        );
        let response = self.dispatcher().perform(request).await?;
        AnalyticsQuery::decode(response)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;
    use crate::clients::RequestBody;
    use crate::config::{AccessToken, AnalyticsToken, HostUrl, ShopDomain};

    fn config(analytics_token: Option<&str>) -> ClientConfig {
        let mut builder = ClientConfig::builder()
            .shop(ShopDomain::new("acme").unwrap())
            .access_token(AccessToken::new("shpat").unwrap());
        if let Some(token) = analytics_token {
            builder = builder.analytics_token(AnalyticsToken::new(token).unwrap());
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_form_carries_every_statement() {
        let request = AnalyticsQuery::new(["SHOW a", "SHOW b", "SHOW c"])
            .build_request(&config(Some("tok")))
            .unwrap();

        let Some(RequestBody::Form(pairs)) = &request.body else {
            panic!("expected a form body");
        };
        let statements: Vec<&str> = pairs
            .iter()
            .filter(|(k, _)| k == "q[]")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(statements, vec!["SHOW a", "SHOW b", "SHOW c"]);
        assert!(pairs.contains(&(
            "request_metadata[path]".to_string(),
            "/store/acme/marketing".to_string()
        )));
        assert!(pairs.contains(&("source".to_string(), DEFAULT_SOURCE.to_string())));
        assert!(pairs.contains(&("token".to_string(), "tok".to_string())));
    }

    #[test]
    fn test_request_replaces_default_headers_without_pacing() {
        let request = AnalyticsQuery::new(["SHOW a"])
            .source("custom-source")
            .build_request(&config(Some("tok")))
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.path, "queries");
        assert_eq!(request.header_mode, HeaderMode::ReplaceDefaults);
        assert_eq!(request.pacing, Duration::ZERO);
        assert_eq!(request.query_value("beta"), Some("true"));
        assert_eq!(
            request.extra_headers.get("Accept-Encoding").map(String::as_str),
            Some("gzip, deflate")
        );
        assert!(!request.error_policy.is_empty());
    }

    #[test]
    fn test_analytics_host_override() {
        let config = ClientConfig::builder()
            .shop(ShopDomain::new("acme").unwrap())
            .access_token(AccessToken::new("shpat").unwrap())
            .analytics_token(AnalyticsToken::new("tok").unwrap())
            .analytics_host(HostUrl::new("http://127.0.0.1:8080").unwrap())
            .build()
            .unwrap();
        let request = AnalyticsQuery::new(["SHOW a"]).build_request(&config).unwrap();
        assert_eq!(request.base_url.as_deref(), Some("http://127.0.0.1:8080"));
    }

    #[test]
    fn test_missing_token() {
        let result = AnalyticsQuery::new(["SHOW a"]).build_request(&config(None));
        assert!(matches!(result, Err(AnalyticsError::MissingToken)));
    }

    #[test]
    fn test_decode_promotes_message() {
        let response = HttpResponse::new(
            200,
            HashMap::new(),
            serde_json::json!({"message": "Query syntax error"}),
        );
        let error = AnalyticsQuery::decode(response).unwrap_err();
        assert!(matches!(
            error,
            AnalyticsError::Reported { ref message } if message == "Query syntax error"
        ));

        let response = HttpResponse::new(200, HashMap::new(), serde_json::json!({"data": []}));
        assert_eq!(
            AnalyticsQuery::decode(response).unwrap(),
            serde_json::json!({"data": []})
        );
    }
}

//! Single-page results.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize as _;
use serde_json::Value;

use crate::clients::HttpResponse;
use crate::rest::cursor::next_cursor;
use crate::rest::errors::FetchError;

/// The headers and decoded body of one dispatched page.
///
/// `headers` is `None` when the response carried no header map at all;
/// pagination treats that as the last page.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use serde_json::json;
/// use shopify_fetch::clients::HttpResponse;
/// use shopify_fetch::rest::PageResult;
///
/// let mut headers = HashMap::new();
/// headers.insert(
///     "link".to_string(),
///     vec![r#"<https://x/y?page_info=NEXT>; rel="next""#.to_string()],
/// );
/// let page = PageResult::from_response(HttpResponse::new(
///     200,
///     headers,
///     json!({"orders": [{"id": 1}, {"id": 2}]}),
/// ));
///
/// let orders: Vec<serde_json::Value> = page.items("orders").unwrap();
/// assert_eq!(orders.len(), 2);
/// assert_eq!(page.next_cursor(), Some("NEXT".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PageResult {
    /// Response headers keyed by lower-cased name, if any were returned.
    pub headers: Option<HashMap<String, Vec<String>>>,
    /// The decoded body.
    pub body: Value,
}

impl PageResult {
    /// Creates a page result from raw parts.
    #[must_use]
    pub const fn new(headers: Option<HashMap<String, Vec<String>>>, body: Value) -> Self {
        Self { headers, body }
    }

    /// Converts a dispatcher response. An empty header map becomes `None`.
    #[must_use]
    pub fn from_response(response: HttpResponse) -> Self {
        let headers = (!response.headers.is_empty()).then_some(response.headers);
        Self {
            headers,
            body: response.body,
        }
    }

    /// Returns the cursor for the following page, if one is advertised.
    #[must_use]
    pub fn next_cursor(&self) -> Option<String> {
        self.headers.as_ref().and_then(next_cursor)
    }

    /// Returns `true` if another page is advertised.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_cursor().is_some()
    }

    /// Decodes the item array stored under `key`.
    ///
    /// A missing, `null` or empty array yields no items.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Decode`] if the array's elements do not match `T`.
    pub fn items<T: DeserializeOwned>(&self, key: &'static str) -> Result<Vec<T>, FetchError> {
        match self.body.get(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) if items.is_empty() => Ok(Vec::new()),
            Some(items) => {
                Vec::<T>::deserialize(items).map_err(|source| FetchError::Decode { key, source })
            }
        }
    }

    /// Returns the `count` field of a count response.
    #[must_use]
    pub fn count(&self) -> Option<u64> {
        self.body.get("count").and_then(Value::as_u64)
    }
}

//! Query parameter assembly.
//!
//! Every resource's parameters pass through [`FilterSet::assemble`], the one
//! place that decides which keys survive next to a cursor: the cursor and
//! output-shaping keys (`fields`, `limit`) always do, filter keys only when
//! there is no cursor. The platform rejects a cursor combined with filters,
//! since the cursor already encodes the filter state.

use serde::Serialize;
use serde_json::Value;

use crate::rest::errors::FetchError;

/// The query parameter carrying the continuation cursor.
pub const CURSOR_PARAM: &str = "page_info";

/// Keys that shape the output and are kept alongside a cursor.
pub const OUTPUT_SHAPING_PARAMS: [&str; 2] = ["fields", "limit"];

/// An ordered set of resolved query parameters for one request.
///
/// Keys are unique; inserting an existing key replaces its value in place.
///
/// # Example
///
/// ```rust
/// use shopify_fetch::rest::FilterSet;
///
/// let mut filters = FilterSet::new();
/// filters.insert("status", "any");
/// filters.insert("limit", "250");
/// filters.insert("status", "open");
///
/// assert_eq!(filters.get("status"), Some("open"));
/// assert_eq!(filters.keys().collect::<Vec<_>>(), vec!["status", "limit"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    params: Vec<(String, String)>,
}

impl FilterSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Inserts or replaces a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((key, value)),
        }
    }

    /// Inserts a parameter only if the key is not present yet.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !self.contains_key(&key) {
            self.params.push((key, value.into()));
        }
    }

    /// Returns the value bound to `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Returns the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Flattens a serializable parameter struct into a `FilterSet`.
    ///
    /// Keys keep the struct's field declaration order. `None` fields are
    /// skipped, lists become comma-joined strings (empty lists are skipped),
    /// and enumerations emit their wire value.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidParams`] if `params` does not serialize
    /// to a flat object.
    pub fn from_params<P: Serialize + ?Sized>(params: &P) -> Result<Self, FetchError> {
        let value = serde_json::to_value(params).map_err(|e| FetchError::InvalidParams {
            reason: format!("Failed to serialize params: {e}"),
        })?;

        let Value::Object(map) = value else {
            return Err(FetchError::InvalidParams {
                reason: "params must serialize to an object".to_string(),
            });
        };

        let mut filters = Self::new();
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => filters.insert(key, s),
                Value::Number(n) => filters.insert(key, n.to_string()),
                Value::Bool(b) => filters.insert(key, b.to_string()),
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        filters.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => filters.insert(key, val.to_string()),
            }
        }

        Ok(filters)
    }

    /// Builds the query for one page, applying cursor precedence.
    ///
    /// With a non-empty `cursor`, the result is the cursor followed by
    /// whichever output-shaping keys `params` sets; every other filter is
    /// dropped. Without one, every parameter is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidParams`] if `params` cannot be flattened.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_fetch::rest::FilterSet;
    /// use shopify_fetch::rest::resources::OrderListParams;
    ///
    /// let params = OrderListParams {
    ///     since_id: Some(42),
    ///     limit: Some(50),
    ///     ..Default::default()
    /// };
    ///
    /// let first = FilterSet::assemble(&params, None).unwrap();
    /// assert_eq!(first.get("since_id"), Some("42"));
    /// assert_eq!(first.get("status"), Some("any"));
    ///
    /// let next = FilterSet::assemble(&params, Some("abc")).unwrap();
    /// assert_eq!(next.keys().collect::<Vec<_>>(), vec!["page_info", "limit"]);
    /// ```
    pub fn assemble<P: Serialize + ?Sized>(
        params: &P,
        cursor: Option<&str>,
    ) -> Result<Self, FetchError> {
        let all = Self::from_params(params)?;

        let Some(cursor) = cursor.filter(|c| !c.is_empty()) else {
            return Ok(all.without(CURSOR_PARAM));
        };

        let mut filters = Self::new();
        filters.insert(CURSOR_PARAM, cursor);
        for (key, value) in all.params {
            if OUTPUT_SHAPING_PARAMS.contains(&key.as_str()) {
                filters.insert(key, value);
            }
        }
        Ok(filters)
    }

    fn without(mut self, key: &str) -> Self {
        self.params.retain(|(k, _)| k != key);
        self
    }
}

impl IntoIterator for FilterSet {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

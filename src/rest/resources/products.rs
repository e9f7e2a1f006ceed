//! Product list and count parameters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::enums::{ProductStatus, SortOrder};
use crate::rest::query::{CountQuery, ListQuery};

/// Parameters for listing products.
///
/// # Example
///
/// ```rust
/// use shopify_fetch::rest::resources::{ProductListParams, ProductStatus};
/// use shopify_fetch::rest::ListQuery;
///
/// let params = ProductListParams {
///     handle: Some(vec!["shirt".to_string(), "hat".to_string()]),
///     presentment_currencies: Some(vec!["USD".to_string(), "EUR".to_string()]),
///     status: Some(ProductStatus::Active),
///     ..Default::default()
/// };
///
/// let filters = params.filter_set(None).unwrap();
/// assert_eq!(filters.get("handle"), Some("shirt,hat"));
/// assert_eq!(filters.get("presentment_currencies"), Some("USD,EUR"));
/// assert_eq!(filters.get("status"), Some("active"));
/// ```
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Filter by collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    /// Show products created at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show products created at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Filter by product handles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<Vec<String>>,

    /// Retrieve only these product IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Currency codes to return presentment prices in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_currencies: Option<Vec<String>>,

    /// Filter by product type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Show products published at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    /// Show products published at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    /// Return only products after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Filter by product status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// Filter by product title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Show products last updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show products last updated at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Filter by product vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Sort order.
    pub order: SortOrder,

    /// Fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Page size (defaults to the client's page limit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Cursor to resume from.
    #[serde(skip)]
    pub page_info: Option<String>,
}

impl ListQuery for ProductListParams {
    const ITEMS_KEY: &'static str = "products";

    fn path(&self) -> String {
        "products.json".to_string()
    }

    fn page_info(&self) -> Option<&str> {
        self.page_info.as_deref()
    }
}

/// Parameters for counting products.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ProductCountParams {
    /// Filter by collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    /// Count products created at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Count products created at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Filter by product type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Count products published at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    /// Count products published at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    /// Filter by product status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// Count products last updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Count products last updated at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Filter by product vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

impl CountQuery for ProductCountParams {
    fn path(&self) -> String {
        "products/count.json".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_cursor_drops_product_filters() {
        let params = ProductListParams {
            collection_id: Some(841_564_295),
            published_at_min: Some(Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap()),
            product_type: Some("Shirts".to_string()),
            title: Some("Tee".to_string()),
            vendor: Some("Acme".to_string()),
            status: Some(ProductStatus::Draft),
            limit: Some(25),
            ..Default::default()
        };

        let first = params.filter_set(None).unwrap();
        assert_eq!(first.get("collection_id"), Some("841564295"));
        assert_eq!(first.get("published_at_min"), Some("2023-03-01T12:00:00Z"));
        assert_eq!(first.get("vendor"), Some("Acme"));

        let next = params.filter_set(Some("P2")).unwrap();
        assert_eq!(
            next.iter().collect::<Vec<_>>(),
            vec![("page_info", "P2"), ("limit", "25")]
        );
    }

    #[test]
    fn test_count_params() {
        let params = ProductCountParams {
            vendor: Some("Acme".to_string()),
            status: Some(ProductStatus::Active),
            ..Default::default()
        };
        let filters = params.filter_set().unwrap();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters.get("status"), Some("active"));
        assert_eq!(params.path(), "products/count.json");
    }
}

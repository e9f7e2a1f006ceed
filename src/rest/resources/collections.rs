//! Collection, collection product and collect parameters.
//!
//! Custom and smart collections accept the same filters, held in
//! [`CollectionFilters`] and flattened into each list struct.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::enums::{CollectionPublishedStatus, SortOrder};
use crate::rest::query::ListQuery;

/// Filters shared by custom and smart collection listings.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CollectionFilters {
    /// Filter by collection handles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<Vec<String>>,

    /// Retrieve only these collection IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Show collections that include this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Show collections published at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    /// Show collections published at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    /// Filter by publication status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<CollectionPublishedStatus>,

    /// Return only collections after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Filter by collection title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Show collections last updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show collections last updated at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Sort order.
    pub order: SortOrder,
}

/// Parameters for listing custom collections.
///
/// # Example
///
/// ```rust
/// use shopify_fetch::rest::resources::{
///     CollectionFilters, CollectionPublishedStatus, CustomCollectionListParams,
/// };
/// use shopify_fetch::rest::ListQuery;
///
/// let params = CustomCollectionListParams {
///     filters: CollectionFilters {
///         published_status: Some(CollectionPublishedStatus::Published),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
///
/// let filters = params.filter_set(None).unwrap();
/// assert_eq!(filters.get("published_status"), Some("published"));
/// assert_eq!(filters.get("order"), Some("id asc"));
/// ```
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CustomCollectionListParams {
    /// Collection filters.
    #[serde(flatten)]
    pub filters: CollectionFilters,

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

impl ListQuery for CustomCollectionListParams {
    const ITEMS_KEY: &'static str = "custom_collections";

    fn path(&self) -> String {
        "custom_collections.json".to_string()
    }

    fn page_info(&self) -> Option<&str> {
        self.page_info.as_deref()
    }
}

/// Parameters for listing smart collections.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct SmartCollectionListParams {
    /// Collection filters.
    #[serde(flatten)]
    pub filters: CollectionFilters,

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

impl ListQuery for SmartCollectionListParams {
    const ITEMS_KEY: &'static str = "smart_collections";

    fn path(&self) -> String {
        "smart_collections.json".to_string()
    }

    fn page_info(&self) -> Option<&str> {
        self.page_info.as_deref()
    }
}

/// Parameters for listing the products of one collection.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CollectionProductListParams {
    #[serde(skip)]
    collection_id: u64,

    /// Page size (defaults to the client's page limit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Cursor to resume from.
    #[serde(skip)]
    pub page_info: Option<String>,
}

impl CollectionProductListParams {
    /// Creates parameters for the products of `collection_id`.
    #[must_use]
    pub const fn new(collection_id: u64) -> Self {
        Self {
            collection_id,
            limit: None,
            page_info: None,
        }
    }

    /// Returns the collection id.
    #[must_use]
    pub const fn collection_id(&self) -> u64 {
        self.collection_id
    }
}

impl ListQuery for CollectionProductListParams {
    const ITEMS_KEY: &'static str = "products";

    fn path(&self) -> String {
        format!("collections/{}/products.json", self.collection_id)
    }

    fn page_info(&self) -> Option<&str> {
        self.page_info.as_deref()
    }
}

/// Parameters for listing collects.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CollectListParams {
    /// Return only collects after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

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

impl ListQuery for CollectListParams {
    const ITEMS_KEY: &'static str = "collects";

    fn path(&self) -> String {
        "collects.json".to_string()
    }

    fn page_info(&self) -> Option<&str> {
        self.page_info.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattened_filters_reach_the_query() {
        let params = SmartCollectionListParams {
            filters: CollectionFilters {
                handle: Some(vec!["summer".to_string()]),
                product_id: Some(632_910_392),
                title: Some("Summer".to_string()),
                ..Default::default()
            },
            limit: Some(10),
            ..Default::default()
        };

        let filters = params.filter_set(None).unwrap();
        assert_eq!(filters.get("handle"), Some("summer"));
        assert_eq!(filters.get("product_id"), Some("632910392"));
        assert_eq!(filters.get("title"), Some("Summer"));
        assert_eq!(filters.get("limit"), Some("10"));
        assert_eq!(filters.get("order"), Some("id asc"));
    }

    #[test]
    fn test_custom_collection_cursor_drops_filters() {
        let params = CustomCollectionListParams {
            filters: CollectionFilters {
                since_id: Some(7),
                ..Default::default()
            },
            fields: Some(vec!["id".to_string()]),
            ..Default::default()
        };
        let filters = params.filter_set(Some("CC")).unwrap();
        assert_eq!(
            filters.iter().collect::<Vec<_>>(),
            vec![("page_info", "CC"), ("fields", "id")]
        );
    }

    #[test]
    fn test_collection_products_path() {
        let params = CollectionProductListParams::new(841_564_295);
        assert_eq!(params.path(), "collections/841564295/products.json");
        assert_eq!(params.collection_id(), 841_564_295);
    }

    #[test]
    fn test_collects_since_id() {
        let params = CollectListParams {
            since_id: Some(455_204_334),
            ..Default::default()
        };
        assert_eq!(
            params.filter_set(None).unwrap().get("since_id"),
            Some("455204334")
        );
        assert_eq!(CollectListParams::ITEMS_KEY, "collects");
    }
}

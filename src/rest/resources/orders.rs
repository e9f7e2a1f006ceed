//! Order list and count parameters.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use shopify_fetch::rest::resources::{FinancialStatus, OrderListParams, SortOrder};
//! use shopify_fetch::rest::ListQuery;
//!
//! let params = OrderListParams {
//!     created_at_min: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
//!     financial_status: Some(FinancialStatus::Paid),
//!     order: SortOrder::CreatedAtDesc,
//!     ..Default::default()
//! };
//!
//! let filters = params.filter_set(None).unwrap();
//! assert_eq!(filters.get("created_at_min"), Some("2024-01-01T00:00:00Z"));
//! assert_eq!(filters.get("financial_status"), Some("paid"));
//! assert_eq!(filters.get("status"), Some("any"));
//! assert_eq!(filters.get("order"), Some("created_at desc"));
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::enums::{FinancialStatus, FulfillmentStatus, OrderStatus, SortOrder};
use crate::rest::query::{CountQuery, ListQuery};

/// Parameters for listing orders.
///
/// Unset fields are not sent. `status` defaults to `any` and `order` to
/// `id asc`, so both are always sent on the first page.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct OrderListParams {
    /// Show orders created at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show orders created at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Show orders imported at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_min: Option<DateTime<Utc>>,

    /// Show orders imported at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_max: Option<DateTime<Utc>>,

    /// Show orders last updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show orders last updated at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Filter by financial status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatus>,

    /// Filter by fulfillment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatus>,

    /// Retrieve only these order IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Return only orders after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Filter by order status.
    pub status: OrderStatus,

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

impl ListQuery for OrderListParams {
    const ITEMS_KEY: &'static str = "orders";

    fn path(&self) -> String {
        "orders.json".to_string()
    }

    fn page_info(&self) -> Option<&str> {
        self.page_info.as_deref()
    }
}

/// Parameters for counting orders.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct OrderCountParams {
    /// Count orders created at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Count orders created at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Count orders last updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Count orders last updated at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Filter by financial status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatus>,

    /// Filter by fulfillment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatus>,

    /// Filter by order status.
    pub status: OrderStatus,
}

impl CountQuery for OrderCountParams {
    fn path(&self) -> String {
        "orders/count.json".to_string()
    }
}

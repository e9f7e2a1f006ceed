//! Customer list and count parameters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::enums::SortOrder;
use crate::rest::query::{CountQuery, ListQuery};

/// Parameters for listing customers.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CustomerListParams {
    /// Show customers created at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show customers created at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Show customers last updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show customers last updated at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Retrieve only these customer IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Return only customers after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

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

impl ListQuery for CustomerListParams {
    const ITEMS_KEY: &'static str = "customers";

    fn path(&self) -> String {
        "customers.json".to_string()
    }

    fn page_info(&self) -> Option<&str> {
        self.page_info.as_deref()
    }
}

/// Parameters for counting customers.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CustomerCountParams {
    /// Count customers created at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Count customers created at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Count customers last updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Count customers last updated at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

impl CountQuery for CustomerCountParams {
    fn path(&self) -> String {
        "customers/count.json".to_string()
    }
}

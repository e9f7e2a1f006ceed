//! Inventory item parameters.
//!
//! Inventory items are fetched by explicit id, so bulk retrieval batches the
//! id list instead of following cursors; see
//! [`PaginationEngine::fetch_batched`](crate::rest::PaginationEngine::fetch_batched).

use serde::Serialize;

use crate::rest::query::ListQuery;

/// Parameters for listing inventory items.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct InventoryItemListParams {
    /// The inventory item IDs to retrieve.
    pub ids: Vec<u64>,

    /// Page size (defaults to the client's page limit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Cursor to resume from.
    #[serde(skip)]
    pub page_info: Option<String>,
}

impl InventoryItemListParams {
    /// Creates parameters for `ids`.
    #[must_use]
    pub fn new(ids: impl Into<Vec<u64>>) -> Self {
        Self {
            ids: ids.into(),
            ..Default::default()
        }
    }
}

impl ListQuery for InventoryItemListParams {
    const ITEMS_KEY: &'static str = "inventory_items";

    fn path(&self) -> String {
        "inventory_items.json".to_string()
    }

    fn page_info(&self) -> Option<&str> {
        self.page_info.as_deref()
    }
}

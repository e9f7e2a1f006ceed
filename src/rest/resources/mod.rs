//! Per-resource query parameters.
//!
//! Each list struct implements [`ListQuery`](crate::rest::ListQuery) and each
//! count struct implements [`CountQuery`](crate::rest::CountQuery). Unset
//! fields are never sent, list fields are sent comma-joined, and enumerations
//! are sent as their wire values.
//!
//! | Params | Path | Items key |
//! |--------|------|-----------|
//! | [`OrderListParams`] | `orders.json` | `orders` |
//! | [`CustomerListParams`] | `customers.json` | `customers` |
//! | [`ProductListParams`] | `products.json` | `products` |
//! | [`InventoryItemListParams`] | `inventory_items.json` | `inventory_items` |
//! | [`PriceRuleListParams`] | `price_rules.json` | `price_rules` |
//! | [`DiscountCodeListParams`] | `price_rules/{id}/discount_codes.json` | `discount_codes` |
//! | [`CustomCollectionListParams`] | `custom_collections.json` | `custom_collections` |
//! | [`SmartCollectionListParams`] | `smart_collections.json` | `smart_collections` |
//! | [`CollectionProductListParams`] | `collections/{id}/products.json` | `products` |
//! | [`CollectListParams`] | `collects.json` | `collects` |

mod collections;
mod customers;
mod enums;
mod inventory_items;
mod orders;
mod price_rules;
mod products;

pub use collections::{
    CollectListParams, CollectionFilters, CollectionProductListParams,
    CustomCollectionListParams, SmartCollectionListParams,
};
pub use customers::{CustomerCountParams, CustomerListParams};
pub use enums::{
    CollectionPublishedStatus, FinancialStatus, FulfillmentStatus, OrderStatus, ProductStatus,
    SortOrder,
};
pub use inventory_items::InventoryItemListParams;
pub use orders::{OrderCountParams, OrderListParams};
pub use price_rules::{DiscountCodeListParams, PriceRuleListParams};
pub use products::{ProductCountParams, ProductListParams};

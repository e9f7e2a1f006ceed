//! Enumerated filter values.
//!
//! Each enumeration serializes to its wire value, never its symbolic name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The payment status filter for orders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatus {
    /// Payment has been authorized but not captured.
    Authorized,
    /// Payment is pending.
    Pending,
    /// Payment has been fully captured.
    Paid,
    /// Payment has been partially paid.
    PartiallyPaid,
    /// Payment has been fully refunded.
    Refunded,
    /// Payment authorization has been voided.
    Voided,
    /// Payment has been partially refunded.
    PartiallyRefunded,
    /// Any financial status.
    Any,
    /// Authorized or partially paid.
    Unpaid,
}

impl FinancialStatus {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Authorized => "authorized",
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::PartiallyPaid => "partially_paid",
            Self::Refunded => "refunded",
            Self::Voided => "voided",
            Self::PartiallyRefunded => "partially_refunded",
            Self::Any => "any",
            Self::Unpaid => "unpaid",
        }
    }
}

/// The shipping status filter for orders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    /// Orders that have been shipped.
    Shipped,
    /// Partially shipped orders.
    Partial,
    /// Orders that have not yet been shipped.
    Unshipped,
    /// Any fulfillment status.
    Any,
    /// Unshipped or partially shipped orders.
    Unfulfilled,
}

impl FulfillmentStatus {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shipped => "shipped",
            Self::Partial => "partial",
            Self::Unshipped => "unshipped",
            Self::Any => "any",
            Self::Unfulfilled => "unfulfilled",
        }
    }
}

/// The lifecycle status filter for orders. Defaults to `any`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Open orders only.
    Open,
    /// Closed orders only.
    Closed,
    /// Cancelled orders only.
    Cancelled,
    /// Orders of any status.
    #[default]
    Any,
}

impl OrderStatus {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Cancelled => "cancelled",
            Self::Any => "any",
        }
    }
}

/// The status filter for products.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Ready to sell.
    Active,
    /// No longer being sold.
    Archived,
    /// Not ready to sell.
    Draft,
}

impl ProductStatus {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Draft => "draft",
        }
    }
}

/// The publication filter for collections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CollectionPublishedStatus {
    /// Published collections only.
    Published,
    /// Unpublished collections only.
    Unpublished,
    /// Collections of any publication status.
    Any,
}

impl CollectionPublishedStatus {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Unpublished => "unpublished",
            Self::Any => "any",
        }
    }
}

/// Sort order for list endpoints, sent as `order=<field> <direction>`.
///
/// Defaults to ascending by id.
///
/// # Example
///
/// ```rust
/// use shopify_fetch::rest::resources::SortOrder;
///
/// assert_eq!(SortOrder::default().as_str(), "id asc");
/// assert_eq!(SortOrder::UpdatedAtDesc.to_string(), "updated_at desc");
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// `id asc`
    #[default]
    #[serde(rename = "id asc")]
    IdAsc,
    /// `id desc`
    #[serde(rename = "id desc")]
    IdDesc,
    /// `created_at asc`
    #[serde(rename = "created_at asc")]
    CreatedAtAsc,
    /// `created_at desc`
    #[serde(rename = "created_at desc")]
    CreatedAtDesc,
    /// `updated_at asc`
    #[serde(rename = "updated_at asc")]
    UpdatedAtAsc,
    /// `updated_at desc`
    #[serde(rename = "updated_at desc")]
    UpdatedAtDesc,
    /// `processed_at asc`
    #[serde(rename = "processed_at asc")]
    ProcessedAtAsc,
    /// `processed_at desc`
    #[serde(rename = "processed_at desc")]
    ProcessedAtDesc,
}

impl SortOrder {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IdAsc => "id asc",
            Self::IdDesc => "id desc",
            Self::CreatedAtAsc => "created_at asc",
            Self::CreatedAtDesc => "created_at desc",
            Self::UpdatedAtAsc => "updated_at asc",
            Self::UpdatedAtDesc => "updated_at desc",
            Self::ProcessedAtAsc => "processed_at asc",
            Self::ProcessedAtDesc => "processed_at desc",
        }
    }
}

macro_rules! display_as_wire_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_wire_value!(
    FinancialStatus,
    FulfillmentStatus,
    OrderStatus,
    ProductStatus,
    CollectionPublishedStatus,
    SortOrder,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn wire<T: Serialize>(value: T) -> String {
        serde_json::to_value(value)
            .unwrap()
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_serde_matches_as_str() {
        for status in [
            FinancialStatus::Authorized,
            FinancialStatus::PartiallyPaid,
            FinancialStatus::PartiallyRefunded,
            FinancialStatus::Unpaid,
        ] {
            assert_eq!(wire(status), status.as_str());
        }
        for status in [FulfillmentStatus::Shipped, FulfillmentStatus::Unfulfilled] {
            assert_eq!(wire(status), status.as_str());
        }
        for order in [
            SortOrder::IdAsc,
            SortOrder::CreatedAtDesc,
            SortOrder::ProcessedAtAsc,
        ] {
            assert_eq!(wire(order), order.as_str());
        }
        assert_eq!(wire(CollectionPublishedStatus::Unpublished), "unpublished");
        assert_eq!(wire(ProductStatus::Archived), "archived");
        assert_eq!(wire(OrderStatus::Cancelled), "cancelled");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(OrderStatus::default(), OrderStatus::Any);
        assert_eq!(SortOrder::default(), SortOrder::IdAsc);
    }

    #[test]
    fn test_display_uses_wire_value() {
        assert_eq!(FinancialStatus::PartiallyPaid.to_string(), "partially_paid");
        assert_eq!(SortOrder::ProcessedAtDesc.to_string(), "processed_at desc");
    }

    #[test]
    fn test_deserialize_from_wire_value() {
        let order: SortOrder = serde_json::from_str(r#""created_at asc""#).unwrap();
        assert_eq!(order, SortOrder::CreatedAtAsc);
        let status: FinancialStatus = serde_json::from_str(r#""partially_refunded""#).unwrap();
        assert_eq!(status, FinancialStatus::PartiallyRefunded);
    }
}

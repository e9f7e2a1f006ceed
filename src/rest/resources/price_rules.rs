//! Price rule and discount code parameters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::rest::query::ListQuery;

/// Parameters for listing price rules.
///
/// Price rules take no `order` or `fields` parameter.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct PriceRuleListParams {
    /// Show price rules created at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show price rules created at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Show price rules ending at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at_min: Option<DateTime<Utc>>,

    /// Show price rules ending at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at_max: Option<DateTime<Utc>>,

    /// Return only price rules after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Show price rules starting at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at_min: Option<DateTime<Utc>>,

    /// Show price rules starting at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at_max: Option<DateTime<Utc>>,

    /// Show price rules used exactly this many times.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times_used: Option<u64>,

    /// Show price rules last updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show price rules last updated at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Page size (defaults to the client's page limit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Cursor to resume from.
    #[serde(skip)]
    pub page_info: Option<String>,
}

impl ListQuery for PriceRuleListParams {
    const ITEMS_KEY: &'static str = "price_rules";

    fn path(&self) -> String {
        "price_rules.json".to_string()
    }

    fn page_info(&self) -> Option<&str> {
        self.page_info.as_deref()
    }
}

/// Parameters for listing the discount codes of one price rule.
///
/// The price rule id is part of the path, not the query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiscountCodeListParams {
    #[serde(skip)]
    price_rule_id: u64,

    /// Page size (defaults to the client's page limit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Cursor to resume from.
    #[serde(skip)]
    pub page_info: Option<String>,
}

impl DiscountCodeListParams {
    /// Creates parameters for the discount codes of `price_rule_id`.
    #[must_use]
    pub const fn new(price_rule_id: u64) -> Self {
        Self {
            price_rule_id,
            limit: None,
            page_info: None,
        }
    }

    /// Returns the price rule id.
    #[must_use]
    pub const fn price_rule_id(&self) -> u64 {
        self.price_rule_id
    }
}

impl ListQuery for DiscountCodeListParams {
    const ITEMS_KEY: &'static str = "discount_codes";

    fn path(&self) -> String {
        format!("price_rules/{}/discount_codes.json", self.price_rule_id)
    }

    fn page_info(&self) -> Option<&str> {
        self.page_info.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_rules_send_no_order() {
        let params = PriceRuleListParams {
            times_used: Some(3),
            ..Default::default()
        };
        let filters = params.filter_set(None).unwrap();
        assert_eq!(filters.get("times_used"), Some("3"));
        assert!(!filters.contains_key("order"));
        assert_eq!(filters.len(), 1);
    }

    #[test]
    fn test_cursor_keeps_limit_only() {
        let params = PriceRuleListParams {
            since_id: Some(100),
            limit: Some(50),
            ..Default::default()
        };
        let filters = params.filter_set(Some("PR2")).unwrap();
        assert_eq!(
            filters.iter().collect::<Vec<_>>(),
            vec![("page_info", "PR2"), ("limit", "50")]
        );
    }

    #[test]
    fn test_discount_code_path_embeds_price_rule() {
        let params = DiscountCodeListParams::new(507_328_175);
        assert_eq!(params.path(), "price_rules/507328175/discount_codes.json");
        assert_eq!(params.price_rule_id(), 507_328_175);
        assert!(params.filter_set(None).unwrap().is_empty());
    }
}

//! Resource-level client for the Shopify REST Admin API.
//!
//! [`RestClient`] pairs a [`ClientConfig`](crate::ClientConfig) with a
//! [`RequestDispatcher`](crate::clients::RequestDispatcher) and exposes one
//! method per resource operation:
//!
//! - `get_*` fetches a single page and returns a
//!   [`PageResult`](crate::rest::PageResult), so callers can paginate by hand
//! - `get_all_*` walks every page and returns the decoded items
//! - `count_*` returns a resource count
//!
//! Every request is paced according to the configured
//! [`AccountTier`](crate::AccountTier).
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_fetch::{AccessToken, ClientConfig, RestClient, ShopDomain};
//! use shopify_fetch::rest::resources::{FinancialStatus, OrderListParams};
//!
//! let config = ClientConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .build()
//!     .unwrap();
//! let client = RestClient::new(config)?;
//!
//! let params = OrderListParams {
//!     financial_status: Some(FinancialStatus::Paid),
//!     ..Default::default()
//! };
//! let orders: Vec<serde_json::Value> = client.get_all_orders(&params).await?;
//! ```

mod client;

pub use client::RestClient;

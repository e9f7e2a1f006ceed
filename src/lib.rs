//! # shopify-fetch
//!
//! Bulk retrieval from the Shopify REST Admin API: cursor pagination, tier
//! pacing, id-batched fetches and ShopifyQL analytics queries.
//!
//! ## Overview
//!
//! - [`ClientConfig`]: validated, immutable client settings
//! - [`RestClient`]: per-resource `get_*`, `get_all_*` and `count_*` methods
//! - [`rest::PaginationEngine`]: the traversal loop behind `get_all_*`
//! - [`clients::RequestDispatcher`]: the seam between the engine and
//!   transport, implemented by [`HttpClient`]
//! - [`clients::RateGate`]: per-tier pacing delays
//! - [`clients::analytics`]: one-shot ShopifyQL queries
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_fetch::{AccessToken, AccountTier, ClientConfig, RestClient, ShopDomain};
//!
//! let config = ClientConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .account_tier(AccountTier::Plus)
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(config).unwrap();
//! assert_eq!(client.engine().configured_page_limit(), 250);
//! ```
//!
//! ## Fetching Every Page
//!
//! ```rust,ignore
//! use shopify_fetch::rest::resources::{OrderListParams, OrderStatus};
//!
//! let params = OrderListParams {
//!     status: OrderStatus::Open,
//!     ..Default::default()
//! };
//! let orders: Vec<serde_json::Value> = client.get_all_orders(&params).await?;
//! ```
//!
//! A traversal either returns every item in cursor order or fails with a
//! [`FetchError`]; items gathered before a failure are dropped.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: clients are `Send + Sync` and keep no traversal state
//! - **Async-first**: designed for the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, AccountTier, AnalyticsToken, ApiVersion, ClientConfig, ClientConfigBuilder,
    HostUrl, ShopDomain,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::analytics::{AnalyticsError, AnalyticsQuery};
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, RateGate, RequestDispatcher,
    RestClient,
};
pub use rest::{FetchError, PageResult, PaginationEngine};

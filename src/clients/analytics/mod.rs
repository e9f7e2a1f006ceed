//! ShopifyQL analytics queries.
//!
//! Analytics queries are one-shot form POSTs to a separate host. They share
//! the [`RequestDispatcher`](crate::clients::RequestDispatcher) with the
//! Admin API but replace its default headers for the call and are never
//! paced or paginated.
//!
//! # Example
//!
//! ```rust,ignore
//! let data = client
//!     .run_analytics_query(["FROM sales SHOW total_sales SINCE -30d"], None)
//!     .await?;
//! ```

mod errors;
mod query;

pub use errors::AnalyticsError;
pub use query::{AnalyticsQuery, DEFAULT_ANALYTICS_HOST, DEFAULT_SOURCE};

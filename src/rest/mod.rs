//! Cursor pagination for the Shopify REST Admin API.
//!
//! # Overview
//!
//! - [`FilterSet`]: the ordered query for one page, built by [`FilterSet::assemble`]
//! - [`next_cursor`] / [`cursor_from_link`]: read the next `page_info` out of a `Link` header
//! - [`PageResult`]: one page's headers and decoded body
//! - [`ListQuery`] / [`CountQuery`]: tie parameter structs to their endpoints
//! - [`PaginationEngine`]: walks pages, batches id lists and runs counts
//! - [`FetchError`]: the error type for all of the above
//! - [`resources`]: per-resource parameter structs and enumerations
//!
//! # Cursor Precedence
//!
//! When a page is requested with a cursor, the platform rejects any filter
//! other than the cursor itself and the output-shaping parameters. The query
//! for such a page is therefore `page_info` first, then `fields` and `limit`
//! if set, and nothing else:
//!
//! ```rust
//! use shopify_fetch::rest::resources::{FinancialStatus, OrderListParams};
//! use shopify_fetch::rest::ListQuery;
//!
//! let params = OrderListParams {
//!     financial_status: Some(FinancialStatus::Paid),
//!     limit: Some(50),
//!     ..Default::default()
//! };
//!
//! let next = params.filter_set(Some("eyJsYXN0X2lkIjo0fQ")).unwrap();
//! assert_eq!(
//!     next.iter().collect::<Vec<_>>(),
//!     vec![("page_info", "eyJsYXN0X2lkIjo0fQ"), ("limit", "50")]
//! );
//! ```

mod cursor;
mod errors;
mod filter;
mod page;
mod pagination;
mod query;

pub mod resources;

pub use cursor::{cursor_from_link, next_cursor, LINK_HEADER};
pub use errors::FetchError;
pub use filter::{FilterSet, CURSOR_PARAM, OUTPUT_SHAPING_PARAMS};
pub use page::PageResult;
pub use pagination::PaginationEngine;
pub use query::{CountQuery, ListQuery};

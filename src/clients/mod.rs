//! Request dispatch for the Shopify Admin API.
//!
//! # Overview
//!
//! - [`RequestDispatcher`]: the one-call seam the pagination engine drives
//! - [`HttpClient`]: the reqwest-backed dispatcher
//! - [`HttpRequest`] / [`HttpResponse`]: what crosses that seam
//! - [`RateGate`]: the tier-to-pacing-delay table
//! - [`ErrorPolicy`]: which part of an error response becomes the message
//! - [`rest::RestClient`]: the resource-level client built on top
//! - [`analytics`]: ShopifyQL queries sent through the same dispatcher
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Pagination never
//! retries on its own; a failed page aborts the traversal.

pub mod analytics;
mod dispatcher;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod rate_gate;
pub mod rest;

pub use dispatcher::RequestDispatcher;
pub use errors::{
    ErrorMessageSource, ErrorPolicy, HttpError, HttpResponseError, InvalidHttpRequestError,
    MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{HeaderMode, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::{ApiCallLimit, HttpResponse};
pub use rate_gate::RateGate;

pub use rest::RestClient;

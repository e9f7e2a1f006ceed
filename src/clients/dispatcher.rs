//! The request-performing seam between the pagination engine and transport.

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Performs one HTTP call.
///
/// Implementations must:
///
/// - wait for `request.pacing` before sending
/// - keep no state between calls (in particular, no cursor)
/// - return response headers verbatim with lower-cased keys, each mapped to
///   the sequence of its values
/// - fail with [`HttpError::Response`] for non-2xx statuses, extracting the
///   message according to `request.error_policy`
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation; tests substitute an in-memory stub.
#[allow(async_fn_in_trait)]
pub trait RequestDispatcher: Send + Sync {
    /// Sends `request` and returns the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on validation, network or non-2xx failure.
    async fn perform(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

impl<D: RequestDispatcher> RequestDispatcher for &D {
    async fn perform(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).perform(request).await
    }
}

//! The pagination engine.
//!
//! [`PaginationEngine`] drives a [`RequestDispatcher`] through a cursor
//! traversal: build the page query, pace, dispatch, append the page's items,
//! extract the next cursor, and repeat until none is advertised. Pages are
//! awaited one at a time so items arrive strictly in cursor order.
//!
//! Two guards bound a traversal: an optional page ceiling, which fails with
//! [`FetchError::PageLimitExceeded`] instead of looping forever on a
//! misbehaving cursor, and an optional [`CancellationToken`] checked between
//! pages.

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::clients::{HttpMethod, HttpRequest, RateGate, RequestDispatcher};
use crate::config::{AccountTier, DEFAULT_MAX_PAGES, MAX_PAGE_LIMIT};
use crate::rest::errors::FetchError;
use crate::rest::filter::FilterSet;
use crate::rest::page::PageResult;
use crate::rest::query::{CountQuery, ListQuery};

/// Walks cursor-paginated endpoints through a dispatcher.
///
/// The engine owns no accumulated state between calls; every `fetch_*`
/// invocation has its own accumulator, so one engine can serve concurrent
/// traversals.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_fetch::AccountTier;
/// use shopify_fetch::rest::PaginationEngine;
/// use shopify_fetch::rest::resources::OrderListParams;
///
/// let engine = PaginationEngine::new(&http_client, AccountTier::Plus).max_pages(Some(100));
/// let orders: Vec<serde_json::Value> = engine.fetch_all(&OrderListParams::default()).await?;
/// ```
#[derive(Debug)]
pub struct PaginationEngine<'a, D> {
    dispatcher: &'a D,
    tier: AccountTier,
    page_limit: u32,
    max_pages: Option<u32>,
    cancellation: Option<CancellationToken>,
}

impl<'a, D: RequestDispatcher> PaginationEngine<'a, D> {
    /// Creates an engine pacing requests for `tier`.
    ///
    /// Defaults: page limit 250, page ceiling 10,000, no cancellation.
    #[must_use]
    pub const fn new(dispatcher: &'a D, tier: AccountTier) -> Self {
        Self {
            dispatcher,
            tier,
            page_limit: MAX_PAGE_LIMIT,
            max_pages: Some(DEFAULT_MAX_PAGES),
            cancellation: None,
        }
    }

    /// Sets the `limit` sent when the parameters leave it unset. Also the
    /// default batch size for id-batched fetches.
    #[must_use]
    pub const fn page_limit(mut self, limit: u32) -> Self {
        self.page_limit = limit;
        self
    }

    /// Sets the page ceiling. `None` removes it.
    #[must_use]
    pub const fn max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Sets a token checked between pages.
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Returns the configured page limit.
    #[must_use]
    pub const fn configured_page_limit(&self) -> u32 {
        self.page_limit
    }

    /// Fetches one page at `cursor`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the query cannot be built or the dispatch
    /// fails.
    pub async fn fetch_page<Q: ListQuery>(
        &self,
        query: &Q,
        cursor: Option<&str>,
    ) -> Result<PageResult, FetchError> {
        let mut filters = query.filter_set(cursor)?;
        filters.insert_if_absent("limit", self.page_limit.to_string());
        self.dispatch(query.path(), filters).await
    }

    /// Fetches every page, returning all items in cursor order.
    ///
    /// Traversal starts at the query's own `page_info`, if set, and stops
    /// when a page advertises no further cursor or carries no headers.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`] encountered; items already gathered
    /// are dropped.
    pub async fn fetch_all<Q, T>(&self, query: &Q) -> Result<Vec<T>, FetchError>
    where
        Q: ListQuery,
        T: DeserializeOwned,
    {
        let path = query.path();
        let mut items: Vec<T> = Vec::new();
        let mut cursor = query
            .page_info()
            .filter(|c| !c.is_empty())
            .map(ToString::to_string);
        let mut pages: u32 = 0;

        loop {
            self.check_cancelled(&path, pages)?;

            let page = self.fetch_page(query, cursor.as_deref()).await?;
            pages += 1;

            let batch: Vec<T> = page.items(Q::ITEMS_KEY)?;
            let appended = batch.len();
            items.extend(batch);

            cursor = page.next_cursor();
            tracing::debug!(
                path = %path,
                page = pages,
                appended,
                has_next = cursor.is_some(),
                "fetched page"
            );

            if cursor.is_none() {
                tracing::debug!(path = %path, pages, total = items.len(), "pagination finished");
                return Ok(items);
            }

            // The first page is always fetched; the ceiling only bounds cursor follows.
            if let Some(max_pages) = self.max_pages {
                if pages >= max_pages {
                    tracing::warn!(
                        path = %path,
                        max_pages,
                        "Pagination stopped: page ceiling reached with a cursor still advertised"
                    );
                    return Err(FetchError::PageLimitExceeded { path, max_pages });
                }
            }
        }
    }

    /// Fetches items keyed by an explicit id list, in fixed-size batches.
    ///
    /// `ids` is split into chunks of `batch_size` (the page limit when
    /// `None`) and every chunk is fetched once, in order, via `make_query`.
    /// No cursor is followed. An empty id list dispatches nothing.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidParams`] for a zero batch size, or the
    /// first failure of any batch.
    pub async fn fetch_batched<Q, T, F>(
        &self,
        ids: &[u64],
        batch_size: Option<usize>,
        make_query: F,
    ) -> Result<Vec<T>, FetchError>
    where
        Q: ListQuery,
        T: DeserializeOwned,
        F: Fn(&[u64]) -> Q,
    {
        let batch_size = match batch_size {
            Some(size) => size,
            None => usize::try_from(self.page_limit).unwrap_or(usize::MAX),
        };
        if batch_size == 0 {
            return Err(FetchError::InvalidParams {
                reason: "batch size must be at least 1".to_string(),
            });
        }

        let mut items: Vec<T> = Vec::new();
        let mut pages: u32 = 0;
        for chunk in ids.chunks(batch_size) {
            let query = make_query(chunk);
            self.check_cancelled(&query.path(), pages)?;

            let page = self.fetch_page(&query, None).await?;
            pages += 1;

            let batch: Vec<T> = page.items(Q::ITEMS_KEY)?;
            tracing::debug!(
                path = %query.path(),
                batch = pages,
                ids = chunk.len(),
                appended = batch.len(),
                "fetched batch"
            );
            items.extend(batch);
        }

        Ok(items)
    }

    /// Runs a count query.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingField`] if the response has no integer
    /// `count`, or any dispatch failure.
    pub async fn fetch_count<C: CountQuery>(&self, query: &C) -> Result<u64, FetchError> {
        let path = query.path();
        let page = self.dispatch(path.clone(), query.filter_set()?).await?;
        page.count()
            .ok_or(FetchError::MissingField { path, field: "count" })
    }

    async fn dispatch(&self, path: String, filters: FilterSet) -> Result<PageResult, FetchError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(filters)
            .pacing(RateGate::delay_for(self.tier))
            .build()?;

        let response = self.dispatcher.perform(request).await?;
        Ok(PageResult::from_response(response))
    }

    fn check_cancelled(&self, path: &str, pages: u32) -> Result<(), FetchError> {
        match &self.cancellation {
            Some(token) if token.is_cancelled() => {
                tracing::info!(path = %path, pages, "traversal cancelled");
                Err(FetchError::Cancelled {
                    path: path.to_string(),
                    pages,
                })
            }
            _ => Ok(()),
        }
    }
}

//! REST client implementation for the Shopify Admin API.

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::clients::{HttpClient, HttpError, RequestDispatcher};
use crate::config::ClientConfig;
use crate::rest::resources::{
    CollectListParams, CollectionProductListParams, CustomCollectionListParams,
    CustomerCountParams, CustomerListParams, DiscountCodeListParams, InventoryItemListParams,
    OrderCountParams, OrderListParams, PriceRuleListParams, ProductCountParams,
    ProductListParams, SmartCollectionListParams,
};
use crate::rest::{CountQuery, FetchError, ListQuery, PageResult, PaginationEngine};

/// Client for fetching Shopify REST Admin API resources.
///
/// `RestClient` holds no per-traversal state, so one client can run any
/// number of concurrent traversals.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync` whenever its dispatcher is.
#[derive(Debug, Clone)]
pub struct RestClient<D = HttpClient> {
    dispatcher: D,
    config: ClientConfig,
    cancellation: Option<CancellationToken>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient<HttpClient> {
    /// Creates a client backed by an [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        let dispatcher = HttpClient::new(&config)?;
        tracing::debug!(
            shop = config.shop().as_ref(),
            api_version = %config.api_version(),
            tier = %config.account_tier(),
            "created REST client"
        );
        Ok(Self::with_dispatcher(config, dispatcher))
    }
}

impl<D: RequestDispatcher> RestClient<D> {
    /// Creates a client that sends requests through `dispatcher`.
    #[must_use]
    pub const fn with_dispatcher(config: ClientConfig, dispatcher: D) -> Self {
        Self {
            dispatcher,
            config,
            cancellation: None,
        }
    }

    /// Sets a token that cancels traversals between pages.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Returns a pagination engine configured from this client.
    #[must_use]
    pub fn engine(&self) -> PaginationEngine<'_, D> {
        let engine = PaginationEngine::new(&self.dispatcher, self.config.account_tier())
            .page_limit(self.config.page_limit())
            .max_pages(self.config.max_pages());
        match &self.cancellation {
            Some(token) => engine.cancellation(token.clone()),
            None => engine,
        }
    }

    /// Fetches the page of `query` at its own `page_info`, or the first page.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn get_page<Q: ListQuery>(&self, query: &Q) -> Result<PageResult, FetchError> {
        self.engine().fetch_page(query, query.page_info()).await
    }

    /// Fetches every page of `query`.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`]; no partial results are returned.
    pub async fn get_all<Q, T>(&self, query: &Q) -> Result<Vec<T>, FetchError>
    where
        Q: ListQuery,
        T: DeserializeOwned,
    {
        self.engine().fetch_all(query).await
    }

    /// Runs a count query.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails or has no `count`.
    pub async fn count<C: CountQuery>(&self, query: &C) -> Result<u64, FetchError> {
        self.engine().fetch_count(query).await
    }

    /// Fetches one page of orders.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn get_orders(&self, params: &OrderListParams) -> Result<PageResult, FetchError> {
        self.get_page(params).await
    }

    /// Fetches all orders matching `params`.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`]; no partial results are returned.
    pub async fn get_all_orders<T: DeserializeOwned>(
        &self,
        params: &OrderListParams,
    ) -> Result<Vec<T>, FetchError> {
        self.get_all(params).await
    }

    /// Counts orders matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn count_orders(&self, params: &OrderCountParams) -> Result<u64, FetchError> {
        self.count(params).await
    }

    /// Fetches one page of customers.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn get_customers(
        &self,
        params: &CustomerListParams,
    ) -> Result<PageResult, FetchError> {
        self.get_page(params).await
    }

    /// Fetches all customers matching `params`.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`]; no partial results are returned.
    pub async fn get_all_customers<T: DeserializeOwned>(
        &self,
        params: &CustomerListParams,
    ) -> Result<Vec<T>, FetchError> {
        self.get_all(params).await
    }

    /// Counts customers matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn count_customers(&self, params: &CustomerCountParams) -> Result<u64, FetchError> {
        self.count(params).await
    }

    /// Fetches one page of products.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn get_products(&self, params: &ProductListParams) -> Result<PageResult, FetchError> {
        self.get_page(params).await
    }

    /// Fetches all products matching `params`.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`]; no partial results are returned.
    pub async fn get_all_products<T: DeserializeOwned>(
        &self,
        params: &ProductListParams,
    ) -> Result<Vec<T>, FetchError> {
        self.get_all(params).await
    }

    /// Counts products matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn count_products(&self, params: &ProductCountParams) -> Result<u64, FetchError> {
        self.count(params).await
    }

    /// Fetches one page of inventory items.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn get_inventory_items(
        &self,
        params: &InventoryItemListParams,
    ) -> Result<PageResult, FetchError> {
        self.get_page(params).await
    }

    /// Fetches the inventory items for `ids`, batched by the page limit.
    ///
    /// An empty id list returns an empty result without any request.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`]; no partial results are returned.
    pub async fn get_all_inventory_items<T: DeserializeOwned>(
        &self,
        ids: &[u64],
    ) -> Result<Vec<T>, FetchError> {
        self.engine()
            .fetch_batched(ids, None, |chunk| InventoryItemListParams::new(chunk))
            .await
    }

    /// Fetches one page of price rules.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn get_price_rules(
        &self,
        params: &PriceRuleListParams,
    ) -> Result<PageResult, FetchError> {
        self.get_page(params).await
    }

    /// Fetches all price rules matching `params`.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`]; no partial results are returned.
    pub async fn get_all_price_rules<T: DeserializeOwned>(
        &self,
        params: &PriceRuleListParams,
    ) -> Result<Vec<T>, FetchError> {
        self.get_all(params).await
    }

    /// Fetches one page of a price rule's discount codes.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn get_discount_codes(
        &self,
        params: &DiscountCodeListParams,
    ) -> Result<PageResult, FetchError> {
        self.get_page(params).await
    }

    /// Fetches all discount codes of a price rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`]; no partial results are returned.
    pub async fn get_all_discount_codes<T: DeserializeOwned>(
        &self,
        params: &DiscountCodeListParams,
    ) -> Result<Vec<T>, FetchError> {
        self.get_all(params).await
    }

    /// Fetches one page of custom collections.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn get_custom_collections(
        &self,
        params: &CustomCollectionListParams,
    ) -> Result<PageResult, FetchError> {
        self.get_page(params).await
    }

    /// Fetches all custom collections matching `params`.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`]; no partial results are returned.
    pub async fn get_all_custom_collections<T: DeserializeOwned>(
        &self,
        params: &CustomCollectionListParams,
    ) -> Result<Vec<T>, FetchError> {
        self.get_all(params).await
    }

    /// Fetches one page of smart collections.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn get_smart_collections(
        &self,
        params: &SmartCollectionListParams,
    ) -> Result<PageResult, FetchError> {
        self.get_page(params).await
    }

    /// Fetches all smart collections matching `params`.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`]; no partial results are returned.
    pub async fn get_all_smart_collections<T: DeserializeOwned>(
        &self,
        params: &SmartCollectionListParams,
    ) -> Result<Vec<T>, FetchError> {
        self.get_all(params).await
    }

    /// Fetches one page of a collection's products.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn get_collection_products(
        &self,
        params: &CollectionProductListParams,
    ) -> Result<PageResult, FetchError> {
        self.get_page(params).await
    }

    /// Fetches all products of a collection.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`]; no partial results are returned.
    pub async fn get_all_collection_products<T: DeserializeOwned>(
        &self,
        params: &CollectionProductListParams,
    ) -> Result<Vec<T>, FetchError> {
        self.get_all(params).await
    }

    /// Fetches one page of collects.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails.
    pub async fn get_collects(&self, params: &CollectListParams) -> Result<PageResult, FetchError> {
        self.get_page(params).await
    }

    /// Fetches all collects matching `params`.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`]; no partial results are returned.
    pub async fn get_all_collects<T: DeserializeOwned>(
        &self,
        params: &CollectListParams,
    ) -> Result<Vec<T>, FetchError> {
        self.get_all(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, AccountTier, ShopDomain};

    fn config(page_limit: u32) -> ClientConfig {
        ClientConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .account_tier(AccountTier::Advanced)
            .page_limit(page_limit)
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_builds_http_dispatcher_for_shop() {
        let client = RestClient::new(config(250)).unwrap();
        assert_eq!(
            client.dispatcher().base_uri(),
            "https://test-shop.myshopify.com"
        );
        assert_eq!(client.config().account_tier(), AccountTier::Advanced);
    }

    #[test]
    fn test_engine_uses_configured_page_limit() {
        let client = RestClient::new(config(100)).unwrap();
        assert_eq!(client.engine().configured_page_limit(), 100);
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}

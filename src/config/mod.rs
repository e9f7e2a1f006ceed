//! Client configuration.
//!
//! # Overview
//!
//! - [`ClientConfig`]: immutable settings shared by every request a client makes
//! - [`ClientConfigBuilder`]: fail-fast builder for [`ClientConfig`]
//! - [`AccessToken`], [`AnalyticsToken`], [`ShopDomain`], [`HostUrl`]: validated newtypes
//! - [`ApiVersion`]: the Admin API version
//! - [`AccountTier`]: the service class that decides request pacing
//!
//! # Example
//!
//! ```rust
//! use shopify_fetch::{AccessToken, AccountTier, ClientConfig, ShopDomain};
//!
//! let config = ClientConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .account_tier("plus".parse::<AccountTier>().unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.page_limit(), 250);
//! ```

mod newtypes;
mod tier;
mod version;

pub use newtypes::{AccessToken, AnalyticsToken, HostUrl, ShopDomain};
pub use tier::AccountTier;
pub use version::ApiVersion;

use crate::error::ConfigError;

/// The platform ceiling for a single page of results.
pub const MAX_PAGE_LIMIT: u32 = 250;

/// Default ceiling on the number of pages one traversal may fetch.
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

/// Configuration for a shop client.
///
/// `ClientConfig` is `Clone + Send + Sync` and immutable once built, so it can
/// be shared by any number of independent traversals.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    account_tier: AccountTier,
    analytics_token: Option<AnalyticsToken>,
    api_host: Option<HostUrl>,
    analytics_host: Option<HostUrl>,
    page_limit: u32,
    max_pages: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the Admin API access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the Admin API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the account tier.
    #[must_use]
    pub const fn account_tier(&self) -> AccountTier {
        self.account_tier
    }

    /// Returns the analytics token, if configured.
    #[must_use]
    pub const fn analytics_token(&self) -> Option<&AnalyticsToken> {
        self.analytics_token.as_ref()
    }

    /// Returns the Admin API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the analytics host override, if configured.
    #[must_use]
    pub const fn analytics_host(&self) -> Option<&HostUrl> {
        self.analytics_host.as_ref()
    }

    /// Returns the default page size used by list queries and id batching.
    #[must_use]
    pub const fn page_limit(&self) -> u32 {
        self.page_limit
    }

    /// Returns the maximum number of pages a single traversal may fetch.
    ///
    /// `None` means unbounded.
    #[must_use]
    pub const fn max_pages(&self) -> Option<u32> {
        self.max_pages
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for [`ClientConfig`].
///
/// `shop` and `access_token` are required.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest()`]
/// - `account_tier`: [`AccountTier::Standard`]
/// - `page_limit`: 250
/// - `max_pages`: `Some(10_000)`
/// - everything else: `None`
#[derive(Debug)]
pub struct ClientConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    account_tier: Option<AccountTier>,
    analytics_token: Option<AnalyticsToken>,
    api_host: Option<HostUrl>,
    analytics_host: Option<HostUrl>,
    page_limit: Option<u32>,
    max_pages: Option<u32>,
    unbounded_pages: bool,
    user_agent_prefix: Option<String>,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shop: None,
            access_token: None,
            api_version: None,
            account_tier: None,
            analytics_token: None,
            api_host: None,
            analytics_host: None,
            page_limit: None,
            max_pages: None,
            unbounded_pages: false,
            user_agent_prefix: None,
        }
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the Admin API access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the Admin API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the account tier.
    #[must_use]
    pub const fn account_tier(mut self, tier: AccountTier) -> Self {
        self.account_tier = Some(tier);
        self
    }

    /// Sets the token used by analytics queries.
    #[must_use]
    pub fn analytics_token(mut self, token: AnalyticsToken) -> Self {
        self.analytics_token = Some(token);
        self
    }

    /// Routes Admin API requests to `host` instead of the shop domain.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Routes analytics requests to `host` instead of the public endpoint.
    #[must_use]
    pub fn analytics_host(mut self, host: HostUrl) -> Self {
        self.analytics_host = Some(host);
        self
    }

    /// Sets the default page size (1..=250).
    #[must_use]
    pub const fn page_limit(mut self, limit: u32) -> Self {
        self.page_limit = Some(limit);
        self
    }

    /// Sets the maximum number of pages a single traversal may fetch.
    ///
    /// Must be at least 1; [`build`](Self::build) rejects 0.
    #[must_use]
    pub const fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self.unbounded_pages = false;
        self
    }

    /// Removes the page ceiling entirely.
    #[must_use]
    pub const fn unbounded_pages(mut self) -> Self {
        self.max_pages = None;
        self.unbounded_pages = true;
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `access_token` are not set, [`ConfigError::InvalidPageLimit`] if the
    /// page limit is outside `1..=250`, and [`ConfigError::InvalidMaxPages`]
    /// if the page ceiling is 0.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        let page_limit = self.page_limit.unwrap_or(MAX_PAGE_LIMIT);
        if !(1..=MAX_PAGE_LIMIT).contains(&page_limit) {
            return Err(ConfigError::InvalidPageLimit {
                limit: page_limit,
                max: MAX_PAGE_LIMIT,
            });
        }

        let max_pages = if self.unbounded_pages {
            None
        } else {
            let max_pages = self.max_pages.unwrap_or(DEFAULT_MAX_PAGES);
            if max_pages == 0 {
                return Err(ConfigError::InvalidMaxPages { max_pages });
            }
            Some(max_pages)
        };

        Ok(ClientConfig {
            shop,
            access_token,
            api_version: self.api_version.unwrap_or_default(),
            account_tier: self.account_tier.unwrap_or_default(),
            analytics_token: self.analytics_token,
            api_host: self.api_host,
            analytics_host: self.analytics_host,
            page_limit,
            max_pages,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

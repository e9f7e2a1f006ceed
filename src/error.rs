//! Configuration error types.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! client can never be built from invalid settings. In particular an unknown
//! account tier is rejected here, at construction time, and never surfaces
//! while requests are being paced.
//!
//! # Example
//!
//! ```rust
//! use shopify_fetch::{AccessToken, AccountTier, ConfigError};
//!
//! assert!(matches!(AccessToken::new(""), Err(ConfigError::EmptyAccessToken)));
//! assert!(matches!(
//!     "enterprise".parse::<AccountTier>(),
//!     Err(ConfigError::InvalidAccountTier { .. })
//! ));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Admin API access token.")]
    EmptyAccessToken,

    /// Analytics token cannot be empty.
    #[error("Analytics token cannot be empty.")]
    EmptyAnalyticsToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'YYYY-MM' (e.g., '2024-01'), 'unstable', or a version made of letters, digits, '-', '_' or '.'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Account tier is not one of the known service classes.
    #[error("Invalid account tier '{tier}'. Expected one of: 'standard', 'advanced', 'plus'.")]
    InvalidAccountTier {
        /// The tier string that was provided.
        tier: String,
    },

    /// Page size is outside the range the platform accepts.
    #[error("Invalid page limit {limit}. The page limit must be between 1 and {max}.")]
    InvalidPageLimit {
        /// The requested page size.
        limit: u32,
        /// The platform ceiling.
        max: u32,
    },

    /// Page ceiling is zero.
    #[error("Invalid page ceiling {max_pages}. The maximum number of pages must be at least 1; use unbounded_pages() to remove the ceiling.")]
    InvalidMaxPages {
        /// The requested ceiling.
        max_pages: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_error_message() {
        let message = ConfigError::EmptyAccessToken.to_string();
        assert!(message.contains("Access token cannot be empty"));
    }

    #[test]
    fn test_invalid_account_tier_error_message_lists_known_tiers() {
        let error = ConfigError::InvalidAccountTier {
            tier: "gold".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("gold"));
        assert!(message.contains("standard"));
        assert!(message.contains("advanced"));
        assert!(message.contains("plus"));
    }

    #[test]
    fn test_invalid_page_limit_error_message() {
        let error = ConfigError::InvalidPageLimit { limit: 0, max: 250 };
        assert_eq!(
            error.to_string(),
            "Invalid page limit 0. The page limit must be between 1 and 250."
        );
    }

    #[test]
    fn test_invalid_max_pages_error_message_points_at_unbounded_pages() {
        let message = ConfigError::InvalidMaxPages { max_pages: 0 }.to_string();
        assert!(message.contains("Invalid page ceiling 0"));
        assert!(message.contains("unbounded_pages()"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "shop" };
        let message = error.to_string();
        assert!(message.contains("shop"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}

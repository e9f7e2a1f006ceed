//! Account service tiers.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// The account-level service class governing the permitted request rate.
///
/// Set once when a client is configured; see
/// [`RateGate`](crate::clients::RateGate) for the pacing each tier receives.
///
/// # Example
///
/// ```rust
/// use shopify_fetch::AccountTier;
///
/// let tier: AccountTier = "advanced".parse().unwrap();
/// assert_eq!(tier, AccountTier::Advanced);
/// assert_eq!(tier.as_str(), "advanced");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AccountTier {
    /// Basic and standard plans.
    #[default]
    Standard,
    /// Advanced plan.
    Advanced,
    /// Shopify Plus.
    Plus,
}

impl AccountTier {
    /// All tiers, in ascending order of permitted request rate.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Advanced, Self::Plus];

    /// Returns the wire/config name of the tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Advanced => "advanced",
            Self::Plus => "plus",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AccountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountTier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == normalized)
            .ok_or_else(|| ConfigError::InvalidAccountTier {
                tier: s.to_string(),
            })
    }
}

impl Serialize for AccountTier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccountTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

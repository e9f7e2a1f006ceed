//! Admin API version selection.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Shopify Admin API version, used to build the `/admin/api/{version}` path.
///
/// Stable versions are released quarterly and named `YYYY-MM` where the month
/// is one of `01`, `04`, `07` or `10`. The rolling `unstable` version is also
/// accepted. Any other non-empty string that is safe in a URL path segment is
/// kept verbatim as [`ApiVersion::Custom`], so versions this crate does not
/// know yet can still be addressed.
///
/// # Example
///
/// ```rust
/// use shopify_fetch::ApiVersion;
///
/// let version: ApiVersion = "2024-10".parse().unwrap();
/// assert_eq!(version.to_string(), "2024-10");
/// assert!(version < ApiVersion::latest());
///
/// let custom: ApiVersion = "2024-05".parse().unwrap();
/// assert_eq!(custom, ApiVersion::Custom("2024-05".to_string()));
/// assert_eq!(custom.to_string(), "2024-05");
///
/// assert!("".parse::<ApiVersion>().is_err());
/// ```
///
/// Ordering puts stable releases first, then `unstable`, then custom versions
/// compared as strings.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApiVersion {
    /// A quarterly stable release.
    Stable {
        /// Release year.
        year: u16,
        /// Release month (1, 4, 7 or 10).
        month: u8,
    },
    /// The rolling development version. Sorts after every stable release.
    Unstable,
    /// A version string sent as-is, for versions newer than [`latest`](Self::latest)
    /// or otherwise unrecognized.
    Custom(String),
}

impl ApiVersion {
    const RELEASE_MONTHS: [u8; 4] = [1, 4, 7, 10];

    /// Returns the latest stable API version known to this crate.
    #[must_use]
    pub const fn latest() -> Self {
        Self::Stable {
            year: 2025,
            month: 10,
        }
    }

    /// Creates a stable version, validating the release month.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if `month` is not a
    /// quarterly release month or `year` is implausible.
    pub fn stable(year: u16, month: u8) -> Result<Self, ConfigError> {
        if !(2017..=9999).contains(&year) || !Self::RELEASE_MONTHS.contains(&month) {
            return Err(ConfigError::InvalidApiVersion {
                version: format!("{year:04}-{month:02}"),
            });
        }
        Ok(Self::Stable { year, month })
    }

    /// Returns `true` for quarterly releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Stable { .. })
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable { year, month } => write!(f, "{year:04}-{month:02}"),
            Self::Unstable => f.write_str("unstable"),
            Self::Custom(version) => f.write_str(version),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "unstable" {
            return Ok(Self::Unstable);
        }

        if let Some(stable) = Self::parse_stable(&s) {
            return Ok(stable);
        }

        // Empty and dot-only strings would change the request path.
        if s.chars().all(|c| c == '.') || !s.chars().all(Self::is_path_safe) {
            return Err(ConfigError::InvalidApiVersion { version: s });
        }
        Ok(Self::Custom(s))
    }
}

impl ApiVersion {
    /// Parses a quarterly `YYYY-MM` release.
    fn parse_stable(s: &str) -> Option<Self> {
        let (year, month) = s.split_once('-')?;
        if year.len() != 4 || month.len() != 2 {
            return None;
        }
        let year: u16 = year.parse().ok()?;
        let month: u8 = month.parse().ok()?;
        Self::stable(year, month).ok()
    }

    const fn is_path_safe(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        for raw in ["2023-01", "2024-04", "2025-10", "unstable"] {
            let version: ApiVersion = raw.parse().unwrap();
            assert_eq!(version.to_string(), raw);
        }
    }

    #[test]
    fn test_parse_is_case_and_whitespace_insensitive() {
        assert_eq!(" UNSTABLE ".parse::<ApiVersion>().unwrap(), ApiVersion::Unstable);
    }

    #[test]
    fn test_unknown_versions_round_trip_as_custom() {
        for raw in ["2024-05", "2024-13", "24-01", "2024_01", "latest"] {
            let version: ApiVersion = raw.parse().unwrap();
            assert_eq!(version, ApiVersion::Custom(raw.to_string()));
            assert_eq!(version.to_string(), raw);
            assert!(!version.is_stable());
        }
    }

    #[test]
    fn test_stable_constructor_still_requires_quarterly_months() {
        assert!(ApiVersion::stable(2024, 5).is_err());
        assert!(ApiVersion::stable(2016, 1).is_err());
    }

    #[test]
    fn test_rejects_empty_and_path_unsafe_versions() {
        for raw in ["", "   ", "2024/01", "2024 01", "2024-01?x=1", "unstable#1", ".."] {
            assert!(
                matches!(
                    raw.parse::<ApiVersion>(),
                    Err(ConfigError::InvalidApiVersion { .. })
                ),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_ordering_puts_unstable_last() {
        let old = ApiVersion::stable(2023, 1).unwrap();
        let new = ApiVersion::stable(2024, 10).unwrap();
        assert!(old < new);
        assert!(new < ApiVersion::Unstable);
        assert!(ApiVersion::latest() < ApiVersion::Unstable);
    }

    #[test]
    fn test_ordering_puts_custom_after_unstable() {
        let a = ApiVersion::Custom("2026-01".to_string());
        let b = ApiVersion::Custom("2026-04".to_string());
        assert!(ApiVersion::Unstable < a);
        assert!(ApiVersion::latest() < a);
        assert!(a < b);
    }

    #[test]
    fn test_default_is_latest_stable() {
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
        assert!(ApiVersion::latest().is_stable());
        assert!(!ApiVersion::Unstable.is_stable());
    }
}

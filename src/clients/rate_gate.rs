//! Tier-based request pacing.

use std::time::Duration;

use crate::config::AccountTier;

/// Maps an [`AccountTier`] to the fixed delay applied before every dispatch.
///
/// The delay is a constant pacing interval, not an adaptive backoff: it is
/// applied unconditionally, once per request. The table is read-only and
/// safe to consult from any number of concurrent traversals.
///
/// | tier     | delay    |
/// |----------|----------|
/// | standard | 500 ms   |
/// | advanced | 250 ms   |
/// | plus     | 50 ms    |
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use shopify_fetch::AccountTier;
/// use shopify_fetch::clients::RateGate;
///
/// assert_eq!(RateGate::delay_for(AccountTier::Plus), Duration::from_millis(50));
/// assert_eq!(RateGate::micros_for(AccountTier::Standard), 500_000);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RateGate;

impl RateGate {
    // Indexed by `AccountTier::index()`.
    const DELAYS_MICROS: [u64; 3] = [500_000, 250_000, 50_000];

    /// Returns the pacing delay for `tier`, in microseconds.
    #[must_use]
    pub const fn micros_for(tier: AccountTier) -> u64 {
        Self::DELAYS_MICROS[tier.index()]
    }

    /// Returns the pacing delay for `tier`.
    #[must_use]
    pub const fn delay_for(tier: AccountTier) -> Duration {
        Duration::from_micros(Self::micros_for(tier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_table() {
        assert_eq!(RateGate::micros_for(AccountTier::Standard), 500_000);
        assert_eq!(RateGate::micros_for(AccountTier::Advanced), 250_000);
        assert_eq!(RateGate::micros_for(AccountTier::Plus), 50_000);
    }

    #[test]
    fn test_delay_is_total_over_tiers() {
        for tier in AccountTier::ALL {
            assert!(RateGate::delay_for(tier) > Duration::ZERO);
        }
    }

    #[test]
    fn test_higher_tiers_pace_faster() {
        let delays: Vec<_> = AccountTier::ALL
            .into_iter()
            .map(RateGate::delay_for)
            .collect();
        assert!(delays.windows(2).all(|pair| pair[0] > pair[1]));
    }
}

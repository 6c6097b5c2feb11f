//! Environment-sourced lens configuration.

use tracing::warn;

use crate::domain::Decimals;
use crate::positions::{OwnerPolicy, TickRangePolicy};

/// Environment variable holding the chain's native-currency decimals.
const NATIVE_DECIMALS_VAR: &str = "NATIVE_CURRENCY_DECIMALS";

/// Runtime configuration for the lens.
///
/// Owned by the application composition root and passed to the
/// normalizer and aggregator. [`from_env`](Self::from_env) reads the
/// native-currency decimals from the environment; invalid or absent
/// values fall back to the default of 18.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LensConfig {
    /// Decimals of the chain's native currency, used as the fallback for
    /// wrapped-native token records that omit the decimals field.
    pub native_currency_decimals: Decimals,
    /// How the aggregator treats events without an owner.
    pub owner_policy: OwnerPolicy,
    /// How the aggregator treats inverted tick ranges.
    pub tick_range_policy: TickRangePolicy,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            native_currency_decimals: Decimals::STANDARD,
            owner_policy: OwnerPolicy::Drop,
            tick_range_policy: TickRangePolicy::Normalize,
        }
    }
}

impl LensConfig {
    /// Builds a configuration from the process environment.
    ///
    /// Reads `NATIVE_CURRENCY_DECIMALS` as an integer; unset, unparsable,
    /// or out-of-range values fall back to 18 with a warning. Policies
    /// take their defaults (drop ownerless events, normalize inverted
    /// ranges).
    #[must_use]
    pub fn from_env() -> Self {
        let native_currency_decimals = match std::env::var(NATIVE_DECIMALS_VAR) {
            Ok(raw) => match raw.trim().parse::<u8>().ok().and_then(|v| Decimals::new(v).ok()) {
                Some(d) => d,
                None => {
                    warn!(
                        value = %raw,
                        "unusable {NATIVE_DECIMALS_VAR}, falling back to 18"
                    );
                    Decimals::STANDARD
                }
            },
            Err(_) => Decimals::STANDARD,
        };
        Self {
            native_currency_decimals,
            ..Self::default()
        }
    }
}

//! Pool entity aggregating price, liquidity, and trailing metrics.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Address, FeeTier, Token};

/// A concentrated-liquidity pool as presented to the UI.
///
/// Uniquely identified by its contract [`Address`]; aggregates all
/// liquidity across all tick ranges for one token pair and fee tier.
/// By convention `token0.address < token1.address`, and `current_price`
/// is expressed as token1 per token0, decimal-adjusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    /// Pool contract address; the pool's identity.
    pub address: Address,
    /// First token of the pair (lower address).
    pub token0: Token,
    /// Second token of the pair (higher address).
    pub token1: Token,
    /// Fee tier in basis points.
    pub fee_tier: FeeTier,
    /// Total value locked, USD.
    pub tvl_usd: f64,
    /// Trailing 24-hour volume, USD.
    pub volume_24h_usd: f64,
    /// Trailing 7-day volume, USD.
    pub volume_7d_usd: f64,
    /// Trailing 30-day volume, USD.
    pub volume_30d_usd: f64,
    /// Annualized fee yield estimate, percent.
    pub apr_percent: f64,
    /// Current pool price: token1 per token0, decimal-adjusted.
    pub current_price: f64,
    /// Pool creation time, unix seconds.
    pub created_at: u64,
}

impl Pool {
    /// Returns `true` if the given token address is one side of this pair.
    #[must_use]
    pub fn contains_token(&self, address: &Address) -> bool {
        self.token0.address == *address || self.token1.address == *address
    }

    /// Returns the current price from the perspective of the given base
    /// token: unchanged when `base` is token0, inverted when it is token1,
    /// `None` when the token is not in the pair or the price degenerates.
    #[must_use]
    pub fn price_for_base(&self, base: &Address) -> Option<f64> {
        if self.token0.address == *base {
            Some(self.current_price)
        } else if self.token1.address == *base {
            let inverted = 1.0 / self.current_price;
            inverted.is_finite().then_some(inverted)
        } else {
            None
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {} ({})",
            self.token0.symbol, self.token1.symbol, self.fee_tier, self.address
        )
    }
}

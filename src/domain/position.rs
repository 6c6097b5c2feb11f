//! Reconstructed concentrated-liquidity position.

use core::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::{Address, FeeTier, PriceBound, Token};
use crate::error::LensError;

/// A liquidity provider's position over a tick range in one pool,
/// reconstructed from the Mint/Burn/Collect event stream.
///
/// Positions are derived, not stored: `liquidity` is the net of all mints
/// minus all burns sharing the same `(owner, pool, tick_lower, tick_upper)`
/// key, and only strictly positive nets are ever materialized. The
/// synthetic `token_id` is built from the same key components, all address
/// parts lowercased.
///
/// `uncollected_fees_usd` is always zero: computing it would require
/// fee-growth-accumulator tracking, which this layer does not implement.
/// This is a known simplification, not a bug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Synthetic key: `"{owner}-{pool}-{tick_lower}-{tick_upper}"`.
    pub token_id: String,
    /// Position owner (lowercase-normalized).
    pub owner: Address,
    /// Pool the position belongs to.
    pub pool_address: Address,
    /// First token of the pair.
    pub token0: Token,
    /// Second token of the pair.
    pub token1: Token,
    /// Pool fee tier.
    pub fee_tier: FeeTier,
    /// Net liquidity, arbitrary precision. Always strictly positive.
    #[serde(with = "biguint_decimal_string")]
    pub liquidity: BigUint,
    /// Lower tick bound (raw index; `tick_lower < tick_upper`).
    pub tick_lower: i32,
    /// Upper tick bound (raw index).
    pub tick_upper: i32,
    /// Price at the lower tick, decimal-adjusted.
    pub price_lower: PriceBound,
    /// Price at the upper tick, decimal-adjusted.
    pub price_upper: PriceBound,
    /// Current pool price (token1 per token0).
    pub current_price: f64,
    /// USD estimate of the net deposited value.
    pub value_usd: f64,
    /// Accrued-but-unwithdrawn fees. Always 0 (see type docs).
    pub uncollected_fees_usd: f64,
    /// USD value of fees withdrawn via Collect events.
    pub fees_earned_usd: f64,
    /// Minimum timestamp across the position's constituent events.
    pub created_at: u64,
}

impl Position {
    /// Builds the synthetic position key from its components.
    ///
    /// Address components are already lowercased by [`Address`], so two
    /// event sets differing only in address case produce the same id.
    #[must_use]
    pub fn token_id_for(owner: &Address, pool: &Address, tick_lower: i32, tick_upper: i32) -> String {
        format!("{owner}-{pool}-{tick_lower}-{tick_upper}")
    }

    /// Validates that the tick range is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`LensError::InvalidTickRange`] if `tick_lower >= tick_upper`.
    pub const fn validate_range(tick_lower: i32, tick_upper: i32) -> crate::error::Result<()> {
        if tick_lower >= tick_upper {
            return Err(LensError::InvalidTickRange(
                "lower tick must be less than upper tick",
            ));
        }
        Ok(())
    }

    /// Returns `true` if the current pool price sits inside the position's
    /// price range, i.e. the position is earning fees.
    ///
    /// An unbounded bound never excludes the price on its side.
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        let above_lower = match self.price_lower {
            PriceBound::Finite(lo) => self.current_price >= lo,
            PriceBound::Unbounded => true,
        };
        let below_upper = match self.price_upper {
            PriceBound::Finite(hi) => self.current_price < hi,
            PriceBound::Unbounded => true,
        };
        above_lower && below_upper
    }

    /// Returns the width of the tick range (`upper - lower`).
    #[must_use]
    pub const fn tick_width(&self) -> i32 {
        self.tick_upper - self.tick_lower
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position({}, liquidity={}, [{}, {}))",
            self.token_id, self.liquidity, self.price_lower, self.price_upper
        )
    }
}

/// Serializes `BigUint` liquidity as a decimal string, the form the
/// presentation layer renders and the indexer emits.
mod biguint_decimal_string {
    use core::str::FromStr;

    use num_bigint::BigUint;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let raw = String::deserialize(deserializer)?;
        BigUint::from_str(&raw).map_err(D::Error::custom)
    }
}

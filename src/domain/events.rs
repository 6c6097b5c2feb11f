//! Immutable liquidity event records.

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::Address;

/// The protocol event families that affect a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Liquidity added to a tick range.
    Mint,
    /// Liquidity removed from a tick range.
    Burn,
    /// Accrued fees withdrawn from a tick range.
    Collect,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mint => "Mint",
            Self::Burn => "Burn",
            Self::Collect => "Collect",
        };
        f.write_str(name)
    }
}

/// One Mint, Burn, or Collect fact from the indexer.
///
/// These are append-only inputs; the aggregator never mutates them. The
/// tick fields are raw `i32` because indexer data is untrusted at this
/// layer — range policy is applied during aggregation. `owner` is optional
/// because the protocol does not guarantee it on Burn/Collect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityEvent {
    /// Which event family this record belongs to.
    pub kind: EventKind,
    /// Pool the event occurred in.
    pub pool: Address,
    /// Event owner; may be absent on Burn/Collect.
    pub owner: Option<Address>,
    /// Lower tick of the affected range (unvalidated).
    pub tick_lower: i32,
    /// Upper tick of the affected range (unvalidated).
    pub tick_upper: i32,
    /// Liquidity delta for Mint/Burn; zero for Collect.
    pub liquidity: BigUint,
    /// Token0 amount moved, human units.
    pub amount0: f64,
    /// Token1 amount moved, human units.
    pub amount1: f64,
    /// Event time, unix seconds.
    pub timestamp: u64,
}

impl LiquidityEvent {
    /// Convenience constructor for a Mint event.
    #[must_use]
    pub fn mint(
        pool: Address,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: BigUint,
        amount0: f64,
        amount1: f64,
        timestamp: u64,
    ) -> Self {
        Self {
            kind: EventKind::Mint,
            pool,
            owner: Some(owner),
            tick_lower,
            tick_upper,
            liquidity,
            amount0,
            amount1,
            timestamp,
        }
    }

    /// Convenience constructor for a Burn event.
    #[must_use]
    pub fn burn(
        pool: Address,
        owner: Option<Address>,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: BigUint,
        amount0: f64,
        amount1: f64,
        timestamp: u64,
    ) -> Self {
        Self {
            kind: EventKind::Burn,
            pool,
            owner,
            tick_lower,
            tick_upper,
            liquidity,
            amount0,
            amount1,
            timestamp,
        }
    }

    /// Convenience constructor for a Collect event (no liquidity delta).
    #[must_use]
    pub fn collect(
        pool: Address,
        owner: Option<Address>,
        tick_lower: i32,
        tick_upper: i32,
        amount0: f64,
        amount1: f64,
        timestamp: u64,
    ) -> Self {
        Self {
            kind: EventKind::Collect,
            pool,
            owner,
            tick_lower,
            tick_upper,
            liquidity: BigUint::zero(),
            amount0,
            amount1,
            timestamp,
        }
    }
}

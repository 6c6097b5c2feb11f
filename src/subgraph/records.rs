//! Wire-format records as returned by the GraphQL indexer.
//!
//! Every numeric field is an `Option<String>` (or optional integer for
//! bucket timestamps) because the indexer serializes big numbers as
//! decimal strings and omits fields freely. Nothing here is validated;
//! the normalizer applies the default-to-zero policy.

use serde::Deserialize;

/// A token as the indexer returns it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenRecord {
    /// Contract address, arbitrary casing.
    pub id: Option<String>,
    /// Ticker symbol.
    pub symbol: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Decimal places as a decimal string.
    pub decimals: Option<String>,
}

/// One daily aggregate bucket.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolDayRecord {
    /// Bucket start (midnight UTC), unix seconds.
    pub date: Option<u64>,
    #[serde(rename = "volumeUSD")]
    pub volume_usd: Option<String>,
    #[serde(rename = "feesUSD")]
    pub fees_usd: Option<String>,
}

/// One hourly aggregate bucket.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolHourRecord {
    /// Bucket start, unix seconds.
    pub period_start_unix: Option<u64>,
    #[serde(rename = "volumeUSD")]
    pub volume_usd: Option<String>,
}

/// A pool with its embedded tokens and aggregate buckets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolRecord {
    /// Pool contract address, arbitrary casing.
    pub id: Option<String>,
    /// Fee tier in basis points, as a decimal string.
    pub fee_tier: Option<String>,
    /// First token of the pair.
    pub token0: Option<TokenRecord>,
    /// Second token of the pair.
    pub token1: Option<TokenRecord>,
    /// Precomputed decimal price (token1 per token0), when present.
    #[serde(rename = "token0Price")]
    pub token0_price: Option<String>,
    /// Raw sqrtPriceX96 as a decimal string; fallback price source.
    pub sqrt_price: Option<String>,
    #[serde(rename = "totalValueLockedUSD")]
    pub total_value_locked_usd: Option<String>,
    /// Creation time as a decimal string of unix seconds.
    pub created_at_timestamp: Option<String>,
    /// Daily aggregates, newest first.
    pub pool_day_data: Vec<PoolDayRecord>,
    /// Hourly aggregates, newest first.
    pub pool_hour_data: Vec<PoolHourRecord>,
}

/// Reference to a pool from an event record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PoolRefRecord {
    /// Pool contract address, arbitrary casing.
    pub id: Option<String>,
}

/// A Mint, Burn, or Collect event as the indexer returns it.
///
/// The three event entities share this shape; `owner` may be null on
/// Burn/Collect, and `amount` (the liquidity delta) is absent on Collect.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventRecord {
    /// Pool the event occurred in.
    pub pool: Option<PoolRefRecord>,
    /// Event owner, arbitrary casing; may be null.
    pub owner: Option<String>,
    /// Lower tick as a decimal string.
    pub tick_lower: Option<String>,
    /// Upper tick as a decimal string.
    pub tick_upper: Option<String>,
    /// Liquidity delta as a decimal string (Mint/Burn only).
    pub amount: Option<String>,
    /// Token0 amount moved, human units, as a decimal string.
    pub amount0: Option<String>,
    /// Token1 amount moved, human units, as a decimal string.
    pub amount1: Option<String>,
    /// Event time as a decimal string of unix seconds.
    pub timestamp: Option<String>,
}

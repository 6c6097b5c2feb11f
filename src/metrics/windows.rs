//! Rolling volume windows and fee APR over time-bucketed aggregates.
//!
//! The indexer pre-buckets swap volume into hourly and daily records;
//! these helpers sum the buckets that fall inside a trailing window
//! anchored at an explicit `now` (callers pass the clock in, keeping the
//! calculations pure and reproducible).

use serde::{Deserialize, Serialize};

/// Seconds in one hour.
const HOUR_SECS: u64 = 3_600;

/// Seconds in one day.
const DAY_SECS: u64 = 86_400;

/// One hourly volume bucket from the indexer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourBucket {
    /// Bucket start, unix seconds.
    pub period_start: u64,
    /// Swap volume in the bucket, USD.
    pub volume_usd: f64,
}

/// One daily volume/fee bucket from the indexer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    /// Bucket start (midnight UTC), unix seconds.
    pub date: u64,
    /// Swap volume in the bucket, USD.
    pub volume_usd: f64,
    /// Fees collected in the bucket, USD.
    pub fees_usd: f64,
}

/// Sums hourly volume for buckets starting within the last 24 hours.
#[must_use]
pub fn volume_24h(hours: &[HourBucket], now: u64) -> f64 {
    let cutoff = now.saturating_sub(24 * HOUR_SECS);
    hours
        .iter()
        .filter(|b| b.period_start > cutoff)
        .map(|b| b.volume_usd)
        .sum()
}

/// Sums daily volume for buckets starting within the last `days` days.
fn volume_days(days_data: &[DayBucket], now: u64, days: u64) -> f64 {
    let cutoff = now.saturating_sub(days * DAY_SECS);
    days_data
        .iter()
        .filter(|b| b.date > cutoff)
        .map(|b| b.volume_usd)
        .sum()
}

/// Sums daily volume for buckets within the last 7 days.
#[must_use]
pub fn volume_7d(days_data: &[DayBucket], now: u64) -> f64 {
    volume_days(days_data, now, 7)
}

/// Sums daily volume for buckets within the last 30 days.
#[must_use]
pub fn volume_30d(days_data: &[DayBucket], now: u64) -> f64 {
    volume_days(days_data, now, 30)
}

/// Sums daily fees for buckets within the last `days` days.
#[must_use]
pub fn fees_trailing(days_data: &[DayBucket], now: u64, days: u64) -> f64 {
    let cutoff = now.saturating_sub(days * DAY_SECS);
    days_data
        .iter()
        .filter(|b| b.date > cutoff)
        .map(|b| b.fees_usd)
        .sum()
}

/// Annualizes trailing fee income relative to TVL:
/// `(fees / days * 365) / tvl * 100`, in percent.
///
/// Returns `0.0` when `tvl_usd` or `days` is zero — a pool with no
/// liquidity has no meaningful yield, and `Infinity` must never reach
/// the presentation layer.
///
/// # Examples
///
/// ```
/// use clmm_lens::metrics::fee_apr;
///
/// let apr = fee_apr(700.0, 7, 10_000.0);
/// assert!((apr - 365.0).abs() < 1e-9);
/// assert_eq!(fee_apr(700.0, 7, 0.0), 0.0);
/// ```
#[must_use]
pub fn fee_apr(fees_usd: f64, days: u64, tvl_usd: f64) -> f64 {
    if tvl_usd <= 0.0 || days == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let daily = fees_usd / days as f64;
    daily * 365.0 / tvl_usd * 100.0
}

//! Derived pool metrics and the auxiliary quote cache.
//!
//! Rolling volume windows and fee APR are pure rollups over the
//! indexer's pre-bucketed hour/day aggregates; the [`QuoteCache`] is an
//! optimization for the swap-quoting path and carries no position/pool
//! state.

mod quote_cache;
mod windows;

pub use quote_cache::{QuoteCache, QuoteKey};
pub use windows::{
    fee_apr, fees_trailing, volume_24h, volume_30d, volume_7d, DayBucket, HourBucket,
};

//! Position reconstruction from the liquidity event stream.
//!
//! The most involved algorithm in the crate: folding a flat list of
//! Mint/Burn/Collect records into the netted set of live
//! [`Position`](crate::domain::Position) entities. See
//! [`PositionAggregator`].

mod aggregator;

#[cfg(test)]
mod proptest_properties;

pub use aggregator::{OwnerPolicy, PositionAggregator, TickRangePolicy};

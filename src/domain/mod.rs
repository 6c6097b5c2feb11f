//! Fundamental domain types of the lens.
//!
//! This module contains the value types and entities that model the
//! read-side of a concentrated-liquidity AMM: addresses, tokens, pools,
//! ticks, reconstructed positions, and the immutable event records they
//! are built from. Value types use newtypes with validated constructors;
//! entities are plain data consumed by a presentation layer.

mod address;
mod decimals;
mod events;
mod fee_tier;
mod pool;
mod position;
mod price_bound;
mod tick;
mod token;

pub use address::Address;
pub use decimals::Decimals;
pub use events::{EventKind, LiquidityEvent};
pub use fee_tier::FeeTier;
pub use pool::Pool;
pub use position::Position;
pub use price_bound::PriceBound;
pub use tick::Tick;
pub use token::Token;

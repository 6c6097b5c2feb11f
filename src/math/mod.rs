//! Fixed-point price math for concentrated-liquidity pools.
//!
//! Deterministic, side-effect-free conversions between the on-chain price
//! encodings (tick index, `sqrtPriceX96`) and human-decimal prices. The
//! conversion rules and sentinel policy are documented on the individual
//! functions.

mod price;

#[cfg(test)]
mod proptest_properties;

pub use price::{invert, price_at_tick, price_from_sqrt_x96, sqrt_price_x96_at_tick};

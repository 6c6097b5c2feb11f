//! Property-based tests for the price conversion functions.
//!
//! Covers three properties:
//!
//! 1. **Monotonicity** — `price_at_tick` increases with the tick over the
//!    finite region.
//! 2. **Conversion agreement** — tick-derived and sqrt-derived prices
//!    match within floating tolerance.
//! 3. **Inversion involution** — inverting twice returns the original
//!    finite price.

use proptest::prelude::*;

use super::{invert, price_at_tick, price_from_sqrt_x96, sqrt_price_x96_at_tick};
use crate::domain::Decimals;

fn dec18() -> Decimals {
    Decimals::STANDARD
}

proptest! {
    #[test]
    fn price_is_monotonic_in_tick(a in -400_000i32..400_000, b in -400_000i32..400_000) {
        prop_assume!(a < b);
        let pa = price_at_tick(a, dec18(), dec18()).as_finite();
        let pb = price_at_tick(b, dec18(), dec18()).as_finite();
        if let (Some(pa), Some(pb)) = (pa, pb) {
            prop_assert!(pa < pb, "tick {a} price {pa} !< tick {b} price {pb}");
        }
    }

    #[test]
    fn tick_and_sqrt_paths_agree(tick in -100_000i32..100_000) {
        let from_tick = price_at_tick(tick, dec18(), dec18()).as_finite();
        prop_assume!(from_tick.is_some());
        let Some(from_tick) = from_tick else { unreachable!() };

        let encoded = sqrt_price_x96_at_tick(tick);
        let from_sqrt = price_from_sqrt_x96(&encoded, dec18(), dec18());
        let rel = (from_tick - from_sqrt).abs() / from_tick;
        prop_assert!(rel < 1e-6, "tick {tick}: {from_tick} vs {from_sqrt}");
    }

    #[test]
    fn inversion_is_involutive(price in 1e-12f64..1e12) {
        let round_trip = invert(invert(price));
        let rel = (round_trip - price).abs() / price;
        prop_assert!(rel < 1e-12);
    }
}

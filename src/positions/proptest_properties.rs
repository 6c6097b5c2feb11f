//! Property-based tests for the position aggregator.
//!
//! Covers four properties:
//!
//! 1. **Idempotence** — aggregating the same event list twice yields
//!    identical output.
//! 2. **Order insensitivity** — shuffling the event list does not change
//!    the netted result.
//! 3. **Mint-only sums** — with no burns or collects, net liquidity and
//!    deposits equal the plain sums of the mints.
//! 4. **Closure** — whenever burned liquidity covers minted liquidity,
//!    the position is absent.

use num_bigint::BigUint;
use proptest::prelude::*;

use super::PositionAggregator;
use crate::domain::{Address, Decimals, FeeTier, LiquidityEvent, Pool, Token};

fn pool() -> Pool {
    Pool {
        address: Address::new("0xppp"),
        token0: Token::new(Address::new("0x111"), "A", "Token A", Decimals::STANDARD),
        token1: Token::new(Address::new("0x222"), "B", "Token B", Decimals::STANDARD),
        fee_tier: FeeTier::TIER_0_30_PERCENT,
        tvl_usd: 0.0,
        volume_24h_usd: 0.0,
        volume_7d_usd: 0.0,
        volume_30d_usd: 0.0,
        apr_percent: 0.0,
        current_price: 1.5,
        created_at: 0,
    }
}

/// Strategy: a mint event for one of three owners over one of two ranges.
fn arb_mint() -> impl Strategy<Value = LiquidityEvent> {
    (0u8..3, prop::bool::ANY, 1u64..1_000_000, 0u64..1_000_000).prop_map(
        |(owner, wide, liquidity, ts)| {
            let (lo, hi) = if wide { (-500, 500) } else { (-100, 100) };
            LiquidityEvent::mint(
                Address::new("0xppp"),
                Address::new(format!("0xowner{owner}")),
                lo,
                hi,
                BigUint::from(liquidity),
                1.0,
                1.0,
                ts,
            )
        },
    )
}

proptest! {
    #[test]
    fn aggregation_is_idempotent(events in prop::collection::vec(arb_mint(), 0..40)) {
        let agg = PositionAggregator::default();
        let first = agg.aggregate(&events, &pool());
        let second = agg.aggregate(&events, &pool());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn aggregation_is_order_insensitive(
        events in prop::collection::vec(arb_mint(), 0..40),
        seed in prop::num::u64::ANY,
    ) {
        let agg = PositionAggregator::default();
        let forward = agg.aggregate(&events, &pool());

        // Deterministic shuffle driven by the seed.
        let mut shuffled = events;
        let len = shuffled.len();
        if len > 1 {
            let mut state = seed | 1;
            for i in (1..len).rev() {
                state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                #[allow(clippy::cast_possible_truncation)]
                let j = (state % (i as u64 + 1)) as usize;
                shuffled.swap(i, j);
            }
        }
        let reordered = agg.aggregate(&shuffled, &pool());
        prop_assert_eq!(forward, reordered);
    }

    #[test]
    fn mint_only_liquidity_is_plain_sum(events in prop::collection::vec(arb_mint(), 1..40)) {
        let positions = PositionAggregator::default().aggregate(&events, &pool());

        let total_minted: BigUint = events.iter().map(|e| e.liquidity.clone()).sum();
        let total_materialized: BigUint = positions.iter().map(|p| p.liquidity.clone()).sum();
        prop_assert_eq!(total_minted, total_materialized);

        for pos in &positions {
            let expected_min = events
                .iter()
                .filter(|e| {
                    e.owner.as_ref() == Some(&pos.owner)
                        && e.tick_lower == pos.tick_lower
                        && e.tick_upper == pos.tick_upper
                })
                .map(|e| e.timestamp)
                .min();
            prop_assert_eq!(expected_min, Some(pos.created_at));
        }
    }

    #[test]
    fn burning_everything_closes_the_position(
        liquidity in 1u64..1_000_000,
        extra in 0u64..1_000,
        ts in 0u64..1_000_000,
    ) {
        let mint = LiquidityEvent::mint(
            Address::new("0xppp"),
            Address::new("0xaaa"),
            -100,
            100,
            BigUint::from(liquidity),
            1.0,
            1.0,
            ts,
        );
        let burn = LiquidityEvent::burn(
            Address::new("0xppp"),
            Some(Address::new("0xaaa")),
            -100,
            100,
            BigUint::from(liquidity) + extra,
            1.0,
            1.0,
            ts + 1,
        );
        let positions = PositionAggregator::default().aggregate(&[mint, burn], &pool());
        prop_assert!(positions.is_empty());
    }
}

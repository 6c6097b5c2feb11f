//! Event folding into netted position entities.

use std::collections::BTreeMap;

use num_bigint::{BigInt, BigUint, Sign};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LensConfig;
use crate::domain::{Address, EventKind, LiquidityEvent, Pool, Position, Tick};
use crate::math::price_at_tick;

/// How the aggregator treats Burn/Collect events without an owner.
///
/// The protocol does not guarantee an owner on these events. Dropping
/// them mirrors the historically observed behavior; bucketing them under
/// the sentinel `"unknown"` owner preserves the liquidity accounting at
/// the cost of an artificial position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OwnerPolicy {
    /// Skip ownerless events entirely (default).
    #[default]
    Drop,
    /// Attribute ownerless events to [`Address::unknown`].
    UnknownBucket,
}

/// How the aggregator treats events whose tick range is empty or
/// inverted (`tick_lower >= tick_upper`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickRangePolicy {
    /// Swap the bounds so the range is well-formed (default). Events
    /// with `tick_lower == tick_upper` are skipped either way, since a
    /// zero-width range holds no liquidity.
    #[default]
    Normalize,
    /// Skip events with an invalid range.
    Reject,
}

/// Grouping key: one position per `(owner, pool, tick range)`.
///
/// `Ord` on this key gives the aggregation its deterministic output
/// order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct PositionKey {
    owner: Address,
    pool: Address,
    tick_lower: i32,
    tick_upper: i32,
}

/// Running sums for one grouping key.
#[derive(Debug, Default)]
struct Accumulator {
    minted: BigUint,
    burned: BigUint,
    deposited0: f64,
    deposited1: f64,
    withdrawn0: f64,
    withdrawn1: f64,
    collected0: f64,
    collected1: f64,
    first_seen: Option<u64>,
}

impl Accumulator {
    fn apply(&mut self, event: &LiquidityEvent) {
        match event.kind {
            EventKind::Mint => {
                self.minted += &event.liquidity;
                self.deposited0 += event.amount0;
                self.deposited1 += event.amount1;
            }
            EventKind::Burn => {
                self.burned += &event.liquidity;
                self.withdrawn0 += event.amount0;
                self.withdrawn1 += event.amount1;
            }
            EventKind::Collect => {
                self.collected0 += event.amount0;
                self.collected1 += event.amount1;
            }
        }
        self.first_seen = Some(match self.first_seen {
            Some(t) => t.min(event.timestamp),
            None => event.timestamp,
        });
    }

    /// Net liquidity as a signed value; positions only materialize when
    /// this is strictly positive.
    fn net_liquidity(&self) -> BigInt {
        BigInt::from(self.minted.clone()) - BigInt::from(self.burned.clone())
    }
}

/// Folds Mint/Burn/Collect events into live [`Position`] entities.
///
/// A pure function of its input list: no hidden state, no randomness,
/// no clock reads. Running it twice on the same events yields identical
/// output, in a deterministic order (sorted by position key).
///
/// # Algorithm
///
/// 1. Group events by `(owner, pool, tick_lower, tick_upper)`; the
///    [`Address`] type makes the grouping case-insensitive.
/// 2. Accumulate minted/burned liquidity in arbitrary precision,
///    deposited/withdrawn/collected token amounts, and the minimum
///    timestamp.
/// 3. Discard groups whose net liquidity (minted − burned) is not
///    strictly positive: fully withdrawn positions vanish.
/// 4. Derive price bounds from the tick range, the USD value from net
///    deposits at the current pool price, and fees earned from the
///    collected amounts.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use clmm_lens::domain::{Address, LiquidityEvent};
/// use clmm_lens::positions::PositionAggregator;
/// # use clmm_lens::domain::{Decimals, FeeTier, Pool, Token};
/// # fn some_pool() -> Pool {
/// #     let d = Decimals::new(18).expect("valid");
/// #     Pool {
/// #         address: Address::new("0xppp"),
/// #         token0: Token::new(Address::new("0x1"), "A", "A", d),
/// #         token1: Token::new(Address::new("0x2"), "B", "B", d),
/// #         fee_tier: FeeTier::TIER_0_30_PERCENT,
/// #         tvl_usd: 0.0, volume_24h_usd: 0.0, volume_7d_usd: 0.0,
/// #         volume_30d_usd: 0.0, apr_percent: 0.0, current_price: 1.0,
/// #         created_at: 0,
/// #     }
/// # }
///
/// let pool = some_pool();
/// let mint = LiquidityEvent::mint(
///     pool.address.clone(),
///     Address::new("0xAAA"),
///     -100,
///     100,
///     BigUint::from(1000u32),
///     500.0,
///     500.0,
///     1_700_000_000,
/// );
/// let positions = PositionAggregator::default().aggregate(&[mint], &pool);
/// assert_eq!(positions.len(), 1);
/// assert_eq!(positions[0].token_id, "0xaaa-0xppp--100-100");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionAggregator {
    owner_policy: OwnerPolicy,
    tick_range_policy: TickRangePolicy,
}

impl PositionAggregator {
    /// Creates an aggregator with explicit policies.
    #[must_use]
    pub const fn new(owner_policy: OwnerPolicy, tick_range_policy: TickRangePolicy) -> Self {
        Self {
            owner_policy,
            tick_range_policy,
        }
    }

    /// Creates an aggregator honoring the policies in `config`.
    #[must_use]
    pub const fn from_config(config: &LensConfig) -> Self {
        Self {
            owner_policy: config.owner_policy,
            tick_range_policy: config.tick_range_policy,
        }
    }

    /// Reconstructs the live positions of `pool` from its event stream.
    ///
    /// Events referencing a different pool are skipped. Ownerless and
    /// invalid-range events are handled per the configured policies.
    #[must_use]
    pub fn aggregate(&self, events: &[LiquidityEvent], pool: &Pool) -> Vec<Position> {
        let mut groups: BTreeMap<PositionKey, Accumulator> = BTreeMap::new();

        for event in events {
            if event.pool != pool.address {
                debug!(
                    event_pool = %event.pool,
                    pool = %pool.address,
                    "event for different pool, skipping"
                );
                continue;
            }

            let Some(owner) = self.resolve_owner(event) else {
                continue;
            };
            let Some((tick_lower, tick_upper)) = self.resolve_range(event) else {
                continue;
            };

            let key = PositionKey {
                owner,
                pool: event.pool.clone(),
                tick_lower,
                tick_upper,
            };
            groups.entry(key).or_default().apply(event);
        }

        groups
            .into_iter()
            .filter_map(|(key, acc)| Self::materialize(&key, &acc, pool))
            .collect()
    }

    fn resolve_owner(&self, event: &LiquidityEvent) -> Option<Address> {
        match (&event.owner, self.owner_policy) {
            (Some(owner), _) => Some(owner.clone()),
            (None, OwnerPolicy::UnknownBucket) => Some(Address::unknown()),
            (None, OwnerPolicy::Drop) => {
                warn!(kind = %event.kind, pool = %event.pool, "ownerless event dropped");
                None
            }
        }
    }

    fn resolve_range(&self, event: &LiquidityEvent) -> Option<(i32, i32)> {
        // Ticks beyond the protocol range degrade to the nearest
        // representable bound instead of failing the record.
        let lower = Tick::saturating(event.tick_lower).get();
        let upper = Tick::saturating(event.tick_upper).get();
        if lower != event.tick_lower || upper != event.tick_upper {
            debug!(
                tick_lower = event.tick_lower,
                tick_upper = event.tick_upper,
                "out-of-range ticks clamped to protocol bounds"
            );
        }

        if Position::validate_range(lower, upper).is_ok() {
            return Some((lower, upper));
        }
        if lower == upper {
            warn!(tick = lower, "zero-width tick range, skipping event");
            return None;
        }
        match self.tick_range_policy {
            TickRangePolicy::Normalize => {
                warn!(
                    tick_lower = lower,
                    tick_upper = upper,
                    "inverted tick range, swapping bounds"
                );
                Some((upper, lower))
            }
            TickRangePolicy::Reject => {
                warn!(
                    tick_lower = lower,
                    tick_upper = upper,
                    "inverted tick range, skipping event"
                );
                None
            }
        }
    }

    fn materialize(key: &PositionKey, acc: &Accumulator, pool: &Pool) -> Option<Position> {
        let net = acc.net_liquidity();
        if net.sign() != Sign::Plus {
            return None;
        }
        let liquidity = net.magnitude().clone();

        let decimals0 = pool.token0.decimals;
        let decimals1 = pool.token1.decimals;
        let current_price = pool.current_price;

        let net0 = acc.deposited0 - acc.withdrawn0;
        let net1 = acc.deposited1 - acc.withdrawn1;

        Some(Position {
            token_id: Position::token_id_for(&key.owner, &key.pool, key.tick_lower, key.tick_upper),
            owner: key.owner.clone(),
            pool_address: key.pool.clone(),
            token0: pool.token0.clone(),
            token1: pool.token1.clone(),
            fee_tier: pool.fee_tier,
            liquidity,
            tick_lower: key.tick_lower,
            tick_upper: key.tick_upper,
            price_lower: price_at_tick(key.tick_lower, decimals0, decimals1),
            price_upper: price_at_tick(key.tick_upper, decimals0, decimals1),
            current_price,
            value_usd: net0 * current_price + net1,
            uncollected_fees_usd: 0.0,
            fees_earned_usd: acc.collected0 * current_price + acc.collected1,
            created_at: acc.first_seen.unwrap_or(0),
        })
    }
}

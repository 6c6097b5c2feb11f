//! Wire-record normalization into application entities.
//!
//! Isolates the rest of the crate from the indexer schema. The error
//! policy throughout is default-to-zero: a malformed or missing numeric
//! field becomes `0` (logged at debug level), never an error — a
//! presentation layer showing "$0" is preferred to a crashed page.

use core::str::FromStr;

use num_bigint::BigUint;
use tracing::debug;

use super::records::{EventRecord, PoolDayRecord, PoolHourRecord, PoolRecord, TokenRecord};
use crate::config::LensConfig;
use crate::domain::{Address, Decimals, EventKind, FeeTier, LiquidityEvent, Pool, Token};
use crate::math::price_from_sqrt_x96;
use crate::metrics::{
    fee_apr, fees_trailing, volume_24h, volume_30d, volume_7d, DayBucket, HourBucket,
};

/// Window used for the APR estimate, in days.
const APR_WINDOW_DAYS: u64 = 7;

/// Parses a decimal string, defaulting to zero.
fn parse_f64(field: &'static str, raw: Option<&str>) -> f64 {
    match raw {
        Some(s) => s.parse().unwrap_or_else(|_| {
            debug!(field, value = s, "unparsable number, defaulting to 0");
            0.0
        }),
        None => 0.0,
    }
}

/// Parses an integer string, defaulting to zero.
fn parse_u64(field: &'static str, raw: Option<&str>) -> u64 {
    match raw {
        Some(s) => s.parse().unwrap_or_else(|_| {
            debug!(field, value = s, "unparsable integer, defaulting to 0");
            0
        }),
        None => 0,
    }
}

/// Parses a signed tick string, defaulting to zero.
fn parse_i32(field: &'static str, raw: Option<&str>) -> i32 {
    match raw {
        Some(s) => s.parse().unwrap_or_else(|_| {
            debug!(field, value = s, "unparsable tick, defaulting to 0");
            0
        }),
        None => 0,
    }
}

/// Parses an arbitrary-precision unsigned integer losslessly,
/// defaulting to zero.
fn parse_biguint(field: &'static str, raw: Option<&str>) -> BigUint {
    match raw {
        Some(s) => BigUint::from_str(s).unwrap_or_else(|_| {
            debug!(field, value = s, "unparsable big integer, defaulting to 0");
            BigUint::default()
        }),
        None => BigUint::default(),
    }
}

/// Maps indexer records to application entities.
///
/// Holds the [`LensConfig`] so wrapped-native tokens that omit their
/// decimals field can fall back to the configured native-currency
/// decimals rather than zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    config: LensConfig,
}

impl Normalizer {
    /// Creates a normalizer with the given configuration.
    #[must_use]
    pub const fn new(config: LensConfig) -> Self {
        Self { config }
    }

    /// Normalizes one token record.
    ///
    /// The address is lowercased; decimals parse with default-to-zero
    /// semantics except when the field is absent entirely, where the
    /// configured native-currency decimals apply (indexers omit the
    /// field for the wrapped native token on some chains).
    #[must_use]
    pub fn token_from_record(&self, record: &TokenRecord) -> Token {
        let decimals = match record.decimals.as_deref() {
            Some(raw) => raw
                .parse::<u8>()
                .ok()
                .and_then(|v| Decimals::new(v).ok())
                .unwrap_or_else(|| {
                    debug!(value = raw, "unparsable decimals, defaulting to 0");
                    Decimals::ZERO
                }),
            None => self.config.native_currency_decimals,
        };
        Token::new(
            Address::new(record.id.clone().unwrap_or_default()),
            record.symbol.clone().unwrap_or_default(),
            record.name.clone().unwrap_or_default(),
            decimals,
        )
    }

    /// Normalizes one pool record, computing the rolling volume windows
    /// and APR against the supplied `now` (unix seconds).
    ///
    /// The current price prefers the indexer's precomputed decimal field
    /// and falls back to the sqrt-price conversion when it is missing or
    /// zero. The fee tier is parsed as basis points.
    #[must_use]
    pub fn pool_from_record(&self, record: &PoolRecord, now: u64) -> Pool {
        let empty = TokenRecord::default();
        let token0 = self.token_from_record(record.token0.as_ref().unwrap_or(&empty));
        let token1 = self.token_from_record(record.token1.as_ref().unwrap_or(&empty));

        let fee_bps = parse_u64("feeTier", record.fee_tier.as_deref());
        #[allow(clippy::cast_possible_truncation)]
        let fee_tier = FeeTier::from_bps(fee_bps.min(u64::from(u32::MAX)) as u32);

        let precomputed = parse_f64("token0Price", record.token0_price.as_deref());
        let current_price = if precomputed > 0.0 {
            precomputed
        } else {
            let sqrt_price = parse_biguint("sqrtPrice", record.sqrt_price.as_deref());
            price_from_sqrt_x96(&sqrt_price, token0.decimals, token1.decimals)
        };

        let days = day_buckets(&record.pool_day_data);
        let hours = hour_buckets(&record.pool_hour_data);
        let tvl_usd = parse_f64(
            "totalValueLockedUSD",
            record.total_value_locked_usd.as_deref(),
        );

        Pool {
            address: Address::new(record.id.clone().unwrap_or_default()),
            token0,
            token1,
            fee_tier,
            tvl_usd,
            volume_24h_usd: volume_24h(&hours, now),
            volume_7d_usd: volume_7d(&days, now),
            volume_30d_usd: volume_30d(&days, now),
            apr_percent: fee_apr(
                fees_trailing(&days, now, APR_WINDOW_DAYS),
                APR_WINDOW_DAYS,
                tvl_usd,
            ),
            current_price,
            created_at: parse_u64("createdAtTimestamp", record.created_at_timestamp.as_deref()),
        }
    }

    /// Normalizes one event record of the given kind.
    ///
    /// An empty-string owner is treated as absent, matching the
    /// indexer's representation of a null owner.
    #[must_use]
    pub fn event_from_record(&self, kind: EventKind, record: &EventRecord) -> LiquidityEvent {
        let owner = record
            .owner
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(Address::new);
        LiquidityEvent {
            kind,
            pool: Address::new(
                record
                    .pool
                    .as_ref()
                    .and_then(|p| p.id.clone())
                    .unwrap_or_default(),
            ),
            owner,
            tick_lower: parse_i32("tickLower", record.tick_lower.as_deref()),
            tick_upper: parse_i32("tickUpper", record.tick_upper.as_deref()),
            liquidity: parse_biguint("amount", record.amount.as_deref()),
            amount0: parse_f64("amount0", record.amount0.as_deref()),
            amount1: parse_f64("amount1", record.amount1.as_deref()),
            timestamp: parse_u64("timestamp", record.timestamp.as_deref()),
        }
    }

    /// Normalizes the three event families into one flat list, in the
    /// order mints, burns, collects (input order preserved within each).
    #[must_use]
    pub fn liquidity_events(
        &self,
        mints: &[EventRecord],
        burns: &[EventRecord],
        collects: &[EventRecord],
    ) -> Vec<LiquidityEvent> {
        let mut events = Vec::with_capacity(mints.len() + burns.len() + collects.len());
        events.extend(
            mints
                .iter()
                .map(|r| self.event_from_record(EventKind::Mint, r)),
        );
        events.extend(
            burns
                .iter()
                .map(|r| self.event_from_record(EventKind::Burn, r)),
        );
        events.extend(
            collects
                .iter()
                .map(|r| self.event_from_record(EventKind::Collect, r)),
        );
        events
    }
}

fn day_buckets(records: &[PoolDayRecord]) -> Vec<DayBucket> {
    records
        .iter()
        .map(|r| DayBucket {
            date: r.date.unwrap_or(0),
            volume_usd: parse_f64("poolDayData.volumeUSD", r.volume_usd.as_deref()),
            fees_usd: parse_f64("poolDayData.feesUSD", r.fees_usd.as_deref()),
        })
        .collect()
}

fn hour_buckets(records: &[PoolHourRecord]) -> Vec<HourBucket> {
    records
        .iter()
        .map(|r| HourBucket {
            period_start: r.period_start_unix.unwrap_or(0),
            volume_usd: parse_f64("poolHourData.volumeUSD", r.volume_usd.as_deref()),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(LensConfig::default())
    }

    fn token_record(id: &str, symbol: &str, decimals: &str) -> TokenRecord {
        TokenRecord {
            id: Some(id.to_owned()),
            symbol: Some(symbol.to_owned()),
            name: Some(format!("{symbol} Coin")),
            decimals: Some(decimals.to_owned()),
        }
    }

    // -- token_from_record --------------------------------------------------

    #[test]
    fn token_normalization() {
        let tok = normalizer().token_from_record(&token_record("0xAAA", "USDC", "6"));
        assert_eq!(tok.address.as_str(), "0xaaa");
        assert_eq!(tok.symbol, "USDC");
        assert_eq!(tok.decimals.get(), 6);
    }

    #[test]
    fn malformed_decimals_default_to_zero() {
        let tok = normalizer().token_from_record(&token_record("0xAAA", "X", "abc"));
        assert_eq!(tok.decimals, Decimals::ZERO);
    }

    #[test]
    fn absent_decimals_use_native_fallback() {
        let mut rec = token_record("0xAAA", "WETH", "18");
        rec.decimals = None;
        let tok = normalizer().token_from_record(&rec);
        assert_eq!(tok.decimals, Decimals::STANDARD);
    }

    #[test]
    fn empty_record_yields_empty_token() {
        let tok = normalizer().token_from_record(&TokenRecord::default());
        assert!(tok.address.is_empty());
        assert!(tok.symbol.is_empty());
    }

    // -- pool_from_record ---------------------------------------------------

    const NOW: u64 = 1_700_000_000;

    fn pool_record() -> PoolRecord {
        PoolRecord {
            id: Some("0xPPP".to_owned()),
            fee_tier: Some("30".to_owned()),
            token0: Some(token_record("0xAAA", "USDC", "6")),
            token1: Some(token_record("0xBBB", "WETH", "18")),
            token0_price: Some("0.0005".to_owned()),
            sqrt_price: None,
            total_value_locked_usd: Some("10000".to_owned()),
            created_at_timestamp: Some("1690000000".to_owned()),
            pool_day_data: vec![PoolDayRecord {
                date: Some(NOW - 86_400),
                volume_usd: Some("1000".to_owned()),
                fees_usd: Some("700".to_owned()),
            }],
            pool_hour_data: vec![PoolHourRecord {
                period_start_unix: Some(NOW - 3_600),
                volume_usd: Some("100".to_owned()),
            }],
        }
    }

    #[test]
    fn pool_normalization() {
        let pool = normalizer().pool_from_record(&pool_record(), NOW);
        assert_eq!(pool.address.as_str(), "0xppp");
        assert_eq!(pool.fee_tier.basis_points(), 30);
        assert!((pool.fee_tier.fraction() - 0.003).abs() < f64::EPSILON);
        assert!((pool.current_price - 0.0005).abs() < f64::EPSILON);
        assert!((pool.tvl_usd - 10_000.0).abs() < f64::EPSILON);
        assert_eq!(pool.created_at, 1_690_000_000);
    }

    #[test]
    fn pool_volume_windows() {
        let pool = normalizer().pool_from_record(&pool_record(), NOW);
        assert!((pool.volume_24h_usd - 100.0).abs() < 1e-9);
        assert!((pool.volume_7d_usd - 1000.0).abs() < 1e-9);
        assert!((pool.volume_30d_usd - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn pool_apr_from_trailing_fees() {
        // fees 700 over a 7-day window, tvl 10_000 => 365%.
        let pool = normalizer().pool_from_record(&pool_record(), NOW);
        assert!((pool.apr_percent - 365.0).abs() < 1e-9);
    }

    #[test]
    fn price_falls_back_to_sqrt_conversion() {
        let mut rec = pool_record();
        rec.token0_price = None;
        // 2^96 encodes raw price 1; decimals 6 vs 18 adjust by 10^-12.
        rec.sqrt_price = Some(BigUint::from(2u8).pow(96).to_string());
        let pool = normalizer().pool_from_record(&rec, NOW);
        assert!((pool.current_price - 1e-12).abs() < 1e-24);
    }

    #[test]
    fn zero_precomputed_price_triggers_fallback() {
        let mut rec = pool_record();
        rec.token0_price = Some("0".to_owned());
        rec.sqrt_price = Some(BigUint::from(2u8).pow(96).to_string());
        let mut with_equal_decimals = rec.clone();
        with_equal_decimals.token1 = Some(token_record("0xBBB", "WETH", "6"));
        let pool = normalizer().pool_from_record(&with_equal_decimals, NOW);
        assert!((pool.current_price - 1.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_pool_fields_default_to_zero() {
        let rec = PoolRecord {
            id: Some("0xPPP".to_owned()),
            fee_tier: Some("not-a-number".to_owned()),
            total_value_locked_usd: Some("garbage".to_owned()),
            ..PoolRecord::default()
        };
        let pool = normalizer().pool_from_record(&rec, NOW);
        assert_eq!(pool.fee_tier.basis_points(), 0);
        assert!(pool.tvl_usd.abs() < f64::EPSILON);
        assert!(pool.apr_percent.abs() < f64::EPSILON);
    }

    // -- event normalization ------------------------------------------------

    fn mint_record() -> EventRecord {
        EventRecord {
            pool: Some(super::super::records::PoolRefRecord {
                id: Some("0xPPP".to_owned()),
            }),
            owner: Some("0xAAA".to_owned()),
            tick_lower: Some("-100".to_owned()),
            tick_upper: Some("100".to_owned()),
            amount: Some("1000".to_owned()),
            amount0: Some("500".to_owned()),
            amount1: Some("500".to_owned()),
            timestamp: Some("1700000000".to_owned()),
        }
    }

    #[test]
    fn event_normalization() {
        let ev = normalizer().event_from_record(EventKind::Mint, &mint_record());
        assert_eq!(ev.kind, EventKind::Mint);
        assert_eq!(ev.pool.as_str(), "0xppp");
        assert_eq!(ev.owner, Some(Address::new("0xaaa")));
        assert_eq!(ev.tick_lower, -100);
        assert_eq!(ev.liquidity, BigUint::from(1000u32));
        assert!((ev.amount0 - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_owner_becomes_none() {
        let mut rec = mint_record();
        rec.owner = Some(String::new());
        let ev = normalizer().event_from_record(EventKind::Burn, &rec);
        assert!(ev.owner.is_none());
    }

    #[test]
    fn liquidity_amount_exceeding_u64_parses_losslessly() {
        let mut rec = mint_record();
        // 2^128, far beyond u64.
        rec.amount = Some("340282366920938463463374607431768211456".to_owned());
        let ev = normalizer().event_from_record(EventKind::Mint, &rec);
        assert_eq!(ev.liquidity, BigUint::from(2u8).pow(128));
    }

    #[test]
    fn liquidity_events_preserve_family_order() {
        let n = normalizer();
        let events = n.liquidity_events(&[mint_record()], &[mint_record()], &[mint_record()]);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].kind, EventKind::Mint);
        assert_eq!(events[1].kind, EventKind::Burn);
        assert_eq!(events[2].kind, EventKind::Collect);
    }
}

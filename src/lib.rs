//! # CLMM Lens
//!
//! Read-side data layer for concentrated-liquidity AMMs: reconstruct a
//! user's liquidity positions from a Mint/Burn/Collect event stream,
//! convert between tick indices, `sqrtPriceX96` values, and
//! human-decimal prices, and derive pool metrics (rolling volume
//! windows, fee APR) from time-bucketed indexer aggregates.
//!
//! Everything in this crate is a pure, synchronous transformation over
//! already-fetched data. The crate owns no protocol logic, performs no
//! network I/O, and persists nothing; it sits between a GraphQL indexer
//! client and a presentation layer.
//!
//! # Quick Start
//!
//! ```rust
//! use num_bigint::BigUint;
//! use clmm_lens::domain::{Address, Decimals, FeeTier, LiquidityEvent, Pool, Token};
//! use clmm_lens::positions::PositionAggregator;
//!
//! // 1. A pool, normally produced by `Normalizer::pool_from_record`.
//! let usdc = Token::new(
//!     Address::new("0x111"),
//!     "USDC",
//!     "USD Coin",
//!     Decimals::new(6).expect("valid decimals"),
//! );
//! let weth = Token::new(Address::new("0x222"), "WETH", "Wrapped Ether", Decimals::STANDARD);
//! let pool = Pool {
//!     address: Address::new("0xPPP"),
//!     token0: usdc,
//!     token1: weth,
//!     fee_tier: FeeTier::TIER_0_30_PERCENT,
//!     tvl_usd: 1_000_000.0,
//!     volume_24h_usd: 0.0,
//!     volume_7d_usd: 0.0,
//!     volume_30d_usd: 0.0,
//!     apr_percent: 0.0,
//!     current_price: 0.0005,
//!     created_at: 1_700_000_000,
//! };
//!
//! // 2. The pool's event stream, normally from `Normalizer::liquidity_events`.
//! let mint = LiquidityEvent::mint(
//!     pool.address.clone(),
//!     Address::new("0xAAA"),
//!     -887_220,
//!     887_220,
//!     BigUint::from(123_456_789u64),
//!     1000.0,
//!     0.5,
//!     1_700_000_000,
//! );
//!
//! // 3. Fold the stream into live positions.
//! let positions = PositionAggregator::default().aggregate(&[mint], &pool);
//! assert_eq!(positions.len(), 1);
//! assert_eq!(positions[0].liquidity, BigUint::from(123_456_789u64));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │ GraphQL data │  already-deserialized indexer records
//! └──────┬───────┘
//!        │ subgraph::Normalizer (default-to-zero parsing)
//!        ▼
//! ┌──────────────┐
//! │   Entities   │  Token, Pool, LiquidityEvent
//! └──────┬───────┘
//!        │ positions::PositionAggregator (group, net, filter)
//!        │ math (tick / sqrtPriceX96 → decimal price)
//!        │ metrics (volume windows, APR, quote cache)
//!        ▼
//! ┌──────────────┐
//! │ Presentation │  Pool, Position (out of scope)
//! └──────────────┘
//! ```
//!
//! # Error handling
//!
//! Validated constructors return [`error::LensError`]; the wire-facing
//! paths never fail, applying default-to-zero semantics to malformed
//! fields instead (see [`subgraph`]).

pub mod bus;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod metrics;
pub mod positions;
pub mod prelude;
pub mod subgraph;

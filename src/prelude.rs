//! Convenience re-exports for common types and functions.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use clmm_lens::prelude::*;
//! ```
//!
//! This re-exports the domain entities, the normalizer and aggregator,
//! the price math, the derived-metric helpers, and the error types so
//! that consumers don't need to import from individual submodules.

// Re-export domain types
pub use crate::domain::{
    Address, Decimals, EventKind, FeeTier, LiquidityEvent, Pool, Position, PriceBound, Tick, Token,
};

// Re-export the wire layer
pub use crate::subgraph::{EventRecord, Normalizer, PoolRecord, TokenRecord};

// Re-export aggregation
pub use crate::positions::{OwnerPolicy, PositionAggregator, TickRangePolicy};

// Re-export price math
pub use crate::math::{invert, price_at_tick, price_from_sqrt_x96};

// Re-export derived metrics
pub use crate::metrics::{fee_apr, volume_24h, volume_30d, volume_7d, QuoteCache, QuoteKey};

// Re-export configuration and notification
pub use crate::bus::EventBus;
pub use crate::config::LensConfig;

// Re-export error types
pub use crate::error::{LensError, Result};

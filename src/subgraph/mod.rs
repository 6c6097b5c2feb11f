//! Indexer wire formats and their normalization into domain entities.
//!
//! The crate never performs the GraphQL fetch itself; it is handed
//! already-deserialized wire records and maps them through the
//! [`Normalizer`] with default-to-zero error semantics.

mod normalize;
mod records;

pub use normalize::Normalizer;
pub use records::{
    EventRecord, PoolDayRecord, PoolHourRecord, PoolRecord, PoolRefRecord, TokenRecord,
};

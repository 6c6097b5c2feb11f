//! Unified error types for the lens library.
//!
//! All fallible constructors across the crate return [`LensError`], keeping
//! error handling consistent for consumers. The normalization and
//! aggregation paths do *not* error on malformed wire data; they default to
//! zero and log instead. Errors here are reserved for genuinely invalid
//! constructions.

use thiserror::Error;

/// Errors produced by validated constructors in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LensError {
    /// A tick index outside the representable range `[-887272, 887272]`.
    #[error("invalid tick: {0}")]
    InvalidTick(&'static str),

    /// A decimal count outside the supported range.
    #[error("invalid decimals: {0}")]
    InvalidDecimals(&'static str),

    /// A tick range where the lower bound is not below the upper bound.
    #[error("invalid tick range: {0}")]
    InvalidTickRange(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, LensError>;

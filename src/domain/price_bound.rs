//! Price bound with a full-range sentinel.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Any computed price above this threshold is treated as unbounded.
/// Extreme ticks produce astronomically large decimal prices that carry
/// no information for display; they collapse to the sentinel instead.
const UNBOUNDED_THRESHOLD: f64 = 1e30;

/// A decimal price that is either a finite positive value or the
/// "full range" sentinel.
///
/// Tick-derived prices at the edges of the representable tick range
/// overflow `f64` or degenerate to zero; rather than propagate `inf`/`NaN`
/// into the presentation layer, such values map to
/// [`Unbounded`](Self::Unbounded).
///
/// # Examples
///
/// ```
/// use clmm_lens::domain::PriceBound;
///
/// assert_eq!(PriceBound::from_price(1.5), PriceBound::Finite(1.5));
/// assert_eq!(PriceBound::from_price(f64::INFINITY), PriceBound::Unbounded);
/// assert_eq!(PriceBound::from_price(0.0), PriceBound::Unbounded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PriceBound {
    /// A finite, strictly positive price.
    Finite(f64),
    /// Sentinel for the full price range (non-finite, non-positive, or
    /// astronomically large source value).
    Unbounded,
}

impl PriceBound {
    /// Classifies a raw computed price.
    ///
    /// Values that are non-finite, non-positive, or above `1e30` become
    /// [`Unbounded`](Self::Unbounded); everything else is finite.
    #[must_use]
    pub fn from_price(value: f64) -> Self {
        if value.is_finite() && value > 0.0 && value <= UNBOUNDED_THRESHOLD {
            Self::Finite(value)
        } else {
            Self::Unbounded
        }
    }

    /// Returns the finite value, if any.
    #[must_use]
    pub const fn as_finite(&self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(*v),
            Self::Unbounded => None,
        }
    }

    /// Returns `true` for the full-range sentinel.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Inverts the bound (`1/price`), for callers whose token ordering
    /// differs from the canonical address-sorted ordering.
    ///
    /// The inverse of an unbounded price is still outside the displayable
    /// range, so the sentinel is preserved. Inversion of a finite price is
    /// re-classified, since the reciprocal of a tiny price can itself
    /// exceed the displayable threshold.
    #[must_use]
    pub fn inverted(&self) -> Self {
        match self {
            Self::Finite(v) => Self::from_price(1.0 / v),
            Self::Unbounded => Self::Unbounded,
        }
    }
}

impl fmt::Display for PriceBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{v}"),
            Self::Unbounded => f.write_str("∞"),
        }
    }
}

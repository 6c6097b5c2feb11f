//! Token decimal places.

use serde::{Deserialize, Serialize};

use crate::error::LensError;

/// Maximum allowed decimal places. ERC-20 convention tops out at 18, but
/// indexed data occasionally carries exotic tokens above that; anything
/// beyond 30 is treated as corrupt.
const MAX_DECIMALS: u8 = 30;

/// Represents the number of decimal places for a token amount.
///
/// Valid range is `0..=30`. Construction is validated; values above the
/// maximum are rejected.
///
/// # Examples
///
/// ```
/// use clmm_lens::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// The common EVM standard (18), also the default for native currency.
    pub const STANDARD: Self = Self(18);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`LensError::InvalidDecimals`] if `value` exceeds 30.
    pub const fn new(value: u8) -> crate::error::Result<Self> {
        if value > MAX_DECIMALS {
            return Err(LensError::InvalidDecimals("decimals must be 0..=30"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals` as an `f64`, exact for the whole valid range.
    #[must_use]
    pub fn pow10(&self) -> f64 {
        10f64.powi(i32::from(self.0))
    }
}

impl TryFrom<u8> for Decimals {
    type Error = LensError;

    fn try_from(value: u8) -> crate::error::Result<Self> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}

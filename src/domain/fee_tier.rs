//! Protocol fee tiers in basis points.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A pool's fee tier expressed in basis points (1 bp = 0.01%).
///
/// Any `u32` value is accepted, matching the indexer's wire format, but
/// [`is_standard`](Self::is_standard) indicates whether it matches one of
/// the four well-known tiers used across major AMM deployments.
///
/// # Examples
///
/// ```
/// use clmm_lens::domain::FeeTier;
///
/// let tier = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(tier.basis_points(), 30);
/// assert!((tier.fraction() - 0.003).abs() < f64::EPSILON);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FeeTier(u32);

impl FeeTier {
    /// 0.01% fee — ultra-concentrated, low-volume pairs (1 bp).
    pub const TIER_0_01_PERCENT: Self = Self(1);

    /// 0.05% fee — stablecoin pairs (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(5);

    /// 0.30% fee — standard volatile pairs (30 bp).
    pub const TIER_0_30_PERCENT: Self = Self(30);

    /// 1.00% fee — high-fee trading pairs (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(100);

    /// Creates a new `FeeTier` from raw basis points.
    #[must_use]
    pub const fn from_bps(basis_points: u32) -> Self {
        Self(basis_points)
    }

    /// Returns the raw basis-point value.
    #[must_use]
    pub const fn basis_points(&self) -> u32 {
        self.0
    }

    /// Returns the fee as a fraction: `bps / 10_000` (30 bp → 0.003).
    #[must_use]
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / 10_000.0
    }

    /// Returns the fee as a percentage: `bps / 100` (30 bp → 0.30).
    #[must_use]
    pub fn percent(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Returns `true` if this tier matches one of the four standard presets.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        matches!(self.0, 1 | 5 | 30 | 100)
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({}bp)", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn from_bps_round_trip() {
        assert_eq!(FeeTier::from_bps(42).basis_points(), 42);
    }

    #[test]
    fn standard_presets() {
        assert!(FeeTier::TIER_0_01_PERCENT.is_standard());
        assert!(FeeTier::TIER_0_05_PERCENT.is_standard());
        assert!(FeeTier::TIER_0_30_PERCENT.is_standard());
        assert!(FeeTier::TIER_1_00_PERCENT.is_standard());
    }

    #[test]
    fn nonstandard_tier() {
        assert!(!FeeTier::from_bps(42).is_standard());
    }

    // -- Conversions --------------------------------------------------------

    #[test]
    fn fraction_of_30bp() {
        assert!((FeeTier::TIER_0_30_PERCENT.fraction() - 0.003).abs() < f64::EPSILON);
    }

    #[test]
    fn percent_of_30bp() {
        assert!((FeeTier::TIER_0_30_PERCENT.percent() - 0.30).abs() < f64::EPSILON);
    }

    #[test]
    fn fraction_of_zero() {
        assert!((FeeTier::default().fraction()).abs() < f64::EPSILON);
    }

    // -- Display / serde ----------------------------------------------------

    #[test]
    fn display() {
        assert_eq!(format!("{}", FeeTier::from_bps(30)), "FeeTier(30bp)");
    }

    #[test]
    fn serializes_as_plain_integer() {
        let Ok(json) = serde_json::to_string(&FeeTier::from_bps(30)) else {
            panic!("expected Ok");
        };
        assert_eq!(json, "30");
    }
}

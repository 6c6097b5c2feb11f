//! Tick and sqrt-price conversion to human-decimal prices.
//!
//! These helpers implement the standard relationships used by
//! Uniswap v3-style pools:
//!
//! - `price = 1.0001^tick`, adjusted by `10^(decimals0 - decimals1)`;
//! - `price = (sqrtPriceX96 / 2^96)^2`, adjusted the same way.
//!
//! Both express the result as "token1 per token0" in human units. All
//! arithmetic here is `f64`, which is sufficient for display; callers
//! needing exactness keep the raw integers alongside (the wire layer
//! parses them losslessly into `BigUint`).
//!
//! # Functions
//!
//! - [`price_at_tick`] — tick index to decimal price, with the
//!   full-range sentinel for degenerate results.
//! - [`price_from_sqrt_x96`] — on-chain fixed-point sqrt price to
//!   decimal price.
//! - [`sqrt_price_x96_at_tick`] — the canonical inverse, used to
//!   cross-check the two conversions.
//! - [`invert`] — flips a price for callers whose token ordering differs
//!   from the canonical address-sorted ordering.

use num_bigint::BigUint;
use num_traits::{FromPrimitive, ToPrimitive};

use crate::domain::{Decimals, PriceBound};

/// Base of the tick-price exponential: `price = BASE^tick`.
const BASE: f64 = 1.0001;

/// `2^96`, the Q64.96 fixed-point scaling factor.
const Q96: f64 = 79_228_162_514_264_337_593_543_950_336.0;

/// Decimal adjustment factor `10^(decimals0 - decimals1)`.
fn decimal_adjustment(decimals0: Decimals, decimals1: Decimals) -> f64 {
    let diff = i32::from(decimals0.get()) - i32::from(decimals1.get());
    10f64.powi(diff)
}

/// Computes the decimal price at a tick: `1.0001^tick * 10^(d0 - d1)`.
///
/// Handles the full `i32` input range: tick magnitudes beyond the
/// protocol's ±887272 produce prices outside the displayable range and
/// collapse to [`PriceBound::Unbounded`] rather than propagating
/// `inf`/`NaN`. Within the finite region the result is monotonically
/// increasing in `tick`, and `price_at_tick(0, d, d)` is exactly `1.0`.
///
/// # Examples
///
/// ```
/// use clmm_lens::domain::{Decimals, PriceBound};
/// use clmm_lens::math::price_at_tick;
///
/// let d = Decimals::new(18).expect("valid decimals");
/// assert_eq!(price_at_tick(0, d, d), PriceBound::Finite(1.0));
/// ```
#[must_use = "this returns the computed price and does not modify state"]
pub fn price_at_tick(tick: i32, decimals0: Decimals, decimals1: Decimals) -> PriceBound {
    #[allow(clippy::cast_lossless)]
    let raw = BASE.powf(tick as f64);
    PriceBound::from_price(raw * decimal_adjustment(decimals0, decimals1))
}

/// Converts an on-chain `sqrtPriceX96` value to a decimal price:
/// `(x / 2^96)^2 * 10^(d0 - d1)`.
///
/// Returns `0.0` when the input cannot produce a finite positive price
/// (zero input, or a decimal adjustment that underflows to zero) — pool
/// normalization treats a missing price as zero, never as an error.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use clmm_lens::domain::Decimals;
/// use clmm_lens::math::price_from_sqrt_x96;
///
/// // sqrtPriceX96 == 2^96 encodes a raw price of exactly 1.
/// let x = BigUint::from(2u8).pow(96);
/// let d = Decimals::new(18).expect("valid decimals");
/// assert!((price_from_sqrt_x96(&x, d, d) - 1.0).abs() < 1e-12);
/// ```
#[must_use = "this returns the computed price and does not modify state"]
pub fn price_from_sqrt_x96(sqrt_price_x96: &BigUint, decimals0: Decimals, decimals1: Decimals) -> f64 {
    // sqrtPriceX96 < 2^160, so the f64 conversion cannot overflow; it only
    // loses precision below the display threshold.
    let Some(sqrt_price) = sqrt_price_x96.to_f64() else {
        return 0.0;
    };
    let ratio = sqrt_price / Q96;
    let price = ratio * ratio * decimal_adjustment(decimals0, decimals1);
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}

/// Computes the canonical `sqrtPriceX96` encoding for a tick:
/// `sqrt(1.0001^tick) * 2^96`.
///
/// This is the inverse relation used on-chain; the lens uses it to
/// cross-check [`price_at_tick`] against [`price_from_sqrt_x96`].
/// Returns zero for ticks whose encoding falls outside the `f64`
/// representable range (far beyond the protocol's tick bounds).
#[must_use = "this returns the computed encoding and does not modify state"]
pub fn sqrt_price_x96_at_tick(tick: i32) -> BigUint {
    #[allow(clippy::cast_lossless)]
    let sqrt_price = BASE.powf(tick as f64 / 2.0);
    let encoded = sqrt_price * Q96;
    if encoded.is_finite() && encoded >= 1.0 {
        BigUint::from_f64(encoded).unwrap_or_default()
    } else {
        BigUint::default()
    }
}

/// Inverts a price (`1/price`) for display against the opposite base
/// token. Returns `0.0` for inputs whose reciprocal is not finite.
#[must_use]
pub fn invert(price: f64) -> f64 {
    let inverted = 1.0 / price;
    if inverted.is_finite() {
        inverted
    } else {
        0.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn dec(v: u8) -> Decimals {
        let Ok(d) = Decimals::new(v) else {
            panic!("valid decimals expected");
        };
        d
    }

    // -- price_at_tick ------------------------------------------------------

    #[test]
    fn tick_zero_equal_decimals_is_one() {
        assert_eq!(price_at_tick(0, dec(18), dec(18)), PriceBound::Finite(1.0));
        assert_eq!(price_at_tick(0, dec(6), dec(6)), PriceBound::Finite(1.0));
    }

    #[test]
    fn tick_one_is_base() {
        let Some(p) = price_at_tick(1, dec(18), dec(18)).as_finite() else {
            panic!("expected finite");
        };
        assert!((p - 1.0001).abs() < 1e-12);
    }

    #[test]
    fn positive_tick_above_one() {
        let Some(p) = price_at_tick(1000, dec(18), dec(18)).as_finite() else {
            panic!("expected finite");
        };
        assert!(p > 1.0);
    }

    #[test]
    fn negative_tick_below_one() {
        let Some(p) = price_at_tick(-1000, dec(18), dec(18)).as_finite() else {
            panic!("expected finite");
        };
        assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn decimals_adjustment_shifts_price() {
        // token0 with 18 decimals, token1 with 6: adjustment = 10^12.
        let Some(p) = price_at_tick(0, dec(18), dec(6)).as_finite() else {
            panic!("expected finite");
        };
        assert!((p - 1e12).abs() < 1e-3);
    }

    #[test]
    fn protocol_max_tick_is_unbounded_for_display() {
        // 1.0001^887272 ≈ 3e38 > 1e30: clamps to the sentinel.
        assert!(price_at_tick(887_272, dec(18), dec(18)).is_unbounded());
    }

    #[test]
    fn protocol_min_tick_is_unbounded_for_display() {
        // The price is a denormal-adjacent tiny value; the reciprocal view
        // would be astronomic, and the bound degrades to the sentinel once
        // it leaves the positive normal range.
        let bound = price_at_tick(-887_272, dec(18), dec(18));
        match bound {
            PriceBound::Finite(p) => assert!(p > 0.0),
            PriceBound::Unbounded => {}
        }
    }

    #[test]
    fn extreme_tick_magnitudes_do_not_panic() {
        assert!(price_at_tick(i32::MAX, dec(18), dec(18)).is_unbounded());
        assert!(price_at_tick(i32::MIN, dec(18), dec(18)).is_unbounded());
    }

    #[test]
    fn monotonic_sample() {
        let ticks = [-5000, -100, 0, 100, 5000];
        let mut last = 0.0;
        for t in ticks {
            let Some(p) = price_at_tick(t, dec(18), dec(18)).as_finite() else {
                panic!("expected finite for tick {t}");
            };
            assert!(p > last, "price must increase with tick");
            last = p;
        }
    }

    // -- price_from_sqrt_x96 ------------------------------------------------

    #[test]
    fn q96_encodes_price_one() {
        let x = BigUint::from(2u8).pow(96);
        let p = price_from_sqrt_x96(&x, dec(18), dec(18));
        assert!((p - 1.0).abs() < 1e-12);
    }

    #[test]
    fn double_q96_encodes_price_four() {
        let x = BigUint::from(2u8).pow(97);
        let p = price_from_sqrt_x96(&x, dec(18), dec(18));
        assert!((p - 4.0).abs() < 1e-9);
    }

    #[test]
    fn zero_input_gives_zero() {
        let p = price_from_sqrt_x96(&BigUint::default(), dec(18), dec(18));
        assert!(p.abs() < f64::EPSILON);
    }

    #[test]
    fn decimals_adjustment_applies() {
        let x = BigUint::from(2u8).pow(96);
        let p = price_from_sqrt_x96(&x, dec(6), dec(18));
        assert!((p - 1e-12).abs() < 1e-24);
    }

    // -- Agreement between the two conversions ------------------------------

    #[test]
    fn tick_and_sqrt_conversions_agree() {
        for t in [-10000, -100, 0, 100, 10000] {
            let Some(from_tick) = price_at_tick(t, dec(18), dec(18)).as_finite() else {
                panic!("expected finite for tick {t}");
            };
            let encoded = sqrt_price_x96_at_tick(t);
            let from_sqrt = price_from_sqrt_x96(&encoded, dec(18), dec(18));
            let rel = (from_tick - from_sqrt).abs() / from_tick;
            assert!(rel < 1e-9, "tick {t}: {from_tick} vs {from_sqrt}");
        }
    }

    // -- invert -------------------------------------------------------------

    #[test]
    fn invert_normal() {
        assert!((invert(4.0) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn invert_zero_is_zero() {
        assert!(invert(0.0).abs() < f64::EPSILON);
    }
}

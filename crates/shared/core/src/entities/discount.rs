use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::values::{BPS_SCALE, BasisPoints, Cents, HALF_BPS_SCALE};

/// How the retained amount is rounded back to whole cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Nearest cent, exact halves round up
    HalfUp,
    /// Floor to the cent below
    Down,
}

impl Default for Rounding {
    fn default() -> Self {
        Self::HalfUp
    }
}

impl Rounding {
    /// Amount the buyer pays on `price` after removing `rate`.
    ///
    /// Works in fixed point scaled by 10 000. The product is taken in `i128`,
    /// so any `i64` price is safe, and the result never exceeds `price`.
    pub fn retain(self, price: Cents, rate: BasisPoints) -> Cents {
        let scale = BPS_SCALE as i128;
        let retained_scaled = price.get() as i128 * rate.complement() as i128;

        let retained = match self {
            Rounding::HalfUp => (retained_scaled + HALF_BPS_SCALE as i128) / scale,
            Rounding::Down => retained_scaled / scale,
        };

        // 0 <= retained <= price, so it fits back into i64
        Cents::from_validated(retained as i64)
    }
}

/// Apply a discount of `rate_bps` basis points to `price_cents`.
///
/// The result is rounded half-up to the nearest cent.
///
/// # Errors
///
/// Returns [`PricingError::InvalidArgument`](crate::PricingError::InvalidArgument)
/// if `price_cents` is negative or `rate_bps` is outside `0..=10_000`.
pub fn apply_discount(price_cents: i64, rate_bps: i64) -> Result<i64> {
    apply_discount_with(price_cents, rate_bps, Rounding::HalfUp)
}

/// Same as [`apply_discount`] with an explicit rounding mode
pub fn apply_discount_with(price_cents: i64, rate_bps: i64, rounding: Rounding) -> Result<i64> {
    let price = Cents::new(price_cents)?;
    let rate = BasisPoints::new(rate_bps)?;

    let discounted = price.discounted_with(rate, rounding);
    trace!(
        "Discounted {} by {} ({:?}) -> {}",
        price, rate, rounding, discounted
    );
    Ok(discounted.get())
}

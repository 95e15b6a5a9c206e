use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::BasisPoints;
use crate::entities::Rounding;
use crate::error::{PricingError, Result};

/// Amount in the smallest currency unit (cents). Never negative.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Self = Self(0);

    /// Validate a raw cent amount
    pub fn new(value: i64) -> Result<Self> {
        if value < 0 {
            debug!("Rejected price: {} cents", value);
            return Err(PricingError::InvalidArgument(format!(
                "price_cents must be >= 0, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Caller guarantees `value >= 0`
    pub(crate) const fn from_validated(value: i64) -> Self {
        debug_assert!(value >= 0);
        Self(value)
    }

    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Price after removing `rate`, rounded half-up to the nearest cent
    pub fn discounted(self, rate: BasisPoints) -> Cents {
        self.discounted_with(rate, Rounding::HalfUp)
    }

    /// Price after removing `rate`, rounded with the given mode
    pub fn discounted_with(self, rate: BasisPoints, rounding: Rounding) -> Cents {
        rounding.retain(self, rate)
    }
}

impl TryFrom<i64> for Cents {
    type Error = PricingError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Cents> for i64 {
    fn from(cents: Cents) -> Self {
        cents.0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}¢", self.0)
    }
}

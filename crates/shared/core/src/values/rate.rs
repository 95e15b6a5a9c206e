use std::fmt;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::BPS_SCALE;
use crate::error::{PricingError, Result};

/// Discount rate in basis points, within `0..=10_000`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct BasisPoints(i64);

impl BasisPoints {
    /// No discount (0%)
    pub const ZERO: Self = Self(0);

    /// Full discount (100%)
    pub const FULL: Self = Self(BPS_SCALE);

    /// Validate a raw basis-point rate
    pub fn new(value: i64) -> Result<Self> {
        if !(0..=BPS_SCALE).contains(&value) {
            debug!("Rejected rate: {} bps", value);
            return Err(PricingError::InvalidArgument(format!(
                "rate_bps must be between 0 and 10_000, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Convert a fraction of one (e.g. `0.0125` for 1.25%) into basis points.
    ///
    /// Fractions finer than one basis point are rejected rather than rounded.
    pub fn from_fraction(fraction: Decimal) -> Result<Self> {
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            debug!("Rejected rate fraction: {}", fraction);
            return Err(PricingError::InvalidArgument(format!(
                "rate fraction must be between 0 and 1, got {}",
                fraction
            )));
        }

        let scaled = fraction * Decimal::from(BPS_SCALE);
        if !scaled.fract().is_zero() {
            return Err(PricingError::InvalidArgument(format!(
                "rate fraction {} is finer than one basis point",
                fraction
            )));
        }

        let bps = scaled.to_i64().ok_or_else(|| {
            PricingError::InvalidArgument(format!("rate fraction {} out of range", fraction))
        })?;
        Self::new(bps)
    }

    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Share of the price the buyer still pays, in basis points
    pub const fn complement(&self) -> i64 {
        BPS_SCALE - self.0
    }

    /// Rate as a fraction of one, e.g. 3333 bps -> 0.3333
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(self.0, 4)
    }
}

impl TryFrom<i64> for BasisPoints {
    type Error = PricingError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<BasisPoints> for i64 {
    fn from(rate: BasisPoints) -> Self {
        rate.0
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bounds() {
        assert_eq!(BasisPoints::new(0).unwrap(), BasisPoints::ZERO);
        assert_eq!(BasisPoints::new(10_000).unwrap(), BasisPoints::FULL);
        assert!(BasisPoints::new(-1).unwrap_err().is_invalid_argument());
        assert!(BasisPoints::new(10_001).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_complement() {
        assert_eq!(BasisPoints::new(3_333).unwrap().complement(), 6_667);
        assert_eq!(BasisPoints::ZERO.complement(), 10_000);
        assert_eq!(BasisPoints::FULL.complement(), 0);
    }

    #[test]
    fn test_as_fraction() {
        assert_eq!(BasisPoints::new(3_333).unwrap().as_fraction(), dec!(0.3333));
        assert_eq!(BasisPoints::new(5).unwrap().as_fraction(), dec!(0.0005));
        assert_eq!(BasisPoints::FULL.as_fraction(), dec!(1));
    }

    #[test]
    fn test_from_fraction() {
        assert_eq!(
            BasisPoints::from_fraction(dec!(0.0125)).unwrap().get(),
            125
        );
        assert_eq!(BasisPoints::from_fraction(dec!(1)).unwrap(), BasisPoints::FULL);
        assert_eq!(BasisPoints::from_fraction(dec!(0)).unwrap(), BasisPoints::ZERO);
    }

    #[test]
    fn test_from_fraction_rejects_out_of_range() {
        assert!(BasisPoints::from_fraction(dec!(-0.01)).is_err());
        assert!(BasisPoints::from_fraction(dec!(1.0001)).is_err());
    }

    #[test]
    fn test_from_fraction_rejects_sub_basis_point() {
        let err = BasisPoints::from_fraction(dec!(0.00005)).unwrap_err();
        assert!(err.to_string().contains("finer than one basis point"));
    }

    #[test]
    fn test_serde_validation() {
        assert_eq!(
            serde_json::from_str::<BasisPoints>("250").unwrap().get(),
            250
        );
        assert!(serde_json::from_str::<BasisPoints>("10001").is_err());
        assert_eq!(
            serde_json::to_string(&BasisPoints::new(250).unwrap()).unwrap(),
            "250"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(BasisPoints::new(3_333).unwrap().to_string(), "3333bp");
    }
}

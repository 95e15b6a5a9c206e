//! Validated value types for prices and rates.

mod money;
mod rate;

pub use money::Cents;
pub use rate::BasisPoints;

/// Basis points in one whole (10 000 bps = 100%)
pub const BPS_SCALE: i64 = 10_000;

/// Half of [`BPS_SCALE`], added before floor division to round half-up
pub const HALF_BPS_SCALE: i64 = BPS_SCALE / 2;

//! Pricing Core
//!
//! Integer discount pricing: a price in cents, a rate in basis points,
//! and the discounted price rounded half-up to the nearest cent.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Rounding, apply_discount, apply_discount_with};
pub use error::{PricingError, Result};
pub use values::{BPS_SCALE, BasisPoints, Cents, HALF_BPS_SCALE};

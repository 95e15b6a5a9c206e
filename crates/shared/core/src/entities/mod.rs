mod discount;

pub use discount::{Rounding, apply_discount, apply_discount_with};

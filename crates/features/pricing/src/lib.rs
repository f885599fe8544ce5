//! # Pricing
//!
//! Threshold-based price adjustments.
//!
//! Two independent rules are applied to a unit price:
//!
//! * a price strictly above **50** loses **2**;
//! * a quantity strictly above **100** loses **1** from the price.
//!
//! Both rules stack, so the largest possible deduction is 3. The result is not
//! clamped and may go negative for tiny prices.
//!
//! [`discount`] keeps the unchecked contract (`NaN` in, `NaN` out).
//! [`try_discount`] rejects prices that are not finite or are negative.
//!
//! ## Example
//!
//! ```rust
//! use kata_pricing::discount;
//!
//! assert_eq!(discount(51.0, 10), 49.0);
//! assert_eq!(discount(51.0, 101), 48.0);
//! ```

mod error;

pub use crate::error::{PricingError, PricingErrorExt};
pub use kata_domain::DiscountPolicy;

/// Applies the default [`DiscountPolicy`] to `value`.
#[must_use]
pub fn discount(value: f64, quantity: u32) -> f64 {
    discount_with(&DiscountPolicy::default(), value, quantity)
}

/// Applies the thresholds and deductions of `policy` to `value`.
#[must_use]
pub fn discount_with(policy: &DiscountPolicy, value: f64, quantity: u32) -> f64 {
    let mut result = value;
    if value > policy.value_threshold {
        result -= policy.value_deduction;
    }
    if quantity > policy.quantity_threshold {
        result -= policy.quantity_deduction;
    }

    tracing::trace!(value, quantity, result, "discount applied");
    result
}

/// Validated variant of [`discount`].
///
/// # Errors
/// * [`PricingError::InvalidValue`] if `value` is `NaN` or infinite.
/// * [`PricingError::NegativeValue`] if `value` is below zero.
pub fn try_discount(value: f64, quantity: u32) -> Result<f64, PricingError> {
    validate_value(value)?;
    Ok(discount(value, quantity))
}

fn validate_value(value: f64) -> Result<(), PricingError> {
    if !value.is_finite() {
        tracing::debug!(value, "rejected non-finite price");
        return Err(PricingError::InvalidValue {
            message: format!("price must be finite, got {value}").into(),
            context: None,
        });
    }

    if value < 0.0 {
        tracing::debug!(value, "rejected negative price");
        return Err(PricingError::NegativeValue {
            message: format!("price must not be negative, got {value}").into(),
            context: None,
        });
    }

    Ok(())
}

use kata_pricing::{DiscountPolicy, PricingError, PricingErrorExt, discount, discount_with, try_discount};

#[test]
fn value_above_threshold_loses_two() {
    assert_eq!(discount(51.0, 10), 49.0);
}

#[test]
fn quantity_above_threshold_loses_one() {
    assert_eq!(discount(50.0, 101), 49.0);
}

#[test]
fn both_deductions_stack() {
    assert_eq!(discount(51.0, 101), 48.0);
}

#[test]
fn custom_policy_is_honoured() {
    let policy = DiscountPolicy {
        value_threshold: 100.0,
        value_deduction: 10.0,
        quantity_threshold: 5,
        quantity_deduction: 0.5,
    };

    assert_eq!(discount_with(&policy, 51.0, 10), 50.5);
    assert_eq!(discount_with(&policy, 150.0, 1), 140.0);
}

#[test]
fn try_discount_matches_unchecked_on_valid_input() {
    assert_eq!(try_discount(51.0, 101).expect("valid price"), 48.0);
    assert_eq!(try_discount(0.0, 0).expect("zero price"), 0.0);
}

#[test]
fn try_discount_rejects_negative_price_with_context() {
    let err = try_discount(-1.0, 10).context("basket line 3").expect_err("negative price");

    assert!(matches!(err, PricingError::NegativeValue { context: Some(_), .. }));
    assert_eq!(err.to_string(), "Negative price (basket line 3): price must not be negative, got -1");
}

#[test]
fn try_discount_rejects_non_finite_price() {
    let err = try_discount(f64::INFINITY, 10).expect_err("infinite price");
    assert_eq!(err.to_string(), "Invalid price: price must be finite, got inf");
}

use serde::{Deserialize, Serialize};

/// Threshold rules applied by the discount calculator.
///
/// Each rule is independent: a price strictly above `value_threshold` loses
/// `value_deduction`, a quantity strictly above `quantity_threshold` loses
/// `quantity_deduction`. Both deductions stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountPolicy {
    pub value_threshold: f64,
    pub value_deduction: f64,
    pub quantity_threshold: u32,
    pub quantity_deduction: f64,
}

impl DiscountPolicy {
    /// Largest total deduction this policy can produce.
    #[must_use]
    pub const fn max_deduction(&self) -> f64 {
        self.value_deduction + self.quantity_deduction
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self {
            value_threshold: 50.0,
            value_deduction: 2.0,
            quantity_threshold: 100,
            quantity_deduction: 1.0,
        }
    }
}

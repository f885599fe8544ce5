//! Facade crate for the kata calculators.
//! Re-exports the domain types and both calculator crates under one roof.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - `kata::pricing::discount(51.0, 101)` for the discount rules.
//! - `kata::kinematics::distance_travelled(&scenario, 3.0)` for the distance formula.
//! - Enable the `logger` feature to get `kata::logger` for subscriber setup.

pub use kata_domain as domain;
pub use kata_kinematics as kinematics;
#[cfg(feature = "logger")]
pub use kata_logger as logger;
pub use kata_pricing as pricing;

pub use kata_domain::{DiscountPolicy, Scenario};

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        "pricing",
        "kinematics",
        #[cfg(feature = "logger")]
        "logger",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

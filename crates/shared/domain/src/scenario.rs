use serde::{Deserialize, Serialize};

/// A body pushed by a primary force from time zero and by an additional
/// secondary force once `delay` has elapsed.
///
/// Serialized with camelCase keys:
/// `{"primaryForce": 10, "secondaryForce": 20, "mass": 5, "delay": 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Scenario {
    pub primary_force: f64,
    pub secondary_force: f64,
    /// Must be strictly positive for the accelerations to be meaningful.
    pub mass: f64,
    /// Time after which the secondary force starts acting.
    pub delay: f64,
}

impl Scenario {
    #[must_use]
    pub const fn new(primary_force: f64, secondary_force: f64, mass: f64, delay: f64) -> Self {
        Self { primary_force, secondary_force, mass, delay }
    }

    /// Acceleration produced by the primary force alone.
    #[must_use]
    pub const fn primary_acceleration(&self) -> f64 {
        self.primary_force / self.mass
    }

    /// Acceleration once both forces act on the body.
    #[must_use]
    pub const fn combined_acceleration(&self) -> f64 {
        (self.primary_force + self.secondary_force) / self.mass
    }
}

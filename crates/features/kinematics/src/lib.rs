//! # Kinematics
//!
//! Displacement of a body under piecewise-constant acceleration.
//!
//! The primary force acts from time zero. Once `delay` has elapsed, the secondary force
//! joins it and the body keeps the velocity it reached at `delay`:
//!
//! ```text
//! t1 = min(t, delay)               d1 = ½·a1·t1²
//! t2 = t - delay   (when t > delay) d2 = a1·delay·t2 + ½·(a1 + a2)·t2²
//! ```
//!
//! with `a1 = primary / mass` and `a1 + a2 = (primary + secondary) / mass`.
//!
//! ## Example
//!
//! ```rust
//! use kata_kinematics::{Scenario, distance_travelled};
//!
//! let scenario = Scenario::new(10.0, 20.0, 5.0, 2.0);
//! assert_eq!(distance_travelled(&scenario, 1.0), 1.0);
//! assert_eq!(distance_travelled(&scenario, 5.0), 43.0);
//! ```

mod error;

pub use crate::error::{KinematicsError, KinematicsErrorExt};
pub use kata_domain::Scenario;

/// Distance covered by the body described by `scenario` after `time`.
///
/// Inputs are not checked; see [`try_distance_travelled`] for the validated variant.
#[must_use]
pub fn distance_travelled(scenario: &Scenario, time: f64) -> f64 {
    // `f64::min` drops a NaN operand, so NaN has to be passed through explicitly.
    if time.is_nan() || scenario.delay.is_nan() {
        return f64::NAN;
    }

    let primary_acc = scenario.primary_acceleration();
    let primary_time = time.min(scenario.delay);
    let mut result = 0.5 * primary_acc * primary_time * primary_time;

    let secondary_time = time - scenario.delay;
    if secondary_time > 0.0 {
        let primary_velocity = primary_acc * scenario.delay;
        let combined_acc = scenario.combined_acceleration();
        result += primary_velocity * secondary_time
            + 0.5 * combined_acc * secondary_time * secondary_time;
    }

    tracing::trace!(time, delay = scenario.delay, result, "distance travelled");
    result
}

/// Validated variant of [`distance_travelled`].
///
/// # Errors
/// * [`KinematicsError::InvalidScenario`] if [`validate_scenario`] rejects `scenario`.
/// * [`KinematicsError::InvalidTime`] if `time` is non-finite or negative.
pub fn try_distance_travelled(scenario: &Scenario, time: f64) -> Result<f64, KinematicsError> {
    validate_scenario(scenario)?;

    if !time.is_finite() || time < 0.0 {
        tracing::debug!(time, "rejected elapsed time");
        return Err(KinematicsError::InvalidTime {
            message: format!("time must be finite and non-negative, got {time}").into(),
            context: None,
        });
    }

    Ok(distance_travelled(scenario, time))
}

/// Checks that every field of `scenario` is finite, that forces and delay are
/// non-negative and that the mass is strictly positive.
///
/// # Errors
/// Returns [`KinematicsError::InvalidScenario`] naming the first offending field.
pub fn validate_scenario(scenario: &Scenario) -> Result<(), KinematicsError> {
    let fields = [
        ("primaryForce", scenario.primary_force),
        ("secondaryForce", scenario.secondary_force),
        ("mass", scenario.mass),
        ("delay", scenario.delay),
    ];

    for (name, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid_scenario(format!(
                "{name} must be finite and non-negative, got {value}"
            )));
        }
    }

    if scenario.mass <= 0.0 {
        return Err(invalid_scenario(format!("mass must be positive, got {}", scenario.mass)));
    }

    Ok(())
}

fn invalid_scenario(message: String) -> KinematicsError {
    tracing::debug!(%message, "rejected scenario");
    KinematicsError::InvalidScenario { message: message.into(), context: None }
}

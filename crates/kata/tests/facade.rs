use kata::kinematics::{distance_travelled, try_distance_travelled};
use kata::pricing::{discount, try_discount};
use kata::{Scenario, features};

#[test]
fn discount_scenarios() {
    assert_eq!(discount(51.0, 10), 49.0);
    assert_eq!(discount(50.0, 101), 49.0);
    assert_eq!(discount(51.0, 101), 48.0);
}

#[test]
fn distance_scenarios() {
    let scenario: Scenario = serde_json::from_str(
        r#"{ "primaryForce": 10, "secondaryForce": 20, "mass": 5, "delay": 2 }"#,
    )
    .expect("scenario json");

    assert_eq!(distance_travelled(&scenario, 1.0), 1.0);
    assert_eq!(distance_travelled(&scenario, 3.0), 11.0);
    assert_eq!(distance_travelled(&scenario, 5.0), 43.0);
}

#[test]
fn validated_entry_points_are_reachable() {
    assert!(try_discount(-5.0, 1).is_err());
    assert!(try_distance_travelled(&Scenario::new(1.0, 1.0, 0.0, 1.0), 1.0).is_err());
}

#[test]
fn calculators_are_always_enabled() {
    assert!(features::is_enabled("pricing"));
    assert!(features::is_enabled("kinematics"));
    assert!(!features::is_enabled("persistence"));
}

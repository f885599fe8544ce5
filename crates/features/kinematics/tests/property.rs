use kata_kinematics::{Scenario, distance_travelled, try_distance_travelled};
use proptest::prelude::*;

fn positive() -> impl Strategy<Value = f64> {
    0.1f64..100.0
}

proptest! {
    #[test]
    fn secondary_force_is_irrelevant_before_the_delay(
        primary in positive(),
        secondary_a in positive(),
        secondary_b in positive(),
        mass in positive(),
        delay in positive(),
        fraction in 0.0f64..=1.0,
    ) {
        let time = delay * fraction;
        let a = Scenario::new(primary, secondary_a, mass, delay);
        let b = Scenario::new(primary, secondary_b, mass, delay);
        prop_assert_eq!(distance_travelled(&a, time), distance_travelled(&b, time));
    }

    #[test]
    fn distance_never_decreases_with_time(
        primary in positive(),
        secondary in positive(),
        mass in positive(),
        delay in positive(),
        time in 0.0f64..50.0,
        step in 0.0f64..10.0,
    ) {
        let scenario = Scenario::new(primary, secondary, mass, delay);
        prop_assert!(distance_travelled(&scenario, time + step) >= distance_travelled(&scenario, time));
    }

    #[test]
    fn validated_and_unchecked_agree(
        primary in positive(),
        secondary in positive(),
        mass in positive(),
        delay in positive(),
        time in 0.0f64..50.0,
    ) {
        let scenario = Scenario::new(primary, secondary, mass, delay);
        prop_assert_eq!(
            try_distance_travelled(&scenario, time).ok(),
            Some(distance_travelled(&scenario, time))
        );
    }
}

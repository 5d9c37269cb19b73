use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;

use crate::position::Position;

#[test]
fn test_cylindrical_round_trip() {
    let pos = Position::from_cylindrical(26_000.0, 1.2, 50.0);
    assert_relative_eq!(pos.r(), 26_000.0, max_relative = 1e-12);
    assert_relative_eq!(pos.theta(), 1.2, max_relative = 1e-12);
    assert_relative_eq!(pos.z(), 50.0);
}

#[test]
fn test_theta_positive_folds_negative_azimuths() {
    let below_axis = Position::new(1.0, -1.0, 0.0);
    assert_relative_eq!(below_axis.theta(), -PI / 4.0);
    assert_relative_eq!(below_axis.theta_positive(), 7.0 * PI / 4.0);

    let on_axis = Position::new(0.0, 5.0, 0.0);
    assert_relative_eq!(on_axis.theta_positive(), FRAC_PI_2);
    assert!(Position::origin().theta_positive() < 1e-12);
}

#[test]
fn test_radii_and_distances() {
    let pos = Position::new(3.0, 4.0, 12.0);
    assert_relative_eq!(pos.r(), 5.0);
    assert_relative_eq!(pos.spherical_radius(), 13.0);
    assert_relative_eq!(pos.distance_to(&Position::origin()), 13.0);
    assert_eq!(Position::from([3.0, 4.0, 12.0]), pos);
    assert_eq!(pos.as_array(), [3.0, 4.0, 12.0]);
}

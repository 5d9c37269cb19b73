use std::f64::consts::PI;

use approx::assert_relative_eq;

use crate::config::SpiralArmConfig;
use crate::spiral::{wrap_angle, SpiralArm};

#[test]
fn test_wrap_angle_stays_in_half_open_range() {
    assert_relative_eq!(wrap_angle(0.0), 0.0);
    assert_relative_eq!(wrap_angle(3.0 * PI), PI, epsilon = 1e-12);
    assert_relative_eq!(wrap_angle(-PI / 2.0 - 2.0 * PI), -PI / 2.0, epsilon = 1e-12);
    for k in -20..20 {
        let w = wrap_angle(k as f64 * 0.7);
        assert!(w > -PI && w <= PI, "{} wrapped to {}", k, w);
    }
}

#[test]
fn test_strength_peaks_on_centerline() {
    let config = SpiralArmConfig::default();
    let r = 26_000.0;
    for arm in SpiralArm::ALL {
        let theta = arm.centerline_angle(r, &config);
        assert_relative_eq!(arm.strength(r, theta, &config), 1.0, epsilon = 1e-12);
        // A quarter turn away the Gaussian has vanished
        assert!(arm.strength(r, theta + PI / 4.0, &config) < 1e-6);
    }
}

#[test]
fn test_strength_falls_off_with_physical_distance() {
    let config = SpiralArmConfig::default();
    let r = 20_000.0;
    let arm = SpiralArm::Perseus;
    let theta = arm.centerline_angle(r, &config);
    // One width away along the azimuth is exp(-1/2)
    let one_sigma = theta + config.width_ly / r;
    assert_relative_eq!(
        arm.strength(r, one_sigma, &config),
        (-0.5_f64).exp(),
        max_relative = 1e-9
    );
}

#[test]
fn test_arms_absent_inside_onset_radius() {
    let config = SpiralArmConfig::default();
    for arm in SpiralArm::ALL {
        let theta = arm.centerline_angle(5_000.0, &config);
        assert_eq!(arm.strength(5_000.0, theta, &config), 0.0);
        assert_eq!(arm.strength(0.0, 0.0, &config), 0.0);
    }
}

#[test]
fn test_arm_names() {
    assert_eq!(SpiralArm::ScutumCentaurus.to_string(), "Scutum-Centaurus");
    assert_eq!(SpiralArm::ALL.len(), 4);
}

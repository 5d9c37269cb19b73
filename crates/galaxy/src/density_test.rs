use std::f64::consts::PI;

use approx::assert_relative_eq;

use crate::calibration::calibrated_stars_per_cubic_ly;
use crate::density::DensityField;
use crate::population::Region;
use crate::position::Position;
use crate::spiral::SpiralArm;

/// Azimuth halfway between two adjacent arms at radius `r`.
fn inter_arm_theta(field: &DensityField, r: f64) -> f64 {
    SpiralArm::Perseus.centerline_angle(r, &field.config().arms) + PI / 4.0
}

#[test]
fn test_density_is_normalized_everywhere() {
    let field = DensityField::default();
    for r in (0..=160_000).step_by(2_500) {
        for z in [-12_000.0, -3_000.0, -100.0, 0.0, 250.0, 5_000.0] {
            for theta in [0.0, 0.9, 2.3, 4.0] {
                let d = field.density(&Position::from_cylindrical(r as f64, theta, z));
                assert!((0.0..=1.0).contains(&d), "density {} at r={} z={}", d, r, z);
            }
        }
    }
}

#[test]
fn test_density_continuous_across_band_edges() {
    let field = DensityField::default();
    let eps = 1e-4;
    // scale height transition, arm onset, halo onset/fade, population cuts, edge taper
    let edges = [
        3_000.0, 6_000.0, 8_000.0, 10_000.0, 12_000.0, 40_000.0, 50_000.0, 60_000.0, 140_000.0,
        150_000.0,
    ];
    for edge in edges {
        for z in [0.0, 400.0, 2_500.0] {
            for theta in [0.3, 1.7, 3.9, 5.5] {
                let inside = field.density(&Position::from_cylindrical(edge - eps, theta, z));
                let outside = field.density(&Position::from_cylindrical(edge + eps, theta, z));
                assert!(
                    (inside - outside).abs() < 1e-5,
                    "jump at r={} z={} theta={}: {} vs {}",
                    edge,
                    z,
                    theta,
                    inside,
                    outside
                );
            }
        }
    }
}

#[test]
fn test_stars_per_cubic_ly_continuous_across_calibration_checkpoints() {
    let field = DensityField::default();
    let eps = 1e-4;
    for edge in [500.0, 1_500.0, 3_000.0, 6_000.0, 10_000.0, 18_000.0, 26_000.0, 35_000.0] {
        let theta = inter_arm_theta(&field, edge);
        let inside = field.stars_per_cubic_ly(&Position::from_cylindrical(edge - eps, theta, 0.0));
        let outside = field.stars_per_cubic_ly(&Position::from_cylindrical(edge + eps, theta, 0.0));
        assert_relative_eq!(inside, outside, max_relative = 1e-4);
    }
}

#[test]
fn test_scale_height_flares_smoothly() {
    let field = DensityField::default();
    assert_relative_eq!(field.scale_height(0.0), 3_000.0);
    assert_relative_eq!(field.scale_height(3_000.0), 3_000.0);
    assert_relative_eq!(field.scale_height(10_000.0), 1_000.0);
    assert_relative_eq!(field.scale_height(50_000.0), 1_000.0);
    let mid = field.scale_height(6_500.0);
    assert!(mid < 3_000.0 && mid > 1_000.0);
}

#[test]
fn test_density_falls_with_height_and_radius() {
    let field = DensityField::default();
    let theta = inter_arm_theta(&field, 26_000.0);
    let plane = field.density(&Position::from_cylindrical(26_000.0, theta, 0.0));
    let above = field.density(&Position::from_cylindrical(26_000.0, theta, 2_000.0));
    assert!(plane > above);

    let center = field.density(&Position::origin());
    assert!(center > plane);
}

#[test]
fn test_halo_only_beyond_onset() {
    let field = DensityField::default();
    assert_eq!(field.halo_term(&Position::new(30_000.0, 0.0, 0.0)), 0.0);
    assert!(field.halo_term(&Position::new(80_000.0, 0.0, 0.0)) > 0.0);
}

#[test]
fn test_arm_multiplier_baseline_is_one() {
    let field = DensityField::default();
    let r = 26_000.0;
    let between = Position::from_cylindrical(r, inter_arm_theta(&field, r), 0.0);
    assert_relative_eq!(field.arm_multiplier(&between), 1.0, epsilon = 1e-12);

    let on_arm = Position::from_cylindrical(
        r,
        SpiralArm::Norma.centerline_angle(r, &field.config().arms),
        0.0,
    );
    assert_relative_eq!(field.arm_multiplier(&on_arm), 2.5, epsilon = 1e-9);
    assert!(field.density(&on_arm) > field.density(&between));
}

#[test]
fn test_inter_arm_midplane_matches_calibration() {
    let field = DensityField::default();
    for r in [18_000.0, 26_000.0, 35_000.0] {
        let pos = Position::from_cylindrical(r, inter_arm_theta(&field, r), 0.0);
        assert_relative_eq!(
            field.stars_per_cubic_ly(&pos),
            calibrated_stars_per_cubic_ly(r),
            max_relative = 1e-9
        );
    }
}

#[test]
fn test_nothing_beyond_the_edge() {
    let field = DensityField::default();
    let pos = Position::new(151_000.0, 0.0, 0.0);
    assert_eq!(field.density(&pos), 0.0);
    assert_eq!(field.stars_per_cubic_ly(&pos), 0.0);
}

#[test]
fn test_region_labels_follow_position() {
    let field = DensityField::default();
    assert_eq!(field.region(&Position::new(100.0, 0.0, 50.0)), Region::GalacticCore);
    assert_eq!(field.region(&Position::new(3_000.0, 0.0, 0.0)), Region::Bulge);
    assert_eq!(field.region(&Position::new(0.0, 90_000.0, 0.0)), Region::Halo);

    let r = 26_000.0;
    let on_arm = Position::from_cylindrical(
        r,
        SpiralArm::Sagittarius.centerline_angle(r, &field.config().arms),
        0.0,
    );
    assert_eq!(field.region(&on_arm), Region::SpiralArm(SpiralArm::Sagittarius));

    let between = Position::from_cylindrical(r, inter_arm_theta(&field, r), 0.0);
    assert_eq!(field.region(&between), Region::OuterDisk);
    let inner = Position::from_cylindrical(15_000.0, inter_arm_theta(&field, 15_000.0), 0.0);
    assert_eq!(field.region(&inner), Region::InnerDisk);
}

#[test]
fn test_outer_disc_flag() {
    let field = DensityField::default();
    assert!(!field.is_outer_disc(&Position::new(26_000.0, 0.0, 0.0)));
    assert!(field.is_outer_disc(&Position::new(0.0, 55_000.0, 0.0)));
}

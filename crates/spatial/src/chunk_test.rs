use std::f64::consts::PI;

use approx::assert_relative_eq;
use galaxy::Position;

use crate::chunk::{ChunkCoord, CHUNK_SIZE_LY};
use crate::error::SpatialError;

#[test]
fn test_parses_and_prints_r_theta_z() {
    let chunk: ChunkCoord = "260_45_-3".parse().unwrap();
    assert_eq!(chunk.radial(), 260);
    assert_eq!(chunk.angular(), 45);
    assert_eq!(chunk.vertical(), -3);
    assert_eq!(chunk.to_string(), "260_45_-3");
    assert_eq!(chunk.to_string().parse::<ChunkCoord>().unwrap(), chunk);
}

#[test]
fn test_rejects_malformed_text() {
    for text in ["", "260_45", "260_45_0_1", "a_45_0", "260__0", "260_45_0.5"] {
        assert!(
            matches!(
                text.parse::<ChunkCoord>(),
                Err(SpatialError::MalformedChunk(_))
            ),
            "{:?} should be malformed",
            text
        );
    }
}

#[test]
fn test_rejects_out_of_range_text() {
    assert!(matches!(
        "1500_0_0".parse::<ChunkCoord>(),
        Err(SpatialError::FieldOutOfRange { field: "radial", .. })
    ));
    assert!(matches!(
        "0_360_0".parse::<ChunkCoord>(),
        Err(SpatialError::FieldOutOfRange { field: "angular", .. })
    ));
    assert!(matches!(
        "0_0_-128".parse::<ChunkCoord>(),
        Err(SpatialError::FieldOutOfRange { field: "vertical", .. })
    ));
}

#[test]
fn test_bounds_follow_coordinates() {
    let bounds = ChunkCoord::new(260, 90, -1).unwrap().bounds();
    assert_relative_eq!(bounds.r_min, 26_000.0);
    assert_relative_eq!(bounds.r_max, 26_100.0);
    assert_relative_eq!(bounds.theta_min, PI / 2.0);
    assert_relative_eq!(bounds.theta_max, (91.0_f64).to_radians());
    assert_relative_eq!(bounds.z_min, -100.0);
    assert_relative_eq!(bounds.z_max, 0.0);
}

#[test]
fn test_innermost_chunk_volume_is_a_wedge() {
    let bounds = ChunkCoord::new(0, 0, 0).unwrap().bounds();
    let d_theta = 1.0_f64.to_radians();
    let wedge = 0.5 * d_theta * CHUNK_SIZE_LY * CHUNK_SIZE_LY * CHUNK_SIZE_LY;
    assert_relative_eq!(bounds.volume(), wedge, max_relative = 1e-12);

    // An annulus chunk further out is larger by the area ratio
    let annulus = ChunkCoord::new(1, 0, 0).unwrap().bounds();
    assert_relative_eq!(annulus.volume(), 3.0 * wedge, max_relative = 1e-12);
}

#[test]
fn test_volumes_tile_a_full_ring() {
    let ring: f64 = (0..360)
        .map(|theta| ChunkCoord::new(260, theta, 0).unwrap().bounds().volume())
        .sum();
    let expected = PI * (26_100.0_f64.powi(2) - 26_000.0_f64.powi(2)) * CHUNK_SIZE_LY;
    assert_relative_eq!(ring, expected, max_relative = 1e-9);
}

#[test]
fn test_center_lies_inside_and_maps_back() {
    for (r, theta, z) in [(0, 0, 0), (260, 45, 3), (1_499, 359, -127), (17, 200, 127)] {
        let chunk = ChunkCoord::new(r, theta, z).unwrap();
        let center = chunk.bounds().center();
        assert!(chunk.bounds().contains(&center), "{} center escaped", chunk);
        assert_eq!(ChunkCoord::from_position(&center).unwrap(), chunk);
    }
}

#[test]
fn test_from_position_handles_negative_azimuth_and_height() {
    let pos = Position::from_cylindrical(26_050.0, -0.5_f64.to_radians(), -50.0);
    let chunk = ChunkCoord::from_position(&pos).unwrap();
    assert_eq!(chunk.radial(), 260);
    assert_eq!(chunk.angular(), 359);
    assert_eq!(chunk.vertical(), -1);
}

#[test]
fn test_from_position_rejects_points_outside_the_grid() {
    assert!(ChunkCoord::from_position(&Position::new(150_000.0, 0.0, 0.0)).is_err());
    assert!(ChunkCoord::from_position(&Position::new(1_000.0, 0.0, 12_800.0)).is_err());
}

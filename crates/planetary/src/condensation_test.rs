use approx::assert_relative_eq;
use units::Length;

use crate::condensation::{CondensationLines, CondensationZone};

#[test]
fn test_solar_lines() {
    let lines = CondensationLines::from_luminosity(1.0);
    assert_relative_eq!(lines.rock.to_au(), 0.0457);
    assert_relative_eq!(lines.soot.to_au(), 0.309);
    assert_relative_eq!(lines.frost.to_au(), 2.67);
}

#[test]
fn test_lines_scale_with_root_luminosity() {
    let sun = CondensationLines::from_luminosity(1.0);
    let bright = CondensationLines::from_luminosity(100.0);
    assert_relative_eq!(bright.frost.to_au(), 10.0 * sun.frost.to_au(), epsilon = 1e-12);
}

#[test]
fn test_dark_host_keeps_ordered_lines() {
    let lines = CondensationLines::from_luminosity(0.0);
    assert!(lines.rock.to_au() > 0.0);
    assert!(lines.rock < lines.soot);
    assert!(lines.soot < lines.frost);
}

#[test]
fn test_zones_for_sun() {
    let lines = CondensationLines::from_luminosity(1.0);
    assert_eq!(lines.zone(Length::from_au(0.02)), CondensationZone::Molten);
    assert_eq!(lines.zone(Length::from_au(0.2)), CondensationZone::Silicate);
    assert_eq!(lines.zone(Length::from_au(1.0)), CondensationZone::Carbonaceous);
    assert_eq!(lines.zone(Length::from_au(5.2)), CondensationZone::Icy);
    // boundaries belong to the outer zone
    assert_eq!(lines.zone(lines.frost), CondensationZone::Icy);
}

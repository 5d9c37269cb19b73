use approx::assert_relative_eq;
use galaxy::{Population, Region, SeedStream};
use planetary::generate_planets;
use stellar::{SpectralType, StellarProperties, StellarType};
use units::{Length, Mass};

use crate::stability::{
    apply_stable_zone, inner_limit, nearest_neighbour, Neighbour, StableZone, CLOSE_COMPANION_AU,
    MIN_INNER_LIMIT_AU,
};

fn sunlike() -> StellarProperties {
    StellarProperties::from_mass(
        StellarType::MainSequence(SpectralType::G),
        1.0,
        0.0,
        Population::ThinDisk,
        Region::InnerDisk,
    )
}

fn neighbour(separation_au: f64, mass: f64) -> Neighbour {
    Neighbour {
        separation: Length::from_au(separation_au),
        mass: Mass::from_solar_masses(mass),
    }
}

#[test]
fn test_inner_limit_for_sunlike_star() {
    let inner = inner_limit(&sunlike()).to_au();
    assert!(inner >= MIN_INNER_LIMIT_AU);
    assert!(inner < 0.05, "inner limit {inner}");
}

#[test]
fn test_outer_factor_scales_with_mass_ratio() {
    let star = sunlike();
    let equal = StableZone::new(&star, neighbour(50.0, 1.0));
    assert_relative_eq!(equal.outer.to_au(), 50.0 * 0.2, epsilon = 1e-9);

    let light = StableZone::new(&star, neighbour(50.0, 0.01));
    let mu = 0.01 / 1.01;
    assert_relative_eq!(light.outer.to_au(), 50.0 * (0.3 - 0.2 * mu), epsilon = 1e-9);
    assert!(light.outer > equal.outer);
}

#[test]
fn test_outer_factor_clamped() {
    let star = sunlike();
    let heavy = StableZone::new(&star, neighbour(50.0, 100.0));
    assert_relative_eq!(heavy.outer.to_au(), 10.0, epsilon = 1e-9);
}

#[test]
fn test_zone_only_for_close_neighbours() {
    let star = sunlike();
    assert!(StableZone::for_neighbour(&star, Some(neighbour(150.0, 0.5))).is_none());
    assert!(StableZone::for_neighbour(&star, Some(neighbour(100.0, 0.5))).is_none());
    assert!(StableZone::for_neighbour(&star, Some(neighbour(99.0, 0.5))).is_some());
    assert!(StableZone::for_neighbour(&star, None).is_none());
}

#[test]
fn test_nearest_neighbour_is_hierarchical() {
    let members = [
        (Length::zero(), Mass::from_solar_masses(1.0)),
        (Length::from_au(10.0), Mass::from_solar_masses(0.5)),
        (Length::from_au(40.0), Mass::from_solar_masses(0.3)),
    ];

    let primary = nearest_neighbour(0, &members).expect("primary has neighbours");
    assert_relative_eq!(primary.separation.to_au(), 10.0);
    assert_eq!(primary.mass, Mass::from_solar_masses(0.5));

    let b = nearest_neighbour(1, &members).expect("B has neighbours");
    assert_relative_eq!(b.separation.to_au(), 10.0);
    assert_eq!(b.mass, Mass::from_solar_masses(1.0));

    let c = nearest_neighbour(2, &members).expect("C has neighbours");
    assert_relative_eq!(c.separation.to_au(), 40.0);
    assert_eq!(c.mass, Mass::from_solar_masses(1.0));
}

#[test]
fn test_companions_at_same_separation_are_not_close() {
    let members = [
        (Length::zero(), Mass::from_solar_masses(1.0)),
        (Length::from_au(1000.0), Mass::from_solar_masses(0.4)),
        (Length::from_au(1000.0), Mass::from_solar_masses(0.3)),
    ];
    for index in 1..3 {
        let nearest = nearest_neighbour(index, &members).expect("companion has neighbours");
        assert_relative_eq!(nearest.separation.to_au(), 1000.0);

        let star = StellarProperties::from_mass(
            StellarType::MainSequence(SpectralType::M),
            members[index].1.to_solar_masses(),
            0.0,
            Population::ThinDisk,
            Region::InnerDisk,
        );
        let zone = StableZone::for_neighbour(&star, Some(nearest));
        assert!(zone.is_none());

        let mut planets = generate_planets(&star, SeedStream::new(index as u64));
        let total = planets.len();
        assert_eq!(apply_stable_zone(&mut planets, zone), 0);
        assert_eq!(planets.len(), total);
    }
}

#[test]
fn test_far_companion_pair_uses_wider_separation() {
    let members = [
        (Length::zero(), Mass::from_solar_masses(1.0)),
        (Length::from_au(950.0), Mass::from_solar_masses(0.5)),
        (Length::from_au(1000.0), Mass::from_solar_masses(0.5)),
    ];
    let nearest = nearest_neighbour(2, &members).expect("D has neighbours");
    assert_relative_eq!(nearest.separation.to_au(), 1000.0);
    assert!(nearest.separation.to_au() >= CLOSE_COMPANION_AU);
}

#[test]
fn test_empty_zone_is_flagged() {
    let star = sunlike();
    let tight = StableZone::new(&star, neighbour(0.01, 1.0));
    assert!(tight.is_empty());
    assert!(!StableZone::new(&star, neighbour(50.0, 1.0)).is_empty());
}

#[test]
fn test_single_star_has_no_neighbour() {
    let members = [(Length::zero(), Mass::from_solar_masses(1.0))];
    assert!(nearest_neighbour(0, &members).is_none());
    assert!(nearest_neighbour(3, &members).is_none());
}

#[test]
fn test_filtering_keeps_zone_and_renumbers() {
    let star = sunlike();
    let zone = StableZone::new(&star, neighbour(5.0, 0.8));
    for seed in 0..300 {
        let mut planets = generate_planets(&star, SeedStream::new(seed));
        let total = planets.len();
        let dropped = apply_stable_zone(&mut planets, Some(zone));
        assert_eq!(dropped + planets.len(), total);
        for (i, planet) in planets.iter().enumerate() {
            assert!(zone.contains(planet.semi_major_axis));
            assert_eq!(planet.number, i as u32 + 1);
        }
    }
}

#[test]
fn test_filtering_is_idempotent() {
    let star = sunlike();
    let zone = StableZone::new(&star, neighbour(8.0, 0.5));
    for seed in 0..300 {
        let mut once = generate_planets(&star, SeedStream::new(seed));
        apply_stable_zone(&mut once, Some(zone));
        let mut twice = once.clone();
        assert_eq!(apply_stable_zone(&mut twice, Some(zone)), 0);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_no_zone_keeps_everything() {
    let star = sunlike();
    let mut planets = generate_planets(&star, SeedStream::new(4));
    let before = planets.clone();
    assert_eq!(apply_stable_zone(&mut planets, None), 0);
    assert_eq!(planets, before);
}

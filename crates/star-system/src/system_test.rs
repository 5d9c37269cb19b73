use std::collections::HashSet;

use galaxy::{Population, Region};
use stellar::{SpectralType, StellarProperties, StellarType};

use crate::companion::SEPARATION_RANGE_AU;
use crate::stability::CLOSE_COMPANION_AU;
use crate::system::{generate_system, StarSystem, SystemNode, SystemPath, PRIMARY_DESIGNATOR};

fn primary(stellar_type: StellarType, mass: f64) -> StellarProperties {
    StellarProperties::from_mass(stellar_type, mass, 0.1, Population::ThinDisk, Region::InnerDisk)
}

fn systems(stellar_type: StellarType, mass: f64, seeds: u64) -> Vec<StarSystem> {
    (0..seeds)
        .map(|seed| generate_system(seed, primary(stellar_type, mass)))
        .collect()
}

#[test]
fn test_generation_is_deterministic() {
    let props = primary(StellarType::MainSequence(SpectralType::G), 1.0);
    assert_eq!(
        generate_system(12345678, props.clone()),
        generate_system(12345678, props)
    );
}

#[test]
fn test_different_seeds_differ() {
    let props = primary(StellarType::MainSequence(SpectralType::G), 1.0);
    let a = generate_system(1, props.clone());
    let b = generate_system(2, props);
    assert_ne!(a, b);
}

#[test]
fn test_designators_and_separations() {
    for system in systems(StellarType::MainSequence(SpectralType::F), 1.3, 500) {
        assert_eq!(system.primary.designator, PRIMARY_DESIGNATOR);
        assert!(system.primary.is_primary());
        assert!(system.companions.len() <= 3);
        for (i, companion) in system.companions.iter().enumerate() {
            assert_eq!(companion.designator, ['B', 'C', 'D'][i]);
            let au = companion.separation.to_au();
            assert!(au >= SEPARATION_RANGE_AU.0 && au <= SEPARATION_RANGE_AU.1);
        }
    }
}

#[test]
fn test_planets_respect_stable_zone_with_close_companion() {
    let mut filtered = 0;
    for system in systems(StellarType::MainSequence(SpectralType::G), 1.0, 800) {
        for star in system.stars() {
            if let Some(zone) = star.stable_zone {
                filtered += 1;
                for planet in &star.planets {
                    assert!(zone.contains(planet.semi_major_axis));
                }
            }
            for (i, planet) in star.planets.iter().enumerate() {
                assert_eq!(planet.number, i as u32 + 1);
            }
        }
        if let Some(nearest) = system.companions.first() {
            let close = nearest.separation.to_au() < CLOSE_COMPANION_AU;
            assert_eq!(system.primary.stable_zone.is_some(), close);
        } else {
            assert!(system.primary.stable_zone.is_none());
        }
    }
    assert!(filtered > 0);
}

#[test]
fn test_remnants_have_more_companions() {
    let count = |systems: Vec<StarSystem>| systems.iter().filter(|s| s.is_multiple()).count();
    let dwarfs = count(systems(StellarType::MainSequence(SpectralType::M), 0.3, 1000));
    let remnants = count(systems(StellarType::WhiteDwarf, 0.6, 1000));
    assert!(remnants > 2 * dwarfs);
}

#[test]
fn test_walk_visits_every_member_once() {
    for system in systems(StellarType::MainSequence(SpectralType::K), 0.7, 300) {
        let nodes: Vec<SystemNode<'_>> = system.walk().collect();
        let expected =
            1 + system.companions.len() + system.planet_count() + system.moon_count();
        assert_eq!(nodes.len(), expected);

        let paths: HashSet<SystemPath> = nodes.iter().map(SystemNode::path).collect();
        assert_eq!(paths.len(), nodes.len());
    }
}

#[test]
fn test_walk_order_is_depth_first() {
    let system = systems(StellarType::MainSequence(SpectralType::G), 1.0, 200)
        .into_iter()
        .find(|s| s.primary.planets.iter().any(|p| !p.moons.is_empty()))
        .expect("a primary planet with moons");
    let mut nodes = system.walk();
    assert!(matches!(nodes.next(), Some(SystemNode::Star(star)) if star.is_primary()));
    assert!(matches!(nodes.next(), Some(SystemNode::Planet { planet, .. }) if planet.number == 1));
}

#[test]
fn test_path_display() {
    let primary_moon = SystemPath {
        star: 'A',
        planet: Some(2),
        moon: Some('b'),
    };
    assert_eq!(primary_moon.to_string(), "2-b");

    let companion_planet = SystemPath {
        star: 'B',
        planet: Some(1),
        moon: None,
    };
    assert_eq!(companion_planet.to_string(), "B-1");
    assert_eq!(SystemPath::star('C').to_string(), "C");
    assert_eq!(SystemPath::star('A').to_string(), "");
}

#[test]
fn test_star_lookup() {
    let system = systems(StellarType::MainSequence(SpectralType::B), 5.0, 100)
        .into_iter()
        .find(StarSystem::is_multiple)
        .expect("a multiple B-star system");
    assert_eq!(system.star('A'), Some(&system.primary));
    assert_eq!(system.star('B'), system.companions.first());
    assert!(system.star('E').is_none());
}

#[test]
fn test_solitary_system() {
    let system = StarSystem::solitary(0, primary(StellarType::BlackHole, 10.0));
    assert!(!system.is_multiple());
    assert_eq!(system.planet_count(), 0);
    assert_eq!(system.walk().count(), 1);
}

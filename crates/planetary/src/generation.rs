//! Planetary system generation for a single star
//!
//! Orbits are laid out inside-out: the first orbit scales with √L, every
//! further orbit multiplies the previous distance by a jittered 1.4–1.8
//! spacing factor (a loose Titius–Bode ladder). Each orbit draws its mass
//! from the occurrence table of its band relative to the frost line, then its
//! type from the condensation zone it sits in.

use galaxy::SeedStream;
use rand::Rng;
use stellar::sampling::sample_uniform;
use stellar::StellarProperties;
use units::{Length, Mass};

use crate::condensation::CondensationLines;
use crate::moon::generate_moons;
use crate::planet::{equilibrium_temperature, Planet};
use crate::planet_class::PlanetClass;
use crate::planet_type::PlanetType;
use crate::sampling::{sample_planet_count, sample_planet_mass, OrbitalBand};

/// Maximum planet-to-star mass ratio
/// Prevents unrealistic massive planets around low-mass stars
pub const MAX_PLANET_STAR_MASS_RATIO: f64 = 0.01;

/// Probability that a planet has a same-slot binary partner
pub const BINARY_PLANET_PROBABILITY: f64 = 0.015;

/// Jitter on the innermost orbit
pub const FIRST_ORBIT_JITTER: (f64, f64) = (0.5, 1.5);

/// Ratio between consecutive orbits
pub const ORBIT_SPACING: (f64, f64) = (1.4, 1.8);

/// Binary partner mass as a fraction of the slot's first planet
const PARTNER_MASS_FRACTION: (f64, f64) = (0.3, 1.0);

/// Scale of the innermost orbit: `0.1·√L` AU, with a mass floor for dark hosts.
pub fn inner_orbit_scale(star: &StellarProperties) -> Length {
    let by_luminosity = star.luminosity.max(0.0).sqrt();
    let by_mass = 0.1 * star.mass.to_solar_masses().cbrt();
    Length::from_au(0.1 * by_luminosity.max(by_mass))
}

/// Planets of `star` in orbital order, numbered from 1, without moons.
pub fn generate_planets(star: &StellarProperties, stream: SeedStream) -> Vec<Planet> {
    let mut rng = stream.rng();
    let count = sample_planet_count(&mut rng, &star.stellar_type, star.metallicity);

    let lines = CondensationLines::from_luminosity(star.luminosity);
    let mass_cap = star.mass.to_earth_masses() * MAX_PLANET_STAR_MASS_RATIO;
    let jitter = sample_uniform(&mut rng, FIRST_ORBIT_JITTER.0, FIRST_ORBIT_JITTER.1);
    let mut distance = inner_orbit_scale(star) * jitter;

    let mut planets: Vec<Planet> = Vec::with_capacity(count as usize);
    for orbit in 0..count {
        if orbit > 0 {
            distance = distance * sample_uniform(&mut rng, ORBIT_SPACING.0, ORBIT_SPACING.1);
        }
        let band = OrbitalBand::from_distance(distance, lines.frost);
        let mass_earth = sample_planet_mass(&mut rng, band, star.metallicity).min(mass_cap);
        let type_roll: f64 = rng.random();
        let binary = rng.random::<f64>() < BINARY_PLANET_PROBABILITY;
        let partner_fraction =
            sample_uniform(&mut rng, PARTNER_MASS_FRACTION.0, PARTNER_MASS_FRACTION.1);

        let zone = lines.zone(distance);
        let slot = planets.len() as u32;
        planets.push(planet(
            slot,
            mass_earth,
            PlanetType::classify(mass_earth, zone, type_roll),
            distance,
            star,
        ));

        // gas giants never pair up
        if binary && mass_earth < PlanetClass::VOLATILE_GIANT_THRESHOLD {
            let partner_mass = mass_earth * partner_fraction;
            let mut partner = planet(
                slot + 1,
                partner_mass,
                PlanetType::classify(partner_mass, zone, type_roll),
                distance,
                star,
            );
            partner.binary_partner = Some(slot + 1);
            if let Some(first) = planets.last_mut() {
                first.binary_partner = Some(slot + 2);
            }
            planets.push(partner);
        }
    }
    planets
}

/// Renumbers `planets` 1..M in order and remaps binary-partner references.
///
/// A partner reference whose planet is gone is cleared.
pub fn renumber(planets: &mut [Planet]) {
    let remap: Vec<(u32, u32)> = planets
        .iter()
        .enumerate()
        .map(|(i, p)| (p.number, i as u32 + 1))
        .collect();
    for (planet, &(_, number)) in planets.iter_mut().zip(&remap) {
        planet.number = number;
        planet.binary_partner = planet.binary_partner.and_then(|old| {
            remap
                .iter()
                .find(|(previous, _)| *previous == old)
                .map(|&(_, new)| new)
        });
    }
}

/// Generates moons for every planet, keying each planet's stream by its slot.
pub fn attach_moons(planets: &mut [Planet], host_mass: Mass, stream: SeedStream) {
    for planet in planets.iter_mut() {
        planet.moons = generate_moons(planet, host_mass, stream.child(u64::from(planet.slot)));
    }
}

fn planet(
    slot: u32,
    mass_earth: f64,
    planet_type: PlanetType,
    distance: Length,
    star: &StellarProperties,
) -> Planet {
    let (hz_inner, hz_outer) = star.habitable_zone();
    Planet {
        number: slot + 1,
        slot,
        planet_type,
        class: PlanetClass::from_earth_masses(mass_earth),
        mass: Mass::from_earth_masses(mass_earth),
        radius: Length::from_earth_radii(PlanetClass::radius_earth(mass_earth)),
        semi_major_axis: distance,
        equilibrium_temperature: equilibrium_temperature(distance, star.luminosity),
        habitable: distance >= hz_inner && distance <= hz_outer,
        binary_partner: None,
        moons: Vec::new(),
    }
}

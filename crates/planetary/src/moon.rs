//! Moon generation
//!
//! Moons orbit between the parent's Roche limit and 0.4 Hill radii, the
//! outer edge of long-term prograde stability (Domingos et al. 2006). Their
//! composition follows the parent: terrestrial parents capture or spall rocky
//! moons, giants co-accrete icy ones, and the innermost moon of a gas giant
//! may be tidally heated.

use galaxy::SeedStream;
use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::sampling::{pick_band, sample_uniform};
use units::{Length, Mass};

use crate::planet::{bulk_density, hill_radius, roche_limit, EARTH_DENSITY, Planet};
use crate::planet_type::PlanetType;
use crate::sampling::{sample_moon_count, MoonHostClass, MAX_MOONS};

/// Stable orbits extend to this fraction of the Hill radius
pub const HILL_STABILITY_FRACTION: f64 = 0.4;

/// Probability that a moon has a same-orbit binary partner
pub const BINARY_MOON_PROBABILITY: f64 = 0.01;

type CompositionBands = &'static [(MoonComposition, f64)];

const TERRESTRIAL_PARENT: CompositionBands = &[(MoonComposition::Rocky, 0.8)];
const ICE_PARENT: CompositionBands = &[(MoonComposition::Icy, 0.7)];
const ICE_GIANT_PARENT: CompositionBands =
    &[(MoonComposition::Icy, 0.6), (MoonComposition::Mixed, 0.3)];
const GAS_GIANT_PARENT: CompositionBands =
    &[(MoonComposition::Icy, 0.5), (MoonComposition::Mixed, 0.3)];
const GAS_GIANT_INNERMOST: CompositionBands = &[
    (MoonComposition::Volcanic, 0.3),
    (MoonComposition::Icy, 0.35),
    (MoonComposition::Mixed, 0.2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoonComposition {
    /// Silicate body (Luna)
    Rocky,
    /// Rock and ice in similar parts (Ganymede, Titan)
    Mixed,
    /// Ice-dominated (Enceladus, Mimas)
    Icy,
    /// Tidally heated silicate body (Io)
    Volcanic,
}

impl MoonComposition {
    /// Bulk density in g/cm³
    pub fn density(&self) -> f64 {
        match self {
            Self::Rocky => 3.3,
            Self::Mixed => 2.5,
            Self::Icy => 1.6,
            Self::Volcanic => 3.5,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Rocky => "rocky",
            Self::Mixed => "mixed",
            Self::Icy => "icy",
            Self::Volcanic => "volcanic",
        }
    }

    /// Composition bands for a moon of `parent` and the fallback past the last band.
    fn bands(parent: PlanetType, innermost: bool) -> (CompositionBands, Self) {
        match parent {
            PlanetType::Lava | PlanetType::Rocky | PlanetType::Carbon | PlanetType::Ocean => {
                (TERRESTRIAL_PARENT, Self::Mixed)
            }
            PlanetType::Ice => (ICE_PARENT, Self::Mixed),
            PlanetType::IceGiant => (ICE_GIANT_PARENT, Self::Rocky),
            PlanetType::GasGiant if innermost => (GAS_GIANT_INNERMOST, Self::Rocky),
            PlanetType::GasGiant => (GAS_GIANT_PARENT, Self::Rocky),
        }
    }

    pub fn for_parent(parent: PlanetType, innermost: bool, roll: f64) -> Self {
        let (bands, fallback) = Self::bands(parent, innermost);
        pick_band(roll, bands).unwrap_or(fallback)
    }
}

impl std::fmt::Display for MoonComposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rocky => write!(f, "Rocky"),
            Self::Mixed => write!(f, "Rock/Ice"),
            Self::Icy => write!(f, "Icy"),
            Self::Volcanic => write!(f, "Volcanic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moon {
    /// Designation a..z in order of distance from the planet
    pub letter: char,
    pub composition: MoonComposition,
    pub mass: Mass,
    pub radius: Length,
    /// Distance from the parent planet
    pub orbital_radius: Length,
    /// Letter of the moon sharing this orbit
    pub binary_partner: Option<char>,
}

impl Moon {
    pub fn density(&self) -> f64 {
        bulk_density(self.mass.to_earth_masses(), self.radius.to_earth_radii())
    }
}

/// Planet-centric orbit range `(Roche limit, 0.4 Hill radii)`, or `None` when empty.
///
/// The Roche limit is taken for the least dense composition so it holds for
/// every moon placed in the range.
pub fn moon_orbit_limits(planet: &Planet, host_mass: Mass) -> Option<(Length, Length)> {
    let inner = roche_limit(
        planet.radius,
        planet.density(),
        MoonComposition::Icy.density(),
    );
    let outer =
        hill_radius(planet.semi_major_axis, planet.mass, host_mass) * HILL_STABILITY_FRACTION;
    (inner < outer).then_some((inner, outer))
}

/// Moons of `planet`, drawn from `stream`.
///
/// Callers key `stream` by the planet's generation slot so a planet keeps its
/// moons when its system is renumbered.
pub fn generate_moons(planet: &Planet, host_mass: Mass, stream: SeedStream) -> Vec<Moon> {
    let mut rng = stream.rng();
    let parent_mass = planet.mass.to_earth_masses();
    let host = MoonHostClass::from_earth_masses(parent_mass);
    let count = sample_moon_count(&mut rng, host);

    let Some((inner, outer)) = moon_orbit_limits(planet, host_mass) else {
        return Vec::new();
    };

    let (log_inner, log_outer) = (inner.to_au().ln(), outer.to_au().ln());
    let mut orbits: Vec<f64> = (0..count)
        .map(|_| sample_uniform(&mut rng, log_inner, log_outer).exp())
        .collect();
    orbits.sort_by(|a, b| a.total_cmp(b));

    let (ratio_min, ratio_max) = host.mass_ratio_range();
    let mut moons: Vec<Moon> = Vec::with_capacity(orbits.len());
    for (i, orbit) in orbits.into_iter().enumerate() {
        let roll: f64 = rng.random();
        let composition = MoonComposition::for_parent(planet.planet_type, i == 0, roll);
        let ratio = sample_uniform(&mut rng, ratio_min.ln(), ratio_max.ln()).exp();
        let mass_earth = parent_mass * ratio;
        let binary = rng.random::<f64>() < BINARY_MOON_PROBABILITY;
        let partner_fraction = sample_uniform(&mut rng, 0.5, 1.0);

        let Some(letter) = moon_letter(moons.len()) else {
            break;
        };
        let orbital_radius = Length::from_au(orbit);
        moons.push(moon(letter, composition, mass_earth, orbital_radius));

        if binary {
            if let Some(partner_letter) = moon_letter(moons.len()) {
                let mut partner = moon(
                    partner_letter,
                    composition,
                    mass_earth * partner_fraction,
                    orbital_radius,
                );
                partner.binary_partner = Some(letter);
                if let Some(last) = moons.last_mut() {
                    last.binary_partner = Some(partner_letter);
                }
                moons.push(partner);
            }
        }
    }
    moons
}

/// Letter for the moon at `index`, `None` past `z`.
pub fn moon_letter(index: usize) -> Option<char> {
    (index < MAX_MOONS as usize).then(|| char::from(b'a' + index as u8))
}

fn moon(
    letter: char,
    composition: MoonComposition,
    mass_earth: f64,
    orbital_radius: Length,
) -> Moon {
    let radius_earth = (mass_earth * EARTH_DENSITY / composition.density()).cbrt();
    Moon {
        letter,
        composition,
        mass: Mass::from_earth_masses(mass_earth),
        radius: Length::from_earth_radii(radius_earth),
        orbital_radius,
        binary_partner: None,
    }
}

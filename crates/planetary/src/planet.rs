//! Generated planets and the physics derived from their orbit.

use serde::{Deserialize, Serialize};
use units::{Length, Mass, Temperature};

use crate::moon::Moon;
use crate::planet_class::PlanetClass;
use crate::planet_type::PlanetType;

/// Mean density of Earth in g/cm³
pub const EARTH_DENSITY: f64 = 5.51;

/// Cosmic background floor for equilibrium temperatures (K)
pub const COSMIC_BACKGROUND_K: f64 = 2.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Position 1..N in orbital order around the host star
    pub number: u32,

    /// Generation slot; stays fixed when filtering renumbers the system and
    /// keys the moon stream
    pub slot: u32,

    pub planet_type: PlanetType,
    pub class: PlanetClass,
    pub mass: Mass,
    pub radius: Length,
    pub semi_major_axis: Length,
    pub equilibrium_temperature: Temperature,

    /// Inside the host's conservative habitable zone
    pub habitable: bool,

    /// Number of the planet sharing this orbital slot
    pub binary_partner: Option<u32>,

    pub moons: Vec<Moon>,
}

impl Planet {
    /// Bulk density in g/cm³
    pub fn density(&self) -> f64 {
        bulk_density(self.mass.to_earth_masses(), self.radius.to_earth_radii())
    }

    /// Hill sphere radius around a host of `host_mass`
    pub fn hill_radius(&self, host_mass: Mass) -> Length {
        hill_radius(self.semi_major_axis, self.mass, host_mass)
    }

    pub fn moon(&self, letter: char) -> Option<&Moon> {
        self.moons.iter().find(|m| m.letter == letter)
    }
}

/// Equilibrium temperature `278·(L/a²)^0.25` K, floored at the cosmic background.
pub fn equilibrium_temperature(semi_major_axis: Length, luminosity: f64) -> Temperature {
    let a = semi_major_axis.to_au();
    let kelvin = if a > 0.0 {
        278.0 * (luminosity.max(0.0) / a.powi(2)).powf(0.25)
    } else {
        0.0
    };
    Temperature::from_kelvin(kelvin.max(COSMIC_BACKGROUND_K))
}

/// Density in g/cm³ from mass and radius in Earth units
pub fn bulk_density(mass_earth: f64, radius_earth: f64) -> f64 {
    match radius_earth {
        r if r > 0.0 => EARTH_DENSITY * mass_earth / r.powi(3),
        _ => 0.0,
    }
}

/// Hill radius `a·(m/3M)^(1/3)`
pub fn hill_radius(semi_major_axis: Length, body_mass: Mass, host_mass: Mass) -> Length {
    let host = host_mass.to_solar_masses();
    if host <= 0.0 {
        return Length::zero();
    }
    semi_major_axis * (body_mass.to_solar_masses() / (3.0 * host)).cbrt()
}

/// Fluid Roche limit `2.44·R·(ρ_primary/ρ_satellite)^(1/3)`
pub fn roche_limit(primary_radius: Length, primary_density: f64, satellite_density: f64) -> Length {
    if satellite_density <= 0.0 {
        return primary_radius;
    }
    primary_radius * (2.44 * (primary_density / satellite_density).cbrt())
}

use serde::{Deserialize, Serialize};

use crate::ops::scalar_quantity_ops;

/// Mass of the Sun in kilograms
pub const SOLAR_MASS_KG: f64 = 1.988_47e30;

/// Mass of the Earth in kilograms
pub const EARTH_MASS_KG: f64 = 5.9722e24;

/// Mass of Jupiter in kilograms
pub const JUPITER_MASS_KG: f64 = 1.898_13e27;

/// A mass using solar masses as the base unit.
///
/// Stars, planets and moons share the type; planetary code usually reads it back
/// in Earth masses.
///
/// ```rust
/// use units::Mass;
///
/// let jupiter = Mass::from_jupiter_masses(1.0);
/// assert!((jupiter.to_earth_masses() - 317.8).abs() < 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_KG / SOLAR_MASS_KG)
    }

    pub fn from_jupiter_masses(value: f64) -> Self {
        Self(value * JUPITER_MASS_KG / SOLAR_MASS_KG)
    }

    pub fn from_kg(value: f64) -> Self {
        Self(value / SOLAR_MASS_KG)
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_KG / EARTH_MASS_KG
    }

    pub fn to_jupiter_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_KG / JUPITER_MASS_KG
    }

    pub fn to_kg(&self) -> f64 {
        self.0 * SOLAR_MASS_KG
    }
}

scalar_quantity_ops!(Mass);

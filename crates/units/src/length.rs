use serde::{Deserialize, Serialize};

use crate::ops::scalar_quantity_ops;

pub const AU_TO_KM: f64 = 1.495_978_707e8;
pub const AU_TO_EARTH_RADIUS: f64 = 23_454.8;

/// Astronomical units per light year.
pub const LIGHT_YEAR_AU: f64 = 63_241.077;

/// Solar radius in AU: 1 R☉ = 0.00465047 AU
pub const SOLAR_RADIUS_AU: f64 = 1.0 / 215.032;

/// A length using astronomical units as the base unit.
///
/// Orbits are naturally expressed in AU, galactic positions in light years and
/// body sizes in solar or Earth radii; all of them go through this type.
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(5.2);
/// let hop = Length::from_light_years(1.0);
/// assert!(hop > orbit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    pub fn from_light_years(value: f64) -> Self {
        Self(value * LIGHT_YEAR_AU)
    }

    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_AU)
    }

    pub fn from_earth_radii(value: f64) -> Self {
        Self(value / AU_TO_EARTH_RADIUS)
    }

    pub fn from_km(value: f64) -> Self {
        Self(value / AU_TO_KM)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    pub fn to_light_years(&self) -> f64 {
        self.0 / LIGHT_YEAR_AU
    }

    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SOLAR_RADIUS_AU
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.0 * AU_TO_EARTH_RADIUS
    }

    pub fn to_km(&self) -> f64 {
        self.0 * AU_TO_KM
    }
}

scalar_quantity_ops!(Length);

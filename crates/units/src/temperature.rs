use serde::{Deserialize, Serialize};

use crate::ops::scalar_quantity_ops;

/// Effective photospheric temperature of the Sun.
pub const SOLAR_TEMPERATURE_K: f64 = 5_772.0;

/// A temperature in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    pub fn from_celsius(value: f64) -> Self {
        Self(value + 273.15)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    pub fn to_celsius(&self) -> f64 {
        self.0 - 273.15
    }

    /// Temperature as a multiple of the solar effective temperature.
    pub fn to_solar(&self) -> f64 {
        self.0 / SOLAR_TEMPERATURE_K
    }
}

scalar_quantity_ops!(Temperature);

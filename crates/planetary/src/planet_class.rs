//! Primary planet classification by physical mass regime
//!
//! Based on Wolfgang, Rogers, & Ford (2016) with refined boundaries for envelope physics.
//! The class sets the mass-radius relation; [`PlanetType`](crate::PlanetType) carries
//! the composition.

use serde::{Deserialize, Serialize};

/// Classification of planet by physical mass regime
///
/// | Class        | Mass Range        | Radius Behavior              |
/// |--------------|-------------------|------------------------------|
/// | Rocky        | < 2 M⊕            | R ∝ M^0.27, self-compression |
/// | Transitional | 2-5 M⊕            | R ∝ M^0.35, thin envelope    |
/// | Volatile     | 5-160 M⊕          | R ∝ M^0.55, thick envelope   |
/// | Giant        | > 160 M⊕ (~0.5 Mj)| R nearly constant            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetClass {
    /// Self-compression dominated, cannot retain H/He envelopes (Earth, Mars)
    Rocky,

    /// Thin H/He envelopes, super-Earths and mini-Neptunes
    Transitional,

    /// Thick H/He envelopes, sub-Neptunes and ice giants (Neptune, Uranus)
    Volatile,

    /// Electron degeneracy pressure dominates (Jupiter, Saturn)
    Giant,
}

impl PlanetClass {
    /// Mass threshold between Rocky and Transitional regimes (2 Earth masses)
    pub const ROCKY_TRANSITIONAL_THRESHOLD: f64 = 2.0;

    /// Mass threshold between Transitional and Volatile regimes (5 Earth masses)
    pub const TRANSITIONAL_VOLATILE_THRESHOLD: f64 = 5.0;

    /// Mass threshold between Volatile and Giant regimes (~0.5 Jupiter masses)
    pub const VOLATILE_GIANT_THRESHOLD: f64 = 160.0;

    /// Classify a planet by its mass in Earth masses
    pub fn from_earth_masses(mass_earth: f64) -> Self {
        match mass_earth {
            m if m < Self::ROCKY_TRANSITIONAL_THRESHOLD => Self::Rocky,
            m if m < Self::TRANSITIONAL_VOLATILE_THRESHOLD => Self::Transitional,
            m if m < Self::VOLATILE_GIANT_THRESHOLD => Self::Volatile,
            _ => Self::Giant,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rocky => "Rocky",
            Self::Transitional => "Transitional",
            Self::Volatile => "Volatile",
            Self::Giant => "Giant",
        }
    }

    /// Mass-radius power law `(coefficient, exponent)`, R = coeff × M^exp in Earth units
    ///
    /// - Rocky: Zeng et al. (2016)
    /// - Transitional / Volatile: Chen & Kipping (2017)
    /// - Giant: degenerate regime, near-flat around 1 R_J ≈ 11.2 R⊕
    pub fn mass_radius_params(&self) -> (f64, f64) {
        match self {
            Self::Rocky => (1.0, 0.27),
            Self::Transitional => (1.0, 0.35),
            Self::Volatile => (1.0, 0.55),
            Self::Giant => (11.2, 0.01),
        }
    }

    /// Radius in Earth radii for a mass in Earth masses
    ///
    /// Volatile radii are capped at the giant radius so a 150 M⊕ planet never
    /// outgrows Jupiter.
    pub fn radius_earth(mass_earth: f64) -> f64 {
        let class = Self::from_earth_masses(mass_earth);
        let (coeff, exp) = class.mass_radius_params();
        let radius = coeff * mass_earth.max(0.0).powf(exp);
        match class {
            Self::Volatile => radius.min(Self::Giant.mass_radius_params().0),
            _ => radius,
        }
    }
}

impl std::fmt::Display for PlanetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

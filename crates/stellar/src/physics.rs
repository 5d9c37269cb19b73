//! Deterministic temperature, luminosity and radius from mass and type.
//!
//! Nothing here draws random numbers: once a body's type and mass are fixed, its
//! observable properties follow from the relations below.

use units::temperature::SOLAR_TEMPERATURE_K;

use crate::spectral::SpectralType;
use crate::stellar_type::StellarType;

/// Neutron star radius in solar radii (~12 km).
pub const NEUTRON_STAR_RADIUS_SOLAR: f64 = 1.7e-5;

/// Schwarzschild radius per solar mass, in solar radii (2.95 km).
pub const SCHWARZSCHILD_RADIUS_PER_SOLAR_MASS: f64 = 2.953 / 695_700.0;

/// Surface temperature assigned to neutron stars.
pub const NEUTRON_STAR_TEMPERATURE_K: f64 = 600_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalProperties {
    pub temperature_k: f64,
    /// Solar luminosities
    pub luminosity: f64,
    /// Solar radii
    pub radius: f64,
}

pub fn physical_properties(stellar_type: &StellarType, mass: f64) -> PhysicalProperties {
    match stellar_type {
        StellarType::MainSequence(_) => {
            let (luminosity, temperature_k) = main_sequence(mass);
            from_luminosity(luminosity, temperature_k)
        }
        StellarType::Giant(spectral) => {
            let temperature_k = giant_temperature(*spectral);
            let radius = 10.0 * mass.powf(0.8);
            from_radius(radius, temperature_k)
        }
        StellarType::Supergiant(spectral) => {
            let luminosity = 3.0e4 * (mass / 15.0).powf(2.2);
            from_luminosity(luminosity, supergiant_temperature(*spectral))
        }
        StellarType::BrownDwarf(class) => {
            let (mass_min, mass_max) = stellar_type.mass_range();
            let (cool, hot) = class.temperature_band();
            let t = ((mass - mass_min) / (mass_max - mass_min)).clamp(0.0, 1.0);
            from_radius(0.1, cool + t * (hot - cool))
        }
        StellarType::WhiteDwarf => {
            // heavier white dwarfs are smaller and, on average, younger and hotter
            let temperature_k = 8_000.0 + 12_000.0 * ((mass - 0.5) / 0.9).clamp(0.0, 1.0);
            let radius = 0.0126 * mass.max(0.17).powf(-1.0 / 3.0);
            from_radius(radius, temperature_k)
        }
        StellarType::NeutronStar => {
            from_radius(NEUTRON_STAR_RADIUS_SOLAR, NEUTRON_STAR_TEMPERATURE_K)
        }
        StellarType::BlackHole => PhysicalProperties {
            temperature_k: 0.0,
            luminosity: 0.0,
            radius: SCHWARZSCHILD_RADIUS_PER_SOLAR_MASS * mass,
        },
    }
}

/// Main sequence mass-luminosity and mass-temperature power laws.
///
/// Returns `(luminosity L☉, temperature K)`.
pub fn main_sequence(mass: f64) -> (f64, f64) {
    match mass {
        m if m > 30.0 => (3.0e4 * (m / 30.0).powf(3.5), 38_000.0 * (m / 30.0).powf(0.2)),
        m if m > 8.0 => (1.0e3 * (m / 8.0).powf(3.5), 22_000.0 * (m / 8.0).powf(0.2)),
        m if m > 2.0 => (25.0 * (m / 2.0).powf(3.5), 9_000.0 * (m / 2.0).powf(0.2)),
        m if m > 0.8 => (m.powf(4.0), 5_800.0 * m.powf(0.1)),
        m if m >= 0.45 => (m.powf(2.3), 3_700.0 * (m / 0.45).powf(0.45)),
        m => (m.powf(2.3), 2_500.0 * (m / 0.08).powf(0.23)),
    }
}

fn giant_temperature(spectral: SpectralType) -> f64 {
    match spectral {
        SpectralType::O | SpectralType::B | SpectralType::A => 8_000.0,
        SpectralType::F => 6_500.0,
        SpectralType::G => 5_100.0,
        SpectralType::K => 4_300.0,
        SpectralType::M => 3_400.0,
    }
}

fn supergiant_temperature(spectral: SpectralType) -> f64 {
    match spectral {
        SpectralType::O => 32_000.0,
        SpectralType::B => 18_000.0,
        SpectralType::A => 9_000.0,
        SpectralType::F => 7_000.0,
        SpectralType::G => 5_500.0,
        SpectralType::K => 4_200.0,
        SpectralType::M => 3_600.0,
    }
}

/// Stefan-Boltzmann in solar units: L = R² (T / T☉)⁴.
fn from_radius(radius: f64, temperature_k: f64) -> PhysicalProperties {
    let luminosity = radius * radius * (temperature_k / SOLAR_TEMPERATURE_K).powi(4);
    PhysicalProperties {
        temperature_k,
        luminosity,
        radius,
    }
}

fn from_luminosity(luminosity: f64, temperature_k: f64) -> PhysicalProperties {
    let radius = luminosity.sqrt() * (SOLAR_TEMPERATURE_K / temperature_k).powi(2);
    PhysicalProperties {
        temperature_k,
        luminosity,
        radius,
    }
}

/// Absolute visual magnitude, `None` for bodies that emit no light.
pub fn absolute_magnitude(luminosity: f64) -> Option<f64> {
    (luminosity > 0.0).then(|| 4.83 - 2.5 * luminosity.log10())
}

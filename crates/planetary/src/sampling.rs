//! Occurrence-rate sampling for planets and moons.

use rand::Rng;
use rand_chacha::ChaChaRng;
use stellar::sampling::{pick_band, sample_gaussian};
use stellar::{SpectralType, StellarType};
use units::Length;

/// Upper bound on planets drawn for one star
pub const MAX_PLANETS: u32 = 12;

/// Moons are lettered a..z
pub const MAX_MOONS: u32 = 26;

/// Planet mass bins in Earth masses, sampled log-uniformly within a bin
pub const PLANET_MASS_BINS: [(f64, f64); 7] = [
    (0.01, 0.5),     // Sub-Earth
    (0.5, 2.0),      // Earth
    (2.0, 10.0),     // Super-Earth / mini-Neptune
    (10.0, 50.0),    // Neptune
    (50.0, 160.0),   // Sub-Saturn
    (160.0, 1000.0), // Jupiter
    (1000.0, 4000.0), // Super-Jupiter
];

// =============================================================================
// Planets
// =============================================================================

/// Orbital band relative to the frost line, selecting the mass table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitalBand {
    /// Inside the frost line (Kepler/TESS inner systems)
    Inner,
    /// Frost line to 5× frost line, where giants form by core accretion
    NearFrost,
    /// Beyond 5× frost line
    Outer,
}

impl OrbitalBand {
    pub fn from_distance(distance: Length, frost_line: Length) -> Self {
        let ratio = distance / frost_line;
        match ratio {
            r if r < 1.0 => Self::Inner,
            r if r < 5.0 => Self::NearFrost,
            _ => Self::Outer,
        }
    }

    /// Bin weights for [`PLANET_MASS_BINS`]; giant bins scale with the metallicity boost.
    fn mass_weights(&self, boost: f64) -> [f64; 7] {
        match self {
            Self::Inner => [0.20, 0.32, 0.30, 0.13, 0.03 * boost, 0.02 * boost, 0.0],
            Self::NearFrost => [
                0.10,
                0.15,
                0.20,
                0.25,
                0.12 * boost,
                0.13 * boost,
                0.05 * boost,
            ],
            Self::Outer => [0.25, 0.25, 0.20, 0.20, 0.05, 0.04, 0.01],
        }
    }
}

/// Giant-planet occurrence scaling P ∝ 10^(2×[Fe/H]), bounded to [0.1, 4].
pub fn metallicity_boost(metallicity: f64) -> f64 {
    10.0_f64.powf(2.0 * metallicity).clamp(0.1, 4.0)
}

/// Planet mass in Earth masses for an orbit in `band`
pub fn sample_planet_mass(rng: &mut ChaChaRng, band: OrbitalBand, metallicity: f64) -> f64 {
    let weights = band.mass_weights(metallicity_boost(metallicity));
    sample_from_bins(rng, &weights, &PLANET_MASS_BINS)
}

/// Picks a bin by weight, then samples log-uniformly inside it.
pub fn sample_from_bins(rng: &mut ChaChaRng, weights: &[f64], bins: &[(f64, f64)]) -> f64 {
    let total: f64 = weights.iter().sum();
    let roll: f64 = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    let mut chosen = bins[0];

    for (&weight, &bin) in weights.iter().zip(bins) {
        cumulative += weight;
        if roll < cumulative {
            chosen = bin;
            break;
        }
    }

    let (min, max) = chosen;
    let (log_min, log_max) = (min.ln(), max.ln());
    (log_min + rng.random::<f64>() * (log_max - log_min)).exp()
}

/// Number of planets around a star of the given type.
///
/// Gaussian by type, mean scaled by `1 + 0.5·[Fe/H]`, rounded and clamped to
/// `0..=MAX_PLANETS`.
pub fn sample_planet_count(
    rng: &mut ChaChaRng,
    stellar_type: &StellarType,
    metallicity: f64,
) -> u32 {
    let (mean, std) = match stellar_type {
        StellarType::MainSequence(spectral) => match spectral {
            SpectralType::O => (0.5, 0.8),
            SpectralType::B => (1.5, 1.2),
            SpectralType::A => (2.5, 1.5),
            SpectralType::F => (3.5, 1.8),
            SpectralType::G => (4.0, 1.8),
            SpectralType::K => (3.5, 1.5),
            SpectralType::M => (3.0, 1.5),
        },
        StellarType::Giant(_) => (2.0, 1.5),
        StellarType::Supergiant(_) => (0.3, 0.6),
        StellarType::BrownDwarf(_) => (1.0, 1.0),
        StellarType::WhiteDwarf => (0.8, 1.0),
        StellarType::NeutronStar => (0.2, 0.5),
        StellarType::BlackHole => (0.1, 0.4),
    };

    let adjusted_mean = mean * (1.0 + 0.5 * metallicity).max(0.25);
    let n = sample_gaussian(rng, adjusted_mean, std).round();
    n.clamp(0.0, MAX_PLANETS as f64) as u32
}

// =============================================================================
// Moons
// =============================================================================

/// Moon-count category of a parent planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonHostClass {
    Terrestrial,
    SuperEarth,
    IceGiant,
    GasGiant,
}

impl MoonHostClass {
    pub fn from_earth_masses(mass_earth: f64) -> Self {
        match mass_earth {
            m if m < 2.0 => Self::Terrestrial,
            m if m < 10.0 => Self::SuperEarth,
            m if m < 50.0 => Self::IceGiant,
            _ => Self::GasGiant,
        }
    }

    /// Probabilities of [0, 1, 2, 3+] moons
    fn count_bands(&self) -> [(u32, f64); 4] {
        let p = match self {
            Self::Terrestrial => [0.70, 0.25, 0.05, 0.0],
            Self::SuperEarth => [0.60, 0.28, 0.10, 0.02],
            Self::IceGiant => [0.15, 0.25, 0.35, 0.25],
            Self::GasGiant => [0.03, 0.12, 0.35, 0.50],
        };
        [(0, p[0]), (1, p[1]), (2, p[2]), (3, p[3])]
    }

    /// Extra moons beyond three, drawn uniformly from `0..=extra`
    fn max_extra(&self) -> u32 {
        match self {
            Self::Terrestrial => 0,
            Self::SuperEarth => 1,
            Self::IceGiant => 3,
            Self::GasGiant => 12,
        }
    }

    /// Moon-to-planet mass ratio range, sampled log-uniformly
    pub fn mass_ratio_range(&self) -> (f64, f64) {
        match self {
            Self::Terrestrial => (1e-4, 1.2e-2),
            Self::SuperEarth => (1e-5, 5e-3),
            Self::IceGiant => (1e-6, 1e-4),
            Self::GasGiant => (1e-7, 1e-4),
        }
    }
}

/// Number of moons for a parent planet, at most [`MAX_MOONS`].
pub fn sample_moon_count(rng: &mut ChaChaRng, host: MoonHostClass) -> u32 {
    let roll: f64 = rng.random();
    let base = pick_band(roll, &host.count_bands()).unwrap_or(0);
    let extra = match base {
        3 => rng.random_range(0..=host.max_extra()),
        _ => 0,
    };
    (base + extra).min(MAX_MOONS)
}

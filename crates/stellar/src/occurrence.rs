//! Per-population occurrence of stellar types.
//!
//! Each table lists probabilities in a fixed order and is walked as cumulative
//! bands by a single uniform roll. Whatever probability the listed types leave
//! over falls through to the terminal default, an M dwarf, the most common star
//! in every population.
//!
//! # References
//! - Ledrew (2001) - "The Real Starry Sky" (solar neighbourhood census)
//! - Kirkpatrick et al. (2012) - brown dwarf space densities
//! - Bland-Hawthorn & Gerhard (2016) - thin/thick disk, bulge and halo populations

use galaxy::Population;

use crate::spectral::{BrownDwarfClass, SpectralType};
use crate::stellar_type::StellarType;

use SpectralType::{A, B, F, G, K, M, O};

/// Terminal band of every table.
pub const DEFAULT_STELLAR_TYPE: StellarType = StellarType::MainSequence(SpectralType::M);

/// Peak multiplier of young (O, B, A and supergiant) weights on a spiral arm.
pub const ARM_YOUNG_STAR_BOOST: f64 = 4.0;

/// Compact remnant weights are scaled by this beyond the outer-disc radius.
pub const OUTER_DISC_COMPACT_FACTOR: f64 = 0.2;

const THIN_DISK: &[(StellarType, f64)] = &[
    (StellarType::MainSequence(O), 0.000_03),
    (StellarType::MainSequence(B), 0.001_3),
    (StellarType::MainSequence(A), 0.006),
    (StellarType::MainSequence(F), 0.03),
    (StellarType::MainSequence(G), 0.076),
    (StellarType::MainSequence(K), 0.121),
    (StellarType::Giant(G), 0.001),
    (StellarType::Giant(K), 0.002_5),
    (StellarType::Giant(M), 0.000_5),
    (StellarType::Supergiant(B), 0.000_05),
    (StellarType::Supergiant(M), 0.000_05),
    (StellarType::BrownDwarf(BrownDwarfClass::L), 0.01),
    (StellarType::BrownDwarf(BrownDwarfClass::T), 0.01),
    (StellarType::BrownDwarf(BrownDwarfClass::Y), 0.005),
    (StellarType::WhiteDwarf, 0.06),
    (StellarType::NeutronStar, 0.001),
    (StellarType::BlackHole, 0.000_1),
];

const THICK_DISK: &[(StellarType, f64)] = &[
    (StellarType::MainSequence(A), 0.001),
    (StellarType::MainSequence(F), 0.02),
    (StellarType::MainSequence(G), 0.08),
    (StellarType::MainSequence(K), 0.14),
    (StellarType::Giant(G), 0.001_5),
    (StellarType::Giant(K), 0.003_5),
    (StellarType::Giant(M), 0.001),
    (StellarType::BrownDwarf(BrownDwarfClass::L), 0.012),
    (StellarType::BrownDwarf(BrownDwarfClass::T), 0.012),
    (StellarType::BrownDwarf(BrownDwarfClass::Y), 0.006),
    (StellarType::WhiteDwarf, 0.09),
    (StellarType::NeutronStar, 0.001_2),
    (StellarType::BlackHole, 0.000_12),
];

const BULGE: &[(StellarType, f64)] = &[
    (StellarType::MainSequence(B), 0.000_2),
    (StellarType::MainSequence(A), 0.001),
    (StellarType::MainSequence(F), 0.015),
    (StellarType::MainSequence(G), 0.07),
    (StellarType::MainSequence(K), 0.15),
    (StellarType::Giant(G), 0.002),
    (StellarType::Giant(K), 0.006),
    (StellarType::Giant(M), 0.002),
    (StellarType::Supergiant(M), 0.000_05),
    (StellarType::BrownDwarf(BrownDwarfClass::L), 0.012),
    (StellarType::BrownDwarf(BrownDwarfClass::T), 0.012),
    (StellarType::BrownDwarf(BrownDwarfClass::Y), 0.006),
    (StellarType::WhiteDwarf, 0.08),
    (StellarType::NeutronStar, 0.002),
    (StellarType::BlackHole, 0.000_3),
];

const HALO: &[(StellarType, f64)] = &[
    (StellarType::MainSequence(F), 0.01),
    (StellarType::MainSequence(G), 0.06),
    (StellarType::MainSequence(K), 0.15),
    (StellarType::Giant(G), 0.002),
    (StellarType::Giant(K), 0.005),
    (StellarType::Giant(M), 0.001),
    (StellarType::BrownDwarf(BrownDwarfClass::L), 0.012),
    (StellarType::BrownDwarf(BrownDwarfClass::T), 0.012),
    (StellarType::BrownDwarf(BrownDwarfClass::Y), 0.006),
    (StellarType::WhiteDwarf, 0.12),
    (StellarType::NeutronStar, 0.001),
    (StellarType::BlackHole, 0.000_1),
];

pub fn base_table(population: Population) -> &'static [(StellarType, f64)] {
    match population {
        Population::ThinDisk => THIN_DISK,
        Population::ThickDisk => THICK_DISK,
        Population::Bulge => BULGE,
        Population::Halo => HALO,
    }
}

/// Occurrence table for a location, after the arm boost and outer-disc suppression.
///
/// `arm_strength` is the summed spiral arm strength at the position; it only
/// matters in the thin disk, where star formation happens along the arms.
pub fn occurrence_table(
    population: Population,
    arm_strength: f64,
    outer_disc: bool,
) -> Vec<(StellarType, f64)> {
    let boost = match population {
        Population::ThinDisk => 1.0 + ARM_YOUNG_STAR_BOOST * arm_strength.clamp(0.0, 1.0),
        _ => 1.0,
    };

    let mut table: Vec<(StellarType, f64)> = base_table(population)
        .iter()
        .map(|&(stellar_type, weight)| {
            let weight = match stellar_type {
                StellarType::MainSequence(O | B | A) | StellarType::Supergiant(_) => weight * boost,
                StellarType::NeutronStar | StellarType::BlackHole if outer_disc => {
                    weight * OUTER_DISC_COMPACT_FACTOR
                }
                _ => weight,
            };
            (stellar_type, weight)
        })
        .collect();

    let total: f64 = table.iter().map(|(_, w)| w).sum();
    if total > 1.0 {
        table.iter_mut().for_each(|(_, w)| *w /= total);
    }
    table
}

/// Probability left over for the terminal default band.
pub fn default_band_probability(table: &[(StellarType, f64)]) -> f64 {
    (1.0 - table.iter().map(|(_, w)| w).sum::<f64>()).max(0.0)
}

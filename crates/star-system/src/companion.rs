//! Stellar companions
//!
//! Multiplicity follows the mass-dependent fractions of field stars; stellar
//! remnants are much more often found with a companion (the survivors of
//! close-binary evolution). Companions are drawn relative to the primary and
//! designated B, C, D in order of increasing separation.
//!
//! # References
//! - Raghavan et al. (2010) - "A Survey of Stellar Families: Multiplicity of Solar-type Stars"
//! - Duchêne & Kraus (2013) - "Stellar Multiplicity"

use galaxy::SeedStream;
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use stellar::sampling::{pick_band, sample_log10_normal, sample_uniform};
use stellar::{BrownDwarfClass, SpectralType, StellarProperties, StellarType};
use units::Length;

/// Multiplicity of white dwarfs, neutron stars and black holes
pub const REMNANT_MULTIPLICITY: f64 = 0.75;

/// Companion count for a multiple system: binary, triple, quadruple
pub const COMPANION_COUNT_BANDS: [(usize, f64); 3] = [(1, 0.75), (2, 0.19), (3, 0.06)];

/// Companion mass as a fraction of the primary
pub const MASS_RATIO_RANGE: (f64, f64) = (0.1, 0.9);

/// Chance that a companion is drawn from the brown-dwarf range instead
pub const BROWN_DWARF_COMPANION_PROBABILITY: f64 = 0.05;

/// Brown dwarf companion masses in M☉
pub const BROWN_DWARF_MASS_RANGE: (f64, f64) = (0.013, 0.075);

/// Deuterium-burning limit, the lightest companion
pub const MIN_COMPANION_MASS: f64 = 0.013;

/// log10 of the mean separation (AU) for the first, second and third companion drawn
pub const SEPARATION_LOG_MEANS: [f64; 3] = [1.0, 2.0, 2.6];

pub const SEPARATION_SIGMA_DEX: f64 = 0.6;

/// Companion separations in AU
pub const SEPARATION_RANGE_AU: (f64, f64) = (0.1, 1000.0);

/// Companion designators in order of increasing separation
pub const DESIGNATORS: [char; 3] = ['B', 'C', 'D'];

/// Chance that a companion above 10 M☉ is an evolved supergiant
const SUPERGIANT_FRACTION: f64 = 0.15;

/// Chance that a companion between 2.1 and 8 M☉ is a giant
const GIANT_FRACTION: f64 = 0.10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Companion {
    pub designator: char,
    /// Separation from the primary
    pub separation: Length,
    pub properties: StellarProperties,
}

/// Determine the multiplicity fraction for a primary
///
/// Binary fractions increase with stellar mass, ranging from ~25% for M-dwarfs
/// to ~80% for O-type stars.
/// - M ≥ 16 M☉ (O stars): 80%
/// - M ≥ 3 M☉ (B/A stars): 60%
/// - M ≥ 0.8 M☉ (F/G stars): 44%
/// - M ≥ 0.45 M☉ (K stars): 35%
/// - M < 0.45 M☉ (M stars): 25%
pub fn binary_fraction(primary_mass: f64) -> f64 {
    match primary_mass {
        m if m >= 16.0 => 0.80, // O stars
        m if m >= 3.0 => 0.60,  // B & A stars
        m if m >= 0.8 => 0.44,  // F & G stars
        m if m >= 0.45 => 0.35, // K stars
        _ => 0.25,              // M stars
    }
}

/// Probability that a primary of this type and mass has any companion.
pub fn multiplicity_fraction(stellar_type: &StellarType, primary_mass: f64) -> f64 {
    match stellar_type {
        t if t.is_remnant() => REMNANT_MULTIPLICITY,
        _ => binary_fraction(primary_mass),
    }
}

/// Number of companions (0–3).
///
/// Both rolls are always drawn so the rest of the stream does not depend on the outcome.
pub fn sample_companion_count(
    rng: &mut ChaChaRng,
    stellar_type: &StellarType,
    primary_mass: f64,
) -> usize {
    let multiple = rng.random::<f64>() < multiplicity_fraction(stellar_type, primary_mass);
    let roll: f64 = rng.random();
    if multiple {
        pick_band(roll, &COMPANION_COUNT_BANDS).unwrap_or(1)
    } else {
        0
    }
}

/// Main-sequence class for a mass in M☉, brown-dwarf classes below the hydrogen-burning limit.
pub fn type_for_mass(mass: f64) -> StellarType {
    match mass {
        m if m < 0.03 => StellarType::BrownDwarf(BrownDwarfClass::Y),
        m if m < 0.06 => StellarType::BrownDwarf(BrownDwarfClass::T),
        m if m < 0.08 => StellarType::BrownDwarf(BrownDwarfClass::L),
        m if m < 0.45 => StellarType::MainSequence(SpectralType::M),
        m if m < 0.8 => StellarType::MainSequence(SpectralType::K),
        m if m < 1.04 => StellarType::MainSequence(SpectralType::G),
        m if m < 1.4 => StellarType::MainSequence(SpectralType::F),
        m if m < 2.1 => StellarType::MainSequence(SpectralType::A),
        m if m < 16.0 => StellarType::MainSequence(SpectralType::B),
        _ => StellarType::MainSequence(SpectralType::O),
    }
}

/// Companion type from its mass, with evolved branches for massive companions.
///
/// `evolved_roll` is uniform in `[0, 1)`.
pub fn companion_type(mass: f64, evolved_roll: f64) -> StellarType {
    match mass {
        m if m >= 10.0 && evolved_roll < SUPERGIANT_FRACTION => match m {
            m if m < 20.0 => StellarType::Supergiant(SpectralType::M),
            _ => StellarType::Supergiant(SpectralType::B),
        },
        m if (2.1..8.0).contains(&m) && evolved_roll < GIANT_FRACTION => match m {
            m if m < 3.0 => StellarType::Giant(SpectralType::K),
            _ => StellarType::Giant(SpectralType::G),
        },
        m => type_for_mass(m),
    }
}

/// Companions of `primary`, designated by increasing separation.
///
/// Companions share the primary's metallicity, population and region.
pub fn generate_companions(primary: &StellarProperties, stream: SeedStream) -> Vec<Companion> {
    let mut rng = stream.rng();
    let primary_mass = primary.mass.to_solar_masses();
    let count = sample_companion_count(&mut rng, &primary.stellar_type, primary_mass);

    let mut drawn: Vec<(f64, StellarProperties)> = (0..count)
        .map(|i| {
            let brown_dwarf = rng.random::<f64>() < BROWN_DWARF_COMPANION_PROBABILITY;
            let ratio = sample_uniform(&mut rng, MASS_RATIO_RANGE.0, MASS_RATIO_RANGE.1);
            let bd_mass =
                sample_uniform(&mut rng, BROWN_DWARF_MASS_RANGE.0, BROWN_DWARF_MASS_RANGE.1);
            let separation =
                sample_log10_normal(&mut rng, SEPARATION_LOG_MEANS[i], SEPARATION_SIGMA_DEX)
                    .clamp(SEPARATION_RANGE_AU.0, SEPARATION_RANGE_AU.1);
            let evolved_roll: f64 = rng.random();

            let mass = if brown_dwarf {
                bd_mass.min(primary_mass)
            } else {
                (primary_mass * ratio).max(MIN_COMPANION_MASS)
            };
            let properties = StellarProperties::from_mass(
                companion_type(mass, evolved_roll),
                mass,
                primary.metallicity,
                primary.population,
                primary.region,
            );
            (separation, properties)
        })
        .collect();

    drawn.sort_by(|a, b| a.0.total_cmp(&b.0));
    drawn
        .into_iter()
        .zip(DESIGNATORS)
        .map(|((separation, properties), designator)| Companion {
            designator,
            separation: Length::from_au(separation),
            properties,
        })
        .collect()
}

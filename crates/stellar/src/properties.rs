use galaxy::{DensityField, Population, Position, Purpose, Region, SeedStream};
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use tracing::trace;
use units::{Length, Mass, Temperature};

use crate::occurrence::{occurrence_table, DEFAULT_STELLAR_TYPE};
use crate::physics::{absolute_magnitude, physical_properties};
use crate::sampling::{jitter, pick_band, sample_metallicity, sample_uniform};
use crate::stellar_color::StellarColor;
use crate::stellar_type::StellarType;

/// Relative jitter applied to masses drawn from a type's range.
pub const MASS_JITTER: f64 = 0.2;

/// Fully specified stellar body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarProperties {
    pub stellar_type: StellarType,
    pub mass: Mass,
    pub temperature: Temperature,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    pub radius: Length,
    pub color: StellarColor,
    /// Metallicity [Fe/H] in dex (0.0 = solar)
    pub metallicity: f64,
    pub population: Population,
    pub region: Region,
}

impl StellarProperties {
    /// Derives every observable from a type and mass.
    ///
    /// Companion stars come through here directly with a mass set by their
    /// primary; survey bodies come through [`BodyPropertyGenerator`].
    pub fn from_mass(
        stellar_type: StellarType,
        mass: f64,
        metallicity: f64,
        population: Population,
        region: Region,
    ) -> Self {
        let physical = physical_properties(&stellar_type, mass);
        let color = match stellar_type {
            StellarType::BlackHole => StellarColor::BLACK,
            _ => StellarColor::from_temperature(physical.temperature_k),
        };
        Self {
            stellar_type,
            mass: Mass::from_solar_masses(mass),
            temperature: Temperature::from_kelvin(physical.temperature_k),
            luminosity: physical.luminosity,
            radius: Length::from_solar_radii(physical.radius),
            color,
            metallicity,
            population,
            region,
        }
    }

    /// Spectral subclass digit, for types that have one.
    pub fn subtype(&self) -> Option<u8> {
        let temperature = self.temperature.to_kelvin();
        match self.stellar_type {
            StellarType::MainSequence(s) | StellarType::Giant(s) | StellarType::Supergiant(s) => {
                Some(s.subtype(temperature))
            }
            StellarType::BrownDwarf(class) => Some(class.subtype(temperature)),
            StellarType::WhiteDwarf => Some(white_dwarf_temperature_index(temperature)),
            StellarType::NeutronStar | StellarType::BlackHole => None,
        }
    }

    /// Full spectral designation such as `G2V`, `K4III`, `T6`, `DA5`, `NS` or `BH`.
    pub fn designation(&self) -> String {
        let subtype = self.subtype().unwrap_or_default();
        match self.stellar_type {
            StellarType::MainSequence(_) | StellarType::Giant(_) | StellarType::Supergiant(_) => {
                let class = self
                    .stellar_type
                    .luminosity_class()
                    .map(|c| c.to_string())
                    .unwrap_or_default();
                let letter = self
                    .stellar_type
                    .spectral_type()
                    .map(|s| s.to_string())
                    .unwrap_or_default();
                format!("{}{}{}", letter, subtype, class)
            }
            StellarType::BrownDwarf(class) => format!("{}{}", class, subtype),
            StellarType::WhiteDwarf => format!("DA{}", subtype),
            StellarType::NeutronStar => "NS".to_string(),
            StellarType::BlackHole => "BH".to_string(),
        }
    }

    pub fn absolute_magnitude(&self) -> Option<f64> {
        absolute_magnitude(self.luminosity)
    }

    /// Habitable zone `(inner, outer)` from the conservative flux limits (1.1 and 0.53 S⊕).
    pub fn habitable_zone(&self) -> (Length, Length) {
        let l = self.luminosity.max(0.0);
        (
            Length::from_au((l / 1.1).sqrt()),
            Length::from_au((l / 0.53).sqrt()),
        )
    }
}

/// White dwarf temperature index `50,400 / T`, clamped to a single digit.
fn white_dwarf_temperature_index(temperature: f64) -> u8 {
    (50_400.0 / temperature.max(1.0)).round().clamp(1.0, 9.0) as u8
}

/// Draws a stellar type from the occurrence table of a location.
pub fn sample_stellar_type(
    rng: &mut ChaChaRng,
    population: Population,
    arm_strength: f64,
    outer_disc: bool,
) -> StellarType {
    let table = occurrence_table(population, arm_strength, outer_disc);
    let roll: f64 = rng.random();
    pick_band(roll, &table).unwrap_or(DEFAULT_STELLAR_TYPE)
}

/// Draws a mass from the type's range with ±20% jitter, kept inside physical limits.
pub fn sample_mass(rng: &mut ChaChaRng, stellar_type: &StellarType) -> f64 {
    let (min, max) = stellar_type.mass_range();
    let (lower, upper) = stellar_type.mass_limits();
    let base = sample_uniform(rng, min, max);
    jitter(rng, base, MASS_JITTER).clamp(lower, upper)
}

/// Turns a seed and position into stellar properties.
#[derive(Debug, Clone, Copy)]
pub struct BodyPropertyGenerator<'a> {
    field: &'a DensityField,
}

impl<'a> BodyPropertyGenerator<'a> {
    pub fn new(field: &'a DensityField) -> Self {
        Self { field }
    }

    /// Properties of the body at `seed`, located at `position`.
    ///
    /// Population, region, arm boost and outer-disc flag come from the position;
    /// type, mass and metallicity are drawn, in that order, from the seed's
    /// properties stream.
    pub fn properties(&self, seed: u64, position: &Position) -> StellarProperties {
        let population = Population::from_position(position);
        let region = self.field.region(position);
        let arm_strength = self.field.arm_strength(position);
        let outer_disc = self.field.is_outer_disc(position);

        let mut rng = SeedStream::for_purpose(seed, Purpose::Properties).rng();
        let stellar_type = sample_stellar_type(&mut rng, population, arm_strength, outer_disc);
        let mass = sample_mass(&mut rng, &stellar_type);
        let metallicity = sample_metallicity(&mut rng, population.mean_metallicity());

        trace!(seed, %stellar_type, mass, "stellar properties");
        StellarProperties::from_mass(stellar_type, mass, metallicity, population, region)
    }
}

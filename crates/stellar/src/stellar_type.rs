use std::fmt;

use serde::{Deserialize, Serialize};

use crate::spectral::{BrownDwarfClass, LuminosityClass, SpectralType};

/// Every kind of stellar body the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "class")]
pub enum StellarType {
    MainSequence(SpectralType),
    Giant(SpectralType),
    Supergiant(SpectralType),
    BrownDwarf(BrownDwarfClass),
    WhiteDwarf,
    NeutronStar,
    BlackHole,
}

/// Chandrasekhar limit.
pub const WHITE_DWARF_MAX_MASS: f64 = 1.44;

/// Upper limit of neutron star masses (Tolman-Oppenheimer-Volkoff).
pub const NEUTRON_STAR_MAX_MASS: f64 = 2.5;

/// Hydrogen-burning limit; lighter objects are brown dwarfs.
pub const HYDROGEN_BURNING_LIMIT: f64 = 0.08;

impl StellarType {
    /// Mass range `(min, max)` in solar masses from which a body of this type is drawn.
    pub fn mass_range(&self) -> (f64, f64) {
        match self {
            StellarType::MainSequence(spectral) => match spectral {
                SpectralType::O => (15.0, 90.0),
                SpectralType::B => (2.1, 16.0),
                SpectralType::A => (1.4, 2.1),
                SpectralType::F => (1.04, 1.4),
                SpectralType::G => (0.8, 1.04),
                SpectralType::K => (0.45, 0.8),
                SpectralType::M => (0.08, 0.45),
            },
            StellarType::Giant(_) => (0.9, 8.0),
            StellarType::Supergiant(_) => (10.0, 40.0),
            StellarType::BrownDwarf(class) => match class {
                BrownDwarfClass::L => (0.06, 0.08),
                BrownDwarfClass::T => (0.03, 0.06),
                BrownDwarfClass::Y => (0.013, 0.03),
            },
            StellarType::WhiteDwarf => (0.5, 1.4),
            StellarType::NeutronStar => (1.2, 2.3),
            StellarType::BlackHole => (5.0, 30.0),
        }
    }

    /// Hard physical limits that jittered masses are clamped into.
    pub fn mass_limits(&self) -> (f64, f64) {
        match self {
            StellarType::WhiteDwarf => (0.17, WHITE_DWARF_MAX_MASS),
            StellarType::NeutronStar => (1.1, NEUTRON_STAR_MAX_MASS),
            StellarType::BlackHole => (3.0, f64::INFINITY),
            StellarType::BrownDwarf(_) => (0.005, HYDROGEN_BURNING_LIMIT),
            _ => (0.0, f64::INFINITY),
        }
    }

    /// Neutron stars and black holes.
    pub fn is_compact(&self) -> bool {
        matches!(self, StellarType::NeutronStar | StellarType::BlackHole)
    }

    /// White dwarfs, neutron stars and black holes.
    pub fn is_remnant(&self) -> bool {
        matches!(
            self,
            StellarType::WhiteDwarf | StellarType::NeutronStar | StellarType::BlackHole
        )
    }

    pub fn spectral_type(&self) -> Option<SpectralType> {
        match self {
            StellarType::MainSequence(s) | StellarType::Giant(s) | StellarType::Supergiant(s) => {
                Some(*s)
            }
            _ => None,
        }
    }

    pub fn luminosity_class(&self) -> Option<LuminosityClass> {
        match self {
            StellarType::MainSequence(_) => Some(LuminosityClass::V),
            StellarType::Giant(_) => Some(LuminosityClass::III),
            StellarType::Supergiant(_) => Some(LuminosityClass::IA),
            _ => None,
        }
    }

    /// Short type code used in exports: `G`, `K-giant`, `B-supergiant`, `L`, `WD`, `NS`, `BH`.
    pub fn code(&self) -> String {
        match self {
            StellarType::MainSequence(s) => s.to_string(),
            StellarType::Giant(s) => format!("{}-giant", s),
            StellarType::Supergiant(s) => format!("{}-supergiant", s),
            StellarType::BrownDwarf(c) => c.to_string(),
            StellarType::WhiteDwarf => "WD".to_string(),
            StellarType::NeutronStar => "NS".to_string(),
            StellarType::BlackHole => "BH".to_string(),
        }
    }
}

impl fmt::Display for StellarType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StellarType::MainSequence(s) => write!(f, "{}-type main sequence star", s),
            StellarType::Giant(s) => write!(f, "{}-type giant", s),
            StellarType::Supergiant(s) => write!(f, "{}-type supergiant", s),
            StellarType::BrownDwarf(c) => write!(f, "{}-type brown dwarf", c),
            StellarType::WhiteDwarf => write!(f, "white dwarf"),
            StellarType::NeutronStar => write!(f, "neutron star"),
            StellarType::BlackHole => write!(f, "black hole"),
        }
    }
}

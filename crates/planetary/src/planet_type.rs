//! Secondary planet classification: bulk composition
//!
//! The type is set by where a planet formed relative to the host's
//! condensation lines, unless its mass alone makes it a giant.

use serde::{Deserialize, Serialize};
use stellar::sampling::pick_band;

use crate::condensation::CondensationZone;

/// Mass above which a planet holds a massive H/He envelope (Earth masses)
pub const GAS_GIANT_MIN_MASS: f64 = 50.0;

/// Mass above which a planet is an ice giant (Earth masses)
pub const ICE_GIANT_MIN_MASS: f64 = 10.0;

/// Carbonaceous-zone outcomes for small planets; the remainder are rocky.
const CARBONACEOUS_BANDS: [(PlanetType, f64); 2] =
    [(PlanetType::Carbon, 0.15), (PlanetType::Ocean, 0.25)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetType {
    /// Molten surface inside the rock line
    Lava,
    /// Silicate/iron terrestrial world
    Rocky,
    /// Carbide and graphite rich terrestrial world
    Carbon,
    /// Water-dominated surface
    Ocean,
    /// Small body of rock and water ice beyond the frost line
    Ice,
    /// Neptune-like, water/ammonia mantle under a H/He envelope
    IceGiant,
    /// Jupiter-like H/He envelope
    GasGiant,
}

impl PlanetType {
    pub const ALL: [PlanetType; 7] = [
        PlanetType::Lava,
        PlanetType::Rocky,
        PlanetType::Carbon,
        PlanetType::Ocean,
        PlanetType::Ice,
        PlanetType::IceGiant,
        PlanetType::GasGiant,
    ];

    /// Types a small planet through its formation zone, giants through mass.
    ///
    /// `roll` is a uniform draw in `[0, 1)` that only matters in the
    /// carbonaceous zone; callers draw it unconditionally to keep the stream aligned.
    pub fn classify(mass_earth: f64, zone: CondensationZone, roll: f64) -> Self {
        match (mass_earth, zone) {
            (m, _) if m >= GAS_GIANT_MIN_MASS => Self::GasGiant,
            (m, _) if m >= ICE_GIANT_MIN_MASS => Self::IceGiant,
            (_, CondensationZone::Molten) => Self::Lava,
            (_, CondensationZone::Silicate) => Self::Rocky,
            (_, CondensationZone::Carbonaceous) => {
                pick_band(roll, &CARBONACEOUS_BANDS).unwrap_or(Self::Rocky)
            }
            (_, CondensationZone::Icy) => Self::Ice,
        }
    }

    pub fn is_giant(&self) -> bool {
        matches!(self, Self::IceGiant | Self::GasGiant)
    }

    /// Short stable code used in exports
    pub fn code(&self) -> &'static str {
        match self {
            Self::Lava => "lava",
            Self::Rocky => "rocky",
            Self::Carbon => "carbon",
            Self::Ocean => "ocean",
            Self::Ice => "ice",
            Self::IceGiant => "ice-giant",
            Self::GasGiant => "gas-giant",
        }
    }
}

impl std::fmt::Display for PlanetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lava => "Lava World",
            Self::Rocky => "Rocky",
            Self::Carbon => "Carbon World",
            Self::Ocean => "Ocean World",
            Self::Ice => "Ice World",
            Self::IceGiant => "Ice Giant",
            Self::GasGiant => "Gas Giant",
        };
        write!(f, "{}", name)
    }
}

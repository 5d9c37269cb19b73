//! Condensation lines around a host star.
//!
//! Each line is the orbital distance where the equilibrium temperature
//! `278·(L/a²)^0.25` drops to a condensation temperature:
//!
//! | line  | species              | T (K) | a / √L (AU) |
//! |-------|----------------------|-------|-------------|
//! | rock  | silicates            | ~1300 | 0.0457      |
//! | soot  | refractory carbon    | ~500  | 0.309       |
//! | frost | water ice            | ~170  | 2.67        |

use serde::{Deserialize, Serialize};
use units::Length;

pub const ROCK_LINE_COEFF: f64 = 0.0457;
pub const SOOT_LINE_COEFF: f64 = 0.309;
pub const FROST_LINE_COEFF: f64 = 2.67;

/// Luminosity floor (L☉) so dark hosts still get finite, ordered lines.
const MIN_LUMINOSITY: f64 = 1e-6;

/// Composition zone an orbit falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CondensationZone {
    /// Inside the rock line: silicates stay molten
    Molten,
    /// Rock line to soot line: carbon-poor silicates
    Silicate,
    /// Soot line to frost line: refractory carbon survives, water does not
    Carbonaceous,
    /// Beyond the frost line
    Icy,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CondensationLines {
    pub rock: Length,
    pub soot: Length,
    pub frost: Length,
}

impl CondensationLines {
    /// Lines for a host of luminosity `luminosity` (L☉)
    pub fn from_luminosity(luminosity: f64) -> Self {
        let root = luminosity.max(MIN_LUMINOSITY).sqrt();
        Self {
            rock: Length::from_au(ROCK_LINE_COEFF * root),
            soot: Length::from_au(SOOT_LINE_COEFF * root),
            frost: Length::from_au(FROST_LINE_COEFF * root),
        }
    }

    pub fn zone(&self, distance: Length) -> CondensationZone {
        match distance {
            d if d < self.rock => CondensationZone::Molten,
            d if d < self.soot => CondensationZone::Silicate,
            d if d < self.frost => CondensationZone::Carbonaceous,
            _ => CondensationZone::Icy,
        }
    }
}

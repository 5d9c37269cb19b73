//! Hand-placed bodies that do not come out of the density field.
//!
//! Special objects own reserved seeds (below any valid chunk encoding), never
//! have companions or planets, and are listed first when the chunk that holds
//! them is enumerated.

use galaxy::{DensityField, Population, Position};
use serde::Serialize;
use spatial::ChunkBounds;
use stellar::{StellarProperties, StellarType};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialObject {
    pub seed: u64,
    pub name: &'static str,
    /// Galactocentric position in light years
    pub coordinates_ly: [f64; 3],
    pub stellar_type: StellarType,
    pub mass_solar: f64,
    pub metallicity: f64,
}

/// The built-in registry.
pub static SPECIAL_OBJECTS: &[SpecialObject] = &[SpecialObject {
    seed: 0,
    name: "Sagittarius A*",
    coordinates_ly: [0.0, 0.0, 0.0],
    stellar_type: StellarType::BlackHole,
    mass_solar: 4.3e6,
    metallicity: 0.1,
}];

impl SpecialObject {
    pub fn position(&self) -> Position {
        let [x, y, z] = self.coordinates_ly;
        Position::new(x, y, z)
    }

    pub fn properties(&self, field: &DensityField) -> StellarProperties {
        let position = self.position();
        StellarProperties::from_mass(
            self.stellar_type,
            self.mass_solar,
            self.metallicity,
            Population::from_position(&position),
            field.region(&position),
        )
    }
}

pub fn find_special(registry: &[SpecialObject], seed: u64) -> Option<&SpecialObject> {
    registry.iter().find(|object| object.seed == seed)
}

/// Registry entries whose position falls inside `bounds`.
pub fn specials_within<'a>(
    registry: &'a [SpecialObject],
    bounds: &ChunkBounds,
) -> impl Iterator<Item = &'a SpecialObject> + 'a {
    let bounds = *bounds;
    registry
        .iter()
        .filter(move |object| bounds.contains(&object.position()))
}

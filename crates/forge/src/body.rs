use galaxy::Position;
use serde::{Deserialize, Serialize};
use spatial::ChunkCoord;
use star_system::StarSystem;
use stellar::StellarProperties;

/// The generated result for one seed.
///
/// Everything here is regenerable from the seed; nothing needs to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub seed: u64,
    /// Set for special objects only
    pub name: Option<String>,
    pub position: Position,
    /// `None` for special objects, whose seeds do not encode a chunk
    pub chunk: Option<ChunkCoord>,
    pub properties: StellarProperties,
    pub companion_count: usize,
    /// Planets around every star of the system
    pub planet_count: usize,
    pub moon_count: usize,
}

impl Body {
    pub(crate) fn from_system(
        system: &StarSystem,
        name: Option<String>,
        position: Position,
        chunk: Option<ChunkCoord>,
    ) -> Self {
        Self {
            seed: system.seed,
            name,
            position,
            chunk,
            properties: system.primary.properties.clone(),
            companion_count: system.companions.len(),
            planet_count: system.planet_count(),
            moon_count: system.moon_count(),
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.companion_count > 0
    }
}

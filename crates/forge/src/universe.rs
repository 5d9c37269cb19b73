//! The facade consumers talk to.
//!
//! A `Universe` owns nothing but the density field and the special-object
//! registry. Every query regenerates its answer from the seed.

use std::str::FromStr;

use galaxy::{DensityField, Position};
use planetary::{Moon, Planet};
use serde::{Deserialize, Serialize};
use spatial::seed::{decode_body, is_reserved};
use spatial::{ChunkBounds, ChunkCoord, ChunkIndex, SpatialError};
use star_system::{generate_system, StarSystem, SystemPath, SystemStar, PRIMARY_DESIGNATOR};
use stellar::BodyPropertyGenerator;
use tracing::{debug, trace};

use crate::address::Address;
use crate::body::Body;
use crate::config::UniverseConfig;
use crate::error::{ForgeError, ForgeResult};
use crate::special::{find_special, specials_within, SpecialObject, SPECIAL_OBJECTS};

#[derive(Debug, Clone)]
pub struct Universe {
    config: UniverseConfig,
    field: DensityField,
    special_objects: Vec<SpecialObject>,
}

impl Default for Universe {
    fn default() -> Self {
        Self::milky_way()
    }
}

impl Universe {
    pub fn new(config: UniverseConfig) -> ForgeResult<Self> {
        config.validate()?;
        Ok(Self {
            field: DensityField::new(config.galaxy.clone()),
            config,
            special_objects: SPECIAL_OBJECTS.to_vec(),
        })
    }

    pub fn milky_way() -> Self {
        let config = UniverseConfig::milky_way();
        Self {
            field: DensityField::new(config.galaxy.clone()),
            config,
            special_objects: SPECIAL_OBJECTS.to_vec(),
        }
    }

    /// Replaces the built-in special-object registry.
    pub fn with_special_objects(mut self, objects: impl Into<Vec<SpecialObject>>) -> Self {
        self.special_objects = objects.into();
        self
    }

    pub fn config(&self) -> &UniverseConfig {
        &self.config
    }

    pub fn field(&self) -> &DensityField {
        &self.field
    }

    pub fn special_objects(&self) -> &[SpecialObject] {
        &self.special_objects
    }

    // =========================================================================
    // Spatial queries
    // =========================================================================

    /// Normalized stellar density at a position.
    pub fn density(&self, position: &Position) -> f64 {
        self.field.density(position)
    }

    /// Bodies the density field places in a chunk; special objects are extra.
    pub fn expected_body_count(&self, chunk: &ChunkCoord) -> u64 {
        ChunkIndex::new(&self.field).expected_body_count(chunk)
    }

    pub fn chunk_bounds(&self, chunk: &ChunkCoord) -> ChunkBounds {
        chunk.bounds()
    }

    /// Every body of a chunk, lazily.
    ///
    /// Special objects inside the chunk come first, then the generated bodies
    /// in index order. Each item regenerates its full system to fill in the
    /// counts, so `take` what you need from dense chunks.
    pub fn enumerate_chunk(&self, chunk: &ChunkCoord) -> impl Iterator<Item = Body> + '_ {
        let chunk = *chunk;
        let slots = ChunkIndex::new(&self.field).bodies(&chunk);
        debug!(%chunk, expected = slots.total(), "enumerating chunk");

        let specials = specials_within(&self.special_objects, &chunk.bounds())
            .map(move |object| self.special_body(object));
        let generated = slots.map(move |slot| {
            let system = self.generate(slot.seed, &slot.position);
            Body::from_system(&system, None, slot.position, Some(chunk))
        });
        specials.chain(generated)
    }

    // =========================================================================
    // Seed queries
    // =========================================================================

    pub fn body(&self, seed: u64) -> ForgeResult<Body> {
        if let Some(object) = find_special(&self.special_objects, seed) {
            return Ok(self.special_body(object));
        }
        let (chunk, position) = self.locate(seed)?;
        let system = self.generate(seed, &position);
        Ok(Body::from_system(&system, None, position, Some(chunk)))
    }

    /// The full hierarchical system of a seed.
    pub fn system(&self, seed: u64) -> ForgeResult<StarSystem> {
        if let Some(object) = find_special(&self.special_objects, seed) {
            return Ok(StarSystem::solitary(seed, object.properties(&self.field)));
        }
        let (_, position) = self.locate(seed)?;
        Ok(self.generate(seed, &position))
    }

    /// Chunk and position of a generated body.
    fn locate(&self, seed: u64) -> ForgeResult<(ChunkCoord, Position)> {
        if is_reserved(seed) {
            return Err(ForgeError::not_found(seed, "body"));
        }
        let (chunk, index) = decode_body(seed)?;
        match ChunkIndex::new(&self.field).locate_body(&chunk, index) {
            Ok(position) => Ok((chunk, position)),
            Err(SpatialError::IndexOutOfRange { .. }) => Err(ForgeError::not_found(seed, "body")),
            Err(err) => Err(err.into()),
        }
    }

    fn generate(&self, seed: u64, position: &Position) -> StarSystem {
        let properties = BodyPropertyGenerator::new(&self.field).properties(seed, position);
        let system = generate_system(seed, properties);
        trace!(
            seed,
            companions = system.companions.len(),
            planets = system.planet_count(),
            moons = system.moon_count(),
            "body generated"
        );
        system
    }

    fn special_body(&self, object: &SpecialObject) -> Body {
        let system = StarSystem::solitary(object.seed, object.properties(&self.field));
        Body::from_system(&system, Some(object.name.to_string()), object.position(), None)
    }

    // =========================================================================
    // Addresses
    // =========================================================================

    /// Resolves an address to a single system member.
    ///
    /// Failures to parse or out-of-range coordinates are validation errors. A
    /// well-formed address naming something generation did not produce is
    /// `NotFound`; that includes an explicit `A` on a body without companions.
    pub fn resolve(&self, address: &Address) -> ForgeResult<Resolved> {
        let seed = address.body.seed()?;
        let system = self.system(seed).map_err(|err| match err {
            ForgeError::NotFound { component, .. } => ForgeError::not_found(address, component),
            other => other,
        })?;

        let star = match address.star {
            Some(PRIMARY_DESIGNATOR) if !system.is_multiple() => None,
            Some(designator) => system.star(designator),
            None => Some(&system.primary),
        }
        .ok_or_else(|| ForgeError::not_found(address, "star"))?;

        let member = match (address.planet, address.moon) {
            (None, _) => Member::Star(star.clone()),
            (Some(number), moon) => {
                let planet = star
                    .planet(number)
                    .ok_or_else(|| ForgeError::not_found(address, "planet"))?;
                match moon {
                    None => Member::Planet(planet.clone()),
                    Some(letter) => Member::Moon(
                        planet
                            .moon(letter)
                            .cloned()
                            .ok_or_else(|| ForgeError::not_found(address, "moon"))?,
                    ),
                }
            }
        };

        debug!(%address, seed, "address resolved");
        Ok(Resolved {
            seed,
            path: address.path(),
            member,
        })
    }

    /// Parses and resolves in one step.
    pub fn resolve_str(&self, address: &str) -> ForgeResult<Resolved> {
        self.resolve(&Address::from_str(address)?)
    }
}

/// A resolved address: the seed of its system, where inside the system it
/// sits, and an owned copy of the member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved {
    pub seed: u64,
    pub path: SystemPath,
    pub member: Member,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Member {
    Star(SystemStar),
    Planet(Planet),
    Moon(Moon),
}

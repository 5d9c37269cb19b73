//! Flat per-body record for downstream exporters.
//!
//! The record is the whole contract with formatting layers: they serialize it
//! verbatim and never reach into generator types. Field names are camelCase
//! to match the other serialized types.

use galaxy::mix64;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::body::Body;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRecord {
    /// UUID v5 of the seed; a JSON-safe identity for seeds above 2⁵³
    pub id: Uuid,
    pub seed: u64,
    pub catalog_name: String,
    pub name: Option<String>,
    /// Galactocentric position in light years
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// `R_Theta_Z`, absent for special objects
    pub chunk: Option<String>,
    pub stellar_type: String,
    pub designation: String,
    /// Solar masses
    pub mass: f64,
    /// Kelvin
    pub temperature: f64,
    /// Solar luminosities
    pub luminosity: f64,
    /// Solar radii
    pub radius: f64,
    /// `#RRGGBB`
    pub color: String,
    pub absolute_magnitude: Option<f64>,
    pub metallicity: f64,
    pub population: String,
    pub region: String,
    pub companion_count: usize,
    pub planet_count: usize,
    pub moon_count: usize,
    pub multiple: bool,
}

impl From<&Body> for BodyRecord {
    fn from(body: &Body) -> Self {
        let props = &body.properties;
        Self {
            id: body_uuid(body.seed),
            seed: body.seed,
            catalog_name: catalog_name(body.seed),
            name: body.name.clone(),
            x: body.position.x(),
            y: body.position.y(),
            z: body.position.z(),
            chunk: body.chunk.map(|c| c.to_string()),
            stellar_type: props.stellar_type.code(),
            designation: props.designation(),
            mass: props.mass.to_solar_masses(),
            temperature: props.temperature.to_kelvin(),
            luminosity: props.luminosity,
            radius: props.radius.to_solar_radii(),
            color: props.color.to_hex(),
            absolute_magnitude: props.absolute_magnitude(),
            metallicity: props.metallicity,
            population: props.population.to_string(),
            region: props.region.to_string(),
            companion_count: body.companion_count,
            planet_count: body.planet_count,
            moon_count: body.moon_count,
            multiple: body.is_multiple(),
        }
    }
}

impl From<Body> for BodyRecord {
    fn from(body: Body) -> Self {
        BodyRecord::from(&body)
    }
}

/// Name-based UUID of a seed; identical for the same seed on every run.
pub fn body_uuid(seed: u64) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, &seed.to_le_bytes())
}

/// Short human-readable label such as `KV-4729`.
///
/// Not unique: 6.76 million labels cover 2⁶⁴ seeds. Use the seed or id for identity.
pub fn catalog_name(seed: u64) -> String {
    let hash = mix64(seed);
    let letter = |shift: u32| char::from(b'A' + ((hash >> shift) % 26) as u8);
    format!("{}{}-{:04}", letter(0), letter(8), (hash >> 16) % 10_000)
}

//! Planets and moons around a single star
//!
//! Planets are placed by orbital spacing, sized by occurrence-rate mass tables
//! and typed by the host's condensation lines; moons follow from the parent
//! planet's mass and Hill sphere. Multi-star concerns such as stability
//! against a companion live in the `star-system` crate.

pub mod condensation;
pub mod generation;
pub mod moon;
pub mod planet;
pub mod planet_class;
pub mod planet_type;
pub mod sampling;

// Re-export key types at crate root
pub use condensation::{CondensationLines, CondensationZone};
pub use generation::{attach_moons, generate_planets, renumber};
pub use moon::{generate_moons, Moon, MoonComposition};
pub use planet::Planet;
pub use planet_class::PlanetClass;
pub use planet_type::PlanetType;

#[cfg(test)]
mod condensation_test;
#[cfg(test)]
mod sampling_test;

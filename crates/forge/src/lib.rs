//! Galaxy forge
//!
//! The public face of the generator. A [`Universe`] answers "what is at seed
//! S, position P, chunk C or address A" and gives the same answer every time,
//! without storing anything.
//!
//! # Example
//!
//! ```
//! use forge::Universe;
//!
//! let universe = Universe::milky_way();
//! let sgr_a = universe.body(0).unwrap();
//! assert_eq!(sgr_a.planet_count, 0);
//! ```

pub mod address;
pub mod body;
pub mod config;
pub mod error;
pub mod export;
pub mod special;
pub mod universe;

pub use address::{Address, BodyRef};
pub use body::Body;
pub use config::UniverseConfig;
pub use error::{ForgeError, ForgeResult};
pub use export::{body_uuid, catalog_name, BodyRecord};
pub use special::{SpecialObject, SPECIAL_OBJECTS};
pub use universe::{Member, Resolved, Universe};

// Re-export the types callers need to build queries and read answers
pub use galaxy::{GalaxyConfig, Position};
pub use spatial::{ChunkBounds, ChunkCoord};
pub use star_system::{StarSystem, SystemNode, SystemPath, SystemStar};

#[cfg(test)]
mod address_test;
#[cfg(test)]
mod config_test;

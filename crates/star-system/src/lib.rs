//! Hierarchical star systems
//!
//! Turns a primary body into its full tree: stellar companions, planets around
//! every star filtered for S-type stability, and moons around every planet.

pub mod companion;
pub mod stability;
pub mod system;

// Re-export main types at crate root
pub use companion::{generate_companions, Companion};
pub use stability::{StableZone, CLOSE_COMPANION_AU};
pub use system::{
    generate_system, StarSystem, SystemNode, SystemPath, SystemStar, PRIMARY_DESIGNATOR,
};

// Re-export planetary types for convenience
pub use planetary::{Moon, MoonComposition, Planet, PlanetClass, PlanetType};

#[cfg(test)]
mod stability_test;
#[cfg(test)]
mod system_test;

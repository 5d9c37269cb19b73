//! Physical quantities shared by the galaxy generator crates.
//!
//! Each quantity is a newtype over `f64` with a single base unit, so values can be
//! passed between crates without unit confusion and serialize as plain numbers.

mod ops;

pub mod length;
pub mod mass;
pub mod temperature;

#[cfg(test)]
mod temperature_test;

pub use length::Length;
pub use mass::{Mass, EARTH_MASS_KG, SOLAR_MASS_KG};
pub use temperature::Temperature;

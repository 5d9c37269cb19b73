//! Analytical model of the galaxy's stellar content.
//!
//! Everything here is a pure function of position (and of a [`GalaxyConfig`]):
//! the normalized density field, the calibrated stars-per-cubic-light-year
//! baseline, spiral arm geometry, stellar populations and region labels. The
//! versioned seed mixing used by every generator downstream also lives here so
//! that all crates draw from the same auditable streams.

pub mod calibration;
pub mod config;
pub mod density;
pub mod population;
pub mod position;
pub mod seed_stream;
pub mod spiral;

#[cfg(test)]
mod density_test;
#[cfg(test)]
mod position_test;
#[cfg(test)]
mod seed_stream_test;
#[cfg(test)]
mod spiral_test;

pub use calibration::{calibrated_stars_per_cubic_ly, CALIBRATION_TABLE};
pub use config::{ConfigError, DiskConfig, GalaxyConfig, HaloConfig, SpiralArmConfig};
pub use density::DensityField;
pub use population::{Population, Region, OUTER_DISC_RADIUS_LY};
pub use position::Position;
pub use seed_stream::{mix64, Purpose, SeedStream, SEED_MIXING_VERSION};
pub use spiral::SpiralArm;

/// Hermite smoothstep of `x` across `[edge0, edge1]`: 0 below, 1 above, C¹ in between.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

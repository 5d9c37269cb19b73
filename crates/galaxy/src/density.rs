//! Continuous stellar density of the galaxy.
//!
//! The normalized field combines three terms:
//!
//! - an exponential disk whose vertical scale height flares smoothly from the
//!   bulge value to the thin-disk value across a transition band,
//! - an NFW halo `ρ₀ / (x (1 + x)²)`, faded in beyond the halo onset radius,
//! - a spiral arm multiplier `max(1, 1 + Σ strength · weight)` applied to the disk.
//!
//! The sum is divided by the peak arm multiplier, clamped to `[0, 1]` and tapered
//! to zero at the galaxy edge. Absolute star counts come from the calibration
//! table; the normalized field only modulates it locally.

use crate::calibration::calibrated_stars_per_cubic_ly;
use crate::config::GalaxyConfig;
use crate::population::{Population, Region, OUTER_DISC_RADIUS_LY};
use crate::position::Position;
use crate::smoothstep;
use crate::spiral::SpiralArm;

/// Spherical radius inside which bodies are labelled as the galactic core.
pub const CORE_RADIUS_LY: f64 = 1_000.0;

/// Radius separating the inner from the outer disk label.
pub const INNER_DISK_RADIUS_LY: f64 = 20_000.0;

/// Arm strength above which a disk body is labelled as belonging to the arm.
pub const ARM_MEMBERSHIP_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct DensityField {
    config: GalaxyConfig,
}

impl Default for DensityField {
    fn default() -> Self {
        Self::new(GalaxyConfig::default())
    }
}

impl DensityField {
    pub fn new(config: GalaxyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    // =========================================================================
    // Normalized field
    // =========================================================================

    /// Normalized stellar density in `[0, 1]`.
    pub fn density(&self, position: &Position) -> f64 {
        let normalized = self.unnormalized(position) / (1.0 + self.config.arms.weight);
        normalized.clamp(0.0, 1.0) * self.edge_taper(position)
    }

    /// Vertical scale height at cylindrical radius `r`.
    pub fn scale_height(&self, r: f64) -> f64 {
        let disk = &self.config.disk;
        let t = smoothstep(disk.transition_start_ly, disk.transition_end_ly, r);
        disk.bulge_scale_height_ly + (disk.thin_scale_height_ly - disk.bulge_scale_height_ly) * t
    }

    /// Disk and bulge term before arm modulation.
    pub fn disk_term(&self, r: f64, z: f64) -> f64 {
        let radial = (-r.max(0.0) / self.config.disk.scale_length_ly).exp();
        let vertical = (-z.abs() / self.scale_height(r)).exp();
        radial * vertical
    }

    pub fn halo_term(&self, position: &Position) -> f64 {
        let halo = &self.config.halo;
        let radius = position.spherical_radius();
        let fade = smoothstep(
            halo.onset_radius_ly,
            halo.onset_radius_ly + halo.fade_width_ly,
            radius,
        );
        if fade <= 0.0 {
            return 0.0;
        }
        let x = radius / halo.scale_radius_ly;
        fade * halo.amplitude / (x * (1.0 + x).powi(2))
    }

    /// Strength of every arm at the position, in [`SpiralArm::ALL`] order.
    pub fn arm_strengths(&self, position: &Position) -> [(SpiralArm, f64); 4] {
        let r = position.r();
        let theta = position.theta();
        SpiralArm::ALL.map(|arm| (arm, arm.strength(r, theta, &self.config.arms)))
    }

    /// The strongest arm at the position, if any arm reaches it at all.
    pub fn dominant_arm(&self, position: &Position) -> Option<(SpiralArm, f64)> {
        self.arm_strengths(position)
            .into_iter()
            .filter(|(_, strength)| *strength > 0.0)
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Summed arm strength, used for the arm multiplier and the young-star boost.
    pub fn arm_strength(&self, position: &Position) -> f64 {
        self.arm_strengths(position).iter().map(|(_, s)| s).sum()
    }

    /// Disk multiplier; the inter-arm baseline is exactly 1.0.
    pub fn arm_multiplier(&self, position: &Position) -> f64 {
        (1.0 + self.arm_strength(position) * self.config.arms.weight).max(1.0)
    }

    /// Smooth falloff to zero over the last `edge_taper_ly` before the edge.
    pub fn edge_taper(&self, position: &Position) -> f64 {
        let edge = self.config.edge_radius_ly;
        1.0 - smoothstep(edge - self.config.edge_taper_ly, edge, position.spherical_radius())
    }

    fn unnormalized(&self, position: &Position) -> f64 {
        self.disk_term(position.r(), position.z()) * self.arm_multiplier(position)
            + self.halo_term(position)
    }

    // =========================================================================
    // Calibrated counts
    // =========================================================================

    /// Absolute stars per cubic light year at the position.
    ///
    /// The calibration table supplies the midplane baseline at this radius; the
    /// ratio of the local field to the inter-arm midplane field at the same
    /// radius supplies vertical falloff and arm enhancement.
    pub fn stars_per_cubic_ly(&self, position: &Position) -> f64 {
        let r = position.r();
        let midplane = Position::from_cylindrical(r, position.theta(), 0.0);
        let baseline = self.disk_term(r, 0.0) + self.halo_term(&midplane);
        if baseline <= 0.0 {
            return 0.0;
        }
        let modulation = self.unnormalized(position) / baseline;
        calibrated_stars_per_cubic_ly(r) * modulation * self.edge_taper(position)
    }

    // =========================================================================
    // Labels
    // =========================================================================

    pub fn population(&self, position: &Position) -> Population {
        Population::from_position(position)
    }

    /// True beyond the outer-disc radius, where compact remnants are suppressed.
    pub fn is_outer_disc(&self, position: &Position) -> bool {
        position.r() > OUTER_DISC_RADIUS_LY
    }

    pub fn region(&self, position: &Position) -> Region {
        if position.spherical_radius() < CORE_RADIUS_LY {
            return Region::GalacticCore;
        }
        match Population::from_position(position) {
            Population::Halo => Region::Halo,
            Population::Bulge => Region::Bulge,
            Population::ThinDisk | Population::ThickDisk => {
                match self.dominant_arm(position) {
                    Some((arm, strength)) if strength > ARM_MEMBERSHIP_THRESHOLD => {
                        Region::SpiralArm(arm)
                    }
                    _ => match position.r() {
                        r if r < INNER_DISK_RADIUS_LY => Region::InnerDisk,
                        r if r < OUTER_DISC_RADIUS_LY => Region::OuterDisk,
                        _ => Region::Rim,
                    },
                }
            }
        }
    }
}

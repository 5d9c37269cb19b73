//! Tunable parameters of the density model.
//!
//! Every field has a serde default, so a TOML file only needs to name the values
//! it overrides:
//!
//! ```toml
//! edge_radius_ly = 140000.0
//!
//! [arms]
//! pitch_deg = 14.0
//! ```
//!
//! Chunk size, seed layout and the calibration table are deliberately absent:
//! they define how bodies are addressed, not how the galaxy looks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a [`GalaxyConfig`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The TOML text could not be parsed into a config.
    #[error("failed to parse galaxy config: {0}")]
    Parse(String),

    /// A value parsed but lies outside the domain the model accepts.
    #[error("invalid galaxy config: {field} = {value} ({reason})")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

// =============================================================================
// Disk and bulge
// =============================================================================

/// Exponential disk whose scale height flares from a bulge value near the
/// center to a thin-disk value further out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiskConfig {
    #[serde(default = "default_scale_length")]
    pub scale_length_ly: f64,
    #[serde(default = "default_bulge_scale_height")]
    pub bulge_scale_height_ly: f64,
    #[serde(default = "default_thin_scale_height")]
    pub thin_scale_height_ly: f64,
    /// Radius where the scale height starts shrinking toward the thin-disk value.
    #[serde(default = "default_transition_start")]
    pub transition_start_ly: f64,
    /// Radius where the thin-disk scale height is fully reached.
    #[serde(default = "default_transition_end")]
    pub transition_end_ly: f64,
}

fn default_scale_length() -> f64 {
    11_000.0
}

fn default_bulge_scale_height() -> f64 {
    3_000.0
}

fn default_thin_scale_height() -> f64 {
    1_000.0
}

fn default_transition_start() -> f64 {
    3_000.0
}

fn default_transition_end() -> f64 {
    10_000.0
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            scale_length_ly: default_scale_length(),
            bulge_scale_height_ly: default_bulge_scale_height(),
            thin_scale_height_ly: default_thin_scale_height(),
            transition_start_ly: default_transition_start(),
            transition_end_ly: default_transition_end(),
        }
    }
}

// =============================================================================
// Halo
// =============================================================================

/// NFW-shaped stellar halo, faded in beyond `onset_radius_ly`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HaloConfig {
    #[serde(default = "default_halo_amplitude")]
    pub amplitude: f64,
    #[serde(default = "default_halo_scale_radius")]
    pub scale_radius_ly: f64,
    #[serde(default = "default_halo_onset")]
    pub onset_radius_ly: f64,
    #[serde(default = "default_halo_fade")]
    pub fade_width_ly: f64,
}

fn default_halo_amplitude() -> f64 {
    0.01
}

fn default_halo_scale_radius() -> f64 {
    60_000.0
}

fn default_halo_onset() -> f64 {
    40_000.0
}

fn default_halo_fade() -> f64 {
    10_000.0
}

impl Default for HaloConfig {
    fn default() -> Self {
        Self {
            amplitude: default_halo_amplitude(),
            scale_radius_ly: default_halo_scale_radius(),
            onset_radius_ly: default_halo_onset(),
            fade_width_ly: default_halo_fade(),
        }
    }
}

// =============================================================================
// Spiral arms
// =============================================================================

/// Logarithmic spiral arm geometry shared by all four arms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpiralArmConfig {
    #[serde(default = "default_pitch")]
    pub pitch_deg: f64,
    /// Radius at which each arm passes through its starting azimuth.
    #[serde(default = "default_reference_radius")]
    pub reference_radius_ly: f64,
    /// Gaussian half-width of an arm, measured along the azimuth in light years.
    #[serde(default = "default_arm_width")]
    pub width_ly: f64,
    #[serde(default = "default_arm_weight")]
    pub weight: f64,
    #[serde(default = "default_arm_onset_start")]
    pub onset_start_ly: f64,
    #[serde(default = "default_arm_onset_end")]
    pub onset_end_ly: f64,
}

fn default_pitch() -> f64 {
    12.0
}

fn default_reference_radius() -> f64 {
    6_000.0
}

fn default_arm_width() -> f64 {
    2_000.0
}

fn default_arm_weight() -> f64 {
    1.5
}

fn default_arm_onset_start() -> f64 {
    8_000.0
}

fn default_arm_onset_end() -> f64 {
    12_000.0
}

impl Default for SpiralArmConfig {
    fn default() -> Self {
        Self {
            pitch_deg: default_pitch(),
            reference_radius_ly: default_reference_radius(),
            width_ly: default_arm_width(),
            weight: default_arm_weight(),
            onset_start_ly: default_arm_onset_start(),
            onset_end_ly: default_arm_onset_end(),
        }
    }
}

// =============================================================================
// Galaxy
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalaxyConfig {
    #[serde(default)]
    pub disk: DiskConfig,
    #[serde(default)]
    pub halo: HaloConfig,
    #[serde(default)]
    pub arms: SpiralArmConfig,
    /// Outer boundary; density tapers smoothly to zero over `edge_taper_ly` before it.
    #[serde(default = "default_edge_radius")]
    pub edge_radius_ly: f64,
    #[serde(default = "default_edge_taper")]
    pub edge_taper_ly: f64,
}

fn default_edge_radius() -> f64 {
    150_000.0
}

fn default_edge_taper() -> f64 {
    10_000.0
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self::milky_way()
    }
}

impl GalaxyConfig {
    /// The canonical Milky Way model.
    pub fn milky_way() -> Self {
        Self {
            disk: DiskConfig::default(),
            halo: HaloConfig::default(),
            arms: SpiralArmConfig::default(),
            edge_radius_ly: default_edge_radius(),
            edge_taper_ly: default_edge_taper(),
        }
    }

    /// Parses a TOML document and validates the result.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GalaxyConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("disk.scale_length_ly", self.disk.scale_length_ly)?;
        positive("disk.bulge_scale_height_ly", self.disk.bulge_scale_height_ly)?;
        positive("disk.thin_scale_height_ly", self.disk.thin_scale_height_ly)?;
        non_negative("disk.transition_start_ly", self.disk.transition_start_ly)?;
        if self.disk.transition_end_ly <= self.disk.transition_start_ly {
            return Err(ConfigError::Invalid {
                field: "disk.transition_end_ly",
                value: self.disk.transition_end_ly,
                reason: "must exceed disk.transition_start_ly",
            });
        }

        non_negative("halo.amplitude", self.halo.amplitude)?;
        positive("halo.scale_radius_ly", self.halo.scale_radius_ly)?;
        non_negative("halo.onset_radius_ly", self.halo.onset_radius_ly)?;
        positive("halo.fade_width_ly", self.halo.fade_width_ly)?;

        if !(1.0..=60.0).contains(&self.arms.pitch_deg) {
            return Err(ConfigError::Invalid {
                field: "arms.pitch_deg",
                value: self.arms.pitch_deg,
                reason: "must lie within 1..=60 degrees",
            });
        }
        positive("arms.reference_radius_ly", self.arms.reference_radius_ly)?;
        positive("arms.width_ly", self.arms.width_ly)?;
        non_negative("arms.weight", self.arms.weight)?;
        if self.arms.onset_end_ly <= self.arms.onset_start_ly {
            return Err(ConfigError::Invalid {
                field: "arms.onset_end_ly",
                value: self.arms.onset_end_ly,
                reason: "must exceed arms.onset_start_ly",
            });
        }

        positive("edge_radius_ly", self.edge_radius_ly)?;
        positive("edge_taper_ly", self.edge_taper_ly)?;
        if self.edge_taper_ly >= self.edge_radius_ly {
            return Err(ConfigError::Invalid {
                field: "edge_taper_ly",
                value: self.edge_taper_ly,
                reason: "must be smaller than edge_radius_ly",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value,
            reason: "must be a positive finite number",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value,
            reason: "must be a non-negative finite number",
        })
    }
}

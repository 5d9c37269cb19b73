//! Top-level configuration file.
//!
//! ```toml
//! [galaxy]
//! edge_radius_ly = 140000.0
//!
//! [galaxy.arms]
//! pitch_deg = 14.0
//! ```

use galaxy::{ConfigError, GalaxyConfig};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UniverseConfig {
    #[serde(default)]
    pub galaxy: GalaxyConfig,
}

impl UniverseConfig {
    pub fn milky_way() -> Self {
        Self {
            galaxy: GalaxyConfig::milky_way(),
        }
    }

    /// Parses a TOML document and validates the result.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: UniverseConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.galaxy.validate()
    }
}

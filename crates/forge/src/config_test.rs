use approx::assert_relative_eq;
use galaxy::{ConfigError, GalaxyConfig};

use crate::config::UniverseConfig;
use crate::error::ForgeError;
use crate::universe::Universe;

#[test]
fn test_empty_document_is_milky_way() {
    let config = UniverseConfig::from_toml_str("").unwrap();
    assert_eq!(config, UniverseConfig::milky_way());
    assert_eq!(config.galaxy, GalaxyConfig::default());
}

#[test]
fn test_galaxy_table_overrides() {
    let text = r#"
        [galaxy]
        edge_radius_ly = 120000.0

        [galaxy.arms]
        pitch_deg = 15.0
    "#;
    let config = UniverseConfig::from_toml_str(text).unwrap();
    assert_relative_eq!(config.galaxy.edge_radius_ly, 120_000.0);
    assert_relative_eq!(config.galaxy.arms.pitch_deg, 15.0);
    assert_relative_eq!(config.galaxy.disk.scale_length_ly, 11_000.0);
}

#[test]
fn test_invalid_values_rejected() {
    let err = UniverseConfig::from_toml_str("[galaxy.arms]\npitch_deg = 0.0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));

    let err = UniverseConfig::from_toml_str("[galaxy\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_universe_rejects_invalid_config() {
    let mut config = UniverseConfig::milky_way();
    config.galaxy.edge_taper_ly = config.galaxy.edge_radius_ly;
    let err = Universe::new(config).unwrap_err();
    assert!(matches!(err, ForgeError::Config(_)));
    assert!(!err.is_validation());
    assert!(!err.is_not_found());
}

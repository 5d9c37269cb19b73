mod tests {
    use approx::assert_relative_eq;

    use crate::temperature::{Temperature, SOLAR_TEMPERATURE_K};

    #[test]
    fn test_celsius_offset() {
        let freezing = Temperature::from_celsius(0.0);
        assert_relative_eq!(freezing.to_kelvin(), 273.15);
        assert_relative_eq!(Temperature::from_kelvin(373.15).to_celsius(), 100.0);
    }

    #[test]
    fn test_solar_ratio() {
        let sun = Temperature::from_kelvin(SOLAR_TEMPERATURE_K);
        assert_relative_eq!(sun.to_solar(), 1.0);
        assert!(Temperature::from_kelvin(3_000.0) < sun);
    }
}

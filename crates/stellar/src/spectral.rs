use std::fmt;

use serde::{Deserialize, Serialize};

/// Harvard spectral letters of hydrogen-burning and evolved stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralType {
    /// Effective temperature band `(cool, hot)` in Kelvin.
    pub fn temperature_band(&self) -> (f64, f64) {
        match self {
            SpectralType::O => (30_000.0, 50_000.0),
            SpectralType::B => (10_000.0, 30_000.0),
            SpectralType::A => (7_500.0, 10_000.0),
            SpectralType::F => (6_000.0, 7_500.0),
            SpectralType::G => (5_200.0, 6_000.0),
            SpectralType::K => (3_700.0, 5_200.0),
            SpectralType::M => (2_400.0, 3_700.0),
        }
    }

    /// Subclass digit 0-9, 0 at the hot edge of the band.
    pub fn subtype(&self, temperature: f64) -> u8 {
        subtype_in_band(self.temperature_band(), temperature)
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", letter)
    }
}

/// Spectral classes of substellar objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrownDwarfClass {
    L,
    T,
    Y,
}

impl BrownDwarfClass {
    pub fn temperature_band(&self) -> (f64, f64) {
        match self {
            BrownDwarfClass::L => (1_300.0, 2_200.0),
            BrownDwarfClass::T => (600.0, 1_300.0),
            BrownDwarfClass::Y => (250.0, 600.0),
        }
    }

    pub fn subtype(&self, temperature: f64) -> u8 {
        subtype_in_band(self.temperature_band(), temperature)
    }
}

impl fmt::Display for BrownDwarfClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            BrownDwarfClass::L => "L",
            BrownDwarfClass::T => "T",
            BrownDwarfClass::Y => "Y",
        };
        write!(f, "{}", letter)
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuminosityClass {
    IA,  // Bright supergiants
    III, // Normal giants
    V,   // Main sequence
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            LuminosityClass::IA => "Ia",
            LuminosityClass::III => "III",
            LuminosityClass::V => "V",
        };
        write!(f, "{}", str)
    }
}

fn subtype_in_band((cool, hot): (f64, f64), temperature: f64) -> u8 {
    let fraction = (hot - temperature) / (hot - cool);
    (fraction * 10.0).floor().clamp(0.0, 9.0) as u8
}

use serde::{Deserialize, Serialize};

/// Display color of a stellar body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StellarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// Tanner Helland blackbody fit, working in units of temperature / 100.
// Reference: https://tannerhelland.com/2012/09/18/convert-temperature-rgb-algorithm-code.html
const HOT_THRESHOLD: f64 = 66.0;
const BLUE_CUTOFF: f64 = 19.0;

/// Blend toward grey; stars look whiter to the eye than a pure blackbody.
const DESATURATION: f64 = 0.3;

const MIN_TEMP_K: f64 = 1_000.0;
const MAX_TEMP_K: f64 = 40_000.0;

impl StellarColor {
    pub const BLACK: StellarColor = StellarColor { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Approximate color of a blackbody at `temperature` Kelvin.
    ///
    /// Temperatures are clamped to 1,000-40,000 K, so very cool brown dwarfs read
    /// as deep red and neutron stars as the hottest blue-white.
    pub fn from_temperature(temperature: f64) -> Self {
        let t = temperature.clamp(MIN_TEMP_K, MAX_TEMP_K) / 100.0;
        let (r, g, b) = (red(t), green(t), blue(t));

        let grey = (r + g + b) / 3.0;
        let desaturate = |channel: f64| (channel + (grey - channel) * DESATURATION).round() as u8;

        Self {
            r: desaturate(r),
            g: desaturate(g),
            b: desaturate(b),
        }
    }

    /// `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn red(t: f64) -> f64 {
    if t <= HOT_THRESHOLD {
        255.0
    } else {
        (329.698727446 * (t - 60.0).powf(-0.1332047592)).clamp(0.0, 255.0)
    }
}

fn green(t: f64) -> f64 {
    if t <= HOT_THRESHOLD {
        (99.4708025861 * t.ln() - 161.1195681661).clamp(0.0, 255.0)
    } else {
        (288.1221695283 * (t - 60.0).powf(-0.0755148492)).clamp(0.0, 255.0)
    }
}

fn blue(t: f64) -> f64 {
    match t {
        t if t >= HOT_THRESHOLD => 255.0,
        t if t <= BLUE_CUTOFF => 0.0,
        t => (138.5177312231 * (t - 10.0).ln() - 305.0447927307).clamp(0.0, 255.0),
    }
}

use std::f64::consts::{PI, TAU};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SpiralArmConfig;
use crate::smoothstep;

/// The four major arms, each starting a quarter turn after the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpiralArm {
    Perseus,
    Norma,
    ScutumCentaurus,
    Sagittarius,
}

impl SpiralArm {
    pub const ALL: [SpiralArm; 4] = [
        SpiralArm::Perseus,
        SpiralArm::Norma,
        SpiralArm::ScutumCentaurus,
        SpiralArm::Sagittarius,
    ];

    /// Azimuth (radians) at which the arm crosses the reference radius.
    pub fn start_angle(&self) -> f64 {
        match self {
            SpiralArm::Perseus => 0.0,
            SpiralArm::Norma => PI / 2.0,
            SpiralArm::ScutumCentaurus => PI,
            SpiralArm::Sagittarius => 3.0 * PI / 2.0,
        }
    }

    /// Arm centerline azimuth at radius `r`: `θ₀ + ln(r/r₀) / tan(pitch)`.
    pub fn centerline_angle(&self, r: f64, config: &SpiralArmConfig) -> f64 {
        let pitch = config.pitch_deg.to_radians();
        self.start_angle() + (r / config.reference_radius_ly).ln() / pitch.tan()
    }

    /// Arm membership strength in `[0, 1]` at cylindrical `(r, theta)`.
    ///
    /// Gaussian in the physical distance along the azimuth to the nearest
    /// winding of the arm, faded in across the arm onset band.
    pub fn strength(&self, r: f64, theta: f64, config: &SpiralArmConfig) -> f64 {
        let onset = smoothstep(config.onset_start_ly, config.onset_end_ly, r);
        if onset <= 0.0 {
            return 0.0;
        }
        let offset = wrap_angle(theta - self.centerline_angle(r, config));
        let distance = offset.abs() * r;
        let sigma = config.width_ly;
        onset * (-(distance * distance) / (2.0 * sigma * sigma)).exp()
    }
}

impl fmt::Display for SpiralArm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SpiralArm::Perseus => "Perseus",
            SpiralArm::Norma => "Norma",
            SpiralArm::ScutumCentaurus => "Scutum-Centaurus",
            SpiralArm::Sagittarius => "Sagittarius",
        };
        write!(f, "{}", name)
    }
}

/// Folds an angle into `(-π, π]`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

use std::f64::consts::TAU;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Galactocentric position in light years.
///
/// The galactic center is the origin and the disk lies in the x-y plane.
/// Serializes as a plain `[x, y, z]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(Point3<f64>);

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Point3::new(x, y, z))
    }

    pub fn origin() -> Self {
        Self(Point3::origin())
    }

    /// Builds a position from cylindrical radius, azimuth (radians) and height.
    pub fn from_cylindrical(r: f64, theta: f64, z: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin(), z)
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Height above (or below) the galactic plane.
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Cylindrical radius from the galactic rotation axis.
    pub fn r(&self) -> f64 {
        self.0.x.hypot(self.0.y)
    }

    /// Azimuth `atan2(y, x)` in `(-π, π]`.
    pub fn theta(&self) -> f64 {
        self.0.y.atan2(self.0.x)
    }

    /// Azimuth folded into `[0, 2π)`, the convention chunk coordinates use.
    pub fn theta_positive(&self) -> f64 {
        let theta = self.theta().rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if theta >= TAU {
            0.0
        } else {
            theta
        }
    }

    /// Distance from the galactic center.
    pub fn spherical_radius(&self) -> f64 {
        self.0.coords.norm()
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        nalgebra::distance(&self.0, &other.0)
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.0.x, self.0.y, self.0.z]
    }
}

impl From<[f64; 3]> for Position {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

use std::fmt;
use std::str::FromStr;

use galaxy::Position;
use serde::{Deserialize, Serialize};

use crate::error::{SpatialError, SpatialResult};

/// Radial and vertical extent of a chunk.
pub const CHUNK_SIZE_LY: f64 = 100.0;

/// Angular extent of a chunk in degrees.
pub const CHUNK_ANGLE_DEG: f64 = 1.0;

/// Radial chunks span `0..RADIAL_CHUNKS`, i.e. out to 150,000 ly.
pub const RADIAL_CHUNKS: u32 = 1_500;

pub const ANGULAR_CHUNKS: u32 = 360;

/// Vertical chunks span `-MAX_VERTICAL..=MAX_VERTICAL`.
pub const MAX_VERTICAL: i32 = 127;

/// Integer coordinates of a chunk. Always in range once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    radial: u32,
    angular: u32,
    vertical: i32,
}

impl ChunkCoord {
    pub fn new(radial: i64, angular: i64, vertical: i64) -> SpatialResult<Self> {
        let radial = check("radial", radial, 0, i64::from(RADIAL_CHUNKS) - 1)?;
        let angular = check("angular", angular, 0, i64::from(ANGULAR_CHUNKS) - 1)?;
        let vertical = check(
            "vertical",
            vertical,
            -i64::from(MAX_VERTICAL),
            i64::from(MAX_VERTICAL),
        )?;
        Ok(Self {
            radial: radial as u32,
            angular: angular as u32,
            vertical: vertical as i32,
        })
    }

    /// The chunk containing `position`.
    pub fn from_position(position: &Position) -> SpatialResult<Self> {
        let radial = (position.r() / CHUNK_SIZE_LY).floor() as i64;
        let angular = (position.theta_positive().to_degrees() / CHUNK_ANGLE_DEG).floor() as i64;
        let vertical = (position.z() / CHUNK_SIZE_LY).floor() as i64;
        // degrees can round up to exactly 360 just below 2π
        Self::new(radial, angular.min(i64::from(ANGULAR_CHUNKS) - 1), vertical)
    }

    pub fn radial(&self) -> u32 {
        self.radial
    }

    pub fn angular(&self) -> u32 {
        self.angular
    }

    pub fn vertical(&self) -> i32 {
        self.vertical
    }

    pub fn bounds(&self) -> ChunkBounds {
        let r_min = f64::from(self.radial) * CHUNK_SIZE_LY;
        let theta_min = (f64::from(self.angular) * CHUNK_ANGLE_DEG).to_radians();
        let z_min = f64::from(self.vertical) * CHUNK_SIZE_LY;
        ChunkBounds {
            r_min,
            r_max: r_min + CHUNK_SIZE_LY,
            theta_min,
            theta_max: theta_min + CHUNK_ANGLE_DEG.to_radians(),
            z_min,
            z_max: z_min + CHUNK_SIZE_LY,
        }
    }
}

fn check(field: &'static str, value: i64, min: i64, max: i64) -> SpatialResult<i64> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(SpatialError::FieldOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}_{}", self.radial, self.angular, self.vertical)
    }
}

impl FromStr for ChunkCoord {
    type Err = SpatialError;

    /// Parses `R_Theta_Z`, e.g. `260_45_-3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SpatialError::MalformedChunk(s.to_string());
        let parts: Vec<&str> = s.trim().split('_').collect();
        let [r, theta, z] = parts.as_slice() else {
            return Err(malformed());
        };
        let parse = |part: &str| part.parse::<i64>().map_err(|_| malformed());
        ChunkCoord::new(parse(r)?, parse(theta)?, parse(z)?)
    }
}

/// Cylindrical bounds of a chunk; radii and heights in ly, angles in radians.
///
/// Every bound is half-open: `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChunkBounds {
    pub r_min: f64,
    pub r_max: f64,
    pub theta_min: f64,
    pub theta_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl ChunkBounds {
    /// Volume of the cylindrical wedge in cubic light years.
    pub fn volume(&self) -> f64 {
        let d_theta = self.theta_max - self.theta_min;
        let height = self.z_max - self.z_min;
        if self.r_min <= 0.0 {
            // innermost chunk is a true wedge reaching the axis
            0.5 * d_theta * self.r_max * self.r_max * height
        } else {
            0.5 * d_theta * (self.r_max * self.r_max - self.r_min * self.r_min) * height
        }
    }

    pub fn contains(&self, position: &Position) -> bool {
        let r = position.r();
        let theta = position.theta_positive();
        let z = position.z();
        (self.r_min..self.r_max).contains(&r)
            && (self.theta_min..self.theta_max).contains(&theta)
            && (self.z_min..self.z_max).contains(&z)
    }

    pub fn center(&self) -> Position {
        self.point_at(0.5, 0.5, 0.5)
    }

    /// Maps unit-cube coordinates to a point in the wedge.
    ///
    /// The radial coordinate is area-weighted (`r² ∝ u`) so a uniform `u` gives
    /// points uniform in volume rather than crowded toward the axis.
    pub fn point_at(&self, u: f64, v: f64, w: f64) -> Position {
        let r_min_sq = self.r_min * self.r_min;
        let r = (r_min_sq + u * (self.r_max * self.r_max - r_min_sq)).sqrt();
        let theta = self.theta_min + v * (self.theta_max - self.theta_min);
        let z = self.z_min + w * (self.z_max - self.z_min);
        Position::from_cylindrical(r, theta, z)
    }
}

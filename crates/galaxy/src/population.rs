use std::fmt;

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::spiral::SpiralArm;

/// Bulge extent: cylindrical radius and half-height.
pub const BULGE_RADIUS_LY: f64 = 6_000.0;
pub const BULGE_HALF_HEIGHT_LY: f64 = 4_000.0;

/// Thin-disk half-height; above it stars belong to the thick disk.
pub const THIN_DISK_HALF_HEIGHT_LY: f64 = 1_000.0;

/// Thick-disk half-height; above it stars belong to the halo.
pub const THICK_DISK_HALF_HEIGHT_LY: f64 = 6_000.0;

/// Radius beyond which the disk gives way to the halo regardless of height.
pub const HALO_RADIUS_LY: f64 = 60_000.0;

/// Beyond this radius the disc is considered "outer" and compact remnants are rarer.
pub const OUTER_DISC_RADIUS_LY: f64 = 50_000.0;

/// Stellar population, decided purely by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Population {
    Bulge,
    ThinDisk,
    ThickDisk,
    Halo,
}

impl Population {
    pub fn from_position(position: &Position) -> Self {
        let r = position.r();
        let height = position.z().abs();
        match (r, height) {
            (r, h) if r < BULGE_RADIUS_LY && h < BULGE_HALF_HEIGHT_LY => Population::Bulge,
            (r, h) if r > HALO_RADIUS_LY || h > THICK_DISK_HALF_HEIGHT_LY => Population::Halo,
            (_, h) if h > THIN_DISK_HALF_HEIGHT_LY => Population::ThickDisk,
            _ => Population::ThinDisk,
        }
    }

    /// Mean [Fe/H] of the population in dex.
    pub fn mean_metallicity(&self) -> f64 {
        match self {
            Population::Bulge => 0.1,
            Population::ThinDisk => 0.0,
            Population::ThickDisk => -0.5,
            Population::Halo => -1.5,
        }
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Population::Bulge => "bulge",
            Population::ThinDisk => "thin disk",
            Population::ThickDisk => "thick disk",
            Population::Halo => "halo",
        };
        write!(f, "{}", name)
    }
}

/// Descriptive location label attached to every generated body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "arm")]
pub enum Region {
    GalacticCore,
    Bulge,
    SpiralArm(SpiralArm),
    InnerDisk,
    OuterDisk,
    Rim,
    Halo,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Region::GalacticCore => write!(f, "Galactic Core"),
            Region::Bulge => write!(f, "Bulge"),
            Region::SpiralArm(arm) => write!(f, "{} Arm", arm),
            Region::InnerDisk => write!(f, "Inner Disk"),
            Region::OuterDisk => write!(f, "Outer Disk"),
            Region::Rim => write!(f, "Rim"),
            Region::Halo => write!(f, "Halo"),
        }
    }
}

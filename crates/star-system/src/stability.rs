//! S-type orbital stability around one member of a multiple system
//!
//! A planet circling one star of a close pair survives only well inside the
//! pair's separation. The outer edge follows Holman & Wiegert (1999) in its
//! simplest form, `a_crit ≈ (0.3 − 0.2μ)·a_bin` with `μ = m_c/(m_s + m_c)`;
//! the inner edge is the star's own Roche limit for a rocky planet.

use planetary::{renumber, Planet};
use serde::{Deserialize, Serialize};
use stellar::StellarProperties;
use units::{Length, Mass};

/// Companions farther than this leave a star's planets alone
pub const CLOSE_COMPANION_AU: f64 = 100.0;

/// Floor on the inner edge of the stable zone
pub const MIN_INNER_LIMIT_AU: f64 = 0.005;

/// Outer edge as a fraction of the separation, `(min, max)`
pub const OUTER_FACTOR_RANGE: (f64, f64) = (0.2, 0.3);

/// Mean solar density in g/cm³
const SOLAR_DENSITY: f64 = 1.41;

/// Density of a rocky planet in g/cm³
const ROCKY_PLANET_DENSITY: f64 = 5.5;

/// The nearest other star to a system member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    pub separation: Length,
    pub mass: Mass,
}

/// Orbits around one star that stay stable next to its nearest neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StableZone {
    pub inner: Length,
    pub outer: Length,
}

impl StableZone {
    pub fn new(star: &StellarProperties, neighbour: Neighbour) -> Self {
        let star_mass = star.mass.to_solar_masses();
        let mu = neighbour.mass.to_solar_masses() / (star_mass + neighbour.mass.to_solar_masses());
        let factor = (0.3 - 0.2 * mu).clamp(OUTER_FACTOR_RANGE.0, OUTER_FACTOR_RANGE.1);
        Self {
            inner: inner_limit(star),
            outer: neighbour.separation * factor,
        }
    }

    /// Zone for `star`, or `None` when its nearest neighbour is not close.
    pub fn for_neighbour(star: &StellarProperties, neighbour: Option<Neighbour>) -> Option<Self> {
        neighbour
            .filter(|n| n.separation.to_au() < CLOSE_COMPANION_AU)
            .map(|n| Self::new(star, n))
    }

    pub fn contains(&self, distance: Length) -> bool {
        distance >= self.inner && distance <= self.outer
    }

    /// No orbit fits: the outer edge lies at or inside the star's Roche limit.
    pub fn is_empty(&self) -> bool {
        self.inner >= self.outer
    }
}

/// Roche limit of a star for a rocky planet, `2.44·R·(ρ*/ρp)^(1/3)`, floored at 0.005 AU.
pub fn inner_limit(star: &StellarProperties) -> Length {
    let radius_solar = star.radius.to_solar_radii();
    let density = match radius_solar {
        r if r > 0.0 => SOLAR_DENSITY * star.mass.to_solar_masses() / r.powi(3),
        _ => 0.0,
    };
    let roche = star.radius * (2.44 * (density / ROCKY_PLANET_DENSITY).cbrt());
    roche.max(Length::from_au(MIN_INNER_LIMIT_AU))
}

/// Nearest neighbour of member `index` among stars at `separations` from the primary.
///
/// Index 0 is the primary (separation zero). Companions form a hierarchy: each
/// outer companion orbits everything inside it, so two members are as far
/// apart as the wider of their two separations.
pub fn nearest_neighbour(index: usize, members: &[(Length, Mass)]) -> Option<Neighbour> {
    let (own, _) = *members.get(index)?;
    members
        .iter()
        .enumerate()
        .filter(|&(other, _)| other != index)
        .map(|(_, &(separation, mass))| Neighbour {
            separation: own.max(separation),
            mass,
        })
        .min_by(|a, b| a.separation.to_au().total_cmp(&b.separation.to_au()))
}

/// Keeps the planets inside `zone` and renumbers them 1..M.
///
/// Returns how many planets were dropped. Without a zone every planet is kept.
pub fn apply_stable_zone(planets: &mut Vec<Planet>, zone: Option<StableZone>) -> usize {
    let Some(zone) = zone else {
        return 0;
    };
    let before = planets.len();
    planets.retain(|p| zone.contains(p.semi_major_axis));
    renumber(planets);
    before - planets.len()
}

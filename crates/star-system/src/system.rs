//! The generated star system tree and its generator.

use std::fmt;

use galaxy::{Purpose, SeedStream};
use planetary::{attach_moons, generate_planets, Moon, Planet};
use serde::{Deserialize, Serialize};
use stellar::StellarProperties;
use tracing::{debug, trace};
use units::{Length, Mass};

use crate::companion::generate_companions;
use crate::stability::{apply_stable_zone, nearest_neighbour, StableZone};

/// Designator of the primary star
pub const PRIMARY_DESIGNATOR: char = 'A';

/// One star of a system with its planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStar {
    /// `A` for the primary, `B`..`D` for companions by increasing separation
    pub designator: char,
    /// Separation from the primary; zero for the primary itself
    pub separation: Length,
    pub properties: StellarProperties,
    /// Stable zone the planets were filtered against, when a close neighbour exists
    pub stable_zone: Option<StableZone>,
    pub planets: Vec<Planet>,
}

impl SystemStar {
    pub fn is_primary(&self) -> bool {
        self.designator == PRIMARY_DESIGNATOR
    }

    /// Planet by its 1-based number
    pub fn planet(&self, number: u32) -> Option<&Planet> {
        self.planets.iter().find(|p| p.number == number)
    }

    pub fn moon_count(&self) -> usize {
        self.planets.iter().map(|p| p.moons.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub seed: u64,
    pub primary: SystemStar,
    pub companions: Vec<SystemStar>,
}

impl StarSystem {
    /// A single star with nothing around it.
    pub fn solitary(seed: u64, properties: StellarProperties) -> Self {
        Self {
            seed,
            primary: SystemStar {
                designator: PRIMARY_DESIGNATOR,
                separation: Length::zero(),
                properties,
                stable_zone: None,
                planets: Vec::new(),
            },
            companions: Vec::new(),
        }
    }

    pub fn is_multiple(&self) -> bool {
        !self.companions.is_empty()
    }

    /// Primary first, then companions in designation order.
    pub fn stars(&self) -> impl Iterator<Item = &SystemStar> {
        std::iter::once(&self.primary).chain(self.companions.iter())
    }

    pub fn star(&self, designator: char) -> Option<&SystemStar> {
        self.stars().find(|s| s.designator == designator)
    }

    pub fn planet_count(&self) -> usize {
        self.stars().map(|s| s.planets.len()).sum()
    }

    pub fn moon_count(&self) -> usize {
        self.stars().map(SystemStar::moon_count).sum()
    }

    /// Every star, planet and moon exactly once, depth first.
    ///
    /// Binary partners are siblings at the same level, so they appear once
    /// each and are never followed as children.
    pub fn walk(&self) -> impl Iterator<Item = SystemNode<'_>> {
        self.stars().flat_map(|star| {
            std::iter::once(SystemNode::Star(star)).chain(star.planets.iter().flat_map(
                move |planet| {
                    std::iter::once(SystemNode::Planet { star, planet }).chain(
                        planet
                            .moons
                            .iter()
                            .map(move |moon| SystemNode::Moon { star, planet, moon }),
                    )
                },
            ))
        })
    }
}

/// A member of the system tree as visited by [`StarSystem::walk`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SystemNode<'a> {
    Star(&'a SystemStar),
    Planet {
        star: &'a SystemStar,
        planet: &'a Planet,
    },
    Moon {
        star: &'a SystemStar,
        planet: &'a Planet,
        moon: &'a Moon,
    },
}

impl SystemNode<'_> {
    pub fn path(&self) -> SystemPath {
        match self {
            SystemNode::Star(star) => SystemPath::star(star.designator),
            SystemNode::Planet { star, planet } => SystemPath {
                star: star.designator,
                planet: Some(planet.number),
                moon: None,
            },
            SystemNode::Moon { star, planet, moon } => SystemPath {
                star: star.designator,
                planet: Some(planet.number),
                moon: Some(moon.letter),
            },
        }
    }
}

/// Location of a member inside its system.
///
/// Displays as the address suffix `B-2-a`; the primary's letter is left out
/// so primary members read `2-a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemPath {
    pub star: char,
    pub planet: Option<u32>,
    pub moon: Option<char>,
}

impl SystemPath {
    pub fn star(designator: char) -> Self {
        Self {
            star: designator,
            planet: None,
            moon: None,
        }
    }
}

impl fmt::Display for SystemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if self.star != PRIMARY_DESIGNATOR {
            parts.push(self.star.to_string());
        }
        if let Some(planet) = self.planet {
            parts.push(planet.to_string());
        }
        if let Some(moon) = self.moon {
            parts.push(moon.to_string());
        }
        write!(f, "{}", parts.join("-"))
    }
}

/// Builds the full system for a primary body.
///
/// Stages, each drawing from its own stream of `seed`:
/// 1. companions (count, masses, separations, designators)
/// 2. planets per star, keyed by the star's index in designation order
/// 3. stability filtering against each star's nearest neighbour
/// 4. moons per retained planet, keyed by star index and planet slot
pub fn generate_system(seed: u64, primary: StellarProperties) -> StarSystem {
    let companions =
        generate_companions(&primary, SeedStream::for_purpose(seed, Purpose::Companions));

    let members: Vec<(Length, Mass)> = std::iter::once((Length::zero(), primary.mass))
        .chain(companions.iter().map(|c| (c.separation, c.properties.mass)))
        .collect();
    let streams = StarStreams {
        seed,
        planets: SeedStream::for_purpose(seed, Purpose::Planets),
        moons: SeedStream::for_purpose(seed, Purpose::Moons),
    };

    let primary = streams.star(0, PRIMARY_DESIGNATOR, Length::zero(), primary, &members);
    let companions = companions
        .into_iter()
        .enumerate()
        .map(|(i, c)| streams.star(i + 1, c.designator, c.separation, c.properties, &members))
        .collect();

    StarSystem {
        seed,
        primary,
        companions,
    }
}

struct StarStreams {
    seed: u64,
    planets: SeedStream,
    moons: SeedStream,
}

impl StarStreams {
    /// Planets, stability filtering and moons for the member at `index`.
    fn star(
        &self,
        index: usize,
        designator: char,
        separation: Length,
        properties: StellarProperties,
        members: &[(Length, Mass)],
    ) -> SystemStar {
        let salt = index as u64;
        let mut planets = generate_planets(&properties, self.planets.child(salt));

        let zone = StableZone::for_neighbour(&properties, nearest_neighbour(index, members));
        if let Some(zone) = zone.filter(StableZone::is_empty) {
            debug!(
                seed = self.seed,
                star = %designator,
                inner_au = zone.inner.to_au(),
                outer_au = zone.outer.to_au(),
                "no stable orbits around star"
            );
        }
        let dropped = apply_stable_zone(&mut planets, zone);
        if dropped > 0 {
            debug!(
                seed = self.seed,
                star = %designator,
                dropped,
                kept = planets.len(),
                "planets outside stable zone removed"
            );
        }

        attach_moons(&mut planets, properties.mass, self.moons.child(salt));
        trace!(
            seed = self.seed,
            star = %designator,
            stellar_type = %properties.stellar_type,
            planets = planets.len(),
            "system star generated"
        );

        SystemStar {
            designator,
            separation,
            properties,
            stable_zone: zone,
            planets,
        }
    }
}

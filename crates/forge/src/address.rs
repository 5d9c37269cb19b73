//! Textual addresses of bodies and their system members.
//!
//! Two spellings name the same thing:
//!
//! * dash form, decimal seed first: `12345678`, `12345678-B`, `12345678-A-2-b`
//! * underscore form, explicit chunk and index first: `260_45_0_100_A_2_b`
//!   (the vertical coordinate may be negative: `260_45_-3_100_2`)
//!
//! After the body come, in order and each optional: one uppercase star letter,
//! a planet number from 1, and a lowercase moon letter (only after a planet).

use std::fmt;
use std::str::FromStr;

use spatial::seed::encode_chunk;
use spatial::ChunkCoord;
use star_system::{SystemPath, PRIMARY_DESIGNATOR};

use crate::error::{ForgeError, ForgeResult};

/// The body an address starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyRef {
    Seed(u64),
    Chunk { chunk: ChunkCoord, index: u64 },
}

impl BodyRef {
    /// The seed this reference names.
    pub fn seed(&self) -> ForgeResult<u64> {
        match self {
            BodyRef::Seed(seed) => Ok(*seed),
            BodyRef::Chunk { chunk, index } => Ok(encode_chunk(chunk, *index)?),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    pub body: BodyRef,
    /// Explicit star letter; `None` means the primary
    pub star: Option<char>,
    pub planet: Option<u32>,
    pub moon: Option<char>,
}

impl Address {
    pub fn seed(seed: u64) -> Self {
        Self {
            body: BodyRef::Seed(seed),
            star: None,
            planet: None,
            moon: None,
        }
    }

    /// Member path inside the system; an absent star letter is the primary.
    pub fn path(&self) -> SystemPath {
        SystemPath {
            star: self.star.unwrap_or(PRIMARY_DESIGNATOR),
            planet: self.planet,
            moon: self.moon,
        }
    }

    fn suffix(&self) -> Vec<String> {
        let mut parts = Vec::with_capacity(3);
        if let Some(star) = self.star {
            parts.push(star.to_string());
        }
        if let Some(planet) = self.planet {
            parts.push(planet.to_string());
        }
        if let Some(moon) = self.moon {
            parts.push(moon.to_string());
        }
        parts
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.body {
            BodyRef::Seed(seed) => {
                write!(f, "{}", seed)?;
                for part in self.suffix() {
                    write!(f, "-{}", part)?;
                }
            }
            BodyRef::Chunk { chunk, index } => {
                write!(f, "{}_{}", chunk, index)?;
                for part in self.suffix() {
                    write!(f, "_{}", part)?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let malformed = |reason: &'static str| ForgeError::MalformedAddress {
            address: s.to_string(),
            reason,
        };
        if text.is_empty() {
            return Err(malformed("empty address"));
        }

        let (body, rest) = if text.contains('_') {
            let parts: Vec<&str> = text.split('_').collect();
            if parts.len() < 4 {
                return Err(malformed("expected R_Theta_Z_index"));
            }
            let coord = |part: &str| {
                part.parse::<i64>()
                    .map_err(|_| malformed("chunk coordinates must be integers"))
            };
            let chunk = ChunkCoord::new(coord(parts[0])?, coord(parts[1])?, coord(parts[2])?)?;
            let index = parts[3]
                .parse::<u64>()
                .map_err(|_| malformed("body index must be a non-negative integer"))?;
            (BodyRef::Chunk { chunk, index }, parts[4..].to_vec())
        } else {
            let mut parts = text.split('-');
            let seed = parts
                .next()
                .unwrap_or_default()
                .parse::<u64>()
                .map_err(|_| malformed("seed must be a non-negative integer"))?;
            (BodyRef::Seed(seed), parts.collect::<Vec<&str>>())
        };

        let mut address = Address {
            body,
            star: None,
            planet: None,
            moon: None,
        };
        let mut tokens = rest.into_iter().peekable();

        if let Some(token) = tokens.next_if(|t| is_letter(t, char::is_ascii_uppercase)) {
            address.star = single_char(token);
        }
        if let Some(token) = tokens.next_if(|t| is_number(t)) {
            let planet = token
                .parse::<u32>()
                .map_err(|_| malformed("planet number too large"))?;
            if planet == 0 {
                return Err(malformed("planets are numbered from 1"));
            }
            address.planet = Some(planet);
        }
        if address.planet.is_some() {
            if let Some(token) = tokens.next_if(|t| is_letter(t, char::is_ascii_lowercase)) {
                address.moon = single_char(token);
            }
        }

        match tokens.next() {
            None => Ok(address),
            Some("") => Err(malformed("empty component")),
            Some(t) if is_letter(t, char::is_ascii_lowercase) => {
                Err(malformed("a moon letter must follow a planet number"))
            }
            Some(_) => Err(malformed("unexpected component")),
        }
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn is_letter(token: &str, case: fn(&char) -> bool) -> bool {
    single_char(token).is_some_and(|c| case(&c))
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

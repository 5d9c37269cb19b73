//! Versioned seed mixing.
//!
//! Every pseudorandom draw in the generator comes from a [`SeedStream`]: a 64-bit
//! state derived from a body seed by the documented bit operations below, then
//! expanded by ChaCha. A sub-part of a body (its position, its companions, planet
//! 3 of companion B, ...) is reached by chaining [`SeedStream::child`] with fixed
//! salts, so each sub-part owns an independent stream and generating one part
//! never shifts the numbers another part sees.
//!
//! Mixing, version 1:
//!
//! ```text
//! mix64(z)     = z ^= z >> 30; z *= 0xBF58476D1CE4E5B9;
//!                z ^= z >> 27; z *= 0x94D049BB133111EB;
//!                z ^= z >> 31                       (SplitMix64 finalizer)
//! new(seed)    = mix64(seed + GOLDEN_GAMMA)
//! child(s, k)  = mix64(s ^ mix64(k + GOLDEN_GAMMA))
//! rng(s)       = ChaChaRng::seed_from_u64(s)
//! ```
//!
//! All arithmetic wraps. Changing any constant here changes every generated
//! body, so it must come with a bump of [`SEED_MIXING_VERSION`].

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

/// Version of the mixing scheme documented above.
pub const SEED_MIXING_VERSION: u32 = 1;

/// Weyl-sequence increment of SplitMix64 (2⁶⁴ / φ).
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 output finalizer.
pub fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// What a stream is used for. Each purpose has a fixed salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    Position,
    Properties,
    Companions,
    Planets,
    Moons,
}

impl Purpose {
    pub fn salt(&self) -> u64 {
        match self {
            Purpose::Position => 0x01,
            Purpose::Properties => 0x02,
            Purpose::Companions => 0x03,
            Purpose::Planets => 0x04,
            Purpose::Moons => 0x05,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedStream(u64);

impl SeedStream {
    pub fn new(seed: u64) -> Self {
        Self(mix64(seed.wrapping_add(GOLDEN_GAMMA)))
    }

    /// Shorthand for `SeedStream::new(seed).child(purpose.salt())`.
    pub fn for_purpose(seed: u64, purpose: Purpose) -> Self {
        Self::new(seed).child(purpose.salt())
    }

    /// Independent sub-stream selected by `salt`.
    pub fn child(self, salt: u64) -> Self {
        Self(mix64(self.0 ^ mix64(salt.wrapping_add(GOLDEN_GAMMA))))
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// A fresh generator positioned at the start of this stream.
    pub fn rng(&self) -> ChaChaRng {
        ChaChaRng::seed_from_u64(self.0)
    }
}

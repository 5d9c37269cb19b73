//! Spatial addressing of generated bodies.
//!
//! Space is cut into fixed-size cylindrical wedges ("chunks") of 100 ly radially
//! and vertically and 1° in azimuth. A body is identified by its chunk and its
//! index within the chunk, packed into a single 64-bit seed by [`seed`]. The
//! [`index`] module decides how many bodies a chunk holds and where each one sits.

pub mod chunk;
pub mod error;
pub mod index;
pub mod seed;

#[cfg(test)]
mod chunk_test;

pub use chunk::{ChunkBounds, ChunkCoord, CHUNK_SIZE_LY};
pub use error::SpatialError;
pub use index::{BodySlot, ChunkBodies, ChunkIndex};
pub use seed::{decode, encode, SeedFields};

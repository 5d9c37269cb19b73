//! Packing of `(radial, angular, vertical, index)` into a 64-bit seed.
//!
//! ```text
//!  63        53 52      44 43    36 35                                0
//! +------------+----------+--------+----------------------------------+
//! | radial(11) | angle(9) | z+128  |            index (36)            |
//! +------------+----------+--------+----------------------------------+
//! ```
//!
//! Valid vertical chunks are `-127..=127`, stored as `1..=255`. A stored vertical
//! of 0 therefore never comes out of [`encode`], which keeps every seed below
//! 2³⁶ (seed 0 included) free for special objects.

use serde::{Deserialize, Serialize};

use crate::chunk::{ChunkCoord, ANGULAR_CHUNKS, MAX_VERTICAL, RADIAL_CHUNKS};
use crate::error::{SpatialError, SpatialResult};

pub const INDEX_BITS: u32 = 36;
pub const VERTICAL_BITS: u32 = 8;
pub const ANGULAR_BITS: u32 = 9;
pub const RADIAL_BITS: u32 = 11;

const VERTICAL_SHIFT: u32 = INDEX_BITS;
const ANGULAR_SHIFT: u32 = VERTICAL_SHIFT + VERTICAL_BITS;
const RADIAL_SHIFT: u32 = ANGULAR_SHIFT + ANGULAR_BITS;

const INDEX_MASK: u64 = (1 << INDEX_BITS) - 1;
const VERTICAL_MASK: u64 = (1 << VERTICAL_BITS) - 1;
const ANGULAR_MASK: u64 = (1 << ANGULAR_BITS) - 1;
const RADIAL_MASK: u64 = (1 << RADIAL_BITS) - 1;

/// Offset added to the vertical chunk before packing.
pub const VERTICAL_OFFSET: i64 = 128;

/// Exclusive upper bound of the within-chunk index.
pub const INDEX_LIMIT: u64 = 1 << INDEX_BITS;

// Field widths must tile the seed exactly and hold every valid value.
const _: () = assert!(RADIAL_BITS + ANGULAR_BITS + VERTICAL_BITS + INDEX_BITS == 64);
const _: () = assert!((RADIAL_CHUNKS as u64) <= 1 << RADIAL_BITS);
const _: () = assert!((ANGULAR_CHUNKS as u64) <= 1 << ANGULAR_BITS);
const _: () = assert!((MAX_VERTICAL as i64 + VERTICAL_OFFSET) < 1 << VERTICAL_BITS);

/// Raw fields of a seed, exactly as unpacked.
///
/// Decoding never fails; whether the fields describe a real chunk is checked by
/// [`SeedFields::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedFields {
    pub radial: i64,
    pub angular: i64,
    pub vertical: i64,
    pub index: u64,
}

impl SeedFields {
    pub fn as_tuple(&self) -> (i64, i64, i64, u64) {
        (self.radial, self.angular, self.vertical, self.index)
    }

    /// The chunk and index these fields address, if they are in range.
    pub fn validate(&self) -> SpatialResult<(ChunkCoord, u64)> {
        let chunk = ChunkCoord::new(self.radial, self.angular, self.vertical)?;
        Ok((chunk, self.index))
    }
}

/// Packs chunk coordinates and a within-chunk index into a seed.
pub fn encode(radial: i64, angular: i64, vertical: i64, index: u64) -> SpatialResult<u64> {
    let chunk = ChunkCoord::new(radial, angular, vertical)?;
    encode_chunk(&chunk, index)
}

/// Same as [`encode`] for an already validated chunk.
pub fn encode_chunk(chunk: &ChunkCoord, index: u64) -> SpatialResult<u64> {
    if index >= INDEX_LIMIT {
        return Err(SpatialError::FieldOutOfRange {
            field: "index",
            value: index.min(i64::MAX as u64) as i64,
            min: 0,
            max: (INDEX_LIMIT - 1) as i64,
        });
    }
    Ok(pack(chunk, index))
}

/// Unchecked packing; `index` must be below [`INDEX_LIMIT`].
pub(crate) fn pack(chunk: &ChunkCoord, index: u64) -> u64 {
    let vertical = (i64::from(chunk.vertical()) + VERTICAL_OFFSET) as u64;
    (u64::from(chunk.radial()) << RADIAL_SHIFT)
        | (u64::from(chunk.angular()) << ANGULAR_SHIFT)
        | (vertical << VERTICAL_SHIFT)
        | (index & INDEX_MASK)
}

/// Exact inverse of the packing shifts and masks.
pub fn decode(seed: u64) -> SeedFields {
    SeedFields {
        radial: ((seed >> RADIAL_SHIFT) & RADIAL_MASK) as i64,
        angular: ((seed >> ANGULAR_SHIFT) & ANGULAR_MASK) as i64,
        vertical: ((seed >> VERTICAL_SHIFT) & VERTICAL_MASK) as i64 - VERTICAL_OFFSET,
        index: seed & INDEX_MASK,
    }
}

/// Decodes and validates in one step.
pub fn decode_body(seed: u64) -> SpatialResult<(ChunkCoord, u64)> {
    decode(seed).validate()
}

/// True for seeds no valid chunk/index pair can produce.
pub fn is_reserved(seed: u64) -> bool {
    seed < INDEX_LIMIT
}
